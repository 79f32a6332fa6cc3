//! Plaintext to transmission stream.
//!
//! Rewrites free text into the uppercase alphabet-only stream the machine
//! encrypts, and groups ciphertext into fixed-width display blocks. The
//! substitutions follow the historical German radio conventions: `X`
//! separates words, punctuation becomes letter digraphs, and digits are
//! spelled as code words, longest zero-run first.

/// Punctuation and digraph substitutions, applied in order.
const SPECIAL: &[(&str, &str)] = &[
    ("CH", "Q"),
    ("?", "UD"),
    (":", "XX"),
    ("-", "YY"),
    ("*", "J"),
    (".", "K"),
    (" ", "X"),
];

/// Digit substitutions, applied in order. Zero runs collapse to their
/// dedicated code words before single digits are spelled.
const NUMBERS: &[(&str, &str)] = &[
    ("0000", "MYRIA"),
    ("000", "MILLE"),
    ("00", "CENTA"),
    ("0", "NULL"),
    ("9", "NEUN"),
    ("8", "AQT"),
    ("7", "SIEBEN"),
    ("6", "SEQS"),
    ("5", "FUNF"),
    ("4", "VIER"),
    ("3", "DREI"),
    ("2", "ZWO"),
    ("1", "EINS"),
];

/// Rewrite free text into an uppercase transmission stream.
///
/// Characters with no convention (for example `,` or `!`) are left in
/// place; the machine passes them through unencrypted.
pub fn normalize(text: &str) -> String {
    let mut text = text.to_ascii_uppercase();
    for (plain, code) in SPECIAL {
        text = text.replace(plain, code);
    }
    for (digits, word) in NUMBERS {
        text = text.replace(digits, word);
    }
    text
}

/// Group a ciphertext stream into fixed-width blocks for display.
///
/// Existing whitespace is stripped first; the final block is padded with
/// spaces to full width.
pub fn format_blocks(text: &str, width: usize) -> String {
    let letters: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    if width == 0 {
        return letters.into_iter().collect();
    }

    let mut blocks = String::with_capacity(letters.len() + letters.len() / width);
    for chunk in letters.chunks(width) {
        if !blocks.is_empty() {
            blocks.push(' ');
        }
        blocks.extend(chunk);
        for _ in chunk.len()..width {
            blocks.push(' ');
        }
    }
    blocks
}
