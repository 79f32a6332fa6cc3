//! Decoded stream to legible text.
//!
//! Undoes the transmission conventions after decryption: strips display
//! grouping, turns lone `X` separators back into spaces, expands code
//! words to digits and digraphs to punctuation, restores `KK...KK`
//! brackets and standalone-`K` full stops, and merges words the operator
//! repeated for safety.
//!
//! The rewrites run in the same order the conventions were applied in
//! reverse, so digit code words are consumed before `Q`/`UD`-style
//! digraphs can split them.

/// Code words back to digits, applied in order.
const NUMBERS: &[(&str, &str)] = &[
    ("NULL", "0"),
    ("CENTA", "00"),
    ("MILLE", "000"),
    ("MYRIA", "0000"),
    ("EINZ", "1"),
    ("EINS", "1"),
    ("ZWO", "2"),
    ("DREI", "3"),
    ("VIER", "4"),
    ("FUNF", "5"),
    ("SEQS", "6"),
    ("SIEBEN", "7"),
    ("AQT", "8"),
    ("NEUN", "9"),
];

/// Digraphs back to punctuation, applied in order.
const SPECIAL: &[(&str, &str)] = &[("Q", "CH"), ("UD", "?"), ("XX", ":"), ("YY", "-"), ("J", "*")];

/// Rewrite a decoded transmission stream into legible text.
pub fn to_plain_text(decoded: &str) -> String {
    let mut text: String = decoded.chars().filter(|c| *c != ' ').collect();
    text = expand_separators(&text);
    for (word, digits) in NUMBERS {
        text = text.replace(word, digits);
    }
    for (code, plain) in SPECIAL {
        text = text.replace(code, plain);
    }
    text = restore_brackets(&text);
    text = restore_full_stops(&text);
    text = text.replace(" .", ".");
    merge_repeated_words(&text)
}

/// Turn each lone `X` into a space. Runs of two or more stay untouched -
/// `XX` still has to become `:` later.
fn expand_separators(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut run = 0usize;
    for symbol in text.chars() {
        if symbol == 'X' {
            run += 1;
            continue;
        }
        flush_separator_run(&mut output, run);
        run = 0;
        output.push(symbol);
    }
    flush_separator_run(&mut output, run);
    output
}

fn flush_separator_run(output: &mut String, run: usize) {
    if run == 1 {
        output.push(' ');
    } else {
        for _ in 0..run {
            output.push('X');
        }
    }
}

/// Convert `KK...KK` spans into `(...)`, alternating open and close.
fn restore_brackets(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut symbols = text.chars().peekable();
    let mut inside = false;
    while let Some(symbol) = symbols.next() {
        if symbol == 'K' && symbols.peek() == Some(&'K') {
            symbols.next();
            output.push(if inside { ')' } else { '(' });
            inside = !inside;
        } else {
            output.push(symbol);
        }
    }
    output
}

/// Convert each standalone `K` word into a full stop.
fn restore_full_stops(text: &str) -> String {
    let words: Vec<&str> = text.split(' ').map(|word| if word == "K" { "." } else { word }).collect();
    words.join(" ")
}

/// Merge immediately repeated words - operators doubled important words,
/// the reader keeps one.
fn merge_repeated_words(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous: Option<&str> = None;
    for word in text.split(' ') {
        if !word.is_empty() && previous == Some(word) {
            continue;
        }
        if previous.is_some() {
            output.push(' ');
        }
        output.push_str(word);
        previous = Some(word);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_become_spaces() {
        assert_eq!(to_plain_text("MEETXMEXATXSTATION"), "MEET ME AT STATION");
    }

    #[test]
    fn display_grouping_is_stripped() {
        assert_eq!(to_plain_text("MEETX MEXAT XSTAT ION  "), "MEET ME AT STATION");
    }

    #[test]
    fn code_words_become_digits() {
        assert_eq!(to_plain_text("EINSAQTDREINULL"), "1830");
        assert_eq!(to_plain_text("NEUNMYRIA"), "90000");
        assert_eq!(to_plain_text("EINZ"), "1");
    }

    #[test]
    fn digraphs_become_punctuation() {
        assert_eq!(to_plain_text("WIEUD"), "WIE?");
        assert_eq!(to_plain_text("EINSAQTXXDREINULL"), "18:30");
        assert_eq!(to_plain_text("NORDYYOST"), "NORD-OST");
        assert_eq!(to_plain_text("WETTERBERIQT"), "WETTERBERICHT");
    }

    #[test]
    fn brackets_alternate() {
        assert_eq!(to_plain_text("KKGEHEIMKK"), "(GEHEIM)");
        assert_eq!(to_plain_text("VORXKKSEHRKKXLAUT"), "VOR (SEHR) LAUT");
    }

    #[test]
    fn standalone_k_is_a_full_stop() {
        assert_eq!(to_plain_text("HALTXKXENDE"), "HALT. ENDE");
    }

    #[test]
    fn repeated_words_merge() {
        assert_eq!(to_plain_text("ANGRIFFXANGRIFFXUMXDREI"), "ANGRIFF UM 3");
    }

    #[test]
    fn digit_code_words_resolve_before_digraphs() {
        // AQT carries a Q; the number pass must consume it before Q -> CH.
        assert_eq!(to_plain_text("AQT"), "8");
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::transmit::normalize;

    /// Words that survive the codec unchanged: no letters that carry radio
    /// conventions and no substrings the receive pass would rewrite.
    fn survives_codec(word: &str) -> bool {
        const REWRITTEN: &[&str] =
            &["MILLE", "MYRIA", "EINZ", "EINS", "ZWO", "DREI", "VIER", "SIEBEN", "YY"];
        REWRITTEN.iter().all(|pattern| !word.contains(pattern))
    }

    proptest! {
        #[test]
        fn digit_strings_round_trip(digits in "[0-9]{1,8}") {
            prop_assert_eq!(to_plain_text(&normalize(&digits)), digits);
        }

        #[test]
        fn plain_words_round_trip(
            words in prop::collection::vec("[ABDEFGHILMNOPRSTVWYZ]{1,8}", 1..6),
        ) {
            prop_assume!(words.iter().all(|word| survives_codec(word)));
            prop_assume!(words.windows(2).all(|pair| pair[0] != pair[1]));
            let text = words.join(" ");
            prop_assert_eq!(to_plain_text(&normalize(&text)), text);
        }
    }
}
