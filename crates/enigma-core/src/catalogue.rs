//! Historical rotor and reflector wirings.
//!
//! Rotors I through V of the Enigma I / M3 Army machine and the wide B
//! reflector. This is a read-only table: machines consult it once at
//! construction time to initialize their own rotor copies, so no wiring
//! data is ever shared mutably between machine instances.

use std::fmt;

/// Identifies one of the five historical rotor wirings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorId {
    /// Rotor I, turnover Q -> R.
    I,
    /// Rotor II, turnover E -> F.
    II,
    /// Rotor III, turnover V -> W.
    III,
    /// Rotor IV, turnover J -> K.
    IV,
    /// Rotor V, turnover Z -> A.
    V,
}

impl RotorId {
    /// Parse a Roman-numeral token as written in a rotor-order string.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "I" => Some(Self::I),
            "II" => Some(Self::II),
            "III" => Some(Self::III),
            "IV" => Some(Self::IV),
            "V" => Some(Self::V),
            _ => None,
        }
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
        };
        write!(f, "{numeral}")
    }
}

/// Static wiring description for one rotor type.
///
/// `wiring` maps entry index to substituted symbol. `notches` holds the
/// window letters reached on the keypress that advances the next rotor;
/// the rotor reports [`at_notch`](crate::Rotor::at_notch) after it has
/// rotated onto one of them.
pub(crate) struct RotorSpec {
    /// Forward substitution, entry index -> symbol.
    pub wiring: &'static [u8; 26],
    /// Turnover window letters.
    pub notches: &'static [u8],
}

const ROTOR_I: RotorSpec = RotorSpec { wiring: b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", notches: b"R" };
const ROTOR_II: RotorSpec = RotorSpec { wiring: b"AJDKSIRUXBLHWTMCQGZNPYFVOE", notches: b"F" };
const ROTOR_III: RotorSpec = RotorSpec { wiring: b"BDFHJLCPRTXVZNYEIWGAKMUSQO", notches: b"W" };
const ROTOR_IV: RotorSpec = RotorSpec { wiring: b"ESOVPZJAYQUIRHXLNFTGKDCMWB", notches: b"K" };
const ROTOR_V: RotorSpec = RotorSpec { wiring: b"VZBRGITYUPSDNHLXAWMJQOFECK", notches: b"A" };

/// Wide B reflector wiring, a fixed-point-free involution.
pub(crate) const REFLECTOR_B: &[u8; 26] = b"YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Wiring description for a rotor type.
pub(crate) const fn spec_for(id: RotorId) -> &'static RotorSpec {
    match id {
        RotorId::I => &ROTOR_I,
        RotorId::II => &ROTOR_II,
        RotorId::III => &ROTOR_III,
        RotorId::IV => &ROTOR_IV,
        RotorId::V => &ROTOR_V,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_five_numerals() {
        assert_eq!(RotorId::parse("I"), Some(RotorId::I));
        assert_eq!(RotorId::parse("II"), Some(RotorId::II));
        assert_eq!(RotorId::parse("III"), Some(RotorId::III));
        assert_eq!(RotorId::parse("IV"), Some(RotorId::IV));
        assert_eq!(RotorId::parse("V"), Some(RotorId::V));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(RotorId::parse("VI"), None);
        assert_eq!(RotorId::parse("i"), None);
        assert_eq!(RotorId::parse(""), None);
        assert_eq!(RotorId::parse("1"), None);
    }

    #[test]
    fn display_round_trips() {
        for id in [RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V] {
            assert_eq!(RotorId::parse(&id.to_string()), Some(id));
        }
    }

    #[test]
    fn wirings_are_permutations() {
        for id in [RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V] {
            let mut seen = [false; 26];
            for &symbol in spec_for(id).wiring {
                let index = (symbol - b'A') as usize;
                assert!(!seen[index], "rotor {id} maps two entries to {}", symbol as char);
                seen[index] = true;
            }
        }
    }

    #[test]
    fn reflector_is_fixed_point_free_involution() {
        for (index, &symbol) in REFLECTOR_B.iter().enumerate() {
            let mapped = (symbol - b'A') as usize;
            assert_ne!(mapped, index, "reflector fixes {}", symbol as char);
            assert_eq!((REFLECTOR_B[mapped] - b'A') as usize, index);
        }
    }
}
