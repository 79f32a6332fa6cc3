//! Test harness for the enigma workspace.
//!
//! Machine-builder helpers and proptest strategies shared by the
//! integration test suite. The strategies generate whole valid
//! configurations - rotor orders drawn from the catalogue without
//! duplicates, positions, ring settings, and disjoint plugboard pairs - so
//! property tests can range over the full configuration space instead of a
//! few hand-picked setups.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use enigma_core::{Machine, MachineError, alphabet};
use proptest::prelude::*;

/// A full machine configuration in string form.
///
/// Building twice from the same configuration yields two independent
/// machines with identical state - the determinism oracle for the
/// round-trip tests.
#[derive(Debug, Clone)]
pub struct MachineConfig {
    /// Rotor order, left to right.
    pub rotors: String,
    /// Starting window letters, one per rotor.
    pub positions: String,
    /// Ring settings, one per rotor.
    pub rings: String,
    /// Plugboard pairs.
    pub plugboard: String,
}

impl MachineConfig {
    /// Build a fresh machine from this configuration.
    pub fn build(&self) -> Result<Machine, MachineError> {
        Machine::new(&self.rotors, &self.positions, &self.rings, &self.plugboard)
    }
}

/// The daily-key configuration used by the message-flow tests.
pub fn daily_key() -> MachineConfig {
    MachineConfig {
        rotors: "I II V".to_string(),
        positions: String::new(),
        rings: "06 22 14".to_string(),
        plugboard: "PO ML IU KJ NH YT GB VF RE DC".to_string(),
    }
}

/// Strategy over valid machine configurations.
pub fn config_strategy() -> impl Strategy<Value = MachineConfig> {
    let numerals = vec!["I", "II", "III", "IV", "V"];
    prop::sample::subsequence(numerals, 3..=5).prop_shuffle().prop_flat_map(|order| {
        let rotor_count = order.len();
        (
            Just(order),
            prop::collection::vec(0usize..alphabet::ALPHABET_LEN, rotor_count),
            prop::collection::vec(1usize..=alphabet::ALPHABET_LEN, rotor_count),
            plugboard_strategy(),
        )
            .prop_map(|(order, positions, rings, plugboard)| MachineConfig {
                rotors: order.join(" "),
                positions: positions
                    .iter()
                    .map(|&index| alphabet::symbol_at(index).to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
                rings: rings.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "),
                plugboard,
            })
    })
}

/// Strategy over valid plugboard pair strings, zero to ten disjoint pairs.
pub fn plugboard_strategy() -> impl Strategy<Value = String> {
    let letters: Vec<char> = ('A'..='Z').collect();
    prop::sample::subsequence(letters, 0..=20).prop_shuffle().prop_map(|letters| {
        letters
            .chunks_exact(2)
            .map(|pair| format!("{}{}", pair[0], pair[1]))
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// Strategy over alphabet-and-space plaintext.
pub fn plaintext_strategy() -> impl Strategy<Value = String> {
    "[A-Z ]{0,60}"
}
