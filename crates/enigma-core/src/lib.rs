//! Enigma Cipher Engine
//!
//! This crate provides the rotor, plugboard, and reflector permutation
//! models plus the stepping and substitution pipeline that composes them
//! into a three-rotor Enigma machine.
//!
//! # Design
//!
//! All operations in this crate are deterministic - given the same machine
//! state, `encode` always produces the same output. There is no I/O, no
//! clock, and no randomness anywhere in the engine, enabling:
//!
//! - Exact reproduction of documented historical cipher behavior
//! - Byte-for-byte reproducible tests without any environment setup
//! - No coupling to driver-level concerns (text normalization, display)
//!
//! # Ownership
//!
//! Each [`Machine`] owns its rotors by value. The historical wirings live in
//! a read-only [`catalogue`] that is consulted only at construction time, so
//! two machines can never share mutable rotor state.
//!
//! # Stepping
//!
//! The stepping mechanism reproduces the mechanical linkage of the Enigma I
//! / M3 Army machine, including the double-stepping anomaly where the middle
//! rotor advances on two consecutive keypresses when it sits one position
//! short of its own turnover notch.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
pub mod catalogue;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use catalogue::RotorId;
pub use error::MachineError;
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
