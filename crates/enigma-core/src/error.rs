//! Machine configuration error types.

use thiserror::Error;

/// Errors from machine configuration.
///
/// All of these are raised eagerly - at [`Machine::new`](crate::Machine::new)
/// or at the specific setter call - never deferred to the first `encode`.
/// `encode` itself cannot fail: characters outside the alphabet pass through
/// unchanged by design.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// Rotor-order string names an unknown, duplicate, or insufficient set
    /// of rotors.
    #[error("invalid rotor order: {reason}")]
    InvalidRotorOrder {
        /// Description of the rejected order.
        reason: String,
    },

    /// A rotor position token is not a single alphabet symbol, or the
    /// position string does not cover the rotor bank.
    #[error("invalid rotor position: {reason}")]
    InvalidRotorPosition {
        /// Description of the rejected position.
        reason: String,
    },

    /// A ring setting is outside `1..=26`, or the ring string does not
    /// cover the rotor bank.
    #[error("invalid ring setting: {reason}")]
    InvalidRingSetting {
        /// Description of the rejected setting.
        reason: String,
    },

    /// A plugboard pair token is malformed, self-paired, or reuses a symbol
    /// already assigned to another pair.
    #[error("invalid plugboard pair: {reason}")]
    InvalidPlugboardPair {
        /// Description of the rejected pair.
        reason: String,
    },
}
