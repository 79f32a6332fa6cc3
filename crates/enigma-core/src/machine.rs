//! The machine: rotor bank, plugboard, reflector, and the stepping
//! pipeline.
//!
//! ## Responsibilities
//!
//! - Construction: parse the rotor order, positions, ring settings, and
//!   plugboard strings, validating everything eagerly
//! - Stepping: advance the three rightmost rotors per keypress, including
//!   the double-stepping anomaly
//! - Substitution: run each alphabet symbol through the six-stage pipeline
//! - Session keys: establish per-message starting positions from indicator
//!   groups
//!
//! ## Stepping
//!
//! The rightmost rotor advances on every keypress. When it lands on its
//! turnover notch, the middle rotor advances with the next keypress's
//! linkage - and if that advance leaves the middle rotor one position short
//! of its own notch, the middle and left rotors both advance on the
//! following keypress. That second advance is the historical double-step:
//! the middle rotor moves on two consecutive keypresses.
//!
//! ```text
//! A-D-V   right rotor reaches its turnover
//! A-E-W   middle rotor advances, now one short of its own notch
//! B-F-X   middle and left rotors double-step together
//! ```
//!
//! Stepping engages only the three rightmost rotors, as in the historical
//! machine; rotors further left substitute but never move.

use crate::{
    alphabet::{index_of, symbol_at},
    catalogue::RotorId,
    error::MachineError,
    plugboard::Plugboard,
    reflector::Reflector,
    rotor::Rotor,
};

/// A configured cipher machine.
///
/// Owns its rotors by value: two machines never share rotor state, so one
/// session's stepping can never corrupt another's. Characters must be fed
/// strictly in sequence - each call to [`encode`](Self::encode) consumes
/// and updates state that the next call depends on.
pub struct Machine {
    /// Rotors left to right; the rightmost is the fastest.
    rotors: Vec<Rotor>,
    plugboard: Plugboard,
    reflector: Reflector,
    /// Set when the middle rotor sits one position short of its notch;
    /// consumed by the next keypress.
    pending_double_step: bool,
}

impl Machine {
    /// Build a machine from its four configuration strings.
    ///
    /// - `rotor_order`: space-separated Roman numerals `I`-`V`, left to
    ///   right, at least three, no duplicates (e.g. `"I II V"`).
    /// - `positions`: space-separated window letters, one per rotor; empty
    ///   defaults every rotor to `A`.
    /// - `ring_settings`: space-separated values, each a number in `1..=26`
    ///   or a single letter (1-based); empty defaults every ring to `1`.
    /// - `plugboard_pairs`: space-separated two-letter pairs; empty means no
    ///   plugboard wiring.
    ///
    /// # Errors
    ///
    /// Returns the specific `MachineError` kind for the first invalid piece
    /// of configuration. Nothing is deferred: a machine that constructs
    /// successfully cannot fail to encode.
    pub fn new(
        rotor_order: &str,
        positions: &str,
        ring_settings: &str,
        plugboard_pairs: &str,
    ) -> Result<Self, MachineError> {
        let mut rotors = Vec::new();
        let mut selected: Vec<RotorId> = Vec::new();
        for token in rotor_order.split_whitespace() {
            let id = RotorId::parse(token).ok_or_else(|| MachineError::InvalidRotorOrder {
                reason: format!("unknown rotor {token:?}"),
            })?;
            if selected.contains(&id) {
                return Err(MachineError::InvalidRotorOrder {
                    reason: format!("rotor {id} selected twice"),
                });
            }
            selected.push(id);
            rotors.push(Rotor::new(id));
        }
        if rotors.len() < 3 {
            return Err(MachineError::InvalidRotorOrder {
                reason: format!("{} rotors named, stepping needs at least three", rotors.len()),
            });
        }

        let mut machine = Self {
            rotors,
            plugboard: Plugboard::new(plugboard_pairs)?,
            reflector: Reflector::wide_b(),
            pending_double_step: false,
        };

        machine.apply_ring_settings(ring_settings)?;
        machine.set_positions(positions)?;

        tracing::debug!(rotors = %rotor_order.trim(), "machine configured");

        Ok(machine)
    }

    /// Number of rotors in the bank.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// Window letters left to right, e.g. `"ADV"`.
    pub fn rotor_positions(&self) -> String {
        self.rotors.iter().map(Rotor::window).collect()
    }

    /// Set rotor positions from a string of window letters, one token per
    /// rotor left to right. An empty string resets every rotor to `A`.
    ///
    /// # Errors
    ///
    /// Returns `MachineError::InvalidRotorPosition` if a token is not a
    /// single alphabet symbol or the token count does not match the bank.
    pub fn set_positions(&mut self, positions: &str) -> Result<(), MachineError> {
        if positions.trim().is_empty() {
            for rotor in &mut self.rotors {
                rotor.set_position('A')?;
            }
            return Ok(());
        }

        let tokens: Vec<&str> = positions.split_whitespace().collect();
        if tokens.len() != self.rotors.len() {
            return Err(MachineError::InvalidRotorPosition {
                reason: format!(
                    "expected {} position tokens, got {}",
                    self.rotors.len(),
                    tokens.len()
                ),
            });
        }
        for (rotor, token) in self.rotors.iter_mut().zip(tokens) {
            let mut symbols = token.chars();
            match (symbols.next(), symbols.next()) {
                (Some(symbol), None) => rotor.set_position(symbol)?,
                _ => {
                    return Err(MachineError::InvalidRotorPosition {
                        reason: format!("{token:?} is not a single symbol"),
                    });
                },
            }
        }
        Ok(())
    }

    /// Encode or decode `text` - the machine is self-reciprocal, so these
    /// are the same operation.
    ///
    /// Input folds to uppercase. Every alphabet symbol advances the rotors
    /// and runs through the substitution pipeline; any other character is
    /// appended to the output unchanged and consumes no stepping cycle.
    pub fn encode(&mut self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for raw in text.chars() {
            let symbol = raw.to_ascii_uppercase();
            match index_of(symbol) {
                Some(index) => {
                    self.step_rotors();
                    output.push(symbol_at(self.substitute(index)));
                },
                None => output.push(symbol),
            }
        }
        output
    }

    /// Establish the message key for decryption.
    ///
    /// Sets the rotors to `group_setting`, decodes `encrypted_indicator` to
    /// recover the per-message starting position, then sets the rotors to
    /// that recovered position ready for the message body.
    ///
    /// # Errors
    ///
    /// Returns `MachineError::InvalidRotorPosition` if either group is not
    /// one alphabet symbol per rotor.
    pub fn establish_decrypt_indicator(
        &mut self,
        group_setting: &str,
        encrypted_indicator: &str,
    ) -> Result<(), MachineError> {
        self.apply_indicator(group_setting)?;
        let recovered = self.encode(encrypted_indicator);
        self.apply_indicator(&recovered)
    }

    /// Establish the message key for encryption.
    ///
    /// Sets the rotors to `group_setting`, encodes `chosen_indicator` to
    /// produce the transmittable encrypted indicator, then sets the rotors
    /// to `chosen_indicator` for the message body. Returns the group
    /// setting and the encrypted indicator, space-separated, for
    /// transmission.
    ///
    /// # Errors
    ///
    /// Returns `MachineError::InvalidRotorPosition` if either group is not
    /// one alphabet symbol per rotor.
    pub fn establish_encrypt_indicator(
        &mut self,
        group_setting: &str,
        chosen_indicator: &str,
    ) -> Result<String, MachineError> {
        self.apply_indicator(group_setting)?;
        let encrypted = self.encode(chosen_indicator);
        self.apply_indicator(chosen_indicator)?;
        Ok(format!("{} {encrypted}", group_setting.trim().to_ascii_uppercase()))
    }

    /// Set rotor positions from an indicator group, one symbol per rotor.
    fn apply_indicator(&mut self, group: &str) -> Result<(), MachineError> {
        let symbols: Vec<char> = group.trim().chars().collect();
        if symbols.len() != self.rotors.len() {
            return Err(MachineError::InvalidRotorPosition {
                reason: format!(
                    "indicator {group:?} must carry one symbol per rotor ({})",
                    self.rotors.len()
                ),
            });
        }
        for (rotor, symbol) in self.rotors.iter_mut().zip(symbols) {
            rotor.set_position(symbol)?;
        }
        Ok(())
    }

    /// Advance rotor positions for one keypress.
    ///
    /// Order matters: the unconditional right step first, then the deferred
    /// double step left over from the previous keypress, then turnover
    /// propagation with the double-step prediction for the next keypress.
    fn step_rotors(&mut self) {
        let right = self.rotors.len() - 1;
        let mid = right - 1;
        let left = right - 2;

        self.rotors[right].rotate();

        if self.pending_double_step {
            self.rotors[mid].rotate();
            self.rotors[left].rotate();
            self.pending_double_step = false;
            tracing::trace!(windows = %self.rotor_positions(), "double step");
        }

        if self.rotors[right].at_notch() {
            self.rotors[mid].rotate();
            if self.rotors[mid].one_step_from_notch() {
                self.pending_double_step = true;
            }
            tracing::trace!(windows = %self.rotor_positions(), "turnover");
        }
    }

    /// Run one alphabet index through the six-stage substitution pipeline:
    /// plugboard, rotors right to left, reflector, rotors left to right,
    /// plugboard.
    fn substitute(&self, index: usize) -> usize {
        let mut index = self.plugboard.substitute(index);
        for rotor in self.rotors.iter().rev() {
            index = rotor.substitute_from_right(index);
        }
        index = self.reflector.reflect(index);
        for rotor in &self.rotors {
            index = rotor.substitute_from_left(index);
        }
        self.plugboard.substitute(index)
    }

    /// Apply ring settings from their configuration string.
    fn apply_ring_settings(&mut self, ring_settings: &str) -> Result<(), MachineError> {
        if ring_settings.trim().is_empty() {
            return Ok(());
        }

        let tokens: Vec<&str> = ring_settings.split_whitespace().collect();
        if tokens.len() != self.rotors.len() {
            return Err(MachineError::InvalidRingSetting {
                reason: format!(
                    "expected {} ring tokens, got {}",
                    self.rotors.len(),
                    tokens.len()
                ),
            });
        }
        for (rotor, token) in self.rotors.iter_mut().zip(tokens) {
            rotor.set_ring_setting(parse_ring_token(token)?)?;
        }
        Ok(())
    }
}

/// Parse one ring token: a number in `1..=26`, or a single letter taken as
/// its 1-based alphabet index.
fn parse_ring_token(token: &str) -> Result<usize, MachineError> {
    let mut symbols = token.chars();
    if let (Some(symbol), None) = (symbols.next(), symbols.next()) {
        if let Some(index) = index_of(symbol.to_ascii_uppercase()) {
            return Ok(index + 1);
        }
    }
    token.parse::<usize>().map_err(|_| MachineError::InvalidRingSetting {
        reason: format!("{token:?} is neither a number nor a letter"),
    })
}

impl std::fmt::Debug for Machine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Machine")
            .field("rotors", &self.rotors.iter().map(Rotor::id).collect::<Vec<_>>())
            .field("windows", &self.rotor_positions())
            .finish()
    }
}
