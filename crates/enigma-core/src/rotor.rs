//! Rotor model.
//!
//! A rotor is a fixed wiring permutation mounted behind a letter ring that
//! can be rotated relative to the wiring (the ring setting) and that turns
//! as a whole once per keypress (the position). The same physical wiring is
//! traversed in both directions, so the inverse permutation is precomputed
//! at construction instead of being searched on every return pass.

use crate::{
    alphabet::{ALPHABET_LEN, index_of, symbol_at},
    catalogue::{self, RotorId},
    error::MachineError,
};

/// A single rotor: fixed wiring and notches, mutable ring setting and
/// position.
///
/// Wiring and notches are immutable once built. The ring setting is fixed
/// during machine construction; the position changes once per character via
/// [`rotate`](Self::rotate).
#[derive(Debug, Clone)]
pub struct Rotor {
    /// Which historical wiring this rotor carries.
    id: RotorId,
    /// Forward substitution for the right-to-left pass, index -> index.
    wiring: [u8; ALPHABET_LEN],
    /// Inverse substitution for the left-to-right pass.
    /// Invariant: `inverse[wiring[i]] == i` for all `i`.
    inverse: [u8; ALPHABET_LEN],
    /// Window positions at which the rotor to the left advances.
    notches: [bool; ALPHABET_LEN],
    /// Internal wiring rotation relative to the letter ring, in `[0, 26)`.
    ring_setting: usize,
    /// Current angular displacement, in `[0, 26)`.
    position: usize,
}

impl Rotor {
    /// Build an owned rotor from its catalogue wiring.
    ///
    /// Ring setting and position start at zero (ring `1`, window `A`).
    pub fn new(id: RotorId) -> Self {
        let spec = catalogue::spec_for(id);

        let mut wiring = [0u8; ALPHABET_LEN];
        let mut inverse = [0u8; ALPHABET_LEN];
        for (entry, &symbol) in spec.wiring.iter().enumerate() {
            let mapped = (symbol - b'A') as usize;
            wiring[entry] = mapped as u8;
            inverse[mapped] = entry as u8;
        }

        let mut notches = [false; ALPHABET_LEN];
        for &symbol in spec.notches {
            notches[(symbol - b'A') as usize] = true;
        }

        Self { id, wiring, inverse, notches, ring_setting: 0, position: 0 }
    }

    /// Which historical wiring this rotor carries.
    pub fn id(&self) -> RotorId {
        self.id
    }

    /// Set the ring setting from its 1-based dial value.
    ///
    /// # Errors
    ///
    /// Returns `MachineError::InvalidRingSetting` for values outside
    /// `1..=26`.
    pub fn set_ring_setting(&mut self, value: usize) -> Result<(), MachineError> {
        if !(1..=ALPHABET_LEN).contains(&value) {
            return Err(MachineError::InvalidRingSetting {
                reason: format!("{value} is outside 1..=26"),
            });
        }
        self.ring_setting = value - 1;
        Ok(())
    }

    /// Set the rotor position from the symbol shown in the window.
    ///
    /// # Errors
    ///
    /// Returns `MachineError::InvalidRotorPosition` if `symbol` is not an
    /// alphabet symbol.
    pub fn set_position(&mut self, symbol: char) -> Result<(), MachineError> {
        let index = index_of(symbol.to_ascii_uppercase()).ok_or_else(|| {
            MachineError::InvalidRotorPosition {
                reason: format!("{symbol:?} is not an alphabet symbol"),
            }
        })?;
        self.position = index;
        Ok(())
    }

    /// Advance the rotor by one position.
    pub fn rotate(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
    }

    /// True when the window sits on a turnover notch.
    ///
    /// Checked after the rotor has rotated: a `true` result means this
    /// keypress carried the rotor onto its turnover letter and the rotor to
    /// the left advances with it.
    pub fn at_notch(&self) -> bool {
        self.notches[self.position]
    }

    /// True when the next single step would land the window on a notch.
    pub fn one_step_from_notch(&self) -> bool {
        self.notches[(self.position + 1) % ALPHABET_LEN]
    }

    /// Current angular displacement, in `[0, 26)`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Symbol currently shown in the rotor window.
    pub fn window(&self) -> char {
        symbol_at(self.position)
    }

    /// Substitute an index entering from the right-hand (entry) side.
    ///
    /// The signal is shifted into wiring coordinates by the current position
    /// and ring setting, mapped through the forward wiring, then shifted
    /// back into the fixed frame of the machine.
    pub fn substitute_from_right(&self, index: usize) -> usize {
        let shifted = (index + ALPHABET_LEN - self.ring_setting + self.position) % ALPHABET_LEN;
        let mapped = self.wiring[shifted] as usize;
        (mapped + ALPHABET_LEN + self.ring_setting - self.position) % ALPHABET_LEN
    }

    /// Substitute an index entering from the left-hand (reflector) side.
    ///
    /// Same shift and unshift as [`substitute_from_right`], but through the
    /// precomputed inverse - the return path through the same physical
    /// wiring in the opposite direction.
    ///
    /// [`substitute_from_right`]: Self::substitute_from_right
    pub fn substitute_from_left(&self, index: usize) -> usize {
        let shifted = (index + ALPHABET_LEN - self.ring_setting + self.position) % ALPHABET_LEN;
        let mapped = self.inverse[shifted] as usize;
        (mapped + ALPHABET_LEN + self.ring_setting - self.position) % ALPHABET_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_consistent_with_wiring() {
        for id in [RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V] {
            let rotor = Rotor::new(id);
            for entry in 0..ALPHABET_LEN {
                assert_eq!(rotor.inverse[rotor.wiring[entry] as usize] as usize, entry);
            }
        }
    }

    #[test]
    fn forward_then_back_is_identity_at_any_state() {
        let mut rotor = Rotor::new(RotorId::IV);
        rotor.set_ring_setting(17).expect("valid ring");
        for step in 0..ALPHABET_LEN {
            for index in 0..ALPHABET_LEN {
                let through = rotor.substitute_from_right(index);
                assert_eq!(rotor.substitute_from_left(through), index, "step {step}");
            }
            rotor.rotate();
        }
    }

    #[test]
    fn rotor_i_at_rest_maps_a_to_e() {
        let rotor = Rotor::new(RotorId::I);
        assert_eq!(rotor.substitute_from_right(0), 4);
        assert_eq!(rotor.substitute_from_left(4), 0);
    }

    #[test]
    fn ring_setting_b_shifts_rotor_i_to_map_a_to_k() {
        let mut rotor = Rotor::new(RotorId::I);
        rotor.set_ring_setting(2).expect("valid ring");
        assert_eq!(rotor.substitute_from_right(0), 10);
    }

    #[test]
    fn rotation_shifts_the_mapping() {
        let mut rotor = Rotor::new(RotorId::III);
        rotor.rotate();
        // At position B the entry for A runs through the B contact ('D')
        // and comes back one step: C.
        assert_eq!(rotor.substitute_from_right(0), 2);
    }

    #[test]
    fn rotate_wraps_at_alphabet_end() {
        let mut rotor = Rotor::new(RotorId::I);
        rotor.set_position('Z').expect("valid position");
        rotor.rotate();
        assert_eq!(rotor.position(), 0);
        assert_eq!(rotor.window(), 'A');
    }

    #[test]
    fn notch_detection_tracks_the_window() {
        let mut rotor = Rotor::new(RotorId::I);
        rotor.set_position('Q').expect("valid position");
        assert!(!rotor.at_notch());
        assert!(rotor.one_step_from_notch());
        rotor.rotate();
        assert!(rotor.at_notch(), "rotor I turns over moving onto R");
    }

    #[test]
    fn ring_setting_bounds() {
        let mut rotor = Rotor::new(RotorId::II);
        assert!(rotor.set_ring_setting(1).is_ok());
        assert!(rotor.set_ring_setting(26).is_ok());
        assert!(matches!(
            rotor.set_ring_setting(0),
            Err(MachineError::InvalidRingSetting { .. })
        ));
        assert!(matches!(
            rotor.set_ring_setting(27),
            Err(MachineError::InvalidRingSetting { .. })
        ));
    }

    #[test]
    fn position_rejects_non_alphabet_symbols() {
        let mut rotor = Rotor::new(RotorId::V);
        assert!(matches!(
            rotor.set_position('7'),
            Err(MachineError::InvalidRotorPosition { .. })
        ));
        assert!(rotor.set_position('m').is_ok(), "case folds before lookup");
        assert_eq!(rotor.window(), 'M');
    }
}
