//! Round-trip property tests over the full configuration space.
//!
//! Two machines built from the same configuration are independent oracles
//! for each other: whatever one encodes, the other must decode, character
//! for character, for any rotor order, positions, rings, and plugboard.

use enigma_harness::{config_strategy, plaintext_strategy};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_inverts_encode(
        config in config_strategy(),
        plaintext in plaintext_strategy(),
    ) {
        let mut sender = config.build().expect("strategy yields valid configs");
        let mut receiver = config.build().expect("strategy yields valid configs");

        let ciphertext = sender.encode(&plaintext);
        prop_assert_eq!(receiver.encode(&ciphertext), plaintext);
    }

    #[test]
    fn encode_is_deterministic(
        config in config_strategy(),
        plaintext in plaintext_strategy(),
    ) {
        let mut first = config.build().expect("strategy yields valid configs");
        let mut second = config.build().expect("strategy yields valid configs");
        prop_assert_eq!(first.encode(&plaintext), second.encode(&plaintext));
    }

    #[test]
    fn no_letter_encodes_to_itself(config in config_strategy()) {
        let mut machine = config.build().expect("strategy yields valid configs");
        for symbol in 'A'..='Z' {
            let output = machine.encode(&symbol.to_string());
            prop_assert_ne!(output.chars().next(), Some(symbol));
        }
    }

    #[test]
    fn indicator_establishment_round_trips(
        config in config_strategy(),
        key_indices in prop::collection::vec(0usize..26, 3..=5),
        plaintext in plaintext_strategy(),
    ) {
        let mut sender = config.build().expect("strategy yields valid configs");
        prop_assume!(key_indices.len() == sender.rotor_count());

        let message_key: String =
            key_indices.iter().map(|&index| enigma_core::alphabet::symbol_at(index)).collect();
        let group_setting: String = "A".repeat(sender.rotor_count());

        let header = sender
            .establish_encrypt_indicator(&group_setting, &message_key)
            .expect("valid indicator groups");
        let ciphertext = sender.encode(&plaintext);

        let (group, encrypted) = header.split_once(' ').expect("header has two groups");
        let mut receiver = config.build().expect("strategy yields valid configs");
        receiver
            .establish_decrypt_indicator(group, encrypted)
            .expect("valid indicator groups");

        prop_assert_eq!(receiver.rotor_positions(), message_key);
        prop_assert_eq!(receiver.encode(&ciphertext), plaintext);
    }
}
