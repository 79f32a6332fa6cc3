//! Transmission Text Codec
//!
//! The cipher engine only substitutes alphabet symbols, so everything else
//! in a message - digits, punctuation, word spacing - has to be rewritten
//! into letters before encryption and recovered afterwards. This crate
//! implements those rewrites using the radio conventions the historical
//! operators used: spelled-out code words for digits, letter digraphs for
//! punctuation, `X` as the word separator, and five-letter display blocks.
//!
//! # Design
//!
//! Both directions are pure string transformations with no state and no
//! knowledge of the machine. [`transmit`] prepares plaintext for
//! [`Machine::encode`]; [`receive`] turns a decoded stream back into
//! legible text.
//!
//! [`Machine::encode`]: ../enigma_core/machine/struct.Machine.html#method.encode

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod receive;
pub mod transmit;

pub use receive::to_plain_text;
pub use transmit::{format_blocks, normalize};
