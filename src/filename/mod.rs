// src/filename/mod.rs

//! Filename increment engine.
//!
//! Pure string transforms, no IO:
//! - strip extensions ([`extension`]),
//! - find the last run of digits and add one to it ([`number`]),
//! - keep zero padding and splice the result back ([`increment`]).
//!
//! Every input produces an output; names without digits get `" (1)"`.

pub mod extension;
pub mod increment;
pub mod number;

pub use extension::{remove_extensions, remove_last_extension};
pub use increment::{
    increment, increment_last_number, increment_with, IncrementOutcome, NO_NUMBER_SUFFIX,
};
pub use number::{count_leading_zeros, find_last_number, increment_digits, ParsedNumber};
