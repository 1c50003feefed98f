//! Line-level parsing primitives, one submodule per messenger family.
//!
//! These are the leaf functions the [`crate::parser`] assembler is built on:
//! format detection, field extraction, and noise filtering for a single line.

pub mod whatsapp;
