//! # mechlex (app library)
//!
//! Command-line front end for the mechlex-core catalog engine.
//!
//! The binary in `main.rs` is a thin shell over this library so the
//! loader and output shapes stay testable from `tests/`.

pub mod cli;
pub mod loader;
pub mod output;
