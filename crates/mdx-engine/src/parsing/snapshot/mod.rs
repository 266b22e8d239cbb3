//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders parsed blocks as a stable, line-per-fact text
//!   dump for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (html wrapper
//!   matches kind, children present exactly on group kinds, code blocks carry
//!   a language)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
