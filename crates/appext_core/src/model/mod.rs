//! Domain vocabulary for app extension targets.
//!
//! # Responsibility
//! - Define the closed set of extension categories this crate understands.
//!
//! # Invariants
//! - Every lookup table in the crate is keyed by `ExtensionType` and matched
//!   exhaustively, so a new variant must be wired everywhere before it builds.

pub mod extension_type;
