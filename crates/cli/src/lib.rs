//! `stocktally-cli`
//!
//! **Responsibility:** the operator-facing interaction loop.
//!
//! This crate provides:
//! - The fixed menu command set and its numeric encoding
//! - Typed, re-prompting line input
//! - The session loop dispatching menu choices to catalog operations
//!
//! The loop is a **thin shell** around `stocktally-catalog`: it reads fields,
//! calls one catalog operation, prints the result or the error, and never
//! holds state of its own. All I/O goes through generic `BufRead`/`Write`
//! seams so whole sessions are drivable from tests.

pub mod input;
pub mod menu;
pub mod session;
