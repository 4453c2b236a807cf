//! Configuration for seeding exams.
//!
//! Exams can be built without touching this layer, but it gives test runners
//! a convenient way to keep an exam's name, pragmas, and run-level flags in a
//! TOML file.  The TOML layout is a convenience for such runners rather than
//! part of the reporting contract: the only format an exam itself produces is
//! its TAP report.

pub mod err;
pub mod top;

pub use err::{Error, Result};
pub use top::{Config, PragmaConfig};
