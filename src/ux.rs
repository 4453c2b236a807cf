//! User-facing output of exam results.

pub mod out;
