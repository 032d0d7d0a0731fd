//! Registrar - student registration seed-and-report tool
//!
//! This library crate exposes the routines behind the `registrar` binary for
//! integration testing.

pub mod config;
pub mod report;
pub mod routine;
