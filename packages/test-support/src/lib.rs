//! Test support utilities
//!
//! This crate provides a recording connector test double and unified logging
//! initialization for db-select tests.

pub mod logging;
pub mod recording;
