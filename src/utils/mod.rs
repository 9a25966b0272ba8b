//! Common utilities for the library.
//!

pub mod cath;
pub mod error;
pub mod log;
pub mod reader;
