// Common functions for testing

pub mod loader;
