// File: mod.rs

//! # Workflows
//! This module contains the workflows for the CLI.
//! `make` builds a best-of-all matrix, `auc` benchmarks candidate sources
//! against it and `ordering` dumps all-against-all searches of a vector
//! database.

pub mod auc;
pub mod make;
pub mod ordering;
