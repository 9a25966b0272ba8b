//! Retrieval benchmark of candidate sources against the best-of-all matrix.
//!
//! For each query domain the best-of-all matrix splits all domains into
//! positives and negatives ([`gold`]), a [`rank::Ranker`] orders the domains
//! by similarity to the query, and the ranking is scored by the area under
//! its ROC curve ([`roc`]). [`driver`] averages over queries and runs one
//! task per candidate source in parallel.

pub mod driver;
pub mod gold;
pub mod rank;
pub mod roc;
