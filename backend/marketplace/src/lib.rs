//! Marketplace link synthesis for snapfind.
//!
//! Pure computation: a static catalog of marketplaces, URL construction from
//! a product name, and an availability filter behind the
//! [`AvailabilityOracle`] seam. The shipped oracle is synthetic; swapping in
//! a real search-count lookup must not touch URL construction.

pub mod catalog;
pub mod oracle;
pub mod synth;

pub use catalog::{CandidateSpec, CATALOG};
pub use oracle::{AvailabilityOracle, SyntheticAvailability};
pub use synth::{build_candidates, search_marketplaces};
