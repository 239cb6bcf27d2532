//! Shared aggregation and classification logic for Shutterdesk tools.
//!
//! Everything here is a pure transform over already-fetched, in-memory
//! collections: consumers fetch raw records once per request, run one
//! synchronous pass, and hand the result to presentation. No module in
//! this crate does I/O or holds state between calls.

pub mod calendar;
pub mod charts;
pub mod dates;
pub mod error;
pub mod filter;
pub mod projects;
pub mod series;
pub mod status;
