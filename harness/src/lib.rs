//! Pathscope Harness: catalogue graphs, run configuration and reporting.
//!
//! The harness runs a configured search through `pathscope_search` and
//! packages the outcome as a [`runner::RunReport`]: the classic text report,
//! a JSON projection, and content digests of graph, result and expansion log.
//!
//! The harness does NOT implement search logic; it delegates to the stepper.
//! Catalogue graphs provide data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalogue;
pub mod config;
pub mod frames;
pub mod logging;
pub mod runner;
