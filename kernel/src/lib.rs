//! Pathscope Kernel: the immutable graph model and deterministic encodings.
//!
//! # API Surface
//!
//! - [`node::NodeId`] -- opaque, totally ordered node identifier
//! - [`graph::Graph`] / [`graph::GraphBuilder`] -- read-only adjacency with edge order and positions
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON encoder
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//!
//! # Module Dependency Direction
//!
//! `node` ← `graph`, and `proof` depends on nothing internal.
//!
//! The kernel knows nothing about search. Search state never lives here; a
//! `Graph` is built once and then only read.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod node;
pub mod proof;
