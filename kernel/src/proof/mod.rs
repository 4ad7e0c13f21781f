//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Depends on nothing else in the kernel. Everything that needs a byte-exact
//! identity (search results, run reports) routes through here.

pub mod canon;
pub mod hash;
pub mod hash_domain;
