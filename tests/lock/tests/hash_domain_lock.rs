//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. The domain set has the expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique
//! 3. All domains are null-terminated and follow `PATHSCOPE::*::V1\0`
//! 4. No raw `PATHSCOPE::` domain literals in production source outside `hash_domain.rs`
//! 5. A known search result hashes to a pinned digest

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use pathscope_harness::catalogue::graph_by_name;
use pathscope_kernel::node::NodeId;
use pathscope_kernel::proof::hash::HashDomain;
use pathscope_search::search::breadth_first;

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        4,
        "expected 4 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"PATHSCOPE::"), "{domain} does not start with PATHSCOPE::");
        assert!(bytes.ends_with(b"::V1\0"), "{domain} does not end with ::V1\\0");
    }
}

/// Scan kernel/, search/, harness/ source for `b"PATHSCOPE::` literals.
/// The only file allowed to contain them is `hash_domain.rs`.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let pattern = "b\"PATHSCOPE::";
    let authority_file = "hash_domain.rs";
    let mut violations = Vec::new();

    for crate_dir in ["kernel", "search", "harness"] {
        for path in rust_files(&root.join(crate_dir).join("src")) {
            if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in production_lines(&content) {
                if line.contains(pattern) {
                    violations.push(format!("  {}:{}: {}", path.display(), i + 1, line.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "raw PATHSCOPE:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

/// Lines outside `#[cfg(test)]` blocks and comments, with their indices.
fn production_lines(content: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut depth: usize = 0;
    let mut skip_until: Option<usize> = None;
    let mut cfg_test_pending = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.contains("#[cfg(test)]") {
            cfg_test_pending = true;
            continue;
        }
        let opens = line.matches('{').count();
        let closes = line.matches('}').count();
        if cfg_test_pending && opens > 0 {
            skip_until = Some(depth);
            cfg_test_pending = false;
        }
        depth = depth.saturating_add(opens).saturating_sub(closes);
        if let Some(limit) = skip_until {
            if depth <= limit {
                skip_until = None;
            }
            continue;
        }
        if !trimmed.starts_with("//") {
            out.push((i, line));
        }
    }
    out
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(rust_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                results.push(path);
            }
        }
    }
    results
}

#[test]
fn production_scan_sees_files() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    assert!(
        !rust_files(&root.join("search").join("src")).is_empty(),
        "scanner must find the search sources, or the literal check proves nothing"
    );
}

/// Pinned digest of the 4-cycle BFS result. Any change to the result
/// encoding, the canonical JSON rules, or the domain prefix moves it.
#[test]
fn cycle_bfs_result_digest_is_pinned() {
    let entry = graph_by_name("Cycle-4").unwrap().unwrap();
    let result = breadth_first(&entry.graph, &NodeId::label("A"), &NodeId::label("C")).unwrap();
    assert_eq!(
        String::from_utf8(result.to_canonical_json_bytes().unwrap()).unwrap(),
        r#"{"algorithm":"bfs","cost":"2","found":true,"frontier_high_water":2,"path":["A","B","C"],"termination":"goal_reached","visited_count":4,"visited_order":["A","B","D","C"]}"#
    );
    assert_eq!(
        result.digest().unwrap().as_str(),
        "sha256:6c25c3af8f5fc2f7c9bf0c7bd72cd6653cfe9028dfbb5ec6e7c1e7d55d514979"
    );
}
