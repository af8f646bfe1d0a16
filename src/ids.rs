//! Opaque identifier generation for units and issues.
//!
//! Per `spec.md` §9, identifiers only need to be unique within one process
//! run; tests must not depend on specific values. A monotonic counter is
//! sufficient for that; no UUID dependency is needed.

use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generates a new opaque id with the given prefix (`"u"` for units, `"i"`
/// for issues, `"f"` for files). Not a stable format — callers must treat
/// it as opaque.
pub fn next_id(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{n:x}")
}
