// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ring tracing
//!
//! Reconstructs an ordered vertex sequence from an unordered, undirected
//! segment set that is assumed to describe exactly one simple closed
//! walk (every vertex has exactly two incident segments).
//!
//! Known limitation: when the assumption is violated (open path,
//! branching, disjoint components) the trace silently returns whatever
//! prefix it managed to walk before stalling. Callers must reject
//! results with fewer than 3 distinct indices.

use floorgeo_core::Segment;
use rustc_hash::FxHashSet;

/// Trace an ordered vertex-index ring out of an unordered segment set.
///
/// Seeds from the first segment, then repeatedly scans the remaining
/// segments in their given order for one incident to the current
/// endpoint. The first match wins, which keeps the result deterministic
/// for a given input ordering. A trailing index equal to the first is
/// dropped, so a well-formed cycle of N vertices yields exactly N
/// indices with no closing duplicate.
pub fn trace_ring(segments: &[Segment]) -> Vec<usize> {
    let Some((first, rest)) = segments.split_first() else {
        return Vec::new();
    };
    let mut remaining: Vec<Segment> = rest.to_vec();

    let mut ordered = vec![first.a, first.b];
    let mut current = first.b;

    while let Some(pos) = remaining.iter().position(|s| s.is_incident_to(current)) {
        let next = remaining.remove(pos).other_end(current);
        ordered.push(next);
        current = next;
    }

    if ordered.len() > 1 && ordered.first() == ordered.last() {
        ordered.pop();
    }
    ordered
}

/// Number of distinct vertex indices in a traced ring
pub fn distinct_count(ring: &[usize]) -> usize {
    ring.iter().collect::<FxHashSet<_>>().len()
}
