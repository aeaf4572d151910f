//! Structural marker capabilities excluded from dependency analysis.
//!
//! Markers describe what a capability *is* (comparable, hashable,
//! serializable, thread-safe), never what it *needs*, so they contribute
//! nothing to a dependency stack.

/// Well-known structural trait names.
///
/// Covers the comparison/hash family, the derive staples, the auto-trait
/// concurrency markers, and the serde pair.
const STRUCTURAL_MARKERS: &[&str] = &[
    "Clone",
    "Copy",
    "Debug",
    "Default",
    "Eq",
    "PartialEq",
    "Ord",
    "PartialOrd",
    "Hash",
    "Send",
    "Sync",
    "Sized",
    "Unpin",
    "Serialize",
    "Deserialize",
];

/// Immutable lookup table of marker capability names.
///
/// Passed explicitly into the dependency collector rather than consulted as
/// a hidden global; [`MarkerSet::standard`] is the process-wide table.
#[derive(Debug, Clone, Copy)]
pub struct MarkerSet {
    names: &'static [&'static str],
}

impl MarkerSet {
    pub const fn standard() -> Self {
        MarkerSet {
            names: STRUCTURAL_MARKERS,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name)
    }
}
