//! Constants shared by the citation grammar and the reference renderers.

/// Name of the official decision collection; every citation chain starts with it.
pub const CITATION_PREFIX: &str = "BVerfGE";

/// Single-character delimiter that stands in for `[` and `]` around pincites
/// while the citation patterns run.
pub const PINCITE_MARKER: char = '-';

/// Maximum number of references the chain pattern accepts after one prefix.
pub const MAX_CHAIN_LINKS: usize = 20;
