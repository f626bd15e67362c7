//! Extraction of BVerfGE citations from free text.
//!
//! Extraction runs in two stages. The chain pattern finds every span that
//! starts with `BVerfGE` and continues with up to twenty `volume, page
//! [pincite]` groups, optionally closed by `st. Rspr.` or `m.w.N.`. The
//! reference pattern then splits each span into its individual citations.
//!
//! Square brackets around pincites are replaced by [`PINCITE_MARKER`]
//! before either pattern runs, so both stages share one delimiter.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::chain::ReferenceChain;
use crate::config::{CITATION_PREFIX, MAX_CHAIN_LINKS, PINCITE_MARKER};
use crate::error::Result;
use crate::reference::Reference;

/// Stage one: a complete citation chain.
#[allow(clippy::expect_used)] // Pattern is built from constants and guaranteed to be valid
static CHAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let marker = regex::escape(&PINCITE_MARKER.to_string());
    let pattern = format!(
        r"{CITATION_PREFIX}(?:;?\s?\d{{1,3}},?\s?\d{{1,3}}\s?f{{0,2}}\.?(?:\s?{marker}.+?{marker})?){{1,{MAX_CHAIN_LINKS}}}(?:;?\s?(?:st\.?\s?Rspr\.?|m\.?w\.?N\.))?"
    );
    Regex::new(&pattern).expect("valid regex")
});

/// Stage two: one reference inside a chain.
#[allow(clippy::expect_used)] // Pattern is built from constants and guaranteed to be valid
static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let marker = regex::escape(&PINCITE_MARKER.to_string());
    let pattern = format!(
        r"(?P<band>\d{{1,3}}),?\s?(?P<aseite>\d{{1,3}}\s?f{{0,2}}\.?)\s?(?P<ref>{marker}.+?{marker})?"
    );
    Regex::new(&pattern).expect("valid regex")
});

/// A citation chain found in a text, with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitationMatch {
    /// Byte offset where the chain starts.
    pub start: usize,
    /// Byte offset just past the end of the chain.
    pub end: usize,
    /// The chain as written in the source, brackets included.
    pub text: String,
    /// The parsed references.
    pub chain: ReferenceChain,
}

impl CitationMatch {
    /// Byte range of the chain in the searched text.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Replace `[` and `]` with the pincite marker.
///
/// Both brackets and the marker are single bytes, so byte offsets into the
/// result are valid offsets into `text`. Text without brackets is borrowed.
///
/// # Examples
/// ```
/// use bverfgex_verweis::substitute_brackets;
///
/// assert_eq!(substitute_brackets("BVerfGE 58, 300 [336]"), "BVerfGE 58, 300 -336-");
/// ```
pub fn substitute_brackets(text: &str) -> Cow<'_, str> {
    if text.contains(['[', ']']) {
        Cow::Owned(
            text.chars()
                .map(|c| if c == '[' || c == ']' { PINCITE_MARKER } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

/// Strip pincite markers from a captured pincite.
///
/// An absent pincite stays absent.
pub fn clean_ref(pincite: Option<&str>) -> Option<String> {
    pincite.map(|p| p.replace(PINCITE_MARKER, ""))
}

/// Split one citation chain into its references.
///
/// # Errors
/// `VerweisError::TypeMismatch` if the text contains no reference at all.
///
/// # Examples
/// ```
/// use bverfgex_verweis::decompose;
///
/// let chain = decompose("BVerfGE 37, 132 -140-; 50, 290 -339-").unwrap();
/// assert_eq!(chain.len(), 2);
/// assert_eq!(chain.at(1).unwrap().pincite(), Some("339"));
/// ```
pub fn decompose(chain_text: &str) -> Result<ReferenceChain> {
    let marked = substitute_brackets(chain_text);
    let references: Vec<Reference> = REFERENCE_PATTERN
        .captures_iter(&marked)
        .map(|caps| {
            let pincite = clean_ref(caps.name("ref").map(|m| m.as_str()));
            Reference::new(&caps["band"], &caps["aseite"], pincite.as_deref())
        })
        .collect();

    ReferenceChain::try_from(references)
}

/// Find all citation chains in a text, with their locations.
///
/// Spans the reference pattern cannot split are skipped.
pub fn find_citation_matches(text: &str) -> Vec<CitationMatch> {
    let marked = substitute_brackets(text);
    let matches: Vec<CitationMatch> = CHAIN_PATTERN
        .find_iter(&marked)
        .filter_map(|m| match decompose(m.as_str()) {
            Ok(chain) => Some(CitationMatch {
                start: m.start(),
                end: m.end(),
                text: text.get(m.range()).unwrap_or(m.as_str()).to_string(),
                chain,
            }),
            Err(e) => {
                tracing::debug!(span = m.as_str(), error = %e, "Dropping unparseable citation");
                None
            }
        })
        .collect();

    tracing::debug!(chains = matches.len(), "Searched text for citations");
    matches
}

/// Find all citation chains in a text, in document order.
///
/// Returns an empty vector when the text cites nothing.
///
/// # Examples
/// ```
/// use bverfgex_verweis::find_citations;
///
/// let chains = find_citations("vgl. BVerfGE 58, 300 [336]; st. Rspr.");
/// assert_eq!(chains.len(), 1);
/// assert_eq!(chains[0].to_string(), "BVerfGE 58, 300 [336]");
///
/// assert!(find_citations("no citation here").is_empty());
/// ```
pub fn find_citations(text: &str) -> Vec<ReferenceChain> {
    find_citation_matches(text)
        .into_iter()
        .map(|m| m.chain)
        .collect()
}
