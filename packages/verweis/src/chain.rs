//! Citation chains (string citations) of BVerfGE references.
//!
//! A chain such as `BVerfGE 37, 132 [140]; 50, 290 [339]; 52, 1 [31]`
//! cites several decisions after a single collection prefix. It is stored
//! as a non-empty, ordered list of [`Reference`] values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::config::CITATION_PREFIX;
use crate::error::{Result, VerweisError};
use crate::reference::Reference;

const EXPECTED_INPUT: &str = "a reference or a non-empty sequence of references";

/// Input accepted by [`ReferenceChain::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainInput {
    /// One reference, wrapped into a chain of length one.
    Single(Reference),
    /// References in citation order.
    Sequence(Vec<Reference>),
}

/// Ordered, non-empty sequence of references from one citation.
///
/// # Examples
/// ```
/// use bverfgex_verweis::{Reference, ReferenceChain};
///
/// let chain = ReferenceChain::try_from(vec![
///     Reference::new("37", "132", Some("140")),
///     Reference::new("50", "290", Some("339")),
/// ])
/// .unwrap();
///
/// assert_eq!(chain.len(), 2);
/// assert_eq!(chain.to_string(), "BVerfGE 37, 132 [140]; 50, 290 [339]");
/// assert_eq!(chain.short_forms(), vec!["BVerfGE37_132", "BVerfGE50_290"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Value")]
pub struct ReferenceChain {
    references: Vec<Reference>,
}

impl ReferenceChain {
    /// Build a chain from a single reference or a sequence of references.
    ///
    /// # Errors
    /// `VerweisError::TypeMismatch` if the sequence is empty.
    pub fn new(input: ChainInput) -> Result<Self> {
        match input {
            ChainInput::Single(reference) => Ok(Self {
                references: vec![reference],
            }),
            ChainInput::Sequence(references) if references.is_empty() => {
                Err(VerweisError::type_mismatch(EXPECTED_INPUT, "an empty sequence"))
            }
            ChainInput::Sequence(references) => Ok(Self { references }),
        }
    }

    /// Number of references in the chain, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Chains are never empty; provided for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Bounds-checked access to the reference at `index`.
    ///
    /// # Errors
    /// `VerweisError::IndexOutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&Reference> {
        self.references
            .get(index)
            .ok_or(VerweisError::IndexOutOfRange {
                index,
                len: self.references.len(),
            })
    }

    /// Reference at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Reference> {
        self.references.get(index)
    }

    /// The first cited reference.
    #[must_use]
    pub fn first(&self) -> &Reference {
        // Construction guarantees at least one element.
        &self.references[0]
    }

    /// Iterate over the references in citation order.
    ///
    /// Every call starts again at the first reference.
    pub fn iter(&self) -> std::slice::Iter<'_, Reference> {
        self.references.iter()
    }

    /// Copy the references into a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Reference> {
        self.references.clone()
    }

    /// Consume the chain and return its references.
    #[must_use]
    pub fn into_vec(self) -> Vec<Reference> {
        self.references
    }

    /// Short forms of all references, e.g. `["BVerfGE58_300", "BVerfGE59_1"]`.
    #[must_use]
    pub fn short_forms(&self) -> Vec<String> {
        self.references
            .iter()
            .map(Reference::short_form)
            .filter(|short| !short.is_empty())
            .collect()
    }
}

impl From<Reference> for ReferenceChain {
    fn from(reference: Reference) -> Self {
        Self {
            references: vec![reference],
        }
    }
}

impl TryFrom<Vec<Reference>> for ReferenceChain {
    type Error = VerweisError;

    fn try_from(references: Vec<Reference>) -> Result<Self> {
        Self::new(ChainInput::Sequence(references))
    }
}

/// Build a chain from loosely typed data, e.g. previously exported JSON.
///
/// An object is read as a single reference, an array as a sequence of
/// reference objects. Anything else fails with `TypeMismatch`.
impl TryFrom<&Value> for ReferenceChain {
    type Error = VerweisError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Object(_) => reference_from_value(value)
                .map(ChainInput::Single)
                .map_err(|actual| VerweisError::type_mismatch(EXPECTED_INPUT, actual))
                .and_then(Self::new),
            Value::Array(items) => {
                let references = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        reference_from_value(item).map_err(|actual| {
                            VerweisError::type_mismatch(
                                EXPECTED_INPUT,
                                format!("{actual} at position {index}"),
                            )
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Self::new(ChainInput::Sequence(references))
            }
            other => Err(VerweisError::type_mismatch(EXPECTED_INPUT, value_kind(other))),
        }
    }
}

impl TryFrom<Value> for ReferenceChain {
    type Error = VerweisError;

    fn try_from(value: Value) -> Result<Self> {
        Self::try_from(&value)
    }
}

fn reference_from_value(value: &Value) -> std::result::Result<Reference, String> {
    if !value.is_object() {
        return Err(value_kind(value).to_string());
    }
    Reference::deserialize(value).map_err(|e| format!("an invalid reference object ({e})"))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Serialize for ReferenceChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.references)
    }
}

impl fmt::Display for ReferenceChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self
            .references
            .iter()
            .map(Reference::info_form)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{CITATION_PREFIX} {info}")
    }
}

impl<'a> IntoIterator for &'a ReferenceChain {
    type Item = &'a Reference;
    type IntoIter = std::slice::Iter<'a, Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.references.iter()
    }
}

impl IntoIterator for ReferenceChain {
    type Item = Reference;
    type IntoIter = std::vec::IntoIter<Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.references.into_iter()
    }
}

/// Count how often each decision is cited, keyed by short form.
///
/// Pincites are ignored, so `BVerfGE 58, 300 [336]` and `BVerfGE 58, 300`
/// count towards the same decision.
pub fn count_short_forms<'a>(
    chains: impl IntoIterator<Item = &'a ReferenceChain>,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for short in chains.into_iter().flat_map(ReferenceChain::short_forms) {
        *counts.entry(short).or_insert(0) += 1;
    }
    counts
}
