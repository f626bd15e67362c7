//! A single BVerfGE citation.
//!
//! BVerfGE citations have the notation `BVerfGE 58, 300 [336]`: the volume
//! of the official collection (58), the first page of the decision (300)
//! and an optional pincite, the precise page referred to (336).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::CITATION_PREFIX;

/// First run of one to three digits in a pincite.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PINCITE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,3}").expect("valid regex"));

/// One citation of a BVerfGE decision.
///
/// Volume and start page are kept as text because the source digits may
/// carry artifacts such as `f`, `ff` or a trailing dot.
///
/// # Examples
/// ```
/// use bverfgex_verweis::Reference;
///
/// let reference = Reference::new("58", "300", Some("336"));
/// assert_eq!(reference.to_string(), "BVerfGE 58, 300 [336]");
/// assert_eq!(reference.short_form(), "BVerfGE58_300");
/// assert_eq!(reference.info_form(), "58, 300 [336]");
/// ```
// `pincite_clean` is a function of `pincite`, so the derived `Eq` and `Hash`
// compare exactly volume, start page and raw pincite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ReferenceRecord")]
pub struct Reference {
    volume: String,
    start_page: String,
    pincite: Option<String>,
    pincite_clean: Option<String>,
}

/// Stored form of a reference; the clean pincite is always recomputed.
#[derive(Deserialize)]
struct ReferenceRecord {
    volume: String,
    start_page: String,
    #[serde(default)]
    pincite: Option<String>,
}

impl From<ReferenceRecord> for Reference {
    fn from(record: ReferenceRecord) -> Self {
        Self::new(&record.volume, &record.start_page, record.pincite.as_deref())
    }
}

impl Reference {
    /// Create a reference from the raw captured values.
    ///
    /// Volume and start page are trimmed; the pincite is stored as given.
    /// Construction never fails on unusual content.
    #[must_use]
    pub fn new(volume: &str, start_page: &str, pincite: Option<&str>) -> Self {
        Self {
            volume: volume.trim().to_string(),
            start_page: start_page.trim().to_string(),
            pincite: pincite.map(String::from),
            pincite_clean: clean_pincite(pincite),
        }
    }

    /// Volume of the cited decision.
    #[must_use]
    pub fn volume(&self) -> &str {
        &self.volume
    }

    /// First page of the cited decision.
    #[must_use]
    pub fn start_page(&self) -> &str {
        &self.start_page
    }

    /// Pincite exactly as captured.
    #[must_use]
    pub fn pincite(&self) -> Option<&str> {
        self.pincite.as_deref()
    }

    /// First one to three digits of the pincite, if there are any.
    #[must_use]
    pub fn pincite_clean(&self) -> Option<&str> {
        self.pincite_clean.as_deref()
    }

    /// Compact key without pincite, e.g. `BVerfGE58_300`.
    ///
    /// Used to group citations of the same decision across chains.
    #[must_use]
    pub fn short_form(&self) -> String {
        format!("{CITATION_PREFIX}{}_{}", self.volume, self.start_page)
    }

    /// Citation without the collection prefix, e.g. `58, 300 [336]`.
    #[must_use]
    pub fn info_form(&self) -> String {
        format!("{}, {}{}", self.volume, self.start_page, self.pincite_suffix())
    }

    fn pincite_suffix(&self) -> String {
        match self.pincite.as_deref() {
            Some(pincite) if !pincite.is_empty() => format!(" [{}]", pincite.trim()),
            _ => String::new(),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CITATION_PREFIX} {}", self.info_form())
    }
}

fn clean_pincite(pincite: Option<&str>) -> Option<String> {
    let pincite = pincite.filter(|p| !p.is_empty())?;
    PINCITE_DIGITS
        .find(pincite)
        .map(|digits| digits.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_print_form_with_pincite() {
        let reference = Reference::new("58", "300", Some("336"));
        assert_eq!(reference.to_string(), "BVerfGE 58, 300 [336]");
    }

    #[test]
    fn test_print_form_without_pincite() {
        for (volume, page) in [("1", "1"), ("58", "300"), ("123", "45")] {
            let empty = Reference::new(volume, page, Some(""));
            let absent = Reference::new(volume, page, None);
            let expected = format!("BVerfGE {volume}, {page}");
            assert_eq!(empty.to_string(), expected);
            assert_eq!(absent.to_string(), expected);
        }
    }

    #[test]
    fn test_print_form_trims_pincite() {
        let reference = Reference::new("7", "198", Some(" 205 f. "));
        assert_eq!(reference.to_string(), "BVerfGE 7, 198 [205 f.]");
        assert_eq!(reference.pincite(), Some(" 205 f. "));
    }

    #[test]
    fn test_volume_and_page_are_trimmed() {
        let reference = Reference::new(" 58 ", "300 ", None);
        assert_eq!(reference.volume(), "58");
        assert_eq!(reference.start_page(), "300");
    }

    #[test]
    fn test_short_form_omits_pincite() {
        let reference = Reference::new("58", "300", Some("336"));
        assert_eq!(reference.short_form(), "BVerfGE58_300");
    }

    #[test]
    fn test_info_form() {
        assert_eq!(Reference::new("58", "300", Some("336")).info_form(), "58, 300 [336]");
        assert_eq!(Reference::new("52", "1", None).info_form(), "52, 1");
    }

    #[test]
    fn test_pincite_clean_first_digit_run() {
        assert_eq!(Reference::new("1", "2", Some("140")).pincite_clean(), Some("140"));
        assert_eq!(Reference::new("1", "2", Some("140 ff.")).pincite_clean(), Some("140"));
        assert_eq!(Reference::new("1", "2", Some("Rn. 27")).pincite_clean(), Some("27"));
        assert_eq!(Reference::new("1", "2", Some("1234")).pincite_clean(), Some("123"));
        assert_eq!(Reference::new("1", "2", Some("12, 15")).pincite_clean(), Some("12"));
    }

    #[test]
    fn test_pincite_clean_absent() {
        assert_eq!(Reference::new("1", "2", None).pincite_clean(), None);
        assert_eq!(Reference::new("1", "2", Some("")).pincite_clean(), None);
        assert_eq!(Reference::new("1", "2", Some("a.a.O.")).pincite_clean(), None);
    }

    #[test]
    fn test_equality_on_raw_fields() {
        let reference = Reference::new("58", "300", Some("336"));
        assert_eq!(reference, Reference::new("58", "300", Some("336")));
        assert_ne!(reference, Reference::new("59", "300", Some("336")));
        assert_ne!(reference, Reference::new("58", "301", Some("336")));
        assert_ne!(reference, Reference::new("58", "300", Some("337")));
    }

    #[test]
    fn test_equality_uses_raw_not_clean_pincite() {
        let plain = Reference::new("58", "300", Some("336"));
        let with_suffix = Reference::new("58", "300", Some("336 f."));
        assert_eq!(plain.pincite_clean(), with_suffix.pincite_clean());
        assert_ne!(plain, with_suffix);
    }

    #[test]
    fn test_empty_and_absent_pincite_differ() {
        assert_ne!(
            Reference::new("58", "300", Some("")),
            Reference::new("58", "300", None)
        );
    }

    #[test]
    fn test_hash_deduplicates() {
        let set: HashSet<Reference> = [
            Reference::new("58", "300", Some("336")),
            Reference::new("58", "300", Some("336")),
            Reference::new("58", "300", None),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Reference::new("58", "300", Some("336 f."))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "volume": "58",
                "start_page": "300",
                "pincite": "336 f.",
                "pincite_clean": "336",
            })
        );
    }

    #[test]
    fn test_deserialize_rederives_clean_pincite() {
        let reference: Reference = serde_json::from_value(serde_json::json!({
            "volume": "58",
            "start_page": "300",
            "pincite": "336",
            "pincite_clean": "999",
        }))
        .unwrap();
        assert_eq!(reference.pincite_clean(), Some("336"));
        assert_eq!(reference, Reference::new("58", "300", Some("336")));
    }

    #[test]
    fn test_deserialize_without_pincite() {
        let reference: Reference =
            serde_json::from_str(r#"{"volume": "1", "start_page": "14"}"#).unwrap();
        assert_eq!(reference.pincite(), None);
        assert_eq!(reference.to_string(), "BVerfGE 1, 14");
    }
}
