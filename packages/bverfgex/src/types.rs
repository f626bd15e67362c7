//! Core data types for decisions and the citations found in them.

use serde::Serialize;

use bverfgex_verweis::ReferenceChain;

/// One paragraph (Absatz) of a decision's reasons.
///
/// Absent attributes are `None`, never empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphRow {
    /// Decision identifier, taken from the file name.
    pub file: String,

    /// Section label (`zeichen` attribute of `<ebene1>`, e.g. "A", "B.I").
    pub ebene: String,

    /// Index of the section within the reasons, if the decision has sections.
    pub ebene_nr: Option<usize>,

    /// Section begin marker (`tbeg` attribute), if present.
    pub tbeg: Option<String>,

    /// Paragraph number (Randnummer), if present.
    pub rn: Option<String>,

    /// Paragraph text with whitespace collapsed.
    pub text_raw: String,

    /// Whether the decision marks its sections with `<ebene1>`.
    pub ebenen_tag: bool,
}

/// A parsed decision: its identifier and the rows of its reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Decision identifier (file name without `.xml`).
    pub name: String,

    /// Paragraph rows in document order.
    pub rows: Vec<ParagraphRow>,
}

impl Decision {
    /// Create an empty decision.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Whether the reasons are divided into `<ebene1>` sections.
    #[must_use]
    pub fn has_sections(&self) -> bool {
        self.rows.iter().any(|row| row.ebenen_tag)
    }
}

/// One citation chain found in a paragraph of a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitationRecord {
    /// Decision identifier of the citing decision.
    pub file: String,

    /// Section label of the citing paragraph.
    pub ebene: String,

    /// Paragraph number of the citing paragraph, if known.
    pub rn: Option<String>,

    /// Printed form of the chain, e.g. "BVerfGE 37, 132 [140]; 50, 290 [339]".
    pub citation: String,

    /// Short forms of the cited decisions.
    pub short_forms: Vec<String>,

    /// The parsed references.
    pub references: ReferenceChain,
}

impl CitationRecord {
    /// Build a record for a chain found in `row`.
    #[must_use]
    pub fn new(row: &ParagraphRow, chain: ReferenceChain) -> Self {
        Self {
            file: row.file.clone(),
            ebene: row.ebene.clone(),
            rn: row.rn.clone(),
            citation: chain.to_string(),
            short_forms: chain.short_forms(),
            references: chain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bverfgex_verweis::Reference;

    fn row(ebenen_tag: bool) -> ParagraphRow {
        ParagraphRow {
            file: "1bvr000123".to_string(),
            ebene: if ebenen_tag { "B".to_string() } else { String::new() },
            ebene_nr: ebenen_tag.then_some(1),
            tbeg: None,
            rn: Some("12".to_string()),
            text_raw: "Text".to_string(),
            ebenen_tag,
        }
    }

    #[test]
    fn test_decision_has_sections() {
        let mut decision = Decision::new("1bvr000123");
        assert!(!decision.has_sections());

        decision.rows.push(row(false));
        assert!(!decision.has_sections());

        decision.rows.push(row(true));
        assert!(decision.has_sections());
    }

    #[test]
    fn test_citation_record_from_row() {
        let chain = ReferenceChain::from(Reference::new("58", "300", Some("336")));
        let record = CitationRecord::new(&row(true), chain);

        assert_eq!(record.file, "1bvr000123");
        assert_eq!(record.ebene, "B");
        assert_eq!(record.rn.as_deref(), Some("12"));
        assert_eq!(record.citation, "BVerfGE 58, 300 [336]");
        assert_eq!(record.short_forms, vec!["BVerfGE58_300"]);
    }

    #[test]
    fn test_row_serializes_absent_as_null() {
        let json = serde_json::to_value(row(false)).unwrap();
        assert!(json["ebene_nr"].is_null());
        assert!(json["tbeg"].is_null());
        assert_eq!(json["rn"], "12");
        assert_eq!(json["ebenen_tag"], false);
    }
}
