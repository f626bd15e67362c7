//! Loading of LLCon decision files.
//!
//! LLCon decisions are XML documents whose reasons live in `<gruende>`.
//! The reasons are either divided into `<ebene1>` sections holding
//! `<absatz>` paragraphs, or consist of `<absatz>` paragraphs directly.
//! Each paragraph becomes one [`ParagraphRow`].

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use roxmltree::{Document, Node, ParsingOptions};

use crate::config::validate_file_path;
use crate::error::{BverfgexError, Result};
use crate::types::{Decision, ParagraphRow};
use crate::xml::{collect_text, find_descendant, find_descendants, get_tag_name};

/// Runs of whitespace inside paragraph text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize raw LLCon XML before parsing.
///
/// Line breaks are dropped, escaped angle brackets become square brackets
/// (page markers such as `&lt;336&gt;` turn into `[336]`, the form the
/// citation grammar expects), and non-breaking spaces become plain spaces.
///
/// # Examples
/// ```
/// use bverfgex::llcon::clean_string;
///
/// assert_eq!(clean_string("BVerfGE&#160;58, 300 &lt;336&gt;\n"), "BVerfGE 58, 300 [336]");
/// ```
pub fn clean_string(text: &str) -> String {
    text.replace('\n', "")
        .replace("&lt;", "[")
        .replace("&gt;", "]")
        .replace("&#160;", " ")
        .replace("#160", " ")
        .replace('\u{a0}', " ")
}

/// Collapse whitespace runs to single spaces and trim.
fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Decision identifier for a file path: the file name without `.xml`.
fn decision_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().replace(".xml", ""))
        .unwrap_or_default()
}

/// Load and parse an LLCon decision file.
///
/// # Errors
/// Fails if the file cannot be read, is not well-formed XML, or has no
/// `<gruende>` element.
pub fn load_llcon_xml(path: &Path) -> Result<Decision> {
    validate_file_path(path)?;
    let xml = fs::read_to_string(path)?;
    let decision = parse_llcon_xml(&decision_name(path), &xml)?;

    tracing::debug!(
        path = %path.display(),
        rows = decision.rows.len(),
        sections = decision.has_sections(),
        "Loaded decision"
    );
    Ok(decision)
}

/// Parse LLCon decision XML into paragraph rows.
///
/// # Arguments
/// * `name` - Decision identifier stored in every row
/// * `xml` - Raw XML content, cleaned with [`clean_string`] before parsing
///
/// # Examples
/// ```
/// use bverfgex::llcon::parse_llcon_xml;
///
/// let xml = r#"<entscheidung><gruende>
///     <absatz rn="1">Vgl. BVerfGE 58, 300 &lt;336&gt;.</absatz>
/// </gruende></entscheidung>"#;
///
/// let decision = parse_llcon_xml("1bvr000123", xml).unwrap();
/// assert_eq!(decision.rows.len(), 1);
/// assert_eq!(decision.rows[0].rn.as_deref(), Some("1"));
/// assert_eq!(decision.rows[0].text_raw, "Vgl. BVerfGE 58, 300 [336].");
/// ```
pub fn parse_llcon_xml(name: &str, xml: &str) -> Result<Decision> {
    let cleaned = clean_string(xml);
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(&cleaned, options)?;

    let gruende = doc
        .descendants()
        .find(|n| n.is_element() && get_tag_name(*n) == "gruende")
        .ok_or_else(|| BverfgexError::MissingElement {
            element: "gruende".to_string(),
            context: format!("decision {name}"),
        })?;

    let mut decision = Decision::new(name);

    if find_descendant(gruende, "ebene1").is_some() {
        for (index, ebene) in find_descendants(gruende, "ebene1").enumerate() {
            let label = ebene.attribute("zeichen").unwrap_or_default();
            for absatz in find_descendants(ebene, "absatz") {
                decision.rows.push(ParagraphRow {
                    file: name.to_string(),
                    ebene: label.to_string(),
                    ebene_nr: Some(index),
                    tbeg: ebene.attribute("tbeg").map(String::from),
                    rn: paragraph_number(absatz),
                    text_raw: normalize_whitespace(&collect_text(absatz)),
                    ebenen_tag: true,
                });
            }
        }
    } else {
        for absatz in find_descendants(gruende, "absatz") {
            decision.rows.push(ParagraphRow {
                file: name.to_string(),
                ebene: String::new(),
                ebene_nr: None,
                tbeg: None,
                rn: paragraph_number(absatz),
                text_raw: normalize_whitespace(&collect_text(absatz)),
                ebenen_tag: false,
            });
        }
    }

    Ok(decision)
}

fn paragraph_number(absatz: Node<'_, '_>) -> Option<String> {
    absatz.attribute("rn").map(String::from)
}
