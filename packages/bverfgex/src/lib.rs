//! bverfgex - BVerfGE citation extraction and LLCon decision loading.
//!
//! This crate combines the citation core ([`bverfgex_verweis`]) with a
//! loader for the LLCon corpus of decisions of the German Federal
//! Constitutional Court, so both can be used from one import.
//!
//! # Example
//!
//! ```
//! use bverfgex::{find_citations, parse_llcon_xml};
//!
//! let xml = r#"<entscheidung><gruende>
//!     <ebene1 zeichen="B"><absatz rn="12">Vgl. BVerfGE 58, 300 &lt;336&gt;.</absatz></ebene1>
//! </gruende></entscheidung>"#;
//!
//! let decision = parse_llcon_xml("1bvr000123", xml).unwrap();
//! let chains = find_citations(&decision.rows[0].text_raw);
//! assert_eq!(chains[0].to_string(), "BVerfGE 58, 300 [336]");
//! ```
//!
//! # Architecture
//!
//! - [`llcon`]: LLCon XML decision loading
//! - [`scan`]: citation scanning over decisions and directories
//! - [`types`]: paragraph rows, decisions, citation records
//! - [`output`]: text, JSON and YAML rendering
//! - [`xml`]: XML utilities
//! - [`config`]: constants and input validation
//! - [`error`]: error types and Result alias
//! - [`cli`]: command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod llcon;
pub mod output;
pub mod scan;
pub mod types;
pub mod xml;

// Re-export the citation core
pub use bverfgex_verweis::{
    clean_ref, count_short_forms, decompose, find_citation_matches, find_citations,
    substitute_brackets, ChainInput, CitationMatch, Reference, ReferenceChain, VerweisError,
};

// Re-export commonly used items
pub use error::{BverfgexError, Result};
pub use llcon::{load_llcon_xml, parse_llcon_xml};
pub use scan::{collect_xml_files, scan_decision};
pub use types::{CitationRecord, Decision, ParagraphRow};
