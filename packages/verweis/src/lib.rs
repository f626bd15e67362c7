//! bverfgex-verweis - BVerfGE citation references.
//!
//! Finds citations of the German Federal Constitutional Court's official
//! collection ("BVerfGE 58, 300 [336]") in free text and models them as
//! typed, comparable values.
//!
//! # Example
//!
//! ```
//! use bverfgex_verweis::find_citations;
//!
//! let text = "Dies entspricht st. Rspr. (vgl. BVerfGE 37, 132 [140]; 50, 290 [339]; 52, 1 [31]).";
//! let chains = find_citations(text);
//!
//! assert_eq!(chains.len(), 1);
//! assert_eq!(chains[0].len(), 3);
//! assert_eq!(chains[0].at(1).unwrap().to_string(), "BVerfGE 50, 290 [339]");
//! ```
//!
//! # Architecture
//!
//! - [`reference`]: a single citation ([`Reference`])
//! - [`chain`]: an ordered string citation ([`ReferenceChain`])
//! - [`extract`]: the two-stage citation grammar
//! - [`config`]: grammar constants
//! - [`error`]: error type and Result alias

pub mod chain;
pub mod config;
pub mod error;
pub mod extract;
pub mod reference;

pub use chain::{count_short_forms, ChainInput, ReferenceChain};
pub use error::{Result, VerweisError};
pub use extract::{
    clean_ref, decompose, find_citation_matches, find_citations, substitute_brackets,
    CitationMatch,
};
pub use reference::Reference;
