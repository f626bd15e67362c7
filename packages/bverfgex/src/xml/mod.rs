//! XML helpers over `roxmltree` documents.

mod utils;

pub use utils::{collect_text, find_descendant, find_descendants, get_tag_name};
