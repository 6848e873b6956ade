//! Recipe document access and raw-text classification.
//!
//! A recipe is a `meta.yaml` mapping from section name to section content.
//! Section content comes in two shapes: plain mappings (`package`, `build`,
//! `about`, ...) and lists of mappings (`source`, `outputs`). This module
//! normalizes both shapes ([`section`]) and classifies the raw text lines
//! that the parsed document cannot represent ([`selector`]).

pub mod document;
pub mod section;
pub mod selector;

pub use document::{is_blank, scalar_to_string, value_type_name, RECIPE_FILE, TOP_LEVEL_SECTIONS};
pub use section::{get_list_section, get_section};
pub use selector::{
    is_selector_line, is_template_line, is_tidy_selector, is_tidy_template, selector_lines,
    template_lines,
};
