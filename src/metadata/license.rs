//! License-family validation.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::recipe::scalar_to_string;

/// The recognized license families.
pub const ALLOWED_LICENSE_FAMILIES: [&str; 15] = [
    "AGPL",
    "APACHE",
    "BSD",
    "CC",
    "GPL",
    "GPL2",
    "GPL3",
    "LGPL",
    "MIT",
    "MOZILLA",
    "NONE",
    "OTHER",
    "PROPRIETARY",
    "PSF",
    "PUBLIC-DOMAIN",
];

/// `about/license_family` named a family outside the recognized set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("about/license_family '{family}' not allowed. Allowed families are {allowed}.")]
pub struct InvalidLicenseFamily {
    pub family: String,
    allowed: String,
}

fn remove_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validate `about/license_family` against the recognized set.
///
/// A recipe without a `license_family` passes; the field is optional.
pub fn ensure_valid_license_family(doc: &Mapping) -> Result<(), InvalidLicenseFamily> {
    let family = doc
        .get("about")
        .and_then(Value::as_mapping)
        .and_then(|about| about.get("license_family"))
        .and_then(scalar_to_string);
    let Some(family) = family else {
        return Ok(());
    };

    let candidate = remove_whitespace(&family);
    if ALLOWED_LICENSE_FAMILIES.contains(&candidate.as_str()) {
        return Ok(());
    }
    Err(InvalidLicenseFamily {
        family,
        allowed: ALLOWED_LICENSE_FAMILIES.join(", "),
    })
}
