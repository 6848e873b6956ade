//! Packaging-metadata schema and validators.
//!
//! This module stands in for the packaging tool's metadata layer: the
//! per-section permitted-field schema ([`fields`]), the license-family
//! validator ([`license`]) and the version-ordering grammar ([`version`]).
//! The lint rules call these as collaborators and convert their failures
//! into findings; nothing here ever aborts a lint pass.

pub mod fields;
pub mod license;
pub mod version;

pub use fields::permitted_fields;
pub use license::{ensure_valid_license_family, InvalidLicenseFamily};
pub use version::{InvalidVersion, Version};
