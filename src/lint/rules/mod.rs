//! Built-in lint rules.
//!
//! One module per recipe concern; the evaluation order lives in
//! [`RuleSet::for_options`](crate::lint::RuleSet::for_options), not here.

pub mod about;
pub mod advisory;
pub mod build;
pub mod fields;
pub mod maintainers;
pub mod package;
pub mod requirements;
pub mod sections;
pub mod sources;
pub mod text;

pub use about::{AboutContentsRule, LicenseFamilyRule, LicenseUnknownRule, LicenseWordingRule};
pub use advisory::ForgeAdvisoryRule;
pub use build::{BuildNumberRule, PipInstallHintRule};
pub use fields::FieldSchemaRule;
pub use maintainers::{MaintainersFormatRule, MaintainersPresentRule};
pub use package::{PackageNameRule, PackageVersionRule};
pub use requirements::{PinnedNumpyRule, RequirementsOrderRule, ToolchainRule};
pub use sections::{SectionOrderRule, UnexpectedSectionRule};
pub use sources::SourceChecksumRule;
pub use tests::RecipeTestsRule;
pub use text::{NoarchSelectorRule, SelectorTidyRule, TemplateTidyRule, TrailingNewlineRule};
