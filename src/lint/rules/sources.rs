//! Rules over `source` entries.

use crate::error::Result;
use crate::lint::{LintContext, LintReport, LintRule, RuleId};

const CHECKSUM_KEYS: [&str; 3] = ["sha1", "sha256", "md5"];

/// Every downloaded source needs a checksum.
pub struct SourceChecksumRule;

impl LintRule for SourceChecksumRule {
    fn id(&self) -> RuleId {
        RuleId::new("source-checksum")
    }

    fn description(&self) -> &str {
        "Sources fetched by url must carry a checksum"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        for source in &ctx.sources {
            let has_url = source.get("url").is_some();
            let has_checksum = CHECKSUM_KEYS.iter().any(|key| source.get(*key).is_some());
            if has_url && !has_checksum {
                report.error(
                    self.id(),
                    "When defining a source/url please add a sha256, sha1 \
                     or md5 checksum (sha256 preferably).",
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(yaml: &str) -> LintReport {
        let doc: serde_yaml::Mapping = serde_yaml::from_str(yaml).unwrap();
        let mut report = LintReport::new();
        let ctx = LintContext::new(&doc, None, &mut report);
        SourceChecksumRule.check(&ctx, &mut report).unwrap();
        report
    }

    #[test]
    fn url_with_sha256_passes() {
        let report = check("source: {url: 'http://x', sha256: abc}\n");
        assert!(report.is_clean());
    }

    #[test]
    fn url_without_checksum_is_flagged_once() {
        let report = check("source: {url: 'http://x'}\n");
        assert_eq!(
            report.error_messages(),
            vec![
                "When defining a source/url please add a sha256, sha1 \
                 or md5 checksum (sha256 preferably)."
            ]
        );
    }

    #[test]
    fn each_offending_entry_is_flagged() {
        let report = check(
            "source:\n  - {url: 'http://x'}\n  - {url: 'http://y', md5: abc}\n  - {url: 'http://z'}\n",
        );
        assert_eq!(report.errors().len(), 2);
    }

    #[test]
    fn path_sources_need_no_checksum() {
        let report = check("source: {path: ../src}\n");
        assert!(report.is_clean());
    }
}
