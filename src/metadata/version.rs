//! Version-ordering grammar.
//!
//! Package versions follow the packaging tool's version grammar:
//! an optional numeric epoch separated by `!`, dot/underscore-separated
//! components drawn from a restricted character set, and an optional local
//! version separated by `+`. The lint rules only need parse success or
//! failure, but the parsed pieces are kept for inspection.

use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static VERSION_CHECK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\*\.\+!_0-9a-z]+$").unwrap());

/// A version string that does not parse under the version grammar.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Malformed version string '{version}': {reason}")]
pub struct InvalidVersion {
    pub version: String,
    pub reason: String,
}

/// A parsed package version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub epoch: u64,
    pub components: Vec<String>,
    pub local: Vec<String>,
}

impl FromStr for Version {
    type Err = InvalidVersion;

    fn from_str(vstr: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| InvalidVersion {
            version: vstr.to_string(),
            reason: reason.to_string(),
        };

        let version = vstr.trim().to_lowercase();
        if version.is_empty() {
            return Err(invalid("empty version string"));
        }
        if !VERSION_CHECK.is_match(&version) {
            return Err(invalid("invalid character(s)"));
        }

        let (epoch, rest) = match version.split('!').collect::<Vec<_>>()[..] {
            [v] => (0, v),
            [e, v] => {
                let epoch = e
                    .parse::<u64>()
                    .map_err(|_| invalid("epoch must be an integer"))?;
                (epoch, v)
            }
            _ => return Err(invalid("duplicated epoch separator '!'")),
        };

        let (main, local) = match rest.split('+').collect::<Vec<_>>()[..] {
            [m] => (m, None),
            [m, l] => (m, Some(l)),
            _ => return Err(invalid("duplicated local version separator '+'")),
        };

        let components = split_components(main).ok_or_else(|| invalid("empty version component"))?;
        let local = match local {
            None => Vec::new(),
            Some(l) => split_components(l).ok_or_else(|| invalid("empty version component"))?,
        };

        Ok(Version {
            epoch,
            components,
            local,
        })
    }
}

fn split_components(s: &str) -> Option<Vec<String>> {
    if s.is_empty() {
        return None;
    }
    let mut components = Vec::new();
    for part in s.split('.') {
        if part.is_empty() {
            return None;
        }
        components.push(part.to_string());
    }
    Some(components)
}
