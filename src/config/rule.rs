//! Eligibility rules
//!
//! A rule decides whether a source file is a candidate for bundling. Rules are
//! written in `bundle-adapter.yaml` under `paths:` and are checked in order;
//! the first match wins.

use std::fmt;
use std::path::{Path, PathBuf};

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, config as config_error};
use crate::path_utils;

/// A configured path matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EligibilityRule {
    /// Glob pattern (wax syntax), matched against the path relative to the project root
    Glob(String),

    /// Regular expression, matched against the full path
    Regex(String),

    /// Directory prefix, compared path component by path component
    Prefix(PathBuf),
}

impl fmt::Display for EligibilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EligibilityRule::Glob(pattern) => write!(f, "glob:{pattern}"),
            EligibilityRule::Regex(pattern) => write!(f, "regex:{pattern}"),
            EligibilityRule::Prefix(prefix) => write!(f, "prefix:{}", prefix.display()),
        }
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Glob(Glob<'static>),
    Regex(Regex),
    Prefix(PathBuf),
}

/// Ordered, validated set of eligibility rules bound to a project root
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    root: PathBuf,
    rules: Vec<(EligibilityRule, Matcher)>,
}

impl RuleSet {
    /// Create an empty rule set. An empty set matches nothing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            rules: Vec::new(),
        }
    }

    /// Validate and append a rule
    ///
    /// Glob and regex patterns are checked here so that a bad pattern is a
    /// configuration error rather than a silent mismatch later on.
    pub fn push(&mut self, rule: EligibilityRule) -> Result<()> {
        let matcher = match &rule {
            EligibilityRule::Glob(pattern) => {
                let glob = Glob::new(pattern).map_err(|e| {
                    config_error::invalid(format!("invalid glob '{pattern}': {e}"))
                })?;
                Matcher::Glob(glob.into_owned())
            }
            EligibilityRule::Regex(pattern) => {
                let regex = Regex::new(pattern).map_err(|e| {
                    config_error::invalid(format!("invalid regex '{pattern}': {e}"))
                })?;
                Matcher::Regex(regex)
            }
            EligibilityRule::Prefix(prefix) => Matcher::Prefix(self.root.join(prefix)),
        };

        self.rules.push((rule, matcher));
        Ok(())
    }

    /// Configured rules, in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = &EligibilityRule> {
        self.rules.iter().map(|(rule, _)| rule)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Return the first rule matching `path`, if any
    pub fn find_match(&self, path: &Path) -> Option<&EligibilityRule> {
        let absolute = self.root.join(path);
        let full = path_utils::to_forward_slashes(&absolute);
        let relative = absolute
            .strip_prefix(&self.root)
            .map(path_utils::to_forward_slashes)
            .unwrap_or_else(|_| full.clone());
        let candidate = CandidatePath::from(relative.as_str());

        self.rules
            .iter()
            .find(|(_, matcher)| match matcher {
                Matcher::Glob(glob) => glob.matched(&candidate).is_some(),
                Matcher::Regex(regex) => regex.is_match(&full),
                Matcher::Prefix(prefix) => absolute.starts_with(prefix),
            })
            .map(|(rule, _)| rule)
    }

    /// Check whether any rule matches `path`
    pub fn matches(&self, path: &Path) -> bool {
        self.find_match(path).is_some()
    }
}
