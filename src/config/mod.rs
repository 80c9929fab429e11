//! Configuration handling for bundle-adapter
//!
//! This module contains:
//! - `bundle-adapter.yaml` - Adapter configuration
//! - Eligibility rules deciding which files are bundled

pub mod adapter;
pub mod rule;

// Re-export commonly used types
pub use adapter::{AdapterConfig, CONFIG_FILE_NAME, ConfigFile, DEFAULT_TOOL_PATH};
pub use rule::{EligibilityRule, RuleSet};
