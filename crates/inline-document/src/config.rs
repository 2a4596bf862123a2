//! Configuration for inline document extraction.
//!
//! ```toml
//! [comments]
//! license-markers = ["@license", "(?i)copyright"]
//! ```

use crate::comment::{DEFAULT_LICENSE_MARKER, LicenseFilter};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Settings for inline document extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct InlineDocumentConfig {
    pub comments: CommentConfig,
}

/// Settings for attached documentation comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CommentConfig {
    /// Regular expressions identifying comments that are never documentation.
    pub license_markers: Vec<String>,
}

impl Default for CommentConfig {
    fn default() -> Self {
        CommentConfig {
            license_markers: vec![DEFAULT_LICENSE_MARKER.to_string()],
        }
    }
}

impl InlineDocumentConfig {
    /// Parse a configuration from TOML. Missing settings keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML or has unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the comment filter these settings describe.
    ///
    /// # Errors
    ///
    /// Returns an error if a license marker is not a valid regular expression.
    pub fn comment_filter(&self) -> Result<LicenseFilter> {
        LicenseFilter::new(&self.comments.license_markers)
    }
}
