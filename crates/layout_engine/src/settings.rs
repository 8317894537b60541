//! Resolver configuration
//!
//! Settings are plain serde data so that a rendering driver can load them
//! from its own configuration file alongside the rest of its settings.

use crate::{LayoutError, PaperSize, Result};
use serde::{Deserialize, Serialize};

/// What to do when a page names a size the table does not contain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSizePolicy {
    /// Fail resolution with `LayoutError::UnknownSizeName`
    #[default]
    Error,
    /// Log a warning and size the page with `default_size`
    Default,
}

/// Page size resolution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// Size name used for pages without a `size` prop
    pub default_size: String,
    /// Handling of size names missing from the table
    pub unknown_size: UnknownSizePolicy,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            default_size: PaperSize::default().name().to_string(),
            unknown_size: UnknownSizePolicy::Error,
        }
    }
}

impl ResolverSettings {
    /// Settings that fall back to the default size instead of failing
    pub fn lenient() -> Self {
        Self {
            unknown_size: UnknownSizePolicy::Default,
            ..Self::default()
        }
    }

    /// Builder: use a different default size
    pub fn with_default_size(mut self, size: PaperSize) -> Self {
        self.default_size = size.name().to_string();
        self
    }

    /// Parse and validate settings from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: ResolverSettings = serde_json::from_str(json)
            .map_err(|e| LayoutError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the default size exists in the table
    pub fn validate(&self) -> Result<()> {
        self.default_paper_size().map(|_| ())
    }

    /// The table entry for `default_size`
    pub fn default_paper_size(&self) -> Result<PaperSize> {
        PaperSize::from_name(&self.default_size).ok_or_else(|| {
            LayoutError::InvalidSettings(format!(
                "default size {:?} is not a known paper size",
                self.default_size
            ))
        })
    }
}
