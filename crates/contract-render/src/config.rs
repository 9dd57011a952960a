//! Render configuration
//!
//! Page geometry and default typography handed to the serializer. All
//! measurements use Word's native units: twips (1/1440 inch) for the page
//! and half-points for font size.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// One inch in twips
pub const TWIPS_PER_INCH: u32 = 1440;

/// Document-wide rendering settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Default run font
    pub font: FontConfig,
    /// Page size and margins
    pub page: PageConfig,
}

impl RenderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text; omitted keys keep their defaults
    ///
    /// # Errors
    /// `ConfigError::Parse` on invalid TOML or unknown keys
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse`
    /// if it is not a valid config
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// With font family
    #[inline]
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font.family = family.into();
        self
    }
}

/// Default run font
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// Font family name
    pub family: String,
    /// Size in half-points (24 = 12pt)
    pub size_half_points: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size_half_points: 24,
        }
    }
}

/// Page size and margins, in twips
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Page width
    pub width: u32,
    /// Page height
    pub height: u32,
    /// Page margins
    pub margins: Margins,
}

impl Default for PageConfig {
    /// US Letter, portrait
    fn default() -> Self {
        Self {
            width: 17 * TWIPS_PER_INCH / 2,
            height: 11 * TWIPS_PER_INCH,
            margins: Margins::default(),
        }
    }
}

/// Page margins, in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Margins {
    /// Top margin
    pub top: u32,
    /// Right margin
    pub right: u32,
    /// Bottom margin
    pub bottom: u32,
    /// Left margin
    pub left: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(TWIPS_PER_INCH)
    }
}

impl Margins {
    /// Same margin on all four sides
    #[inline]
    #[must_use]
    pub const fn uniform(twips: u32) -> Self {
        Self {
            top: twips,
            right: twips,
            bottom: twips,
            left: twips,
        }
    }
}
