//! Export formats and validated export configuration.
#![forbid(unsafe_code)]

use std::str::FromStr;

use thiserror::Error;

const DEFAULT_RESOLUTION: &str = "1080p";
const DEFAULT_QUALITY: u8 = 80;
const MAX_QUALITY: u8 = 100;

/// Formats an image can be exported to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Lossless raster with transparency.
    Png,
    /// Compressed raster without transparency.
    #[default]
    Jpeg,
    /// Vector output that scales without loss.
    Svg,
}

impl ExportFormat {
    /// Lower-case format name used in plans and file extensions.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Svg => "svg",
        }
    }

    /// One-line note on what the encoder preserves.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::Png => "lossless, keeps transparency",
            Self::Jpeg => "compressed, drops transparency",
            Self::Svg => "vector, scales without loss",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when an export format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown export format '{0}'; expected png, jpeg, or svg")]
pub struct ParseExportFormatError(pub String);

impl FromStr for ExportFormat {
    type Err = ParseExportFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "svg" => Ok(Self::Svg),
            other => Err(ParseExportFormatError(other.to_owned())),
        }
    }
}

/// Validated export settings.
///
/// Construct through [`ExportConfig::builder`]; the builder checks the
/// quality percentage once so consumers never re-validate.
///
/// # Examples
/// ```
/// use lightbox_media::{ExportConfig, ExportFormat};
///
/// let config = ExportConfig::builder()
///     .with_format(ExportFormat::Png)
///     .with_resolution("4K")
///     .with_watermark("© Lightbox")
///     .with_quality(90)
///     .build()?;
/// assert_eq!(config.format(), ExportFormat::Png);
/// assert_eq!(config.watermark(), Some("© Lightbox"));
/// # Ok::<(), lightbox_media::ExportConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    format: ExportFormat,
    resolution: String,
    watermark: Option<String>,
    quality: u8,
}

impl ExportConfig {
    /// Start a builder seeded with the defaults: JPEG, `1080p`, no
    /// watermark, quality 80.
    #[must_use]
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }

    /// Target format.
    #[must_use]
    pub const fn format(&self) -> ExportFormat {
        self.format
    }

    /// Target resolution label.
    #[must_use]
    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    /// Watermark text, when one was configured.
    #[must_use]
    pub fn watermark(&self) -> Option<&str> {
        self.watermark.as_deref()
    }

    /// Encoding quality percentage.
    #[must_use]
    pub const fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            resolution: DEFAULT_RESOLUTION.to_owned(),
            watermark: None,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Fluent builder for [`ExportConfig`].
#[derive(Debug, Clone, Default)]
pub struct ExportConfigBuilder {
    config: ExportConfig,
}

impl ExportConfigBuilder {
    /// Set the target format.
    #[must_use]
    pub const fn with_format(mut self, format: ExportFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Set the target resolution label.
    #[must_use]
    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.config.resolution = resolution.into();
        self
    }

    /// Stamp a watermark onto the export.
    #[must_use]
    pub fn with_watermark(mut self, watermark: impl Into<String>) -> Self {
        self.config.watermark = Some(watermark.into());
        self
    }

    /// Set the encoding quality percentage.
    #[must_use]
    pub const fn with_quality(mut self, quality: u8) -> Self {
        self.config.quality = quality;
        self
    }

    /// Validate the settings and produce the configuration.
    ///
    /// # Errors
    /// Returns [`ExportConfigError::QualityOutOfRange`] when the quality
    /// percentage exceeds 100.
    pub fn build(self) -> Result<ExportConfig, ExportConfigError> {
        if self.config.quality > MAX_QUALITY {
            return Err(ExportConfigError::QualityOutOfRange {
                quality: self.config.quality,
            });
        }
        Ok(self.config)
    }
}

/// Errors raised by [`ExportConfigBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExportConfigError {
    /// The quality percentage exceeded 100.
    #[error("quality {quality} is out of range; expected 0 to 100")]
    QualityOutOfRange {
        /// Rejected quality value.
        quality: u8,
    },
}
