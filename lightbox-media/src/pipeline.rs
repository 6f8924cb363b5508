//! Ordered image transformation pipelines.
#![forbid(unsafe_code)]

/// Metadata-level description of an image being processed.
///
/// The asset tracks what a pipeline has done to it: current dimensions,
/// the encoding quality once a compression step has run, and every
/// filter applied so far in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoding quality percentage, set by a compression step.
    pub quality: Option<u8>,
    /// Filters applied so far, in application order.
    pub filters: Vec<FilterKind>,
}

impl ImageAsset {
    /// Describe an unprocessed asset of the given dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            quality: None,
            filters: Vec::new(),
        }
    }
}

/// Colour filters a pipeline can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Warm, browned tones.
    Sepia,
    /// Desaturate to greys.
    Grayscale,
    /// Soften detail with a blur.
    Blur,
}

impl FilterKind {
    /// Lower-case filter name used in plans and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sepia => "sepia",
            Self::Grayscale => "grayscale",
            Self::Blur => "blur",
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a filter name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter '{0}'; expected sepia, grayscale, or blur")]
pub struct ParseFilterKindError(pub String);

impl std::str::FromStr for FilterKind {
    type Err = ParseFilterKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "sepia" => Ok(Self::Sepia),
            "grayscale" | "greyscale" => Ok(Self::Grayscale),
            "blur" => Ok(Self::Blur),
            other => Err(ParseFilterKindError(other.to_owned())),
        }
    }
}

/// A single transformation applied to an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStep {
    /// Apply a colour filter.
    Filter(FilterKind),
    /// Scale to exact pixel dimensions.
    Resize {
        /// Target width in pixels.
        width: u32,
        /// Target height in pixels.
        height: u32,
    },
    /// Re-encode at the given quality percentage.
    Compress {
        /// Quality percentage; lower loses more detail.
        quality: u8,
    },
}

/// Ordered list of transformation steps.
///
/// Steps run strictly in the order they were added; a later resize
/// overrides an earlier one and filters accumulate.
///
/// # Examples
/// ```
/// use lightbox_media::{FilterKind, ImageAsset, Pipeline, TransformStep};
///
/// let pipeline = Pipeline::new()
///     .with_step(TransformStep::Filter(FilterKind::Grayscale))
///     .with_step(TransformStep::Resize { width: 320, height: 240 });
/// let asset = pipeline.apply(ImageAsset::new(800, 600));
/// assert_eq!(asset.filters, [FilterKind::Grayscale]);
/// assert_eq!(asset.width, 320);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<TransformStep>,
}

impl Pipeline {
    /// Create an empty pipeline.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn push(&mut self, step: TransformStep) {
        self.steps.push(step);
    }

    /// Append a step while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_step(mut self, step: TransformStep) -> Self {
        self.push(step);
        self
    }

    /// Steps in application order.
    #[must_use]
    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }

    /// Number of steps in the pipeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Report whether the pipeline has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step over `asset`, in order.
    #[must_use]
    pub fn apply(&self, asset: ImageAsset) -> ImageAsset {
        self.steps
            .iter()
            .fold(asset, |asset, step| apply_step(asset, *step))
    }
}

fn apply_step(mut asset: ImageAsset, step: TransformStep) -> ImageAsset {
    match step {
        TransformStep::Filter(filter) => {
            log::debug!("applying {filter} filter");
            asset.filters.push(filter);
        }
        TransformStep::Resize { width, height } => {
            log::debug!("resizing to {width}x{height}");
            asset.width = width;
            asset.height = height;
        }
        TransformStep::Compress { quality } => {
            log::debug!("compressing at quality {quality}");
            asset.quality = Some(quality);
        }
    }
    asset
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_pipeline_leaves_the_asset_untouched() {
        let asset = Pipeline::new().apply(ImageAsset::new(800, 600));
        assert_eq!(asset, ImageAsset::new(800, 600));
    }

    #[rstest]
    fn steps_run_in_declaration_order() {
        let pipeline = Pipeline::new()
            .with_step(TransformStep::Filter(FilterKind::Sepia))
            .with_step(TransformStep::Resize {
                width: 640,
                height: 480,
            })
            .with_step(TransformStep::Compress { quality: 80 });
        let asset = pipeline.apply(ImageAsset::new(800, 600));
        assert_eq!((asset.width, asset.height), (640, 480));
        assert_eq!(asset.quality, Some(80));
        assert_eq!(asset.filters, [FilterKind::Sepia]);
    }

    #[rstest]
    fn later_resizes_override_earlier_ones() {
        let pipeline = Pipeline::new()
            .with_step(TransformStep::Resize {
                width: 1024,
                height: 768,
            })
            .with_step(TransformStep::Resize {
                width: 320,
                height: 240,
            });
        let asset = pipeline.apply(ImageAsset::new(800, 600));
        assert_eq!((asset.width, asset.height), (320, 240));
    }

    #[rstest]
    fn filters_accumulate_in_order() {
        let pipeline = Pipeline::new()
            .with_step(TransformStep::Filter(FilterKind::Grayscale))
            .with_step(TransformStep::Filter(FilterKind::Blur));
        let asset = pipeline.apply(ImageAsset::new(10, 10));
        assert_eq!(asset.filters, [FilterKind::Grayscale, FilterKind::Blur]);
    }

    #[rstest]
    fn push_matches_chained_construction() {
        let mut pushed = Pipeline::new();
        pushed.push(TransformStep::Compress { quality: 50 });
        let chained = Pipeline::new().with_step(TransformStep::Compress { quality: 50 });
        assert_eq!(pushed, chained);
    }

    #[rstest]
    #[case("sepia", FilterKind::Sepia)]
    #[case("Grayscale", FilterKind::Grayscale)]
    #[case("greyscale", FilterKind::Grayscale)]
    #[case("BLUR", FilterKind::Blur)]
    fn filter_parsing_accepts_known_names(#[case] raw: &str, #[case] expected: FilterKind) {
        assert_eq!(raw.parse::<FilterKind>().expect("known filter"), expected);
    }

    #[rstest]
    fn filter_parsing_rejects_unknown_names() {
        let err = "vignette".parse::<FilterKind>().expect_err("unknown filter");
        assert_eq!(
            err.to_string(),
            "unknown filter 'vignette'; expected sepia, grayscale, or blur"
        );
    }
}
