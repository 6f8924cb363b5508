//! Image processing pipeline and export configuration for Lightbox.
//!
//! The crate provides two complementary capabilities:
//! - **Transform pipelines** describe an ordered series of steps (colour
//!   filters, resizing, compression) over a metadata-level
//!   [`ImageAsset`]. Steps run strictly in declaration order, so a plan
//!   reads top to bottom.
//! - **Export configuration** pairs a closed [`ExportFormat`] enum with a
//!   validating builder ([`ExportConfig::builder`]) so quality settings
//!   are checked once, up front.
//!
//! Everything here is metadata bookkeeping; actual pixel work belongs to
//! whichever encoder consumes the plan.
//!
//! # Examples
//!
//! ```
//! use lightbox_media::{FilterKind, ImageAsset, Pipeline, TransformStep};
//!
//! let pipeline = Pipeline::new()
//!     .with_step(TransformStep::Filter(FilterKind::Sepia))
//!     .with_step(TransformStep::Resize { width: 640, height: 480 })
//!     .with_step(TransformStep::Compress { quality: 80 });
//! let processed = pipeline.apply(ImageAsset::new(800, 600));
//! assert_eq!((processed.width, processed.height), (640, 480));
//! assert_eq!(processed.quality, Some(80));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod export;
mod pipeline;

pub use export::{
    ExportConfig, ExportConfigBuilder, ExportConfigError, ExportFormat, ParseExportFormatError,
};
pub use pipeline::{FilterKind, ImageAsset, ParseFilterKindError, Pipeline, TransformStep};
