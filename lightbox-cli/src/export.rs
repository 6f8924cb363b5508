//! Export command implementation for the Lightbox CLI.
//!
//! Exports are described, not executed: the command resolves the export
//! settings and transform pipeline, applies the pipeline to the image's
//! metadata, and prints the resulting plan.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use lightbox_core::{CachedCatalogue, ImageCatalogue, ImageId, JsonCatalogue};
use lightbox_media::{
    ExportConfig, ExportFormat, FilterKind, ImageAsset, Pipeline, TransformStep,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOGUE, ARG_DATA_DIR, ARG_EXPORT_COMPRESS, ARG_EXPORT_FILTER, ARG_EXPORT_FORMAT,
    ARG_EXPORT_HEIGHT, ARG_EXPORT_QUALITY, ARG_EXPORT_RESOLUTION, ARG_EXPORT_WATERMARK,
    ARG_EXPORT_WIDTH, ARG_IMAGE_ID, CliError, ENV_EXPORT_IMAGE_ID, require_existing,
    resolve_data_paths,
};

/// Source dimensions are not stored in the catalogue; exports assume this canvas.
const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 600;

/// CLI arguments for the `export` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Describe how an image would be exported. Filters are \
                 applied in the order given, followed by an optional resize \
                 and an optional compression step; the remaining flags set \
                 the output format, resolution, watermark, and quality.",
    about = "Describe the export plan for an image"
)]
#[ortho_config(prefix = "LIGHTBOX")]
pub(crate) struct ExportArgs {
    /// Identifier of the image to export.
    #[arg(value_name = "image-id")]
    #[serde(default)]
    pub(crate) image_id: Option<String>,
    /// Directory containing the default catalogue filename.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the image catalogue (`catalogue.json`).
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Output format: "png", "jpeg", or "svg".
    #[arg(long = ARG_EXPORT_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
    /// Output resolution label (e.g. "1080p", "4k").
    #[arg(long = ARG_EXPORT_RESOLUTION, value_name = "label")]
    #[serde(default)]
    pub(crate) resolution: Option<String>,
    /// Watermark text stamped on the export.
    #[arg(long = ARG_EXPORT_WATERMARK, value_name = "text")]
    #[serde(default)]
    pub(crate) watermark: Option<String>,
    /// Output quality from 0 to 100.
    #[arg(long = ARG_EXPORT_QUALITY, value_name = "percent")]
    #[serde(default)]
    pub(crate) quality: Option<u8>,
    /// Filter to apply before exporting; repeat for several filters.
    #[arg(long = ARG_EXPORT_FILTER, value_name = "filter")]
    #[serde(default)]
    pub(crate) filter: Vec<String>,
    /// Resize the image to this width before exporting.
    #[arg(long = ARG_EXPORT_WIDTH, value_name = "pixels")]
    #[serde(default)]
    pub(crate) width: Option<u32>,
    /// Resize the image to this height before exporting.
    #[arg(long = ARG_EXPORT_HEIGHT, value_name = "pixels")]
    #[serde(default)]
    pub(crate) height: Option<u32>,
    /// Re-encode the image at this quality before exporting.
    #[arg(long = ARG_EXPORT_COMPRESS, value_name = "percent")]
    #[serde(default)]
    pub(crate) compress: Option<u8>,
}

impl ExportArgs {
    pub(crate) fn into_plan(self) -> Result<ExportPlan, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ExportPlan::try_from(merged)
    }
}

/// Resolved `export` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportPlan {
    /// Path to the image catalogue file.
    pub(crate) catalogue: Utf8PathBuf,
    /// Identifier of the image to export.
    pub(crate) image_id: ImageId,
    /// Validated export settings.
    pub(crate) settings: ExportConfig,
    /// Transform steps applied before export.
    pub(crate) pipeline: Pipeline,
}

impl ExportPlan {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalogue, ARG_CATALOGUE)
    }
}

impl TryFrom<ExportArgs> for ExportPlan {
    type Error = CliError;

    fn try_from(args: ExportArgs) -> Result<Self, Self::Error> {
        let raw_id = args.image_id.ok_or(CliError::MissingArgument {
            field: ARG_IMAGE_ID,
            env: ENV_EXPORT_IMAGE_ID,
        })?;
        let image_id = ImageId::new(raw_id)?;
        let (catalogue, _) = resolve_data_paths(args.data_dir, args.catalogue, None);
        let settings = resolve_settings(
            args.format.as_deref(),
            args.resolution,
            args.watermark,
            args.quality,
        )?;
        let pipeline = resolve_pipeline(&args.filter, args.width, args.height, args.compress)?;
        Ok(Self {
            catalogue,
            image_id,
            settings,
            pipeline,
        })
    }
}

fn resolve_settings(
    format: Option<&str>,
    resolution: Option<String>,
    watermark: Option<String>,
    quality: Option<u8>,
) -> Result<ExportConfig, CliError> {
    let mut builder = ExportConfig::builder();
    if let Some(raw) = format {
        builder = builder.with_format(raw.parse::<ExportFormat>()?);
    }
    if let Some(label) = resolution {
        builder = builder.with_resolution(label);
    }
    if let Some(text) = watermark {
        builder = builder.with_watermark(text);
    }
    if let Some(percent) = quality {
        builder = builder.with_quality(percent);
    }
    Ok(builder.build()?)
}

fn resolve_pipeline(
    filters: &[String],
    width: Option<u32>,
    height: Option<u32>,
    compress: Option<u8>,
) -> Result<Pipeline, CliError> {
    let mut pipeline = Pipeline::new();
    for raw in filters {
        pipeline.push(TransformStep::Filter(raw.parse::<FilterKind>()?));
    }
    match (width, height) {
        (Some(width), Some(height)) => pipeline.push(TransformStep::Resize { width, height }),
        (None, None) => {}
        _ => return Err(CliError::PartialResize),
    }
    if let Some(quality) = compress {
        pipeline.push(TransformStep::Compress { quality });
    }
    Ok(pipeline)
}

pub(super) fn run_export(args: ExportArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_export_with(args, &mut stdout)
}

pub(super) fn run_export_with(args: ExportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let plan = resolve_export_plan(args)?;
    let catalogue = CachedCatalogue::new(JsonCatalogue::new(plan.catalogue.clone()));
    let image = catalogue.details(&plan.image_id)?;
    let result = plan.pipeline.apply(ImageAsset::new(CANVAS_WIDTH, CANVAS_HEIGHT));
    render_plan(writer, &image.id, &plan, &result).map_err(CliError::WriteOutput)
}

fn resolve_export_plan(args: ExportArgs) -> Result<ExportPlan, CliError> {
    let plan = args.into_plan()?;
    plan.validate_sources()?;
    Ok(plan)
}

fn render_plan(
    writer: &mut dyn Write,
    id: &ImageId,
    plan: &ExportPlan,
    result: &ImageAsset,
) -> std::io::Result<()> {
    let settings = &plan.settings;
    writeln!(writer, "Export plan for {id}")?;
    writeln!(
        writer,
        "  format:     {} ({})",
        settings.format(),
        settings.format().summary()
    )?;
    writeln!(writer, "  resolution: {}", settings.resolution())?;
    writeln!(
        writer,
        "  watermark:  {}",
        settings.watermark().unwrap_or("none")
    )?;
    writeln!(writer, "  quality:    {}%", settings.quality())?;
    if plan.pipeline.is_empty() {
        writeln!(writer, "  transforms: none")?;
    } else {
        writeln!(writer, "  transforms:")?;
        for step in plan.pipeline.steps() {
            writeln!(writer, "    - {}", describe_step(step))?;
        }
    }
    writeln!(writer, "  result:     {}", describe_asset(result))?;
    Ok(())
}

fn describe_step(step: &TransformStep) -> String {
    match step {
        TransformStep::Filter(filter) => format!("apply {filter} filter"),
        TransformStep::Resize { width, height } => format!("resize to {width}x{height}"),
        TransformStep::Compress { quality } => format!("compress at quality {quality}"),
    }
}

fn describe_asset(asset: &ImageAsset) -> String {
    let filters = if asset.filters.is_empty() {
        String::from("none")
    } else {
        asset
            .filters
            .iter()
            .map(FilterKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let quality = asset
        .quality
        .map_or_else(|| String::from("unchanged"), |q| format!("{q}%"));
    format!(
        "{}x{}, filters: {filters}, quality: {quality}",
        asset.width, asset.height
    )
}
