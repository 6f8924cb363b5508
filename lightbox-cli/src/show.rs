//! Show command implementation for the Lightbox CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use lightbox_core::{
    CachedCatalogue, FavoriteStore, Favorites, ImageCatalogue, ImageId, ImageRecord,
    JsonCatalogue, JsonFavoriteStore, PopularityScorer, Role,
};
use lightbox_scorer::EngagementScorer;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOGUE, ARG_DATA_DIR, ARG_FAVORITES, ARG_IMAGE_ID, ARG_ROLE, CliError,
    ENV_SHOW_IMAGE_ID, require_existing, resolve_data_paths, resolve_role,
};

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Show every stored detail for one catalogue image, together \
                 with its popularity score for the given role and whether it \
                 is already in the favorites list.",
    about = "Show the details of a single image"
)]
#[ortho_config(prefix = "LIGHTBOX")]
pub(crate) struct ShowArgs {
    /// Identifier of the image to show.
    #[arg(value_name = "image-id")]
    #[serde(default)]
    pub(crate) image_id: Option<String>,
    /// Directory containing the default catalogue and favorites filenames.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the image catalogue (`catalogue.json`).
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Override the path to the favorites list (`favorites.json`).
    #[arg(long = ARG_FAVORITES, value_name = "path")]
    #[serde(default)]
    pub(crate) favorites: Option<Utf8PathBuf>,
    /// Role the popularity score is computed for.
    #[arg(long = ARG_ROLE, value_name = "role")]
    #[serde(default)]
    pub(crate) role: Option<String>,
}

impl ShowArgs {
    pub(crate) fn into_config(self) -> Result<ShowConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ShowConfig::try_from(merged)
    }
}

/// Resolved `show` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShowConfig {
    /// Path to the image catalogue file.
    pub(crate) catalogue: Utf8PathBuf,
    /// Path to the favorites list file.
    pub(crate) favorites: Utf8PathBuf,
    /// Identifier of the image to show.
    pub(crate) image_id: ImageId,
    /// Role the popularity score is computed for.
    pub(crate) role: Role,
}

impl ShowConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalogue, ARG_CATALOGUE)
    }
}

impl TryFrom<ShowArgs> for ShowConfig {
    type Error = CliError;

    fn try_from(args: ShowArgs) -> Result<Self, Self::Error> {
        let raw_id = args.image_id.ok_or(CliError::MissingArgument {
            field: ARG_IMAGE_ID,
            env: ENV_SHOW_IMAGE_ID,
        })?;
        let image_id = ImageId::new(raw_id)?;
        let (catalogue, favorites) =
            resolve_data_paths(args.data_dir, args.catalogue, args.favorites);
        let role = resolve_role(args.role.as_deref())?;
        Ok(Self {
            catalogue,
            favorites,
            image_id,
            role,
        })
    }
}

pub(super) fn run_show(args: ShowArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_show_with(args, &mut stdout)
}

pub(super) fn run_show_with(args: ShowArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_show_config(args)?;
    let catalogue = CachedCatalogue::new(JsonCatalogue::new(config.catalogue.clone()));
    let image = catalogue.details(&config.image_id)?;
    let favorites = JsonFavoriteStore::new(config.favorites.clone()).load()?;
    let scorer = EngagementScorer::default();
    let score = scorer.sanitised_score(&image.engagement, config.role);
    render_details(writer, &image, &favorites, score).map_err(CliError::WriteOutput)
}

fn resolve_show_config(args: ShowArgs) -> Result<ShowConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn render_details(
    writer: &mut dyn Write,
    image: &ImageRecord,
    favorites: &Favorites,
    score: f64,
) -> std::io::Result<()> {
    let published = image.created_at_utc().map_or_else(
        || String::from("Unknown date"),
        |at| at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    let favorited = if favorites.contains(&image.id) {
        "yes"
    } else {
        "no"
    };
    writeln!(writer, "Id:          {}", image.id)?;
    writeln!(writer, "Title:       {}", image.display_title())?;
    writeln!(writer, "Description: {}", image.display_description())?;
    writeln!(writer, "Url:         {}", image.url.as_deref().unwrap_or("none"))?;
    writeln!(writer, "Published:   {published}")?;
    writeln!(writer, "Kind:        {}", image.kind.as_deref().unwrap_or("none"))?;
    writeln!(writer, "Views:       {}", image.engagement.views)?;
    writeln!(writer, "Likes:       {}", image.engagement.likes)?;
    writeln!(writer, "Shares:      {}", image.engagement.shares)?;
    writeln!(writer, "Score:       {score:.1}")?;
    writeln!(writer, "Favorited:   {favorited}")?;
    Ok(())
}
