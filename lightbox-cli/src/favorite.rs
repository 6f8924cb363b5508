//! Favorite command implementation for the Lightbox CLI.
//!
//! The command checks eligibility before touching the store: ineligible
//! requests leave the favorites file untouched and report the denial
//! reason on stdout.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use lightbox_core::{
    CachedCatalogue, FavoriteStore, ImageCatalogue, ImageId, JsonCatalogue, JsonFavoriteStore,
    Role, check_favorite_now,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOGUE, ARG_DATA_DIR, ARG_FAVORITES, ARG_IMAGE_ID, ARG_ROLE, CliError,
    ENV_FAVORITE_IMAGE_ID, require_existing, resolve_data_paths, resolve_role,
};

/// CLI arguments for the `favorite` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Add an image to the favorites list. The image must exist \
                 in the catalogue and pass the eligibility rules for the \
                 given role; a denied request reports its reason and leaves \
                 the favorites file unchanged.",
    about = "Add an image to the favorites list"
)]
#[ortho_config(prefix = "LIGHTBOX")]
pub(crate) struct FavoriteArgs {
    /// Identifier of the image to favorite.
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
    /// Role the eligibility rules are evaluated for.
    #[arg(long = ARG_ROLE, value_name = "role")]
    #[serde(default)]
    pub(crate) role: Option<String>,
}

impl FavoriteArgs {
    pub(crate) fn into_config(self) -> Result<FavoriteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        FavoriteConfig::try_from(merged)
    }
}

/// Resolved `favorite` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FavoriteConfig {
    /// Path to the image catalogue file.
    pub(crate) catalogue: Utf8PathBuf,
    /// Path to the favorites list file.
    pub(crate) favorites: Utf8PathBuf,
    /// Identifier of the image to favorite.
    pub(crate) image_id: ImageId,
    /// Role the eligibility rules are evaluated for.
    pub(crate) role: Role,
}

impl FavoriteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        // A missing favorites file is fine; the first save creates it.
        require_existing(&self.catalogue, ARG_CATALOGUE)
    }
}

impl TryFrom<FavoriteArgs> for FavoriteConfig {
    type Error = CliError;

    fn try_from(args: FavoriteArgs) -> Result<Self, Self::Error> {
        let raw_id = args.image_id.ok_or(CliError::MissingArgument {
            field: ARG_IMAGE_ID,
            env: ENV_FAVORITE_IMAGE_ID,
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

pub(super) fn run_favorite(args: FavoriteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_favorite_with(args, &mut stdout)
}

pub(super) fn run_favorite_with(
    args: FavoriteArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_favorite_config(args)?;
    let catalogue = CachedCatalogue::new(JsonCatalogue::new(config.catalogue.clone()));
    let image = catalogue.details(&config.image_id)?;
    let mut store = JsonFavoriteStore::new(config.favorites.clone());
    let mut favorites = store.load()?;
    let decision = check_favorite_now(&image, config.role, &favorites);
    if decision.is_allowed() {
        favorites.insert(image.id.clone());
        store.save(&favorites)?;
    }
    // Denials are an ordinary outcome, reported on stdout with exit code 0.
    writeln!(writer, "{}: {}", image.id, decision.reason()).map_err(CliError::WriteOutput)
}

fn resolve_favorite_config(args: FavoriteArgs) -> Result<FavoriteConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}
