//! List command implementation for the Lightbox CLI.

use std::io::Write;
use std::str::FromStr;

use camino::Utf8PathBuf;
use clap::Parser;
use lightbox_core::{
    CachedCatalogue, FavoriteStore, Favorites, ImageCatalogue, ImageRecord, JsonCatalogue,
    JsonFavoriteStore, Role, SortKey, sort_images,
};
use lightbox_scorer::{EngagementScorer, rank_by_popularity};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOGUE, ARG_DATA_DIR, ARG_FAVORITES, ARG_ROLE, ARG_SORT, CliError, require_existing,
    resolve_data_paths, resolve_role,
};

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List every image in the catalogue. Images can be sorted by \
                 title, creation date, or view count, or ranked by their \
                 popularity score for the given role. Favorited images are \
                 marked with an asterisk.",
    about = "List catalogue images"
)]
#[ortho_config(prefix = "LIGHTBOX")]
pub(crate) struct ListArgs {
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
    /// Role popularity is ranked for ("guest", "premium", or "admin").
    #[arg(long = ARG_ROLE, value_name = "role")]
    #[serde(default)]
    pub(crate) role: Option<String>,
    /// Ordering: "title", "created-at", "views", or "popularity".
    #[arg(long = ARG_SORT, value_name = "order")]
    #[serde(default)]
    pub(crate) sort: Option<String>,
}

impl ListArgs {
    pub(crate) fn into_config(self) -> Result<ListConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ListConfig::try_from(merged)
    }
}

/// Orderings accepted by `list --sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListOrdering {
    /// Plain metadata sort.
    Key(SortKey),
    /// Weighted popularity ranking, highest score first.
    Popularity,
}

impl Default for ListOrdering {
    fn default() -> Self {
        Self::Key(SortKey::default())
    }
}

impl FromStr for ListOrdering {
    type Err = CliError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("popularity") {
            return Ok(Self::Popularity);
        }
        SortKey::from_str(raw)
            .map(Self::Key)
            .map_err(|_| CliError::UnknownSort {
                value: raw.to_owned(),
            })
    }
}

/// Resolved `list` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListConfig {
    /// Path to the image catalogue file.
    pub(crate) catalogue: Utf8PathBuf,
    /// Path to the favorites list file.
    pub(crate) favorites: Utf8PathBuf,
    /// Requested output ordering.
    pub(crate) ordering: ListOrdering,
    /// Role popularity scores are computed for.
    pub(crate) role: Role,
}

impl ListConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        // The favorites file is optional; a missing file loads as empty.
        require_existing(&self.catalogue, ARG_CATALOGUE)
    }
}

impl TryFrom<ListArgs> for ListConfig {
    type Error = CliError;

    fn try_from(args: ListArgs) -> Result<Self, Self::Error> {
        let (catalogue, favorites) =
            resolve_data_paths(args.data_dir, args.catalogue, args.favorites);
        let ordering = args
            .sort
            .as_deref()
            .map(ListOrdering::from_str)
            .transpose()?
            .unwrap_or_default();
        let role = resolve_role(args.role.as_deref())?;
        Ok(Self {
            catalogue,
            favorites,
            ordering,
            role,
        })
    }
}

pub(super) fn run_list(args: ListArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_list_with(args, &mut stdout)
}

pub(super) fn run_list_with(args: ListArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_list_config(args)?;
    let catalogue = CachedCatalogue::new(JsonCatalogue::new(config.catalogue.clone()));
    let favorites = JsonFavoriteStore::new(config.favorites.clone()).load()?;
    let images = catalogue.list()?;
    match config.ordering {
        ListOrdering::Key(key) => {
            let mut images = images;
            sort_images(&mut images, key);
            for image in &images {
                write_list_line(writer, image, &favorites, None)?;
            }
        }
        ListOrdering::Popularity => {
            let scorer = EngagementScorer::default();
            for ranked in rank_by_popularity(images, &scorer, config.role) {
                write_list_line(writer, &ranked.image, &favorites, Some(ranked.score))?;
            }
        }
    }
    Ok(())
}

fn resolve_list_config(args: ListArgs) -> Result<ListConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn write_list_line(
    writer: &mut dyn Write,
    image: &ImageRecord,
    favorites: &Favorites,
    score: Option<f64>,
) -> Result<(), CliError> {
    let marker = if favorites.contains(&image.id) { '*' } else { ' ' };
    match score {
        Some(score) => writeln!(
            writer,
            "{marker} {id}  {title}  [{score:.1}]",
            id = image.id,
            title = image.display_title()
        ),
        None => writeln!(
            writer,
            "{marker} {id}  {title}",
            id = image.id,
            title = image.display_title()
        ),
    }
    .map_err(CliError::WriteOutput)
}
