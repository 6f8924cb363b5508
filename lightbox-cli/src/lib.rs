//! Command-line interface for browsing a Lightbox image catalogue.
//!
//! The `lightbox` binary reads a JSON catalogue and a JSON favorites file
//! from a shared data directory and exposes four subcommands: `list`,
//! `show`, `favorite`, and `export`. Argument values can come from CLI
//! flags, configuration files, or `LIGHTBOX_*` environment variables.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use lightbox_core::Role;

mod error;
mod export;
mod favorite;
mod list;
mod show;

pub use error::CliError;

use export::ExportArgs;
use favorite::FavoriteArgs;
use list::ListArgs;
use show::ShowArgs;

pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_FAVORITES: &str = "favorites";
pub(crate) const ARG_ROLE: &str = "role";
pub(crate) const ARG_SORT: &str = "sort";
pub(crate) const ARG_IMAGE_ID: &str = "image-id";
pub(crate) const ARG_EXPORT_FORMAT: &str = "format";
pub(crate) const ARG_EXPORT_RESOLUTION: &str = "resolution";
pub(crate) const ARG_EXPORT_WATERMARK: &str = "watermark";
pub(crate) const ARG_EXPORT_QUALITY: &str = "quality";
pub(crate) const ARG_EXPORT_FILTER: &str = "filter";
pub(crate) const ARG_EXPORT_WIDTH: &str = "width";
pub(crate) const ARG_EXPORT_HEIGHT: &str = "height";
pub(crate) const ARG_EXPORT_COMPRESS: &str = "compress";
pub(crate) const ENV_SHOW_IMAGE_ID: &str = "LIGHTBOX_CMDS_SHOW_IMAGE_ID";
pub(crate) const ENV_FAVORITE_IMAGE_ID: &str = "LIGHTBOX_CMDS_FAVORITE_IMAGE_ID";
pub(crate) const ENV_EXPORT_IMAGE_ID: &str = "LIGHTBOX_CMDS_EXPORT_IMAGE_ID";

/// Default catalogue filename inside the data directory.
pub(crate) const CATALOGUE_FILENAME: &str = "catalogue.json";
/// Default favorites filename inside the data directory.
pub(crate) const FAVORITES_FILENAME: &str = "favorites.json";

/// Run the Lightbox CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::List(args) => list::run_list(args),
        Command::Show(args) => show::run_show(args),
        Command::Favorite(args) => favorite::run_favorite(args),
        Command::Export(args) => export::run_export(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "lightbox",
    about = "Browse, favorite, and export images from a local catalogue",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List catalogue images, sorted or ranked by popularity.
    List(ListArgs),
    /// Show the full details of a single image.
    Show(ShowArgs),
    /// Add an image to the favorites list if it is eligible.
    Favorite(FavoriteArgs),
    /// Describe the export plan for a single image.
    Export(ExportArgs),
}

/// Resolve the catalogue and favorites paths from shared data-directory flags.
///
/// Explicit `--catalogue` and `--favorites` overrides win; otherwise both
/// default to the standard filenames inside `--data-dir` (itself defaulting
/// to the current directory).
pub(crate) fn resolve_data_paths(
    data_dir: Option<Utf8PathBuf>,
    catalogue: Option<Utf8PathBuf>,
    favorites: Option<Utf8PathBuf>,
) -> (Utf8PathBuf, Utf8PathBuf) {
    let data_dir = data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
    let catalogue = catalogue.unwrap_or_else(|| data_dir.join(CATALOGUE_FILENAME));
    let favorites = favorites.unwrap_or_else(|| data_dir.join(FAVORITES_FILENAME));
    (catalogue, favorites)
}

/// Parse an optional `--role` value, defaulting to [`Role::Guest`].
pub(crate) fn resolve_role(raw: Option<&str>) -> Result<Role, CliError> {
    let role = raw.map(str::parse::<Role>).transpose()?;
    Ok(role.unwrap_or_default())
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match lightbox_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
