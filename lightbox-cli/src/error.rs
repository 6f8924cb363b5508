//! Error types emitted by the Lightbox CLI.
//!
//! Keep this enum lean: most helpers in this crate return
//! `Result<_, CliError>`, and the workspace lint set denies
//! `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use lightbox_core::{
    CatalogueError, FavoriteStoreError, ImageIdError, ParseRoleError,
};
use lightbox_media::{ExportConfigError, ParseExportFormatError, ParseFilterKindError};

/// Failures surfaced to the terminal by `lightbox` subcommands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Command-line arguments did not parse.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Layered configuration could not be loaded or merged.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required argument was absent from every configuration layer.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the absent argument.
        field: &'static str,
        /// Environment variable consulted for the argument.
        env: &'static str,
    },
    /// A source path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Long flag name of the offending path argument.
        field: &'static str,
        /// Path that failed validation.
        path: Utf8PathBuf,
    },
    /// A source path exists but is not a regular file.
    #[error("{field} path {path:?} is not a regular file")]
    SourcePathNotFile {
        /// Long flag name of the offending path argument.
        field: &'static str,
        /// Path that failed validation.
        path: Utf8PathBuf,
    },
    /// A source path could not be inspected at all.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Long flag name of the offending path argument.
        field: &'static str,
        /// Path that failed validation.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
    /// The requested image identifier was empty.
    #[error(transparent)]
    InvalidImageId(#[from] ImageIdError),
    /// The `--role` value named no known role.
    #[error(transparent)]
    InvalidRole(#[from] ParseRoleError),
    /// The `--sort` value named no known ordering.
    #[error("unknown sort '{value}'; expected title, created-at, views, or popularity")]
    UnknownSort {
        /// Value supplied on the command line.
        value: String,
    },
    /// The `--format` value named no known export format.
    #[error(transparent)]
    InvalidExportFormat(#[from] ParseExportFormatError),
    /// A `--filter` value named no known filter.
    #[error(transparent)]
    InvalidFilter(#[from] ParseFilterKindError),
    /// Export settings failed validation.
    #[error(transparent)]
    InvalidExportSettings(#[from] ExportConfigError),
    /// Only one half of a resize was supplied.
    #[error("--width and --height must be provided together")]
    PartialResize,
    /// The catalogue could not be read or lacked the requested image.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    /// The favorites store could not be read or written.
    #[error(transparent)]
    FavoriteStore(#[from] FavoriteStoreError),
    /// Command output could not be written.
    #[error("failed to write command output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
