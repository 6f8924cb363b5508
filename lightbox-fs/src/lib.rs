//! Shared filesystem helpers built on `cap-std` and `camino`.
//!
//! The catalogue loaders and the favourites store route all of their IO
//! through these helpers so that every path is UTF-8 and every open is
//! capability-scoped rather than reaching for `std::fs` directly.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Read the entire contents of a UTF-8 file into a string.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let (dir, file_name) = open_dir_and_file(path)?;
    dir.read_to_string(file_name.as_str())
}

/// Write `contents` to `path`, creating missing parent directories first.
///
/// An existing file at `path` is replaced.
pub fn write_utf8_file(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, file_name) = open_dir_and_file(path)?;
    dir.write(file_name.as_str(), contents)
}

/// Ensure the parent directory for `path` exists, handling absolute paths safely for cap-std.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base_dir, relative) = base_dir_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base_dir.create_dir_all(&relative)?;
    Ok(())
}

/// Return whether a path exists and is a regular file using capability-based IO.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Resolve an ambient directory for `path` and return it with the file name.
///
/// Bare file names resolve against the current directory.
fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_string();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Split a parent path into an ambient base directory and a relative suffix.
///
/// Absolute paths resolve from the filesystem root; relative paths from
/// the current directory.
fn base_dir_and_relative(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let (base, relative) = parent
        .strip_prefix("/")
        .map_or_else(|_| (".", parent), |rest| ("/", rest));
    let dir = fs_utf8::Dir::open_ambient_dir(base, ambient_authority())?;
    Ok((dir, relative.to_path_buf()))
}
