//! File access for the data files, through `cap-std` ambient directories.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing file for reading.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create or truncate a file for writing, creating its directory first.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, name) = split(path)?;
    fs_utf8::Dir::create_ambient_dir_all(dir, ambient_authority())?;
    fs_utf8::Dir::open_ambient_dir(dir, ambient_authority())?.create(name)
}

/// Whether `path` names a regular file.
///
/// A missing file or directory surfaces as [`io::ErrorKind::NotFound`].
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = split(path)?;
    fs_utf8::Dir::open_ambient_dir(dir, ambient_authority())?
        .metadata(name)
        .map(|meta| meta.is_file())
}

/// The directory holding `path` (the working directory for bare names) and
/// the file name within it.
fn split(path: &Utf8Path) -> io::Result<(&Utf8Path, &str)> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} does not name a file"),
        )
    })?;
    let dir = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Ok((dir, name))
}
