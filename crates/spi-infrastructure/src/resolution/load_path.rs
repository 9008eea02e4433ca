//! Filesystem load path
//!
//! An ordered list of directories. The registry resource for a key lives at
//! `<dir>/<registry-root>/<contract identity>`; every directory holding one
//! contributes it. Files are opened afresh on every discovery run.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use spi_application::{Located, RegistrySource, ResolutionContext};
use spi_domain::{Error, RegistryKey, Result};
use tracing::debug;

/// Ordered set of directories searched for registry resources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadPath {
    entries: Vec<PathBuf>,
}

impl LoadPath {
    /// Create a load path from directories, searched in the given order
    pub fn new<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a platform path list (`a:b` on Unix, `a;b` on Windows)
    pub fn from_path_list(list: &OsStr) -> Self {
        Self {
            entries: std::env::split_paths(list)
                .filter(|path| !path.as_os_str().is_empty())
                .collect(),
        }
    }

    /// Append a directory
    pub fn push(&mut self, entry: impl Into<PathBuf>) {
        self.entries.push(entry.into());
    }

    /// Directories in search order
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Whether the load path has no directory
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup<'a>(&'a self, dir: &Path, key: &RegistryKey) -> Option<Located<'a>> {
        match fs::metadata(dir) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => {
                return Some(Err(Error::resource_resolution(
                    dir.display().to_string(),
                    "load path entry is not a directory",
                )));
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(entry = %dir.display(), "Skipping missing load path entry");
                return None;
            }
            Err(error) => {
                return Some(Err(Error::resource_resolution_with_source(
                    dir.display().to_string(),
                    "cannot access load path entry",
                    error,
                )));
            }
        }

        let candidate = dir.join(key.relative_path());
        match fs::metadata(&candidate) {
            Ok(metadata) if metadata.is_file() => {
                let source: Box<dyn RegistrySource + 'a> = Box::new(FileSource::new(candidate));
                Some(Ok(source))
            }
            Ok(_) => Some(Err(Error::resource_resolution(
                candidate.display().to_string(),
                "registry resource is not a regular file",
            ))),
            Err(error) if error.kind() == io::ErrorKind::NotFound => None,
            Err(error) => Some(Err(Error::resource_resolution_with_source(
                candidate.display().to_string(),
                "cannot access registry resource",
                error,
            ))),
        }
    }
}

impl ResolutionContext for LoadPath {
    fn describe(&self) -> String {
        let entries: Vec<String> = self
            .entries
            .iter()
            .map(|entry| entry.display().to_string())
            .collect();
        format!("load path [{}]", entries.join(", "))
    }

    fn locate(&self, key: &RegistryKey) -> Vec<Located<'_>> {
        self.entries
            .iter()
            .filter_map(|dir| self.lookup(dir, key))
            .collect()
    }
}

/// Registry resource backed by a file
struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    fn new(path: PathBuf) -> Self {
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl RegistrySource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path).map_err(|error| {
            Error::resource_resolution_with_source(
                self.location.clone(),
                "cannot open registry resource",
                error,
            )
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}
