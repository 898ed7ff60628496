use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Provides the full text of a named resource.
///
/// Implementations must return the whole resource or an error, never a
/// partial read.
pub trait FileSource {
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// Reads resources from disk, optionally relative to a root directory
#[derive(Debug, Clone, Default)]
pub struct FileSystemSource {
    root: Option<PathBuf>,
}

impl FileSystemSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative paths will be resolved against `root`; absolute paths are used as-is
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        FileSystemSource {
            root: Some(root.into()),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl FileSource for FileSystemSource {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        let full_path = self.resolve(path);
        log::debug!("Reading '{}'", full_path.display());
        // Fails with InvalidData on non UTF-8 content
        std::fs::read_to_string(full_path)
    }
}

/// In-memory resources, keyed by path. Useful for shaders embedded with `include_str!`
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.entries.insert(path.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FileSource for MemorySource {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.entries.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory resource named '{}'", path.display()),
            )
        })
    }
}

impl<T: FileSource + ?Sized> FileSource for &T {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        (**self).read_text(path)
    }
}
