//! File system utility functions
//!
//! Recursive directory copy with no-overwrite semantics and recursive
//! deletion, mapped onto [`CopierError`].

use crate::error::{CopierError, Result};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Totals gathered while copying a directory tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopySummary {
    /// Regular files written
    pub files: usize,
    /// Directories visited on the destination side, including the root
    pub directories: usize,
    /// Bytes written across all files
    pub bytes: u64,
}

impl CopySummary {
    fn absorb(&mut self, other: CopySummary) {
        self.files += other.files;
        self.directories += other.directories;
        self.bytes += other.bytes;
    }
}

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils {
    create_parents: bool,
}

impl FileSystemUtils {
    /// Create a new instance that creates missing parent directories
    pub fn new() -> Self {
        Self {
            create_parents: true,
        }
    }

    /// Control whether a missing destination is created with all its parents
    /// or only as a single directory level
    pub fn with_create_parents(mut self, create_parents: bool) -> Self {
        self.create_parents = create_parents;
        self
    }

    /// Copy a single file, failing if the destination already exists
    #[instrument(skip(self))]
    pub fn copy_file_no_clobber<P: AsRef<Path> + std::fmt::Debug, Q: AsRef<Path> + std::fmt::Debug>(
        &self,
        src: P,
        dst: Q,
    ) -> Result<u64> {
        let src = src.as_ref();
        let dst = dst.as_ref();

        debug!("Copying file: {} -> {}", src.display(), dst.display());

        let mut reader = File::open(src)
            .map_err(|e| CopierError::file_system("open source file", src, e))?;

        let mut writer = match OpenOptions::new().write(true).create_new(true).open(dst) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(CopierError::copy_conflict(dst));
            }
            Err(e) => return Err(CopierError::file_system("create file", dst, e)),
        };

        let bytes_copied = io::copy(&mut reader, &mut writer)
            .map_err(|e| CopierError::file_system("copy file", dst, e))?;

        // Copy permissions
        let metadata = fs::metadata(src)
            .map_err(|e| CopierError::file_system("read metadata", src, e))?;
        fs::set_permissions(dst, metadata.permissions())
            .map_err(|e| CopierError::file_system("set permissions", dst, e))?;

        debug!("Successfully copied {} bytes", bytes_copied);
        Ok(bytes_copied)
    }

    /// Copy the directory tree at `src` into `dst`.
    ///
    /// `dst` is created when missing. Files directly inside `src` are copied
    /// first, then subdirectories are visited when `copy_subdirs` is set.
    /// Entries are processed in file-name order. No file at the destination
    /// is ever overwritten.
    #[instrument(skip(self))]
    pub fn copy_dir<P: AsRef<Path> + std::fmt::Debug, Q: AsRef<Path> + std::fmt::Debug>(
        &self,
        src: P,
        dst: Q,
        copy_subdirs: bool,
    ) -> Result<CopySummary> {
        let src = src.as_ref();
        let dst = dst.as_ref();

        if !src.is_dir() {
            return Err(CopierError::source_not_found(src));
        }

        // Snapshot entries before `dst` is created; `dst` may live inside `src`
        let (files, dirs) = self.list_entries(src)?;

        if !dst.is_dir() {
            self.create_dir(dst)?;
        }

        let mut summary = CopySummary {
            directories: 1,
            ..CopySummary::default()
        };

        for file in files {
            let name = file.file_name().unwrap_or_default();
            summary.bytes += self.copy_file_no_clobber(&file, dst.join(name))?;
            summary.files += 1;
        }

        if copy_subdirs {
            for dir in dirs {
                let name = dir.file_name().unwrap_or_default();
                summary.absorb(self.copy_dir(&dir, dst.join(name), copy_subdirs)?);
            }
        }

        Ok(summary)
    }

    /// Split the entries of `dir` into (files, directories), each sorted.
    /// Symlinks are classified by what they point to.
    fn list_entries(&self, dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        let read_dir =
            fs::read_dir(dir).map_err(|e| CopierError::file_system("read directory", dir, e))?;

        let mut files = Vec::new();
        let mut dirs = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| CopierError::file_system("read directory", dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            } else {
                files.push(path);
            }
        }

        files.sort();
        dirs.sort();
        Ok((files, dirs))
    }

    /// Create a directory, with or without its parents depending on
    /// configuration
    #[instrument(skip(self))]
    pub fn create_dir<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        let created = if self.create_parents {
            fs::create_dir_all(path)
        } else {
            fs::create_dir(path)
        };
        created.map_err(|e| CopierError::file_system("create directory", path, e))
    }

    /// Remove a directory and all its contents if it exists as a directory.
    ///
    /// Returns whether anything was removed. A non-directory at `path` is
    /// left untouched.
    #[instrument(skip(self))]
    pub fn remove_dir_all_if_exists<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Result<bool> {
        let path = path.as_ref();

        if !path.is_dir() {
            debug!("Directory does not exist: {}", path.display());
            return Ok(false);
        }

        match fs::remove_dir_all(path) {
            Ok(()) => {
                debug!("Removed directory: {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CopierError::file_system("remove directory", path, e)),
        }
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
