//! Directive execution
//!
//! Applies one directive at a time: delete the target if asked, then copy.

use crate::{
    config::Config,
    core::directive::CopyDirective,
    error::Result,
    utils::fs::{CopySummary, FileSystemUtils},
};
use tracing::{info, instrument};

/// Executes copy directives against the file system
pub struct DirectiveRunner {
    config: Config,
    fs_utils: FileSystemUtils,
}

impl DirectiveRunner {
    /// Create a new runner
    pub fn new(config: Config) -> Self {
        Self {
            fs_utils: FileSystemUtils::new().with_create_parents(config.create_parents),
            config,
        }
    }

    /// Execute a single directive: optional delete of the target, then a
    /// recursive copy of the origin into it
    #[instrument(skip(self, directive), fields(origin = %directive.origin_path.display(), target = %directive.target_path.display()))]
    pub fn execute(&self, directive: &CopyDirective) -> Result<CopySummary> {
        if directive.delete_target
            && self.fs_utils.remove_dir_all_if_exists(&directive.target_path)?
        {
            info!("Deleted target directory");
        }

        let summary = self.fs_utils.copy_dir(
            &directive.origin_path,
            &directive.target_path,
            self.config.copy_subdirs,
        )?;

        info!(
            "Copied {} files, {} directories, {} bytes",
            summary.files,
            summary.directories,
            summary.bytes
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CopierError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn directive(origin: &Path, target: &Path, delete_target: bool) -> CopyDirective {
        CopyDirective {
            origin_path: origin.to_path_buf(),
            target_path: target.to_path_buf(),
            delete_target,
        }
    }

    fn runner() -> DirectiveRunner {
        DirectiveRunner::new(Config::default())
    }

    #[test]
    fn test_delete_target_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let origin = temp_dir.path().join("origin");
        let target = temp_dir.path().join("target");
        fs::create_dir_all(origin.join("sub")).unwrap();
        fs::write(origin.join("sub").join("file.txt"), "fresh").unwrap();
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("stale.txt"), "stale").unwrap();

        runner().execute(&directive(&origin, &target, true)).unwrap();

        assert!(!target.join("stale.txt").exists());
        assert_eq!(
            fs::read_to_string(target.join("sub").join("file.txt")).unwrap(),
            "fresh"
        );
    }

    #[test]
    fn test_conflict_without_delete() {
        let temp_dir = TempDir::new().unwrap();
        let origin = temp_dir.path().join("origin");
        let target = temp_dir.path().join("target");
        fs::create_dir_all(&origin).unwrap();
        fs::create_dir_all(&target).unwrap();
        fs::write(origin.join("same.txt"), "new").unwrap();
        fs::write(target.join("same.txt"), "old").unwrap();

        let err = runner()
            .execute(&directive(&origin, &target, false))
            .unwrap_err();
        assert!(matches!(err, CopierError::CopyConflict { .. }));
        assert_eq!(fs::read_to_string(target.join("same.txt")).unwrap(), "old");
    }

    #[test]
    fn test_delete_target_leaves_plain_file() {
        let temp_dir = TempDir::new().unwrap();
        let origin = temp_dir.path().join("origin");
        let target = temp_dir.path().join("target");
        fs::create_dir_all(&origin).unwrap();
        fs::write(origin.join("a.txt"), "a").unwrap();
        fs::write(&target, "plain file").unwrap();

        let err = runner()
            .execute(&directive(&origin, &target, true))
            .unwrap_err();
        assert!(matches!(err, CopierError::FileSystem { .. }));
        assert_eq!(fs::read_to_string(&target).unwrap(), "plain file");
    }
}
