//! Info.plist resolution and file loading.

use super::{ClassifyError, ClassifyResult};
use crate::project::{project_root_from_project_file, NativeTarget};
use log::{error, info};
use plist::Value;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Source of a target's decoded Info.plist.
pub trait InfoPlistLoader {
    fn load_info_plist(&self, target: &NativeTarget) -> ClassifyResult<Value>;
}

/// Loads Info.plist files from disk, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsInfoPlistLoader {
    project_root: PathBuf,
}

impl FsInfoPlistLoader {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Creates a loader rooted next to the `.xcodeproj` bundle that holds
    /// `project_file` (`<root>/<Name>.xcodeproj/project.pbxproj`).
    pub fn from_project_file(project_file: impl AsRef<Path>) -> Self {
        Self::new(project_root_from_project_file(project_file))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolves the Info.plist path of `target`'s default configuration.
    ///
    /// # Errors
    /// - `MissingDefaultConfiguration` when the default configuration name
    ///   matches no configuration in the list.
    /// - `MissingInfoPlistSetting` when `INFOPLIST_FILE` is unset or blank.
    pub fn info_plist_path(&self, target: &NativeTarget) -> ClassifyResult<PathBuf> {
        let list = &target.build_configuration_list;
        let config = list.default_configuration().ok_or_else(|| {
            ClassifyError::MissingDefaultConfiguration {
                target: target.name.clone(),
                configuration: list.default_configuration_name.clone(),
            }
        })?;
        let relative = config.info_plist_file().ok_or_else(|| {
            ClassifyError::MissingInfoPlistSetting {
                target: target.name.clone(),
                configuration: config.name.clone(),
            }
        })?;
        Ok(self.project_root.join(relative))
    }
}

impl InfoPlistLoader for FsInfoPlistLoader {
    /// # Side effects
    /// - Reads one file; emits `info_plist_load` events with duration and
    ///   status.
    fn load_info_plist(&self, target: &NativeTarget) -> ClassifyResult<Value> {
        let path = self.info_plist_path(target)?;
        let started_at = Instant::now();

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) => {
                error!(
                    "event=info_plist_load module=classify status=error target={} duration_ms={} error_code=io_failed error={}",
                    target.name,
                    started_at.elapsed().as_millis(),
                    source
                );
                return Err(ClassifyError::Io { path, source });
            }
        };

        match Value::from_reader(Cursor::new(bytes)) {
            Ok(value) => {
                info!(
                    "event=info_plist_load module=classify status=ok target={} duration_ms={}",
                    target.name,
                    started_at.elapsed().as_millis()
                );
                Ok(value)
            }
            Err(source) => {
                error!(
                    "event=info_plist_load module=classify status=error target={} duration_ms={} error_code=decode_failed error={}",
                    target.name,
                    started_at.elapsed().as_millis(),
                    source
                );
                Err(ClassifyError::Decode { path, source })
            }
        }
    }
}
