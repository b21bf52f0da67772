//! Host project model consumed by the target classifier.
//!
//! # Responsibility
//! - Carry the slice of an Xcode project needed to locate a target's
//!   Info.plist: product type, configuration list, build settings.
//! - Derive the project root from the `project.pbxproj` path.
//!
//! # Invariants
//! - These types are plain input data; this crate never parses or writes
//!   `project.pbxproj` itself.
//! - Field names deserialize from the pbxproj spelling (`productType`,
//!   `buildConfigurationList`, ...).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// `productType` of app extension targets.
pub const PRODUCT_TYPE_APP_EXTENSION: &str = "com.apple.product-type.app-extension";
/// Build setting naming the target's Info.plist, relative to the project root.
pub const BUILD_SETTING_INFOPLIST_FILE: &str = "INFOPLIST_FILE";

/// One `PBXNativeTarget`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTarget {
    /// Display name used in diagnostics.
    pub name: String,
    pub product_type: String,
    pub build_configuration_list: ConfigurationList,
}

impl NativeTarget {
    pub fn is_app_extension(&self) -> bool {
        self.product_type == PRODUCT_TYPE_APP_EXTENSION
    }
}

/// One `XCConfigurationList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationList {
    pub default_configuration_name: String,
    #[serde(default)]
    pub build_configurations: Vec<BuildConfiguration>,
}

impl ConfigurationList {
    /// Returns the configuration named by `default_configuration_name`.
    pub fn default_configuration(&self) -> Option<&BuildConfiguration> {
        self.build_configurations
            .iter()
            .find(|config| config.name == self.default_configuration_name)
    }
}

/// One `XCBuildConfiguration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    pub name: String,
    #[serde(default)]
    pub build_settings: BTreeMap<String, String>,
}

impl BuildConfiguration {
    /// Returns the non-blank `INFOPLIST_FILE` setting, trimmed of
    /// surrounding whitespace.
    pub fn info_plist_file(&self) -> Option<&str> {
        self.build_settings
            .get(BUILD_SETTING_INFOPLIST_FILE)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

/// Returns the directory holding the `.xcodeproj` bundle for a
/// `<root>/<Name>.xcodeproj/project.pbxproj` path.
///
/// Paths with fewer than two components resolve to the empty (current)
/// directory.
pub fn project_root_from_project_file(project_file: impl AsRef<Path>) -> PathBuf {
    project_file
        .as_ref()
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
