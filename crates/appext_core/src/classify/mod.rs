//! App extension target classification.
//!
//! # Responsibility
//! - Decide whether an existing native target is an extension of a given
//!   type, based on the extension point its Info.plist declares.
//! - Keep file access behind `InfoPlistLoader` so matching stays pure.
//!
//! # Invariants
//! - Targets whose product type is not an app extension are rejected before
//!   any Info.plist is loaded.
//! - Unreadable or undecodable Info.plist files are errors for the caller.
//! - An Info.plist without an extension point identifier is reported in the
//!   log and classified as "no type"; it never fails the call.

use crate::model::extension_type::ExtensionType;
use crate::project::NativeTarget;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod loader;
mod matcher;

pub use loader::{FsInfoPlistLoader, InfoPlistLoader};
pub use matcher::{
    extension_point_identifier, info_plist_declares_type, info_plist_extension_type,
    inspect_info_plist, InfoPlistMatch,
};

pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Failures while resolving or reading a target's Info.plist.
#[derive(Debug)]
pub enum ClassifyError {
    /// The configuration list names a default configuration it does not hold.
    MissingDefaultConfiguration {
        target: String,
        configuration: String,
    },
    /// The default configuration has no `INFOPLIST_FILE` setting.
    MissingInfoPlistSetting {
        target: String,
        configuration: String,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode {
        path: PathBuf,
        source: plist::Error,
    },
}

impl Display for ClassifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDefaultConfiguration {
                target,
                configuration,
            } => write!(
                f,
                "target `{target}` has no build configuration named `{configuration}`"
            ),
            Self::MissingInfoPlistSetting {
                target,
                configuration,
            } => write!(
                f,
                "target `{target}` configuration `{configuration}` does not set INFOPLIST_FILE"
            ),
            Self::Io { path, source } => {
                write!(f, "failed to read Info.plist `{}`: {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "failed to decode Info.plist `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ClassifyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingDefaultConfiguration { .. } | Self::MissingInfoPlistSetting { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

/// Returns whether `target` is an app extension of `kind`.
///
/// # Errors
/// - Propagates loader failures (missing configuration, unreadable or
///   undecodable Info.plist) for app extension targets.
pub fn is_native_target_of_type(
    target: &NativeTarget,
    loader: &dyn InfoPlistLoader,
    kind: ExtensionType,
) -> ClassifyResult<bool> {
    if !target.is_app_extension() {
        debug!(
            "event=classify_target module=classify status=skipped target={} product_type={}",
            target.name, target.product_type
        );
        return Ok(false);
    }

    let info_plist = loader.load_info_plist(target)?;
    Ok(info_plist_declares_type(&target.name, &info_plist, kind))
}

/// Resolves the extension type `target` declares.
///
/// Returns `Ok(None)` for non-extension targets, missing identifiers and
/// identifiers outside the known table.
pub fn detect_extension_type(
    target: &NativeTarget,
    loader: &dyn InfoPlistLoader,
) -> ClassifyResult<Option<ExtensionType>> {
    if !target.is_app_extension() {
        return Ok(None);
    }

    let info_plist = loader.load_info_plist(target)?;
    Ok(matcher::resolve_declared_type(&target.name, &info_plist))
}

#[cfg(test)]
mod tests {
    use super::{detect_extension_type, is_native_target_of_type, ClassifyResult, InfoPlistLoader};
    use crate::descriptor::info_plist_for_type;
    use crate::model::extension_type::ExtensionType;
    use crate::project::{ConfigurationList, NativeTarget, PRODUCT_TYPE_APP_EXTENSION};
    use plist::{Dictionary, Value};
    use std::cell::Cell;

    struct StaticLoader {
        info_plist: Value,
        calls: Cell<usize>,
    }

    impl StaticLoader {
        fn new(info_plist: Value) -> Self {
            Self {
                info_plist,
                calls: Cell::new(0),
            }
        }
    }

    impl InfoPlistLoader for StaticLoader {
        fn load_info_plist(&self, _target: &NativeTarget) -> ClassifyResult<Value> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.info_plist.clone())
        }
    }

    fn target(product_type: &str) -> NativeTarget {
        NativeTarget {
            name: "ExtensionTarget".to_string(),
            product_type: product_type.to_string(),
            build_configuration_list: ConfigurationList {
                default_configuration_name: "Release".to_string(),
                build_configurations: Vec::new(),
            },
        }
    }

    #[test]
    fn non_extension_target_is_rejected_without_loading() {
        let loader = StaticLoader::new(Value::Dictionary(info_plist_for_type(
            ExtensionType::Widget,
        )));
        let app = target("com.apple.product-type.application");

        let matched = is_native_target_of_type(&app, &loader, ExtensionType::Widget)
            .expect("non-extension target should not fail");
        assert!(!matched);
        assert_eq!(detect_extension_type(&app, &loader).expect("detect"), None);
        assert_eq!(loader.calls.get(), 0);
    }

    #[test]
    fn extension_target_matches_only_declared_type() {
        let loader = StaticLoader::new(Value::Dictionary(info_plist_for_type(
            ExtensionType::Safari,
        )));
        let extension = target(PRODUCT_TYPE_APP_EXTENSION);

        for kind in ExtensionType::ALL {
            let matched =
                is_native_target_of_type(&extension, &loader, kind).expect("classify target");
            assert_eq!(matched, kind == ExtensionType::Safari, "mismatch for {kind}");
        }
        assert_eq!(
            detect_extension_type(&extension, &loader).expect("detect"),
            Some(ExtensionType::Safari)
        );
    }

    #[test]
    fn missing_identifier_is_false_for_every_type() {
        let loader = StaticLoader::new(Value::Dictionary(Dictionary::new()));
        let extension = target(PRODUCT_TYPE_APP_EXTENSION);

        for kind in ExtensionType::ALL {
            assert!(!is_native_target_of_type(&extension, &loader, kind).expect("classify"));
        }
        assert_eq!(detect_extension_type(&extension, &loader).expect("detect"), None);
    }
}
