//! Core logic for iOS/macOS app extension targets.
//! Generates per-type Info.plist content and link metadata, and classifies
//! existing extension targets by their declared extension point.

pub mod classify;
pub mod descriptor;
pub mod extension_point;
pub mod logging;
pub mod model;
pub mod project;

pub use classify::{
    detect_extension_type, extension_point_identifier, info_plist_declares_type,
    info_plist_extension_type, inspect_info_plist, is_native_target_of_type, ClassifyError,
    ClassifyResult, FsInfoPlistLoader, InfoPlistLoader, InfoPlistMatch,
};
pub use descriptor::{
    build_info_plist, frameworks_for_type, info_plist_for_type, needs_embedded_swift,
    principal_class_for_type, DescriptorError, DescriptorResult, ExtensionDescriptor,
};
pub use extension_point::{
    extension_point_identifier_for, extension_type_for_identifier,
    known_extension_point_identifiers,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::extension_type::{parse_extension_type, ExtensionType, ExtensionTypeError};
pub use project::{BuildConfiguration, ConfigurationList, NativeTarget};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
