//! Generated configuration for one extension type.
//!
//! # Responsibility
//! - Build the Info.plist content a new extension target starts from.
//! - Report which system frameworks the target links.
//! - Report whether the Swift runtime must be embedded in the host app.
//!
//! # Invariants
//! - Output depends only on `ExtensionType`; repeated calls are identical.
//! - Generated Info.plist always carries
//!   `NSExtension.NSExtensionPointIdentifier` for the requested type.

use crate::model::extension_type::ExtensionType;
use plist::Dictionary;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::string::FromUtf8Error;

mod frameworks;
mod info_plist;
mod runtime;

pub use frameworks::frameworks_for_type;
pub use info_plist::{
    build_info_plist, info_plist_for_type, principal_class_for_type,
    PRODUCT_MODULE_NAME_PLACEHOLDER,
};
pub use runtime::needs_embedded_swift;

pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// Info.plist serialization failures.
#[derive(Debug)]
pub enum DescriptorError {
    Serialize(plist::Error),
    Encoding(FromUtf8Error),
}

impl Display for DescriptorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize Info.plist: {err}"),
            Self::Encoding(err) => write!(f, "serialized Info.plist is not UTF-8: {err}"),
        }
    }
}

impl Error for DescriptorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Encoding(err) => Some(err),
        }
    }
}

impl From<plist::Error> for DescriptorError {
    fn from(value: plist::Error) -> Self {
        Self::Serialize(value)
    }
}

impl From<FromUtf8Error> for DescriptorError {
    fn from(value: FromUtf8Error) -> Self {
        Self::Encoding(value)
    }
}

/// Everything generated for one extension type.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionDescriptor {
    pub kind: ExtensionType,
    /// Root dictionary of the target's Info.plist.
    pub info_plist: Dictionary,
    /// System framework names, without the `.framework` suffix.
    pub frameworks: &'static [&'static str],
    pub needs_embedded_swift: bool,
}

impl ExtensionDescriptor {
    pub fn for_type(kind: ExtensionType) -> Self {
        Self {
            kind,
            info_plist: info_plist_for_type(kind),
            frameworks: frameworks_for_type(kind),
            needs_embedded_swift: needs_embedded_swift(kind),
        }
    }

    /// Serializes `info_plist` as XML property-list text.
    pub fn to_xml(&self) -> DescriptorResult<String> {
        info_plist::dictionary_to_xml(&self.info_plist)
    }
}

#[cfg(test)]
mod tests {
    use super::ExtensionDescriptor;
    use crate::model::extension_type::ExtensionType;

    #[test]
    fn bundles_all_lookups_for_widget() {
        let descriptor = ExtensionDescriptor::for_type(ExtensionType::Widget);
        assert_eq!(descriptor.kind, ExtensionType::Widget);
        assert_eq!(descriptor.frameworks, &["WidgetKit", "SwiftUI"]);
        assert!(!descriptor.needs_embedded_swift);
        assert!(descriptor.info_plist.contains_key("NSExtension"));
    }

    #[test]
    fn descriptor_is_deterministic() {
        for kind in ExtensionType::ALL {
            assert_eq!(
                ExtensionDescriptor::for_type(kind),
                ExtensionDescriptor::for_type(kind)
            );
        }
    }

    #[test]
    fn serializes_to_xml_plist() {
        let xml = ExtensionDescriptor::for_type(ExtensionType::Share)
            .to_xml()
            .expect("share descriptor should serialize");
        assert!(xml.contains("<plist"));
        assert!(xml.contains("com.apple.share-services"));
        assert!(xml.contains("$(PRODUCT_MODULE_NAME).ShareViewController"));
    }
}
