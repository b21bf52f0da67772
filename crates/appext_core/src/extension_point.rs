//! Extension point identifier table.
//!
//! # Responsibility
//! - Map OS-defined `NSExtensionPointIdentifier` strings to `ExtensionType`.
//! - Provide the identifier written into generated Info.plist content.
//!
//! # Invariants
//! - Every `ExtensionType` has exactly one identifier (exhaustive match).
//! - No identifier maps to two types.
//! - Identifier lookup is exact and case-sensitive; unknown identifiers have
//!   no type.

use crate::model::extension_type::ExtensionType;

/// Returns the extension point identifier declared by targets of `kind`.
pub fn extension_point_identifier_for(kind: ExtensionType) -> &'static str {
    match kind {
        ExtensionType::Widget => "com.apple.widgetkit-extension",
        ExtensionType::NotificationContent => "com.apple.usernotifications.content-extension",
        ExtensionType::NotificationService => "com.apple.usernotifications.service",
        ExtensionType::Share => "com.apple.share-services",
        // TODO: decide whether a separate `intents` tag should alias this id.
        ExtensionType::Intent => "com.apple.intents-service",
        ExtensionType::BgDownload => "com.apple.background-asset-downloader-extension",
        ExtensionType::IntentUi => "com.apple.intents-ui-service",
        ExtensionType::Spotlight => "com.apple.spotlight.import",
        ExtensionType::Matter => "com.apple.matter.support.extension.device-setup",
        ExtensionType::QuicklookThumbnail => "com.apple.quicklook.thumbnail",
        ExtensionType::Safari => "com.apple.Safari.web-extension",
    }
}

/// Resolves a declared extension point identifier to its type.
///
/// Returns `None` for identifiers outside the known table.
pub fn extension_type_for_identifier(identifier: &str) -> Option<ExtensionType> {
    ExtensionType::ALL
        .into_iter()
        .find(|kind| extension_point_identifier_for(*kind) == identifier)
}

/// Returns `(identifier, type)` pairs for every known extension point.
pub fn known_extension_point_identifiers(
) -> impl Iterator<Item = (&'static str, ExtensionType)> {
    ExtensionType::ALL
        .into_iter()
        .map(|kind| (extension_point_identifier_for(kind), kind))
}

#[cfg(test)]
mod tests {
    use super::{
        extension_point_identifier_for, extension_type_for_identifier,
        known_extension_point_identifiers,
    };
    use crate::model::extension_type::ExtensionType;
    use std::collections::BTreeSet;

    #[test]
    fn every_type_has_a_non_empty_identifier() {
        for kind in ExtensionType::ALL {
            assert!(
                !extension_point_identifier_for(kind).is_empty(),
                "missing identifier for {kind}"
            );
        }
    }

    #[test]
    fn identifiers_are_injective() {
        let identifiers: BTreeSet<&str> = known_extension_point_identifiers()
            .map(|(identifier, _)| identifier)
            .collect();
        assert_eq!(identifiers.len(), ExtensionType::ALL.len());
    }

    #[test]
    fn forward_and_reverse_lookup_agree() {
        for (identifier, kind) in known_extension_point_identifiers() {
            assert_eq!(extension_type_for_identifier(identifier), Some(kind));
        }
    }

    #[test]
    fn resolves_widgetkit_identifier() {
        assert_eq!(
            extension_type_for_identifier("com.apple.widgetkit-extension"),
            Some(ExtensionType::Widget)
        );
        assert_eq!(
            extension_type_for_identifier("com.apple.intents-service"),
            Some(ExtensionType::Intent)
        );
    }

    #[test]
    fn unknown_or_miscased_identifier_has_no_type() {
        assert_eq!(extension_type_for_identifier("com.apple.keyboard-service"), None);
        assert_eq!(extension_type_for_identifier("com.apple.safari.web-extension"), None);
        assert_eq!(extension_type_for_identifier(""), None);
    }
}
