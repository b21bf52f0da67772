//! Swift runtime embedding requirement.

use crate::model::extension_type::ExtensionType;

/// Returns whether the host app must embed the Swift standard libraries
/// when it carries an extension of `kind`.
pub fn needs_embedded_swift(kind: ExtensionType) -> bool {
    match kind {
        ExtensionType::Spotlight
        | ExtensionType::Share
        | ExtensionType::Intent
        | ExtensionType::IntentUi
        | ExtensionType::BgDownload
        | ExtensionType::QuicklookThumbnail
        | ExtensionType::Matter => true,
        ExtensionType::Widget
        | ExtensionType::NotificationContent
        | ExtensionType::NotificationService
        | ExtensionType::Safari => false,
    }
}
