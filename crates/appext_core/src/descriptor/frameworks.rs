//! System frameworks linked by each extension type.

use crate::model::extension_type::ExtensionType;

/// Returns framework names (without `.framework`) in link order.
pub fn frameworks_for_type(kind: ExtensionType) -> &'static [&'static str] {
    match kind {
        ExtensionType::Widget => &["WidgetKit", "SwiftUI"],
        ExtensionType::Intent => &["Intents"],
        ExtensionType::IntentUi => &["IntentsUI"],
        ExtensionType::QuicklookThumbnail => &["QuickLookThumbnailing"],
        ExtensionType::NotificationContent => &["UserNotifications", "UserNotificationsUI"],
        ExtensionType::NotificationService
        | ExtensionType::Share
        | ExtensionType::BgDownload
        | ExtensionType::Spotlight
        | ExtensionType::Matter
        | ExtensionType::Safari => &[],
    }
}
