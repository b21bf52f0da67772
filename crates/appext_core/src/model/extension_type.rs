//! Extension type tags and their string form.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Category of an app extension target.
///
/// Serialized with the kebab-case tag used in plugin configuration, e.g.
/// `notification-content` or `bg-download`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionType {
    /// WidgetKit home screen / lock screen widget.
    Widget,
    /// Custom UI for a delivered notification.
    NotificationContent,
    /// Mutates notification payloads before delivery.
    NotificationService,
    /// Share sheet destination.
    Share,
    /// SiriKit intents handler.
    Intent,
    /// Background Assets downloader.
    BgDownload,
    /// SiriKit intents UI.
    IntentUi,
    /// Spotlight importer.
    Spotlight,
    /// Matter device setup.
    Matter,
    /// Quick Look thumbnail provider.
    QuicklookThumbnail,
    /// Safari web extension.
    Safari,
}

impl ExtensionType {
    /// Every variant, in declaration order.
    pub const ALL: [ExtensionType; 11] = [
        Self::Widget,
        Self::NotificationContent,
        Self::NotificationService,
        Self::Share,
        Self::Intent,
        Self::BgDownload,
        Self::IntentUi,
        Self::Spotlight,
        Self::Matter,
        Self::QuicklookThumbnail,
        Self::Safari,
    ];

    /// Stable tag used in configuration and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Widget => EXTENSION_TYPE_WIDGET,
            Self::NotificationContent => EXTENSION_TYPE_NOTIFICATION_CONTENT,
            Self::NotificationService => EXTENSION_TYPE_NOTIFICATION_SERVICE,
            Self::Share => EXTENSION_TYPE_SHARE,
            Self::Intent => EXTENSION_TYPE_INTENT,
            Self::BgDownload => EXTENSION_TYPE_BG_DOWNLOAD,
            Self::IntentUi => EXTENSION_TYPE_INTENT_UI,
            Self::Spotlight => EXTENSION_TYPE_SPOTLIGHT,
            Self::Matter => EXTENSION_TYPE_MATTER,
            Self::QuicklookThumbnail => EXTENSION_TYPE_QUICKLOOK_THUMBNAIL,
            Self::Safari => EXTENSION_TYPE_SAFARI,
        }
    }
}

/// Tag string for the `widget` extension type.
pub const EXTENSION_TYPE_WIDGET: &str = "widget";
/// Tag string for the `notification-content` extension type.
pub const EXTENSION_TYPE_NOTIFICATION_CONTENT: &str = "notification-content";
/// Tag string for the `notification-service` extension type.
pub const EXTENSION_TYPE_NOTIFICATION_SERVICE: &str = "notification-service";
/// Tag string for the `share` extension type.
pub const EXTENSION_TYPE_SHARE: &str = "share";
/// Tag string for the `intent` extension type.
pub const EXTENSION_TYPE_INTENT: &str = "intent";
/// Tag string for the `bg-download` extension type.
pub const EXTENSION_TYPE_BG_DOWNLOAD: &str = "bg-download";
/// Tag string for the `intent-ui` extension type.
pub const EXTENSION_TYPE_INTENT_UI: &str = "intent-ui";
/// Tag string for the `spotlight` extension type.
pub const EXTENSION_TYPE_SPOTLIGHT: &str = "spotlight";
/// Tag string for the `matter` extension type.
pub const EXTENSION_TYPE_MATTER: &str = "matter";
/// Tag string for the `quicklook-thumbnail` extension type.
pub const EXTENSION_TYPE_QUICKLOOK_THUMBNAIL: &str = "quicklook-thumbnail";
/// Tag string for the `safari` extension type.
pub const EXTENSION_TYPE_SAFARI: &str = "safari";

impl Display for ExtensionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtensionType {
    type Err = ExtensionTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_extension_type(value)
    }
}

/// Parses one extension type from its tag.
///
/// Surrounding whitespace is ignored; the tag itself must match exactly.
pub fn parse_extension_type(value: &str) -> Result<ExtensionType, ExtensionTypeError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(ExtensionTypeError::Empty);
    }

    ExtensionType::ALL
        .into_iter()
        .find(|kind| kind.as_str() == normalized)
        .ok_or_else(|| ExtensionTypeError::Unsupported(normalized.to_string()))
}

/// Extension type parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionTypeError {
    Empty,
    Unsupported(String),
}

impl Display for ExtensionTypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "extension type must not be empty"),
            Self::Unsupported(value) => write!(f, "extension type is unsupported: {value}"),
        }
    }
}

impl Error for ExtensionTypeError {}

#[cfg(test)]
mod tests {
    use super::{
        parse_extension_type, ExtensionType, ExtensionTypeError, EXTENSION_TYPE_BG_DOWNLOAD,
        EXTENSION_TYPE_QUICKLOOK_THUMBNAIL, EXTENSION_TYPE_WIDGET,
    };
    use std::collections::BTreeSet;

    #[test]
    fn parses_every_tag_back_to_its_variant() {
        for kind in ExtensionType::ALL {
            assert_eq!(
                parse_extension_type(kind.as_str()).expect("known tag should parse"),
                kind
            );
        }
    }

    #[test]
    fn tags_are_unique() {
        let tags: BTreeSet<&str> = ExtensionType::ALL.iter().map(|kind| kind.as_str()).collect();
        assert_eq!(tags.len(), ExtensionType::ALL.len());
    }

    #[test]
    fn trims_input_before_matching() {
        assert_eq!(
            " share ".parse::<ExtensionType>().expect("trimmed tag parse"),
            ExtensionType::Share
        );
    }

    #[test]
    fn rejects_empty_tag() {
        let err = parse_extension_type("  ").expect_err("blank tag must fail");
        assert_eq!(err, ExtensionTypeError::Empty);
    }

    #[test]
    fn rejects_unknown_and_miscased_tags() {
        assert_eq!(
            parse_extension_type("intents").expect_err("unknown tag must fail"),
            ExtensionTypeError::Unsupported("intents".to_string())
        );
        assert_eq!(
            parse_extension_type("Widget").expect_err("capitalized tag must fail"),
            ExtensionTypeError::Unsupported("Widget".to_string())
        );
    }

    #[test]
    fn tag_constants_back_variant_strings() {
        assert_eq!(ExtensionType::Widget.as_str(), EXTENSION_TYPE_WIDGET);
        assert_eq!(ExtensionType::BgDownload.as_str(), EXTENSION_TYPE_BG_DOWNLOAD);
        assert_eq!(
            ExtensionType::QuicklookThumbnail.as_str(),
            EXTENSION_TYPE_QUICKLOOK_THUMBNAIL
        );
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(ExtensionType::IntentUi.to_string(), "intent-ui");
        assert_eq!(ExtensionType::BgDownload.to_string(), "bg-download");
    }
}
