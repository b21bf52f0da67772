//! Info.plist content per extension type.

use super::DescriptorResult;
use crate::extension_point::extension_point_identifier_for;
use crate::model::extension_type::ExtensionType;
use plist::{Dictionary, Integer, Value};

/// Build-setting token Xcode expands to the target's Swift module name.
pub const PRODUCT_MODULE_NAME_PLACEHOLDER: &str = "$(PRODUCT_MODULE_NAME)";

const KEY_EXTENSION: &str = "NSExtension";
const KEY_EXTENSION_ATTRIBUTES: &str = "NSExtensionAttributes";
const KEY_PRINCIPAL_CLASS: &str = "NSExtensionPrincipalClass";
const KEY_EXTENSION_POINT_IDENTIFIER: &str = "NSExtensionPointIdentifier";
const KEY_SPOTLIGHT_LABEL: &str = "CSExtensionLabel";

const SPOTLIGHT_LABEL: &str = "myImporter";
const ACTIVATION_RULE_ALWAYS: &str = "TRUEPREDICATE";

/// Returns the principal class name for `kind`, without module prefix.
///
/// `None` for extensions that use `@main` or have no principal class
/// (`widget`, `bg-download`).
pub fn principal_class_for_type(kind: ExtensionType) -> Option<&'static str> {
    match kind {
        ExtensionType::NotificationService => Some("NotificationService"),
        ExtensionType::QuicklookThumbnail => Some("ThumbnailProvider"),
        ExtensionType::Spotlight => Some("ImportExtension"),
        ExtensionType::Share => Some("ShareViewController"),
        ExtensionType::IntentUi => Some("IntentViewController"),
        ExtensionType::Intent => Some("IntentHandler"),
        ExtensionType::Matter => Some("RequestHandler"),
        ExtensionType::Safari => Some("SafariWebExtensionHandler"),
        ExtensionType::NotificationContent => Some("NotificationViewController"),
        ExtensionType::Widget | ExtensionType::BgDownload => None,
    }
}

/// Builds the Info.plist root dictionary for a new target of `kind`.
pub fn info_plist_for_type(kind: ExtensionType) -> Dictionary {
    let mut extension = Dictionary::new();
    if let Some(attributes) = extension_attributes(kind) {
        extension.insert(
            KEY_EXTENSION_ATTRIBUTES.to_string(),
            Value::Dictionary(attributes),
        );
    }
    if let Some(class_name) = principal_class_for_type(kind) {
        extension.insert(
            KEY_PRINCIPAL_CLASS.to_string(),
            Value::String(format!("{PRODUCT_MODULE_NAME_PLACEHOLDER}.{class_name}")),
        );
    }
    extension.insert(
        KEY_EXTENSION_POINT_IDENTIFIER.to_string(),
        Value::String(extension_point_identifier_for(kind).to_string()),
    );

    let mut root = Dictionary::new();
    if kind == ExtensionType::Spotlight {
        root.insert(
            KEY_SPOTLIGHT_LABEL.to_string(),
            Value::String(SPOTLIGHT_LABEL.to_string()),
        );
    }
    root.insert(KEY_EXTENSION.to_string(), Value::Dictionary(extension));
    root
}

/// Builds the Info.plist for `kind` as XML property-list text.
pub fn build_info_plist(kind: ExtensionType) -> DescriptorResult<String> {
    dictionary_to_xml(&info_plist_for_type(kind))
}

pub(super) fn dictionary_to_xml(dictionary: &Dictionary) -> DescriptorResult<String> {
    let mut buffer = Vec::new();
    Value::Dictionary(dictionary.clone()).to_writer_xml(&mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn extension_attributes(kind: ExtensionType) -> Option<Dictionary> {
    let entries: Vec<(&str, Value)> = match kind {
        ExtensionType::NotificationService | ExtensionType::Share => vec![(
            "NSExtensionActivationRule",
            string(ACTIVATION_RULE_ALWAYS),
        )],
        ExtensionType::QuicklookThumbnail => vec![
            ("QLSupportedContentTypes", Value::Array(Vec::new())),
            ("QLThumbnailMinimumDimension", Value::Integer(Integer::from(0i64))),
        ],
        ExtensionType::Spotlight => vec![(
            "CSSupportedContentTypes",
            strings(&["com.example.plain-text"]),
        )],
        ExtensionType::IntentUi => vec![("IntentsSupported", strings(&["INSendMessageIntent"]))],
        ExtensionType::Intent => vec![
            ("IntentsRestrictedWhileLocked", Value::Array(Vec::new())),
            (
                "IntentsSupported",
                strings(&[
                    "INSendMessageIntent",
                    "INSearchForMessagesIntent",
                    "INSetMessageAttributeIntent",
                ]),
            ),
        ],
        ExtensionType::NotificationContent => vec![
            (
                "UNNotificationExtensionCategory",
                string("myNotificationCategory"),
            ),
            (
                "UNNotificationExtensionInitialContentSizeRatio",
                Value::Integer(Integer::from(1i64)),
            ),
        ],
        ExtensionType::Matter
        | ExtensionType::Safari
        | ExtensionType::Widget
        | ExtensionType::BgDownload => return None,
    };

    let mut attributes = Dictionary::new();
    for (key, value) in entries {
        attributes.insert(key.to_string(), value);
    }
    Some(attributes)
}

fn string(value: &str) -> Value {
    Value::String(value.to_string())
}

fn strings(values: &[&str]) -> Value {
    Value::Array(values.iter().map(|value| string(value)).collect())
}
