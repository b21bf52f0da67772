//! Pure Info.plist inspection.

use crate::extension_point::extension_type_for_identifier;
use crate::model::extension_type::ExtensionType;
use log::{debug, error};
use plist::Value;

/// What an Info.plist declares about its extension point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoPlistMatch {
    /// Identifier is present and maps to a known type.
    Declared(ExtensionType),
    /// Identifier is present but outside the known table, or is a non-empty
    /// value that is not a string.
    Unknown(String),
    /// `NSExtension.NSExtensionPointIdentifier` is absent or a blank value
    /// (empty string, `false`, zero).
    MissingIdentifier,
}

/// Reads `NSExtension.NSExtensionPointIdentifier`.
///
/// Returns `None` when the value is missing, not a string, or empty.
pub fn extension_point_identifier(info_plist: &Value) -> Option<&str> {
    raw_identifier(info_plist)?
        .as_string()
        .filter(|identifier| !identifier.is_empty())
}

/// Classifies an Info.plist without side effects.
pub fn inspect_info_plist(info_plist: &Value) -> InfoPlistMatch {
    let raw = match raw_identifier(info_plist) {
        Some(raw) if !is_blank(raw) => raw,
        _ => return InfoPlistMatch::MissingIdentifier,
    };

    match raw.as_string() {
        Some(identifier) => match extension_type_for_identifier(identifier) {
            Some(kind) => InfoPlistMatch::Declared(kind),
            None => InfoPlistMatch::Unknown(identifier.to_string()),
        },
        None => InfoPlistMatch::Unknown(format!("{raw:?}")),
    }
}

fn raw_identifier(info_plist: &Value) -> Option<&Value> {
    info_plist
        .as_dictionary()?
        .get("NSExtension")?
        .as_dictionary()?
        .get("NSExtensionPointIdentifier")
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(text) => text.is_empty(),
        Value::Boolean(flag) => !flag,
        Value::Integer(number) => number.as_signed() == Some(0),
        Value::Real(number) => *number == 0.0,
        _ => false,
    }
}

/// Returns the known extension type an Info.plist declares.
pub fn info_plist_extension_type(info_plist: &Value) -> Option<ExtensionType> {
    match inspect_info_plist(info_plist) {
        InfoPlistMatch::Declared(kind) => Some(kind),
        InfoPlistMatch::Unknown(_) | InfoPlistMatch::MissingIdentifier => None,
    }
}

/// Returns whether the Info.plist of `target_name` declares `kind`.
///
/// # Side effects
/// - Logs an error naming `target_name` when the identifier is missing.
pub fn info_plist_declares_type(
    target_name: &str,
    info_plist: &Value,
    kind: ExtensionType,
) -> bool {
    resolve_declared_type(target_name, info_plist) == Some(kind)
}

pub(super) fn resolve_declared_type(
    target_name: &str,
    info_plist: &Value,
) -> Option<ExtensionType> {
    match inspect_info_plist(info_plist) {
        InfoPlistMatch::Declared(kind) => Some(kind),
        InfoPlistMatch::Unknown(identifier) => {
            debug!(
                "event=classify_target module=classify status=unknown_identifier target={} identifier={}",
                target_name, identifier
            );
            None
        }
        InfoPlistMatch::MissingIdentifier => {
            error!(
                "event=classify_target module=classify status=error error_code=missing_extension_point_identifier target={}",
                target_name
            );
            None
        }
    }
}
