//! Provider-native account records.
//!
//! These types mirror what the identity provider pushes over its change
//! channel. They are read-only inputs to the session core and are never
//! handed to application screens directly; screens only ever see the
//! validated [`SessionUser`](super::SessionUser) view-model.

use serde::{Deserialize, Serialize};

/// Raw account record as furnished by the identity provider.
///
/// Optional fields are genuinely optional on the wire: the provider does
/// not guarantee a display name or photo is set (partially configured
/// accounts exist). Field names follow the provider's camelCase payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIdentity {
    /// Provider-assigned unique account id.
    pub provider_id: String,

    /// Human-readable name, if the account has one configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Profile photo URL, if the account has one configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    /// Whether this account was created through anonymous sign-in.
    #[serde(default)]
    pub is_anonymous: bool,
}

/// Account-state change pushed by the identity provider.
///
/// The presence discriminator is explicit: a change either carries the
/// provider's current account record or reports that no account is
/// active. A `NoAccount` signal fires both on true session expiry and on
/// an explicit sign-out echoing back through the provider's own channel;
/// receivers cannot tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStateChange {
    /// An account is active; carries the provider's current record.
    Account(RawIdentity),
    /// No account is active.
    NoAccount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_identity_deserializes_provider_payload() {
        let raw: RawIdentity = serde_json::from_str(
            r#"{"providerId":"u1","displayName":"Jane Doe","photoUrl":"https://img.example/jane.png","isAnonymous":false}"#,
        )
        .unwrap();

        assert_eq!(raw.provider_id, "u1");
        assert_eq!(raw.display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(raw.photo_url.as_deref(), Some("https://img.example/jane.png"));
        assert!(!raw.is_anonymous);
    }

    #[test]
    fn raw_identity_tolerates_absent_optional_fields() {
        let raw: RawIdentity = serde_json::from_str(r#"{"providerId":"anon1"}"#).unwrap();

        assert_eq!(raw.provider_id, "anon1");
        assert_eq!(raw.display_name, None);
        assert_eq!(raw.photo_url, None);
        assert!(!raw.is_anonymous);
    }

    #[test]
    fn raw_identity_skips_absent_fields_when_serializing() {
        let raw = RawIdentity {
            provider_id: "anon1".to_string(),
            display_name: None,
            photo_url: None,
            is_anonymous: true,
        };

        let json = serde_json::to_string(&raw).unwrap();
        assert_eq!(json, r#"{"providerId":"anon1","isAnonymous":true}"#);
    }
}
