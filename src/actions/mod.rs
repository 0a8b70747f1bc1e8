//! Social actions — ready/close, cast composition, bookmarking, profiles, URLs, sign-in.

pub mod client;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::validate::{Predicate, Schema};

lazy_static! {
    pub(crate) static ref COMPOSE_CAST_SCHEMA: Schema = Schema::lenient("compose_cast")
        .optional("text", Predicate::NonEmptyString)
        .optional("embeds", Predicate::Sequence(Box::new(Predicate::Url)))
        .optional("channel_key", Predicate::NonEmptyString)
        .optional("parent", Predicate::Mapping);
    pub(crate) static ref SIGN_IN_SCHEMA: Schema = Schema::lenient("sign_in")
        .optional("nonce", Predicate::NonEmptyString)
        .optional("not_before", Predicate::NonEmptyString)
        .optional("expiration_time", Predicate::NonEmptyString);
    pub(crate) static ref OPEN_URL_SCHEMA: Schema =
        Schema::strict("open_url").required("url", Predicate::Url);
}

/// Options for `actions.ready`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyOptions {
    /// Disable the host's native swipe/pull gestures while the app is open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_native_gestures: Option<bool>,
}

/// Options for `actions.composeCast`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeCastOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<String>>,
    /// Reply target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<CastParent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_key: Option<String>,
    /// Close the mini app once the cast is posted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<bool>,
}

impl ComposeCastOptions {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_embeds<I, S>(mut self, embeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.embeds = Some(embeds.into_iter().map(Into::into).collect());
        self
    }
}

/// The cast a composed cast replies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastParent {
    #[serde(rename = "type")]
    pub kind: String,
    pub hash: String,
}

impl CastParent {
    pub fn cast(hash: impl Into<String>) -> Self {
        Self {
            kind: "cast".to_string(),
            hash: hash.into(),
        }
    }
}

/// Options for `actions.signIn` (SIWE via the host client).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<String>,
    /// Accept a signature from an auth address instead of the custody address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_auth_address: Option<bool>,
}

impl SignInOptions {
    pub fn nonce(nonce: impl Into<String>) -> Self {
        Self {
            nonce: Some(nonce.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::to_raw;
    use crate::validate::record_of;
    use serde_json::json;

    #[test]
    fn test_compose_cast_raw_omits_absent_fields() {
        let options = ComposeCastOptions::text("hi").with_embeds(["https://a.com"]);
        assert_eq!(
            to_raw(&options).unwrap(),
            json!({"text": "hi", "embeds": ["https://a.com"]})
        );
    }

    #[test]
    fn test_compose_cast_raw_renames_channel_key() {
        let options = ComposeCastOptions {
            channel_key: Some("rust".into()),
            parent: Some(CastParent::cast("0xabc")),
            ..Default::default()
        };
        assert_eq!(
            to_raw(&options).unwrap(),
            json!({"channelKey": "rust", "parent": {"type": "cast", "hash": "0xabc"}})
        );
    }

    #[test]
    fn test_ready_options_default_is_empty() {
        assert_eq!(to_raw(&ReadyOptions::default()).unwrap(), json!({}));
        let options = ReadyOptions {
            disable_native_gestures: Some(true),
        };
        assert_eq!(
            to_raw(&options).unwrap(),
            json!({"disableNativeGestures": true})
        );
    }

    #[test]
    fn test_sign_in_schema_flags_empty_nonce() {
        let record = record_of(&SignInOptions::nonce("")).unwrap();
        let violations = SIGN_IN_SCHEMA.check(&record);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "nonce");
    }

    #[test]
    fn test_compose_cast_schema_accepts_valid_options() {
        let options = ComposeCastOptions::text("gm").with_embeds(["https://a.com", "http://b.com"]);
        let record = record_of(&options).unwrap();
        assert!(COMPOSE_CAST_SCHEMA.check(&record).is_empty());
    }
}
