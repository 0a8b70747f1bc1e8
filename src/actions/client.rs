//! Actions sub-client — forwards to the SDK's `actions.*` calls.

use serde_json::{json, Value};

use crate::client::MiniApp;
use crate::error::MiniAppError;
use crate::host::{MiniAppSdk, SdkFactory};
use crate::normalize;
use crate::validate::record_of;

use super::{ComposeCastOptions, ReadyOptions, SignInOptions};
use super::{COMPOSE_CAST_SCHEMA, OPEN_URL_SCHEMA, SIGN_IN_SCHEMA};

/// Sub-client for host actions.
pub struct Actions<'a, F: SdkFactory> {
    pub(crate) client: &'a MiniApp<F>,
}

impl<'a, F: SdkFactory> Actions<'a, F> {
    /// Hide the host's splash screen and show the app.
    pub async fn ready(&self, options: ReadyOptions) -> Result<(), MiniAppError> {
        let raw = normalize::to_raw(&options)?;
        let sdk = self.client.sdk_or_err()?;
        tracing::debug!("Forwarding actions.ready");
        sdk.ready(raw).await?;
        Ok(())
    }

    pub async fn close(&self) -> Result<(), MiniAppError> {
        let sdk = self.client.sdk_or_err()?;
        tracing::debug!("Forwarding actions.close");
        sdk.close().await?;
        Ok(())
    }

    /// Open the host's cast composer.
    ///
    /// Malformed options are reported to the warning sink and forwarded as-is.
    pub async fn compose_cast(&self, options: ComposeCastOptions) -> Result<(), MiniAppError> {
        let record = record_of(&options)?;
        COMPOSE_CAST_SCHEMA.enforce(&record, self.client.warning_sink())?;
        let raw = normalize::outbound(Value::Object(record));

        let sdk = self.client.sdk_or_err()?;
        tracing::debug!("Forwarding actions.composeCast");
        sdk.compose_cast(raw).await?;
        Ok(())
    }

    /// Prompt the user to add (bookmark) this mini app.
    ///
    /// Returns the normalized host response, e.g. `{notification_details: {url, token}}`.
    pub async fn add_mini_app(&self) -> Result<Value, MiniAppError> {
        let sdk = self.client.sdk_or_err()?;
        tracing::debug!("Forwarding actions.addMiniApp");
        let raw = sdk.add_mini_app().await?;
        Ok(normalize::inbound(raw))
    }

    pub async fn view_profile(&self, fid: u64) -> Result<(), MiniAppError> {
        let sdk = self.client.sdk_or_err()?;
        tracing::debug!(fid, "Forwarding actions.viewProfile");
        sdk.view_profile(json!({ "fid": fid })).await?;
        Ok(())
    }

    /// Open an external `http(s)` URL. Anything else is rejected before the call.
    pub async fn open_url(&self, url: &str) -> Result<(), MiniAppError> {
        let record = record_of(&json!({ "url": url }))?;
        OPEN_URL_SCHEMA.enforce(&record, self.client.warning_sink())?;

        let sdk = self.client.sdk_or_err()?;
        tracing::debug!(url, "Forwarding actions.openUrl");
        sdk.open_url(url).await?;
        Ok(())
    }

    /// Request a Sign-In With Farcaster signature. Returns `{signature, message}`.
    pub async fn sign_in(&self, options: SignInOptions) -> Result<Value, MiniAppError> {
        let record = record_of(&options)?;
        SIGN_IN_SCHEMA.enforce(&record, self.client.warning_sink())?;
        let raw = normalize::outbound(Value::Object(record));

        let sdk = self.client.sdk_or_err()?;
        tracing::debug!("Forwarding actions.signIn");
        let result = sdk.sign_in(raw).await?;
        Ok(normalize::inbound(result))
    }
}
