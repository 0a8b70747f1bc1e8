//! Context sub-client — reads and projects the SDK's `context` record.

use serde_json::Value;

use crate::client::MiniApp;
use crate::error::MiniAppError;
use crate::host::{MiniAppSdk, SdkFactory};
use crate::normalize;

use super::{ClientContext, MiniAppContext, UserContext, VerifiedAddresses};

/// Sub-client for context access. Each call fetches the context anew.
pub struct Context<'a, F: SdkFactory> {
    pub(crate) client: &'a MiniApp<F>,
}

impl<'a, F: SdkFactory> Context<'a, F> {
    /// The full normalized context.
    ///
    /// An absent context (the app is not running inside a host client) is
    /// returned as an empty [`MiniAppContext`].
    pub async fn get(&self) -> Result<MiniAppContext, MiniAppError> {
        let sdk = self.client.sdk_or_err()?;
        tracing::debug!("Reading context");
        let raw = sdk.context().await?;
        if raw.is_null() {
            return Ok(MiniAppContext::default());
        }
        normalize::from_raw(raw)
    }

    pub async fn user(&self) -> Result<Option<UserContext>, MiniAppError> {
        Ok(self.get().await?.user)
    }

    pub async fn fid(&self) -> Result<Option<u64>, MiniAppError> {
        Ok(self.user().await?.map(|u| u.fid))
    }

    pub async fn username(&self) -> Result<Option<String>, MiniAppError> {
        Ok(self.user().await?.and_then(|u| u.username))
    }

    pub async fn display_name(&self) -> Result<Option<String>, MiniAppError> {
        Ok(self.user().await?.and_then(|u| u.display_name))
    }

    pub async fn profile_image(&self) -> Result<Option<String>, MiniAppError> {
        Ok(self.user().await?.and_then(|u| u.profile_image))
    }

    pub async fn bio(&self) -> Result<Option<String>, MiniAppError> {
        Ok(self.user().await?.and_then(|u| u.bio))
    }

    pub async fn custody_address(&self) -> Result<Option<String>, MiniAppError> {
        Ok(self.user().await?.and_then(|u| u.custody_address))
    }

    /// Verified addresses. Empty sequences when there is no user.
    pub async fn verified_addresses(&self) -> Result<VerifiedAddresses, MiniAppError> {
        Ok(self
            .user()
            .await?
            .map(|u| u.verified_addresses())
            .unwrap_or_default())
    }

    pub async fn client(&self) -> Result<Option<ClientContext>, MiniAppError> {
        Ok(self.get().await?.client)
    }

    pub async fn location(&self) -> Result<Option<Value>, MiniAppError> {
        Ok(self.get().await?.location)
    }
}
