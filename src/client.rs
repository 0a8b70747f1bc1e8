//! High-level client — `MiniApp` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `<domain>/client.rs`.
//! This module keeps the builder, the SDK handle, lifecycle, and the
//! convenience operations composed from several sub-client calls.

use std::cell::Cell;
use std::sync::Arc;

use async_lock::OnceCell;
use futures_util::future::try_join;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::actions::client::Actions;
use crate::actions::{ComposeCastOptions, ReadyOptions};
use crate::config::{MiniAppConfig, WarningSink};
use crate::context::client::Context;
use crate::context::UserSummary;
use crate::error::MiniAppError;
use crate::host::SdkFactory;
use crate::wallet::client::Wallet;

// Re-export sub-client types for convenience.
pub use crate::actions::client::Actions as ActionsClient;
pub use crate::context::client::Context as ContextClient;
pub use crate::wallet::client::Wallet as WalletClient;

/// The primary entry point: an explicit handle to one SDK instance.
///
/// Created uninitialized. [`MiniApp::init`] runs the factory once and stores
/// the handle; every operation before that fails with
/// [`MiniAppError::NotInitialized`] without touching the SDK.
pub struct MiniApp<F: SdkFactory> {
    factory: F,
    sdk: OnceCell<Arc<F::Sdk>>,
    pub(crate) config: MiniAppConfig,
}

/// Outcome of [`MiniApp::init`]. Serializes as `{success: true, already_initialized}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStatus {
    pub already_initialized: bool,
}

impl Serialize for InitStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("InitStatus", 2)?;
        state.serialize_field("success", &true)?;
        state.serialize_field("already_initialized", &self.already_initialized)?;
        state.end()
    }
}

impl<F: SdkFactory> MiniApp<F> {
    /// An uninitialized adapter with default configuration.
    pub fn new(factory: F) -> Self {
        MiniAppBuilder::default().build(factory)
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Create the SDK handle. Idempotent: later calls keep the stored handle
    /// and report `already_initialized`.
    pub async fn init(&self) -> Result<InitStatus, MiniAppError> {
        if self.sdk.get().is_some() {
            tracing::debug!("SDK already initialized");
            return Ok(InitStatus {
                already_initialized: true,
            });
        }

        let created = Cell::new(false);
        let ran_factory = &created;
        let factory = &self.factory;
        self.sdk
            .get_or_try_init(|| async move {
                ran_factory.set(true);
                factory.create().await.map(Arc::new)
            })
            .await?;

        let already_initialized = !created.get();
        if !already_initialized {
            tracing::info!("Mini app SDK initialized");
        }
        Ok(InitStatus {
            already_initialized,
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.sdk.get().is_some()
    }

    /// The stored SDK handle, if initialized.
    pub fn sdk(&self) -> Option<&Arc<F::Sdk>> {
        self.sdk.get()
    }

    pub(crate) fn sdk_or_err(&self) -> Result<&Arc<F::Sdk>, MiniAppError> {
        self.sdk.get().ok_or(MiniAppError::NotInitialized)
    }

    pub(crate) fn warning_sink(&self) -> &dyn WarningSink {
        self.config.warning_sink.as_ref()
    }

    pub fn config(&self) -> &MiniAppConfig {
        &self.config
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn actions(&self) -> Actions<'_, F> {
        Actions { client: self }
    }

    pub fn context(&self) -> Context<'_, F> {
        Context { client: self }
    }

    pub fn wallet(&self) -> Wallet<'_, F> {
        Wallet { client: self }
    }

    // ── Convenience ──────────────────────────────────────────────────────

    /// `init` followed by `ready` with the configured ready options.
    ///
    /// `ready` is only attempted once `init` has succeeded.
    pub async fn quick_start(&self) -> Result<InitStatus, MiniAppError> {
        let status = self.init().await?;
        self.actions()
            .ready(self.config.ready_options.clone())
            .await?;
        Ok(status)
    }

    /// User profile and verified addresses merged into one flat record.
    pub async fn user_summary(&self) -> Result<UserSummary, MiniAppError> {
        let context = self.context();
        let (user, addresses) = try_join(context.user(), context.verified_addresses()).await?;
        Ok(UserSummary::compose(user, addresses))
    }

    /// Compose a cast whose first embed is `app_url`, followed by `additional_embeds`.
    pub async fn compose_cast_with_app(
        &self,
        text: Option<&str>,
        app_url: &str,
        additional_embeds: &[&str],
    ) -> Result<(), MiniAppError> {
        let embeds = std::iter::once(app_url)
            .chain(additional_embeds.iter().copied())
            .map(str::to_string)
            .collect::<Vec<_>>();

        self.actions()
            .compose_cast(ComposeCastOptions {
                text: text.map(str::to_string),
                embeds: Some(embeds),
                ..Default::default()
            })
            .await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MiniAppBuilder {
    config: MiniAppConfig,
}

impl MiniAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where lenient-validation warnings go. Defaults to `tracing`.
    pub fn warning_sink(mut self, sink: impl WarningSink + 'static) -> Self {
        self.config.warning_sink = Arc::new(sink);
        self
    }

    /// Options `quick_start` passes to `ready`.
    pub fn ready_options(mut self, options: ReadyOptions) -> Self {
        self.config.ready_options = options;
        self
    }

    pub fn build<F: SdkFactory>(self, factory: F) -> MiniApp<F> {
        MiniApp {
            factory,
            sdk: OnceCell::new(),
            config: self.config,
        }
    }
}
