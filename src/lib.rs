//! # Farcaster mini-app SDK for Rust
//!
//! A typed adapter over the Farcaster mini-app SDK: lifecycle, user context,
//! social actions, and Ethereum/Solana wallet access.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Boundary** — `validate` (input schemas, strict or lenient) and
//!    `normalize` (camelCase ⇄ snake_case key translation). Pure, no I/O.
//! 2. **Host** — the `MiniAppSdk` / provider traits the adapter calls through.
//!    The `wasm` feature implements them over the real JS SDK object.
//! 3. **Sub-clients** — `actions`, `context`, `wallet`: one async operation per
//!    SDK capability.
//! 4. **High-Level Client** — `MiniApp` with lifecycle, sub-client accessors,
//!    and the `quick_start` / `user_summary` / `compose_cast_with_app` helpers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use farcaster_miniapp_sdk::prelude::*;
//!
//! let app = MiniAppBuilder::new()
//!     .ready_options(ReadyOptions { disable_native_gestures: Some(true) })
//!     .build(JsSdkFactory::from_global("miniappSdk")?);
//!
//! app.quick_start().await?;
//! let summary = app.user_summary().await?;
//! app.compose_cast_with_app(Some("gm"), "https://my.app", &[]).await?;
//! ```

// ── Layer 1: Boundary ────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Input schemas and enforcement modes.
pub mod validate;

/// Key-casing translation for outbound and inbound payloads.
pub mod normalize;

/// `{success}` / `{error}` rendering of results.
pub mod tagged;

/// Adapter configuration and the warning side channel.
pub mod config;

// ── Layer 2: Host ────────────────────────────────────────────────────────────

/// Capability traits for the external SDK.
pub mod host;

/// Bridge to the JavaScript SDK object.
#[cfg(feature = "wasm")]
pub mod wasm;

// ── Layer 3: Sub-clients ─────────────────────────────────────────────────────

/// Host actions: ready, close, casts, profiles, URLs, sign-in.
pub mod actions;

/// User, client, and location context.
pub mod context;

/// Ethereum and Solana wallet operations.
pub mod wallet;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `MiniApp` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Client + sub-clients
    pub use crate::client::{
        ActionsClient, ContextClient, InitStatus, MiniApp, MiniAppBuilder, WalletClient,
    };

    // Option and result types
    pub use crate::actions::{CastParent, ComposeCastOptions, ReadyOptions, SignInOptions};
    pub use crate::context::{
        ClientContext, MiniAppContext, NotificationDetails, SafeAreaInsets, UserContext,
        UserSummary, VerifiedAddresses,
    };
    pub use crate::wallet::{
        EthTransaction, SignTypedDataRequest, Signature, SolanaMessage, TransactionHash,
    };

    // Host capabilities
    pub use crate::host::{
        Eip1193Request, EthereumProvider, HostResult, MiniAppSdk, SdkFactory, SolanaProvider,
    };

    // Errors + config
    pub use crate::config::{MemorySink, MiniAppConfig, TracingSink, Warning, WarningSink};
    pub use crate::error::{Chain, FieldViolation, HostError, MiniAppError};
    pub use crate::tagged::to_tagged;

    #[cfg(feature = "wasm")]
    pub use crate::wasm::{JsEthereumProvider, JsMiniAppSdk, JsSdkFactory, JsSolanaProvider};
}
