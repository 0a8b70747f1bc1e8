//! Capabilities consumed from the external mini-app SDK.
//!
//! The adapter never talks to the SDK directly: it goes through these traits,
//! which declare exactly the calls this crate makes. Payloads are the SDK's raw
//! camelCase values; translation happens in [`crate::normalize`].
//!
//! The traits are `?Send`: the real SDK lives on a single-threaded JS event
//! loop and its handles cannot cross threads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HostError;

/// Result of a raw SDK call.
pub type HostResult<T> = Result<T, HostError>;

/// The SDK handle: `actions.*`, `context`, and `wallet.*`.
#[async_trait(?Send)]
pub trait MiniAppSdk {
    type Ethereum: EthereumProvider;
    type Solana: SolanaProvider;

    // ── actions ──────────────────────────────────────────────────────────

    async fn ready(&self, options: Value) -> HostResult<()>;

    async fn close(&self) -> HostResult<()>;

    async fn compose_cast(&self, options: Value) -> HostResult<Value>;

    async fn add_mini_app(&self) -> HostResult<Value>;

    async fn view_profile(&self, options: Value) -> HostResult<()>;

    async fn open_url(&self, url: &str) -> HostResult<()>;

    async fn sign_in(&self, options: Value) -> HostResult<Value>;

    // ── context ──────────────────────────────────────────────────────────

    /// The raw `{user, client, location}` context record.
    async fn context(&self) -> HostResult<Value>;

    // ── wallet ───────────────────────────────────────────────────────────

    /// `None` when the host client exposes no Ethereum wallet.
    async fn ethereum_provider(&self) -> HostResult<Option<Self::Ethereum>>;

    /// `None` when the host client exposes no Solana wallet.
    async fn solana_provider(&self) -> HostResult<Option<Self::Solana>>;
}

/// Initialization factory producing the SDK handle.
#[async_trait(?Send)]
pub trait SdkFactory {
    type Sdk: MiniAppSdk;

    async fn create(&self) -> HostResult<Self::Sdk>;
}

/// An EIP-1193 `request({method, params})` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eip1193Request {
    pub method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Value>,
}

impl Eip1193Request {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            params: Vec::new(),
        }
    }

    pub fn with_params(method: &str, params: Vec<Value>) -> Self {
        Self {
            method: method.to_string(),
            params,
        }
    }
}

/// EIP-1193 Ethereum provider.
#[async_trait(?Send)]
pub trait EthereumProvider {
    async fn request(&self, request: Eip1193Request) -> HostResult<Value>;
}

/// Solana wallet-adapter-like provider.
#[async_trait(?Send)]
pub trait SolanaProvider {
    /// Connect and return the raw account info (e.g. `{publicKey}`).
    async fn connect(&self) -> HostResult<Value>;

    async fn sign_message(&self, message: &[u8]) -> HostResult<Value>;
}
