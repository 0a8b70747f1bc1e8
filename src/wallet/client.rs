//! Wallet sub-client — Ethereum and Solana provider calls.

use serde_json::{json, Value};

use crate::client::MiniApp;
use crate::error::{Chain, MiniAppError};
use crate::host::{Eip1193Request, EthereumProvider, MiniAppSdk, SdkFactory, SolanaProvider};
use crate::normalize;
use crate::validate::record_of;

use super::{
    EthTransaction, Signature, SignTypedDataRequest, SolanaMessage, TransactionHash,
    ETH_CHAIN_ID, ETH_REQUEST_ACCOUNTS, ETH_SEND_TRANSACTION, ETH_SIGN_TYPED_DATA_V4,
    PERSONAL_SIGN, SEND_TRANSACTION_SCHEMA, SIGN_TYPED_DATA_SCHEMA,
};

type EthereumOf<F> = <<F as SdkFactory>::Sdk as MiniAppSdk>::Ethereum;
type SolanaOf<F> = <<F as SdkFactory>::Sdk as MiniAppSdk>::Solana;

/// Sub-client for wallet operations.
pub struct Wallet<'a, F: SdkFactory> {
    pub(crate) client: &'a MiniApp<F>,
}

impl<'a, F: SdkFactory> Wallet<'a, F> {
    // ── Ethereum ─────────────────────────────────────────────────────────

    pub async fn request_ethereum_accounts(&self) -> Result<Vec<String>, MiniAppError> {
        let raw = self.eth_request(Eip1193Request::new(ETH_REQUEST_ACCOUNTS)).await?;
        normalize::from_raw(raw)
    }

    /// The raw chain id as returned by the provider (usually a hex string).
    pub async fn ethereum_chain_id(&self) -> Result<Value, MiniAppError> {
        self.eth_request(Eip1193Request::new(ETH_CHAIN_ID)).await
    }

    /// Send a transaction. `to` must be a non-empty string; the check happens
    /// before the provider is touched.
    pub async fn send_ethereum_transaction(
        &self,
        tx: EthTransaction,
    ) -> Result<TransactionHash, MiniAppError> {
        let record = record_of(&tx)?;
        SEND_TRANSACTION_SCHEMA.enforce(&record, self.client.warning_sink())?;
        let raw_tx = normalize::outbound(Value::Object(record));

        let raw = self
            .eth_request(Eip1193Request::with_params(ETH_SEND_TRANSACTION, vec![raw_tx]))
            .await?;
        Ok(TransactionHash {
            hash: serde_json::from_value(raw)?,
        })
    }

    /// `personal_sign` over `message` with `address`.
    pub async fn sign_ethereum_message(
        &self,
        message: &str,
        address: &str,
    ) -> Result<Signature, MiniAppError> {
        let raw = self
            .eth_request(Eip1193Request::with_params(
                PERSONAL_SIGN,
                vec![json!(message), json!(address)],
            ))
            .await?;
        Ok(Signature {
            signature: serde_json::from_value(raw)?,
        })
    }

    /// `eth_signTypedData_v4`. Only the mapping shape of `typed_data` is checked;
    /// it is sent as a JSON string with its keys untouched.
    pub async fn sign_typed_data(
        &self,
        request: SignTypedDataRequest,
    ) -> Result<Signature, MiniAppError> {
        let record = record_of(&request)?;
        SIGN_TYPED_DATA_SCHEMA.enforce(&record, self.client.warning_sink())?;
        let payload = serde_json::to_string(&request.typed_data)?;

        let raw = self
            .eth_request(Eip1193Request::with_params(
                ETH_SIGN_TYPED_DATA_V4,
                vec![json!(request.address), json!(payload)],
            ))
            .await?;
        Ok(Signature {
            signature: serde_json::from_value(raw)?,
        })
    }

    // ── Solana ───────────────────────────────────────────────────────────

    /// Connect the Solana wallet. Returns normalized account info, e.g. `{public_key}`.
    pub async fn request_solana_accounts(&self) -> Result<Value, MiniAppError> {
        let provider = self.solana().await?;
        tracing::debug!("Forwarding solana connect");
        let raw = provider.connect().await?;
        Ok(normalize::inbound(raw))
    }

    pub async fn sign_solana_message(
        &self,
        message: impl Into<SolanaMessage>,
    ) -> Result<Signature, MiniAppError> {
        let message = message.into();
        let provider = self.solana().await?;
        tracing::debug!(len = message.as_bytes().len(), "Forwarding solana signMessage");
        let raw = provider.sign_message(message.as_bytes()).await?;
        Ok(Signature {
            signature: serde_json::from_value(raw)?,
        })
    }

    // ── Providers ────────────────────────────────────────────────────────

    async fn eth_request(&self, request: Eip1193Request) -> Result<Value, MiniAppError> {
        let provider = self.ethereum().await?;
        tracing::debug!(method = %request.method, "Forwarding EIP-1193 request");
        Ok(provider.request(request).await?)
    }

    async fn ethereum(&self) -> Result<EthereumOf<F>, MiniAppError> {
        let sdk = self.client.sdk_or_err()?;
        sdk.ethereum_provider()
            .await?
            .ok_or(MiniAppError::ProviderUnavailable(Chain::Ethereum))
    }

    async fn solana(&self) -> Result<SolanaOf<F>, MiniAppError> {
        let sdk = self.client.sdk_or_err()?;
        sdk.solana_provider()
            .await?
            .ok_or(MiniAppError::ProviderUnavailable(Chain::Solana))
    }
}
