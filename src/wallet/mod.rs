//! Wallet operations — Ethereum (EIP-1193) and Solana providers exposed by the host.
//!
//! Providers are resolved from the SDK handle on every call and never cached.

pub mod client;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{Predicate, Schema};

// ─── EIP-1193 methods ────────────────────────────────────────────────────────

pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const ETH_CHAIN_ID: &str = "eth_chainId";
pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";
pub const PERSONAL_SIGN: &str = "personal_sign";
pub const ETH_SIGN_TYPED_DATA_V4: &str = "eth_signTypedData_v4";

lazy_static! {
    pub(crate) static ref SEND_TRANSACTION_SCHEMA: Schema =
        Schema::strict("send_ethereum_transaction")
            .required("to", Predicate::NonEmptyString)
            .optional("value", Predicate::NonEmptyString)
            .optional("data", Predicate::NonEmptyString)
            .optional("from", Predicate::NonEmptyString);
    pub(crate) static ref SIGN_TYPED_DATA_SCHEMA: Schema =
        Schema::strict("sign_typed_data").required("typed_data", Predicate::Mapping);
}

/// An outbound Ethereum transaction. Quantities are hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthTransaction {
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl EthTransaction {
    pub fn to(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            ..Default::default()
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn sender(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

/// Typed-data (EIP-712) signing request. The payload is opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignTypedDataRequest {
    pub address: String,
    pub typed_data: Value,
}

/// A Solana message to sign: UTF-8 text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolanaMessage {
    Text(String),
    Bytes(Vec<u8>),
}

impl SolanaMessage {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}

impl From<&str> for SolanaMessage {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for SolanaMessage {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHash {
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub signature: String,
}
