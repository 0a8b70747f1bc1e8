//! Mini-app context — the user, client, and launch location supplied by the host.
//!
//! Every type here is deserialized from the normalized (snake_case) form of the
//! SDK's context record. Nothing is cached; each accessor re-reads the context.

pub mod client;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The full `{user, client, location}` record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiniAppContext {
    pub user: Option<UserContext>,
    pub client: Option<ClientContext>,
    /// Where the app was launched from. Shape varies by launch type.
    pub location: Option<Value>,
}

/// The Farcaster user viewing the mini app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub fid: u64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, alias = "pfp_url")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub custody_address: Option<String>,
    #[serde(default)]
    pub eth_addresses: Vec<String>,
    #[serde(default)]
    pub sol_addresses: Vec<String>,
}

impl UserContext {
    pub fn verified_addresses(&self) -> VerifiedAddresses {
        VerifiedAddresses {
            eth_addresses: self.eth_addresses.clone(),
            sol_addresses: self.sol_addresses.clone(),
        }
    }
}

/// The host client the app runs in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientContext {
    pub client_fid: Option<u64>,
    /// Whether the user has added this app.
    pub added: bool,
    pub notification_details: Option<NotificationDetails>,
    pub safe_area_insets: Option<SafeAreaInsets>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDetails {
    pub url: String,
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeAreaInsets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Verified Ethereum and Solana addresses of the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedAddresses {
    pub eth_addresses: Vec<String>,
    pub sol_addresses: Vec<String>,
}

/// Flat profile view composed from the user context and verified addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub fid: Option<u64>,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub custody_address: Option<String>,
    pub eth_addresses: Vec<String>,
    pub sol_addresses: Vec<String>,
}

impl UserSummary {
    pub fn compose(user: Option<UserContext>, addresses: VerifiedAddresses) -> Self {
        let fid = user.as_ref().map(|u| u.fid);
        let user = user.unwrap_or_default();
        Self {
            fid,
            username: user.username,
            display_name: user.display_name,
            profile_image: user.profile_image,
            bio: user.bio,
            custody_address: user.custody_address,
            eth_addresses: addresses.eth_addresses,
            sol_addresses: addresses.sol_addresses,
        }
    }
}
