//! WASM bridge to the JavaScript `@farcaster/miniapp-sdk` object.
//!
//! Wraps the `sdk` export (or any object of the same shape) as a
//! [`MiniAppSdk`]:
//! - method lookup with `js_sys::Reflect`, calls via `Reflect::apply`
//! - promises (and plain return values) settled through `JsFuture`
//! - payloads converted with `serde-wasm-bindgen` in JSON-compatible mode
//! - `Uint8Array` results (Solana signatures) rendered as base58 strings
//!
//! ```rust,ignore
//! let app = MiniApp::new(JsSdkFactory::from_global("miniappSdk")?);
//! app.quick_start().await?;
//! ```

use async_trait::async_trait;
use js_sys::{Array, Function, Promise, Reflect, Uint8Array};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::HostError;
use crate::host::{
    Eip1193Request, EthereumProvider, HostResult, MiniAppSdk, SdkFactory, SolanaProvider,
};

/// The JS SDK object.
#[derive(Clone)]
pub struct JsMiniAppSdk {
    sdk: JsValue,
}

impl JsMiniAppSdk {
    pub fn new(sdk: JsValue) -> Self {
        Self { sdk }
    }

    fn actions(&self) -> HostResult<JsValue> {
        get(&self.sdk, "actions")
    }

    fn wallet(&self) -> HostResult<JsValue> {
        get(&self.sdk, "wallet")
    }
}

#[async_trait(?Send)]
impl MiniAppSdk for JsMiniAppSdk {
    type Ethereum = JsEthereumProvider;
    type Solana = JsSolanaProvider;

    async fn ready(&self, options: Value) -> HostResult<()> {
        call(&self.actions()?, "ready", &[to_js(&options)?]).await?;
        Ok(())
    }

    async fn close(&self) -> HostResult<()> {
        call(&self.actions()?, "close", &[]).await?;
        Ok(())
    }

    async fn compose_cast(&self, options: Value) -> HostResult<Value> {
        from_js(call(&self.actions()?, "composeCast", &[to_js(&options)?]).await?)
    }

    async fn add_mini_app(&self) -> HostResult<Value> {
        from_js(call(&self.actions()?, "addMiniApp", &[]).await?)
    }

    async fn view_profile(&self, options: Value) -> HostResult<()> {
        call(&self.actions()?, "viewProfile", &[to_js(&options)?]).await?;
        Ok(())
    }

    async fn open_url(&self, url: &str) -> HostResult<()> {
        call(&self.actions()?, "openUrl", &[JsValue::from_str(url)]).await?;
        Ok(())
    }

    async fn sign_in(&self, options: Value) -> HostResult<Value> {
        from_js(call(&self.actions()?, "signIn", &[to_js(&options)?]).await?)
    }

    async fn context(&self) -> HostResult<Value> {
        from_js(settle(get(&self.sdk, "context")?).await?)
    }

    async fn ethereum_provider(&self) -> HostResult<Option<JsEthereumProvider>> {
        let provider = call(&self.wallet()?, "getEthereumProvider", &[]).await?;
        Ok(present(provider).map(|provider| JsEthereumProvider { provider }))
    }

    async fn solana_provider(&self) -> HostResult<Option<JsSolanaProvider>> {
        let provider = call(&self.wallet()?, "getSolanaProvider", &[]).await?;
        Ok(present(provider).map(|provider| JsSolanaProvider { provider }))
    }
}

/// EIP-1193 provider object returned by `wallet.getEthereumProvider()`.
#[derive(Clone)]
pub struct JsEthereumProvider {
    provider: JsValue,
}

#[async_trait(?Send)]
impl EthereumProvider for JsEthereumProvider {
    async fn request(&self, request: Eip1193Request) -> HostResult<Value> {
        let arg = to_js(&request)?;
        from_js(call(&self.provider, "request", &[arg]).await?)
    }
}

/// Solana provider object returned by `wallet.getSolanaProvider()`.
#[derive(Clone)]
pub struct JsSolanaProvider {
    provider: JsValue,
}

#[async_trait(?Send)]
impl SolanaProvider for JsSolanaProvider {
    async fn connect(&self) -> HostResult<Value> {
        let account = call(&self.provider, "connect", &[]).await?;
        if !account.is_object() {
            return from_js(account);
        }
        // `publicKey` is a PublicKey instance; its toString() is the base58 address.
        let public_key = get(&account, "publicKey")?;
        if public_key.is_undefined() || public_key.is_null() {
            return from_js(account);
        }
        let address = match public_key.as_string() {
            Some(s) => s,
            None => call_sync(&public_key, "toString")?
                .as_string()
                .ok_or_else(|| HostError::new("publicKey is not printable"))?,
        };
        Ok(json!({ "publicKey": address }))
    }

    async fn sign_message(&self, message: &[u8]) -> HostResult<Value> {
        let bytes = Uint8Array::from(message);
        let result = call(&self.provider, "signMessage", &[bytes.into()]).await?;
        // Wallet adapters answer either `Uint8Array` or `{signature: Uint8Array}`.
        if result.is_object() && !result.is_instance_of::<Uint8Array>() {
            let signature = get(&result, "signature")?;
            if !signature.is_undefined() {
                return from_js(signature);
            }
        }
        from_js(result)
    }
}

/// Factory handing out a [`JsMiniAppSdk`] for an already-loaded SDK object.
#[derive(Clone)]
pub struct JsSdkFactory {
    sdk: JsValue,
}

impl JsSdkFactory {
    pub fn new(sdk: JsValue) -> Self {
        Self { sdk }
    }

    /// Look the SDK object up on `globalThis` under `name`.
    pub fn from_global(name: &str) -> HostResult<Self> {
        let sdk = get(&js_sys::global(), name)?;
        if sdk.is_undefined() || sdk.is_null() {
            return Err(HostError::new(format!("globalThis.{name} is not defined")));
        }
        Ok(Self::new(sdk))
    }
}

#[async_trait(?Send)]
impl SdkFactory for JsSdkFactory {
    type Sdk = JsMiniAppSdk;

    async fn create(&self) -> HostResult<JsMiniAppSdk> {
        Ok(JsMiniAppSdk::new(self.sdk.clone()))
    }
}

// ─── JS helpers ──────────────────────────────────────────────────────────────

fn get(target: &JsValue, key: &str) -> HostResult<JsValue> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(js_error)
}

fn call_sync(target: &JsValue, method: &str) -> HostResult<JsValue> {
    let function: Function = get(target, method)?
        .dyn_into()
        .map_err(|_| HostError::new(format!("`{method}` is not a function")))?;
    Reflect::apply(&function, target, &Array::new()).map_err(js_error)
}

async fn call(target: &JsValue, method: &str, args: &[JsValue]) -> HostResult<JsValue> {
    let function: Function = get(target, method)?
        .dyn_into()
        .map_err(|_| HostError::new(format!("`{method}` is not a function")))?;
    let argv = args.iter().collect::<Array>();
    let returned = Reflect::apply(&function, target, &argv).map_err(js_error)?;
    settle(returned).await
}

/// Await `value` if it is a promise (or thenable); pass it through otherwise.
async fn settle(value: JsValue) -> HostResult<JsValue> {
    JsFuture::from(Promise::resolve(&value))
        .await
        .map_err(js_error)
}

fn present(value: JsValue) -> Option<JsValue> {
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

fn to_js<T: Serialize>(value: &T) -> HostResult<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| HostError::new(e.to_string()))
}

fn from_js(value: JsValue) -> HostResult<Value> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    if let Some(bytes) = value.dyn_ref::<Uint8Array>() {
        return Ok(Value::String(bs58::encode(bytes.to_vec()).into_string()));
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| HostError::new(e.to_string()))
}

/// Rejection message: `error.message`, then a bare string, then a fallback.
fn js_error(err: JsValue) -> HostError {
    if err.is_object() {
        if let Some(message) = Reflect::get(&err, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
        {
            return HostError::new(message);
        }
    }
    match err.as_string() {
        Some(message) => HostError::new(message),
        None => HostError::new("Unknown error"),
    }
}
