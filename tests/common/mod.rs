//! Recording test double for the mini-app SDK.
//!
//! Every call lands in a shared log so tests can assert exactly what reached
//! the SDK (or that nothing did).

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};

use farcaster_miniapp_sdk::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: String,
    pub payload: Value,
}

#[derive(Default)]
struct State {
    calls: RefCell<Vec<Call>>,
    reject_with: RefCell<Option<String>>,
    context: RefCell<Value>,
    responses: RefCell<HashMap<String, Value>>,
    ethereum: Cell<bool>,
    solana: Cell<bool>,
}

/// SDK double. Clones share the same state.
#[derive(Clone, Default)]
pub struct StubSdk {
    state: Rc<State>,
}

impl StubSdk {
    pub fn new() -> Self {
        let sdk = Self::default();
        sdk.state.ethereum.set(true);
        sdk.state.solana.set(true);
        sdk
    }

    /// Every call rejects with `message`.
    pub fn reject_with(self, message: &str) -> Self {
        *self.state.reject_with.borrow_mut() = Some(message.to_string());
        self
    }

    pub fn with_context(self, context: Value) -> Self {
        *self.state.context.borrow_mut() = context;
        self
    }

    /// Raw value returned for `method` (e.g. `"sign_in"` or `"eth:eth_chainId"`).
    pub fn respond(self, method: &str, value: Value) -> Self {
        self.state
            .responses
            .borrow_mut()
            .insert(method.to_string(), value);
        self
    }

    pub fn without_ethereum(self) -> Self {
        self.state.ethereum.set(false);
        self
    }

    pub fn without_solana(self) -> Self {
        self.state.solana.set(false);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.calls.borrow().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.method).collect()
    }

    fn record(&self, method: &str, payload: Value) -> HostResult<Value> {
        self.state.calls.borrow_mut().push(Call {
            method: method.to_string(),
            payload,
        });
        if let Some(message) = self.state.reject_with.borrow().as_ref() {
            return Err(HostError::new(message.clone()));
        }
        Ok(self
            .state
            .responses
            .borrow()
            .get(method)
            .cloned()
            .unwrap_or(Value::Null))
    }
}

#[async_trait(?Send)]
impl MiniAppSdk for StubSdk {
    type Ethereum = StubEthereum;
    type Solana = StubSolana;

    async fn ready(&self, options: Value) -> HostResult<()> {
        self.record("ready", options).map(drop)
    }

    async fn close(&self) -> HostResult<()> {
        self.record("close", Value::Null).map(drop)
    }

    async fn compose_cast(&self, options: Value) -> HostResult<Value> {
        self.record("compose_cast", options)
    }

    async fn add_mini_app(&self) -> HostResult<Value> {
        self.record("add_mini_app", Value::Null)
    }

    async fn view_profile(&self, options: Value) -> HostResult<()> {
        self.record("view_profile", options).map(drop)
    }

    async fn open_url(&self, url: &str) -> HostResult<()> {
        self.record("open_url", json!(url)).map(drop)
    }

    async fn sign_in(&self, options: Value) -> HostResult<Value> {
        self.record("sign_in", options)
    }

    async fn context(&self) -> HostResult<Value> {
        self.record("context", Value::Null)?;
        Ok(self.state.context.borrow().clone())
    }

    async fn ethereum_provider(&self) -> HostResult<Option<StubEthereum>> {
        Ok(self
            .state
            .ethereum
            .get()
            .then(|| StubEthereum { sdk: self.clone() }))
    }

    async fn solana_provider(&self) -> HostResult<Option<StubSolana>> {
        Ok(self
            .state
            .solana
            .get()
            .then(|| StubSolana { sdk: self.clone() }))
    }
}

pub struct StubEthereum {
    sdk: StubSdk,
}

#[async_trait(?Send)]
impl EthereumProvider for StubEthereum {
    async fn request(&self, request: Eip1193Request) -> HostResult<Value> {
        self.sdk
            .record(&format!("eth:{}", request.method), Value::Array(request.params))
    }
}

pub struct StubSolana {
    sdk: StubSdk,
}

#[async_trait(?Send)]
impl SolanaProvider for StubSolana {
    async fn connect(&self) -> HostResult<Value> {
        self.sdk.record("sol:connect", Value::Null)
    }

    async fn sign_message(&self, message: &[u8]) -> HostResult<Value> {
        self.sdk.record("sol:sign_message", json!(message))
    }
}

/// Factory that hands out clones of one `StubSdk` and counts invocations.
#[derive(Clone)]
pub struct StubFactory {
    pub sdk: StubSdk,
    pub created: Rc<Cell<usize>>,
    pub fail_with: Option<String>,
}

impl StubFactory {
    pub fn new(sdk: StubSdk) -> Self {
        Self {
            sdk,
            created: Rc::new(Cell::new(0)),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new(StubSdk::new())
        }
    }
}

#[async_trait(?Send)]
impl SdkFactory for StubFactory {
    type Sdk = StubSdk;

    async fn create(&self) -> HostResult<StubSdk> {
        self.created.set(self.created.get() + 1);
        match &self.fail_with {
            Some(message) => Err(HostError::new(message.clone())),
            None => Ok(self.sdk.clone()),
        }
    }
}

/// An uninitialized app over `sdk`, with warnings captured in the returned sink.
pub fn app(sdk: &StubSdk) -> (MiniApp<StubFactory>, MemorySink) {
    let sink = MemorySink::default();
    let app = MiniAppBuilder::new()
        .warning_sink(sink.clone())
        .build(StubFactory::new(sdk.clone()));
    (app, sink)
}

/// An initialized app over `sdk`.
pub async fn ready_app(sdk: &StubSdk) -> (MiniApp<StubFactory>, MemorySink) {
    let (app, sink) = app(sdk);
    app.init().await.expect("init should succeed");
    (app, sink)
}

pub fn user_context() -> Value {
    json!({
        "user": {
            "fid": 6841,
            "username": "deodad",
            "displayName": "Tony D'Addeo",
            "pfpUrl": "https://i.example/deodad.png",
            "bio": "building",
            "custodyAddress": "0xCUSTODY",
            "ethAddresses": ["0xA"],
            "solAddresses": ["S1"]
        },
        "client": {"clientFid": 9152, "added": false},
        "location": {"type": "cast_embed", "embed": "https://my.app"}
    })
}
