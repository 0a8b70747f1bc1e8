//! Lifecycle: init idempotence, the uninitialized short-circuit, quick start.

mod common;

use std::sync::Arc;

use serde_json::json;

use common::{app, ready_app, StubFactory, StubSdk};
use farcaster_miniapp_sdk::prelude::*;

#[tokio::test]
async fn init_is_idempotent_and_keeps_handle() {
    let sdk = StubSdk::new();
    let factory = StubFactory::new(sdk);
    let created = factory.created.clone();
    let app = MiniApp::new(factory);

    assert!(!app.is_initialized());
    let first = app.init().await.unwrap();
    assert!(!first.already_initialized);
    let handle = app.sdk().cloned().expect("handle after init");

    let second = app.init().await.unwrap();
    assert!(second.already_initialized);
    assert_eq!(
        to_tagged(&Ok::<_, MiniAppError>(second)),
        json!({"success": true, "already_initialized": true})
    );

    assert_eq!(created.get(), 1);
    assert!(Arc::ptr_eq(&handle, app.sdk().unwrap()));
}

#[tokio::test]
async fn failed_init_leaves_adapter_uninitialized() {
    let app = MiniApp::new(StubFactory::failing("no host"));
    let err = app.init().await.unwrap_err();
    assert_eq!(err.to_string(), "no host");
    assert!(!app.is_initialized());
    assert!(app.sdk().is_none());
}

#[tokio::test]
async fn every_operation_short_circuits_before_init() {
    let sdk = StubSdk::new().with_context(common::user_context());
    let (app, _) = app(&sdk);

    let mut results = vec![
        to_tagged(&app.actions().ready(ReadyOptions::default()).await),
        to_tagged(&app.actions().close().await),
        to_tagged(&app.actions().compose_cast(ComposeCastOptions::text("hi")).await),
        to_tagged(&app.actions().add_mini_app().await),
        to_tagged(&app.actions().view_profile(3).await),
        to_tagged(&app.actions().open_url("https://a.com").await),
        to_tagged(&app.actions().sign_in(SignInOptions::nonce("abc12345")).await),
        to_tagged(&app.context().get().await),
        to_tagged(&app.context().username().await),
        to_tagged(&app.context().verified_addresses().await),
        to_tagged(&app.wallet().request_ethereum_accounts().await),
        to_tagged(&app.wallet().ethereum_chain_id().await),
        to_tagged(&app.wallet().send_ethereum_transaction(EthTransaction::to("0xDEAD")).await),
        to_tagged(&app.wallet().sign_ethereum_message("hello", "0xA").await),
        to_tagged(
            &app.wallet()
                .sign_typed_data(SignTypedDataRequest {
                    address: "0xA".into(),
                    typed_data: json!({"types": {}}),
                })
                .await,
        ),
        to_tagged(&app.wallet().request_solana_accounts().await),
        to_tagged(&app.wallet().sign_solana_message("hello").await),
        to_tagged(&app.user_summary().await),
    ];
    results.push(to_tagged(
        &app.compose_cast_with_app(Some("hi"), "https://a.com", &[]).await,
    ));

    for result in results {
        assert_eq!(result, json!({"error": "SDK not initialized"}));
    }
    assert!(sdk.calls().is_empty());
}

#[tokio::test]
async fn quick_start_inits_then_readies() {
    let sdk = StubSdk::new();
    let app = MiniAppBuilder::new()
        .ready_options(ReadyOptions {
            disable_native_gestures: Some(true),
        })
        .build(StubFactory::new(sdk.clone()));

    let status = app.quick_start().await.unwrap();
    assert!(!status.already_initialized);
    assert_eq!(sdk.methods(), vec!["ready"]);
    assert_eq!(sdk.calls()[0].payload, json!({"disableNativeGestures": true}));
}

#[tokio::test]
async fn quick_start_skips_ready_when_init_fails() {
    let factory = StubFactory::failing("boom");
    let sdk = factory.sdk.clone();
    let app = MiniApp::new(factory);

    let err = app.quick_start().await.unwrap_err();
    assert_eq!(err.to_string(), "boom");
    assert!(sdk.calls().is_empty());
}

#[tokio::test]
async fn ready_and_close_report_success() {
    let sdk = StubSdk::new();
    let (app, _) = ready_app(&sdk).await;

    assert_eq!(
        to_tagged(&app.actions().ready(ReadyOptions::default()).await),
        json!({"success": true})
    );
    assert_eq!(to_tagged(&app.actions().close().await), json!({"success": true}));
    assert_eq!(sdk.methods(), vec!["ready", "close"]);
    assert_eq!(sdk.calls()[0].payload, json!({}));
}

#[test]
fn independent_instances_do_not_share_state() {
    tokio_test::block_on(async {
        let (first, _) = app(&StubSdk::new());
        let (second, _) = app(&StubSdk::new());
        first.init().await.unwrap();
        assert!(first.is_initialized());
        assert!(!second.is_initialized());
    });
}
