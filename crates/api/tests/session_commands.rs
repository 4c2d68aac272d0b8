//! Session gating and context lifecycle

mod support;

use profilemap_core::Screen;
use profilemap_domain::{BackendConfig, Config, ProfileMapError};
use profilemap_lib::{current_screen, list_view, load_profiles, select_tab, sign_in, sign_out, AppContext};
use serde_json::json;
use support::{context_for, mount_auth, mount_profiles, row_json, EMAIL, PASSWORD};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn admin_tab_is_gated_until_sign_in() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    let ctx = context_for(&server);
    assert!(!ctx.start().await.unwrap());

    assert_eq!(select_tab(&ctx, "admin".to_string()).await.unwrap(), Screen::AuthGate);

    let user = sign_in(&ctx, EMAIL.to_string(), PASSWORD.to_string()).await.unwrap();
    assert_eq!(user.id, "user-1");
    assert_eq!(current_screen(&ctx).await.unwrap(), Screen::Admin);

    ctx.shutdown().await;
    assert!(!ctx.shell.lock().await.is_subscribed());
}

#[tokio::test]
async fn rejected_sign_in_stays_on_gate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;
    let ctx = context_for(&server);
    ctx.start().await.unwrap();
    select_tab(&ctx, "ADMIN".to_string()).await.unwrap();

    let err = sign_in(&ctx, EMAIL.to_string(), "wrong".to_string()).await.unwrap_err();
    assert_eq!(err, "Invalid login credentials");
    assert_eq!(current_screen(&ctx).await.unwrap(), Screen::AuthGate);
}

#[tokio::test]
async fn sign_out_returns_to_profiles_and_keeps_store() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    mount_profiles(&server, json!([row_json("p-1", "Ada", json!(51.5), json!(-0.12))])).await;
    let ctx = context_for(&server);
    ctx.start().await.unwrap();
    load_profiles(&ctx).await.unwrap();

    sign_in(&ctx, EMAIL.to_string(), PASSWORD.to_string()).await.unwrap();
    assert_eq!(select_tab(&ctx, "admin".to_string()).await.unwrap(), Screen::Admin);

    assert_eq!(sign_out(&ctx).await.unwrap(), Screen::Profiles);
    assert_eq!(select_tab(&ctx, "admin".to_string()).await.unwrap(), Screen::AuthGate);
    assert_eq!(list_view(&ctx).await.unwrap().cards.len(), 1);
}

#[tokio::test]
async fn unknown_tab_is_rejected() {
    let server = MockServer::start().await;
    let ctx = context_for(&server);

    let err = select_tab(&ctx, "settings".to_string()).await.unwrap_err();
    assert!(err.contains("settings"));
    assert_eq!(current_screen(&ctx).await.unwrap(), Screen::Profiles);
}

#[test]
fn context_requires_usable_backend_config() {
    let config = Config {
        backend: BackendConfig {
            url: "not a url".to_string(),
            anon_key: "anon".to_string(),
            request_timeout_secs: None,
        },
        ..Config::default()
    };
    assert!(matches!(AppContext::new(config), Err(ProfileMapError::Config(_))));

    let config = Config {
        backend: BackendConfig { anon_key: String::new(), ..BackendConfig::default() },
        ..Config::default()
    };
    assert!(matches!(AppContext::new(config), Err(ProfileMapError::Config(_))));
}
