mod common;

use common::{
  access_key_client, client_for, ok_body, received_forms, setup_mock_server, ACCESS_KEY, PUBLIC_KEY,
};
use fcs_client::{Config, EndpointBase, Error, MarketEndpoints, Params};
use fcs_core::auth::{sign, unix_now};
use serde_json::json;
use std::time::Duration;
use tokio_test::assert_ok;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_execute_success_records_last_response() {
  let server = setup_mock_server().await;
  Mock::given(method("POST"))
    .and(path("/forex/latest"))
    .and(header("content-type", "application/x-www-form-urlencoded"))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!([{"s": "EUR/USD"}]))))
    .expect(1)
    .mount(&server)
    .await;

  let client = access_key_client(&server);
  let params = Params::new().with("symbol", "EUR/USD");
  let response = assert_ok!(client.execute("forex/latest", params).await);

  assert!(response.is_success());
  assert!(client.is_success());
  assert_eq!(client.error(), None);
  assert_eq!(client.response_data(), Some(json!([{"s": "EUR/USD"}])));
  assert_eq!(client.last_response(), Some(response));

  let forms = received_forms(&server).await;
  assert_eq!(forms[0].get("symbol").map(String::as_str), Some("EUR/USD"));
  assert_eq!(forms[0].get("access_key").map(String::as_str), Some(ACCESS_KEY));
}

#[tokio::test]
async fn test_caller_cannot_override_access_key() {
  let server = setup_mock_server().await;
  Mock::given(method("POST"))
    .and(path("/x"))
    .and(body_string_contains("access_key=SECRET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!(null))))
    .expect(1)
    .mount(&server)
    .await;

  let client = access_key_client(&server);
  let params = Params::new().with("access_key", "attacker");
  assert_ok!(client.execute("x", params).await);

  let forms = received_forms(&server).await;
  assert_eq!(forms[0].get("access_key").map(String::as_str), Some(ACCESS_KEY));
  assert_eq!(forms[0].len(), 1);
}

#[tokio::test]
async fn test_ip_whitelist_sends_no_auth_fields() {
  let server = setup_mock_server().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({}))))
    .mount(&server)
    .await;

  let client = client_for(&server, Config::ip_whitelist());
  assert_ok!(client.execute("stock/profile", Params::new().with("symbol", "AAPL")).await);

  let forms = received_forms(&server).await;
  assert_eq!(forms[0].len(), 1);
  for key in ["access_key", "_token", "_expiry", "_public_key"] {
    assert!(!forms[0].contains_key(key), "unexpected auth field {}", key);
  }
}

#[tokio::test]
async fn test_token_mode_signs_each_request() {
  let server = setup_mock_server().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({}))))
    .mount(&server)
    .await;

  let config = Config::with_token(ACCESS_KEY.to_string(), PUBLIC_KEY.to_string()).with_token_expiry(900);
  let client = client_for(&server, config);

  let before = unix_now();
  assert_ok!(client.execute("crypto/latest", Params::new().with("symbol", "BTC/USDT")).await);
  let after = unix_now();

  let forms = received_forms(&server).await;
  let form = &forms[0];
  let expiry: i64 = form["_expiry"].parse().unwrap();

  assert!(expiry >= before + 900 && expiry <= after + 900);
  assert_eq!(form["_public_key"], PUBLIC_KEY);
  assert_eq!(form["_token"], sign(ACCESS_KEY, PUBLIC_KEY, expiry).unwrap());
  assert!(!form.contains_key("access_key"));
}

#[tokio::test]
async fn test_application_error_passes_through() {
  let server = setup_mock_server().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(401).set_body_json(json!({
      "status": false,
      "code": 101,
      "msg": "Invalid access key",
      "info": {"server_time": "2024-01-15 16:00:00"}
    })))
    .mount(&server)
    .await;

  let client = access_key_client(&server);
  let response = assert_ok!(client.execute("forex/list", Params::new()).await);

  assert!(!response.is_success());
  assert_eq!(response.code(), Some(101));
  assert!(!client.is_success());
  assert_eq!(client.error().as_deref(), Some("Invalid access key"));
  assert_eq!(client.response_data(), None);
}

#[tokio::test]
async fn test_malformed_body_is_request_error() {
  let server = setup_mock_server().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
    .mount(&server)
    .await;

  let client = access_key_client(&server);
  let err = client.execute("forex/latest", Params::new()).await.unwrap_err();

  assert!(matches!(err, Error::Request { code: 0, .. }));
  assert!(err.to_string().starts_with("Request Error: "));

  let last = client.last_response().expect("failure is recorded");
  assert_eq!(last.status(), Some(false));
  assert_eq!(last.code(), Some(0));
  assert_eq!(last.get("response"), Some(&serde_json::Value::Null));
  assert_eq!(client.error(), Some(err.to_string()));
}

#[tokio::test]
async fn test_connection_refused_is_normalized() {
  // bind then drop to get a port nobody listens on
  let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
  let port = listener.local_addr().unwrap().port();
  drop(listener);

  let config = Config::with_access_key(ACCESS_KEY.to_string())
    .with_base_url(format!("http://127.0.0.1:{}/", port))
    .with_timeouts(5, 1);
  let client = fcs_client::FcsClient::new(config).unwrap();

  let result = client.execute("forex/latest", Params::new().with("symbol", "EUR/USD")).await;

  assert!(matches!(result, Err(Error::Request { .. })));
  assert!(!client.is_success());
  let message = client.error().unwrap();
  assert!(message.starts_with("Request Error: "));
  assert!(message.len() > "Request Error: ".len());
}

#[tokio::test]
async fn test_timeout_is_normalized() {
  let server = setup_mock_server().await;
  Mock::given(method("POST"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(ok_body(json!({})))
        .set_delay(Duration::from_secs(3)),
    )
    .mount(&server)
    .await;

  let config = Config::with_access_key(ACCESS_KEY.to_string()).with_timeouts(1, 1);
  let client = client_for(&server, config);

  let err = client.execute("forex/latest", Params::new()).await.unwrap_err();
  assert!(matches!(err, Error::Request { .. }));
  assert!(!client.is_success());
}

#[tokio::test]
async fn test_last_response_tracks_most_recent_call() {
  let server = setup_mock_server().await;
  Mock::given(method("POST"))
    .and(path("/forex/latest"))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({"ok": 1}))))
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/forex/broken"))
    .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
    .mount(&server)
    .await;

  let client = access_key_client(&server);

  assert_ok!(client.execute("forex/latest", Params::new()).await);
  assert!(client.is_success());

  assert!(client.execute("forex/broken", Params::new()).await.is_err());
  assert!(!client.is_success());

  assert_ok!(client.execute("forex/latest", Params::new()).await);
  assert!(client.is_success());
  assert_eq!(client.response_data(), Some(json!({"ok": 1})));
}

#[tokio::test]
async fn test_set_timeouts_keeps_last_response() {
  let server = setup_mock_server().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!([]))))
    .mount(&server)
    .await;

  let client = access_key_client(&server);
  assert_ok!(client.execute("stock/list", Params::new()).await);

  assert_ok!(client.set_timeouts(10, 2));
  assert!(client.is_success());
  assert_ok!(client.execute("stock/list", Params::new()).await);
}

#[tokio::test]
async fn test_endpoint_group_taken_before_set_timeouts_updates_client() {
  let server = setup_mock_server().await;
  Mock::given(method("POST"))
    .and(path("/forex/list"))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!([]))))
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/forex/profile"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "status": false,
      "code": 113,
      "msg": "Symbol not found"
    })))
    .mount(&server)
    .await;

  let client = access_key_client(&server);
  let forex = client.forex();
  assert_ok!(client.execute("forex/list", Params::new()).await);
  assert!(client.is_success());

  assert_ok!(client.set_timeouts(10, 2));
  let response = assert_ok!(forex.profile("X").await);

  assert!(!response.is_success());
  assert!(!client.is_success());
  assert_eq!(client.error().as_deref(), Some("Symbol not found"));
  assert_eq!(forex.transport().timeout(), Duration::from_secs(10));
}
