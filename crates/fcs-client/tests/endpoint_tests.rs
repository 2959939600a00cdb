mod common;

use common::{access_key_client, ok_body, received_forms, setup_mock_server};
use fcs_client::{
  AdvancedQuery, HistoryQuery, ListFilter, MarketEndpoints, Period, TopMoversQuery,
};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_ok(server: &MockServer, endpoint: &str) {
  Mock::given(method("POST"))
    .and(path(endpoint))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!([]))))
    .expect(1)
    .mount(server)
    .await;
}

#[tokio::test]
async fn test_forex_latest_omits_unset_exchange() {
  let server = setup_mock_server().await;
  mount_ok(&server, "/forex/latest").await;

  let client = access_key_client(&server);
  assert_ok!(client.forex().latest("EUR/USD,GBP/USD", None).await);

  let forms = received_forms(&server).await;
  assert_eq!(forms[0]["symbol"], "EUR/USD,GBP/USD");
  assert!(!forms[0].contains_key("exchange"));
}

#[tokio::test]
async fn test_crypto_history_sends_only_set_fields() {
  let server = setup_mock_server().await;
  mount_ok(&server, "/crypto/history").await;

  let client = access_key_client(&server);
  let query = HistoryQuery::new(Period::Hour4).length(50);
  assert_ok!(client.crypto().history("BTC/USDT", &query).await);

  let forms = received_forms(&server).await;
  let form = &forms[0];
  assert_eq!(form["symbol"], "BTC/USDT");
  assert_eq!(form["period"], "4h");
  assert_eq!(form["length"], "50");
  for key in ["from", "to", "page", "is_chart"] {
    assert!(!form.contains_key(key), "unset field {} was sent", key);
  }
}

#[tokio::test]
async fn test_stock_list_filter() {
  let server = setup_mock_server().await;
  mount_ok(&server, "/stock/list").await;

  let client = access_key_client(&server);
  let filter = ListFilter::new().exchange("NASDAQ").country("united-states");
  assert_ok!(client.stock().list(&filter).await);

  let forms = received_forms(&server).await;
  let form = &forms[0];
  assert_eq!(form["exchange"], "NASDAQ");
  assert_eq!(form["country"], "united-states");
  assert!(!form.contains_key("type"));
  assert!(!form.contains_key("sub_type"));
}

#[tokio::test]
async fn test_technical_endpoints_paths() {
  let server = setup_mock_server().await;
  mount_ok(&server, "/forex/pivot_points").await;
  mount_ok(&server, "/forex/ma_avg").await;
  mount_ok(&server, "/forex/indicators").await;

  let client = access_key_client(&server);
  let forex = client.forex();
  assert_ok!(forex.pivot_points("EUR/USD", Period::Day1).await);
  assert_ok!(forex.moving_averages("EUR/USD", Period::Hour1).await);
  assert_ok!(forex.indicators("EUR/USD", Period::Min15).await);

  let periods: Vec<String> =
    received_forms(&server).await.iter().map(|f| f["period"].clone()).collect();
  assert_eq!(periods, vec!["1d", "1h", "15m"]);
}

#[tokio::test]
async fn test_top_movers_and_advanced() {
  let server = setup_mock_server().await;
  mount_ok(&server, "/crypto/top_movers").await;
  mount_ok(&server, "/stock/advance").await;

  let client = access_key_client(&server);
  let movers = TopMoversQuery::new().kind("gainers").limit(10);
  assert_ok!(client.crypto().top_movers(&movers).await);

  let advanced = AdvancedQuery::new()
    .filter("sort_by", "active.chp_desc")
    .filter("per_page", 50_u32)
    .filter_opt("exchange", None::<&str>);
  assert_ok!(client.stock().advanced(&advanced).await);

  let forms = received_forms(&server).await;
  assert_eq!(forms[0]["type"], "gainers");
  assert_eq!(forms[0]["limit"], "10");
  assert_eq!(forms[1]["sort_by"], "active.chp_desc");
  assert_eq!(forms[1]["per_page"], "50");
  assert!(!forms[1].contains_key("exchange"));
}

#[tokio::test]
async fn test_market_specific_endpoints() {
  let server = setup_mock_server().await;
  mount_ok(&server, "/forex/converter").await;
  mount_ok(&server, "/crypto/coin_data").await;
  mount_ok(&server, "/stock/financials").await;
  mount_ok(&server, "/stock/dividends").await;

  let client = access_key_client(&server);
  assert_ok!(client.forex().converter("EUR", "USD", 250.5).await);
  assert_ok!(client.crypto().coin_data("ETH").await);
  assert_ok!(client.stock().financials("AAPL", None).await);
  assert_ok!(client.stock().dividends("MSFT").await);

  let forms = received_forms(&server).await;
  assert_eq!(forms[0]["pair1"], "EUR");
  assert_eq!(forms[0]["pair2"], "USD");
  assert_eq!(forms[0]["amount"], "250.5");
  assert_eq!(forms[1]["symbol"], "ETH");
  assert!(!forms[2].contains_key("type"));
  assert_eq!(forms[3]["symbol"], "MSFT");
  assert!(forms.iter().all(|f| f.contains_key("access_key")));
}

#[tokio::test]
async fn test_endpoint_failure_visible_through_client() {
  let server = setup_mock_server().await;
  Mock::given(method("POST"))
    .and(path("/stock/profile"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "status": false,
      "code": 113,
      "msg": "Symbol not found"
    })))
    .mount(&server)
    .await;

  let client = access_key_client(&server);
  let response = assert_ok!(client.stock().profile("NOPE").await);

  assert!(!response.is_success());
  assert_eq!(client.error().as_deref(), Some("Symbol not found"));
}
