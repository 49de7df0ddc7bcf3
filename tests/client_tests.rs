//! Integration tests for fivepaisa-rs.
//!
//! The suite runs against a local mock server, so it needs no vendor
//! credentials and exercises exactly what goes over the wire: envelope
//! shapes, bearer-token handling, response classification, and the session
//! state machine.

use std::sync::Once;

use httpmock::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use fivepaisa_rs::models::{BuySell, OrderModification, OrderSide, OrderTicket};
use fivepaisa_rs::prelude::*;
use rust_decimal_macros::dec;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn credentials() -> Credentials {
    Credentials::new("app", "5300", "uid", "app-pass", "ukey", "enc-key")
}

/// A fresh, unauthenticated client pointed at the mock server.
fn fresh_client(server: &MockServer) -> FivePaisaClient {
    init_logging();
    let config = ClientConfig::default()
        .with_base_url(server.base_url())
        .with_historical_base_url(server.base_url());
    FivePaisaClient::with_config(credentials(), config).expect("client should build")
}

/// A client with a pre-known client code and an injected access token,
/// ready for business calls.
async fn authenticated_client(server: &MockServer) -> FivePaisaClient {
    init_logging();
    let config = ClientConfig::default()
        .with_base_url(server.base_url())
        .with_historical_base_url(server.base_url());
    let client = FivePaisaClient::with_config(credentials().with_client_code("C1"), config)
        .expect("client should build");
    client
        .auth()
        .set_access_token("AT1")
        .await
        .expect("token injection should succeed");
    client
}

// ============================================================================
// AUTHENTICATION
// ============================================================================

mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_success_authenticates_session() {
        let server = MockServer::start_async().await;
        let login_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/V2/LoginRequestMobileNewbyEmail");
                then.status(200).json_body(json!({
                    "body": {"Message": "", "ClientCode": "C1", "JWTToken": "T1"}
                }));
            })
            .await;

        let client = fresh_client(&server);
        client
            .auth()
            .login("user@example.com", "password", "19900101")
            .await
            .expect("login should succeed");

        login_mock.assert_async().await;
        assert_eq!(client.session().phase().await, SessionPhase::Authenticated);
        assert_eq!(
            client.session().client_code().await.unwrap().as_str(),
            "C1"
        );
    }

    #[tokio::test]
    async fn test_login_sends_encrypted_credentials() {
        let server = MockServer::start_async().await;
        // The plaintext email must never appear in the payload; the cipher
        // is deterministic, so the exact ciphertext can be matched.
        let expected_email = fivepaisa_rs::auth::cipher::encrypt("enc-key", "user@example.com")
            .expect("cipher should succeed");
        let login_mock = server
            .mock_async(move |when, then| {
                when.method(POST)
                    .path("/V2/LoginRequestMobileNewbyEmail")
                    .json_body_partial(
                        json!({
                            "head": {"requestCode": "5PLoginV2", "appName": "app"},
                            "body": {"Email_id": expected_email, "MachineID": "039377"}
                        })
                        .to_string(),
                    );
                then.status(200).json_body(json!({
                    "body": {"Message": "", "ClientCode": "C1", "JWTToken": "T1"}
                }));
            })
            .await;

        let client = fresh_client(&server);
        client
            .auth()
            .login("user@example.com", "password", "19900101")
            .await
            .expect("login should succeed");

        login_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_message_and_fails_session() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/V2/LoginRequestMobileNewbyEmail");
                then.status(200).json_body(json!({
                    "body": {"Message": "Invalid credentials", "ClientCode": "INVALID CODE"}
                }));
            })
            .await;

        let client = fresh_client(&server);
        let err = client
            .auth()
            .login("user@example.com", "wrong", "19900101")
            .await
            .expect_err("login should be rejected");

        assert!(matches!(err, Error::Auth(ref msg) if msg == "Invalid credentials"));
        assert_eq!(client.session().phase().await, SessionPhase::Failed);
    }

    #[tokio::test]
    async fn test_totp_chain_yields_access_token() {
        let server = MockServer::start_async().await;
        let totp_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/V1/TOTPLogin")
                    .json_body_partial(
                        json!({"body": {"Email_ID": "51234567", "TOTP": "123456", "PIN": "7777"}})
                            .to_string(),
                    );
                then.status(200)
                    .json_body(json!({"body": {"RequestToken": "RT1"}}));
            })
            .await;
        let exchange_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/V1/GetAccessToken")
                    .json_body_partial(
                        json!({"body": {"RequestToken": "RT1", "EncryKey": "enc-key", "UserId": "uid"}})
                            .to_string(),
                    );
                then.status(200).json_body(json!({
                    "body": {"AccessToken": "AT1", "ClientCode": "C2"}
                }));
            })
            .await;

        let client = fresh_client(&server);
        let access_token = client
            .auth()
            .totp_session("51234567", "123456", "7777")
            .await
            .expect("TOTP chain should succeed");

        assert_eq!(access_token, "AT1");
        totp_mock.assert_async().await;
        exchange_mock.assert_async().await;
        assert_eq!(client.session().phase().await, SessionPhase::Authenticated);
        assert_eq!(
            client.session().client_code().await.unwrap().as_str(),
            "C2"
        );
    }

    #[tokio::test]
    async fn test_request_token_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/V1/TOTPLogin");
                then.status(200).json_body(json!({
                    "body": {"RequestToken": "", "Message": "Invalid TOTP"}
                }));
            })
            .await;

        let client = fresh_client(&server);
        let err = client
            .auth()
            .request_token("51234567", "000000", "7777")
            .await
            .expect_err("request token should be rejected");

        assert!(matches!(err, Error::Auth(ref msg) if msg == "Invalid TOTP"));
        // The failing first step aborts the chain before the exchange.
        assert_eq!(
            client.session().phase().await,
            SessionPhase::Unauthenticated
        );
    }

    #[tokio::test]
    async fn test_oauth_session_exchanges_request_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/V1/GetAccessToken");
                then.status(200).json_body(json!({
                    "body": {"AccessToken": "AT9", "ClientCode": "C9"}
                }));
            })
            .await;

        let client = fresh_client(&server);
        let token = client
            .auth()
            .oauth_session("oauth-request-token")
            .await
            .expect("exchange should succeed");
        assert_eq!(token, "AT9");
        assert!(client.session().is_authenticated().await);
    }

    #[tokio::test]
    async fn test_set_access_token_rejects_empty() {
        let server = MockServer::start_async().await;
        let client = fresh_client(&server);

        let err = client.auth().set_access_token("").await.unwrap_err();
        assert!(matches!(err, Error::InvalidToken));
        assert_eq!(
            client.session().phase().await,
            SessionPhase::Unauthenticated
        );
    }

    #[tokio::test]
    async fn test_set_access_token_trusts_caller() {
        let server = MockServer::start_async().await;
        let client = fresh_client(&server);

        client.auth().set_access_token("AT1").await.unwrap();
        assert_eq!(client.session().phase().await, SessionPhase::Authenticated);
        assert_eq!(client.session().access_token().await.unwrap(), "AT1");
    }
}

// ============================================================================
// PHASE GUARD
// ============================================================================

mod phase_guard_tests {
    use super::*;

    #[tokio::test]
    async fn test_business_call_before_auth_issues_no_request() {
        let server = MockServer::start_async().await;
        let spy = server
            .mock_async(|when, then| {
                when.path_contains("/");
                then.status(500);
            })
            .await;

        let client = fresh_client(&server);
        let err = client.portfolio().holdings().await.unwrap_err();

        assert!(matches!(err, Error::Precondition(_)));
        assert_eq!(spy.hits_async().await, 0, "no network call may be issued");
    }

    #[tokio::test]
    async fn test_order_before_auth_issues_no_request() {
        let server = MockServer::start_async().await;
        let spy = server
            .mock_async(|when, then| {
                when.path_contains("/");
                then.status(500);
            })
            .await;

        let client = fresh_client(&server);
        let ticket = OrderTicket::builder()
            .side(OrderSide::Buy)
            .scrip_code(1660)
            .qty(10)
            .build()
            .unwrap();
        let err = client.orders().place(&ticket).await.unwrap_err();

        assert!(matches!(err, Error::Precondition(_)));
        assert_eq!(spy.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_token_without_client_code_still_guards_business_calls() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/V1/GetAccessToken");
                // No ClientCode in the response and none pre-known.
                then.status(200).json_body(json!({"body": {"AccessToken": "AT1"}}));
            })
            .await;

        let client = fresh_client(&server);
        client.auth().access_token("RT1").await.unwrap();
        assert_eq!(
            client.session().phase().await,
            SessionPhase::AccessTokenObtained
        );

        let err = client.portfolio().holdings().await.unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }
}

// ============================================================================
// PORTFOLIO
// ============================================================================

mod portfolio_tests {
    use super::*;

    #[tokio::test]
    async fn test_holdings_returns_rows() {
        let server = MockServer::start_async().await;
        let holdings_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/V2/Holding")
                    .header("Authorization", "Bearer AT1")
                    .json_body_partial(
                        json!({
                            "head": {"requestCode": "5PHoldingV2"},
                            "body": {"ClientCode": "C1"}
                        })
                        .to_string(),
                    );
                then.status(200).json_body(json!({
                    "body": {
                        "Message": "Success",
                        "Data": [
                            {"Symbol": "ITC", "Quantity": 10},
                            {"Symbol": "RELIANCE", "Quantity": 2}
                        ]
                    }
                }));
            })
            .await;

        let client = authenticated_client(&server).await;
        let holdings = client.portfolio().holdings().await.unwrap();

        holdings_mock.assert_async().await;
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0]["Symbol"], "ITC");
    }

    #[tokio::test]
    async fn test_empty_holdings_is_no_data() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/V2/Holding");
                then.status(200).json_body(json!({
                    "body": {"Data": [], "Message": "No holdings"}
                }));
            })
            .await;

        let client = authenticated_client(&server).await;
        let err = client.portfolio().holdings().await.unwrap_err();
        assert!(matches!(err, Error::NoData(ref msg) if msg == "No holdings"));
    }

    #[tokio::test]
    async fn test_positions_and_margin_use_their_array_fields() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/V1/NetPositionNetWise");
                then.status(200).json_body(json!({
                    "body": {"NetPositionDetail": [{"ScripCode": 1660}]}
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/V3/Margin");
                then.status(200).json_body(json!({
                    "body": {"EquityMargin": [{"NetAvailableMargin": 5000.0}]}
                }));
            })
            .await;

        let client = authenticated_client(&server).await;
        assert_eq!(client.portfolio().positions().await.unwrap().len(), 1);
        assert_eq!(client.portfolio().margin().await.unwrap().len(), 1);
    }
}

// ============================================================================
// ORDERS
// ============================================================================

mod orders_tests {
    use super::*;

    #[tokio::test]
    async fn test_place_order_returns_raw_response() {
        let server = MockServer::start_async().await;
        let order_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/V1/OrderRequest")
                    .json_body_partial(
                        json!({
                            "head": {"requestCode": "5POrdReq"},
                            "body": {
                                "OrderFor": "P",
                                "OrderType": "BUY",
                                "ScripCode": 1660,
                                "Qty": 10,
                                "ClientCode": "C1",
                                "OrderRequesterCode": "C1",
                                "AppSource": "5300"
                            }
                        })
                        .to_string(),
                    );
                then.status(200).json_body(json!({
                    "body": {
                        "BrokerOrderID": 998877,
                        "ClientCode": "C1",
                        "Exch": "N",
                        "RMSResponseCode": 1,
                        "Status": 0,
                        "Message": "Success"
                    }
                }));
            })
            .await;

        let client = authenticated_client(&server).await;
        let ticket = OrderTicket::builder()
            .side(OrderSide::Buy)
            .scrip_code(1660)
            .qty(10)
            .build()
            .unwrap();
        let response = client.orders().place(&ticket).await.unwrap();

        order_mock.assert_async().await;
        assert_eq!(response.broker_order_id, 998877);
        assert_eq!(response.status, 0);
    }

    #[tokio::test]
    async fn test_rms_rejection_is_still_a_transport_success() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/V1/OrderRequest");
                then.status(200).json_body(json!({
                    "body": {"RMSResponseCode": -1, "Status": 2, "Message": "Exceeds RMS limits"}
                }));
            })
            .await;

        let client = authenticated_client(&server).await;
        let ticket = OrderTicket::builder()
            .side(OrderSide::Sell)
            .scrip_code(2885)
            .qty(1)
            .build()
            .unwrap();

        // The body is returned for inspection; rejection is the caller's to
        // detect from the RMS fields.
        let response = client.orders().place(&ticket).await.unwrap();
        assert_eq!(response.status, 2);
        assert_eq!(response.message, "Exceeds RMS limits");
    }

    #[tokio::test]
    async fn test_after_hours_order_is_never_at_market() {
        let server = MockServer::start_async().await;
        let order_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/V1/OrderRequest")
                    .json_body_partial(
                        json!({"body": {"AHPlaced": "Y", "AtMarket": false}}).to_string(),
                    );
                then.status(200).json_body(json!({"body": {"Status": 0}}));
            })
            .await;

        let client = authenticated_client(&server).await;
        let ticket = OrderTicket::builder()
            .side(OrderSide::Buy)
            .scrip_code(1660)
            .qty(10)
            .at_market(true)
            .after_hours(AfterHours::Yes)
            .build()
            .unwrap();
        client.orders().place(&ticket).await.unwrap();

        order_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_modify_and_cancel_share_the_order_route() {
        let server = MockServer::start_async().await;
        let modify_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/V1/OrderRequest")
                    .json_body_partial(
                        json!({"body": {"OrderFor": "M", "ExchOrderID": "EX1", "Qty": 20}})
                            .to_string(),
                    );
                then.status(200).json_body(json!({"body": {"Status": 0}}));
            })
            .await;
        let cancel_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/V1/OrderRequest")
                    .json_body_partial(
                        json!({"body": {"OrderFor": "C", "ExchOrderID": "EX1"}}).to_string(),
                    );
                then.status(200).json_body(json!({"body": {"Status": 0}}));
            })
            .await;

        let client = authenticated_client(&server).await;

        let mut modification = OrderModification::for_order("EX1");
        modification.qty = Some(20);
        client.orders().modify(&modification).await.unwrap();
        modify_mock.assert_async().await;

        client.orders().cancel("EX1", 0).await.unwrap();
        cancel_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_boco_order_carries_all_three_legs() {
        let server = MockServer::start_async().await;
        let boco_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/V1/SMOOrderRequest")
                    .json_body_partial(
                        json!({
                            "head": {"requestCode": "5PSMOOrd"},
                            "body": {
                                "BuySell": "B",
                                "LimitPriceInitialOrder": 100.0,
                                "TriggerPriceInitialOrder": 99.0,
                                "LimitPriceProfitOrder": 110.0,
                                "TriggerPriceForSL": 95.0
                            }
                        })
                        .to_string(),
                    );
                then.status(200).json_body(json!({"body": {"Status": 0}}));
            })
            .await;

        let client = authenticated_client(&server).await;
        let ticket = BocoTicket::builder()
            .side(BuySell::Buy)
            .scrip_code(1660)
            .qty(10)
            .limit_price_initial(dec!(100))
            .trigger_price_initial(dec!(99))
            .limit_price_profit(dec!(110))
            .trigger_price_sl(dec!(95))
            .build()
            .unwrap();
        client.orders().boco(&ticket).await.unwrap();

        boco_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_order_status_classifies_empty_as_no_data() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/OrderStatus");
                then.status(200).json_body(json!({
                    "body": {"OrdStatusResLst": [], "Message": "No info found"}
                }));
            })
            .await;

        let client = authenticated_client(&server).await;
        let refs = vec![OrderRef {
            exchange: Exchange::Nse,
            segment: ExchangeSegment::Cash,
            scrip_code: ScripCode::new(11111),
            remote_order_id: RemoteOrderId::new("5712977609111312242"),
        }];
        let err = client.orders().status(refs).await.unwrap_err();
        assert!(matches!(err, Error::NoData(ref msg) if msg == "No info found"));
    }
}

// ============================================================================
// MARKET DATA
// ============================================================================

mod market_tests {
    use super::*;

    #[tokio::test]
    async fn test_market_feed_returns_rows() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/MarketFeed")
                    .json_body_partial(
                        json!({"body": {"RefreshRate": "H", "LastRequestTime": "/Date(0)/"}})
                            .to_string(),
                    );
                then.status(200).json_body(json!({
                    "body": {"Data": [{"Symbol": "ITC", "LastRate": 262.8}]}
                }));
            })
            .await;

        let client = authenticated_client(&server).await;
        let feed = client
            .market()
            .feed(vec![json!({"Exch": "N", "ExchType": "C", "Symbol": "ITC"})])
            .await
            .unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0]["Symbol"], "ITC");
    }

    #[tokio::test]
    async fn test_market_depth_returns_raw_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/V1/MarketDepth");
                then.status(200).json_body(json!({
                    "body": {"Status": 0, "Data": [{"Details": []}]}
                }));
            })
            .await;

        let client = authenticated_client(&server).await;
        let depth = client
            .market()
            .depth(vec![json!({"Exchange": "N", "ExchangeType": "C", "ScripCode": 1660})])
            .await
            .unwrap();
        assert_eq!(depth["Status"], 0);
    }

    #[tokio::test]
    async fn test_historical_is_an_authorized_get() {
        let server = MockServer::start_async().await;
        let candles_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/N/C/1660/1d")
                    .query_param("from", "2024-01-01")
                    .query_param("end", "2024-02-01")
                    .header("Authorization", "Bearer AT1");
                then.status(200).json_body(json!({
                    "candles": [[1704067200, 262.0, 265.0, 261.0, 264.4, 100000]]
                }));
            })
            .await;

        let client = authenticated_client(&server).await;
        let candles = client
            .market()
            .historical("N", "C", 1660, "1d", "2024-01-01", "2024-02-01")
            .await
            .unwrap();

        candles_mock.assert_async().await;
        assert!(candles["candles"].is_array());
    }

    #[tokio::test]
    async fn test_historical_requires_authentication() {
        let server = MockServer::start_async().await;
        let client = fresh_client(&server);
        let err = client
            .market()
            .historical("N", "C", 1660, "1d", "2024-01-01", "2024-02-01")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }
}

// ============================================================================
// TRANSPORT FAILURES
// ============================================================================

mod transport_tests {
    use super::*;

    #[tokio::test]
    async fn test_server_error_surfaces_as_http_error() {
        let server = MockServer::start_async().await;
        let error_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/V2/Holding");
                then.status(503);
            })
            .await;

        let client = authenticated_client(&server).await;
        let err = client.portfolio().holdings().await.unwrap_err();

        assert!(matches!(err, Error::Http(_)));
        assert!(err.is_retryable());
        // No internal retry: exactly one request went out.
        assert_eq!(error_mock.hits_async().await, 1);
    }

    #[tokio::test]
    async fn test_failed_dispatch_leaves_session_intact() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/V2/Holding");
                then.status(503);
            })
            .await;

        let client = authenticated_client(&server).await;
        let _ = client.portfolio().holdings().await;
        assert_eq!(client.session().phase().await, SessionPhase::Authenticated);
        assert_eq!(
            client.session().client_code().await.unwrap().as_str(),
            "C1"
        );
    }
}
