//! Order placement example.
//!
//! Authenticates with the TOTP flow and places a limit order.
//!
//! Run with: cargo run --example place_order

use fivepaisa_rs::models::{OrderSide, OrderTicket};
use fivepaisa_rs::{Credentials, FivePaisaClient};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> fivepaisa_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let credentials = Credentials::new(
        env("FIVEPAISA_APP_NAME"),
        env("FIVEPAISA_APP_SOURCE"),
        env("FIVEPAISA_USER_ID"),
        env("FIVEPAISA_PASSWORD"),
        env("FIVEPAISA_USER_KEY"),
        env("FIVEPAISA_ENCRYPTION_KEY"),
    );
    let client = FivePaisaClient::new(credentials)?;

    let access_token = client
        .auth()
        .totp_session(
            &env("FIVEPAISA_CLIENT_CODE"),
            &env("FIVEPAISA_TOTP"),
            &env("FIVEPAISA_PIN"),
        )
        .await?;
    println!("Authenticated, access token: {}...", &access_token[..8.min(access_token.len())]);

    // ITC on the NSE cash segment, limit order
    let ticket = OrderTicket::builder()
        .side(OrderSide::Buy)
        .scrip_code(1660)
        .qty(1)
        .price(dec!(262.80))
        .build()?;

    let response = client.orders().place(&ticket).await?;
    println!("Broker order ID : {}", response.broker_order_id);
    println!("RMS code        : {}", response.rms_response_code);
    println!("Status          : {}", response.status);
    println!("Message         : {}", response.message);

    Ok(())
}

fn env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} environment variable required"))
}
