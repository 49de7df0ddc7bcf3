//! Basic authentication example.
//!
//! Logs in with a password and prints the client's holdings.
//!
//! Run with: cargo run --example basic_auth

use fivepaisa_rs::{Credentials, FivePaisaClient};

#[tokio::main]
async fn main() -> fivepaisa_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // App keys from the developer console
    let credentials = Credentials::new(
        env("FIVEPAISA_APP_NAME"),
        env("FIVEPAISA_APP_SOURCE"),
        env("FIVEPAISA_USER_ID"),
        env("FIVEPAISA_PASSWORD"),
        env("FIVEPAISA_USER_KEY"),
        env("FIVEPAISA_ENCRYPTION_KEY"),
    );
    let client = FivePaisaClient::new(credentials)?;

    println!("Logging in...");
    client
        .auth()
        .login(
            &env("FIVEPAISA_EMAIL"),
            &env("FIVEPAISA_LOGIN_PASSWORD"),
            &env("FIVEPAISA_DOB"),
        )
        .await?;

    let client_code = client.session().client_code().await.expect("client code set on login");
    println!("Logged in as {}", client_code);

    let holdings = client.portfolio().holdings().await?;
    println!("\nFound {} holding(s):", holdings.len());
    for holding in &holdings {
        println!("  - {}", holding);
    }

    Ok(())
}

fn env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} environment variable required"))
}
