//! Envelope shapes: the head every request carries and the per-family body
//! templates.
//!
//! A body struct's `Default` impl *is* its template — it carries the wire
//! defaults (local IP, machine ID, version number, ...) the API expects.
//! Templates are therefore immutable by construction: every call gets a
//! fresh value, and nothing a caller does to one envelope can leak into
//! another.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{
    AfterHours, BuySell, ClientCode, Exchange, ExchangeSegment, OrderFor, OrderRef, OrderSide,
    OrderValidity, ScripCode,
};

/// The head sent with every request: app identity plus the request code
/// naming the operation.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RequestHead {
    #[serde(rename = "appName")]
    pub app_name: String,
    #[serde(rename = "appVer")]
    pub app_ver: &'static str,
    #[serde(rename = "key")]
    pub key: String,
    #[serde(rename = "osName")]
    pub os_name: &'static str,
    #[serde(rename = "requestCode")]
    pub request_code: &'static str,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "password")]
    pub password: String,
}

/// One request envelope: head + body, built fresh per call and discarded
/// after the response is processed.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Envelope<B> {
    pub head: RequestHead,
    pub body: B,
}

/// The server's response envelope. The head is ignored; everything of
/// interest lives in the body.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope<B> {
    pub body: B,
}

/// Login request body. Encrypted credential fields are filled by the
/// builder; the rest are the wire constants of the login template.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginBody {
    #[serde(rename = "Email_id")]
    pub email_id: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "My2PIN")]
    pub my2pin: String,
    #[serde(rename = "LocalIP")]
    pub local_ip: &'static str,
    #[serde(rename = "PublicIP")]
    pub public_ip: &'static str,
    #[serde(rename = "HDSerailNumber")]
    pub hd_serial_number: &'static str,
    #[serde(rename = "MACAddress")]
    pub mac_address: &'static str,
    #[serde(rename = "MachineID")]
    pub machine_id: &'static str,
    #[serde(rename = "VersionNo")]
    pub version_no: &'static str,
    #[serde(rename = "RequestNo")]
    pub request_no: &'static str,
    #[serde(rename = "ConnectionType")]
    pub connection_type: &'static str,
}

impl Default for LoginBody {
    fn default() -> Self {
        Self {
            email_id: String::new(),
            password: String::new(),
            my2pin: String::new(),
            local_ip: "192.168.1.1",
            public_ip: "192.168.1.1",
            hd_serial_number: "",
            mac_address: "",
            machine_id: "039377",
            version_no: "1.7",
            request_no: "1",
            connection_type: "1",
        }
    }
}

/// TOTP request-token body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TotpBody {
    #[serde(rename = "Email_ID")]
    pub login_id: String,
    #[serde(rename = "TOTP")]
    pub totp: String,
    #[serde(rename = "PIN")]
    pub pin: String,
}

/// Access-token exchange body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AccessTokenBody {
    #[serde(rename = "RequestToken")]
    pub request_token: String,
    #[serde(rename = "EncryKey")]
    pub encry_key: String,
    #[serde(rename = "UserId")]
    pub user_id: String,
}

/// Generic body for the list endpoints that only need the client code.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenericBody {
    #[serde(rename = "ClientCode")]
    pub client_code: ClientCode,
}

/// Order placement/modify/cancel body. One shape serves all three; the
/// `OrderFor` field discriminates.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OrderBody {
    #[serde(rename = "OrderFor")]
    pub order_for: OrderFor,
    #[serde(rename = "ClientCode")]
    pub client_code: ClientCode,
    #[serde(rename = "OrderRequesterCode")]
    pub order_requester_code: ClientCode,
    #[serde(rename = "AppSource")]
    pub app_source: String,
    #[serde(rename = "OrderType", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderSide>,
    #[serde(rename = "Exchange")]
    pub exchange: Exchange,
    #[serde(rename = "ExchangeType")]
    pub exchange_type: ExchangeSegment,
    #[serde(rename = "ScripCode", skip_serializing_if = "Option::is_none")]
    pub scrip_code: Option<ScripCode>,
    #[serde(rename = "Qty")]
    pub qty: u32,
    #[serde(rename = "Price")]
    pub price: Decimal,
    #[serde(rename = "AtMarket")]
    pub at_market: bool,
    #[serde(rename = "IsStopLossOrder")]
    pub is_stop_loss_order: bool,
    #[serde(rename = "StopLossPrice")]
    pub stop_loss_price: Decimal,
    #[serde(rename = "IsVTD")]
    pub is_vtd: bool,
    #[serde(rename = "IOCOrder")]
    pub ioc_order: bool,
    #[serde(rename = "IsIntraday")]
    pub is_intraday: bool,
    #[serde(rename = "AHPlaced")]
    pub ah_placed: AfterHours,
    #[serde(rename = "DisQty")]
    pub dis_qty: u32,
    #[serde(rename = "TradedQty")]
    pub traded_qty: u32,
    #[serde(rename = "ExchOrderID")]
    pub exch_order_id: String,
    #[serde(rename = "RemoteOrderID", skip_serializing_if = "Option::is_none")]
    pub remote_order_id: Option<String>,
    #[serde(rename = "iOrderValidity")]
    pub order_validity: OrderValidity,
}

impl Default for OrderBody {
    fn default() -> Self {
        Self {
            order_for: OrderFor::Place,
            client_code: ClientCode::new(""),
            order_requester_code: ClientCode::new(""),
            app_source: String::new(),
            order_type: None,
            exchange: Exchange::default(),
            exchange_type: ExchangeSegment::default(),
            scrip_code: None,
            qty: 0,
            price: Decimal::ZERO,
            at_market: true,
            is_stop_loss_order: false,
            stop_loss_price: Decimal::ZERO,
            is_vtd: false,
            ioc_order: false,
            is_intraday: false,
            ah_placed: AfterHours::No,
            dis_qty: 0,
            traded_qty: 0,
            exch_order_id: String::new(),
            remote_order_id: None,
            order_validity: OrderValidity::Day,
        }
    }
}

/// Bracket/cover order body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct BocoBody {
    #[serde(rename = "ClientCode")]
    pub client_code: ClientCode,
    #[serde(rename = "OrderRequesterCode")]
    pub order_requester_code: ClientCode,
    #[serde(rename = "AppSource")]
    pub app_source: String,
    #[serde(rename = "BuySell")]
    pub buy_sell: BuySell,
    #[serde(rename = "Exch")]
    pub exchange: Exchange,
    #[serde(rename = "ExchType")]
    pub exchange_type: ExchangeSegment,
    #[serde(rename = "RequestType")]
    pub request_type: OrderFor,
    #[serde(rename = "ScripCode")]
    pub scrip_code: ScripCode,
    #[serde(rename = "Qty")]
    pub qty: u32,
    #[serde(rename = "LimitPriceInitialOrder")]
    pub limit_price_initial: Decimal,
    #[serde(rename = "TriggerPriceInitialOrder")]
    pub trigger_price_initial: Decimal,
    #[serde(rename = "LimitPriceProfitOrder")]
    pub limit_price_profit: Decimal,
    #[serde(rename = "TriggerPriceForSL")]
    pub trigger_price_sl: Decimal,
    #[serde(rename = "TrailingSL")]
    pub trailing_sl: Decimal,
    #[serde(rename = "StopLoss")]
    pub stop_loss: Decimal,
    #[serde(rename = "AtMarket")]
    pub at_market: bool,
    #[serde(rename = "DisQty")]
    pub dis_qty: u32,
    #[serde(rename = "TradedQty")]
    pub traded_qty: u32,
    #[serde(rename = "ExchOrderID")]
    pub exch_order_id: String,
    #[serde(rename = "LocalOrderIDNormal")]
    pub local_order_id_normal: i64,
    #[serde(rename = "LocalOrderIDSL")]
    pub local_order_id_sl: i64,
    #[serde(rename = "LocalOrderIDLimit")]
    pub local_order_id_limit: i64,
    #[serde(rename = "UniqueOrderIDNormal")]
    pub unique_order_id_normal: String,
    #[serde(rename = "UniqueOrderIDSL")]
    pub unique_order_id_sl: String,
    #[serde(rename = "UniqueOrderIDLimit")]
    pub unique_order_id_limit: String,
    #[serde(rename = "PublicIP")]
    pub public_ip: &'static str,
}

impl Default for BocoBody {
    fn default() -> Self {
        Self {
            client_code: ClientCode::new(""),
            order_requester_code: ClientCode::new(""),
            app_source: String::new(),
            buy_sell: BuySell::Buy,
            exchange: Exchange::default(),
            exchange_type: ExchangeSegment::default(),
            request_type: OrderFor::Place,
            scrip_code: ScripCode::new(0),
            qty: 0,
            limit_price_initial: Decimal::ZERO,
            trigger_price_initial: Decimal::ZERO,
            limit_price_profit: Decimal::ZERO,
            trigger_price_sl: Decimal::ZERO,
            trailing_sl: Decimal::ZERO,
            stop_loss: Decimal::ZERO,
            at_market: false,
            dis_qty: 0,
            traded_qty: 0,
            exch_order_id: String::new(),
            local_order_id_normal: 0,
            local_order_id_sl: 0,
            local_order_id_limit: 0,
            unique_order_id_normal: String::new(),
            unique_order_id_sl: String::new(),
            unique_order_id_limit: String::new(),
            public_ip: "192.168.1.1",
        }
    }
}

/// Order-status request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OrderStatusBody {
    #[serde(rename = "ClientCode")]
    pub client_code: ClientCode,
    #[serde(rename = "OrdStatusReqList")]
    pub orders: Vec<OrderRef>,
}

/// Trade-information request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TradeInfoBody {
    #[serde(rename = "ClientCode")]
    pub client_code: ClientCode,
    #[serde(rename = "TradeDetailList")]
    pub trades: Vec<OrderRef>,
}

/// Market-feed request body. Feed rows are opaque to the client.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MarketFeedBody {
    #[serde(rename = "ClientCode")]
    pub client_code: ClientCode,
    #[serde(rename = "MarketFeedData")]
    pub market_feed_data: Vec<Value>,
    #[serde(rename = "LastRequestTime")]
    pub last_request_time: String,
    #[serde(rename = "RefreshRate")]
    pub refresh_rate: &'static str,
}

impl MarketFeedBody {
    pub(crate) fn new(client_code: ClientCode, market_feed_data: Vec<Value>) -> Self {
        Self {
            client_code,
            market_feed_data,
            last_request_time: "/Date(0)/".to_string(),
            refresh_rate: "H",
        }
    }
}

/// Market-depth request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MarketDepthBody {
    #[serde(rename = "ClientCode")]
    pub client_code: ClientCode,
    #[serde(rename = "Data")]
    pub data: Vec<Value>,
}

/// Trader-ideas request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct IdeasBody {
    #[serde(rename = "ClientCode")]
    pub client_code: ClientCode,
    #[serde(rename = "RequestType")]
    pub request_type: &'static str,
}
