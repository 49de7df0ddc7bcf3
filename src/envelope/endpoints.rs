//! The read-only endpoint table.
//!
//! Every operation is identified by a route under the vendor API base URL
//! and a request-code string carried in the envelope head. Login and the
//! token-exchange endpoints are unauthenticated by definition; everything
//! else requires a bearer token.

/// One API operation: where it lives and how the head identifies it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint {
    /// Route path under the API base URL
    pub path: &'static str,
    /// Request-code string sent in the envelope head
    pub request_code: &'static str,
    /// Whether the `Authorization: Bearer` header is attached
    pub requires_auth: bool,
}

pub(crate) const LOGIN: Endpoint = Endpoint {
    path: "/V2/LoginRequestMobileNewbyEmail",
    request_code: "5PLoginV2",
    requires_auth: false,
};

pub(crate) const TOTP_LOGIN: Endpoint = Endpoint {
    path: "/V1/TOTPLogin",
    request_code: "5PLoginV4",
    requires_auth: false,
};

pub(crate) const ACCESS_TOKEN: Endpoint = Endpoint {
    path: "/V1/GetAccessToken",
    request_code: "5PGetAccessToken",
    requires_auth: false,
};

pub(crate) const MARGIN: Endpoint = Endpoint {
    path: "/V3/Margin",
    request_code: "5PMarginV3",
    requires_auth: true,
};

pub(crate) const ORDER_BOOK: Endpoint = Endpoint {
    path: "/V2/OrderBook",
    request_code: "5POrdBkV2",
    requires_auth: true,
};

pub(crate) const HOLDINGS: Endpoint = Endpoint {
    path: "/V2/Holding",
    request_code: "5PHoldingV2",
    requires_auth: true,
};

pub(crate) const POSITIONS: Endpoint = Endpoint {
    path: "/V1/NetPositionNetWise",
    request_code: "5PNPNWV1",
    requires_auth: true,
};

pub(crate) const ORDER_REQUEST: Endpoint = Endpoint {
    path: "/V1/OrderRequest",
    request_code: "5POrdReq",
    requires_auth: true,
};

pub(crate) const ORDER_STATUS: Endpoint = Endpoint {
    path: "/OrderStatus",
    request_code: "5POrdStatus",
    requires_auth: true,
};

pub(crate) const TRADE_INFO: Endpoint = Endpoint {
    path: "/TradeInformation",
    request_code: "5PTrdInfo",
    requires_auth: true,
};

pub(crate) const TRADE_BOOK: Endpoint = Endpoint {
    path: "/V1/TradeBook",
    request_code: "5PTrdBkV1",
    requires_auth: true,
};

pub(crate) const MARKET_FEED: Endpoint = Endpoint {
    path: "/MarketFeed",
    request_code: "5PMF",
    requires_auth: true,
};

pub(crate) const MARKET_FEED_BY_SCRIP: Endpoint = Endpoint {
    path: "/V1/MarketFeed",
    request_code: "5PMFV1",
    requires_auth: true,
};

pub(crate) const MARKET_DEPTH: Endpoint = Endpoint {
    path: "/V1/MarketDepth",
    request_code: "5PMD",
    requires_auth: true,
};

pub(crate) const BOCO_ORDER: Endpoint = Endpoint {
    path: "/V1/SMOOrderRequest",
    request_code: "5PSMOOrd",
    requires_auth: true,
};

pub(crate) const IDEAS: Endpoint = Endpoint {
    path: "/V1/TraderIDEAs",
    request_code: "5PTrdIdeas",
    requires_auth: true,
};
