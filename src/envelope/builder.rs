//! Per-call envelope construction.
//!
//! The builder overlays three things onto a family's template: the app
//! credentials (head), the session snapshot (client code), and the
//! call-specific fields. Every call produces an independent
//! [`Envelope`] value — nothing is shared between calls, and the phase
//! precondition is enforced here so an unauthenticated business request is
//! rejected before any network traffic happens.

use std::sync::Arc;

use crate::auth::{cipher, Credentials, SessionSnapshot};
use crate::models::{BocoTicket, ClientCode, OrderFor, OrderModification, OrderRef, OrderTicket};
use crate::{Error, Result};

use super::body::{
    AccessTokenBody, BocoBody, Envelope, GenericBody, IdeasBody, LoginBody, MarketDepthBody,
    MarketFeedBody, OrderBody, OrderStatusBody, RequestHead, TotpBody, TradeInfoBody,
};
use super::endpoints::Endpoint;

pub(crate) struct EnvelopeBuilder {
    credentials: Arc<Credentials>,
}

impl EnvelopeBuilder {
    pub(crate) fn new(credentials: Arc<Credentials>) -> Self {
        Self { credentials }
    }

    fn head(&self, endpoint: &Endpoint) -> RequestHead {
        RequestHead {
            app_name: self.credentials.app_name().to_string(),
            app_ver: "1.0",
            key: self.credentials.user_key().to_string(),
            os_name: "WEB",
            request_code: endpoint.request_code,
            user_id: self.credentials.user_id().to_string(),
            password: self.credentials.password().to_string(),
        }
    }

    /// The client code a business envelope must carry. Rejects with a
    /// precondition failure when the session phase does not allow business
    /// calls or the client code is not yet known.
    pub(crate) fn business_client_code(&self, snapshot: &SessionSnapshot) -> Result<ClientCode> {
        if !snapshot.phase.allows_business_calls() {
            return Err(Error::precondition(format!(
                "business call attempted in phase {:?}; authenticate first",
                snapshot.phase
            )));
        }
        snapshot
            .client_code
            .clone()
            .ok_or_else(|| Error::precondition("client code is not known yet"))
    }

    /// Login envelope. All three credential fields travel encrypted.
    pub(crate) fn login(
        &self,
        endpoint: &Endpoint,
        email: &str,
        password: &str,
        dob: &str,
    ) -> Result<Envelope<LoginBody>> {
        let key = self.credentials.encryption_key();
        let body = LoginBody {
            email_id: cipher::encrypt(key, email)?,
            password: cipher::encrypt(key, password)?,
            my2pin: cipher::encrypt(key, dob)?,
            ..LoginBody::default()
        };
        Ok(Envelope {
            head: self.head(endpoint),
            body,
        })
    }

    pub(crate) fn totp_login(
        &self,
        endpoint: &Endpoint,
        login_id: &str,
        totp: &str,
        pin: &str,
    ) -> Envelope<TotpBody> {
        Envelope {
            head: self.head(endpoint),
            body: TotpBody {
                login_id: login_id.to_string(),
                totp: totp.to_string(),
                pin: pin.to_string(),
            },
        }
    }

    pub(crate) fn access_token(
        &self,
        endpoint: &Endpoint,
        request_token: &str,
    ) -> Envelope<AccessTokenBody> {
        Envelope {
            head: self.head(endpoint),
            body: AccessTokenBody {
                request_token: request_token.to_string(),
                encry_key: self.credentials.encryption_key().to_string(),
                user_id: self.credentials.user_id().to_string(),
            },
        }
    }

    /// Envelope for the client-code-only list endpoints.
    pub(crate) fn generic(
        &self,
        endpoint: &Endpoint,
        snapshot: &SessionSnapshot,
    ) -> Result<Envelope<GenericBody>> {
        let client_code = self.business_client_code(snapshot)?;
        Ok(Envelope {
            head: self.head(endpoint),
            body: GenericBody { client_code },
        })
    }

    /// Order placement envelope. After-hours orders cannot execute at
    /// market, so `AHPlaced == "Y"` forces `AtMarket` off regardless of the
    /// ticket.
    pub(crate) fn place_order(
        &self,
        endpoint: &Endpoint,
        snapshot: &SessionSnapshot,
        ticket: &OrderTicket,
    ) -> Result<Envelope<OrderBody>> {
        let client_code = self.business_client_code(snapshot)?;
        let at_market = if ticket.after_hours.is_after_hours() {
            false
        } else {
            ticket.at_market
        };
        let body = OrderBody {
            order_for: OrderFor::Place,
            client_code: client_code.clone(),
            order_requester_code: client_code,
            app_source: self.credentials.app_source().to_string(),
            order_type: Some(ticket.side),
            exchange: ticket.exchange,
            exchange_type: ticket.segment,
            scrip_code: Some(ticket.scrip_code),
            qty: ticket.qty,
            price: ticket.price,
            at_market,
            is_stop_loss_order: ticket.is_stop_loss,
            stop_loss_price: ticket.stop_loss_price,
            is_vtd: ticket.is_vtd,
            ioc_order: ticket.ioc,
            is_intraday: ticket.is_intraday,
            ah_placed: ticket.after_hours,
            dis_qty: ticket.disclosed_qty.unwrap_or(ticket.qty),
            traded_qty: 0,
            remote_order_id: ticket.remote_order_id.as_ref().map(|id| id.as_str().to_string()),
            order_validity: ticket.validity,
            ..OrderBody::default()
        };
        Ok(Envelope {
            head: self.head(endpoint),
            body,
        })
    }

    /// Order modification envelope. Untouched fields keep the template
    /// defaults; the server applies only what is sent.
    pub(crate) fn modify_order(
        &self,
        endpoint: &Endpoint,
        snapshot: &SessionSnapshot,
        modification: &OrderModification,
    ) -> Result<Envelope<OrderBody>> {
        let client_code = self.business_client_code(snapshot)?;
        let mut body = OrderBody {
            order_for: OrderFor::Modify,
            client_code: client_code.clone(),
            order_requester_code: client_code,
            app_source: self.credentials.app_source().to_string(),
            exchange: modification.exchange,
            exchange_type: modification.segment,
            scrip_code: modification.scrip_code,
            traded_qty: modification.traded_qty,
            exch_order_id: modification.exchange_order_id.as_str().to_string(),
            ..OrderBody::default()
        };
        if let Some(qty) = modification.qty {
            body.qty = qty;
            body.dis_qty = qty;
        }
        if let Some(price) = modification.price {
            body.price = price;
            body.at_market = false;
        }
        if let Some(intraday) = modification.is_intraday {
            body.is_intraday = intraday;
        }
        Ok(Envelope {
            head: self.head(endpoint),
            body,
        })
    }

    /// Order cancellation envelope.
    pub(crate) fn cancel_order(
        &self,
        endpoint: &Endpoint,
        snapshot: &SessionSnapshot,
        exchange_order_id: &str,
        traded_qty: u32,
    ) -> Result<Envelope<OrderBody>> {
        let client_code = self.business_client_code(snapshot)?;
        Ok(Envelope {
            head: self.head(endpoint),
            body: OrderBody {
                order_for: OrderFor::Cancel,
                client_code: client_code.clone(),
                order_requester_code: client_code,
                app_source: self.credentials.app_source().to_string(),
                traded_qty,
                exch_order_id: exchange_order_id.to_string(),
                ..OrderBody::default()
            },
        })
    }

    /// Bracket/cover order envelope.
    pub(crate) fn boco_order(
        &self,
        endpoint: &Endpoint,
        snapshot: &SessionSnapshot,
        ticket: &BocoTicket,
    ) -> Result<Envelope<BocoBody>> {
        let client_code = self.business_client_code(snapshot)?;
        Ok(Envelope {
            head: self.head(endpoint),
            body: BocoBody {
                client_code: client_code.clone(),
                order_requester_code: client_code,
                app_source: self.credentials.app_source().to_string(),
                buy_sell: ticket.side,
                exchange: ticket.exchange,
                exchange_type: ticket.segment,
                request_type: ticket.request_type,
                scrip_code: ticket.scrip_code,
                qty: ticket.qty,
                limit_price_initial: ticket.limit_price_initial,
                trigger_price_initial: ticket.trigger_price_initial,
                limit_price_profit: ticket.limit_price_profit,
                trigger_price_sl: ticket.trigger_price_sl,
                trailing_sl: ticket.trailing_sl,
                stop_loss: ticket.stop_loss,
                at_market: ticket.at_market,
                dis_qty: ticket.disclosed_qty.unwrap_or(ticket.qty),
                traded_qty: ticket.traded_qty,
                exch_order_id: ticket
                    .exchange_order_id
                    .as_ref()
                    .map(|id| id.as_str().to_string())
                    .unwrap_or_default(),
                ..BocoBody::default()
            },
        })
    }

    pub(crate) fn order_status(
        &self,
        endpoint: &Endpoint,
        snapshot: &SessionSnapshot,
        orders: Vec<OrderRef>,
    ) -> Result<Envelope<OrderStatusBody>> {
        let client_code = self.business_client_code(snapshot)?;
        Ok(Envelope {
            head: self.head(endpoint),
            body: OrderStatusBody {
                client_code,
                orders,
            },
        })
    }

    pub(crate) fn trade_info(
        &self,
        endpoint: &Endpoint,
        snapshot: &SessionSnapshot,
        trades: Vec<OrderRef>,
    ) -> Result<Envelope<TradeInfoBody>> {
        let client_code = self.business_client_code(snapshot)?;
        Ok(Envelope {
            head: self.head(endpoint),
            body: TradeInfoBody {
                client_code,
                trades,
            },
        })
    }

    pub(crate) fn market_feed(
        &self,
        endpoint: &Endpoint,
        snapshot: &SessionSnapshot,
        scrips: Vec<serde_json::Value>,
    ) -> Result<Envelope<MarketFeedBody>> {
        let client_code = self.business_client_code(snapshot)?;
        Ok(Envelope {
            head: self.head(endpoint),
            body: MarketFeedBody::new(client_code, scrips),
        })
    }

    pub(crate) fn market_depth(
        &self,
        endpoint: &Endpoint,
        snapshot: &SessionSnapshot,
        scrips: Vec<serde_json::Value>,
    ) -> Result<Envelope<MarketDepthBody>> {
        let client_code = self.business_client_code(snapshot)?;
        Ok(Envelope {
            head: self.head(endpoint),
            body: MarketDepthBody {
                client_code,
                data: scrips,
            },
        })
    }

    pub(crate) fn ideas(
        &self,
        endpoint: &Endpoint,
        snapshot: &SessionSnapshot,
        request_type: &'static str,
    ) -> Result<Envelope<IdeasBody>> {
        let client_code = self.business_client_code(snapshot)?;
        Ok(Envelope {
            head: self.head(endpoint),
            body: IdeasBody {
                client_code,
                request_type,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionPhase;
    use crate::envelope::endpoints;
    use crate::models::{AfterHours, OrderSide};
    use rust_decimal_macros::dec;

    fn builder() -> EnvelopeBuilder {
        EnvelopeBuilder::new(Arc::new(Credentials::new(
            "app", "5300", "uid", "app-pass", "ukey", "enc-key",
        )))
    }

    fn authenticated_snapshot() -> SessionSnapshot {
        SessionSnapshot {
            phase: SessionPhase::Authenticated,
            client_code: Some(ClientCode::new("C1")),
        }
    }

    fn ticket() -> OrderTicket {
        OrderTicket::builder()
            .side(OrderSide::Buy)
            .scrip_code(1660)
            .qty(10)
            .build()
            .unwrap()
    }

    #[test]
    fn test_head_carries_credentials_and_request_code() {
        let envelope = builder()
            .generic(&endpoints::HOLDINGS, &authenticated_snapshot())
            .unwrap();
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["head"]["appName"], "app");
        assert_eq!(json["head"]["key"], "ukey");
        assert_eq!(json["head"]["requestCode"], "5PHoldingV2");
        assert_eq!(json["head"]["osName"], "WEB");
        assert_eq!(json["body"]["ClientCode"], "C1");
    }

    #[test]
    fn test_unauthenticated_business_call_is_precondition_error() {
        let snapshot = SessionSnapshot {
            phase: SessionPhase::Unauthenticated,
            client_code: Some(ClientCode::new("C1")),
        };
        let err = builder().generic(&endpoints::HOLDINGS, &snapshot);
        assert!(matches!(err, Err(Error::Precondition(_))));
    }

    #[test]
    fn test_failed_session_is_precondition_error() {
        let snapshot = SessionSnapshot {
            phase: SessionPhase::Failed,
            client_code: Some(ClientCode::new("C1")),
        };
        let err = builder().place_order(&endpoints::ORDER_REQUEST, &snapshot, &ticket());
        assert!(matches!(err, Err(Error::Precondition(_))));
    }

    #[test]
    fn test_missing_client_code_is_precondition_error() {
        let snapshot = SessionSnapshot {
            phase: SessionPhase::AccessTokenObtained,
            client_code: None,
        };
        let err = builder().generic(&endpoints::MARGIN, &snapshot);
        assert!(matches!(err, Err(Error::Precondition(_))));
    }

    #[test]
    fn test_envelopes_are_isolated() {
        let envelope_builder = builder();
        let snapshot = authenticated_snapshot();

        let first = envelope_builder
            .place_order(&endpoints::ORDER_REQUEST, &snapshot, &ticket())
            .unwrap();
        let before = serde_json::to_value(&first).unwrap();

        // Building a second envelope with different fields must not reach
        // back into the first.
        let other_ticket = OrderTicket::builder()
            .side(OrderSide::Sell)
            .scrip_code(2885)
            .qty(99)
            .price(dec!(2450))
            .build()
            .unwrap();
        let _second = envelope_builder
            .place_order(&endpoints::ORDER_REQUEST, &snapshot, &other_ticket)
            .unwrap();

        let after = serde_json::to_value(&first).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_after_hours_forces_limit_order() {
        let ah_ticket = OrderTicket::builder()
            .side(OrderSide::Buy)
            .scrip_code(1660)
            .qty(10)
            .at_market(true)
            .after_hours(AfterHours::Yes)
            .build()
            .unwrap();
        let envelope = builder()
            .place_order(&endpoints::ORDER_REQUEST, &authenticated_snapshot(), &ah_ticket)
            .unwrap();
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["body"]["AHPlaced"], "Y");
        assert_eq!(json["body"]["AtMarket"], false);
    }

    #[test]
    fn test_disclosed_qty_defaults_to_order_qty() {
        let envelope = builder()
            .place_order(&endpoints::ORDER_REQUEST, &authenticated_snapshot(), &ticket())
            .unwrap();
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["body"]["Qty"], 10);
        assert_eq!(json["body"]["DisQty"], 10);
    }

    #[test]
    fn test_login_fields_are_encrypted() {
        let envelope = builder()
            .login(&endpoints::LOGIN, "user@example.com", "pw", "19900101")
            .unwrap();
        let json = serde_json::to_value(&envelope).unwrap();
        let email = json["body"]["Email_id"].as_str().unwrap();
        assert_ne!(email, "user@example.com");
        assert_eq!(
            email,
            cipher::encrypt("enc-key", "user@example.com").unwrap()
        );
        assert_eq!(json["body"]["MachineID"], "039377");
    }

    #[test]
    fn test_access_token_envelope_carries_key_and_user() {
        let envelope = builder().access_token(&endpoints::ACCESS_TOKEN, "RT1");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["body"]["RequestToken"], "RT1");
        assert_eq!(json["body"]["EncryKey"], "enc-key");
        assert_eq!(json["body"]["UserId"], "uid");
        assert_eq!(json["head"]["requestCode"], "5PGetAccessToken");
    }
}
