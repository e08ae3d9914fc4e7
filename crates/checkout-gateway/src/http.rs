//! HTTP client for the coupon-lookup service.
//!
//! ## Contract
//! ```text
//! GET {base_url}/{code}
//!
//! 200 {"tipo": "percentual", "desconto": 10}   → coupon found
//! 200 {"mensagem": "Código do cupom inválido"} → coupon not found
//! anything else (non-2xx, bad JSON, timeout)   → LookupError
//! ```
//!
//! The body shape decides found vs. not found; the status code only decides
//! success vs. failure. The code is interpolated into the path as-is, without
//! percent-encoding.

use async_trait::async_trait;
use checkout_core::{CouponGateway, CouponResponse, LookupError};
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::error::GatewayResult;

/// [`CouponGateway`] backed by the coupon-lookup HTTP service.
///
/// One request per lookup. The configured timeout bounds the whole request.
#[derive(Debug, Clone)]
pub struct HttpCouponGateway {
    base_url: String,
    http: Client,
}

impl HttpCouponGateway {
    /// Creates a gateway from a validated configuration.
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        config.validate()?;

        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(HttpCouponGateway {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Returns the URL requested for `code`.
    pub fn lookup_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Fetches and decodes the coupon payload for `code`.
    pub async fn fetch(&self, code: &str) -> GatewayResult<CouponResponse> {
        let url = self.lookup_url(code);
        debug!(%url, "Looking up coupon");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: CouponResponse = response.json().await?;

        debug!(
            code,
            kind = body.kind.as_deref(),
            not_found = body.message.is_some(),
            "Coupon service answered"
        );
        Ok(body)
    }
}

#[async_trait]
impl CouponGateway for HttpCouponGateway {
    async fn lookup(&self, code: &str) -> Result<CouponResponse, LookupError> {
        self.fetch(code).await.map_err(|err| {
            warn!(code, error = %err, transient = err.is_transient(), "Coupon lookup failed");
            LookupError::from(err)
        })
    }
}
