// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP client for the WooCommerce and WordPress.com REST APIs.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use wc_core::api::{
    ConnectionTokenDto, CouponDto, CouponReportDto, MostPopularDto, OrderNoteDto,
    UpdateCouponRequest,
};
use wc_core::{CouponRemote, ErrorCategory, RemoteError, RemoteFuture, RemoteResult, Site};

use crate::endpoints::{Endpoint, Endpoints, DEFAULT_API_ROOT, DEFAULT_REST_ROOT};
use crate::errors::{decode_error, status_error, transport_error};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`WooClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_root: String,
    pub rest_root: String,
    /// OAuth bearer token; requests go out unauthenticated without one.
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_root: DEFAULT_API_ROOT.to_string(),
            rest_root: DEFAULT_REST_ROOT.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// REST client implementing [`CouponRemote`] plus the auxiliary endpoints.
pub struct WooClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    token: Option<String>,
}

impl WooClient {
    pub fn new(config: ClientConfig) -> RemoteResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("wcsync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                RemoteError::new(
                    ErrorCategory::Generic,
                    format!("failed to create HTTP client: {e}"),
                )
            })?;

        Ok(WooClient {
            http,
            endpoints: Endpoints::new(&config.api_root, &config.rest_root),
            token: config.token,
        })
    }

    /// Notes attached to an order.
    pub async fn fetch_order_notes(
        &self,
        site: Site,
        order_id: i64,
    ) -> RemoteResult<Vec<OrderNoteDto>> {
        self.send(self.endpoints.order_notes(site.site_id, order_id), None)
            .await
    }

    /// A card reader connection token.
    pub async fn fetch_connection_token(&self, site: Site) -> RemoteResult<ConnectionTokenDto> {
        self.send(self.endpoints.connection_token(site.site_id), None)
            .await
    }

    /// The "most popular day and hour" insight.
    pub async fn fetch_most_popular(&self, site: Site) -> RemoteResult<MostPopularDto> {
        self.send(self.endpoints.most_popular_insights(site.site_id), None)
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: Option<serde_json::Value>,
    ) -> RemoteResult<T> {
        debug!(method = %endpoint.method, url = %endpoint.url, "sending request");

        let mut request = self
            .http
            .request(endpoint.method.clone(), &endpoint.url)
            .query(&endpoint.query);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            let err = transport_error(&e);
            warn!(url = %endpoint.url, error = %err, "request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            // The body only refines the message
            let text = response.text().await.unwrap_or_default();
            let err = status_error(status.as_u16(), &text);
            warn!(url = %endpoint.url, status = status.as_u16(), error = %err, "request rejected");
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(|e| transport_error(&e))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            let err = decode_error(&e);
            warn!(url = %endpoint.url, error = %err, "unexpected response");
            err
        })
    }
}

fn request_body(request: &UpdateCouponRequest) -> RemoteResult<serde_json::Value> {
    serde_json::to_value(request).map_err(|e| {
        RemoteError::invalid_param(format!("coupon request cannot be encoded: {e}"))
    })
}

impl CouponRemote for WooClient {
    fn fetch_coupons(
        &self,
        site: Site,
        page: u32,
        page_size: u32,
        search: Option<String>,
    ) -> RemoteFuture<'_, Vec<CouponDto>> {
        Box::pin(async move {
            let endpoint =
                self.endpoints
                    .list_coupons(site.site_id, page, page_size, search.as_deref());
            self.send(endpoint, None).await
        })
    }

    fn fetch_coupon(&self, site: Site, coupon_id: i64) -> RemoteFuture<'_, CouponDto> {
        Box::pin(async move {
            self.send(self.endpoints.get_coupon(site.site_id, coupon_id), None)
                .await
        })
    }

    fn create_coupon(
        &self,
        site: Site,
        request: UpdateCouponRequest,
    ) -> RemoteFuture<'_, CouponDto> {
        Box::pin(async move {
            let body = request_body(&request)?;
            self.send(self.endpoints.create_coupon(site.site_id), Some(body))
                .await
        })
    }

    fn update_coupon(
        &self,
        site: Site,
        coupon_id: i64,
        request: UpdateCouponRequest,
    ) -> RemoteFuture<'_, CouponDto> {
        Box::pin(async move {
            let body = request_body(&request)?;
            self.send(
                self.endpoints.update_coupon(site.site_id, coupon_id),
                Some(body),
            )
            .await
        })
    }

    fn delete_coupon(&self, site: Site, coupon_id: i64, trash: bool) -> RemoteFuture<'_, ()> {
        Box::pin(async move {
            let _: serde_json::Value = self
                .send(
                    self.endpoints.delete_coupon(site.site_id, coupon_id, trash),
                    None,
                )
                .await?;
            Ok(())
        })
    }

    fn fetch_coupon_report(
        &self,
        site: Site,
        coupon_id: i64,
        since: DateTime<Utc>,
    ) -> RemoteFuture<'_, CouponReportDto> {
        Box::pin(async move {
            let rows: Vec<CouponReportDto> = self
                .send(
                    self.endpoints.coupon_report(site.site_id, coupon_id, since),
                    None,
                )
                .await?;
            // No orders used the coupon yet
            Ok(rows.into_iter().next().unwrap_or(CouponReportDto {
                coupon_id: Some(coupon_id),
                amount: Some(0.0),
                orders_count: Some(0),
            }))
        })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
