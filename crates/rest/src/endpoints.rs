// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! URL and query construction for every endpoint.
//!
//! WooCommerce endpoints live under `{api_root}/sites/{site_id}/wc/v3/`.
//! Stats insights use the older REST API under `rest_root`.

use chrono::{DateTime, Utc};
use reqwest::Method;

/// Default root of the WordPress.com v2 API that proxies WooCommerce.
pub const DEFAULT_API_ROOT: &str = "https://public-api.wordpress.com/wpcom/v2";

/// Default root of the WordPress.com v1.1 REST API.
pub const DEFAULT_REST_ROOT: &str = "https://public-api.wordpress.com/rest/v1.1";

/// One request target: method, absolute URL and query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub url: String,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    fn new(method: Method, url: String) -> Self {
        Endpoint {
            method,
            url,
            query: Vec::new(),
        }
    }

    fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }
}

/// Builds endpoints relative to the configured API roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_root: String,
    rest_root: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::new(DEFAULT_API_ROOT, DEFAULT_REST_ROOT)
    }
}

impl Endpoints {
    /// Trailing slashes on the roots are ignored.
    pub fn new(api_root: &str, rest_root: &str) -> Self {
        Endpoints {
            api_root: api_root.trim_end_matches('/').to_string(),
            rest_root: rest_root.trim_end_matches('/').to_string(),
        }
    }

    fn woo(&self, site_id: i64, path: &str) -> String {
        format!("{}/sites/{site_id}/wc/v3/{path}", self.api_root)
    }

    pub fn list_coupons(
        &self,
        site_id: i64,
        page: u32,
        page_size: u32,
        search: Option<&str>,
    ) -> Endpoint {
        let endpoint = Endpoint::new(Method::GET, self.woo(site_id, "coupons"))
            .param("page", page)
            .param("per_page", page_size);
        match search {
            Some(query) => endpoint.param("search", query),
            None => endpoint,
        }
    }

    pub fn get_coupon(&self, site_id: i64, coupon_id: i64) -> Endpoint {
        Endpoint::new(Method::GET, self.woo(site_id, &format!("coupons/{coupon_id}")))
    }

    pub fn create_coupon(&self, site_id: i64) -> Endpoint {
        Endpoint::new(Method::POST, self.woo(site_id, "coupons"))
    }

    pub fn update_coupon(&self, site_id: i64, coupon_id: i64) -> Endpoint {
        Endpoint::new(Method::PUT, self.woo(site_id, &format!("coupons/{coupon_id}")))
    }

    /// Trashing leaves the coupon recoverable; otherwise it is deleted for good.
    pub fn delete_coupon(&self, site_id: i64, coupon_id: i64, trash: bool) -> Endpoint {
        Endpoint::new(
            Method::DELETE,
            self.woo(site_id, &format!("coupons/{coupon_id}")),
        )
        .param("force", !trash)
    }

    pub fn coupon_report(&self, site_id: i64, coupon_id: i64, since: DateTime<Utc>) -> Endpoint {
        Endpoint::new(
            Method::GET,
            format!(
                "{}/sites/{site_id}/wc-analytics/reports/coupons",
                self.api_root
            ),
        )
        .param("coupons", coupon_id)
        .param("after", since.format("%Y-%m-%dT%H:%M:%S"))
    }

    pub fn order_notes(&self, site_id: i64, order_id: i64) -> Endpoint {
        Endpoint::new(
            Method::GET,
            self.woo(site_id, &format!("orders/{order_id}/notes")),
        )
    }

    pub fn connection_token(&self, site_id: i64) -> Endpoint {
        Endpoint::new(Method::POST, self.woo(site_id, "payments/connection_tokens"))
    }

    pub fn most_popular_insights(&self, site_id: i64) -> Endpoint {
        Endpoint::new(
            Method::GET,
            format!("{}/sites/{site_id}/stats/insights/", self.rest_root),
        )
    }
}

#[cfg(test)]
#[path = "endpoints_tests.rs"]
mod tests;
