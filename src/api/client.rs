use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::api::endpoints::Endpoint;
use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::model::{Category, Course, Page};

/// Query parameters accepted by the courses endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseQuery {
    pub q: Option<String>,
    pub category_id: Option<i64>,
    pub page: Option<u32>,
}

impl CourseQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(ref q) = self.q {
            params.push(("q", q.clone()));
        }
        if let Some(id) = self.category_id {
            params.push(("category_id", id.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        params
    }
}

/// Thin wrapper over a shared `reqwest::Client`, bound to one API base.
/// Cloning is cheap; background tasks each take their own handle.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = parse_base(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| ApiError::Init { source })?;

        Ok(Self { http, base })
    }

    /// The categories endpoint returns a bare JSON array.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(Endpoint::Categories, &[]).await
    }

    /// The courses endpoint wraps its collection in a pagination envelope;
    /// the rows live under `results`.
    pub async fn courses(&self, query: &CourseQuery) -> Result<Page<Course>, ApiError> {
        self.get_json(Endpoint::Courses, &query.params()).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let name = endpoint.name();
        let mut url = endpoint.url(&self.base).map_err(|source| ApiError::BaseUrl {
            url: self.base.to_string(),
            source,
        })?;
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }

        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                endpoint: name,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                endpoint: name,
                status,
            });
        }

        // Read the body first so transport and decode failures stay distinct.
        let body = response.text().await.map_err(|source| ApiError::Network {
            endpoint: name,
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            endpoint: name,
            source,
        })
    }
}

fn parse_base(raw: &str) -> Result<Url, ApiError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized).map_err(|source| ApiError::BaseUrl {
        url: raw.to_string(),
        source,
    })
}
