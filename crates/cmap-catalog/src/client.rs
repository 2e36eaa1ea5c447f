//! HTTP client for the course and field catalogs.

use std::future::Future;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::wire::{CourseRecord, FieldAssociation, course_catalog, group_fields};

/// User agent string for catalog requests.
const USER_AGENT_VALUE: &str = concat!("course-map/", env!("CARGO_PKG_VERSION"));

/// Where the catalog endpoints live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Server root, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Path of the course search endpoint.
    pub courses_path: String,
    /// Path of the course-to-field association endpoint.
    pub fields_path: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            courses_path: "/search".to_string(),
            fields_path: "/fields".to_string(),
        }
    }
}

impl Endpoints {
    /// Full URL of the course endpoint.
    pub fn courses_url(&self) -> String {
        join_url(&self.base_url, &self.courses_path)
    }

    /// Full URL of the fields endpoint.
    pub fn fields_url(&self) -> String {
        join_url(&self.base_url, &self.fields_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Anything that can supply the two fetched catalogs.
///
/// Implemented by [`CatalogClient`]; tests and embedders provide their own.
pub trait CatalogSource: Send + Sync + 'static {
    /// Fetch the course catalog.
    fn fetch_courses(&self) -> impl Future<Output = Result<Catalog>> + Send;

    /// Fetch the field-of-study catalog.
    fn fetch_fields(&self) -> impl Future<Output = Result<Catalog>> + Send;
}

/// Catalog client backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl CatalogClient {
    /// Creates a client for the given endpoints.
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        if !(endpoints.base_url.starts_with("http://") || endpoints.base_url.starts_with("https://"))
        {
            return Err(CatalogError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                endpoints.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| CatalogError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET `url` and return the body of a successful response.
    async fn get_body(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching catalog from {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_courses(&self) -> Result<Catalog> {
        let body = self.get_body(&self.endpoints.courses_url()).await?;
        parse_courses(&body)
    }

    async fn fetch_fields(&self) -> Result<Catalog> {
        let body = self.get_body(&self.endpoints.fields_url()).await?;
        parse_fields(&body)
    }
}

/// Decode the course endpoint's JSON array.
pub fn parse_courses(body: &str) -> Result<Catalog> {
    let records: Vec<CourseRecord> = serde_json::from_str(body)?;
    Ok(course_catalog(records))
}

/// Decode the fields endpoint's JSON array and group it by department.
pub fn parse_fields(body: &str) -> Result<Catalog> {
    let associations: Vec<FieldAssociation> = serde_json::from_str(body)?;
    Ok(group_fields(associations))
}
