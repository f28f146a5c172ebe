// src/api/mod.rs

//! Typed REST client for the events and stores resources.
//!
//! Each resource exposes the same three reads: the full collection, one
//! record by id, and the featured subset. Every call is a single request;
//! a transport failure or non-2xx status fails with [`AppError::Fetch`]
//! carrying a fixed per-operation message.

pub mod transport;
pub mod utility;

#[cfg(test)]
pub(crate) mod testing;

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, Event, Store};
use crate::utils::{encode_segment, endpoint_url};

pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
pub use utility::UtilityClient;

/// A record type served as a REST collection.
pub trait Resource: DeserializeOwned + Send {
    /// Collection path segment, also the plural used in error messages.
    const COLLECTION: &'static str;
    /// Singular noun used in error messages.
    const SINGULAR: &'static str;
}

impl Resource for Event {
    const COLLECTION: &'static str = "events";
    const SINGULAR: &'static str = "event";
}

impl Resource for Store {
    const COLLECTION: &'static str = "stores";
    const SINGULAR: &'static str = "store";
}

/// Client for the REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl ApiClient<HttpTransport> {
    /// Create a client using a `reqwest` transport built from configuration.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Ok(Self::new(
            HttpTransport::from_config(config)?,
            config.base_url.clone(),
        ))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reads on the `events` resource.
    pub fn events(&self) -> ResourceApi<'_, Event, T> {
        ResourceApi::new(self)
    }

    /// Reads on the `stores` resource.
    pub fn stores(&self) -> ResourceApi<'_, Store, T> {
        ResourceApi::new(self)
    }

    /// Reads on any resource type.
    pub fn resource<R: Resource>(&self) -> ResourceApi<'_, R, T> {
        ResourceApi::new(self)
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    async fn get_json<D: DeserializeOwned>(&self, path: &str, failure: &str) -> Result<D> {
        let url = endpoint_url(&self.base_url, path)?;
        log::debug!("GET {}", url);

        let response = self
            .transport
            .send(ApiRequest::get(url))
            .await
            .map_err(|e| {
                log::warn!("{} ({}): {}", failure, path, e);
                AppError::fetch_failed(failure, e)
            })?;

        if !response.is_success() {
            log::warn!("{} ({}): HTTP {}", failure, path, response.status);
            return Err(AppError::fetch(failure, response.status));
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Reads on one resource collection.
pub struct ResourceApi<'a, R, T> {
    client: &'a ApiClient<T>,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource, T: Transport> ResourceApi<'a, R, T> {
    fn new(client: &'a ApiClient<T>) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// Fetch the full collection, in server order.
    pub async fn get_all(&self) -> Result<Vec<R>> {
        let failure = format!("Failed to fetch {}", R::COLLECTION);
        self.client.get_json(R::COLLECTION, &failure).await
    }

    /// Fetch one record by id.
    ///
    /// A missing record is reported like any other non-2xx response; inspect
    /// [`AppError::status`] to tell a 404 apart.
    pub async fn get_by_id(&self, id: &str) -> Result<R> {
        let path = format!("{}/{}", R::COLLECTION, encode_segment(id));
        let failure = format!("Failed to fetch {}", R::SINGULAR);
        self.client.get_json(&path, &failure).await
    }

    /// Fetch the records the server flags as featured. No local filtering is applied.
    pub async fn get_featured(&self) -> Result<Vec<R>> {
        let path = format!("{}/featured", R::COLLECTION);
        let failure = format!("Failed to fetch featured {}", R::COLLECTION);
        self.client.get_json(&path, &failure).await
    }
}
