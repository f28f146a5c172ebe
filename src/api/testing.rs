//! In-memory transport and fixtures for client tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::error::{AppError, Result};

/// Serves canned responses keyed by URL path; unknown paths answer 404.
#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, ApiResponse>,
    unreachable: bool,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport on which every request fails before a response arrives.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .insert(path.to_string(), ApiResponse::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let path = request.url.path().to_string();
        self.requests.lock().unwrap().push(request);

        if self.unreachable {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }

        Ok(self
            .responses
            .get(&path)
            .cloned()
            .unwrap_or_else(|| ApiResponse::new(404, "Not Found")))
    }
}

pub fn sample_events_json() -> &'static str {
    r#"[
        {
            "id": "1",
            "title": "Lakewood Garage Sale",
            "description": "Furniture, toys and tools",
            "location": "Lakewood, Dallas",
            "date": "2025-06-07T13:00:00Z",
            "price": "Free",
            "category": "garage-sale",
            "featured": true
        },
        {
            "id": "2",
            "title": "Traders Village Flea Market",
            "description": "Hundreds of vendors",
            "location": "Grand Prairie",
            "date": "2025-06-08T15:00:00Z",
            "imageUrl": "https://img.example.com/tv.jpg",
            "category": "flea-market"
        }
    ]"#
}

pub fn sample_stores_json() -> &'static str {
    r#"[
        {
            "id": "s1",
            "name": "Second Chance Thrift",
            "description": "Clothing and housewares",
            "address": "100 Main St",
            "city": "Dallas",
            "state": "TX",
            "zipCode": "75201",
            "phone": "214-555-0100",
            "hours": {"monday": {"open": "09:00", "close": "18:00"}},
            "categories": ["clothing", "housewares"],
            "images": ["front.jpg"],
            "featured": true
        }
    ]"#
}
