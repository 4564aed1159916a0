// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use bytes::Bytes;
use sprite_scraper::engines::traits::{EngineError, ImageClient};
use std::collections::HashSet;
use std::sync::Mutex;
use url::Url;

/// Serves the URL path as the payload; configured URLs fail.
#[derive(Default)]
pub struct FakeImageClient {
    failing: HashSet<String>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeImageClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageClient for FakeImageClient {
    async fn get(&self, url: &Url) -> Result<Bytes, EngineError> {
        self.requested.lock().unwrap().push(url.to_string());
        if self.failing.contains(url.as_str()) {
            let err = reqwest::Client::new().get("not a url").build().unwrap_err();
            return Err(EngineError::RequestFailed(err));
        }
        Ok(Bytes::from(url.path().to_string()))
    }
}
