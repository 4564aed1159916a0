// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use crate::engines::traits::{EngineError, ImageClient};
use async_trait::async_trait;
use bytes::Bytes;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// 图片下载引擎
///
/// 基于reqwest实现，所有请求共享一个客户端
pub struct ReqwestImageClient {
    client: reqwest::Client,
}

impl ReqwestImageClient {
    pub fn new(settings: &HttpSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageClient for ReqwestImageClient {
    /// 执行一次GET请求
    ///
    /// # 返回值
    ///
    /// * `Ok(Bytes)` - 完整响应体
    /// * `Err(EngineError)` - 网络错误或非成功状态码
    async fn get(&self, url: &Url) -> Result<Bytes, EngineError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let payload = response.bytes().await?;

        debug!(
            "Fetched {} ({} bytes in {} ms)",
            url,
            payload.len(),
            start.elapsed().as_millis()
        );
        Ok(payload)
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
