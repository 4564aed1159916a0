// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::BrowserSettings;
use crate::engines::traits::{BrowserSession, EngineError, PageElement};
use async_trait::async_trait;
use chromiumoxide::element::Element;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use url::Url;

/// Chromium浏览器会话
///
/// 基于chromiumoxide实现，整个运行期间复用同一个标签页。
/// 运行结束时必须调用 [`ChromiumSession::close`] 释放浏览器。
pub struct ChromiumSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    remote: bool,
}

impl ChromiumSession {
    /// 启动本地Chromium，或连接到远程调试地址
    ///
    /// 远程地址优先取配置，其次取 `CHROMIUM_REMOTE_DEBUGGING_URL` 环境变量
    pub async fn launch(settings: &BrowserSettings) -> Result<Self, EngineError> {
        let remote_debugging_url = settings
            .remote_debugging_url
            .clone()
            .or_else(|| std::env::var("CHROMIUM_REMOTE_DEBUGGING_URL").ok());

        let (browser, mut handler) = if let Some(ref url) = remote_debugging_url {
            info!("Connecting to remote Chrome instance at: {}", url);
            Browser::connect(url).await.map_err(|e| {
                EngineError::Browser(format!("Failed to connect to remote Chrome: {}", e))
            })?
        } else {
            let mut builder = BrowserConfig::builder()
                .no_sandbox()
                .request_timeout(Duration::from_secs(settings.request_timeout_secs));

            if !settings.headless {
                builder = builder.with_head();
            }

            builder = builder.arg("--disable-gpu").arg("--disable-dev-shm-usage");

            let config = builder.build().map_err(EngineError::Browser)?;
            Browser::launch(config)
                .await
                .map_err(|e| EngineError::Browser(format!("Failed to launch Chrome: {}", e)))?
        };

        // Spawn a handler to process browser events
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler event error: {}", e);
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;

        Ok(Self {
            browser,
            page,
            handler_task,
            remote: remote_debugging_url.is_some(),
        })
    }

    /// 释放浏览器会话
    ///
    /// 本地启动的浏览器会被关闭；远程浏览器只关闭本会话打开的标签页
    pub async fn close(mut self) -> Result<(), EngineError> {
        let result = if self.remote {
            self.page
                .close()
                .await
                .map_err(|e| EngineError::Browser(e.to_string()))
        } else {
            let closed = self
                .browser
                .close()
                .await
                .map(|_| ())
                .map_err(|e| EngineError::Browser(e.to_string()));
            if let Err(e) = self.browser.wait().await {
                debug!("Waiting for browser exit failed: {}", e);
            }
            closed
        };

        self.handler_task.abort();
        info!("Browser session released");
        result
    }
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    type Element = ChromiumElement;

    async fn navigate(&mut self, url: &Url) -> Result<(), EngineError> {
        debug!("Navigating to {}", url);
        self.page
            .goto(url.as_str())
            .await
            .map_err(|e| EngineError::Browser(format!("Navigation to {} failed: {}", url, e)))?;
        Ok(())
    }

    async fn find_elements(&mut self, selector: &str) -> Result<Vec<ChromiumElement>, EngineError> {
        let elements = self.page.find_elements(selector).await.map_err(|e| {
            EngineError::Browser(format!("Element lookup for '{}' failed: {}", selector, e))
        })?;
        Ok(elements.into_iter().map(ChromiumElement).collect())
    }
}

/// Chromium页面元素
pub struct ChromiumElement(Element);

#[async_trait]
impl PageElement for ChromiumElement {
    async fn attribute(&self, name: &str) -> Result<Option<String>, EngineError> {
        self.0
            .attribute(name)
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))
    }
}
