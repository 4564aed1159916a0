// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use sprite_scraper::engines::traits::{BrowserSession, EngineError, PageElement};
use std::collections::{HashMap, HashSet};
use url::Url;

pub struct FakeElement {
    href: Option<String>,
}

#[async_trait]
impl PageElement for FakeElement {
    async fn attribute(&self, name: &str) -> Result<Option<String>, EngineError> {
        if name == "href" {
            Ok(self.href.clone())
        } else {
            Ok(None)
        }
    }
}

/// In-memory browser: each URL maps selectors to the hrefs of matching elements.
#[derive(Default)]
pub struct FakeBrowser {
    pages: HashMap<String, HashMap<String, Vec<Option<String>>>>,
    failing: HashSet<String>,
    current: Option<String>,
    pub visited: Vec<String>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, selector: &str, hrefs: &[&str]) -> Self {
        self.pages
            .entry(url.to_string())
            .or_default()
            .insert(
                selector.to_string(),
                hrefs.iter().map(|h| Some(h.to_string())).collect(),
            );
        self
    }

    pub fn with_bare_element(mut self, url: &str, selector: &str) -> Self {
        self.pages
            .entry(url.to_string())
            .or_default()
            .entry(selector.to_string())
            .or_default()
            .push(None);
        self
    }

    pub fn failing_on(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }
}

#[async_trait]
impl BrowserSession for FakeBrowser {
    type Element = FakeElement;

    async fn navigate(&mut self, url: &Url) -> Result<(), EngineError> {
        let url = url.to_string();
        self.visited.push(url.clone());
        if self.failing.contains(&url) {
            return Err(EngineError::Browser(format!("navigation to {} failed", url)));
        }
        self.current = Some(url);
        Ok(())
    }

    async fn find_elements(&mut self, selector: &str) -> Result<Vec<FakeElement>, EngineError> {
        let elements = self
            .current
            .as_ref()
            .and_then(|url| self.pages.get(url))
            .and_then(|page| page.get(selector))
            .map(|hrefs| {
                hrefs
                    .iter()
                    .cloned()
                    .map(|href| FakeElement { href })
                    .collect()
            })
            .unwrap_or_default();
        Ok(elements)
    }
}
