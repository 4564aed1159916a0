// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::CatalogSettings;
use crate::domain::models::sprite::{EntityName, ImageLink};
use crate::engines::traits::{BrowserSession, EngineError, PageElement};
use crate::utils::errors::ScrapeError;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info, warn};
use url::Url;

/// 目录服务
///
/// 通过浏览器会话读取列表页与实体详情页：
/// - 名称枚举：列表页上所有实体卡片的名称，按页面顺序去重
/// - 链接提取：某个实体详情页上的图片链接，排除备用视图并去重
pub struct CatalogService {
    listing_url: Url,
    name_selector: String,
    link_selector: String,
    excluded_marker: String,
}

impl CatalogService {
    pub fn new(settings: &CatalogSettings) -> Result<Self, url::ParseError> {
        // Listing is always navigated with a trailing slash
        let mut listing = settings.listing_url.trim().to_string();
        if !listing.ends_with('/') {
            listing.push('/');
        }

        let listing_url = Url::parse(&listing)?;
        if listing_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
        }

        Ok(Self {
            listing_url,
            name_selector: settings.name_selector.clone(),
            link_selector: settings.link_selector.clone(),
            excluded_marker: settings.excluded_marker.clone(),
        })
    }

    /// 实体详情页URL
    ///
    /// 名称作为列表页下的单个路径段追加（按需百分号编码），
    /// 含 `:` 或 `/` 的名称不会离开列表页路径
    pub fn detail_url(&self, name: &EntityName) -> Result<Url, url::ParseError> {
        let mut url = self.listing_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(name.as_str());
        Ok(url)
    }

    /// 枚举列表页上的实体名称
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<EntityName>)` - 按页面顺序排列的名称，页面结构变化时可能为空
    /// * `Err(EngineError)` - 列表页导航或元素查询失败
    pub async fn list_entity_names<S>(&self, session: &mut S) -> Result<Vec<EntityName>, EngineError>
    where
        S: BrowserSession,
    {
        session.navigate(&self.listing_url).await?;
        let cards = session.find_elements(&self.name_selector).await?;

        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(cards.len());
        for card in &cards {
            let Some(href) = card.attribute("href").await? else {
                debug!("Skipping listing card without href");
                continue;
            };

            match EntityName::from_href(&href) {
                Some(name) if seen.insert(name.clone()) => names.push(name),
                Some(name) => debug!("Skipping duplicate entity {}", name),
                None => debug!("Skipping listing card with empty name: {}", href),
            }
        }

        if names.is_empty() {
            warn!(
                "No entity names found on {} with selector '{}'",
                self.listing_url, self.name_selector
            );
        } else {
            info!("Extracted {} entity names", names.len());
        }

        Ok(names)
    }

    /// 提取某个实体的图片链接
    ///
    /// 相对链接以详情页URL为基准解析；路径包含备用视图标记的链接被排除
    pub async fn list_image_links<S>(
        &self,
        session: &mut S,
        name: &EntityName,
    ) -> Result<BTreeSet<ImageLink>, ScrapeError>
    where
        S: BrowserSession,
    {
        let page_url = self.detail_url(name)?;
        session.navigate(&page_url).await?;
        let anchors = session.find_elements(&self.link_selector).await?;

        let mut links = BTreeSet::new();
        let mut excluded = 0usize;
        for anchor in &anchors {
            let Some(href) = anchor.attribute("href").await? else {
                continue;
            };

            let link = match ImageLink::resolve(&page_url, &href) {
                Ok(link) => link,
                Err(e) => {
                    warn!("Ignoring unparsable image link '{}' for {}: {}", href, name, e);
                    continue;
                }
            };

            if link.is_alternate_view(&self.excluded_marker) {
                excluded += 1;
                continue;
            }
            links.insert(link);
        }

        debug!(
            "{} - {} image links ({} alternate views excluded)",
            name,
            links.len(),
            excluded
        );
        Ok(links)
    }
}
