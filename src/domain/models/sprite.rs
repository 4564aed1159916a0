// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

/// 名称归一化后为空
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Entity name is empty")]
pub struct EmptyEntityName;

/// 实体名称
///
/// 归一化后的实体标识（小写，空格替换为连字符），
/// 既作为详情页URL的路径段，也作为检查点的键；
/// 反序列化时同样经过归一化
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityName(String);

impl EntityName {
    /// 归一化原始名称，空名称返回 `None`
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase().replace(' ', "-");
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// 从列表卡片的 href 中取最后一个路径段作为名称
    pub fn from_href(href: &str) -> Option<Self> {
        let path = href.split(['?', '#']).next().unwrap_or_default();
        let segment = path.trim_end_matches('/').rsplit('/').next()?;
        Self::new(segment)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntityName {
    type Error = EmptyEntityName;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw).ok_or(EmptyEntityName)
    }
}

impl From<EntityName> for String {
    fn from(name: EntityName) -> Self {
        name.0
    }
}

/// 图片链接
///
/// 指向某个实体单张图片的绝对URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageLink(Url);

impl ImageLink {
    /// 以页面URL为基准解析 href，支持相对链接
    pub fn resolve(base: &Url, href: &str) -> Result<Self, url::ParseError> {
        base.join(href.trim()).map(Self)
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    /// 路径中是否包含备用视图标记（大小写不敏感）
    ///
    /// 空标记不排除任何链接
    pub fn is_alternate_view(&self, marker: &str) -> bool {
        if marker.is_empty() {
            return false;
        }
        self.0
            .path()
            .to_lowercase()
            .contains(&marker.to_lowercase())
    }

    /// 由URL路径生成扁平文件名
    ///
    /// `/sprites/home/a.png` 对应 `sprites_home_a.png`，不会产生子目录
    pub fn flattened_name(&self) -> Option<String> {
        let flat = self.0.path().replace('/', "_");
        let flat = flat.strip_prefix('_').unwrap_or(&flat);
        if flat.is_empty() {
            None
        } else {
            Some(flat.to_string())
        }
    }
}

impl From<Url> for ImageLink {
    fn from(url: Url) -> Self {
        Self(url)
    }
}

impl fmt::Display for ImageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
