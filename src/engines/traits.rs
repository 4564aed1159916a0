// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use url::Url;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 浏览器错误
    #[error("Browser error: {0}")]
    Browser(String),
}

/// 页面元素句柄
#[async_trait]
pub trait PageElement: Send + Sync {
    /// 读取元素属性，不存在时返回 `None`
    async fn attribute(&self, name: &str) -> Result<Option<String>, EngineError>;
}

/// 浏览器会话
///
/// 目录服务只依赖导航和元素查询两种能力，不关心具体浏览器实现
#[async_trait]
pub trait BrowserSession: Send {
    type Element: PageElement;

    /// 导航到指定URL并等待加载完成
    async fn navigate(&mut self, url: &Url) -> Result<(), EngineError>;

    /// 在当前页面按CSS选择器查找元素，没有匹配时返回空列表
    async fn find_elements(&mut self, selector: &str) -> Result<Vec<Self::Element>, EngineError>;
}

/// 图片下载客户端
#[async_trait]
pub trait ImageClient: Send + Sync {
    /// 获取URL对应的完整响应体
    async fn get(&self, url: &Url) -> Result<Bytes, EngineError>;
}
