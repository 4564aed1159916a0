// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含目录页、输出路径、浏览器与HTTP客户端的全部配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 目录页配置
    pub catalog: CatalogSettings,
    /// 输出路径配置
    pub output: OutputSettings,
    /// 浏览器配置
    pub browser: BrowserSettings,
    /// HTTP客户端配置
    pub http: HttpSettings,
}

/// 目录页配置设置
#[derive(Debug, Deserialize)]
pub struct CatalogSettings {
    /// 列表页URL，实体详情页为 `{listing_url}/{entity_name}`
    pub listing_url: String,
    /// 列表页上实体卡片的CSS选择器
    pub name_selector: String,
    /// 详情页上图片链接的CSS选择器
    pub link_selector: String,
    /// 备用视图标记（大小写不敏感），路径包含该标记的链接不下载
    pub excluded_marker: String,
}

/// 输出路径配置设置
#[derive(Debug, Deserialize)]
pub struct OutputSettings {
    /// 图片根目录
    pub images_dir: String,
    /// 检查点CSV文件路径
    pub checkpoint_path: String,
}

/// 浏览器配置设置
#[derive(Debug, Deserialize)]
pub struct BrowserSettings {
    /// 远程调试地址，设置后连接已有的Chrome而不是启动新实例
    pub remote_debugging_url: Option<String>,
    /// 是否无头模式
    pub headless: bool,
    /// CDP请求超时时间（秒）
    pub request_timeout_secs: u64,
}

/// HTTP客户端配置设置
#[derive(Debug, Deserialize)]
pub struct HttpSettings {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent
    pub user_agent: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 与
    /// `SPRITE_SCRAPER__*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SPRITE_SCRAPER").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 仅包含内置默认值的构建器
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Catalog
            .set_default("catalog.listing_url", "https://pokemondb.net/sprites/")?
            .set_default("catalog.name_selector", ".infocard")?
            .set_default("catalog.link_selector", ".sprite-share-link")?
            .set_default("catalog.excluded_marker", "back")?
            // Output layout
            .set_default("output.images_dir", "images")?
            .set_default("output.checkpoint_path", "checkpoint/scraped_images.csv")?
            // Browser
            .set_default("browser.headless", true)?
            .set_default("browser.request_timeout_secs", 30)?
            // HTTP
            .set_default("http.timeout_secs", 30)?
            .set_default(
                "http.user_agent",
                concat!("sprite-scraper/", env!("CARGO_PKG_VERSION")),
            )
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
