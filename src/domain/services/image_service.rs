// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::sprite::ImageLink;
use crate::engines::traits::ImageClient;
use crate::utils::errors::ScrapeError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

/// 图片服务
///
/// 下载单张图片并以扁平文件名写入目标目录。不重试，
/// 失败时不清理已写入的部分，调用方应视为该图片未下载
pub struct ImageService<C> {
    client: Arc<C>,
}

impl<C> ImageService<C>
where
    C: ImageClient,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// 下载图片到 `destination`，已存在的同名文件会被覆盖
    ///
    /// # 返回值
    ///
    /// * `Ok(PathBuf)` - 写入的文件路径
    /// * `Err(ScrapeError)` - 链接无效、网络错误或文件系统错误
    pub async fn fetch(&self, link: &ImageLink, destination: &Path) -> Result<PathBuf, ScrapeError> {
        let file_name = link
            .flattened_name()
            .ok_or_else(|| ScrapeError::InvalidLink(link.to_string()))?;

        let payload = self.client.get(link.url()).await?;
        let target = destination.join(file_name);
        fs::write(&target, &payload).await?;

        debug!("Saved {} to {}", link, target.display());
        Ok(target)
    }
}
