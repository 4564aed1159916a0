// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    domain::{
        models::{checkpoint::CheckpointRecord, sprite::EntityName},
        repositories::checkpoint_repository::{CheckpointError, CheckpointRepository},
        services::{catalog_service::CatalogService, image_service::ImageService},
    },
    engines::traits::{BrowserSession, EngineError, ImageClient},
    utils::errors::ScrapeError,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum ScrapeSpritesError {
    #[error("Failed to enumerate entities: {0}")]
    Enumeration(#[from] EngineError),
    #[error("Failed to store checkpoint: {0}")]
    Checkpoint(#[from] CheckpointError),
}

/// 单次运行结果
#[derive(Debug)]
pub struct RunReport {
    /// 本次写入检查点的记录
    pub completed: Vec<CheckpointRecord>,
    /// 已完成实体下载的图片总数
    pub images_downloaded: u64,
    /// 最后一个开始处理的实体
    pub last_attempted: Option<EntityName>,
    /// 中止原因；为 `None` 表示所有待处理实体均已完成
    pub aborted: Option<ScrapeError>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }
}

/// 运行期状态
///
/// `last_attempted` 在每个实体开始前设置，失败报告依赖它而不是循环变量
struct RunState {
    next_index: u64,
    pending: Vec<CheckpointRecord>,
    last_attempted: Option<EntityName>,
    images_downloaded: u64,
}

impl RunState {
    fn new(next_index: u64) -> Self {
        Self {
            next_index,
            pending: Vec::new(),
            last_attempted: None,
            images_downloaded: 0,
        }
    }

    fn record(&mut self, record: CheckpointRecord) {
        self.images_downloaded += record.image_count;
        self.pending.push(record);
        self.next_index += 1;
    }

    fn into_report(self, aborted: Option<ScrapeError>) -> RunReport {
        RunReport {
            completed: self.pending,
            images_downloaded: self.images_downloaded,
            last_attempted: self.last_attempted,
            aborted,
        }
    }
}

/// 精灵图抓取用例
///
/// 枚举实体，根据检查点计算恢复点，逐个实体提取链接并下载图片，
/// 最后把本次完成的记录一次性追加到检查点
pub struct ScrapeSpritesUseCase<CR, IC> {
    catalog: CatalogService,
    images: ImageService<IC>,
    checkpoints: Arc<CR>,
    images_dir: PathBuf,
}

impl<CR, IC> ScrapeSpritesUseCase<CR, IC>
where
    CR: CheckpointRepository,
    IC: ImageClient,
{
    pub fn new(
        catalog: CatalogService,
        images: ImageService<IC>,
        checkpoints: Arc<CR>,
        images_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            images,
            checkpoints,
            images_dir: images_dir.into(),
        }
    }

    /// 执行一次完整的抓取与恢复
    ///
    /// 单个实体失败会中止剩余实体，但已完成实体的记录仍会写入检查点，
    /// 此时返回 `Ok`，失败原因在 [`RunReport::aborted`] 中。
    /// 浏览器会话由调用方负责释放。
    ///
    /// # 返回值
    ///
    /// * `Ok(RunReport)` - 运行结束（完成或中止）
    /// * `Err(ScrapeSpritesError)` - 列表页不可用或检查点写入失败
    pub async fn run<S>(&self, session: &mut S) -> Result<RunReport, ScrapeSpritesError>
    where
        S: BrowserSession,
    {
        // 1. Enumerate
        let names = self.catalog.list_entity_names(session).await?;

        // 2. Resume
        let resume = self.checkpoints.load().await;
        let remaining = resume.remaining(&names);
        info!("Extracting remaining {} entities", remaining.len());

        // 3. Per-entity loop
        let mut state = RunState::new(resume.next_index());
        let mut aborted = None;
        for name in remaining {
            state.last_attempted = Some(name.clone());
            match self.scrape_entity(session, state.next_index, &name).await {
                Ok(record) => state.record(record),
                Err(e) => {
                    warn!("Stopped at {}: {}", name, e);
                    aborted = Some(e);
                    break;
                }
            }
        }

        // 4. Finalize
        if !state.pending.is_empty() {
            if let Err(e) = self.checkpoints.append(&state.pending).await {
                error!(
                    "Failed to store {} checkpoint records: {}",
                    state.pending.len(),
                    e
                );
                return Err(e.into());
            }
        }

        Ok(state.into_report(aborted))
    }

    async fn scrape_entity<S>(
        &self,
        session: &mut S,
        index: u64,
        name: &EntityName,
    ) -> Result<CheckpointRecord, ScrapeError>
    where
        S: BrowserSession,
    {
        let entity_dir = self.entity_dir(index, name);
        if !fs::try_exists(&entity_dir).await? {
            fs::create_dir_all(&entity_dir).await?;
            info!("Created {}", entity_dir.display());
        }
        self.checkpoints.ensure_location().await?;

        let links = self.catalog.list_image_links(session, name).await?;

        let mut image_count = 0;
        for link in &links {
            self.images.fetch(link, &entity_dir).await?;
            image_count += 1;
        }
        info!("{} - Downloaded {} images", name, image_count);

        Ok(CheckpointRecord {
            index,
            entity_name: name.clone(),
            image_count,
        })
    }

    /// `images/{index} - {entity_name}`
    fn entity_dir(&self, index: u64, name: &EntityName) -> PathBuf {
        self.images_dir.join(format!("{} - {}", index, name))
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }
}
