// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::checkpoint::{CheckpointRecord, ResumeState};
use crate::domain::repositories::checkpoint_repository::{CheckpointError, CheckpointRepository};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

/// CSV检查点仓库实现
///
/// 文件格式为带表头的CSV（`index,pokemon_name,n_images`），只追加，从不重写
pub struct CsvCheckpointRepository {
    path: PathBuf,
}

impl CsvCheckpointRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 解析检查点内容
    ///
    /// 跳过格式错误的行，其余记录照常读取
    fn parse_records(&self, content: &[u8]) -> Vec<CheckpointRecord> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(content);

        let mut records = Vec::new();
        for row in reader.deserialize::<CheckpointRecord>() {
            match row {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        "Skipping malformed row in {}: {}",
                        self.path.display(),
                        e
                    );
                    continue;
                }
            }
        }
        records
    }

    /// 文件不存在或长度为0时需要写表头
    async fn needs_header(&self) -> Result<bool, CheckpointError> {
        match fs::metadata(&self.path).await {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CheckpointRepository for CsvCheckpointRepository {
    async fn load(&self) -> ResumeState {
        let state = match fs::read(&self.path).await {
            Ok(content) => ResumeState::from_records(self.parse_records(&content)),
            Err(e) => {
                info!("No prior checkpoint at {}: {}", self.path.display(), e);
                ResumeState::default()
            }
        };

        info!(
            "{} already scraped. Scraping other images.",
            state.scraped.len()
        );
        state
    }

    async fn append(&self, records: &[CheckpointRecord]) -> Result<(), CheckpointError> {
        if records.is_empty() {
            return Err(CheckpointError::EmptyBatch);
        }

        let write_header = self.needs_header().await?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(Vec::new());
        for record in records {
            writer.serialize(record)?;
        }
        let buffer = writer
            .into_inner()
            .map_err(|e| CheckpointError::Io(e.into_error()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&buffer).await?;
        file.flush().await?;

        info!(
            "Stored {} records to checkpoint {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn ensure_location(&self) -> Result<(), CheckpointError> {
        let Some(parent) = self.path.parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() || fs::try_exists(parent).await? {
            return Ok(());
        }

        fs::create_dir_all(parent).await?;
        info!("Created {}", parent.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "checkpoint_repo_impl_test.rs"]
mod tests;
