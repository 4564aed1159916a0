// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::checkpoint::{CheckpointRecord, ResumeState};
use async_trait::async_trait;
use thiserror::Error;

/// 检查点错误类型
#[derive(Error, Debug)]
pub enum CheckpointError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV编解码错误
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// 追加了空的记录批次
    #[error("Refusing to append an empty batch of checkpoint records")]
    EmptyBatch,
}

/// 检查点仓库特质
///
/// 只追加的进度日志，用于记录完成的实体并在下次运行时计算恢复点
#[async_trait]
pub trait CheckpointRepository: Send + Sync {
    /// 读取已有检查点
    ///
    /// 文件不存在、为空或无法读取时返回空状态，错误只记录日志
    async fn load(&self) -> ResumeState;

    /// 追加一批记录
    ///
    /// 仅在文件不存在或为空时写入表头。`records` 不能为空
    async fn append(&self, records: &[CheckpointRecord]) -> Result<(), CheckpointError>;

    /// 确保检查点所在目录存在
    async fn ensure_location(&self) -> Result<(), CheckpointError>;
}
