// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::checkpoint_repository::CheckpointError;
use crate::engines::traits::EngineError;
use thiserror::Error;

/// 单个实体处理过程中的错误
///
/// 任何一个变体出现都会中止本次运行剩余的实体
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Image link has no usable file name: {0}")]
    InvalidLink(String),
}
