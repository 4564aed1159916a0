// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sprite::EntityName;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 检查点记录
///
/// 一个实体的全部图片下载完成后生成。CSV列名
/// `index,pokemon_name,n_images` 需与已有检查点文件保持兼容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointRecord {
    /// 处理顺序序号，跨运行单调递增
    pub index: u64,
    /// 实体名称
    #[serde(rename = "pokemon_name")]
    pub entity_name: EntityName,
    /// 下载的图片数量
    #[serde(rename = "n_images")]
    pub image_count: u64,
}

/// 恢复状态
///
/// 由已有检查点计算得到：最大序号与已完成实体集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeState {
    pub last_index: u64,
    pub scraped: HashSet<EntityName>,
}

impl ResumeState {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CheckpointRecord>,
    {
        records
            .into_iter()
            .fold(Self::default(), |mut state, record| {
                state.last_index = state.last_index.max(record.index);
                state.scraped.insert(record.entity_name);
                state
            })
    }

    /// 本次运行第一个新实体的序号
    pub fn next_index(&self) -> u64 {
        self.last_index + 1
    }

    pub fn is_scraped(&self, name: &EntityName) -> bool {
        self.scraped.contains(name)
    }

    /// 待处理实体：枚举结果减去已完成集合，保持枚举顺序
    pub fn remaining(&self, names: &[EntityName]) -> Vec<EntityName> {
        names
            .iter()
            .filter(|name| !self.is_scraped(name))
            .cloned()
            .collect()
    }
}
