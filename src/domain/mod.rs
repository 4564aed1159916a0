// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：实体名称、图片链接与检查点记录
/// - 仓库接口（repositories）：检查点持久化抽象接口
/// - 服务（services）：名称枚举、链接提取与图片下载
pub mod models;
pub mod repositories;
pub mod services;
