// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 目录服务（catalog_service）：枚举实体名称并提取每个实体的图片链接
/// - 图片服务（image_service）：下载单张图片并写入目标目录
pub mod catalog_service;
pub mod image_service;
