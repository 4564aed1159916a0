// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Chromium浏览器会话（名称枚举与链接提取使用）
pub mod chromium_engine;
/// reqwest图片下载客户端
pub mod reqwest_engine;
/// 浏览器与HTTP协作方的特质和错误类型
pub mod traits;
