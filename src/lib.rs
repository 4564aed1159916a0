// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含抓取运行的编排用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// 浏览器会话与HTTP下载客户端
pub mod engines;

/// 基础设施模块
///
/// 提供检查点文件等外部存储的实现
pub mod infrastructure;

/// 工具模块
///
/// 日志初始化与错误类型
pub mod utils;
