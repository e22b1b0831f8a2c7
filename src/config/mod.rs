// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理 SDK 的配置设置，包括日志和字段名规范化选项
pub mod settings;
