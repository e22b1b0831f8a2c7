// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
/// 包括大小写转换、字段命名表、错误类型和遥测初始化
pub mod case_converter;
pub mod errors;
pub mod naming;
pub mod telemetry;
