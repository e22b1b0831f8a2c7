// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求的校验、线上格式准备和按配置的请求构造
pub mod normalizer;
pub mod payloads;
pub mod validation;
