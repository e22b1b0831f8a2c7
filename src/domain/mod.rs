// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 包含请求实体（models）：抓取、爬取、站点地图、提取、搜索和批量抓取请求，
/// 以及它们共享的字段别名解析规则。
///
/// 领域层不依赖任何传输实现，只描述请求本身的结构。
pub mod models;
