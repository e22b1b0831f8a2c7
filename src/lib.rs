// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 请求校验、线上格式准备和请求构造
pub mod application;

/// 配置模块
///
/// 处理 SDK 的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含抓取、爬取、站点地图、提取、搜索和批量抓取的请求实体
pub mod domain;

/// 工具模块
///
/// 提供大小写转换、命名表、错误类型等通用功能
pub mod utils;

pub use application::payloads::{
    prepare_batch_scrape_request, prepare_crawl_request, prepare_extract_request,
    prepare_map_request, prepare_scrape_request, prepare_search_request,
};
pub use application::validation::{
    convert_camel_to_snake_keys, convert_snake_to_camel_keys, detect_camel_case_keys,
    prepare_scrape_options, validate_scrape_options,
};
pub use utils::errors::{Result, SdkError};
