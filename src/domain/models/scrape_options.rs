// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::actions::Action;
use super::aliases::{normalize_entry, AliasedEntity};
use super::formats::Format;
use super::parsers::Parser;

/// 地理位置设置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// ISO 3166-1 alpha-2 国家代码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// 首选语言列表
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

impl AliasedEntity for Location {}

/// 抓取选项
///
/// 字段统一为 snake_case。`only_main_content` 与 `mobile` 带有默认值，
/// 总会出现在序列化结果中；其余字段未设置时省略，显式的 false / 0 / 空列表会保留。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    /// 输出格式
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<Format>>,
    /// 自定义HTTP请求头，原样传递
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// 包含的HTML标签列表
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tags: Option<Vec<String>>,
    /// 排除的HTML标签列表
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_tags: Option<Vec<String>>,
    /// 是否只保留正文内容
    pub only_main_content: bool,
    /// 超时时间（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// 等待时间（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for: Option<i64>,
    /// 是否模拟移动设备
    pub mobile: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsers: Option<Vec<Parser>>,
    /// 页面交互动作
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// 是否跳过TLS验证
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_tls_verification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_base64_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_mock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_ads: Option<bool>,
    /// 代理类型（basic / stealth / auto）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// 缓存最大可接受年龄（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_in_cache: Option<bool>,
    /// 集成来源标记
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            formats: None,
            headers: None,
            include_tags: None,
            exclude_tags: None,
            only_main_content: true,
            timeout: None,
            wait_for: None,
            mobile: false,
            parsers: None,
            actions: None,
            location: None,
            skip_tls_verification: None,
            remove_base64_images: None,
            fast_mode: None,
            use_mock: None,
            block_ads: None,
            proxy: None,
            max_age: None,
            store_in_cache: None,
            integration: None,
        }
    }
}

impl AliasedEntity for ScrapeOptions {
    fn normalize_nested(fields: &mut Map<String, Value>) {
        normalize_entry::<Format>(fields, "formats");
        normalize_entry::<Parser>(fields, "parsers");
        normalize_entry::<Action>(fields, "actions");
        normalize_entry::<Location>(fields, "location");
    }
}
