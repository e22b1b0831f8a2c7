// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::aliases::{normalize_entry, AliasedEntity};
use super::scrape_options::ScrapeOptions;

/// 结构化数据提取请求
///
/// `urls` 与 `prompt` 至少提供一个。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// 输出的 JSON Schema，原样传递
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_external_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_web_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_sources: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrape_options: Option<ScrapeOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_invalid_urls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
}

impl AliasedEntity for ExtractRequest {
    fn normalize_nested(fields: &mut Map<String, Value>) {
        normalize_entry::<ScrapeOptions>(fields, "scrape_options");
    }
}
