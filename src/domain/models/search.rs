// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use super::aliases::{normalize_entry, AliasedEntity};
use super::scrape_options::ScrapeOptions;

/// 搜索来源，可写作来源名或带参数的对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchSource {
    Name(String),
    Spec(SearchSourceSpec),
}

impl AliasedEntity for SearchSource {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSourceSpec {
    /// web / news / images
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tbs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// 网页搜索请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SearchRequest {
    #[validate(length(min = 1, message = "Query cannot be empty"))]
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SearchSource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[validate(range(min = 1, message = "Limit must be positive"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// 时间范围过滤
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tbs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_invalid_urls: Option<bool>,
    #[validate(range(min = 1, message = "Timeout must be positive"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// 对搜索结果执行抓取时使用的选项
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrape_options: Option<ScrapeOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            sources: None,
            categories: None,
            limit: Some(5),
            tbs: None,
            location: None,
            ignore_invalid_urls: None,
            timeout: None,
            scrape_options: None,
            integration: None,
        }
    }
}

impl AliasedEntity for SearchRequest {
    fn normalize_nested(fields: &mut Map<String, Value>) {
        normalize_entry::<SearchSource>(fields, "sources");
        normalize_entry::<ScrapeOptions>(fields, "scrape_options");
    }
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}
