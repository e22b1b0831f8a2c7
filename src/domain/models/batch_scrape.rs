// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use super::aliases::{normalize_entry, AliasedEntity};
use super::crawl::Webhook;
use super::scrape_options::ScrapeOptions;

/// 批量抓取请求
///
/// `options` 在请求体中会被展开到顶层。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BatchScrapeRequest {
    #[validate(length(min = 1, message = "URLs list cannot be empty"))]
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ScrapeOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<Webhook>,
    /// 追加到已有批量任务
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_to_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_invalid_urls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_data_retention: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
}

impl AliasedEntity for BatchScrapeRequest {
    fn normalize_nested(fields: &mut Map<String, Value>) {
        normalize_entry::<ScrapeOptions>(fields, "options");
        normalize_entry::<Webhook>(fields, "webhook");
    }
}
