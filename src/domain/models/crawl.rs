// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use super::aliases::{normalize_entry, AliasedEntity};
use super::map::SitemapMode;
use super::scrape_options::ScrapeOptions;

/// Webhook 回调设置
///
/// 可直接写 URL，也可写完整配置对象。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Webhook {
    Url(String),
    Config(WebhookConfig),
}

impl AliasedEntity for Webhook {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    /// 回调请求头，原样传递
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// 回调附带的元数据，原样传递
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// 订阅的事件（started / page / completed / failed）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
}

/// 站点爬取请求
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CrawlRequest {
    #[validate(length(min = 1, message = "URL cannot be empty"))]
    pub url: String,
    /// 以自然语言描述爬取目标，由服务端生成爬取参数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discovery_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<SitemapMode>,
    pub ignore_query_parameters: bool,
    /// 最多爬取的页面数
    #[validate(range(min = 1, message = "Limit must be positive"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    pub crawl_entire_domain: bool,
    pub allow_external_links: bool,
    pub allow_subdomains: bool,
    /// 两次抓取之间的间隔（秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<Webhook>,
    /// 每个页面使用的抓取选项
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrape_options: Option<ScrapeOptions>,
    pub zero_data_retention: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
}

impl AliasedEntity for CrawlRequest {
    fn normalize_nested(fields: &mut Map<String, Value>) {
        normalize_entry::<ScrapeOptions>(fields, "scrape_options");
        normalize_entry::<Webhook>(fields, "webhook");
    }
}

impl CrawlRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
