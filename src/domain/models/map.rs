// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use super::aliases::{normalize_entry, AliasedEntity};
use super::scrape_options::Location;

/// 站点地图使用方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SitemapMode {
    /// 只使用站点地图
    Only,
    /// 站点地图与页面链接一起使用
    Include,
    /// 忽略站点地图
    Skip,
}

/// 站点地图发现选项
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MapOptions {
    /// 按关键词过滤链接
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<SitemapMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_subdomains: Option<bool>,
    #[validate(range(min = 1, message = "Limit must be positive"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[validate(range(min = 1, message = "Timeout must be positive"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_query_parameters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
}

impl AliasedEntity for MapOptions {
    fn normalize_nested(fields: &mut Map<String, Value>) {
        normalize_entry::<Location>(fields, "location");
    }
}
