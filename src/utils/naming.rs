// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 字段命名表
//!
//! 请求实体中所有多单词字段的 camelCase ↔ snake_case 对照。
//! `CAMEL_TO_SNAKE_MAPPINGS` 是唯一的数据来源，反向表在首次访问时由它推导。

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::utils::case_converter::{camel_to_snake, snake_to_camel};

/// camelCase 字段名 → snake_case 字段名
pub const CAMEL_TO_SNAKE_MAPPINGS: &[(&str, &str)] = &[
    // scrape options
    ("includeTags", "include_tags"),
    ("excludeTags", "exclude_tags"),
    ("onlyMainContent", "only_main_content"),
    ("waitFor", "wait_for"),
    ("skipTlsVerification", "skip_tls_verification"),
    ("removeBase64Images", "remove_base64_images"),
    ("fastMode", "fast_mode"),
    ("useMock", "use_mock"),
    ("blockAds", "block_ads"),
    ("storeInCache", "store_in_cache"),
    ("maxAge", "max_age"),
    ("rawHtml", "raw_html"),
    ("changeTracking", "change_tracking"),
    // actions, formats, parsers
    ("fullPage", "full_page"),
    ("maxPages", "max_pages"),
    // crawl
    ("maxDiscoveryDepth", "max_discovery_depth"),
    ("excludePaths", "exclude_paths"),
    ("includePaths", "include_paths"),
    ("ignoreQueryParameters", "ignore_query_parameters"),
    ("crawlEntireDomain", "crawl_entire_domain"),
    ("allowExternalLinks", "allow_external_links"),
    ("allowSubdomains", "allow_subdomains"),
    ("maxConcurrency", "max_concurrency"),
    ("zeroDataRetention", "zero_data_retention"),
    ("scrapeOptions", "scrape_options"),
    // map
    ("includeSubdomains", "include_subdomains"),
    // extract
    ("systemPrompt", "system_prompt"),
    ("enableWebSearch", "enable_web_search"),
    ("showSources", "show_sources"),
    ("ignoreInvalidUrls", "ignore_invalid_urls"),
    // batch scrape
    ("appendToId", "append_to_id"),
];

static CAMEL_TO_SNAKE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CAMEL_TO_SNAKE_MAPPINGS.iter().copied().collect());

static SNAKE_TO_CAMEL: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let reverse: HashMap<_, _> = CAMEL_TO_SNAKE_MAPPINGS
        .iter()
        .map(|&(camel, snake)| (snake, camel))
        .collect();
    // 映射必须是单射，否则反向表会丢失条目
    assert_eq!(
        reverse.len(),
        CAMEL_TO_SNAKE_MAPPINGS.len(),
        "field naming table maps two camelCase keys to the same snake_case key"
    );
    reverse
});

/// 查表得到 snake_case 形式，未登记的字段回退到通用转换
pub fn to_snake(camel_key: &str) -> String {
    match CAMEL_TO_SNAKE.get(camel_key) {
        Some(snake) => (*snake).to_string(),
        None => camel_to_snake(camel_key),
    }
}

/// 查表得到 camelCase 形式，未登记的字段回退到通用转换
pub fn to_camel(snake_key: &str) -> String {
    match SNAKE_TO_CAMEL.get(snake_key) {
        Some(camel) => (*camel).to_string(),
        None => snake_to_camel(snake_key),
    }
}

/// 字段是否登记在命名表中（camelCase 形式）
pub fn is_known_camel(key: &str) -> bool {
    CAMEL_TO_SNAKE.contains_key(key)
}
