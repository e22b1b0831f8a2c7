// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 各端点的请求体构造
//!
//! 每个函数先校验请求，再输出可直接交给 HTTP 传输层的 camelCase 映射。
//! 嵌套的抓取选项统一经过 [`prepare_scrape_options`]。

use serde_json::{Map, Value};
use tracing::debug;

use super::validation::{
    ensure_url, entity_fields, prepare_scrape_options, to_wire, validate_batch_scrape_request,
    validate_crawl_request, validate_extract_request, validate_map_request,
    validate_search_request,
};
use crate::domain::models::{
    BatchScrapeRequest, CrawlRequest, ExtractRequest, MapOptions, ScrapeOptions, SearchRequest,
};
use crate::utils::errors::Result;
use crate::utils::naming;

/// `POST /v2/scrape`
pub fn prepare_scrape_request(url: &str, options: Option<&ScrapeOptions>) -> Result<Map<String, Value>> {
    ensure_url(url)?;

    let mut body = Map::new();
    body.insert("url".to_string(), Value::String(url.to_string()));
    if let Some(prepared) = prepare_scrape_options(options)? {
        body.extend(prepared);
    }

    debug!(url = %url, fields = body.len(), "prepared scrape request");
    Ok(body)
}

/// `POST /v2/crawl`
pub fn prepare_crawl_request(request: &CrawlRequest) -> Result<Map<String, Value>> {
    validate_crawl_request(request)?;
    let body = with_nested_scrape_options(
        entity_fields(request)?,
        "scrape_options",
        request.scrape_options.as_ref(),
    )?;

    debug!(url = %request.url, fields = body.len(), "prepared crawl request");
    Ok(body)
}

/// `POST /v2/map`
pub fn prepare_map_request(url: &str, options: Option<&MapOptions>) -> Result<Map<String, Value>> {
    validate_map_request(url, options)?;

    let mut body = Map::new();
    body.insert("url".to_string(), Value::String(url.to_string()));
    if let Some(opts) = options {
        body.extend(to_wire(&entity_fields(opts)?));
    }

    debug!(url = %url, fields = body.len(), "prepared map request");
    Ok(body)
}

/// `POST /v2/search`
pub fn prepare_search_request(request: &SearchRequest) -> Result<Map<String, Value>> {
    validate_search_request(request)?;
    let body = with_nested_scrape_options(
        entity_fields(request)?,
        "scrape_options",
        request.scrape_options.as_ref(),
    )?;

    debug!(query = %request.query, fields = body.len(), "prepared search request");
    Ok(body)
}

/// `POST /v2/extract`
pub fn prepare_extract_request(request: &ExtractRequest) -> Result<Map<String, Value>> {
    validate_extract_request(request)?;
    let body = with_nested_scrape_options(
        entity_fields(request)?,
        "scrape_options",
        request.scrape_options.as_ref(),
    )?;

    debug!(fields = body.len(), "prepared extract request");
    Ok(body)
}

/// `POST /v2/batch/scrape`
///
/// 抓取选项展开到顶层，请求自身的字段优先。
pub fn prepare_batch_scrape_request(request: &BatchScrapeRequest) -> Result<Map<String, Value>> {
    validate_batch_scrape_request(request)?;

    let mut fields = entity_fields(request)?;
    fields.remove("options");

    let mut body = prepare_scrape_options(request.options.as_ref())?.unwrap_or_default();
    body.extend(to_wire(&fields));

    debug!(urls = request.urls.len(), fields = body.len(), "prepared batch scrape request");
    Ok(body)
}

/// 转换请求字段，嵌套的抓取选项单独准备后以 camelCase 键放回
fn with_nested_scrape_options(
    mut fields: Map<String, Value>,
    key: &str,
    nested: Option<&ScrapeOptions>,
) -> Result<Map<String, Value>> {
    fields.remove(key);
    let mut body = to_wire(&fields);

    if let Some(prepared) = prepare_scrape_options(nested)? {
        body.insert(naming::to_camel(key), Value::Object(prepared));
    }

    Ok(body)
}
