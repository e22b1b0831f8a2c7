// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 请求校验与线上格式准备
//!
//! 校验按固定顺序执行，遇到第一个失败立即返回；准备阶段先校验，
//! 再把 snake_case 实体序列化并转换为服务端要求的 camelCase 映射。

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;
use validator::Validate;

use crate::domain::models::{
    BatchScrapeRequest, CrawlRequest, ExtractRequest, MapOptions, ScrapeOptions, SearchRequest,
};
use crate::utils::case_converter::KeyRewriter;
use crate::utils::errors::{Result, SdkError};
use crate::utils::naming;

/// 只改写键名、值原样传递的字段
pub const OPAQUE_FIELDS: &[&str] = &["headers", "schema", "metadata"];

const TO_WIRE: KeyRewriter = KeyRewriter::new(naming::to_camel).with_opaque(OPAQUE_FIELDS);
const TO_SNAKE: KeyRewriter = KeyRewriter::new(naming::to_snake);
const TO_CAMEL: KeyRewriter = KeyRewriter::new(naming::to_camel);

/// 校验抓取选项
///
/// 依次检查：
/// 1. `timeout` 设置时必须大于 0
/// 2. `wait_for` 设置时必须不小于 0
///
/// 成功时原样返回传入的引用；`None` 直接返回 `None`。
pub fn validate_scrape_options(options: Option<&ScrapeOptions>) -> Result<Option<&ScrapeOptions>> {
    let Some(opts) = options else {
        return Ok(None);
    };

    if let Some(timeout) = opts.timeout {
        if timeout <= 0 {
            debug!(field = "timeout", value = timeout, "scrape options rejected");
            return Err(SdkError::invalid_argument("Timeout must be positive"));
        }
    }

    if let Some(wait_for) = opts.wait_for {
        if wait_for < 0 {
            debug!(field = "wait_for", value = wait_for, "scrape options rejected");
            return Err(SdkError::invalid_argument("wait_for must be non-negative"));
        }
    }

    Ok(Some(opts))
}

/// 准备抓取选项的线上格式
///
/// 先校验，再输出所有已设置字段（带默认值的字段总会输出），
/// 键统一转为 camelCase，动作、解析器等嵌套对象一并转换。
pub fn prepare_scrape_options(options: Option<&ScrapeOptions>) -> Result<Option<Map<String, Value>>> {
    let Some(opts) = validate_scrape_options(options)? else {
        return Ok(None);
    };

    let prepared = to_wire(&entity_fields(opts)?);
    debug!(fields = prepared.len(), "prepared scrape options");
    Ok(Some(prepared))
}

/// 找出顶层的 camelCase 键，并给出对应的 snake_case 写法
///
/// 只检查顶层键。命名表中登记的字段使用表中写法，其余使用通用转换。
pub fn detect_camel_case_keys(data: &Map<String, Value>) -> BTreeSet<(String, String)> {
    data.keys()
        .filter(|key| looks_camel_case(key))
        .map(|key| (key.clone(), naming::to_snake(key)))
        .collect()
}

/// 递归地把所有键转换为 snake_case
pub fn convert_camel_to_snake_keys(data: &Map<String, Value>) -> Map<String, Value> {
    TO_SNAKE.rewrite_map(data)
}

/// 递归地把所有键转换为 camelCase
pub fn convert_snake_to_camel_keys(data: &Map<String, Value>) -> Map<String, Value> {
    TO_CAMEL.rewrite_map(data)
}

fn looks_camel_case(key: &str) -> bool {
    key.chars().skip(1).any(char::is_uppercase)
}

pub fn validate_crawl_request(request: &CrawlRequest) -> Result<()> {
    request.validate()?;
    validate_scrape_options(request.scrape_options.as_ref())?;
    Ok(())
}

pub fn validate_map_request(url: &str, options: Option<&MapOptions>) -> Result<()> {
    ensure_url(url)?;
    if let Some(opts) = options {
        opts.validate()?;
    }
    Ok(())
}

pub fn validate_search_request(request: &SearchRequest) -> Result<()> {
    request.validate()?;
    validate_scrape_options(request.scrape_options.as_ref())?;
    Ok(())
}

pub fn validate_extract_request(request: &ExtractRequest) -> Result<()> {
    let has_urls = request.urls.as_ref().is_some_and(|urls| !urls.is_empty());
    let has_prompt = request
        .prompt
        .as_deref()
        .is_some_and(|prompt| !prompt.trim().is_empty());
    if !has_urls && !has_prompt {
        return Err(SdkError::invalid_argument("URLs or prompt is required"));
    }
    validate_scrape_options(request.scrape_options.as_ref())?;
    Ok(())
}

pub fn validate_batch_scrape_request(request: &BatchScrapeRequest) -> Result<()> {
    request.validate()?;
    validate_scrape_options(request.options.as_ref())?;
    Ok(())
}

pub(crate) fn ensure_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(SdkError::invalid_argument("URL cannot be empty"));
    }
    Ok(())
}

/// 把实体序列化为 snake_case 字段映射
pub(crate) fn entity_fields<T: Serialize>(entity: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(entity)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(SdkError::invalid_argument(
            "request entity must serialize to an object",
        )),
    }
}

/// 转换为线上格式：键名 camelCase，格式名规范化，集成标记去空白
pub(crate) fn to_wire(fields: &Map<String, Value>) -> Map<String, Value> {
    let mut wire = TO_WIRE.rewrite_map(fields);

    if let Some(Value::Array(formats)) = wire.get_mut("formats") {
        for format in formats.iter_mut() {
            if let Value::String(name) = format {
                *name = naming::to_camel(name);
            }
        }
    }

    let integration = match wire.get("integration") {
        Some(Value::String(tag)) => Some(tag.trim().to_string()),
        _ => None,
    };
    if let Some(tag) = integration {
        if tag.is_empty() {
            wire.remove("integration");
        } else {
            wire.insert("integration".to_string(), Value::String(tag));
        }
    }

    wire
}
