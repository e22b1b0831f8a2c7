// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::actions::Viewport;
use super::aliases::{normalize_entry, AliasedEntity};

/// 输出格式
///
/// 既可以是格式名（`"markdown"`、`"rawHtml"` ...），也可以是带参数的格式对象。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Format {
    Name(String),
    Spec(FormatSpec),
}

impl AliasedEntity for Format {
    fn normalize_nested(fields: &mut Map<String, Value>) {
        normalize_entry::<Viewport>(fields, "viewport");
    }
}

/// 带参数的格式对象，按 `type` 区分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FormatSpec {
    #[serde(rename = "json")]
    Json(JsonFormat),
    #[serde(rename = "screenshot")]
    Screenshot(ScreenshotFormat),
    #[serde(rename = "changeTracking", alias = "change_tracking")]
    ChangeTracking(ChangeTrackingFormat),
}

/// JSON 结构化提取格式
///
/// `schema` 是调用方提供的 JSON Schema，作为不透明值原样传递。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenshotFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

/// 变更跟踪格式
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeTrackingFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl From<&str> for Format {
    fn from(name: &str) -> Self {
        Format::Name(name.to_string())
    }
}

impl From<JsonFormat> for Format {
    fn from(format: JsonFormat) -> Self {
        Format::Spec(FormatSpec::Json(format))
    }
}

impl From<ScreenshotFormat> for Format {
    fn from(format: ScreenshotFormat) -> Self {
        Format::Spec(FormatSpec::Screenshot(format))
    }
}

impl From<ChangeTrackingFormat> for Format {
    fn from(format: ChangeTrackingFormat) -> Self {
        Format::Spec(FormatSpec::ChangeTracking(format))
    }
}
