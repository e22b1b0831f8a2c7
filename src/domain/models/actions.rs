// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::aliases::{normalize_entry, AliasedEntity};

/// 视口尺寸
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl AliasedEntity for Viewport {}

/// 页面交互动作
///
/// 按 `type` 字段区分，标签值本身不参与大小写转换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "wait")]
    Wait(WaitAction),
    #[serde(rename = "screenshot")]
    Screenshot(ScreenshotAction),
    #[serde(rename = "click")]
    Click(ClickAction),
    #[serde(rename = "write")]
    Write(WriteAction),
    #[serde(rename = "press")]
    Press(PressAction),
    #[serde(rename = "scroll")]
    Scroll(ScrollAction),
    #[serde(rename = "scrape")]
    Scrape,
    #[serde(rename = "executeJavascript", alias = "execute_javascript")]
    ExecuteJavascript(ExecuteJavascriptAction),
    #[serde(rename = "pdf")]
    Pdf(PdfAction),
}

impl AliasedEntity for Action {
    fn normalize_nested(fields: &mut Map<String, Value>) {
        normalize_entry::<Viewport>(fields, "viewport");
    }
}

/// 等待固定时长或等待选择器出现
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milliseconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// 截图
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenshotAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickAction {
    pub selector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAction {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressAction {
    pub key: String,
}

/// 滚动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<ScrollDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteJavascriptAction {
    pub script: String,
}

/// 将页面打印为 PDF
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdfAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landscape: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl From<ScreenshotAction> for Action {
    fn from(action: ScreenshotAction) -> Self {
        Action::Screenshot(action)
    }
}

impl From<WaitAction> for Action {
    fn from(action: WaitAction) -> Self {
        Action::Wait(action)
    }
}

impl From<ClickAction> for Action {
    fn from(action: ClickAction) -> Self {
        Action::Click(action)
    }
}
