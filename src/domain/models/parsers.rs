// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::aliases::AliasedEntity;

/// 文档解析器
///
/// 可写作解析器名（`"pdf"`）、结构化解析器，或原始映射。未识别的类型，
/// 以及带有结构化解析器未声明字段的映射，都按原始映射保留全部字段。
/// 原始映射在准备阶段同样会做键名转换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parser {
    Name(String),
    Spec(ParserSpec),
    Raw(Map<String, Value>),
}

impl AliasedEntity for Parser {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParserSpec {
    #[serde(rename = "pdf")]
    Pdf(PdfParser),
}

/// PDF 解析器
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PdfParser {
    /// 最多解析的页数
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
}

impl From<&str> for Parser {
    fn from(name: &str) -> Self {
        Parser::Name(name.to_string())
    }
}

impl From<PdfParser> for Parser {
    fn from(parser: PdfParser) -> Self {
        Parser::Spec(ParserSpec::Pdf(parser))
    }
}
