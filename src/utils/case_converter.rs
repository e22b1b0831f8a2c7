// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{Map, Value};

/// snake_case → camelCase
///
/// 按下划线切分，首段小写，后续各段首字母大写后拼接。
/// 开头的下划线保留，结尾和重复的下划线被丢弃（`foo_` → `foo`）。
///
/// 不含下划线的输入视为单个段：全大写的段整体转小写（`URL` → `url`），
/// 其余原样返回，因此对 camelCase 输入是幂等的。
pub fn snake_to_camel(s: &str) -> String {
    let body = s.trim_start_matches('_');
    if !body.contains('_') {
        let all_caps = body.chars().any(char::is_alphabetic)
            && !body.chars().any(char::is_lowercase);
        return if all_caps {
            s.to_lowercase()
        } else {
            s.to_string()
        };
    }

    let mut result = String::with_capacity(s.len());
    result.push_str(&s[..s.len() - body.len()]);

    let mut segments = body.split('_').filter(|seg| !seg.is_empty());
    if let Some(first) = segments.next() {
        result.push_str(&first.to_lowercase());
    }
    for seg in segments {
        let mut chars = seg.chars();
        if let Some(head) = chars.next() {
            result.extend(head.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}

/// camelCase → snake_case
///
/// 在大写字母开始新单词处插入下划线并整体转小写。连续大写（缩写）只在
/// 缩写结束、后跟小写字母时断开，例如 `parseHTMLDoc` → `parse_html_doc`。
pub fn camel_to_snake(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let starts_word = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if starts_word && !result.ends_with('_') {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// 递归键重写器
///
/// 按值的形状（映射 / 序列 / 标量）分派：映射的每个键经 `rename` 改写并递归其值，
/// 序列中只有映射元素会被递归，标量和嵌套序列原样返回。`opaque` 中列出的键只改写键名，其值整体透传。
#[derive(Clone, Copy)]
pub struct KeyRewriter {
    rename: fn(&str) -> String,
    opaque: &'static [&'static str],
}

impl KeyRewriter {
    pub const fn new(rename: fn(&str) -> String) -> Self {
        Self { rename, opaque: &[] }
    }

    pub const fn with_opaque(self, opaque: &'static [&'static str]) -> Self {
        Self {
            rename: self.rename,
            opaque,
        }
    }

    pub fn rewrite(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(self.rewrite_map(map)),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| match item {
                        Value::Object(map) => Value::Object(self.rewrite_map(map)),
                        other => other.clone(),
                    })
                    .collect(),
            ),
            scalar => scalar.clone(),
        }
    }

    pub fn rewrite_map(&self, map: &Map<String, Value>) -> Map<String, Value> {
        let mut out = Map::with_capacity(map.len());
        for (key, value) in map {
            let renamed = (self.rename)(key);
            let value = if self.is_opaque(key) || self.is_opaque(&renamed) {
                value.clone()
            } else {
                self.rewrite(value)
            };
            out.insert(renamed, value);
        }
        out
    }

    fn is_opaque(&self, key: &str) -> bool {
        self.opaque.contains(&key)
    }
}
