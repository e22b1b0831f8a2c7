// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 字段别名解析
//!
//! 请求实体在构造时接受任意混合 snake_case / camelCase 的键：
//! 先把每个顶层键解析为 snake_case，再交给实体自己的 `normalize_nested`
//! 处理嵌套实体，最后反序列化为强类型结构。
//!
//! 只改写实体已知的层级，`headers`、`schema` 这类不透明的值不会被触碰。

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::utils::errors::{Result, SdkError};
use crate::utils::naming;

/// 可通过混合大小写键构造的实体
pub trait AliasedEntity: DeserializeOwned {
    /// 规范化嵌套实体字段，调用时顶层键已经是 snake_case
    fn normalize_nested(_fields: &mut Map<String, Value>) {}

    /// 从字段映射构造实体
    ///
    /// 同一字段以两种写法同时出现时按插入顺序后写者生效。
    fn from_fields(fields: Map<String, Value>) -> Result<Self> {
        let fields = normalize_fields::<Self>(fields);
        Ok(serde_json::from_value(Value::Object(fields))?)
    }

    /// 从 JSON 值构造实体，值必须是对象
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            other => Err(SdkError::invalid_argument(format!(
                "expected an object of fields, got {}",
                value_kind(&other)
            ))),
        }
    }
}

/// 把键解析为 snake_case 字段名
///
/// 不含大写字母的键视为已是 snake_case 直接使用，否则先查命名表再回退到通用转换。
pub fn resolve_key(key: &str) -> String {
    if key.chars().any(char::is_uppercase) {
        naming::to_snake(key)
    } else {
        key.to_string()
    }
}

/// 解析顶层键并递归规范化 `T` 声明的嵌套实体
pub fn normalize_fields<T: AliasedEntity>(fields: Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::with_capacity(fields.len());

    for (key, value) in fields {
        let resolved = resolve_key(&key);
        if resolved != key {
            trace!(alias = %key, field = %resolved, "resolved field alias");
        }
        if out.contains_key(&resolved) {
            debug!(
                field = %resolved,
                alias = %key,
                "field supplied under both spellings, last value wins"
            );
        }
        out.insert(resolved, value);
    }

    T::normalize_nested(&mut out);
    out
}

/// 规范化 `fields[key]`：对象按 `T` 处理，数组逐个处理其中的对象元素
pub fn normalize_entry<T: AliasedEntity>(fields: &mut Map<String, Value>, key: &str) {
    match fields.get_mut(key) {
        Some(Value::Object(map)) => normalize_in_place::<T>(map),
        Some(Value::Array(items)) => {
            for item in items.iter_mut() {
                if let Value::Object(map) = item {
                    normalize_in_place::<T>(map);
                }
            }
        }
        _ => {}
    }
}

fn normalize_in_place<T: AliasedEntity>(map: &mut Map<String, Value>) {
    let taken = std::mem::take(map);
    *map = normalize_fields::<T>(taken);
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
