// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{Map, Value};
use tracing::warn;

use crate::application::validation::detect_camel_case_keys;
use crate::config::settings::NormalizationSettings;
use crate::domain::models::AliasedEntity;
use crate::utils::errors::Result;

// === Section: Normalizer Definition ===

/// 请求规范化器
///
/// 按配置构造请求实体；开启 `warn_on_camel_case` 时，为调用方仍在使用的
/// camelCase 字段名逐个输出迁移提示。
pub struct RequestNormalizer {
    settings: NormalizationSettings,
}

// === Section: Implementation ===

impl RequestNormalizer {
    pub fn new(settings: NormalizationSettings) -> Self {
        Self { settings }
    }

    /// 从混合大小写的字段映射构造实体
    pub fn build<T: AliasedEntity>(&self, fields: Map<String, Value>) -> Result<T> {
        if self.settings.warn_on_camel_case {
            for (key, snake) in detect_camel_case_keys(&fields) {
                warn!(
                    key = %key,
                    suggested = %snake,
                    entity = std::any::type_name::<T>(),
                    "camelCase field name accepted, prefer snake_case"
                );
            }
        }

        T::from_fields(fields)
    }

    /// 从 JSON 值构造实体，值必须是对象
    pub fn build_from_value<T: AliasedEntity>(&self, value: Value) -> Result<T> {
        match value {
            Value::Object(fields) => self.build(fields),
            other => T::from_value(other),
        }
    }
}
