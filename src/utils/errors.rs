// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// SDK 错误类型
///
/// 参数校验失败统一以 `InvalidArgument` 报告，消息即为用户可见的错误文本。
#[derive(Error, Debug)]
pub enum SdkError {
    /// 无效参数，携带出错字段与违反的约束
    #[error("{0}")]
    InvalidArgument(String),

    /// 配置加载错误
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),
}

impl SdkError {
    /// 创建无效参数错误
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SdkError::InvalidArgument(message.into())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::InvalidArgument(err.to_string())
    }
}

impl From<validator::ValidationErrors> for SdkError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // 字段按名称排序，保证多个字段同时失败时报告结果稳定
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .iter()
            .find_map(|(field, errs)| {
                errs.first().map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid ({})", field, e.code),
                })
            })
            .unwrap_or_else(|| "Invalid request".to_string());

        SdkError::InvalidArgument(message)
    }
}

/// SDK 结果类型
pub type Result<T> = std::result::Result<T, SdkError>;
