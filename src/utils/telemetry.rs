// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::LoggingSettings;

const DEFAULT_FILTER: &str = "info,crawlrs_sdk=debug";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into())
}

/// 初始化全局日志订阅器
///
/// `RUST_LOG` 优先，否则使用默认过滤规则。已存在全局订阅器时会 panic，
/// 库内调用请使用 [`try_init_telemetry`]。
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_FILTER))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// 按配置初始化日志订阅器，已初始化时返回错误而不是 panic
pub fn try_init_telemetry(
    settings: &LoggingSettings,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let fallback = if settings.filter.trim().is_empty() {
        DEFAULT_FILTER
    } else {
        settings.filter.as_str()
    };

    tracing_subscriber::registry()
        .with(env_filter(fallback))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
