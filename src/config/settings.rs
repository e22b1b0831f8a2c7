// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// SDK 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 日志配置
    pub logging: LoggingSettings,
    /// 字段名规范化配置
    pub normalization: NormalizationSettings,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// `RUST_LOG` 未设置时使用的过滤规则
    pub filter: String,
}

/// 字段名规范化配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizationSettings {
    /// 构造请求时是否对 camelCase 字段名输出迁移警告
    pub warn_on_camel_case: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingSettings {
                filter: "info,crawlrs_sdk=debug".to_string(),
            },
            normalization: NormalizationSettings {
                warn_on_camel_case: false,
            },
        }
    }
}

impl Settings {
    /// 从 `./config` 目录和环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Path::new("config"))
    }

    /// 从指定目录加载配置
    ///
    /// 依次叠加：默认值、`{dir}/default`、`{dir}/{APP_ENVIRONMENT}`、
    /// 以 `CRAWLRS_SDK` 为前缀的环境变量（层级分隔符 `__`）。
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let defaults = Settings::default();

        let builder = Config::builder()
            .set_default("logging.filter", defaults.logging.filter)?
            .set_default(
                "normalization.warn_on_camel_case",
                defaults.normalization.warn_on_camel_case,
            )?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(&env)).required(false))
            .add_source(Environment::with_prefix("CRAWLRS_SDK").separator("__"));

        builder.build()?.try_deserialize()
    }
}
