// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了 SDK 的请求实体，包括：
/// - 抓取选项（scrape_options）：单页抓取参数，被其他请求嵌套使用
/// - 动作 / 格式 / 解析器（actions、formats、parsers）：嵌套在抓取选项中的子实体
/// - 爬取、站点地图、提取、搜索、批量抓取请求
///
/// 所有实体都实现 [`aliases::AliasedEntity`]，构造时接受 snake_case 与 camelCase 混合的字段名。
pub mod actions;
pub mod aliases;
pub mod batch_scrape;
pub mod crawl;
pub mod extract;
pub mod formats;
pub mod map;
pub mod parsers;
pub mod scrape_options;
pub mod search;

pub use actions::{Action, ScreenshotAction, Viewport};
pub use aliases::AliasedEntity;
pub use batch_scrape::BatchScrapeRequest;
pub use crawl::{CrawlRequest, Webhook, WebhookConfig};
pub use extract::ExtractRequest;
pub use formats::{Format, JsonFormat};
pub use map::{MapOptions, SitemapMode};
pub use parsers::{Parser, PdfParser};
pub use scrape_options::{Location, ScrapeOptions};
pub use search::{SearchRequest, SearchSource};
