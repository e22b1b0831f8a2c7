// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crawlrs_sdk::application::normalizer::RequestNormalizer;
use crawlrs_sdk::config::settings::NormalizationSettings;
use crawlrs_sdk::domain::models::{CrawlRequest, ScrapeOptions};
use crawlrs_sdk::SdkError;
use serde_json::json;

fn normalizer(warn_on_camel_case: bool) -> RequestNormalizer {
    RequestNormalizer::new(NormalizationSettings { warn_on_camel_case })
}

#[test]
fn test_build_same_entity_with_and_without_warnings() {
    let input = json!({"url": "https://example.com", "scrapeOptions": {"waitFor": 250}});

    let quiet: CrawlRequest = normalizer(false).build_from_value(input.clone()).unwrap();
    let noisy: CrawlRequest = normalizer(true).build_from_value(input).unwrap();

    assert_eq!(quiet, noisy);
    assert_eq!(noisy.scrape_options.unwrap().wait_for, Some(250));
}

#[test]
fn test_build_rejects_non_object_input() {
    let result: Result<ScrapeOptions, SdkError> = normalizer(true).build_from_value(json!(42));
    assert!(matches!(result, Err(SdkError::InvalidArgument(_))));
}
