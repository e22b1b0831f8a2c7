// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use crawlrs_sdk::domain::models::actions::{Action, ScreenshotAction, Viewport};
use crawlrs_sdk::domain::models::formats::{Format, JsonFormat};
use crawlrs_sdk::domain::models::parsers::{Parser, PdfParser};
use crawlrs_sdk::domain::models::{AliasedEntity, ScrapeOptions};
use crawlrs_sdk::{prepare_scrape_options, validate_scrape_options, SdkError};
use pretty_assertions::assert_eq;
use serde_json::json;

fn formats(names: &[&str]) -> Option<Vec<Format>> {
    Some(names.iter().map(|n| Format::from(*n)).collect())
}

fn assert_invalid(err: SdkError, expected: &str) {
    match err {
        SdkError::InvalidArgument(msg) => assert_eq!(msg, expected),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_validate_none_options() {
    assert!(validate_scrape_options(None).unwrap().is_none());
}

#[test]
fn test_validate_valid_options_returns_same_entity() {
    let options = ScrapeOptions {
        formats: formats(&["markdown"]),
        timeout: Some(30000),
        wait_for: Some(2000),
        ..Default::default()
    };

    let result = validate_scrape_options(Some(&options)).unwrap().unwrap();

    assert!(std::ptr::eq(result, &options));
}

#[test]
fn test_validate_rejects_non_positive_timeout() {
    for timeout in [0, -1000] {
        let options = ScrapeOptions {
            timeout: Some(timeout),
            ..Default::default()
        };
        let err = validate_scrape_options(Some(&options)).unwrap_err();
        assert_invalid(err, "Timeout must be positive");
    }
}

#[test]
fn test_validate_rejects_negative_wait_for() {
    let options = ScrapeOptions {
        wait_for: Some(-500),
        ..Default::default()
    };

    let err = validate_scrape_options(Some(&options)).unwrap_err();

    assert_invalid(err, "wait_for must be non-negative");
}

#[test]
fn test_validate_zero_wait_for_is_valid() {
    let options = ScrapeOptions {
        wait_for: Some(0),
        ..Default::default()
    };
    assert!(validate_scrape_options(Some(&options)).is_ok());
}

#[test]
fn test_validate_reports_timeout_before_wait_for() {
    let options = ScrapeOptions {
        timeout: Some(-1000),
        wait_for: Some(-500),
        ..Default::default()
    };

    let err = validate_scrape_options(Some(&options)).unwrap_err();

    assert_invalid(err, "Timeout must be positive");
}

#[test]
fn test_validate_large_values() {
    let options = ScrapeOptions {
        timeout: Some(999_999),
        wait_for: Some(999_999),
        ..Default::default()
    };
    assert!(validate_scrape_options(Some(&options)).is_ok());
}

#[test]
fn test_prepare_none_options() {
    assert!(prepare_scrape_options(None).unwrap().is_none());
}

#[test]
fn test_prepare_basic_options() {
    let options = ScrapeOptions {
        formats: formats(&["markdown"]),
        timeout: Some(30000),
        wait_for: Some(2000),
        ..Default::default()
    };

    let result = prepare_scrape_options(Some(&options)).unwrap().unwrap();

    assert_eq!(
        serde_json::Value::Object(result),
        json!({
            "formats": ["markdown"],
            "onlyMainContent": true,
            "timeout": 30000,
            "waitFor": 2000,
            "mobile": false
        })
    );
}

#[test]
fn test_prepare_converts_snake_case_fields() {
    let options = ScrapeOptions {
        include_tags: Some(vec!["h1".into(), "h2".into()]),
        exclude_tags: Some(vec!["nav".into()]),
        only_main_content: false,
        wait_for: Some(2000),
        skip_tls_verification: Some(true),
        remove_base64_images: Some(false),
        ..Default::default()
    };

    let result = prepare_scrape_options(Some(&options)).unwrap().unwrap();

    assert_eq!(result["includeTags"], json!(["h1", "h2"]));
    assert_eq!(result["excludeTags"], json!(["nav"]));
    assert_eq!(result["onlyMainContent"], json!(false));
    assert_eq!(result["waitFor"], json!(2000));
    assert_eq!(result["skipTlsVerification"], json!(true));
    assert_eq!(result["removeBase64Images"], json!(false));
    for key in result.keys() {
        assert!(!key.contains('_'), "snake_case key leaked: {key}");
    }
}

#[test]
fn test_prepare_keeps_headers_verbatim() {
    let options = ScrapeOptions {
        formats: formats(&["markdown", "html", "rawHtml"]),
        headers: Some(HashMap::from([(
            "User-Agent".to_string(),
            "Test Bot".to_string(),
        )])),
        mobile: true,
        timeout: Some(15000),
        ..Default::default()
    };

    let result = prepare_scrape_options(Some(&options)).unwrap().unwrap();

    assert_eq!(result["formats"], json!(["markdown", "html", "rawHtml"]));
    assert_eq!(result["headers"], json!({"User-Agent": "Test Bot"}));
    assert_eq!(result["mobile"], json!(true));
}

#[test]
fn test_prepare_invalid_options_propagates_error() {
    let options = ScrapeOptions {
        timeout: Some(-1000),
        ..Default::default()
    };

    let err = prepare_scrape_options(Some(&options)).unwrap_err();

    assert_invalid(err, "Timeout must be positive");
}

#[test]
fn test_prepare_default_options_emit_defaults_only() {
    let result = prepare_scrape_options(Some(&ScrapeOptions::default()))
        .unwrap()
        .unwrap();

    assert_eq!(
        serde_json::Value::Object(result),
        json!({"onlyMainContent": true, "mobile": false})
    );
}

#[test]
fn test_prepare_omits_unset_but_keeps_explicit_empty_values() {
    let options = ScrapeOptions {
        include_tags: Some(vec![]),
        block_ads: Some(false),
        max_age: Some(0),
        ..Default::default()
    };

    let result = prepare_scrape_options(Some(&options)).unwrap().unwrap();

    assert_eq!(result["includeTags"], json!([]));
    assert_eq!(result["blockAds"], json!(false));
    assert_eq!(result["maxAge"], json!(0));
    assert!(!result.contains_key("timeout"));
    assert!(!result.contains_key("formats"));
}

#[test]
fn test_json_format_schema_is_kept() {
    let format = Format::from(JsonFormat {
        prompt: Some("Extract product info".into()),
        schema: Some(json!({"type": "object", "properties": {"name": {"type": "string"}}})),
    });

    let dumped = serde_json::to_value(&format).unwrap();

    assert_eq!(dumped["type"], json!("json"));
    assert_eq!(
        dumped["schema"],
        json!({"type": "object", "properties": {"name": {"type": "string"}}})
    );
}

#[test]
fn test_prepare_does_not_convert_inside_schema() {
    let schema = json!({
        "type": "object",
        "properties": {"first_name": {"type": "string"}, "lastName": {"type": "string"}}
    });
    let options = ScrapeOptions {
        formats: Some(vec![JsonFormat {
            prompt: None,
            schema: Some(schema.clone()),
        }
        .into()]),
        ..Default::default()
    };

    let result = prepare_scrape_options(Some(&options)).unwrap().unwrap();

    assert_eq!(result["formats"][0]["schema"], schema);
}

#[test]
fn test_prepare_normalizes_format_names() {
    let options = ScrapeOptions {
        formats: formats(&["raw_html", "change_tracking", "markdown"]),
        ..Default::default()
    };

    let result = prepare_scrape_options(Some(&options)).unwrap().unwrap();

    assert_eq!(result["formats"], json!(["rawHtml", "changeTracking", "markdown"]));
}

#[test]
fn test_prepare_new_v2_fields() {
    let screenshot = ScreenshotAction {
        full_page: Some(true),
        quality: Some(90),
        viewport: Some(Viewport {
            width: 1920,
            height: 1080,
        }),
    };
    let options = ScrapeOptions {
        fast_mode: Some(true),
        use_mock: Some("test-mock".into()),
        block_ads: Some(false),
        store_in_cache: Some(false),
        max_age: Some(7_200_000),
        actions: Some(vec![Action::from(screenshot)]),
        parsers: Some(vec![Parser::from("pdf")]),
        ..Default::default()
    };

    let result = prepare_scrape_options(Some(&options)).unwrap().unwrap();

    assert_eq!(result["fastMode"], json!(true));
    assert_eq!(result["useMock"], json!("test-mock"));
    assert_eq!(result["blockAds"], json!(false));
    assert_eq!(result["storeInCache"], json!(false));
    assert_eq!(result["maxAge"], json!(7_200_000));
    assert_eq!(
        result["actions"],
        json!([{
            "type": "screenshot",
            "fullPage": true,
            "quality": 90,
            "viewport": {"width": 1920, "height": 1080}
        }])
    );
    assert_eq!(result["parsers"], json!(["pdf"]));
    for key in ["fast_mode", "use_mock", "block_ads", "store_in_cache", "max_age"] {
        assert!(!result.contains_key(key));
    }
}

#[test]
fn test_prepare_parsers_max_pages_dict() {
    let options =
        ScrapeOptions::from_value(json!({"parsers": [{"type": "pdf", "max_pages": 3}]})).unwrap();

    let result = prepare_scrape_options(Some(&options)).unwrap().unwrap();

    assert_eq!(result["parsers"][0], json!({"type": "pdf", "maxPages": 3}));
    assert!(result["parsers"][0].get("max_pages").is_none());
}

#[test]
fn test_prepare_parsers_max_pages_model_matches_dict() {
    let from_model = ScrapeOptions {
        parsers: Some(vec![PdfParser { max_pages: Some(5) }.into()]),
        ..Default::default()
    };
    let from_dict =
        ScrapeOptions::from_value(json!({"parsers": [{"type": "pdf", "maxPages": 5}]})).unwrap();

    let model_result = prepare_scrape_options(Some(&from_model)).unwrap().unwrap();
    let dict_result = prepare_scrape_options(Some(&from_dict)).unwrap().unwrap();

    assert_eq!(model_result["parsers"][0]["maxPages"], json!(5));
    assert_eq!(model_result, dict_result);
}

#[test]
fn test_prepare_converts_unknown_parser_mappings() {
    let options = ScrapeOptions::from_value(json!({
        "parsers": [{"type": "docx", "page_limit": 2}]
    }))
    .unwrap();

    let result = prepare_scrape_options(Some(&options)).unwrap().unwrap();

    assert_eq!(result["parsers"][0], json!({"type": "docx", "pageLimit": 2}));
}

#[test]
fn test_prepare_keeps_extra_keys_on_pdf_parser_mapping() {
    let options = ScrapeOptions::from_value(json!({
        "parsers": [{"type": "pdf", "maxPages": 3, "mode": "fast"}]
    }))
    .unwrap();

    assert!(matches!(
        options.parsers.as_deref(),
        Some([Parser::Raw(_)])
    ));

    let result = prepare_scrape_options(Some(&options)).unwrap().unwrap();

    assert_eq!(
        result["parsers"],
        json!([{"type": "pdf", "maxPages": 3, "mode": "fast"}])
    );
}

#[test]
fn test_prepare_trims_integration_tag() {
    let tagged = ScrapeOptions {
        integration: Some("  zapier ".into()),
        ..Default::default()
    };
    let blank = ScrapeOptions {
        integration: Some("   ".into()),
        ..Default::default()
    };

    let tagged = prepare_scrape_options(Some(&tagged)).unwrap().unwrap();
    let blank = prepare_scrape_options(Some(&blank)).unwrap().unwrap();

    assert_eq!(tagged["integration"], json!("zapier"));
    assert!(!blank.contains_key("integration"));
}
