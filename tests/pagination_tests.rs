//! End-to-end pagination tests
//!
//! These tests run real partition traversals against wiremock servers and
//! verify the page sequencing, termination, and failure-containment
//! behavior of the collection phase.

use award_harvest::client::SpendingClient;
use award_harvest::config::{
    ApiConfig, AwardCategory, CategoryCatalog, Config, HarvesterConfig, OutputConfig, QueryConfig,
};
use award_harvest::harvest::{Paginator, Partition, RateLimiter, WorkerPool};
use award_harvest::HarvestError;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/api/v2/search/spending_by_award/";

/// Creates a test configuration pointed at the given mock server
fn create_test_config(server_uri: &str) -> Config {
    Config {
        harvester: HarvesterConfig {
            concurrency: 2,
            request_interval_ms: 1,
            request_timeout_secs: 5,
            page_limit: 100,
            max_pages_per_partition: 50,
            start_year: 2020,
            end_year: Some(2020),
        },
        api: ApiConfig {
            search_url: format!("{}{}", server_uri, SEARCH_PATH),
            awards_url: format!("{}/api/v2/awards/", server_uri),
            user_agent: "award-harvest-tests/1.0".to_string(),
        },
        query: QueryConfig {
            keywords: vec!["University of California".to_string()],
            recipient_types: vec![],
            place_of_performance: vec![],
            start_date: "2019-10-01".to_string(),
            end_date: "2020-09-30".to_string(),
        },
        output: OutputConfig {
            base_dir: "./out".to_string(),
            batch_prefix: "uc".to_string(),
        },
    }
}

fn create_paginator(config: &Config) -> Paginator {
    let client = SpendingClient::new(config).expect("Failed to build client");
    Paginator::new(
        Arc::new(client),
        Arc::new(RateLimiter::new(Duration::from_millis(1))),
        Arc::new(config.clone()),
    )
}

fn fy2020_partition(category: AwardCategory) -> Partition {
    Partition {
        category,
        fiscal_year: 2020,
        start_date: "2019-10-01".to_string(),
        end_date: "2020-09-30".to_string(),
    }
}

/// Builds a page body with `count` minimal records
fn page_body(first_id: usize, count: usize, has_next: bool) -> serde_json::Value {
    let results: Vec<serde_json::Value> = (0..count)
        .map(|offset| {
            serde_json::json!({
                "Award ID": format!("AWD-{}", first_id + offset),
                "generated_internal_id": format!("GEN_{}", first_id + offset)
            })
        })
        .collect();

    serde_json::json!({
        "results": results,
        "page_metadata": {"page": 1, "hasNext": has_next}
    })
}

/// Parses the `page` numbers of every search request the server saw
async fn received_page_numbers(server: &MockServer) -> Vec<u64> {
    server
        .received_requests()
        .await
        .expect("Request recording disabled")
        .iter()
        .filter(|request| request.url.path() == SEARCH_PATH)
        .map(|request| {
            let body: serde_json::Value =
                serde_json::from_slice(&request.body).expect("Search body was not JSON");
            body["page"].as_u64().expect("Search body had no page")
        })
        .collect()
}

#[tokio::test]
async fn test_two_page_partition_collects_all_records() {
    let mock_server = MockServer::start().await;

    // Page 1: full page of 100 with a continuation
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(serde_json::json!({"page": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 100, true)))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Page 2: the remaining 37, no continuation
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(serde_json::json!({"page": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(100, 37, false)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let pool = WorkerPool::new(1);
    let (results, outcome) = pool
        .run(
            vec![fy2020_partition(AwardCategory::Contracts)],
            create_paginator(&config),
            Arc::new(CategoryCatalog::builtin()),
            CancellationToken::new(),
        )
        .await
        .expect("Pool run failed");

    let contracts = results
        .get(&AwardCategory::Contracts)
        .expect("No contracts entry");
    assert_eq!(contracts.len(), 137, "Expected all records of both pages");
    assert_eq!(outcome.completed, 1);
    assert!(outcome.failures.is_empty());

    // The partition sent the contract type codes on every page
    let requests = mock_server.received_requests().await.unwrap();
    for request in &requests {
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(
            body["filters"]["award_type_codes"],
            serde_json::json!(["A", "B", "C", "D"])
        );
    }
}

#[tokio::test]
async fn test_page_sequence_has_no_gaps() {
    let mock_server = MockServer::start().await;

    for page in 1..=3u32 {
        Mock::given(method("POST"))
            .and(path(SEARCH_PATH))
            .and(body_partial_json(serde_json::json!({"page": page})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(page as usize * 10, 5, page < 3)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let config = create_test_config(&mock_server.uri());
    let catalog = CategoryCatalog::builtin();
    let paginator = create_paginator(&config);

    let records = paginator
        .collect_window(
            catalog.spec(AwardCategory::Grants),
            "2019-10-01",
            "2020-09-30",
            "grants/FY2020",
            &CancellationToken::new(),
        )
        .await
        .expect("Traversal failed");

    assert_eq!(records.len(), 15);
    assert_eq!(received_page_numbers(&mock_server).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_empty_page_with_has_next_true_terminates() {
    let mock_server = MockServer::start().await;

    // The upstream may claim a continuation on an empty page
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(serde_json::json!({"page": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [],
            "page_metadata": {"page": 1, "hasNext": true}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Page 2 must never be requested
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(serde_json::json!({"page": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 1, false)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let catalog = CategoryCatalog::builtin();
    let paginator = create_paginator(&config);

    let records = paginator
        .collect_window(
            catalog.spec(AwardCategory::Contracts),
            "2019-10-01",
            "2020-09-30",
            "contracts/FY2020",
            &CancellationToken::new(),
        )
        .await
        .expect("Traversal failed");

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_missing_page_metadata_terminates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"Award ID": "AWD-1"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let catalog = CategoryCatalog::builtin();
    let paginator = create_paginator(&config);

    let records = paginator
        .collect_window(
            catalog.spec(AwardCategory::Contracts),
            "2019-10-01",
            "2020-09-30",
            "contracts/FY2020",
            &CancellationToken::new(),
        )
        .await
        .expect("Traversal failed");

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_failed_partition_leaves_siblings_intact() {
    let mock_server = MockServer::start().await;

    // Contracts requests are rejected by the upstream
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(serde_json::json!({
            "filters": {"award_type_codes": ["A", "B", "C", "D"]}
        })))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    // Grants requests succeed
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(serde_json::json!({
            "filters": {"award_type_codes": ["02", "03", "04", "05"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 3, false)))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let pool = WorkerPool::new(2);
    let (results, outcome) = pool
        .run(
            vec![
                fy2020_partition(AwardCategory::Contracts),
                fy2020_partition(AwardCategory::Grants),
            ],
            create_paginator(&config),
            Arc::new(CategoryCatalog::builtin()),
            CancellationToken::new(),
        )
        .await
        .expect("Pool run failed");

    assert_eq!(outcome.completed, 1);
    assert_eq!(outcome.failures.len(), 1);
    assert!(
        outcome.failures[0].starts_with("contracts/FY2020"),
        "Unexpected failure label: {}",
        outcome.failures[0]
    );

    assert!(results.get(&AwardCategory::Contracts).is_none());
    assert_eq!(results.get(&AwardCategory::Grants).unwrap().len(), 3);
}

#[tokio::test]
async fn test_partition_failure_discards_partial_pages() {
    let mock_server = MockServer::start().await;

    // Page 1 succeeds, page 2 is malformed JSON
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(serde_json::json!({"page": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 100, true)))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(serde_json::json!({"page": 2})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{\"results\": [")
                .insert_header("content-type", "application/json"),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let catalog = CategoryCatalog::builtin();
    let paginator = create_paginator(&config);

    let result = paginator
        .collect_window(
            catalog.spec(AwardCategory::Contracts),
            "2019-10-01",
            "2020-09-30",
            "contracts/FY2020",
            &CancellationToken::new(),
        )
        .await;

    match result {
        Err(HarvestError::Client(error)) => {
            assert!(
                error.to_string().contains("decode"),
                "Expected a decode failure, got: {}",
                error
            );
        }
        other => panic!("Expected a client error, got: {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn test_page_cap_fails_runaway_partition() {
    let mock_server = MockServer::start().await;

    // Every page claims another one follows
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 1, true)))
        .expect(3)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server.uri());
    config.harvester.max_pages_per_partition = 3;
    let catalog = CategoryCatalog::builtin();
    let paginator = create_paginator(&config);

    let result = paginator
        .collect_window(
            catalog.spec(AwardCategory::Contracts),
            "2019-10-01",
            "2020-09-30",
            "contracts/FY2020",
            &CancellationToken::new(),
        )
        .await;

    assert!(
        matches!(result, Err(HarvestError::PageCap { cap: 3, .. })),
        "Expected the page cap to trip"
    );
    assert_eq!(received_page_numbers(&mock_server).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_loans_sort_by_loan_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 1, false)))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let catalog = CategoryCatalog::builtin();
    let paginator = create_paginator(&config);
    let token = CancellationToken::new();

    paginator
        .collect_window(
            catalog.spec(AwardCategory::Loans),
            "2019-10-01",
            "2020-09-30",
            "loans/FY2020",
            &token,
        )
        .await
        .expect("Loan traversal failed");
    paginator
        .collect_window(
            catalog.spec(AwardCategory::Grants),
            "2019-10-01",
            "2020-09-30",
            "grants/FY2020",
            &token,
        )
        .await
        .expect("Grant traversal failed");

    let requests = mock_server.received_requests().await.unwrap();
    let sorts: Vec<String> = requests
        .iter()
        .map(|request| {
            let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
            body["sort"].as_str().unwrap().to_string()
        })
        .collect();

    assert_eq!(sorts, vec!["Loan Value", "Award Amount"]);
}
