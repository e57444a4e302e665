//! End-to-end analysis scenarios against local mock servers.
//!
//! Each test spins up an axum server on an ephemeral 127.0.0.1 port and runs
//! the full pipeline against it. The servers speak plain HTTP, so any
//! redirect hop they issue is an insecure hop by definition; scenarios
//! that need a secure chain simply avoid redirecting.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use redirect_audit::{analyze_url, to_json, Config};

/// Binds an ephemeral port, serves `app` in the background, and returns the
/// server's base URL.
async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Mock server failed");
    });

    format!("http://{addr}")
}

fn test_config(timeout_seconds: u64) -> Config {
    Config {
        timeout_seconds,
        ..Default::default()
    }
}

#[tokio::test]
async fn single_200_with_no_links_yields_one_clean_hop() {
    let app = Router::new().route(
        "/",
        get(|| async { Html("<html><body><p>nothing to see</p></body></html>") }),
    );
    let base = serve(app).await;
    let target = format!("{base}/");

    let result = analyze_url(&target, &test_config(5)).await;

    assert_eq!(result.redirect_chain.len(), 1);
    assert_eq!(result.redirect_chain[0].url, target);
    assert_eq!(result.redirect_chain[0].status, 200);
    assert!(!result.redirect_chain_contains_http);
    assert!(result.static_insecure_links.is_empty());
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn permanent_redirect_to_http_target_flags_the_chain() {
    let app = Router::new()
        .route(
            "/start",
            get(|| async {
                (
                    StatusCode::MOVED_PERMANENTLY,
                    [(header::LOCATION, "/final")],
                )
            }),
        )
        .route("/final", get(|| async { Html("<p>done</p>") }));
    let base = serve(app).await;

    let result = analyze_url(&format!("{base}/start"), &test_config(5)).await;

    assert_eq!(result.redirect_chain.len(), 2);
    assert_eq!(result.redirect_chain[0].status, 301);
    assert_eq!(result.redirect_chain[0].url, format!("{base}/start"));
    assert_eq!(result.redirect_chain[1].status, 200);
    // The relative Location was resolved against the redirecting URL
    assert_eq!(result.redirect_chain[1].url, format!("{base}/final"));
    assert!(result.redirect_chain_contains_http);
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn final_page_links_are_classified_and_resolved() {
    let page = r#"<html><head>
        <meta http-equiv="refresh" content="3;url=http://evil.example/">
    </head><body>
        <a href="http://insecure.example/x">bad</a>
        <a href="https://safe.example/y">good</a>
        <a href="/relative">relative</a>
    </body></html>"#;

    let app = Router::new()
        .route(
            "/a",
            get(|| async { (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/b")]) }),
        )
        .route(
            "/b",
            get(|| async { (StatusCode::FOUND, [(header::LOCATION, "/page")]) }),
        )
        .route("/page", get(move || async move { Html(page) }));
    let base = serve(app).await;

    let result = analyze_url(&format!("{base}/a"), &test_config(5)).await;

    let statuses: Vec<u16> = result.redirect_chain.iter().map(|h| h.status).collect();
    assert_eq!(statuses, vec![301, 302, 200]);

    // Anchors in document order, then the meta-refresh target; the relative
    // href inherits the (plain-HTTP) scheme of the mock server
    assert_eq!(
        result.static_insecure_links,
        vec![
            "http://insecure.example/x".to_string(),
            format!("{base}/relative"),
            "http://evil.example/".to_string(),
        ]
    );
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn hop_budget_exhaustion_leaves_last_resolved_url_as_terminal() {
    async fn loop_hop(Path(n): Path<u32>) -> impl IntoResponse {
        if n < 5 {
            (
                StatusCode::FOUND,
                [(header::LOCATION, format!("/loop/{}", n + 1))],
            )
                .into_response()
        } else {
            // Only the final-fetch stage ever gets this far
            (StatusCode::FOUND, [(header::LOCATION, "/end".to_string())]).into_response()
        }
    }

    let app = Router::new()
        .route("/loop/{n}", get(loop_hop))
        .route(
            "/end",
            get(|| async { Html(r#"<a href="http://terminal-marker.example/">m</a>"#) }),
        );
    let base = serve(app).await;

    let result = analyze_url(&format!("{base}/loop/0"), &test_config(5)).await;

    // The walker stopped at the hop budget with the chain still redirecting
    assert_eq!(result.redirect_chain.len(), 5);
    assert!(result.redirect_chain.iter().all(|h| h.status == 302));
    let urls: Vec<&str> = result
        .redirect_chain
        .iter()
        .map(|h| h.url.as_str())
        .collect();
    assert_eq!(urls[0], format!("{base}/loop/0"));
    assert_eq!(urls[4], format!("{base}/loop/4"));
    assert!(result.redirect_chain_contains_http);

    // Stage 2 fetched the unvisited /loop/5 with redirects followed, which
    // proves the terminal URL was the last resolved target
    assert_eq!(
        result.static_insecure_links,
        vec!["http://terminal-marker.example/".to_string()]
    );
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn final_fetch_timeout_keeps_chain_and_records_one_error() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new().route(
        "/slow",
        get({
            let hits = Arc::clone(&hits);
            move || {
                let hits = Arc::clone(&hits);
                async move {
                    if hits.fetch_add(1, Ordering::SeqCst) == 0 {
                        // The walker's request is served immediately
                        Html("<p>fast</p>").into_response()
                    } else {
                        // The final-fetch request outlives the client timeout
                        tokio::time::sleep(Duration::from_secs(5)).await;
                        Html("<p>slow</p>").into_response()
                    }
                }
            }
        }),
    );
    let base = serve(app).await;

    let result = analyze_url(&format!("{base}/slow"), &test_config(1)).await;

    assert_eq!(result.redirect_chain.len(), 1);
    assert_eq!(result.redirect_chain[0].status, 200);
    assert_eq!(result.errors.len(), 1);
    assert!(
        result.errors[0].starts_with("Failed to fetch final page:"),
        "unexpected error tag: {}",
        result.errors[0]
    );
    assert!(result.static_insecure_links.is_empty());
}

#[tokio::test]
async fn unreachable_first_hop_yields_empty_chain_and_one_redirect_error() {
    // Bind and immediately drop a listener so the port is (almost certainly)
    // closed when the analysis runs
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    drop(listener);

    let result = analyze_url(&format!("http://{addr}/"), &test_config(2)).await;

    assert!(result.redirect_chain.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(
        result.errors[0].starts_with("Redirect error:"),
        "unexpected error tag: {}",
        result.errors[0]
    );
    assert!(result.static_insecure_links.is_empty());
    assert!(!result.redirect_chain_contains_http);
}

#[tokio::test]
async fn redirect_status_without_location_is_terminal() {
    let app = Router::new().route(
        "/noloc",
        get(|| async { (StatusCode::FOUND, "no location header") }),
    );
    let base = serve(app).await;

    let result = analyze_url(&format!("{base}/noloc"), &test_config(5)).await;

    assert_eq!(result.redirect_chain.len(), 1);
    assert_eq!(result.redirect_chain[0].status, 302);
    // No target was ever resolved, so the sticky flag stays unset
    assert!(!result.redirect_chain_contains_http);
    assert!(result.errors.is_empty());
    assert!(result.static_insecure_links.is_empty());
}

#[tokio::test]
async fn repeated_analysis_of_fixed_responses_is_deterministic() {
    let app = Router::new()
        .route(
            "/",
            get(|| async { (StatusCode::SEE_OTHER, [(header::LOCATION, "/page")]) }),
        )
        .route(
            "/page",
            get(|| async { Html(r#"<a href="http://dup.example/">x</a>"#) }),
        );
    let base = serve(app).await;
    let target = format!("{base}/");
    let config = test_config(5);

    let first = analyze_url(&target, &config).await;
    let second = analyze_url(&target, &config).await;

    assert_eq!(first, second);
    assert_eq!(to_json(&first), to_json(&second));
}

#[tokio::test]
async fn json_output_matches_ingestion_format() {
    let app = Router::new().route(
        "/",
        get(|| async { Html(r#"<a href="http://insecure.example/">x</a>"#) }),
    );
    let base = serve(app).await;
    let target = format!("{base}/");

    let result = analyze_url(&target, &test_config(5)).await;
    let parsed: serde_json::Value =
        serde_json::from_str(&to_json(&result)).expect("report JSON must parse");

    assert_eq!(parsed["target_url"], target);
    assert_eq!(parsed["redirect_chain"][0]["url"], target);
    assert_eq!(parsed["redirect_chain"][0]["status"], 200);
    assert_eq!(parsed["redirect_chain_contains_http"], false);
    assert_eq!(
        parsed["static_insecure_links"][0],
        "http://insecure.example/"
    );
    assert!(parsed["errors"].as_array().unwrap().is_empty());
}
