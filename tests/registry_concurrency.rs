mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Duration;
use shortlink::api::routes::public_routes;
use shortlink::domain::registry::RegistryError;
use shortlink::utils::code_generator::RandomCodeGenerator;
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolves_are_not_lost() {
    const TASKS: usize = 500;

    let (registry, _clock) = common::create_test_registry(Arc::new(RandomCodeGenerator::default()));
    let link = registry
        .create("https://example.com".to_string(), 60)
        .unwrap();

    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let registry = registry.clone();
            let code = link.code.clone();
            tokio::spawn(async move { registry.resolve(&code) })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "https://example.com");
    }

    assert_eq!(
        registry.inspect(&link.code).unwrap().click_count,
        TASKS as u64
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_and_resolves() {
    const LINKS: usize = 50;
    const CLICKS_PER_LINK: usize = 20;

    let (registry, _clock) = common::create_test_registry(Arc::new(RandomCodeGenerator::default()));

    let creates: Vec<_> = (0..LINKS)
        .map(|i| {
            let registry = registry.clone();
            tokio::spawn(async move {
                registry
                    .create(format!("https://example.com/{i}"), 10)
                    .unwrap()
            })
        })
        .collect();

    let mut links = Vec::with_capacity(LINKS);
    for handle in creates {
        links.push(handle.await.unwrap());
    }

    let codes: HashSet<_> = links.iter().map(|l| l.code.clone()).collect();
    assert_eq!(codes.len(), LINKS);

    let resolves: Vec<_> = links
        .iter()
        .flat_map(|link| std::iter::repeat_n(link.code.clone(), CLICKS_PER_LINK))
        .map(|code| {
            let registry = registry.clone();
            tokio::spawn(async move { registry.resolve(&code).unwrap() })
        })
        .collect();

    for handle in resolves {
        handle.await.unwrap();
    }

    for (i, link) in links.iter().enumerate() {
        let inspected = registry.inspect(&link.code).unwrap();
        assert_eq!(inspected.target_url, format!("https://example.com/{i}"));
        assert_eq!(inspected.click_count, CLICKS_PER_LINK as u64);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolves_after_expiry_do_not_count() {
    const TASKS: usize = 200;

    let (registry, clock) = common::create_test_registry(Arc::new(RandomCodeGenerator::default()));
    let link = registry
        .create("https://example.com".to_string(), 1)
        .unwrap();

    clock.advance(Duration::minutes(2));

    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let registry = registry.clone();
            let code = link.code.clone();
            tokio::spawn(async move { registry.resolve(&code) })
        })
        .collect();

    for handle in handles {
        assert!(matches!(
            handle.await.unwrap(),
            Err(RegistryError::Expired { .. })
        ));
    }

    assert_eq!(registry.inspect(&link.code).unwrap().click_count, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_http_redirects_are_all_counted() {
    const REQUESTS: usize = 200;

    let (state, _clock) = common::create_test_state_with_codes(&["ab12cd"]);
    let app: Router = public_routes().with_state(state);

    let create = Request::post("/shorten")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("url=https%3A%2F%2Fexample.com&validity=5"))
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let handles: Vec<_> = (0..REQUESTS)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let request = Request::get("/redirect?code=ab12cd")
                    .body(Body::empty())
                    .unwrap();
                app.oneshot(request).await.unwrap().status()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::TEMPORARY_REDIRECT);
    }

    let request = Request::get("/stats?code=ab12cd")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["click_count"], REQUESTS as u64);
}
