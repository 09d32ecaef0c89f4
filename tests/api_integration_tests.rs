// API Integration Tests
//
// Purpose: Exercise every endpoint against the built-in catalog
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use entry_catalog::{create_router, AppState, Catalog};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    fn create_test_app() -> axum::Router {
        create_router(AppState::new(Catalog::builtin()))
    }

    async fn get(uri: &str) -> axum::response::Response {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["pages"].as_u64().unwrap() > 0);
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Page listing and page views
    // =========================================================================

    #[tokio::test]
    async fn test_list_pages_in_registration_order() {
        let response = get("/api/pages").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let keys: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["topic_key"].as_str().unwrap())
            .collect();
        let expected: Vec<&str> = Catalog::builtin().registry.keys().collect();
        assert_eq!(keys, expected);
    }

    #[tokio::test]
    async fn test_get_page_view() {
        let response = get("/api/pages/sorting").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["topic_key"], "sorting");
        assert_eq!(body["tab"]["base_path"], "/sorting");
        assert_eq!(body["tab"]["count"], 14);

        let sections: Vec<&str> = body["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(sections, vec!["Comparison Sorts", "Sorting Concepts", "Non-Comparison Sorts"]);
    }

    #[tokio::test]
    async fn test_page_without_tabs_has_null_tab() {
        let body = json_response(get("/api/pages/data-structures").await).await;
        assert!(body["tab"].is_null());
        assert_eq!(body["cross_reference"], "graphs");
    }

    #[tokio::test]
    async fn test_unknown_page_is_404() {
        let response = get("/api/pages/no-such-topic").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("no-such-topic"));
    }

    // =========================================================================
    // Section 3: HTML preview
    // =========================================================================

    #[tokio::test]
    async fn test_html_preview() {
        let response = get("/pages/graphs").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<title>Graphs</title>"));
        assert!(html.contains("<h2>Traversal</h2>"));
    }

    #[tokio::test]
    async fn test_html_preview_escapes_corpus_html() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("groups")).unwrap();
        std::fs::write(
            dir.path().join("groups/g.json"),
            r#"[{"signature": "f()", "description": "<script>alert(1)</script>", "complexity": "O(1)", "section": "S", "example": ""}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("pages.json"),
            r#"[{"topic_key": "p", "label": "<b>P</b>", "intro_text": "<img src=x onerror=alert(2)>", "steps": [{"group": "g"}]}]"#,
        )
        .unwrap();

        let app = create_router(AppState::new(Catalog::load_dir(dir.path()).unwrap()));
        let response = app
            .oneshot(Request::builder().uri("/pages/p").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<b>P</b>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[tokio::test]
    async fn test_html_preview_unknown_page() {
        let response = get("/pages/no-such-topic").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
