// API integration tests
//
// Purpose: exercise the JSON API and HTML pages end to end through the router
// Run with: cargo test --features web --test api_integration_tests

#[cfg(feature = "web")]
mod web_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use sukino_site::{create_router, AppState};
    use tower::ServiceExt; // for oneshot

    // Helper: router over the real catalog
    fn test_app() -> axum::Router {
        let state = AppState::new().expect("catalog should load");
        create_router(state)
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    // Helper: response body as text
    async fn text_response(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("body is not UTF-8")
    }

    async fn get(uri: &str) -> axum::response::Response {
        test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Menu JSON API
    // =========================================================================

    #[tokio::test]
    async fn test_full_menu() {
        let response = get("/api/menu").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        let categories = body["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 9);
        assert_eq!(categories[0]["id"], "breakfast");
        assert_eq!(categories[0]["sections"][0]["id"], "waffles-pancakes");
    }

    #[tokio::test]
    async fn test_get_category_with_flattened_items() {
        let response = get("/api/menu/categories/breakfast").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["category"]["name"], "All Day Breakfast");

        let items = body["items"].as_array().unwrap();
        assert_eq!(items[0]["id"], "waffles");
        assert_eq!(items[1]["id"], "pancakes");
        assert_eq!(items[0]["price"], 235);
    }

    #[tokio::test]
    async fn test_get_category_not_found() {
        let response = get("/api/menu/categories/does-not-exist").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("does-not-exist"));
    }

    #[tokio::test]
    async fn test_get_item() {
        let response = get("/api/menu/items/shakshuka").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["item"]["name"], "Shakshuka");
        assert_eq!(body["item"]["price"], 325);
        let tags = body["item"]["tags"].as_array().unwrap();
        assert!(tags.iter().any(|t| t == "sukino_special"));
    }

    #[tokio::test]
    async fn test_get_item_not_found() {
        let response = get("/api/menu/items/does-not-exist").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_items_by_tag() {
        let response = get("/api/menu/tags/sukino_special").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["tag"], "sukino_special");
        assert_eq!(
            body["count"].as_u64().unwrap() as usize,
            body["items"].as_array().unwrap().len()
        );

        let ids: Vec<&str> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&"shakshuka"));
        assert!(!ids.contains(&"waffles"));
    }

    #[tokio::test]
    async fn test_unknown_tag_is_bad_request() {
        let response = get("/api/menu/tags/vegan").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("vegan"));
    }

    // =========================================================================
    // Section 3: HTML Pages
    // =========================================================================

    #[tokio::test]
    async fn test_home_page_renders() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = text_response(response).await;
        assert!(body.contains("Sukino Cafe"));
        assert!(body.contains("Sukino Specials"));
    }

    #[tokio::test]
    async fn test_menu_page_defaults_to_first_category() {
        let response = get("/menu").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = text_response(response).await;
        assert!(body.contains("All Day Breakfast"));
        assert!(body.contains("Waffles"));
    }

    #[tokio::test]
    async fn test_menu_page_selects_category_from_query() {
        let response = get("/menu?category=coffee").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = text_response(response).await;
        assert!(body.contains("Carefully sourced beans, expertly brewed"));
        assert!(body.contains("ESPRESSO"));
    }

    #[tokio::test]
    async fn test_menu_page_unknown_category_falls_back() {
        let response = get("/menu?category=does-not-exist").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = text_response(response).await;
        // Falls back to the first catalog entry
        assert!(body.contains("All Day Breakfast"));
    }

    #[tokio::test]
    async fn test_story_and_visit_pages_render() {
        let response = get("/our-story").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = text_response(response).await;
        assert!(body.contains("Our Story"));
        assert!(body.contains("built on love"));

        let response = get("/visit").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = text_response(response).await;
        assert!(body.contains("Visit Us"));
        assert!(body.contains("Banashankari"));
        assert!(body.contains("9 AM"));
    }
}
