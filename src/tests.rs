#[cfg(test)]
mod integration_tests {
    use crate::test_utils::test_utils::{
        failing_upstream, healthy_upstream, setup_test_app, spawn_upstream, target_in_window,
        unreachable_upstream,
    };
    use crate::upstream::UpstreamClient;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::{Days, Local};
    use common::{ErrorResponse, HealthResponse, PredictionResponse};
    use predict::window::check_window;
    use predict::{derive_view, PredictionController, RequestState};
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_health_check_reports_reachable_upstream() {
        let upstream = spawn_upstream(healthy_upstream()).await;
        let server = TestServer::new(setup_test_app(&upstream)).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.upstream.as_deref(), Some("reachable"));
    }

    #[tokio::test]
    async fn test_health_check_reports_unreachable_upstream() {
        let upstream = unreachable_upstream().await;
        let server = TestServer::new(setup_test_app(&upstream)).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.upstream.as_deref(), Some("unreachable"));
    }

    #[tokio::test]
    async fn test_predict_relays_forecast() {
        let upstream = spawn_upstream(healthy_upstream()).await;
        let server = TestServer::new(setup_test_app(&upstream)).unwrap();
        let target = target_in_window();

        let response = server
            .post("/api/predict/")
            .json(&json!({ "target_date": target.format("%Y-%m-%d").to_string() }))
            .await;

        response.assert_status(StatusCode::OK);
        let raw: serde_json::Value = response.json();
        assert!(raw["bokeh_plot"].is_object());

        let body: PredictionResponse = response.json();
        assert_eq!(body.target_date, Some(target));
        let view = derive_view(&body).unwrap();
        assert!(view.is_up_trend);
        assert!(view.has_chart);
    }

    #[tokio::test]
    async fn test_predict_requires_target_date() {
        let upstream = unreachable_upstream().await;
        let server = TestServer::new(setup_test_app(&upstream)).unwrap();

        let response = server.post("/api/predict/").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(
            body.error,
            "Parameter target_date diperlukan (format: YYYY-MM-DD)"
        );
    }

    #[tokio::test]
    async fn test_predict_rejects_malformed_date() {
        let upstream = unreachable_upstream().await;
        let server = TestServer::new(setup_test_app(&upstream)).unwrap();

        let response = server
            .post("/api/predict/")
            .json(&json!({ "target_date": "31-12-2025" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(
            body.error,
            "Format tanggal tidak valid. Gunakan format: YYYY-MM-DD"
        );
    }

    #[tokio::test]
    async fn test_predict_rejects_non_json_body() {
        let upstream = unreachable_upstream().await;
        let server = TestServer::new(setup_test_app(&upstream)).unwrap();

        let response = server.post("/api/predict/").text("2025-12-23").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Body permintaan harus berupa JSON");
    }

    #[tokio::test]
    async fn test_predict_enforces_window_before_relaying() {
        // A relayed request would fail with 502; the guard answers first.
        let upstream = unreachable_upstream().await;
        let server = TestServer::new(setup_test_app(&upstream)).unwrap();
        let today = Local::now().date_naive();

        let response = server
            .post("/api/predict/")
            .json(&json!({ "target_date": today.format("%Y-%m-%d").to_string() }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Tanggal target harus di masa depan");

        let too_far = today + Days::new(31);
        let response = server
            .post("/api/predict/")
            .json(&json!({ "target_date": too_far.format("%Y-%m-%d").to_string() }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert!(body.error.starts_with("Prediksi maksimal 30 hari dari sekarang."));
    }

    #[tokio::test]
    async fn test_predict_passes_upstream_error_through() {
        let upstream = spawn_upstream(failing_upstream()).await;
        let server = TestServer::new(setup_test_app(&upstream)).unwrap();

        let response = server
            .post("/api/predict/")
            .json(&json!({ "target_date": target_in_window().format("%Y-%m-%d").to_string() }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "model unavailable");
    }

    #[tokio::test]
    async fn test_predict_unreachable_upstream_is_bad_gateway() {
        let upstream = unreachable_upstream().await;
        let server = TestServer::new(setup_test_app(&upstream)).unwrap();

        let response = server
            .post("/api/predict/")
            .json(&json!({ "target_date": target_in_window().format("%Y-%m-%d").to_string() }))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Layanan prediksi tidak dapat dihubungi");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_routes() {
        let upstream = unreachable_upstream().await;
        let server = TestServer::new(setup_test_app(&upstream)).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let doc: serde_json::Value = response.json();
        assert!(doc["paths"]["/api/predict/"]["post"].is_object());
        assert!(doc["paths"]["/health"]["get"].is_object());
    }

    #[tokio::test]
    async fn test_upstream_client_drives_controller_to_success() {
        let upstream = spawn_upstream(healthy_upstream()).await;
        let client = UpstreamClient::new(&upstream, Duration::from_secs(5)).unwrap();
        let controller = PredictionController::new(client);
        let target = check_window(target_in_window(), Local::now().date_naive()).unwrap();

        let mut seen = Vec::new();
        let state = controller
            .submit(&target, |state| seen.push(state.clone()))
            .await;

        assert_eq!(seen.first(), Some(&RequestState::Loading));
        let response = state.response().unwrap();
        assert_eq!(response.target_date, Some(target.date()));
    }

    #[tokio::test]
    async fn test_upstream_client_surfaces_server_message() {
        let upstream = spawn_upstream(failing_upstream()).await;
        let client = UpstreamClient::new(&upstream, Duration::from_secs(5)).unwrap();
        let controller = PredictionController::new(client);
        let target = check_window(target_in_window(), Local::now().date_naive()).unwrap();

        let state = controller.submit(&target, |_| {}).await;

        assert_eq!(state, RequestState::Failed("model unavailable".to_string()));
    }
}

#[cfg(test)]
mod cli_tests {
    use crate::cli::{Cli, Commands};
    use chrono::NaiveDate;
    use clap::Parser;
    use predict::validate;

    #[test]
    fn test_check_args_build_date_selection() {
        let cli = Cli::try_parse_from([
            "stockcast", "check", "--day", "23", "--month", "12", "--year", "2025", "--today",
            "2025-12-16",
        ])
        .unwrap();

        let Commands::Check { date } = cli.command else {
            panic!("expected the check subcommand");
        };
        let selection = date.selection();
        assert_eq!(selection.day, Some(23));
        assert_eq!(selection.month, Some(12));
        assert_eq!(selection.year, Some(2025));
        assert_eq!(date.today(), NaiveDate::from_ymd_opt(2025, 12, 16).unwrap());

        let target = validate(&selection, date.today()).unwrap();
        assert_eq!(target.iso(), "2025-12-23");
    }
}
