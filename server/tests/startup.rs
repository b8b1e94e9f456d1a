use axum::{Json, Router, routing::{get, post}};
use chat::MISSING_API_KEY_NOTICE;
use server::settings::Settings;
use server::startup::build_state;
use std::io::Write;

const API_KEY: &str = "startup-test-key";

async fn spawn_stub() -> String {
    let router = Router::new()
        .route("/documents/terms.pdf", get(|| async { "%PDF-1.4 terms" }))
        .route(
            "/upload/v1beta/files",
            post(|| async {
                Json(serde_json::json!({
                    "file": {
                        "name": "files/terms",
                        "uri": "https://generativelanguage.googleapis.com/v1beta/files/terms",
                        "mimeType": "application/pdf"
                    }
                }))
            }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn context_file_is_embedded_in_system_prompt() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Savings accounts earn 3.1% per year.").unwrap();

    let settings = Settings {
        context_file: file.path().to_path_buf(),
        ..Settings::default()
    };
    let state = build_state(&settings, None).await.unwrap();

    assert!(
        state
            .gateway
            .composer()
            .system_prompt()
            .contains("Savings accounts earn 3.1% per year.")
    );
    assert_eq!(
        state.gateway.respond("hi").await.unwrap(),
        MISSING_API_KEY_NOTICE
    );
}

#[tokio::test]
async fn missing_context_file_starts_without_context() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        context_file: dir.path().join("absent.txt"),
        generation_params: false,
        ..Settings::default()
    };
    let state = build_state(&settings, None).await.unwrap();

    assert!(state.gateway.config().params.is_none());
    assert!(state.gateway.config().api_key.is_none());
    assert!(state.gateway.config().attachments.is_empty());
}

#[tokio::test]
async fn document_is_uploaded_once_and_attached() {
    let base_url = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();

    let settings = Settings {
        context_file: dir.path().join("absent.txt"),
        base_url: base_url.clone(),
        document: Some(format!("{base_url}/documents/terms.pdf")),
        ..Settings::default()
    };
    let state = build_state(&settings, Some(API_KEY.to_string())).await.unwrap();

    let attachments = &state.gateway.config().attachments;
    assert_eq!(attachments.len(), 1);
    assert_eq!(
        attachments[0].uri,
        "https://generativelanguage.googleapis.com/v1beta/files/terms"
    );
    assert_eq!(attachments[0].mime_type, "application/pdf");
}

#[tokio::test]
async fn document_upload_is_skipped_without_api_key() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        context_file: dir.path().join("absent.txt"),
        document: Some(dir.path().join("terms.pdf").display().to_string()),
        ..Settings::default()
    };
    let state = build_state(&settings, None).await.unwrap();

    assert!(state.gateway.config().attachments.is_empty());
}

#[tokio::test]
async fn unreadable_document_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        context_file: dir.path().join("absent.txt"),
        document: Some(dir.path().join("missing.pdf").display().to_string()),
        ..Settings::default()
    };

    assert!(build_state(&settings, Some(API_KEY.to_string())).await.is_err());
}
