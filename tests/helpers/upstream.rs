use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The documented end-to-end payload: one vacation with a midden window and
/// a zuid window.
pub fn herfst_payload() -> String {
    serde_json::json!({
        "content": [{
            "vacations": [{
                "type": "Herfstvakantie",
                "regions": [
                    { "region": "midden", "startdate": "2025-10-13", "enddate": "2025-10-19" },
                    { "region": "zuid", "startdate": "2025-10-20", "enddate": "2025-10-26" }
                ]
            }]
        }]
    })
    .to_string()
}

/// Spawn a fake upstream that answers `GET /schoolyear/:year` with `body`,
/// after failing the first `failures` requests with a 500. Returns the base
/// URL to point the client at.
pub async fn spawn_flaky_upstream(failures: usize, body: String) -> String {
    let hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new().route(
        "/schoolyear/:year",
        get(move |Path(_year): Path<String>| {
            let hits = hits.clone();
            let body = body.clone();
            async move {
                let attempt = hits.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt <= failures {
                    (StatusCode::INTERNAL_SERVER_ERROR, String::new())
                } else {
                    (StatusCode::OK, body)
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A base URL nothing is listening on, for transport-error scenarios.
pub async fn unreachable_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
