use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use contracts::shared::format::group_thousands;

/// Простой middleware для логирования запросов
///
/// Prints `HH:MM:SS | ms | size | status method path`, the time colored
/// cyan for 200 and yellow for everything else.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("Failed to buffer response body for {} {}: {}", method, path, e);
            println!(
                "{} | {:>5}ms | {:>12} | {} {:>6} {}",
                paint(parts.status, &Local::now().format("%H:%M:%S").to_string()),
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                path
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    println!(
        "{} | {:>5}ms | {:>12} | {} {:>6} {}",
        paint(parts.status, &Local::now().format("%H:%M:%S").to_string()),
        start.elapsed().as_millis(),
        group_thousands(bytes.len() as u64, '.'),
        parts.status.as_u16(),
        method,
        path
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn paint(status: StatusCode, text: &str) -> String {
    let color_code = if status == StatusCode::OK { "36" } else { "33" };
    format!("\x1b[{}m{}\x1b[0m", color_code, text)
}
