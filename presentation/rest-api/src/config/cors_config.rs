use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for the browser client
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: unset, any origin is allowed)
///
/// Configuration:
/// - Methods: GET, POST, OPTIONS
/// - Headers: content-type
pub fn init_cors() -> Cors {
    let cors = Cors::new()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(origins) => cors.allow_origins(parse_origins(&origins)),
        Err(_) => cors,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
