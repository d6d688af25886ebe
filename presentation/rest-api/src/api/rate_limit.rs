use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use poem::http::StatusCode;
use poem::web::Json;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response};
use serde_json::json;

const WINDOW: Duration = Duration::from_secs(60);

struct Window {
    started_at: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by client.
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    clients: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Records one request for `client` and tells whether it fits the budget.
    pub fn check(&self, client: &str, now: Instant) -> bool {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);

        clients.retain(|_, w| now.duration_since(w.started_at) < self.window);

        let window = clients.entry(client.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });
        if window.count >= self.limit {
            return false;
        }
        window.count += 1;
        true
    }
}

/// Middleware answering 429 once a client IP exceeds its per-minute budget.
pub struct RateLimit {
    limiter: Arc<RateLimiter>,
}

impl RateLimit {
    pub fn per_minute(limit: u32) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::new(limit, WINDOW)),
        }
    }
}

impl<E: Endpoint> Middleware<E> for RateLimit {
    type Output = RateLimitEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RateLimitEndpoint {
            inner: ep,
            limiter: self.limiter.clone(),
        }
    }
}

pub struct RateLimitEndpoint<E> {
    inner: E,
    limiter: Arc<RateLimiter>,
}

impl<E: Endpoint> Endpoint for RateLimitEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        let client = client_key(&req);

        if !self.limiter.check(&client, Instant::now()) {
            tracing::warn!(client = %client, "Rate limit exceeded");
            return Ok((
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "name": "RateLimited", "message": "rate_limit.exceeded" })),
            )
                .into_response());
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}

fn client_key(req: &Request) -> String {
    req.remote_addr()
        .as_socket_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| req.remote_addr().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::test::TestClient;
    use poem::{EndpointExt, handler};

    #[handler]
    fn ok() -> &'static str {
        "ok"
    }

    #[test]
    fn should_allow_requests_within_budget() {
        let limiter = RateLimiter::new(2, WINDOW);
        let now = Instant::now();

        assert!(limiter.check("10.0.0.1", now));
        assert!(limiter.check("10.0.0.1", now));
        assert!(!limiter.check("10.0.0.1", now));
    }

    #[test]
    fn should_track_clients_independently() {
        let limiter = RateLimiter::new(1, WINDOW);
        let now = Instant::now();

        assert!(limiter.check("10.0.0.1", now));
        assert!(limiter.check("10.0.0.2", now));
        assert!(!limiter.check("10.0.0.1", now));
    }

    #[test]
    fn should_reset_budget_after_window() {
        let limiter = RateLimiter::new(1, WINDOW);
        let now = Instant::now();

        assert!(limiter.check("10.0.0.1", now));
        assert!(!limiter.check("10.0.0.1", now + Duration::from_secs(30)));
        assert!(limiter.check("10.0.0.1", now + WINDOW));
    }

    #[tokio::test]
    async fn should_answer_too_many_requests_over_budget() {
        let cli = TestClient::new(ok.with(RateLimit::per_minute(1)));

        cli.get("/").send().await.assert_status_is_ok();

        let resp = cli.get("/").send().await;
        resp.assert_status(StatusCode::TOO_MANY_REQUESTS);
        resp.assert_json(json!({ "name": "RateLimited", "message": "rate_limit.exceeded" }))
            .await;
    }
}
