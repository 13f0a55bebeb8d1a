//! Request rate limiting backed by a token-bucket limiter

use crate::error::ErrorBody;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::future::BoxFuture;
use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::warn;

type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Tower layer applying a shared token-bucket limiter to every request
#[derive(Clone)]
pub struct RateLimitLayer {
    limiter: Arc<DirectLimiter>,
}

impl RateLimitLayer {
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        // Zero values are rejected by Settings::validate; clamp anyway so a
        // hand-built layer cannot panic.
        let per_second = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(burst_size).unwrap_or(NonZeroU32::MIN);

        let quota = Quota::per_second(per_second).allow_burst(burst);

        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }
}

impl<S> Layer<S> for RateLimitLayer {
    type Service = RateLimit<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RateLimit {
            inner,
            limiter: self.limiter.clone(),
        }
    }
}

/// Service wrapper produced by [`RateLimitLayer`]
#[derive(Clone)]
pub struct RateLimit<S> {
    inner: S,
    limiter: Arc<DirectLimiter>,
}

impl<S> Service<Request<Body>> for RateLimit<S>
where
    S: Service<Request<Body>, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        if self.limiter.check().is_err() {
            warn!(path = %request.uri().path(), "Request rate limited");

            let response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorBody {
                    error: "rate limit exceeded".to_string(),
                }),
            )
                .into_response();

            return Box::pin(std::future::ready(Ok(response)));
        }

        Box::pin(self.inner.call(request))
    }
}
