//! Security headers applied to every response.
//!
//! The service only ever answers with JSON, so the CSP locks everything down.
//! HSTS is added when the request reached us over HTTPS through a proxy
//! (`X-Forwarded-Proto: https`).

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::response::Response;
use std::task::{Context, Poll};
use tower::{Layer, Service};

static XCTO: HeaderValue = HeaderValue::from_static("nosniff");
static XFO: HeaderValue = HeaderValue::from_static("DENY");
static REFERRER: HeaderValue = HeaderValue::from_static("no-referrer");
static CSP: HeaderValue =
    HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'");
static HSTS: HeaderValue = HeaderValue::from_static("max-age=31536000; includeSubDomains");

#[derive(Clone)]
pub struct SecurityHeadersLayer;

impl<S> Layer<S> for SecurityHeadersLayer {
    type Service = SecurityHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityHeadersService { inner }
    }
}

#[derive(Clone)]
pub struct SecurityHeadersService<S> {
    inner: S,
}

impl<S, B> Service<Request> for SecurityHeadersService<S>
where
    S: Service<Request, Response = Response<B>> + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Debug,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let is_https = req
            .headers()
            .get("x-forwarded-proto")
            .is_some_and(|v| v.as_bytes().eq_ignore_ascii_case(b"https"));
        let future = self.inner.call(req);

        Box::pin(async move {
            let mut response = future.await?;
            let headers = response.headers_mut();

            headers.insert("x-content-type-options", XCTO.clone());
            headers.insert("x-frame-options", XFO.clone());
            headers.insert("referrer-policy", REFERRER.clone());
            if !headers.contains_key("content-security-policy") {
                headers.insert("content-security-policy", CSP.clone());
            }
            if is_https {
                headers.insert("strict-transport-security", HSTS.clone());
            }

            Ok(response)
        })
    }
}
