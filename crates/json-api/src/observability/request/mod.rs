//! Per-request tracing spans and request IDs.

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::Instrument as _;
use tracing::{error, info, warn};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied request id echoed back.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Reuse the caller's id when it is short printable ASCII, else mint a v7 UUID.
///
/// Every event logged while handling the request, including medication
/// storage failures, is emitted inside a span carrying this id.
fn request_id(req: &Request) -> String {
    req.header::<String>(REQUEST_ID_HEADER)
        .filter(|id| {
            !id.trim().is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.bytes().all(|b| b.is_ascii_graphic())
        })
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

/// Wraps each request in an `http.request` span and logs its outcome.
///
/// Requests slower than `slow_threshold` get an extra warning.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogging {
    slow_threshold: Duration,
}

impl RequestLogging {
    #[must_use]
    pub(crate) fn new(slow_threshold: Duration) -> Self {
        Self { slow_threshold }
    }
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();

        let request_id = request_id(req);

        if let Err(source) = res.add_header(REQUEST_ID_HEADER, request_id.as_str(), true) {
            warn!(request_id = %request_id, "could not set request id header: {source}");
        }

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();

        let span = tracing::info_span!(
            parent: None,
            "http.request",
            request_id = %request_id,
            method = %method,
            path = %path,
            remote_addr = %req.remote_addr(),
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let elapsed = started.elapsed();
        let duration_ms = elapsed.as_millis();
        let status = res.status_code.unwrap_or(StatusCode::OK).as_u16();

        span.record("status", status);
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            match status {
                500.. => error!(status, duration_ms, "request failed"),
                400..500 => warn!(status, duration_ms, "request rejected"),
                _ => info!(status, duration_ms, "request completed"),
            }

            if elapsed > self.slow_threshold {
                warn!(
                    duration_ms,
                    threshold_ms = self.slow_threshold.as_millis(),
                    "slow request"
                );
            }
        });
    }
}
