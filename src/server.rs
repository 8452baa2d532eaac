//! HTTP exposition endpoint.
//!
//! Serves the formatted metrics at the configured path, a health check at
//! `/health`, and 404 for everything else. Each scrape runs the full
//! fetch-parse-format pipeline; nothing is cached, so concurrent scrapes
//! share no mutable state.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::clock::Clock;
use crate::metrics::format_metrics;
use crate::parse::parse_status;
use crate::source::StatusSource;

/// Run one scrape: fetch the raw status text, parse it against the clock's
/// current time, and render the exposition text.
///
/// Fails when the source is unavailable or the output carries an
/// unrecognized byte-size unit; the caller decides how to surface that.
pub async fn collect(source: &dyn StatusSource, clock: &dyn Clock) -> Result<String> {
    let raw = source
        .fetch()
        .await
        .ok_or_else(|| anyhow!("no status output available from {}", source.description()))?;
    let records = parse_status(&raw, clock.now())?;
    debug!("extracted records: {:?}", records);
    Ok(format_metrics(&records))
}

/// Serve the exposition endpoint until the listener fails.
pub async fn run_server(
    listen_addr: SocketAddr,
    metrics_path: String,
    source: Arc<dyn StatusSource>,
    clock: Arc<dyn Clock>,
) -> Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!("listening on http://{}{}", listen_addr, metrics_path);

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);

        let metrics_path = metrics_path.clone();
        let source = source.clone();
        let clock = clock.clone();

        tokio::spawn(async move {
            let service = service_fn(move |req: Request<hyper::body::Incoming>| {
                let metrics_path = metrics_path.clone();
                let source = source.clone();
                let clock = clock.clone();

                async move {
                    handle_request(req, &metrics_path, source.as_ref(), clock.as_ref()).await
                }
            });

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                error!("connection error: {}", e);
            }
        });
    }
}

async fn handle_request<B>(
    req: Request<B>,
    metrics_path: &str,
    source: &dyn StatusSource,
    clock: &dyn Clock,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path();

    if path == metrics_path {
        match collect(source, clock).await {
            Ok(body) => Ok(text_response(
                StatusCode::OK,
                "text/plain; version=0.0.4; charset=utf-8",
                body,
            )),
            Err(e) => {
                error!("scrape failed: {:#}", e);
                Ok(text_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "text/plain",
                    format!("scrape failed: {:#}\n", e),
                ))
            }
        }
    } else if path == "/health" || path == "/healthz" {
        Ok(text_response(StatusCode::OK, "text/plain", "OK".to_owned()))
    } else {
        Ok(text_response(
            StatusCode::NOT_FOUND,
            "text/plain",
            "Not Found".to_owned(),
        ))
    }
}

fn text_response(status: StatusCode, content_type: &str, body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}
