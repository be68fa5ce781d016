//! JSON query API server
//!
//! This module serves the leaderboard API:
//! - `http`: minimal HTTP/1.1 request/response plumbing
//! - `response`: the JSON payload types
//!
//! One spawned task per connection, one scrape per leaderboard request.
//! Handler failures are answered and logged; nothing short of the listener
//! dying stops the accept loop.

pub mod http;
pub mod response;

pub use response::{ErrorPayload, IndexPayload, StatPayload};

use crate::config::Config;
use crate::registry::Registry;
use crate::scrape::{build_http_client, scrape_leaderboard};
use http::{read_request, write_response, Request};
use reqwest::Client;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// Shared per-process state handed to every connection task
///
/// Registry and config are immutable after startup; the reqwest client is
/// internally reference-counted, so clones of the `Arc` are all that moves
/// between tasks.
pub struct AppContext {
    /// Validated configuration
    pub config: Config,

    /// Stat-type to source mapping
    pub registry: Registry,

    /// Shared HTTP client for upstream fetches
    pub client: Client,
}

impl AppContext {
    /// Builds the shared state from a validated configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(AppContext)` - Registry and HTTP client ready for use
    /// * `Err(GridrankError)` - The HTTP client could not be built
    pub fn new(config: Config) -> crate::Result<Self> {
        let registry = Registry::from_entries(&config.categories);
        let client = build_http_client(&config.scrape)?;

        Ok(AppContext {
            config,
            registry,
            client,
        })
    }
}

/// The leaderboard query server
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds the listener
    ///
    /// # Arguments
    ///
    /// * `addr` - Socket address to listen on, e.g. `0.0.0.0:5000`
    pub async fn bind(addr: &str) -> crate::Result<Server> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Server { listener })
    }

    /// Returns the bound address
    ///
    /// Useful when binding port 0 in tests.
    pub fn local_addr(&self) -> crate::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Runs the accept loop
    ///
    /// Each connection is served on its own task. Accept errors are logged
    /// and the loop continues; this future only resolves if the runtime
    /// shuts the task down.
    pub async fn run(self, context: Arc<AppContext>) -> crate::Result<()> {
        info!(
            addr = %self.listener.local_addr()?,
            categories = context.registry.len(),
            "Serving stat leaderboards"
        );

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(error) => {
                    warn!(%error, "Failed to accept connection");
                    continue;
                }
            };

            let context = Arc::clone(&context);
            tokio::spawn(async move {
                if let Err(error) = handle_connection(stream, context).await {
                    warn!(%peer, %error, "Connection handler failed");
                }
            });
        }
    }
}

/// Serves one connection: read a request, route it, answer, close
async fn handle_connection(mut stream: TcpStream, context: Arc<AppContext>) -> crate::Result<()> {
    let request = match read_request(&mut stream).await? {
        Some(request) => request,
        None => {
            let body = serde_json::to_string(&ErrorPayload::plain("Malformed request."))?;
            write_response(&mut stream, 400, &[], &body).await?;
            return Ok(());
        }
    };

    debug!(method = %request.method, path = %request.path, "Handling request");

    if request.method != "GET" {
        let body = serde_json::to_string(&ErrorPayload::plain("Method not allowed."))?;
        write_response(&mut stream, 405, &[], &body).await?;
        return Ok(());
    }

    if request.path == "/" {
        return serve_index(&mut stream, &context).await;
    }

    if let Some(stat_type) = request.path.strip_prefix("/api/") {
        return serve_stat(&mut stream, &context, &request, stat_type).await;
    }

    let body = serde_json::to_string(&ErrorPayload::plain("Not found."))?;
    write_response(&mut stream, 404, &[], &body).await?;
    Ok(())
}

/// Answers `/` with the stat-type listing
async fn serve_index(stream: &mut TcpStream, context: &AppContext) -> crate::Result<()> {
    let stat_types = context
        .registry
        .stat_types()
        .into_iter()
        .map(str::to_string)
        .collect();

    let payload = IndexPayload::new(stat_types, context.config.server.default_limit);
    let body = serde_json::to_string(&payload)?;

    write_response(stream, 200, &[], &body).await?;
    Ok(())
}

/// Answers `/api/<stat_type>` with a freshly scraped leaderboard
async fn serve_stat(
    stream: &mut TcpStream,
    context: &AppContext,
    request: &Request,
    stat_type: &str,
) -> crate::Result<()> {
    let spec = match context.registry.resolve(stat_type) {
        Some(spec) => spec,
        None => {
            warn!(stat_type, "Unknown stat type requested");
            let body = serde_json::to_string(&ErrorPayload::unknown_stat_type(stat_type))?;
            write_response(stream, 404, &[], &body).await?;
            return Ok(());
        }
    };

    let limit = match requested_limit(request, context.config.server.default_limit) {
        Ok(limit) => limit,
        Err(raw) => {
            warn!(stat_type, n = %raw, "Rejecting negative result limit");
            let body = serde_json::to_string(&ErrorPayload::invalid_limit())?;
            write_response(stream, 400, &[], &body).await?;
            return Ok(());
        }
    };

    let outcome = scrape_leaderboard(
        &context.client,
        spec,
        limit,
        context.config.scrape.invalid_stat,
    )
    .await;

    let payload = StatPayload::from_players(stat_type, outcome.into_players());
    let body = serde_json::to_string(&payload)?;

    let cache = format!("public, max-age={}", context.config.server.cache_max_age);
    write_response(stream, 200, &[("Cache-Control", cache)], &body).await?;
    Ok(())
}

/// Determines the result limit for a leaderboard request
///
/// A missing or unparseable `n` keeps the configured default; a negative
/// `n` is rejected, with the raw text returned for the error log.
fn requested_limit(request: &Request, default: usize) -> Result<usize, String> {
    let raw = match request.query_param("n") {
        Some(raw) => raw,
        None => return Ok(default),
    };

    match raw.parse::<i64>() {
        Ok(n) if n < 0 => Err(raw.to_string()),
        Ok(n) => Ok(n as usize),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: Option<&str>) -> Request {
        Request {
            method: "GET".to_string(),
            path: "/api/passing_yards".to_string(),
            query: query.map(str::to_string),
        }
    }

    #[test]
    fn test_requested_limit_default_when_absent() {
        assert_eq!(requested_limit(&request(None), 20), Ok(20));
    }

    #[test]
    fn test_requested_limit_parses_value() {
        assert_eq!(requested_limit(&request(Some("n=5")), 20), Ok(5));
        assert_eq!(requested_limit(&request(Some("n=0")), 20), Ok(0));
    }

    #[test]
    fn test_requested_limit_default_when_unparseable() {
        assert_eq!(requested_limit(&request(Some("n=abc")), 20), Ok(20));
        assert_eq!(requested_limit(&request(Some("n=5.5")), 20), Ok(20));
        assert_eq!(requested_limit(&request(Some("n=")), 20), Ok(20));
    }

    #[test]
    fn test_requested_limit_rejects_negative() {
        assert_eq!(
            requested_limit(&request(Some("n=-1")), 20),
            Err("-1".to_string())
        );
    }

}
