//! Minimal HTTP/1.1 plumbing
//!
//! Just enough of the protocol for a JSON API: read one request head,
//! parse the request line, write one response, close. Request bodies and
//! most headers are ignored, and every response carries
//! `Connection: close`, so there is no keep-alive state to manage.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Upper bound on the request head we will buffer
const MAX_REQUEST_BYTES: usize = 8 * 1024;

/// A parsed request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Request method, as sent
    pub method: String,

    /// Request path, without the query string
    pub path: String,

    /// Raw query string, if one was present
    pub query: Option<String>,
}

impl Request {
    /// Looks up a single query parameter by name
    ///
    /// Returns the first matching value; parameters without `=` are
    /// ignored. Values are returned raw.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        let query = self.query.as_deref()?;

        query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })
    }
}

/// Reads one request head from the stream
///
/// Buffers until the blank line ending the head, the peer closes, or the
/// size cap is hit. Returns `Ok(None)` when no parseable request line
/// arrived; the caller answers that with a 400.
///
/// # Arguments
///
/// * `stream` - The accepted connection
///
/// # Returns
///
/// * `Ok(Some(Request))` - A parsed request line
/// * `Ok(None)` - The peer sent nothing usable
/// * `Err(std::io::Error)` - The read itself failed
pub async fn read_request<S>(stream: &mut S) -> std::io::Result<Option<Request>>
where
    S: AsyncRead + Unpin,
{
    let mut buffer = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..n]);

        if buffer.windows(4).any(|window| window == b"\r\n\r\n") {
            break;
        }

        if buffer.len() >= MAX_REQUEST_BYTES {
            break;
        }
    }

    let head = String::from_utf8_lossy(&buffer);
    Ok(head.lines().next().and_then(parse_request_line))
}

/// Parses an HTTP/1.x request line into method, path, and query
fn parse_request_line(line: &str) -> Option<Request> {
    let mut parts = line.split_whitespace();

    let method = parts.next()?;
    let target = parts.next()?;
    let version = parts.next()?;

    if !version.starts_with("HTTP/") {
        return None;
    }

    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (target, None),
    };

    Some(Request {
        method: method.to_string(),
        path: path.to_string(),
        query,
    })
}

/// Writes one JSON response and flushes it
///
/// Emits the status line, standard headers, any extra headers (the cache
/// header rides through here), a blank line, and the body.
///
/// # Arguments
///
/// * `stream` - The accepted connection
/// * `status` - HTTP status code
/// * `extra_headers` - Additional headers beyond the standard set
/// * `body` - The JSON body
pub async fn write_response<S>(
    stream: &mut S,
    status: u16,
    extra_headers: &[(&str, String)],
    body: &str,
) -> std::io::Result<()>
where
    S: AsyncWrite + Unpin,
{
    let mut response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        status_text(status),
        body.len()
    );

    for (name, value) in extra_headers {
        response.push_str(name);
        response.push_str(": ");
        response.push_str(value);
        response.push_str("\r\n");
    }

    response.push_str("\r\n");
    response.push_str(body);

    stream.write_all(response.as_bytes()).await?;
    stream.flush().await
}

/// Reason phrase for the status codes this server emits
fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_line_plain_path() {
        let request = parse_request_line("GET /api/passing_yards HTTP/1.1").unwrap();

        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/api/passing_yards");
        assert_eq!(request.query, None);
    }

    #[test]
    fn test_parse_request_line_with_query() {
        let request = parse_request_line("GET /api/receptions?n=5 HTTP/1.1").unwrap();

        assert_eq!(request.path, "/api/receptions");
        assert_eq!(request.query.as_deref(), Some("n=5"));
    }

    #[test]
    fn test_parse_request_line_rejects_garbage() {
        assert!(parse_request_line("").is_none());
        assert!(parse_request_line("GET").is_none());
        assert!(parse_request_line("GET /path").is_none());
        assert!(parse_request_line("not a request line at all").is_none());
    }

    #[test]
    fn test_query_param_lookup() {
        let request = parse_request_line("GET /api/receptions?n=5&verbose=1 HTTP/1.1").unwrap();

        assert_eq!(request.query_param("n"), Some("5"));
        assert_eq!(request.query_param("verbose"), Some("1"));
        assert_eq!(request.query_param("missing"), None);
    }

    #[test]
    fn test_query_param_skips_bare_keys() {
        let request = parse_request_line("GET /api/receptions?flag&n=7 HTTP/1.1").unwrap();

        assert_eq!(request.query_param("flag"), None);
        assert_eq!(request.query_param("n"), Some("7"));
    }

    #[tokio::test]
    async fn test_read_request_parses_head() {
        let (mut client, mut server) = tokio::io::duplex(4096);

        tokio::io::AsyncWriteExt::write_all(
            &mut client,
            b"GET /api/passing_tds?n=3 HTTP/1.1\r\nHost: localhost\r\n\r\n",
        )
        .await
        .unwrap();
        drop(client);

        let request = read_request(&mut server).await.unwrap().unwrap();
        assert_eq!(request.path, "/api/passing_tds");
        assert_eq!(request.query_param("n"), Some("3"));
    }

    #[tokio::test]
    async fn test_read_request_empty_peer() {
        let (client, mut server) = tokio::io::duplex(64);
        drop(client);

        let request = read_request(&mut server).await.unwrap();
        assert!(request.is_none());
    }

    #[tokio::test]
    async fn test_write_response_shape() {
        let (mut client, mut server) = tokio::io::duplex(4096);

        write_response(
            &mut server,
            200,
            &[("Cache-Control", "public, max-age=300".to_string())],
            "{\"ok\":true}",
        )
        .await
        .unwrap();
        drop(server);

        let mut raw = String::new();
        tokio::io::AsyncReadExt::read_to_string(&mut client, &mut raw)
            .await
            .unwrap();

        assert!(raw.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(raw.contains("Content-Type: application/json\r\n"));
        assert!(raw.contains("Content-Length: 11\r\n"));
        assert!(raw.contains("Cache-Control: public, max-age=300\r\n"));
        assert!(raw.ends_with("\r\n\r\n{\"ok\":true}"));
    }
}
