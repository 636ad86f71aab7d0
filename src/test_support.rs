use std::sync::{Arc, Mutex};

use iron::{Handler, Iron, Listening};
use reqwest::Url;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::models::download::DownloadProgress;
use crate::providers::progress::ProgressSink;

/// Starts an iron server on a free local port and returns it with its base URL.
pub fn iron_server<H: Handler>(handler: H) -> (Listening, String) {
    match Iron::new(handler).http(("127.0.0.1", 0)) {
        Ok(listener) => {
            let base = format!("http://127.0.0.1:{}", listener.socket.port());
            (listener, base)
        }
        Err(e) => panic!("Failed to start server: {}", e),
    }
}

/// Sink that keeps every `(bytes_downloaded, total_size)` pair it sees.
#[derive(Default)]
pub struct RecordingSink {
    pub reports: Vec<(u64, u64)>,
    pub finished: bool,
}

impl ProgressSink for RecordingSink {
    fn report(&mut self, progress: &DownloadProgress) {
        self.reports
            .push((progress.bytes_downloaded, progress.total_size));
    }

    fn finish(&mut self, _progress: &DownloadProgress) {
        self.finished = true;
    }
}

#[derive(Clone)]
pub struct MockRoute {
    path: String,
    body: Vec<u8>,
    head_length: bool,
    head_allowed: bool,
    drop_get: bool,
    truncate_at: Option<usize>,
}

impl MockRoute {
    pub fn new(path: &str, body: impl Into<Vec<u8>>) -> Self {
        MockRoute {
            path: path.to_string(),
            body: body.into(),
            head_length: true,
            head_allowed: true,
            drop_get: false,
            truncate_at: None,
        }
    }

    /// Answer `HEAD` without a `Content-Length` header.
    pub fn without_head_length(mut self) -> Self {
        self.head_length = false;
        self
    }

    /// Answer `HEAD` with `403 Forbidden`.
    pub fn rejecting_head(mut self) -> Self {
        self.head_allowed = false;
        self
    }

    /// Close `GET` connections before sending any response.
    pub fn dropping_get(mut self) -> Self {
        self.drop_get = true;
        self
    }

    /// Advertise the full length on `GET` but close after `len` bytes.
    pub fn truncated_at(mut self, len: usize) -> Self {
        self.truncate_at = Some(len);
        self
    }
}

/// Minimal HTTP/1.1 server recording every request line it receives.
pub struct MockServer {
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    pub async fn start<F>(routes: F) -> MockServer
    where
        F: FnOnce(&str) -> Vec<MockRoute>,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let routes = Arc::new(routes(&base));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = requests.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = routes.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, &routes, &log).await;
                });
            }
        });

        MockServer { base, requests }
    }

    pub fn url(&self, path: &str) -> Url {
        Url::parse(&format!("{}{}", self.base, path)).unwrap()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(
    mut stream: TcpStream,
    routes: &[MockRoute],
    log: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        head.extend_from_slice(&buf[..n]);
    }

    let head = String::from_utf8_lossy(&head);
    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();
    log.lock().unwrap().push(format!("{} {}", method, path));

    let Some(route) = routes.iter().find(|r| r.path == path) else {
        stream
            .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
            .await?;
        return stream.shutdown().await;
    };

    let is_head = method == "HEAD";
    if is_head && !route.head_allowed {
        stream
            .write_all(b"HTTP/1.1 403 Forbidden\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
            .await?;
        return stream.shutdown().await;
    }
    if !is_head && route.drop_get {
        return stream.shutdown().await;
    }
    let mut response = String::from("HTTP/1.1 200 OK\r\nConnection: close\r\n");
    if !is_head || route.head_length {
        response.push_str(&format!("Content-Length: {}\r\n", route.body.len()));
    }
    response.push_str("\r\n");
    stream.write_all(response.as_bytes()).await?;

    if !is_head {
        let end = route
            .truncate_at
            .unwrap_or(route.body.len())
            .min(route.body.len());
        stream.write_all(&route.body[..end]).await?;
    }
    stream.flush().await?;
    stream.shutdown().await
}
