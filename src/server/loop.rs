// Server loop module
// Accepts connections until shutdown is requested, then drains open ones

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::time::Instant;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// How often the shutdown drain checks the connection counter
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Run the accept loop until `shutdown` is notified.
///
/// The listener is closed first; then connections already being served get
/// up to `performance.shutdown_timeout` seconds to finish. Must run inside the
/// `LocalSet` that owns the connection tasks.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = shutdown.notified() => break,
        }
    }

    drop(listener);
    let grace = Duration::from_secs(state.config.performance.shutdown_timeout);
    drain_connections(&active_connections, grace).await;
}

/// Wait until no connection is open or `grace` has passed.
///
/// Returns the number of connections still open.
pub async fn drain_connections(active: &AtomicUsize, grace: Duration) -> usize {
    let deadline = Instant::now() + grace;
    let open = active.load(Ordering::SeqCst);
    if open > 0 {
        logger::log_draining(open);
    }

    loop {
        let open = active.load(Ordering::SeqCst);
        if open == 0 {
            return 0;
        }
        if Instant::now() >= deadline {
            logger::log_warning(&format!(
                "[Shutdown] {open} connection(s) still open after {}s, closing them",
                grace.as_secs()
            ));
            return open;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_state;
    use crate::server::create_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn get(addr: std::net::SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_serves_until_shutdown() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(test_state());
        let shutdown = Arc::new(Notify::new());

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let server = tokio::task::spawn_local(start_server_loop(
                    listener,
                    Arc::clone(&state),
                    Arc::new(AtomicUsize::new(0)),
                    Arc::clone(&shutdown),
                ));

                let response = get(addr, "/api/tech-joke").await;
                assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
                assert!(response.contains("{\"joke\":\""));

                let response = get(addr, "/api/nope").await;
                assert!(response.starts_with("HTTP/1.1 404 Not Found"), "{response}");
                assert!(response.contains("available_endpoints"));

                shutdown.notify_one();
                server.await.unwrap();
            })
            .await;

        assert!(state.jokes_served() >= 1);
    }

    #[tokio::test]
    async fn test_in_flight_request_survives_shutdown() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(test_state());
        let shutdown = Arc::new(Notify::new());
        let active = Arc::new(AtomicUsize::new(0));

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let server = tokio::task::spawn_local(start_server_loop(
                    listener,
                    Arc::clone(&state),
                    Arc::clone(&active),
                    Arc::clone(&shutdown),
                ));

                let mut stream = TcpStream::connect(addr).await.unwrap();
                stream
                    .write_all(b"GET /api/family-joke HTTP/1.1\r\nHost: localhost\r\n")
                    .await
                    .unwrap();
                tokio::time::sleep(Duration::from_millis(50)).await;
                assert_eq!(active.load(Ordering::SeqCst), 1);

                shutdown.notify_one();
                tokio::time::sleep(Duration::from_millis(100)).await;
                assert!(!server.is_finished(), "loop returned with a request in flight");

                stream.write_all(b"Connection: close\r\n\r\n").await.unwrap();
                let mut response = String::new();
                stream.read_to_string(&mut response).await.unwrap();
                assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
                assert!(response.contains("{\"joke\":\""));

                server.await.unwrap();
                assert_eq!(active.load(Ordering::SeqCst), 0);
            })
            .await;
    }

    #[tokio::test]
    async fn test_drain_gives_up_after_grace() {
        let open = AtomicUsize::new(2);
        let started = Instant::now();
        assert_eq!(drain_connections(&open, Duration::from_millis(60)).await, 2);
        assert!(started.elapsed() >= Duration::from_millis(60));

        let idle = AtomicUsize::new(0);
        assert_eq!(drain_connections(&idle, Duration::from_secs(30)).await, 0);
    }
}
