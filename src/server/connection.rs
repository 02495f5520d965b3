// Connection handling module
// Accepts a single TCP connection and serves HTTP/1.1 on it

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection, enforcing `performance.max_connections`.
///
/// Returns `false` when the connection was rejected.
pub fn accept_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
) -> bool {
    // Increment first, then check, so concurrent accepts cannot both slip in
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection rejected."
            ));
            drop(stream);
            return false;
        }
    }

    logger::log_connection_accepted(&peer_addr);
    handle_connection(stream, peer_addr, Arc::clone(state), Arc::clone(conn_counter));
    true
}

/// Serve one connection on the current `LocalSet`.
///
/// A keep-alive connection lives for at most `keep_alive_timeout` seconds.
/// When that runs out it is shut down gracefully: an idle connection closes at
/// once, a response in progress gets `max(read_timeout, write_timeout)` more
/// seconds. Without keep-alive that request limit applies from the start.
fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let performance = &state.config.performance;
        let request_limit = Duration::from_secs(std::cmp::max(
            performance.read_timeout,
            performance.write_timeout,
        ));
        let keep_alive = performance.keep_alive_timeout > 0;

        let mut builder = http1::Builder::new();
        builder.keep_alive(keep_alive);

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&service_state), peer_addr)),
        );
        tokio::pin!(conn);

        if keep_alive {
            let lifetime = Duration::from_secs(performance.keep_alive_timeout);
            tokio::select! {
                result = conn.as_mut() => {
                    if let Err(err) = result {
                        logger::log_connection_error(&err);
                    }
                }
                () = tokio::time::sleep(lifetime) => {
                    logger::log_keep_alive_expired(&peer_addr, lifetime.as_secs());
                    conn.as_mut().graceful_shutdown();
                    finish(conn.as_mut(), request_limit, peer_addr).await;
                }
            }
        } else {
            finish(conn.as_mut(), request_limit, peer_addr).await;
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}

/// Drive a connection to completion within `limit`
async fn finish<F, E>(conn: F, limit: Duration, peer_addr: SocketAddr)
where
    F: std::future::Future<Output = Result<(), E>>,
    E: std::fmt::Debug,
{
    match tokio::time::timeout(limit, conn).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => logger::log_connection_error(&err),
        Err(_) => {
            logger::log_warning(&format!(
                "Connection from {peer_addr} timed out after {} seconds",
                limit.as_secs()
            ));
        }
    }
}
