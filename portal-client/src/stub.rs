//! In-process stand-in for the portal API used by the tests

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use portal_model::CredentialProvider;
use tokio::net::TcpListener;

use crate::{Client, ClientConfig};

/// Serves `router` on an ephemeral port, returns the `/api` base url
pub(crate) async fn serve(router: Router) -> String {
    let _ = env_logger::builder().is_test(true).try_init();
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub server crashed");
    });
    format!("http://{}/api", addr)
}

/// Base url of a port nobody listens on anymore
pub(crate) async fn unreachable() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");
    drop(listener);
    format!("http://{}/api", addr)
}

pub(crate) fn client(base_url: &str, credentials: impl CredentialProvider + 'static) -> Client {
    let config = ClientConfig {
        timeout: Duration::from_secs(5),
        ..ClientConfig::default()
    }
    .with_base_url(base_url);
    Client::new(&config, Arc::new(credentials)).expect("Failed to build client")
}
