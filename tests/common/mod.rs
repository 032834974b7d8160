//! Shared utilities for integration tests.

use std::net::SocketAddr;

use http_functions::config::HostConfig;
use http_functions::lifecycle::{build_registry, Shutdown};
use http_functions::HttpServer;
use tokio::net::TcpListener;

/// Value injected as the echoed environment variable.
pub const TEST_ENV_VALUE: &str = "integration";

/// A running host on an ephemeral port.
pub struct TestHost {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestHost {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    #[allow(dead_code)]
    pub async fn stop(self) {
        self.shutdown.trigger();
        let result = self.handle.await.expect("server task panicked");
        assert!(result.is_ok(), "server returned {result:?}");
    }
}

/// Start a host with `config`. The listener is bound before returning, so
/// requests can be sent immediately.
pub async fn start_host(mut config: HostConfig) -> TestHost {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let env_var = config.functions.env_var.clone();
    let registry = build_registry(&config, move |key| {
        (key == env_var).then(|| TEST_ENV_VALUE.to_string())
    });

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, registry);
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestHost { addr, shutdown, handle }
}

/// Client that never routes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
