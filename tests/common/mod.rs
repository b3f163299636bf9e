//! 集成测试共用的初始化逻辑

#![allow(dead_code)]

use statuspage_client::{Client, ClientConfig};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// 启动 mock 服务并返回指向它的客户端
pub async fn setup() -> (Client, MockServer) {
    init_tracing();

    let server = MockServer::start().await;
    let config = ClientConfig::default().with_base_url(server.uri());
    let client = Client::with_config(TOKEN, config, None).unwrap();
    (client, server)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
