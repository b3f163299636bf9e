//! Statuspage REST API 的类型化客户端
//!
//! 覆盖页面、组件、事件与维护窗口四类资源。每个操作只做一次请求，
//! 不重试、不缓存，错误原样返回给调用方。
//!
//! ```no_run
//! use statuspage_client::{Client, CancellationToken, UpdateComponentParams, ComponentStatus};
//!
//! # async fn example() -> statuspage_client::Result<()> {
//! let client = Client::new("my-oauth-token", None)?;
//! let cancel = CancellationToken::new();
//!
//! let components = client.components().list(&cancel, "page-id").await?;
//! for component in &components {
//!     println!("{:?}: {:?}", component.name, component.status);
//! }
//!
//! let params = UpdateComponentParams {
//!     status: Some(ComponentStatus::MajorOutage.into()),
//!     ..Default::default()
//! };
//! client.components().update(&cancel, "page-id", "component-id", &params).await?;
//! # Ok(())
//! # }
//! ```

mod components;
mod config;
mod error;
mod incidents;
mod maintenance;
mod models;
mod pages;
mod transport;

use reqwest::Client as HttpClient;
use std::sync::Arc;

pub use components::{ComponentService, UpdateComponentParams};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{Error, Result};
pub use incidents::{CreateIncidentParams, IncidentService, UpdateIncidentParams};
pub use maintenance::{CreateMaintenanceParams, MaintenanceService};
pub use models::{
    AffectedComponent, Component, ComponentStatus, Incident, IncidentComponent, IncidentImpact,
    IncidentMetadata, IncidentStatus, IncidentUpdate, JiraMetadata, MaintenanceStatus, Page,
    PageLogo, Timestamp,
};
pub use pages::{PageService, UpdatePageParams};
pub use tokio_util::sync::CancellationToken;
pub use transport::Transport;

/// Statuspage 客户端
///
/// 四个资源服务共享同一个 `Transport`，`Client` 可以随意克隆并在多个任务间并发使用。
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<Transport>,
    page: PageService,
    component: ComponentService,
    incidents: IncidentService,
    maintenance: MaintenanceService,
}

impl Client {
    /// 使用默认配置创建客户端；`http` 为空时使用默认 HTTP 客户端
    pub fn new(token: impl Into<String>, http: Option<HttpClient>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default(), http)
    }

    pub fn with_config(
        token: impl Into<String>,
        config: ClientConfig,
        http: Option<HttpClient>,
    ) -> Result<Self> {
        let transport = Arc::new(Transport::new(token, &config, http)?);

        Ok(Self {
            page: PageService::new(Arc::clone(&transport)),
            component: ComponentService::new(Arc::clone(&transport)),
            incidents: IncidentService::new(Arc::clone(&transport)),
            maintenance: MaintenanceService::new(Arc::clone(&transport)),
            transport,
        })
    }

    pub fn pages(&self) -> &PageService {
        &self.page
    }

    pub fn components(&self) -> &ComponentService {
        &self.component
    }

    pub fn incidents(&self) -> &IncidentService {
        &self.incidents
    }

    pub fn maintenance(&self) -> &MaintenanceService {
        &self.maintenance
    }

    /// 底层传输层，可用于调用尚未封装的端点
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_share_one_transport() {
        let client = Client::new("token", None).unwrap();
        assert_eq!(Arc::strong_count(&client.transport), 5);

        let cloned = client.clone();
        assert_eq!(Arc::strong_count(&cloned.transport), 10);
        assert_eq!(client.transport().base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn custom_http_client_is_accepted() {
        let http = HttpClient::new();
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:1");
        let client = Client::with_config("token", config, Some(http)).unwrap();
        assert_eq!(client.transport().base_url().as_str(), "http://127.0.0.1:1/");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = ClientConfig::default().with_base_url("localhost");
        assert!(matches!(
            Client::with_config("token", config, None),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn token_with_newline_is_rejected() {
        assert!(matches!(
            Client::new("abc\r\nX-Injected: 1", None),
            Err(Error::InvalidHeader(_))
        ));
    }
}
