use crate::error::{Error, Result};
use reqwest::{Client as HttpClient, ClientBuilder, Url};
use std::time::Duration;

/// Statuspage 公共 API 地址
pub const DEFAULT_BASE_URL: &str = "https://api.statuspage.io/";

/// 默认 User-Agent
pub const DEFAULT_USER_AGENT: &str = concat!("statuspage-client-rs/", env!("CARGO_PKG_VERSION"));

/// 客户端配置结构体
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API 基础地址（scheme + host，可带路径前缀）
    pub base_url: String,
    /// 每个请求携带的 User-Agent
    pub user_agent: String,
    /// 连接超时（仅用于默认 HTTP 客户端）
    pub connect_timeout: Duration,
    /// 请求总超时（仅用于默认 HTTP 客户端）
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// 替换 API 基础地址
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 解析基础地址
    ///
    /// 路径统一补齐结尾的 `/`，这样 `v1/...` 形式的相对路径总是拼接在前缀之下。
    pub fn parsed_base_url(&self) -> Result<Url> {
        let raw = self.base_url.trim();
        if !raw.starts_with("http://") && !raw.starts_with("https://") {
            return Err(Error::InvalidUrl(format!(
                "地址必须以 http:// 或 https:// 开头，实际为: {}",
                raw
            )));
        }

        let mut url = Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// 构建默认 HTTP 客户端
    pub fn build_http_client(&self) -> Result<HttpClient> {
        let client = ClientBuilder::new()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .gzip(true)
            .use_rustls_tls()
            .tls_built_in_root_certs(true)
            .build()?;
        Ok(client)
    }
}
