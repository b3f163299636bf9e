//! 请求构建与响应解码的公共通道，所有资源服务都经由这里访问 API。

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client as HttpClient, Method, Request, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

const JSON: &str = "application/json";

/// 传输层：持有构造后不再变化的配置（基础地址、令牌、HTTP 客户端）
///
/// 多个资源服务通过 `Arc<Transport>` 共享同一个实例，可以被并发调用。
pub struct Transport {
    http: HttpClient,
    base_url: Url,
    authorization: HeaderValue,
    user_agent: HeaderValue,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 令牌不输出
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl Transport {
    /// 创建传输层；`http` 为空时按配置构建默认客户端
    ///
    /// 令牌与 User-Agent 在这里校验为合法的请求头值，之后构建请求不会再因请求头失败。
    pub fn new(
        token: impl Into<String>,
        config: &ClientConfig,
        http: Option<HttpClient>,
    ) -> Result<Self> {
        let base_url = config.parsed_base_url()?;

        let mut authorization = HeaderValue::try_from(format!("OAuth {}", token.into()))
            .map_err(|_| Error::InvalidHeader("令牌包含非法字符".to_string()))?;
        authorization.set_sensitive(true);

        let user_agent = HeaderValue::try_from(config.user_agent.as_str()).map_err(|_| {
            Error::InvalidHeader(format!("User-Agent 包含非法字符: {:?}", config.user_agent))
        })?;

        let http = match http {
            Some(http) => http,
            None => config.build_http_client()?,
        };

        Ok(Self {
            http,
            base_url,
            authorization,
            user_agent,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 构建请求
    ///
    /// `path` 相对于基础地址解析（如 `v1/pages`），不做任何转义。
    /// 只有存在请求体时才设置 `Content-Type`。
    pub fn build_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", path, e)))?;

        let payload = match body {
            Some(body) => Some(serde_json::to_vec(body).map_err(Error::Encode)?),
            None => None,
        };

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, JSON)
            .header(AUTHORIZATION, self.authorization.clone())
            .header(USER_AGENT, self.user_agent.clone());

        if let Some(payload) = payload {
            builder = builder.header(CONTENT_TYPE, JSON).body(payload);
        }

        Ok(builder.build()?)
    }

    /// 执行请求并把响应体解码为 `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        request: Request,
    ) -> Result<T> {
        let body = self.send(cancel, request).await?;
        serde_json::from_slice(&body).map_err(Error::Decode)
    }

    /// 执行请求，忽略成功响应的内容（用于删除类调用）
    pub async fn execute_no_content(
        &self,
        cancel: &CancellationToken,
        request: Request,
    ) -> Result<()> {
        self.send(cancel, request).await.map(|_| ())
    }

    /// 单次往返
    ///
    /// 响应体在任何分支上都会被完整读取。请求失败时若令牌已取消，返回 `Cancelled`。
    async fn send(
        &self,
        cancel: &CancellationToken,
        request: Request,
    ) -> Result<Vec<u8>> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("📤 {} {}", method, url);

        let exchange = async {
            let response = self.http.execute(request).await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("⏹️ {} {} 已取消", method, url);
                return Err(Error::Cancelled);
            }
            result = exchange => match result {
                Ok(parts) => parts,
                Err(_) if cancel.is_cancelled() => return Err(Error::Cancelled),
                Err(e) => return Err(Error::Http(e)),
            },
        };

        debug!(status = status.as_u16(), "📥 {} {}", method, url);
        trace!(bytes = body.len(), "响应体已读取");

        if status.as_u16() >= 400 {
            return Err(Error::Api {
                status: status.as_u16(),
                status_line: status.to_string(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }
}
