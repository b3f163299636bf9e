use thiserror::Error;

/// 客户端操作可能产生的错误
#[derive(Debug, Error)]
pub enum Error {
    /// 基础地址无效（构造时）
    #[error("无效的地址: {0}")]
    InvalidUrl(String),

    /// 令牌或 User-Agent 不是合法的请求头值（构造时）
    #[error("无效的请求头: {0}")]
    InvalidHeader(String),

    /// 请求体 JSON 编码失败
    #[error("请求体编码失败: {0}")]
    Encode(#[source] serde_json::Error),

    /// 网络层错误：连接、DNS、超时或读取响应体失败
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// 调用方取消了请求
    #[error("请求已取消")]
    Cancelled,

    /// 服务端返回状态码 >= 400，响应体原样保留
    #[error("响应 {status_line}: {status} - {body}")]
    Api {
        status: u16,
        /// 例如 `500 Internal Server Error`
        status_line: String,
        body: String,
    },

    /// 成功响应的 JSON 无法解析为目标类型
    #[error("响应解码失败: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// 响应携带的 HTTP 状态码：API 错误，或带状态码的网络层错误
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_status_and_body() {
        let err = Error::Api {
            status: 500,
            status_line: "500 Internal Server Error".to_string(),
            body: "\"boom\"".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500 Internal Server Error"));
        assert!(message.contains("500 - \"boom\""));
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_helper() {
        let err = Error::Api {
            status: 404,
            status_line: "404 Not Found".to_string(),
            body: String::new(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_cancelled());
    }

    #[test]
    fn invalid_header_is_a_construction_error() {
        let err = Error::InvalidHeader("令牌包含非法字符".to_string());
        assert!(err.to_string().starts_with("无效的请求头"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn cancelled_has_no_status() {
        assert!(Error::Cancelled.is_cancelled());
        assert_eq!(Error::Cancelled.status(), None);
    }

    #[test]
    fn decode_and_encode_are_distinct() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::Decode(json_err);
        assert!(err.to_string().starts_with("响应解码失败"));
        assert_eq!(err.status(), None);
    }
}
