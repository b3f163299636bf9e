use crate::error::Result;
use crate::models::Page;
use crate::transport::Transport;
use reqwest::Method;
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// 页面更新接口可修改的字段
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct UpdatePageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_body_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_light_font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_greens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_yellows: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_oranges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_reds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_blues: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_graph_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_link_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_from_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewers_must_be_team_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_page_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_incident_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_email_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sms_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rss_atom_feeds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_webhook_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_email_footer: Option<String>,
}

#[derive(Serialize)]
struct UpdatePageRequestBody<'a> {
    page: &'a UpdatePageParams,
}

/// 页面相关接口，页面只能查询和部分更新
#[derive(Debug, Clone)]
pub struct PageService {
    transport: Arc<Transport>,
}

impl PageService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// 获取指定页面
    pub async fn get(&self, cancel: &CancellationToken, page_id: &str) -> Result<Page> {
        let path = format!("v1/pages/{}", page_id);
        let request = self.transport.build_request::<()>(Method::GET, &path, None)?;
        self.transport.execute(cancel, request).await
    }

    /// 列出账号下所有页面
    pub async fn list(&self, cancel: &CancellationToken) -> Result<Vec<Page>> {
        let request = self.transport.build_request::<()>(Method::GET, "v1/pages", None)?;
        self.transport.execute(cancel, request).await
    }

    /// 部分更新页面，未设置的字段不会发送
    pub async fn update(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        page: &UpdatePageParams,
    ) -> Result<Page> {
        let path = format!("v1/pages/{}", page_id);
        let body = UpdatePageRequestBody { page };
        let request = self.transport.build_request(Method::PATCH, &path, Some(&body))?;
        self.transport.execute(cancel, request).await
    }
}
