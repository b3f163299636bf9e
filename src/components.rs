use crate::error::Result;
use crate::models::{Component, Timestamp};
use crate::transport::Transport;
use reqwest::Method;
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// 组件更新接口可修改的字段
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct UpdateComponentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_show_if_degraded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcase: Option<bool>,
    /// 变更生效时间
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Timestamp>,
}

#[derive(Serialize)]
struct UpdateComponentRequestBody<'a> {
    component: &'a UpdateComponentParams,
}

/// 组件相关接口
#[derive(Debug, Clone)]
pub struct ComponentService {
    transport: Arc<Transport>,
}

impl ComponentService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    fn path(page_id: &str, component_id: &str) -> String {
        format!("v1/pages/{}/components/{}", page_id, component_id)
    }

    /// 获取单个组件
    pub async fn get(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        component_id: &str,
    ) -> Result<Component> {
        let path = Self::path(page_id, component_id);
        let request = self.transport.build_request::<()>(Method::GET, &path, None)?;
        self.transport.execute(cancel, request).await
    }

    /// 列出页面的所有组件（含分组）
    pub async fn list(&self, cancel: &CancellationToken, page_id: &str) -> Result<Vec<Component>> {
        let path = format!("v1/pages/{}/components", page_id);
        let request = self.transport.build_request::<()>(Method::GET, &path, None)?;
        self.transport.execute(cancel, request).await
    }

    pub async fn update(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        component_id: &str,
        component: &UpdateComponentParams,
    ) -> Result<Component> {
        let path = Self::path(page_id, component_id);
        let body = UpdateComponentRequestBody { component };
        let request = self.transport.build_request(Method::PATCH, &path, Some(&body))?;
        self.transport.execute(cancel, request).await
    }

    /// 删除组件，成功时不解析响应体
    pub async fn delete(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        component_id: &str,
    ) -> Result<()> {
        let path = Self::path(page_id, component_id);
        let request = self.transport.build_request::<()>(Method::DELETE, &path, None)?;
        self.transport.execute_no_content(cancel, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComponentStatus;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn path_is_plain_concatenation() {
        assert_eq!(ComponentService::path("1", "2"), "v1/pages/1/components/2");
    }

    #[test]
    fn status_only_update_body() {
        let params = UpdateComponentParams {
            status: Some(ComponentStatus::MajorOutage.into()),
            ..Default::default()
        };
        let body = UpdateComponentRequestBody { component: &params };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "component": { "status": "major_outage" } })
        );
    }

    #[test]
    fn false_flags_are_sent_not_dropped() {
        let params = UpdateComponentParams {
            showcase: Some(false),
            only_show_if_degraded: Some(false),
            start_date: Some(Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "showcase": false,
                "only_show_if_degraded": false,
                "start_date": "2006-01-02T15:04:05Z"
            })
        );
    }
}
