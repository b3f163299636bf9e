use crate::error::Result;
use crate::models::Incident;
use crate::transport::Transport;
use reqwest::Method;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// 创建事件时可提交的字段（只是可读字段的一个子集）
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct CreateIncidentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_remind_prior: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_to_maintenance_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_to_operational_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_auto_in_progress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_auto_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_deliver_notifications_at_start: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_deliver_notifications_at_end: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliver_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tweet_at_beginning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tweet_on_completion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tweet_on_creation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tweet_one_hour_before: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfill_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfilled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// 组件 id -> 组件状态
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_auto_transition: Option<bool>,
}

/// 更新事件时可提交的字段
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct UpdateIncidentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_ids: Option<Vec<String>>,
}

#[derive(Serialize)]
struct IncidentRequestBody<'a, P> {
    incident: &'a P,
}

/// 事件相关接口
#[derive(Debug, Clone)]
pub struct IncidentService {
    transport: Arc<Transport>,
}

impl IncidentService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    async fn list_by(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        filter: &str,
    ) -> Result<Vec<Incident>> {
        let path = format!("v1/pages/{}/incidents/{}", page_id, filter);
        let request = self.transport.build_request::<()>(Method::GET, &path, None)?;
        self.transport.execute(cancel, request).await
    }

    /// 列出计划中的事件
    pub async fn list_scheduled(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
    ) -> Result<Vec<Incident>> {
        self.list_by(cancel, page_id, "scheduled").await
    }

    /// 列出尚未解决的事件
    pub async fn list_unresolved(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
    ) -> Result<Vec<Incident>> {
        self.list_by(cancel, page_id, "unresolved").await
    }

    pub async fn create(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        incident: &CreateIncidentParams,
    ) -> Result<Incident> {
        let path = format!("v1/pages/{}/incidents", page_id);
        let body = IncidentRequestBody { incident };
        let request = self.transport.build_request(Method::POST, &path, Some(&body))?;
        self.transport.execute(cancel, request).await
    }

    /// 更新事件的状态、正文或受影响组件
    pub async fn update(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        incident_id: &str,
        incident: &UpdateIncidentParams,
    ) -> Result<Incident> {
        let path = format!("v1/pages/{}/incidents/{}", page_id, incident_id);
        let body = IncidentRequestBody { incident };
        let request = self.transport.build_request(Method::PATCH, &path, Some(&body))?;
        self.transport.execute(cancel, request).await
    }

    pub async fn delete(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        incident_id: &str,
    ) -> Result<()> {
        let path = format!("v1/pages/{}/incidents/{}", page_id, incident_id);
        let request = self.transport.build_request::<()>(Method::DELETE, &path, None)?;
        self.transport.execute_no_content(cancel, request).await
    }
}
