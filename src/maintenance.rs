//! 维护窗口接口
//!
//! 维护窗口在 API 中就是一种事件，只是创建参数侧重排期字段。

use crate::error::Result;
use crate::models::{Incident, Timestamp};
use crate::transport::Transport;
use reqwest::Method;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// 创建维护窗口时可提交的字段
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct CreateMaintenanceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_until: Option<Timestamp>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_auto_transition: Option<bool>,
}

#[derive(Serialize)]
struct CreateMaintenanceRequestBody<'a> {
    incident: &'a CreateMaintenanceParams,
}

#[derive(Debug, Clone)]
pub struct MaintenanceService {
    transport: Arc<Transport>,
}

impl MaintenanceService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// 列出正在进行的维护
    pub async fn list_active(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
    ) -> Result<Vec<Incident>> {
        let path = format!("v1/pages/{}/incidents/active_maintenance", page_id);
        let request = self.transport.build_request::<()>(Method::GET, &path, None)?;
        self.transport.execute(cancel, request).await
    }

    /// 创建维护窗口（与事件共用创建端点）
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        page_id: &str,
        maintenance: &CreateMaintenanceParams,
    ) -> Result<Incident> {
        let path = format!("v1/pages/{}/incidents", page_id);
        let body = CreateMaintenanceRequestBody { incident: maintenance };
        let request = self.transport.build_request(Method::POST, &path, Some(&body))?;
        self.transport.execute(cancel, request).await
    }
}
