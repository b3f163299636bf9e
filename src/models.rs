//! Statuspage 资源数据结构
//!
//! 所有字段都是 `Option`：缺省即“未指定”，序列化时直接省略该键，
//! 因此部分更新不会覆盖服务端未提及的字段。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 线上时间格式：RFC 3339 UTC，例如 `2006-01-02T15:04:05Z`
pub type Timestamp = DateTime<Utc>;

/// 页面 Logo
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct PageLogo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// 状态页
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_from_search: Option<bool>,
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
    pub notifications_email_footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewers_must_be_team_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_restrictions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
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
    pub favicon_logo: Option<PageLogo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactional_logo: Option<PageLogo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_cover: Option<PageLogo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_logo: Option<PageLogo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_logo: Option<PageLogo>,
}

/// 组件；`group == Some(true)` 时该组件是一个分组
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Component {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_show_if_degraded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_email: Option<String>,
}

impl Component {
    /// 是否为分组组件
    pub fn is_group(&self) -> bool {
        self.group.unwrap_or(false)
    }

    /// 尝试把状态字符串解析为已知状态
    pub fn status_kind(&self) -> Option<ComponentStatus> {
        self.status.as_deref().and_then(ComponentStatus::parse)
    }
}

/// 事件中内嵌的组件，比顶层 `Component` 多一个 `start_date`
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct IncidentComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_show_if_degraded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_email: Option<String>,
    /// 日期字符串（`YYYY-MM-DD`），原样保留
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// 事件更新中受影响组件的状态变化
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AffectedComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_status: Option<String>,
}

/// 事件更新
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct IncidentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_components: Option<Vec<AffectedComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tweet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliver_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tweet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wants_twitter_update: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct JiraMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct IncidentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraMetadata>,
}

/// 事件（维护窗口使用同一结构）
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Incident {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<IncidentComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_override: Option<String>,
    /// 按时间排列的更新记录
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_updates: Option<Vec<IncidentUpdate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IncidentMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_body_last_updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_ignored: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_notified_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_notified_twitter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_published_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_auto_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_auto_in_progress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_deliver_notifications_at_end: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_deliver_notifications_at_start: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_to_maintenance_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_to_operational_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_remind_prior: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_reminded_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_until: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortlink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Incident {
    /// 最近一条更新（按 `display_at`，缺失时退回 `created_at`）
    pub fn latest_update(&self) -> Option<&IncidentUpdate> {
        self.incident_updates
            .as_deref()?
            .iter()
            .max_by_key(|u| u.display_at.or(u.created_at))
    }
}

/// 组件状态枚举
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    Operational,
    UnderMaintenance,
    DegradedPerformance,
    PartialOutage,
    MajorOutage,
}

impl ComponentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentStatus::Operational => "operational",
            ComponentStatus::UnderMaintenance => "under_maintenance",
            ComponentStatus::DegradedPerformance => "degraded_performance",
            ComponentStatus::PartialOutage => "partial_outage",
            ComponentStatus::MajorOutage => "major_outage",
        }
    }

    /// 从字符串解析，未知值返回 `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "operational" => Some(ComponentStatus::Operational),
            "under_maintenance" => Some(ComponentStatus::UnderMaintenance),
            "degraded_performance" => Some(ComponentStatus::DegradedPerformance),
            "partial_outage" => Some(ComponentStatus::PartialOutage),
            "major_outage" => Some(ComponentStatus::MajorOutage),
            _ => None,
        }
    }
}

/// 事件状态（故障类）
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Investigating,
    Identified,
    Monitoring,
    Resolved,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Identified => "identified",
            IncidentStatus::Monitoring => "monitoring",
            IncidentStatus::Resolved => "resolved",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "investigating" => Some(IncidentStatus::Investigating),
            "identified" => Some(IncidentStatus::Identified),
            "monitoring" => Some(IncidentStatus::Monitoring),
            "resolved" => Some(IncidentStatus::Resolved),
            _ => None,
        }
    }
}

/// 维护状态
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Verifying,
    Completed,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Scheduled => "scheduled",
            MaintenanceStatus::InProgress => "in_progress",
            MaintenanceStatus::Verifying => "verifying",
            MaintenanceStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(MaintenanceStatus::Scheduled),
            "in_progress" => Some(MaintenanceStatus::InProgress),
            "verifying" => Some(MaintenanceStatus::Verifying),
            "completed" => Some(MaintenanceStatus::Completed),
            _ => None,
        }
    }
}

/// 事件影响级别
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IncidentImpact {
    None,
    Maintenance,
    Minor,
    Major,
    Critical,
}

impl IncidentImpact {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentImpact::None => "none",
            IncidentImpact::Maintenance => "maintenance",
            IncidentImpact::Minor => "minor",
            IncidentImpact::Major => "major",
            IncidentImpact::Critical => "critical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(IncidentImpact::None),
            "maintenance" => Some(IncidentImpact::Maintenance),
            "minor" => Some(IncidentImpact::Minor),
            "major" => Some(IncidentImpact::Major),
            "critical" => Some(IncidentImpact::Critical),
            _ => None,
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }
        )*
    };
}

display_as_str!(ComponentStatus, IncidentStatus, MaintenanceStatus, IncidentImpact);
