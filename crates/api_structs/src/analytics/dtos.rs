use beacon_domain::{Severity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlertCountsDTO {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
    pub archived: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserCountsDTO {
    pub total_users: usize,
    pub total_admins: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamCountsDTO {
    pub total_teams: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeliveryCountsDTO {
    pub total: usize,
    pub unread: usize,
    pub read: usize,
    pub snoozed: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OverviewDTO {
    pub alerts: AlertCountsDTO,
    pub users: UserCountsDTO,
    pub teams: TeamCountsDTO,
    pub deliveries: DeliveryCountsDTO,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlertPerformanceDTO {
    pub id: ID,
    pub title: String,
    pub severity: Severity,
    pub delivered: usize,
    pub read: usize,
    pub snoozed: usize,
    /// Share of deliveries that are read, in percent
    pub read_rate: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DailyTrendDTO {
    pub date: NaiveDate,
    pub alerts_created: usize,
    pub deliveries_created: usize,
    pub alerts_read: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserEngagementDTO {
    pub id: ID,
    pub name: String,
    pub delivered: usize,
    pub read: usize,
    /// Share of deliveries that are read, in percent
    pub read_rate: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthChecksDTO {
    pub repositories: String,
    pub reminder_job: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemHealthDTO {
    pub overall_status: String,
    pub checks: HealthChecksDTO,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemStatsDTO {
    pub environment: String,
    pub reminder_interval_minutes: u64,
    pub total_alerts: usize,
    pub active_alerts: usize,
    pub total_users: usize,
    pub total_teams: usize,
    pub total_deliveries: usize,
    pub reminders_sent: u64,
}
