use serde::{Deserialize, Serialize};

use crate::dtos::{
    AlertPerformanceDTO, DailyTrendDTO, OverviewDTO, SystemHealthDTO, SystemStatsDTO,
    UserEngagementDTO,
};

pub mod get_overview {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub overview: OverviewDTO,
    }
}

pub mod get_alert_performance {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub limit: Option<usize>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub alerts: Vec<AlertPerformanceDTO>,
    }
}

pub mod get_daily_trends {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub days: Option<i64>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub trends: Vec<DailyTrendDTO>,
        pub days: i64,
    }
}

pub mod get_user_engagement {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub limit: Option<usize>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub users: Vec<UserEngagementDTO>,
    }
}

pub mod get_system_health {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub system_health: SystemHealthDTO,
    }
}

pub mod get_system_stats {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub stats: SystemStatsDTO,
    }
}
