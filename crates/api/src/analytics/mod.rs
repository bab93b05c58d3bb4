mod get_alert_performance;
mod get_daily_trends;
mod get_overview;
mod get_system_health;
mod get_system_stats;
mod get_user_engagement;

use actix_web::web;
use get_alert_performance::get_alert_performance_controller;
use get_daily_trends::get_daily_trends_controller;
use get_overview::get_overview_controller;
use get_system_health::get_system_health_controller;
use get_system_stats::get_system_stats_controller;
use get_user_engagement::get_user_engagement_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/analytics/overview", web::get().to(get_overview_controller));
    cfg.route(
        "/analytics/alerts/performance",
        web::get().to(get_alert_performance_controller),
    );
    cfg.route(
        "/analytics/trends/daily",
        web::get().to(get_daily_trends_controller),
    );
    cfg.route(
        "/analytics/users/engagement",
        web::get().to(get_user_engagement_controller),
    );
    cfg.route(
        "/analytics/system/health",
        web::get().to(get_system_health_controller),
    );
    cfg.route(
        "/admin/stats/system",
        web::get().to(get_system_stats_controller),
    );
}

/// Share of `part` in `total` as a percentage rounded to one decimal
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = part as f64 / total as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}
