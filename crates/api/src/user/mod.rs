mod get_notification_history;
mod get_user_alerts;
mod get_user_dashboard;
mod get_users;
pub mod mark_alert_read;
mod mark_alert_unread;
mod snooze_alert;

use actix_web::web;
use get_notification_history::get_notification_history_controller;
use get_user_alerts::get_user_alerts_controller;
use get_user_dashboard::get_user_dashboard_controller;
use get_users::get_users_controller;
use mark_alert_read::mark_alert_read_controller;
use mark_alert_unread::mark_alert_unread_controller;
use snooze_alert::snooze_alert_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/users", web::get().to(get_users_controller));
    cfg.route("/user/alerts", web::get().to(get_user_alerts_controller));
    cfg.route(
        "/user/dashboard",
        web::get().to(get_user_dashboard_controller),
    );
    cfg.route(
        "/user/alerts/{alert_id}/read",
        web::post().to(mark_alert_read_controller),
    );
    cfg.route(
        "/user/alerts/{alert_id}/unread",
        web::post().to(mark_alert_unread_controller),
    );
    cfg.route(
        "/user/alerts/{alert_id}/snooze",
        web::post().to(snooze_alert_controller),
    );
    cfg.route(
        "/user/notifications/history",
        web::get().to(get_notification_history_controller),
    );
}
