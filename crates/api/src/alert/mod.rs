pub mod archive_alert;
pub mod create_alert;
mod get_alerts;
pub mod send_alert_reminders;
pub mod send_due_reminders;
mod subscribers;
pub mod sync_alert_deliveries;
mod update_alert;

use actix_web::web;
use archive_alert::archive_alert_controller;
use create_alert::create_alert_controller;
use get_alerts::get_alerts_controller;
use send_alert_reminders::send_alert_reminders_controller;
use update_alert::update_alert_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/alerts", web::get().to(get_alerts_controller));
    cfg.route("/admin/alerts", web::post().to(create_alert_controller));
    cfg.route(
        "/admin/alerts/{alert_id}",
        web::put().to(update_alert_controller),
    );
    cfg.route(
        "/admin/alerts/{alert_id}/archive",
        web::post().to(archive_alert_controller),
    );
    cfg.route(
        "/admin/alerts/{alert_id}/send-reminder",
        web::post().to(send_alert_reminders_controller),
    );
}
