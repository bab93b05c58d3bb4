mod get_teams;

use actix_web::web;
use get_teams::get_teams_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/teams", web::get().to(get_teams_controller));
}
