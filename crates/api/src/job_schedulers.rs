use crate::alert::send_due_reminders::SendDueRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::interval;
use beacon_infra::BeaconContext;
use tracing::info;

/// Periodically re-notifies users that have not acknowledged an
/// active alert. The cadence comes from `Config::reminder_interval`.
pub fn start_reminder_job(ctx: BeaconContext) {
    actix_web::rt::spawn(async move {
        let mut interval = interval(ctx.config.reminder_interval);
        // The first tick completes immediately, dispatch starts one
        // full interval after boot
        interval.tick().await;
        loop {
            interval.tick().await;

            match execute(SendDueRemindersUseCase, &ctx).await {
                Ok(reminders_sent) if reminders_sent > 0 => {
                    info!("Reminder job dispatched {} reminders", reminders_sent);
                }
                _ => {}
            }
        }
    });
}
