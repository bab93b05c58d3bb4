mod telemetry;

use beacon_api::Application;
use beacon_infra::{seed_sample_data, setup_context, Environment};
use telemetry::{get_subscriber, init_subscriber};
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("beacon".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await;

    if context.config.environment == Environment::Development {
        if let Err(e) = seed_sample_data(&context).await {
            warn!("Failed to seed sample data: {:?}", e);
        }
    }

    info!(
        "Starting Alerting & Notification Platform on http://{}:{} ({})",
        context.config.host,
        context.config.port,
        context.config.environment.as_str()
    );

    let app = Application::new(context).await?;
    app.start().await
}
