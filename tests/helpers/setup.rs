use beacon_api::Application;
use beacon_infra::{seed_sample_data, setup_context, BeaconContext};
use beacon_sdk::BeaconSDK;

pub struct TestApp {
    pub ctx: BeaconContext,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, BeaconSDK, String) {
    let mut ctx = setup_context().await;
    ctx.config.port = 0; // Random port
    seed_sample_data(&ctx).await.expect("To seed sample data");

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = BeaconSDK::new(address.clone());
    (TestApp { ctx }, sdk, address)
}
