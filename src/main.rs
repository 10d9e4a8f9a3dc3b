use holocron::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() -> Result<(), holocron::server::error::Error> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;
    let app = router::routes().with_state(AppState { db });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Starting server on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
