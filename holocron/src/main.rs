use holocron::seed::SeedData;
use holocron::state::AppState;
use holocron::{app, db};
use holocron_core::{init_tracing, serve, HolocronConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    let config = HolocronConfig::load("dev").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Failed to load configuration, using defaults");
        HolocronConfig::empty()
    });

    let pool = db::connect(&config).await?;
    db::migrate(&pool).await?;

    if let Ok(path) = config.get::<String>("seed.file") {
        SeedData::from_file(&path)?.apply(&pool).await?;
    }

    let host: String = config.get_or("server.host", "0.0.0.0".to_string());
    let port: u16 = config
        .get("server.port")
        .unwrap_or_else(|_| config.get_or("port", 3000u16));

    serve(app(AppState::new(pool, config)), &format!("{host}:{port}")).await?;
    Ok(())
}
