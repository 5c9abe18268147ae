use actix_web::{App, HttpServer};
use pesapay::config::Config;
use pesapay::middleware::RequestId;
use pesapay::AppState;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("pesapay={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.app.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    init_tracing(&config);

    tracing::info!("Starting PesaPay checkout service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        "Gateway: {} ({})",
        config.pesapal.environment,
        config.pesapal.base_url
    );
    tracing::info!("Public base URL: {}", config.app.base_url);

    let state = AppState::from_config(&config).expect("Failed to initialize gateway client");

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(move |cfg| pesapay::configure(cfg, &state))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
