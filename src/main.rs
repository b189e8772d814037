use megajob::server::{
    self,
    config::Config,
    model::app::{AppState, AuthSettings},
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();

    let state = AppState::from((
        db,
        AuthSettings {
            jwt_secret: config.jwt_secret.clone(),
            jwt_expires_in_days: config.jwt_expires_in_days,
        },
    ));

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Starting server on {}", address);

    axum::serve(listener, server::router::routes().with_state(state))
        .await
        .expect("Server error");
}
