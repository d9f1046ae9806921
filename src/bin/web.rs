//! Single binary web server: front-end from STATIC_DIR at the web root, API via REST.
//! Reads a `.env` file from the working directory if present.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! See `football_cup_web::config` for the environment variables it reads.

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use football_cup_web::api::{self, AppState};
use football_cup_web::state::INACTIVITY_TIMEOUT;
use football_cup_web::Config;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Variables already in the environment win over `.env`.
    let dotenv = dotenvy::dotenv();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(path) = &dotenv {
        log::info!("Loaded environment from {}", path.display());
    }

    let config = Config::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    if config.uses_default_password() {
        log::warn!("ADMIN_PASSWORD not set; using the default password");
    }
    let static_dir = config.static_dir.clone();

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!("Team data file: {}", config.data_path.display());

    let state = Data::new(AppState::from_config(&config));
    let key = config.session_key();
    let cookie_secure = config.cookie_secure;

    // Background task: every 30 minutes, remove draws inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            match state_cleanup.draws.evict_idle(INACTIVITY_TIMEOUT) {
                Ok(0) => {}
                Ok(removed) => log::info!("Cleaned up {} inactive draw(s) (no activity for 12h)", removed),
                Err(e) => log::warn!("Draw cleanup skipped: {}", e),
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(api::session_middleware(key.clone(), cookie_secure))
            .wrap(Logger::default())
            .configure(api::configure)
            .service(api::frontend(&static_dir))
    })
    .bind(bind)?
    .run()
    .await
}
