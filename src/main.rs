// src/main.rs
use actix_web::{App, HttpServer, middleware, web};
use axiom_design::{AppState, config::ServerConfig, handlers};
use log::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()?;
    let app_state = AppState::new();

    info!("Starting design assistant on {}:{}", config.host, config.port);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind(config.bind_addr())?.run().await?;

    Ok(())
}
