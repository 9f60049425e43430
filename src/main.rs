use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use secrecy::ExposeSecret as _;

use study_forge_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    if config.use_demo_mode {
        log::info!("Running in demo mode: study material comes from the local generator");
    } else {
        log::info!(
            "Remote generation enabled: endpoint {}, model {}, credential length {}",
            config.api_endpoint,
            config.model,
            config.api_key.expose_secret().len()
        );
        if config.credential_is_placeholder() {
            log::warn!("STUDY_API_KEY is not set; every generation will fail until it is");
        }
    }

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config);

    log::info!("Starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
