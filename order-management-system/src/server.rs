use std::sync::Arc;

use actix_web::web;
use colored::Colorize;
use tracing::{error, info};

use crate::api;
use crate::infrastructure::{config::build_config, telemetry, ServiceProvider};

pub fn run() {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build runtime".red(), e);
        }
    };
    runtime.block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };
    if let Err(e) = telemetry::initialize_telemetry(service_provider.config().telemetry()) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };
    let sweeper = tokio::spawn(service_provider.session_store().sweep());
    tokio::select! {
        _ = initialize_web_host(service_provider) => {
            sweeper.abort();
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping Services (ctrl-c handling).");
            sweeper.abort();
            std::process::exit(0);
        }
    }
}

pub fn configure(config: &mut web::ServiceConfig) {
    config
        .service(api::order::create_order_form)
        .service(api::order::create_order)
        .service(api::order::get_order_types)
        .service(api::order::get_order_statuses)
        .service(api::utility::get_utilities)
        .service(api::session::close_session);
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().host().clone();
    match actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .expose_headers([api::SESSION_HEADER])
            .max_age(86400);

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::from(sp.clone()))
            .configure(configure)
    })
    .bind((host.bind_address().as_str(), *host.bind_port()))
    {
        Ok(server) => {
            info!(
                "Order management system listening on {}:{}.",
                host.bind_address(),
                host.bind_port()
            );
            if let Err(e) = server.run().await {
                error!("{}", e);
            }
        }
        Err(e) => error!("{}", e),
    }
}
