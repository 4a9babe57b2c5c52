use super::handlers;
use crate::config::Config;
use crate::history::History;
use crate::service::Predictor;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

pub struct Server;

impl Server {
    /// Load the model, open the history store, then serve until shutdown.
    /// Nothing is bound if either of the first two steps fails.
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let predictor = web::Data::new(Predictor::load(config.artifacts())?);
        let history = history_data(config.history().await?);
        log::info!("history holds {} records", history.count().await?);
        log::info!("starting HTTP server on {}", config.bind());
        let server = HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(predictor.clone())
                .app_data(history.clone())
                .configure(routes)
        });
        let server = match config.workers() {
            Some(n) => server.workers(n),
            None => server,
        };
        server.bind(config.bind())?.run().await?;
        log::info!("server stopped");
        Ok(())
    }
}

/// Register the four endpoints, with and without trailing slash.
/// Expects `web::Data<Predictor>` and `web::Data<dyn History>` app data.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        .service(web::resource(["/predict/",    "/predict"   ]).route(web::post().to(handlers::predict)))
        .service(web::resource(["/model-info/", "/model-info"]).route(web::get().to(handlers::model_info)))
        .service(web::resource(["/history/",    "/history"   ]).route(web::get().to(handlers::history))
            .app_data(web::QueryConfig::default().error_handler(handlers::invalid_query)))
        .service(web::resource(["/health/",     "/health"    ]).route(web::get().to(handlers::health)));
}

/// Share an already opened history store with handlers.
pub fn history_data(store: Arc<dyn History>) -> web::Data<dyn History> {
    web::Data::from(store)
}
