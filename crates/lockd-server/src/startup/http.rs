//! HTTP server setup module.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::{api, console, model::AppState};

/// Creates and binds the main HTTP server.
///
/// The main server carries the lock API together with the health and
/// metrics endpoints.
pub fn main_server(
    app_state: Arc<AppState>,
    metrics_handle: PrometheusHandle,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(app_state.clone()))
            .app_data(web::Data::new(metrics_handle.clone()))
            .service(api::v1::lock::routes())
            .service(console::health::routes())
            .service(console::metrics::routes())
    })
    .bind((address, port))?
    .run())
}
