//! Prometheus scrape endpoint

use actix_web::{HttpResponse, Responder, Scope, get, web};
use metrics_exporter_prometheus::PrometheusHandle;

/// Render the current metrics snapshot in Prometheus text format
#[get("")]
async fn scrape(handle: web::Data<PrometheusHandle>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4; charset=utf-8")
        .body(handle.render())
}

pub fn routes() -> Scope {
    web::scope("/metrics").service(scrape)
}
