pub mod health_handler;
pub mod study_handler;

use actix_web::web;

pub use health_handler::health_check;
pub use study_handler::{clear_page, generate_api, generate_page, index};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(generate_page)
        .service(clear_page)
        .service(generate_api)
        .service(health_check);
}
