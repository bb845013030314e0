pub mod graphql_handler;
pub mod health_handler;
pub mod practice_handler;
pub mod quiz_handler;

use actix_web::web;

pub use graphql_handler::{graphiql, graphql};
pub use health_handler::{health_check, health_check_live};
pub use practice_handler::{get_practice_categories, navigate_to_exercise};
pub use quiz_handler::get_quiz_overview;

/// Registers every REST and GraphQL route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(get_quiz_overview)
        .service(get_practice_categories)
        .service(navigate_to_exercise)
        .service(graphql)
        .service(graphiql);
}
