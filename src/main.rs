use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use solfege_server::{
    app_state::AppState, config::Config, graphql::create_schema, handlers,
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config.clone()).map_err(std::io::Error::other)?;
    let schema = create_schema(state.clone());

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );
    log::info!(
        "GraphiQL playground: http://{}:{}/graphiql",
        config.web_server_host,
        config.web_server_port
    );
    log::info!(
        "upstream services: quiz={} course={} module={}",
        config.quiz_service_url,
        config.course_service_url,
        config.module_service_url
    );

    let allowed_origin = config.cors_allowed_origin.clone();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(r#"%a "%r" %s %Dms %{x-request-id}o"#))
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
