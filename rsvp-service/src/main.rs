use lambda_http::{run, Error};
use log::info;
use std::env;

mod error;
mod handlers;
mod models;
mod routes;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting RSVP service");

    let app = routes::create_router().await;

    // LOCAL_PORT runs a plain HTTP server instead of the Lambda runtime
    match env::var("LOCAL_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        Some(port) => {
            info!("Listening locally on port {}", port);
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => run(app).await,
    }
}
