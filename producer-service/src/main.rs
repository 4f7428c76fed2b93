use actix_web::{middleware, web, App, HttpServer};
use producer_service::{handlers, Config, KafkaMessagePublisher, MessagePublisher};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting producer-service");

    let config = Config::from_env();

    let kafka_publisher = KafkaMessagePublisher::new(&config.kafka_brokers)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    tracing::info!(
        brokers = %config.kafka_brokers,
        topic = %kafka_publisher.topic(),
        "Kafka producer created"
    );

    let publisher = Arc::new(kafka_publisher);
    let publisher_data: web::Data<dyn MessagePublisher> =
        web::Data::from(publisher.clone() as Arc<dyn MessagePublisher>);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting HTTP server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(publisher_data.clone())
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(handlers::register_routes)
    })
    .bind(&addr)?
    .run()
    .await?;

    // Flush in-flight deliveries before the process exits.
    if let Err(e) = publisher.close() {
        tracing::warn!("Failed to flush Kafka producer on shutdown: {}", e);
    }

    Ok(())
}
