/// Endpoint tests for producer-service
///
/// Runs the actix app against an in-memory publisher double, covering:
/// - Happy path: publish + confirmation literal
/// - Empty-string payloads
/// - Broker failure surfaced as HTTP 500
/// - Malformed request bodies
use actix_web::{middleware, test, web, App};
use async_trait::async_trait;
use producer_service::error::AppError;
use producer_service::handlers::register_routes;
use producer_service::MessagePublisher;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Records published payloads instead of talking to a broker.
#[derive(Default)]
struct RecordingPublisher {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingPublisher {
    fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagePublisher for RecordingPublisher {
    async fn publish(&self, message: &str) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Kafka("broker unreachable".into()));
        }
        self.sent.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

fn publisher_data(publisher: Arc<RecordingPublisher>) -> web::Data<dyn MessagePublisher> {
    web::Data::from(publisher as Arc<dyn MessagePublisher>)
}

#[actix_web::test]
async fn send_publishes_message_and_confirms() {
    let publisher = Arc::new(RecordingPublisher::default());
    let app = test::init_service(
        App::new()
            .app_data(publisher_data(publisher.clone()))
            .configure(register_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/producer/send")
        .set_json(json!({ "message": "hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(body, "Message sent!");
    assert_eq!(publisher.sent(), vec!["hello".to_string()]);
}

#[actix_web::test]
async fn each_post_publishes_exactly_one_message() {
    let publisher = Arc::new(RecordingPublisher::default());
    let app = test::init_service(
        App::new()
            .app_data(publisher_data(publisher.clone()))
            .configure(register_routes),
    )
    .await;

    for text in ["first", "second", "first"] {
        let req = test::TestRequest::post()
            .uri("/producer/send")
            .set_json(json!({ "message": text }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    assert_eq!(publisher.sent(), vec!["first", "second", "first"]);
}

#[actix_web::test]
async fn empty_message_is_published() {
    let publisher = Arc::new(RecordingPublisher::default());
    let app = test::init_service(
        App::new()
            .app_data(publisher_data(publisher.clone()))
            .configure(register_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/producer/send")
        .set_json(json!({ "message": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(publisher.sent(), vec!["".to_string()]);
}

#[actix_web::test]
async fn broker_failure_returns_server_error() {
    let publisher = Arc::new(RecordingPublisher::failing());
    let app = test::init_service(
        App::new()
            .app_data(publisher_data(publisher.clone()))
            .configure(register_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/producer/send")
        .set_json(json!({ "message": "hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    assert!(publisher.sent().is_empty());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 500);
}

#[actix_web::test]
async fn malformed_body_is_rejected_without_publish() {
    let publisher = Arc::new(RecordingPublisher::default());
    let app = test::init_service(
        App::new()
            .app_data(publisher_data(publisher.clone()))
            .wrap(middleware::Logger::default())
            .configure(register_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/producer/send")
        .insert_header(("content-type", "application/json"))
        .set_payload("not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_client_error());
    assert!(publisher.sent().is_empty());
}
