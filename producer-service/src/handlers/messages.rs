use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::MessagePublisher;

/// Request body for `POST /producer/send`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SendMessageRequest {
    pub message: String,
}

/// Publish a message to the broker
///
/// POST /producer/send
pub async fn send_message(
    publisher: web::Data<dyn MessagePublisher>,
    req: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, AppError> {
    publisher.publish(&req.message).await?;

    Ok(HttpResponse::Ok().body("Message sent!"))
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/producer").route("/send", web::post().to(send_message)));
}
