pub mod config;
pub mod error;
pub mod handlers;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
pub use services::{KafkaMessagePublisher, MessagePublisher};
