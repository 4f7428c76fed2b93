pub mod messages;

pub use messages::{register_routes, SendMessageRequest};
