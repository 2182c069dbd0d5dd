use crate::dtos::MessageResponse;
use axum::Json;

pub const ROOT_MESSAGE: &str = "Hello from the content service!";
pub const HELLO_MESSAGE: &str = "Hello from the backend API!";

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new(HELLO_MESSAGE))
}
