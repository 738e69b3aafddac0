//! Chat Endpoint
//!
//! One user turn per call; no conversation history is sent.

use serde::Serialize;

use super::{encode, request, ApiError};
use crate::models::ChatResponse;
use crate::session::Session;

/// Context values sent alongside each user turn
#[derive(Serialize, Debug, Clone, Copy)]
pub struct ChatContext {
    pub pantry_item_count: usize,
}

#[derive(Serialize)]
struct ChatArgs<'a> {
    message: &'a str,
    context: ChatContext,
}

pub async fn send_message(
    session: Session,
    message: &str,
    context: ChatContext,
) -> Result<ChatResponse, ApiError> {
    let body = encode(&ChatArgs { message, context })?;
    request(session, "POST", "/chat", Some(body)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_args_carry_message_and_context() {
        let args = ChatArgs {
            message: "Create a week-long meal plan using chicken",
            context: ChatContext {
                pantry_item_count: 12,
            },
        };
        let json = serde_json::to_string(&args).unwrap();
        assert!(json.contains(r#""message":"Create a week-long meal plan using chicken""#));
        assert!(json.contains(r#""pantry_item_count":12"#));
    }
}
