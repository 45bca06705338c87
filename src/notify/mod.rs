pub mod slack;

pub use slack::{build_update_message, interpret_webhook_response, send_to_slack};
