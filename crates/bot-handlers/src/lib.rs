mod bot_callback;
mod bot_messages;
mod commands;
mod dispatcher;
mod keyboards;
mod payload;
mod store;
mod texts;
mod transport;

#[cfg(test)]
mod test_utils;

pub use bot_callback::callback_handler;
pub use bot_messages::message_handler;
pub use commands::Command;
pub use dispatcher::{Context, Handler, Incoming, Matcher, MessageDispatcher};
pub use keyboards::{FEEDBACK_LABEL, HELP_LABEL, RESOURCES_LABEL};
pub use payload::{PayloadParseError, CALLBACK_VERSION};
pub use store::FeedbackStore;
pub use transport::{Reply, SendError, Transport};
