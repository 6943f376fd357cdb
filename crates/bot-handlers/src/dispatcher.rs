use teloxide::{
    types::{ChatId, Message},
    utils::command::BotCommands,
};

use common::types::UserId;

use crate::{
    bot_messages,
    keyboards::{FEEDBACK_LABEL, HELP_LABEL, RESOURCES_LABEL},
    Command, FeedbackStore, SendError, Transport,
};

/// Inbound message, reduced to what handlers look at
#[derive(Debug, Clone)]
pub struct Incoming {
    pub chat_id: ChatId,
    pub user_id: Option<UserId>,
    pub text: Option<String>,
}

impl Incoming {
    pub fn new(chat_id: ChatId, user_id: Option<UserId>, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            user_id,
            text: Some(text.into()),
        }
    }
    /// Sender identity for logs
    pub(crate) fn sender(&self) -> String {
        match self.user_id {
            Some(id) => id.to_string(),
            None => "unknown".to_string(),
        }
    }
}

impl From<&Message> for Incoming {
    fn from(msg: &Message) -> Self {
        Self {
            chat_id: msg.chat.id,
            user_id: msg.from.as_ref().map(|u| u.id.into()),
            text: msg.text().map(ToOwned::to_owned),
        }
    }
}

/// Collaborators available to handlers during one update
pub struct Context<'a> {
    pub transport: &'a dyn Transport,
    pub store: &'a dyn FeedbackStore,
}

impl<'a> Context<'a> {
    pub fn new(transport: &'a dyn Transport, store: &'a dyn FeedbackStore) -> Self {
        Self { transport, store }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Bot command, optionally addressed as `/cmd@bot_username`
    Command(Command),
    /// Whole message text equals to label
    Text(&'static str),
}

impl Matcher {
    fn accepts(&self, text: &str, bot_username: &str) -> bool {
        match self {
            Self::Command(cmd) => Command::parse(text, bot_username).is_ok_and(|c| c == *cmd),
            Self::Text(label) => text == *label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Start,
    FeedbackMenu,
    Help,
    Stats,
    Resources,
}

impl Handler {
    async fn run(self, ctx: &Context<'_>, msg: &Incoming) -> Result<(), SendError> {
        match self {
            Self::Start => bot_messages::start(ctx, msg).await,
            Self::FeedbackMenu => bot_messages::feedback_menu(ctx, msg).await,
            Self::Help => bot_messages::help(ctx, msg).await,
            Self::Stats => bot_messages::stats(ctx, msg).await,
            Self::Resources => bot_messages::resources(ctx, msg).await,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Trigger {
    matcher: Matcher,
    handler: Handler,
}

/// Ordered list of triggers. First trigger accepting a message wins
#[derive(Debug, Default)]
pub struct MessageDispatcher {
    triggers: Vec<Trigger>,
    bot_username: String,
}

impl MessageDispatcher {
    /// Dispatcher without triggers
    pub fn empty(bot_username: impl Into<String>) -> Self {
        Self {
            triggers: Vec::new(),
            bot_username: bot_username.into(),
        }
    }
    /// Dispatcher with all bot triggers registered
    pub fn new(bot_username: impl Into<String>) -> Self {
        let mut dispatcher = Self::empty(bot_username);
        dispatcher
            .register(Matcher::Command(Command::Start), Handler::Start)
            .register(Matcher::Text(FEEDBACK_LABEL), Handler::FeedbackMenu)
            .register(Matcher::Command(Command::Help), Handler::Help)
            .register(Matcher::Text(HELP_LABEL), Handler::Help)
            .register(Matcher::Command(Command::Stats), Handler::Stats)
            .register(Matcher::Text(RESOURCES_LABEL), Handler::Resources);
        dispatcher
    }
    pub fn register(&mut self, matcher: Matcher, handler: Handler) -> &mut Self {
        self.triggers.push(Trigger { matcher, handler });
        self
    }
    pub fn find(&self, msg: &Incoming) -> Option<Handler> {
        let text = msg.text.as_deref()?;
        self.triggers
            .iter()
            .find(|t| t.matcher.accepts(text, &self.bot_username))
            .map(|t| t.handler)
    }
    /// Run handler of first matching trigger. Returns `Ok(None)` when nothing
    /// matched. Errors are the ones handler decided not to handle
    pub async fn dispatch(&self, ctx: &Context<'_>, msg: &Incoming) -> Result<Option<Handler>, SendError> {
        let Some(handler) = self.find(msg) else {
            log::debug!("no trigger for message from {}", msg.sender());
            return Ok(None);
        };
        log::debug!("dispatching {handler:?} for {}", msg.sender());

        handler.run(ctx, msg).await?;
        Ok(Some(handler))
    }
}
