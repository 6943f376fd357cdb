use teloxide::{prelude::*, types::ParseMode};

use common::types;
use db::DB;

use crate::{
    dispatcher::Context,
    payload::{Callback, PayloadData},
    texts, Reply, SendError,
};

/// Button press, reduced to what handler looks at
#[derive(Debug, Clone)]
pub(crate) struct IncomingCallback {
    pub(crate) id: String,
    pub(crate) user_id: types::UserId,
    pub(crate) data: Option<String>,
}

impl IncomingCallback {
    /// Buttons live in private chat, so user id is the chat id
    fn chat_id(&self) -> ChatId {
        ChatId(self.user_id.0 as i64)
    }
}

impl From<&CallbackQuery> for IncomingCallback {
    fn from(q: &CallbackQuery) -> Self {
        Self {
            id: q.id.clone(),
            user_id: q.from.id.into(),
            data: q.data.clone(),
        }
    }
}

pub async fn callback_handler(bot: Bot, q: CallbackQuery, db: DB) -> Result<(), SendError> {
    let ctx = Context::new(&bot, &db);
    handle_callback(&ctx, &IncomingCallback::from(&q)).await
}

pub(crate) async fn handle_callback(ctx: &Context<'_>, q: &IncomingCallback) -> Result<(), SendError> {
    let Some(data) = q.data.as_deref() else {
        log::error!("got empty callback {} from user {}", q.id, q.user_id);
        return ctx
            .transport
            .answer_callback(&q.id, Some(texts::CALLBACK_EMPTY.to_string()))
            .await;
    };
    log::debug!("got callback: {data:?}");

    let callback = match Callback::try_from_payload(data) {
        Ok(c) => c,
        Err(e) => {
            log::error!("invalid callback {data:?}: {e}");
            return ctx
                .transport
                .answer_callback(&q.id, Some(texts::CALLBACK_INVALID.to_string()))
                .await;
        }
    };

    match callback {
        Callback::ChooseKind(kind) => {
            if let Err(e) = ctx.store.save_pending_kind(q.user_id, kind).await {
                log::error!("failed to save pending feedback kind: {e:#}");
                return ctx
                    .transport
                    .answer_callback(&q.id, Some(texts::CALLBACK_TRY_AGAIN.to_string()))
                    .await;
            }
            ctx.transport.answer_callback(&q.id, None).await?;

            let reply = Reply::builder()
                .text(texts::feedback_text_prompt(kind))
                .parse_mode(ParseMode::Html)
                .build();
            ctx.transport.send(q.chat_id(), reply).await?;
            log::info!("user {} chose {kind:?} feedback", q.user_id);
        }
    }

    Ok(())
}
