use std::sync::Arc;

use teloxide::{prelude::*, types::ParseMode};

use db::DB;

use crate::{
    dispatcher::{Context, Incoming, MessageDispatcher},
    keyboards::Keyboards,
    texts, Reply, SendError,
};

/// Entry point for all messages: triggers first, then feedback text
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    db: DB,
    dispatcher: Arc<MessageDispatcher>,
) -> Result<(), SendError> {
    let ctx = Context::new(&bot, &db);
    handle_message(&ctx, &dispatcher, &Incoming::from(&msg)).await
}

/// Triggers take precedence over pending feedback choice
pub(crate) async fn handle_message(
    ctx: &Context<'_>,
    dispatcher: &MessageDispatcher,
    msg: &Incoming,
) -> Result<(), SendError> {
    if dispatcher.dispatch(ctx, msg).await?.is_none() {
        submit_feedback(ctx, msg).await?;
    }
    Ok(())
}

fn started_msg(msg: &Incoming) -> String {
    format!("user {} started the bot", msg.sender())
}

pub(crate) async fn start(ctx: &Context<'_>, msg: &Incoming) -> Result<(), SendError> {
    let reply = Reply::builder()
        .photo(texts::START_PHOTO)
        .text(texts::START_CAPTION)
        .parse_mode(ParseMode::Html)
        .keyboard(Keyboards::main())
        .build();

    match ctx.transport.send(msg.chat_id, reply).await {
        Ok(()) => {
            log::info!("{}", started_msg(msg));
            Ok(())
        }
        Err(e) => {
            log::error!("failed to handle /start: {e}");
            send_error(ctx, msg).await
        }
    }
}

pub(crate) async fn feedback_menu(ctx: &Context<'_>, msg: &Incoming) -> Result<(), SendError> {
    let reply = Reply::builder()
        .text(texts::FEEDBACK_PROMPT)
        .parse_mode(ParseMode::Html)
        .keyboard(Keyboards::feedback())
        .build();

    match ctx.transport.send(msg.chat_id, reply).await {
        Ok(()) => {
            log::info!("user {} opened feedback menu", msg.sender());
            Ok(())
        }
        Err(SendError::BadRequest(e)) => {
            log::error!("telegram refused feedback menu: {e}");
            send_error(ctx, msg).await
        }
        Err(e) => {
            log::error!("unexpected error when sending feedback menu: {e:?}");
            send_error(ctx, msg).await
        }
    }
}

pub(crate) async fn help(ctx: &Context<'_>, msg: &Incoming) -> Result<(), SendError> {
    let reply = Reply::builder()
        .text(texts::HELP)
        .parse_mode(ParseMode::Html)
        .keyboard(Keyboards::main())
        .build();

    if let Err(e) = ctx.transport.send(msg.chat_id, reply).await {
        log::error!("failed to send help: {e}");
        return send_error(ctx, msg).await;
    }
    Ok(())
}

/// Failures end with own message instead of [`send_error`]
pub(crate) async fn stats(ctx: &Context<'_>, msg: &Incoming) -> Result<(), SendError> {
    if let Err(e) = send_stats(ctx, msg).await {
        log::error!("failed to get stats: {e:#}");
        return ctx
            .transport
            .send(msg.chat_id, Reply::builder().text(texts::STATS_ERROR).build())
            .await;
    }
    Ok(())
}

async fn send_stats(ctx: &Context<'_>, msg: &Incoming) -> anyhow::Result<()> {
    let stats = ctx.store.get_feedback_stats().await?;
    let reply = Reply::builder()
        .text(texts::format_stats(&stats))
        .parse_mode(ParseMode::Html)
        .build();

    ctx.transport.send(msg.chat_id, reply).await?;
    Ok(())
}

/// Errors are not handled here
pub(crate) async fn resources(ctx: &Context<'_>, msg: &Incoming) -> Result<(), SendError> {
    let reply = Reply::builder()
        .photo(texts::RESOURCES_PHOTO)
        .text(texts::resources_caption())
        .parse_mode(ParseMode::MarkdownV2)
        .disable_link_preview(true)
        .keyboard(Keyboards::main())
        .build();

    ctx.transport.send(msg.chat_id, reply).await
}

/// Save text as feedback, if user chose feedback kind before. Otherwise
/// message is ignored
pub(crate) async fn submit_feedback(ctx: &Context<'_>, msg: &Incoming) -> Result<(), SendError> {
    let (Some(user_id), Some(text)) = (msg.user_id, msg.text.as_deref()) else {
        return Ok(());
    };

    let kind = match ctx.store.take_pending_kind(user_id).await {
        Ok(Some(kind)) => kind,
        Ok(None) => return Ok(()),
        Err(e) => {
            log::error!("failed to load pending feedback kind for user {user_id}: {e:#}");
            return send_error(ctx, msg).await;
        }
    };

    match ctx.store.add_feedback(user_id, kind, text).await {
        Ok(id) => {
            log::info!("user {user_id} left {kind:?} feedback {id}");
            let reply = Reply::builder()
                .text(texts::FEEDBACK_SAVED)
                .keyboard(Keyboards::main())
                .build();
            ctx.transport.send(msg.chat_id, reply).await
        }
        Err(e) => {
            log::error!("failed to save feedback from user {user_id}: {e:#}");
            send_error(ctx, msg).await
        }
    }
}

/// Common answer when handler failed. Errors are not handled here
pub(crate) async fn send_error(ctx: &Context<'_>, msg: &Incoming) -> Result<(), SendError> {
    let reply = Reply::builder()
        .text(texts::GENERIC_ERROR)
        .keyboard(Keyboards::main())
        .build();
    ctx.transport.send(msg.chat_id, reply).await
}
