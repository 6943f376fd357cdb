use std::{sync::Arc, time::Duration};

use anyhow::Result;
use dotenvy_macro::dotenv;
use reqwest::Client;
use simplelog::LevelFilter;
use teloxide::{prelude::*, utils::command::BotCommands};
use tokio::{signal, task::JoinSet};
use tokio_util::sync::CancellationToken;

use bot_handlers::{callback_handler, message_handler, Command, MessageDispatcher};
use common::{spawn_with_token, LogError};
use db::DB;

const DB_FILE: &str = dotenv!("DB_URL");
const TG_BOT_TOKEN: &str = if IS_PROD {
    dotenv!("PROD_BOT_TOKEN")
} else {
    dotenv!("BOT_TOKEN")
};
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const IS_PROD: bool = cfg!(feature = "prod");
const LOG_LEVEL: LevelFilter = if IS_PROD {
    LevelFilter::Info
} else {
    LevelFilter::Debug
};

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let db = DB::init(&db_path()?).await?;

    let bot = Bot::with_client(
        TG_BOT_TOKEN,
        Client::builder().timeout(REQUEST_TIMEOUT).build()?,
    );
    bot.set_my_commands(Command::bot_commands())
        .await
        .log_error_msg("failed to publish bot commands");

    let me = bot.get_me().await?;
    log::info!("running as @{}", me.username());
    let dispatcher = Arc::new(MessageDispatcher::new(me.username()));

    let cancel_token = CancellationToken::new();

    let mut jobs = JoinSet::new();
    jobs.spawn(spawn_with_token(
        cancel_token.clone(),
        start_bot(bot, db, dispatcher),
    ));

    jobs.spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("failed to listen for SIGINT: {e}");
        }
        cancel_token.cancel();
    });

    while (jobs.join_next().await).is_some() {}

    Ok(())
}

fn db_path() -> Result<String> {
    if DB_FILE.is_empty() {
        anyhow::bail!("DB_URL env variable is empty")
    }
    let db_file = if IS_PROD {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/".to_string());
        format!("{home}/{DB_FILE}")
    } else {
        DB_FILE.to_string()
    };
    log::debug!("opening db at {db_file}");
    Ok(db_file)
}

fn init_logger() {
    use simplelog::*;

    let config = ConfigBuilder::new()
        .add_filter_ignore_str("h2")
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest")
        .add_filter_ignore_str("rustls")
        .add_filter_ignore_str("sqlx")
        .build();

    if let Err(e) = TermLogger::init(LOG_LEVEL, config, TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to init logger: {e}");
    }
}

async fn start_bot(bot: Bot, db: DB, dispatcher: Arc<MessageDispatcher>) {
    log::debug!("starting bot");
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![db, dispatcher])
        .default_handler(|update| async move { log::debug!("unhandled update {:?}", update.id) })
        .error_handler(LoggingErrorHandler::with_custom_text("error in dispatcher"))
        .build()
        .dispatch()
        .await;
}
