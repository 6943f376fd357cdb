use async_trait::async_trait;
use reqwest::Url;
use teloxide::{
    prelude::*,
    types::{InputFile, LinkPreviewOptions, ParseMode, ReplyMarkup},
    RequestError,
};

/// Outgoing message. When `photo` is set, `text` is sent as its caption
#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct Reply {
    #[builder(into)]
    text: String,

    /// Link to image
    #[builder(into)]
    photo: Option<String>,

    parse_mode: Option<ParseMode>,

    /// Telegram shows no preview for photo captions, so this is only applied
    /// to text messages
    #[builder(default)]
    disable_link_preview: bool,

    #[builder(into)]
    keyboard: Option<ReplyMarkup>,
}

impl Reply {
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }
    pub fn parse_mode(&self) -> Option<ParseMode> {
        self.parse_mode
    }
    pub fn disable_link_preview(&self) -> bool {
        self.disable_link_preview
    }
    pub fn keyboard(&self) -> Option<&ReplyMarkup> {
        self.keyboard.as_ref()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// Request was delivered, but telegram refused it
    #[error("telegram rejected request: {0}")]
    BadRequest(String),
    #[error("invalid photo url {0}: {1}")]
    InvalidUrl(String, String),
    #[error(transparent)]
    Request(RequestError),
}

impl From<RequestError> for SendError {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::Api(e) => Self::BadRequest(e.to_string()),
            e => Self::Request(e),
        }
    }
}

/// Everything handlers need from the messaging side
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, chat_id: ChatId, reply: Reply) -> Result<(), SendError>;
    /// Answer to button press. `alert` is shown to user as popup
    async fn answer_callback(&self, query_id: &str, alert: Option<String>) -> Result<(), SendError>;
}

#[async_trait]
impl Transport for Bot {
    async fn send(&self, chat_id: ChatId, reply: Reply) -> Result<(), SendError> {
        let Reply {
            text,
            photo,
            parse_mode,
            disable_link_preview,
            keyboard,
        } = reply;

        if let Some(photo) = photo {
            let url = Url::parse(&photo).map_err(|e| SendError::InvalidUrl(photo.clone(), e.to_string()))?;

            let mut req = self.send_photo(chat_id, InputFile::url(url)).caption(text);
            if let Some(mode) = parse_mode {
                req = req.parse_mode(mode);
            }
            if let Some(keyboard) = keyboard {
                req = req.reply_markup(keyboard);
            }
            req.await?;
        } else {
            let mut req = self.send_message(chat_id, text);
            if let Some(mode) = parse_mode {
                req = req.parse_mode(mode);
            }
            if disable_link_preview {
                req = req.link_preview_options(no_link_preview());
            }
            if let Some(keyboard) = keyboard {
                req = req.reply_markup(keyboard);
            }
            req.await?;
        }

        Ok(())
    }

    async fn answer_callback(&self, query_id: &str, alert: Option<String>) -> Result<(), SendError> {
        let req = self.answer_callback_query(query_id);
        match alert {
            Some(text) => req.text(text).show_alert(true).await?,
            None => req.await?,
        };
        Ok(())
    }
}

fn no_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}
