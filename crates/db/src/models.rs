use common::{
    types::{Id, UserId},
    DateTime, UnixDateTime,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub enum FeedbackKind {
    /// Something the student liked
    Like,
    /// Something the student would like to add or improve
    Improvement,
}

#[derive(Debug, sqlx::FromRow, bon::Builder)]
pub struct Feedback {
    /// Assigned by db on insert
    #[builder(default)]
    feedback_id: Id,

    /// Telegram id of the author
    #[builder(into)]
    user_id: Id,

    kind: FeedbackKind,

    /// Message text, as sent by user
    #[builder(into)]
    text: String,

    #[builder(default = DateTime::now())]
    created_at: UnixDateTime,
}

impl Feedback {
    pub fn feedback_id(&self) -> Id {
        self.feedback_id
    }
    pub fn user_id(&self) -> UserId {
        self.user_id.into()
    }
    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn created_at(&self) -> UnixDateTime {
        self.created_at
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct Stats {
    pub total: u32,
    pub likes: u32,
    pub improvements: u32,
}

/// Struct helpers for extracting partial structs
pub(crate) mod fetch {
    #[derive(sqlx::FromRow)]
    pub(crate) struct Kind {
        pub kind: super::FeedbackKind,
    }
}
