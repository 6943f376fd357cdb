use async_trait::async_trait;

use common::types::{Id, UserId};
use db::{
    models::{Feedback, FeedbackKind, Stats},
    DB,
};

/// Feedback persistence, as seen from handlers
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn get_feedback_stats(&self) -> anyhow::Result<Stats>;
    async fn add_feedback(&self, user_id: UserId, kind: FeedbackKind, text: &str) -> anyhow::Result<Id>;
    async fn save_pending_kind(&self, user_id: UserId, kind: FeedbackKind) -> anyhow::Result<()>;
    async fn take_pending_kind(&self, user_id: UserId) -> anyhow::Result<Option<FeedbackKind>>;
}

#[async_trait]
impl FeedbackStore for DB {
    async fn get_feedback_stats(&self) -> anyhow::Result<Stats> {
        Ok(DB::get_feedback_stats(self).await?)
    }
    async fn add_feedback(&self, user_id: UserId, kind: FeedbackKind, text: &str) -> anyhow::Result<Id> {
        let feedback = Feedback::builder().user_id(user_id).kind(kind).text(text).build();
        Ok(DB::add_feedback(self, feedback).await?)
    }
    async fn save_pending_kind(&self, user_id: UserId, kind: FeedbackKind) -> anyhow::Result<()> {
        Ok(DB::save_pending_kind(self, user_id, kind).await?)
    }
    async fn take_pending_kind(&self, user_id: UserId) -> anyhow::Result<Option<FeedbackKind>> {
        Ok(DB::take_pending_kind(self, user_id).await?)
    }
}
