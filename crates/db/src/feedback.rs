use common::{
    types::{Id, UserId},
    DateTime,
};

use crate::models::{self, FeedbackKind};

use super::{Result, DB, FEEDBACK_TABLE, PENDING_FEEDBACK_TABLE};

impl DB {
    /// Returns id of saved feedback
    pub async fn add_feedback(&self, feedback: models::Feedback) -> Result<Id> {
        log::debug!("saving {:?} feedback from user {}", feedback.kind(), feedback.user_id());
        let user_id: Id = feedback.user_id().into();
        let res = sqlx::query(&format!(
            "insert into {FEEDBACK_TABLE} (user_id, kind, text, created_at)
             values (?, ?, ?, ?)"
        ))
        .bind(user_id)
        .bind(feedback.kind())
        .bind(feedback.text())
        .bind(feedback.created_at())
        .execute(&self.pool)
        .await?;

        Ok(res.last_insert_rowid())
    }
    /// Latest feedback first
    pub async fn select_feedback(&self, limit: u32) -> Result<Vec<models::Feedback>> {
        log::debug!("select last {limit} feedback");
        Ok(sqlx::query_as::<_, models::Feedback>(&format!(
            "select * from {FEEDBACK_TABLE}
             order by created_at desc, feedback_id desc
             limit ?"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }
    /// Remember which kind of feedback user is going to send. Replaces
    /// previous choice
    pub async fn save_pending_kind(&self, user_id: impl Into<UserId>, kind: FeedbackKind) -> Result<()> {
        let user_id = user_id.into();
        log::debug!("saving pending {kind:?} feedback for user {user_id}");
        let id: Id = user_id.into();
        sqlx::query(&format!(
            "insert into {PENDING_FEEDBACK_TABLE} (user_id, kind, chosen_at)
             values (?, ?, ?)
             on conflict(user_id)
             do update set kind=excluded.kind, chosen_at=excluded.chosen_at"
        ))
        .bind(id)
        .bind(kind)
        .bind(DateTime::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
    /// Remove and return pending choice of user
    pub async fn take_pending_kind(&self, user_id: impl Into<UserId>) -> Result<Option<FeedbackKind>> {
        let user_id = user_id.into();
        log::debug!("take pending feedback kind for user {user_id}");
        let id: Id = user_id.into();
        let res = sqlx::query_as::<_, models::fetch::Kind>(&format!(
            "delete from {PENDING_FEEDBACK_TABLE}
             where user_id = ?
             returning kind"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(res.map(|r| r.kind))
    }
}
