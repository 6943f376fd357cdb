use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use anyhow::anyhow;
use async_trait::async_trait;
use teloxide::types::ChatId;

use common::types::{Id, UserId};
use db::models::{FeedbackKind, Stats};

use crate::{dispatcher::Incoming, FeedbackStore, Reply, SendError, Transport};

pub(crate) const USER_ID: UserId = UserId(7);
pub(crate) const CHAT_ID: ChatId = ChatId(7);

pub(crate) fn incoming(text: &str) -> Incoming {
    Incoming::new(CHAT_ID, Some(USER_ID), text)
}

/// Remembers everything sent. Queued failures are returned by next sends
/// instead of sending
#[derive(Default)]
pub(crate) struct RecordingTransport {
    sent: Mutex<Vec<(ChatId, Reply)>>,
    answers: Mutex<Vec<(String, Option<String>)>>,
    failures: Mutex<VecDeque<SendError>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }
    pub(crate) fn failing(failures: impl IntoIterator<Item = SendError>) -> Self {
        Self {
            failures: Mutex::new(failures.into_iter().collect()),
            ..Self::default()
        }
    }
    pub(crate) fn sent(&self) -> Vec<Reply> {
        self.sent_to().into_iter().map(|(_, r)| r).collect()
    }
    pub(crate) fn sent_to(&self) -> Vec<(ChatId, Reply)> {
        self.sent.lock().unwrap().clone()
    }
    pub(crate) fn answers(&self) -> Vec<(String, Option<String>)> {
        self.answers.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, chat_id: ChatId, reply: Reply) -> Result<(), SendError> {
        if let Some(e) = self.failures.lock().unwrap().pop_front() {
            return Err(e);
        }
        self.sent.lock().unwrap().push((chat_id, reply));
        Ok(())
    }
    async fn answer_callback(&self, query_id: &str, alert: Option<String>) -> Result<(), SendError> {
        self.answers.lock().unwrap().push((query_id.to_string(), alert));
        Ok(())
    }
}

/// In-memory store. Stats query fails unless stats are set
pub(crate) struct StubStore {
    stats: Option<Stats>,
    available: bool,
    pending: Mutex<HashMap<UserId, FeedbackKind>>,
    saved: Mutex<Vec<(UserId, FeedbackKind, String)>>,
}

impl Default for StubStore {
    fn default() -> Self {
        Self {
            stats: None,
            available: true,
            pending: Mutex::default(),
            saved: Mutex::default(),
        }
    }
}

impl StubStore {
    pub(crate) fn with_stats(stats: Stats) -> Self {
        Self {
            stats: Some(stats),
            ..Self::default()
        }
    }
    /// Every query fails
    pub(crate) fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }
    pub(crate) fn choose(&self, user_id: UserId, kind: FeedbackKind) {
        self.pending.lock().unwrap().insert(user_id, kind);
    }
    pub(crate) fn pending(&self, user_id: UserId) -> Option<FeedbackKind> {
        self.pending.lock().unwrap().get(&user_id).copied()
    }
    pub(crate) fn saved(&self) -> Vec<(UserId, FeedbackKind, String)> {
        self.saved.lock().unwrap().clone()
    }
    fn check(&self) -> anyhow::Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(anyhow!("store is unavailable"))
        }
    }
}

#[async_trait]
impl FeedbackStore for StubStore {
    async fn get_feedback_stats(&self) -> anyhow::Result<Stats> {
        self.check()?;
        self.stats.ok_or_else(|| anyhow!("stats are unavailable"))
    }
    async fn add_feedback(&self, user_id: UserId, kind: FeedbackKind, text: &str) -> anyhow::Result<Id> {
        self.check()?;
        let mut saved = self.saved.lock().unwrap();
        saved.push((user_id, kind, text.to_string()));
        Ok(saved.len() as Id)
    }
    async fn save_pending_kind(&self, user_id: UserId, kind: FeedbackKind) -> anyhow::Result<()> {
        self.check()?;
        self.choose(user_id, kind);
        Ok(())
    }
    async fn take_pending_kind(&self, user_id: UserId) -> anyhow::Result<Option<FeedbackKind>> {
        self.check()?;
        Ok(self.pending.lock().unwrap().remove(&user_id))
    }
}
