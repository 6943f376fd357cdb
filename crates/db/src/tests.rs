use common::types::UserId;
use models::{Feedback, FeedbackKind, Stats};

use super::*;

const USER_ID: UserId = UserId(1);

async fn prepare() -> Result<DB> {
    common::init_logger();

    const DIR: &str = "target/test-db";
    const REL_PATH: &str = "../..";
    std::fs::create_dir_all(format!("{REL_PATH}/{DIR}")).unwrap();
    let path_fmt = |id| format!("{REL_PATH}/{DIR}/{id}.db");

    // in hope that no single test can call this at the same time
    let mut id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    let mut file = path_fmt(id);
    while std::fs::exists(&file).unwrap() {
        id += 1;
        file = path_fmt(id);
    }

    log::debug!("using db at {DIR}/{id}.db");
    DB::init(&file).await
}

fn feedback(user_id: UserId, kind: FeedbackKind, text: &str) -> Feedback {
    Feedback::builder().user_id(user_id).kind(kind).text(text).build()
}

#[tokio::test]
async fn test_stats_empty() -> Result<()> {
    let db = prepare().await?;

    assert_eq!(db.get_feedback_stats().await?, Stats::default());

    Ok(())
}

#[tokio::test]
async fn test_stats_counts_kinds() -> Result<()> {
    let db = prepare().await?;

    for (i, kind) in [
        FeedbackKind::Like,
        FeedbackKind::Like,
        FeedbackKind::Improvement,
        FeedbackKind::Like,
    ]
    .into_iter()
    .enumerate()
    {
        db.add_feedback(feedback(UserId(i as u64), kind, "text")).await?;
    }

    let stats = db.get_feedback_stats().await?;
    assert_eq!(
        stats,
        Stats {
            total: 4,
            likes: 3,
            improvements: 1,
        }
    );

    Ok(())
}

#[tokio::test]
async fn test_select_feedback_latest_first() -> Result<()> {
    let db = prepare().await?;

    let first = db.add_feedback(feedback(USER_ID, FeedbackKind::Like, "first")).await?;
    let second = db
        .add_feedback(feedback(USER_ID, FeedbackKind::Improvement, "second"))
        .await?;
    assert_ne!(first, second);

    let list = db.select_feedback(10).await?;
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].feedback_id(), second);
    assert_eq!(list[0].text(), "second");
    assert_eq!(list[0].kind(), FeedbackKind::Improvement);
    assert_eq!(list[1].user_id(), USER_ID);

    assert_eq!(db.select_feedback(1).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_pending_kind_is_taken_once() -> Result<()> {
    let db = prepare().await?;

    assert_eq!(db.take_pending_kind(USER_ID).await?, None);

    db.save_pending_kind(USER_ID, FeedbackKind::Like).await?;
    assert_eq!(db.take_pending_kind(USER_ID).await?, Some(FeedbackKind::Like));
    assert_eq!(db.take_pending_kind(USER_ID).await?, None);

    Ok(())
}

#[tokio::test]
async fn test_pending_kind_replaced() -> Result<()> {
    let db = prepare().await?;

    db.save_pending_kind(USER_ID, FeedbackKind::Like).await?;
    db.save_pending_kind(USER_ID, FeedbackKind::Improvement).await?;
    // other user does not interfere
    db.save_pending_kind(UserId(2), FeedbackKind::Like).await?;

    assert_eq!(
        db.take_pending_kind(USER_ID).await?,
        Some(FeedbackKind::Improvement)
    );
    assert_eq!(db.take_pending_kind(UserId(2)).await?, Some(FeedbackKind::Like));

    Ok(())
}
