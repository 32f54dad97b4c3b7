use super::*;

/// Tests pruning old blocklist entries.
///
/// Verifies that entries recorded before the cutoff are removed while recent ones stay.
///
/// Expected: Ok(1) and only the recent entry remaining
#[tokio::test]
async fn removes_entries_before_cutoff() -> Result<(), DbErr> {
    use chrono::{Duration, Utc};
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_table(entity::prelude::TokenBlocklist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    entity::token_blocklist::ActiveModel {
        jti: ActiveValue::Set("old".to_string()),
        created_at: ActiveValue::Set(Utc::now() - Duration::hours(48)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let repo = TokenBlocklistRepository::new(db);
    repo.revoke("recent").await?;

    let removed = repo
        .purge_older_than(Utc::now() - Duration::hours(24))
        .await?;

    assert_eq!(removed, 1);
    assert!(!repo.is_revoked("old").await?);
    assert!(repo.is_revoked("recent").await?);

    Ok(())
}
