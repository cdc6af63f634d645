use chrono::{DateTime, Utc};

use crate::store::{MarketplaceStore, RefreshSession};

/// Record a refresh token by hash. Expired sessions are pruned on the way.
pub async fn store_refresh(
    store: &MarketplaceStore,
    user_id: i64,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) {
    let now = Utc::now();
    let mut data = store.write().await;
    data.sessions.retain(|_, s| s.expires_at > now);
    data.sessions.insert(
        token_hash.to_string(),
        RefreshSession {
            user_id,
            expires_at,
            revoked: false,
        },
    );
}

/// Revoke a live refresh session for `user_id`. Returns `false` when the
/// hash is unknown, belongs to someone else, is revoked, or has expired.
pub async fn consume_refresh(store: &MarketplaceStore, user_id: i64, token_hash: &str) -> bool {
    let now = Utc::now();
    let mut data = store.write().await;
    match data.sessions.get_mut(token_hash) {
        Some(session) if session.user_id == user_id && !session.revoked && session.expires_at > now => {
            session.revoked = true;
            true
        }
        _ => false,
    }
}

/// Revoke every session of a user. Returns how many were live.
pub async fn revoke_all(store: &MarketplaceStore, user_id: i64) -> usize {
    let mut data = store.write().await;
    let mut revoked = 0;
    for session in data.sessions.values_mut() {
        if session.user_id == user_id && !session.revoked {
            session.revoked = true;
            revoked += 1;
        }
    }
    revoked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn refresh_tokens_are_single_use() {
        let store = MarketplaceStore::new();
        store_refresh(&store, 4, "hash-a", Utc::now() + Duration::days(7)).await;
        assert!(consume_refresh(&store, 4, "hash-a").await);
        assert!(!consume_refresh(&store, 4, "hash-a").await);
    }

    #[tokio::test]
    async fn refresh_rejects_other_users_and_unknown_hashes() {
        let store = MarketplaceStore::new();
        store_refresh(&store, 4, "hash-a", Utc::now() + Duration::days(7)).await;
        assert!(!consume_refresh(&store, 5, "hash-a").await);
        assert!(!consume_refresh(&store, 4, "hash-b").await);
    }

    #[tokio::test]
    async fn expired_sessions_are_pruned() {
        let store = MarketplaceStore::new();
        store_refresh(&store, 4, "old", Utc::now() - Duration::minutes(1)).await;
        store_refresh(&store, 4, "new", Utc::now() + Duration::days(1)).await;
        let data = store.read().await;
        assert!(!data.sessions.contains_key("old"));
        assert!(data.sessions.contains_key("new"));
    }

    #[tokio::test]
    async fn logout_revokes_every_session() {
        let store = MarketplaceStore::new();
        let later = Utc::now() + Duration::days(7);
        store_refresh(&store, 2, "laptop", later).await;
        store_refresh(&store, 2, "phone", later).await;
        store_refresh(&store, 3, "someone-else", later).await;

        assert_eq!(revoke_all(&store, 2).await, 2);
        assert!(!consume_refresh(&store, 2, "phone").await);
        assert!(consume_refresh(&store, 3, "someone-else").await);
    }
}
