//! Redis Cooldown Store
//!
//! Existence-only keys with a server-side TTL. A user is in cooldown
//! exactly while their key exists; Redis expires it on its own.

use redis::{Client, aio::ConnectionManager};

use kernel::id::UserId;

use crate::domain::repository::CooldownStore;
use crate::error::AuthResult;

const KEY_PREFIX: &str = "email-verification:cooldown:";

/// Redis-backed cooldown store
#[derive(Clone)]
pub struct RedisCooldownStore {
    manager: ConnectionManager,
}

impl RedisCooldownStore {
    /// Connect and hand back a store over a self-reconnecting manager
    pub async fn connect(url: &str) -> AuthResult<Self> {
        tracing::info!(url = %url, "Connecting to Redis");
        let client = Client::open(url)?;
        let manager = client.get_connection_manager().await?;
        Ok(Self { manager })
    }

    fn key(user_id: &UserId) -> String {
        format!("{KEY_PREFIX}{}", user_id.to_hex())
    }
}

impl CooldownStore for RedisCooldownStore {
    async fn is_active(&self, user_id: &UserId) -> AuthResult<bool> {
        let mut conn = self.manager.clone();
        let exists: bool = redis::cmd("EXISTS")
            .arg(Self::key(user_id))
            .query_async(&mut conn)
            .await?;
        Ok(exists)
    }

    async fn activate(&self, user_id: &UserId, ttl_secs: u64) -> AuthResult<()> {
        let mut conn = self.manager.clone();
        redis::cmd("SET")
            .arg(Self::key(user_id))
            .arg("1")
            .arg("EX")
            .arg(ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }
}
