//! Shared handle to the session mirror.

use super::SessionState;
use crate::auth::User;

use async_lock::RwLock;
use std::sync::Arc;

/// Cloneable handle to one [`SessionState`].
///
/// Reads and writes go through closures, so the lock is never held across an
/// `.await`: handlers read what they need, release, call the API, then write
/// the result back.
#[derive(Clone, Default)]
pub struct StateStore {
    inner: Arc<RwLock<SessionState>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        let state = self.inner.read().await;
        f(&state)
    }

    pub async fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut state = self.inner.write().await;
        f(&mut state)
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> SessionState {
        self.inner.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.read(SessionState::is_signed_in).await
    }

    pub async fn user(&self) -> Option<User> {
        self.read(|s| s.user().cloned()).await
    }

    /// `(cart_count, wishlist_count)`.
    pub async fn counts(&self) -> (u32, u32) {
        self.read(|s| (s.cart_count(), s.wishlist_count())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SignedIn;

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = StateStore::new();
        let other = store.clone();

        other
            .update(|s| {
                s.sign_in(SignedIn {
                    user: User {
                        id: None,
                        name: "Meera".to_string(),
                        email: "meera@example.com".to_string(),
                        phone: String::new(),
                        address: String::new(),
                        pincode: String::new(),
                    },
                    cart_count: 4,
                    wishlist_count: 1,
                })
            })
            .await;

        assert!(store.is_signed_in().await);
        assert_eq!(store.counts().await, (4, 1));
        assert_eq!(store.user().await.unwrap().name, "Meera");

        store.update(SessionState::sign_out).await;
        assert_eq!(other.counts().await, (0, 0));
    }

    #[test]
    fn test_default_store_is_anonymous() {
        let store = StateStore::default();
        tokio_test::block_on(async {
            assert!(!store.is_signed_in().await);
            assert!(store.user().await.is_none());
            assert!(store.snapshot().await.cart().is_empty());
        });
    }
}
