//! Credential store: signup and login over a [`UserRepository`].

use std::sync::Arc;

use tracing::{info, warn};

use super::password::PasswordHasher;
use crate::db::UserRepository;
use crate::error::{AppError, AppResult};
use crate::models::UserId;

/// Plaintext behind the stand-in hash verified for unknown emails.
const DUMMY_PASSWORD: &str = "eventhub-no-such-user";

#[derive(Clone)]
pub struct CredentialService {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
    /// Same cost as real hashes, so an unknown email costs one full verify.
    dummy_hash: Arc<str>,
}

impl CredentialService {
    /// Builds the hasher and its dummy hash. Blocks for one hash; call at startup.
    pub fn new(users: Arc<dyn UserRepository>) -> AppResult<Self> {
        let hasher = PasswordHasher::new()?;
        let dummy_hash = hasher.hash(DUMMY_PASSWORD)?.into();
        Ok(Self {
            users,
            hasher,
            dummy_hash,
        })
    }

    /// Create an account. The plaintext is hashed before it reaches the store.
    pub async fn create_user(&self, email: &str, plaintext: &str) -> AppResult<UserId> {
        let hash = self.hash_blocking(plaintext.to_owned()).await?;
        let user = self.users.user_create(email, &hash).await?;
        info!(user_id = user.id, "user created");
        Ok(user.id)
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<(UserId, String)> {
        self.users
            .user_find_by_email(email)
            .await?
            .map(|u| (u.id, u.password_hash))
            .ok_or(AppError::NotFound("User not found"))
    }

    /// Check a login attempt. Unknown email and wrong password give the same
    /// error after the same amount of hashing work.
    pub async fn authenticate(&self, email: &str, plaintext: &str) -> AppResult<UserId> {
        let (user_id, hash) = match self.find_by_email(email).await {
            Ok(found) => found,
            Err(AppError::NotFound(_)) => {
                self.verify_blocking(plaintext.to_owned(), self.dummy_hash.to_string())
                    .await?;
                warn!("login rejected: unknown email");
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        if !self.verify_blocking(plaintext.to_owned(), hash).await? {
            warn!(user_id, "login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }
        Ok(user_id)
    }

    async fn hash_blocking(&self, plaintext: String) -> AppResult<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| AppError::Internal(e.into()))?
    }

    async fn verify_blocking(&self, plaintext: String, hash: String) -> AppResult<bool> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hash))
            .await
            .map_err(|e| AppError::Internal(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use std::time::Instant;

    fn service() -> (CredentialService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (CredentialService::new(store.clone()).unwrap(), store)
    }

    #[tokio::test]
    async fn signup_then_login() {
        let (creds, _) = service();
        let id = creds.create_user("a@x.com", "pw").await.unwrap();
        assert_eq!(creds.authenticate("a@x.com", "pw").await.unwrap(), id);
    }

    #[tokio::test]
    async fn stored_hash_is_not_plaintext() {
        let (creds, store) = service();
        creds.create_user("a@x.com", "secret-pw").await.unwrap();
        let row = store.user_find_by_email("a@x.com").await.unwrap().unwrap();
        assert_ne!(row.password_hash, "secret-pw");
        let (_, hash) = creds.find_by_email("a@x.com").await.unwrap();
        assert_eq!(hash, row.password_hash);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let (creds, _) = service();
        creds.create_user("a@x.com", "pw").await.unwrap();
        assert!(matches!(
            creds.create_user("a@x.com", "other").await,
            Err(AppError::DuplicateEmail)
        ));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let (creds, _) = service();
        creds.create_user("a@x.com", "pw").await.unwrap();
        assert!(matches!(
            creds.authenticate("a@x.com", "nope").await,
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            creds.authenticate("b@x.com", "pw").await,
            Err(AppError::InvalidCredentials)
        ));
    }

    #[test]
    fn dummy_hash_uses_the_real_cost() {
        let (creds, _) = service();
        let real = creds.hasher.hash("pw").unwrap();
        let params = |h: &str| h.rsplitn(3, '$').nth(2).map(str::to_owned);
        assert_eq!(params(&creds.dummy_hash), params(&real));
        assert!(creds.hasher.verify(DUMMY_PASSWORD, &creds.dummy_hash));
    }

    #[tokio::test]
    async fn unknown_email_costs_as_much_as_wrong_password() {
        let (creds, _) = service();
        creds.create_user("a@x.com", "pw").await.unwrap();

        let start = Instant::now();
        let wrong = creds.authenticate("a@x.com", "nope").await;
        let wrong_elapsed = start.elapsed();

        let start = Instant::now();
        let unknown = creds.authenticate("ghost@x.com", "nope").await;
        let unknown_elapsed = start.elapsed();

        assert!(matches!(wrong, Err(AppError::InvalidCredentials)));
        assert!(matches!(unknown, Err(AppError::InvalidCredentials)));
        assert!(
            unknown_elapsed * 4 >= wrong_elapsed,
            "unknown email took {unknown_elapsed:?}, wrong password {wrong_elapsed:?}"
        );
    }

    #[tokio::test]
    async fn find_by_email_reports_not_found() {
        let (creds, _) = service();
        assert!(matches!(
            creds.find_by_email("nobody@x.com").await,
            Err(AppError::NotFound(_))
        ));
    }
}
