use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use chrono::Utc;

use crate::user::errors::UserError;
use crate::user::models::AuthenticatedUser;
use crate::user::models::CreateUserCommand;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::models::Username;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for registration and login.
///
/// The authenticator (and with it the signing secret) is injected at
/// construction; nothing here reads ambient state.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    token_ttl_hours: i64,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>, token_ttl_hours: i64) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_hours,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(user).await?;
        tracing::info!(username = %created.username, "User registered");

        Ok(created)
    }

    async fn login(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<AuthenticatedUser, UserError> {
        // Unknown user and wrong password must be indistinguishable
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let claims = Claims::for_subject(user.username.as_str(), self.token_ttl_hours);

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, &claims)
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                other => UserError::Unknown(other.to_string()),
            })?;

        Ok(AuthenticatedUser {
            user,
            access_token: result.access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        }
    }

    fn test_authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(b"test-secret-key-for-jwt-signing-32b!"))
    }

    #[tokio::test]
    async fn test_register_never_stores_plaintext() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.password_hash != "secret123"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository), test_authenticator(), 1);

        let command = CreateUserCommand::new(
            Username::new("alice".to_string()).unwrap(),
            "secret123".to_string(),
        );

        let user = service.register(command).await.unwrap();
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository), test_authenticator(), 1);

        let command = CreateUserCommand::new(
            Username::new("alice".to_string()).unwrap(),
            "secret123".to_string(),
        );

        let result = service.register(command).await;
        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_success_issues_valid_token() {
        let authenticator = test_authenticator();
        let password_hash = authenticator.hash_password("secret123").unwrap();

        let stored = User {
            id: UserId::new(),
            username: Username::new("alice".to_string()).unwrap(),
            password_hash,
            created_at: Utc::now(),
        };

        let mut repository = MockTestUserRepository::new();
        let returned = stored.clone();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator), 1);

        let username = Username::new("alice".to_string()).unwrap();
        let authenticated = service.login(&username, "secret123").await.unwrap();

        let claims = authenticator
            .validate_token(&authenticated.access_token)
            .unwrap();
        assert_eq!(claims.sub, "alice");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let authenticator = test_authenticator();
        let password_hash = authenticator.hash_password("secret123").unwrap();

        let stored = User {
            id: UserId::new(),
            username: Username::new("alice".to_string()).unwrap(),
            password_hash,
            created_at: Utc::now(),
        };

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let service = UserService::new(Arc::new(repository), authenticator, 1);

        let username = Username::new("alice".to_string()).unwrap();
        let result = service.login(&username, "wrong").await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user_same_error_as_wrong_password() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), test_authenticator(), 1);

        let username = Username::new("nobody".to_string()).unwrap();
        let result = service.login(&username, "whatever").await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }
}
