use async_trait::async_trait;

use crate::user::errors::UserError;
use crate::user::models::AuthenticatedUser;
use crate::user::models::CreateUserCommand;
use crate::user::models::User;
use crate::user::models::Username;

/// Port for user domain service operations (registration and login).
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user: hash the password and persist the record.
    /// The plaintext password is neither stored nor logged.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - username is already taken
    /// * `DatabaseError` - storage operation failed
    async fn register(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// Unknown username and wrong password both fail with
    /// `InvalidCredentials`; no token state is recorded server-side.
    ///
    /// # Errors
    /// * `InvalidCredentials` - username absent or password mismatch
    /// * `DatabaseError` - storage operation failed
    async fn login(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<AuthenticatedUser, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user. Uniqueness of the username is enforced here.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - username is already taken
    /// * `DatabaseError` - storage operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by username (None if absent).
    ///
    /// # Errors
    /// * `DatabaseError` - storage operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
