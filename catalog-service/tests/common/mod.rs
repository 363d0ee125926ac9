use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use axum::http::HeaderValue;
use catalog_service::domain::book::errors::BookError;
use catalog_service::domain::book::models::Book;
use catalog_service::domain::book::models::BookId;
use catalog_service::domain::book::ports::BookRepository;
use catalog_service::domain::book::service::BookService;
use catalog_service::domain::user::errors::UserError;
use catalog_service::domain::user::models::User;
use catalog_service::domain::user::models::Username;
use catalog_service::domain::user::ports::UserRepository;
use catalog_service::domain::user::service::UserService;
use catalog_service::inbound::http::router::create_router;
use tokio::sync::RwLock;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory user store keyed by username, standing in for Postgres.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        let key = user.username.as_str().to_string();
        if users.contains_key(&key) {
            return Err(UserError::UsernameAlreadyExists(key));
        }
        users.insert(key, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(username.as_str()).cloned())
    }
}

/// In-memory book store that also counts every repository access, so tests
/// can assert the authentication gate short-circuits before storage.
#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<HashMap<BookId, Book>>,
    accesses: AtomicUsize,
}

impl InMemoryBookRepository {
    pub fn access_count(&self) -> usize {
        self.accesses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        self.books.write().await.insert(book.id, book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        let mut books = self.books.write().await;
        if !books.contains_key(&book.id) {
            return Err(BookError::NotFound(book.id.to_string()));
        }
        books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        self.books
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(BookError::NotFound(id.to_string()))
    }

    async fn delete_all(&self) -> Result<u64, BookError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        let mut books = self.books.write().await;
        let removed = books.len() as u64;
        books.clear();
        Ok(removed)
    }
}

/// Test application serving the real router on a random local port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub book_repository: Arc<InMemoryBookRepository>,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().expect("Failed to read address").port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));
        let user_repository = Arc::new(InMemoryUserRepository::default());
        let book_repository = Arc::new(InMemoryBookRepository::default());

        let user_service = Arc::new(UserService::new(
            user_repository,
            Arc::clone(&authenticator),
            1,
        ));
        let book_service = Arc::new(BookService::new(Arc::clone(&book_repository)));

        let allowed_origin: HeaderValue = "http://localhost:5173"
            .parse()
            .expect("Invalid test origin");

        let application = create_router(user_service, book_service, authenticator, allowed_origin);

        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            book_repository,
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a user and log in, returning a bearer token.
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/auth/register")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to register");
        assert!(response.status().is_success(), "registration failed");

        let response = self
            .post("/auth/login")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to login");
        assert!(response.status().is_success(), "login failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse login body");
        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }
}
