#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use trunc8::application::services::{RedirectService, ShortenerService};
use trunc8::domain::entities::{Link, LinkTotals, NewLink};
use trunc8::domain::error::{LinkError, StorageError};
use trunc8::domain::repositories::LinkRepository;
use trunc8::infrastructure::persistence::InMemoryLinkRepository;
use trunc8::routes::router;
use trunc8::state::AppState;
use trunc8::utils::code_generator::{CodeGenerator, generate_code};

pub const BASE_URL: &str = "http://s.test";

/// Generator replaying a fixed list of codes, then falling back to random ones.
#[derive(Default)]
pub struct SequenceGenerator {
    codes: Mutex<VecDeque<String>>,
}

impl SequenceGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
        }
    }
}

impl CodeGenerator for SequenceGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(generate_code)
    }
}

pub struct TestContext {
    pub repo: Arc<InMemoryLinkRepository>,
    pub shortener: Arc<ShortenerService>,
    pub redirector: Arc<RedirectService>,
    pub state: AppState,
}

pub fn create_test_context(codes: &[&str]) -> TestContext {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let store: Arc<dyn LinkRepository> = repo.clone();

    let shortener = Arc::new(ShortenerService::new(
        store.clone(),
        Arc::new(SequenceGenerator::new(codes)),
    ));
    let redirector = Arc::new(RedirectService::new(store.clone()));
    let state = AppState::new(shortener.clone(), redirector.clone(), store, BASE_URL);

    TestContext {
        repo,
        shortener,
        redirector,
        state,
    }
}

/// Store whose every call fails, as a database that refuses connections would.
pub struct FailingLinkRepository;

fn unavailable() -> LinkError {
    StorageError::Unavailable("connection refused".to_string()).into()
}

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, LinkError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, LinkError> {
        Err(unavailable())
    }

    async fn increment_click(&self, _code: &str) -> Result<Option<Link>, LinkError> {
        Err(unavailable())
    }

    async fn totals(&self) -> Result<LinkTotals, LinkError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), LinkError> {
        Err(unavailable())
    }
}

/// Store whose ping never answers.
pub struct HangingLinkRepository;

#[async_trait]
impl LinkRepository for HangingLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, LinkError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, LinkError> {
        Ok(None)
    }

    async fn increment_click(&self, _code: &str) -> Result<Option<Link>, LinkError> {
        Ok(None)
    }

    async fn totals(&self) -> Result<LinkTotals, LinkError> {
        Ok(LinkTotals::default())
    }

    async fn ping(&self) -> Result<(), LinkError> {
        std::future::pending().await
    }
}

/// State wired around an arbitrary store with the given store deadline.
pub fn create_state_with_store(
    store: Arc<dyn LinkRepository>,
    store_timeout: Duration,
) -> AppState {
    let shortener = ShortenerService::new(store.clone(), Arc::new(SequenceGenerator::default()))
        .with_store_timeout(store_timeout);
    let redirector = RedirectService::new(store.clone()).with_store_timeout(store_timeout);

    AppState::new(Arc::new(shortener), Arc::new(redirector), store, BASE_URL)
        .with_store_timeout(store_timeout)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub fn is_valid_code(code: &str) -> bool {
    code.len() == 4
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
