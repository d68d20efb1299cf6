//! Common test utilities for smartassist-client integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use chrono::NaiveDate;
use smartassist_client::{
    FixedClock, InMemoryBackend, JsonFileProgressStore, SmartAssist,
};
use smartassist_core::time::nanos_from_date;
use smartassist_core::{Plan, UserProfile};
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,smartassist_client=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub const EMAIL: &str = "asha@example.in";

/// 1 August 2025, inside fiscal year 2025.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
}

pub struct TestApp {
    pub app: SmartAssist,
    pub backend: Arc<InMemoryBackend>,
    pub clock: Arc<FixedClock>,
    pub dir: TempDir,
}

impl TestApp {
    pub fn progress_path(&self) -> std::path::PathBuf {
        self.dir.path().join("learning-progress.json")
    }
}

/// App over a seeded in-memory backend, with no profile saved yet.
pub fn spawn_app_without_profile() -> TestApp {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(FixedClock::new(nanos_from_date(today())));
    let backend = Arc::new(InMemoryBackend::seeded(
        "principal-asha",
        clock.clone(),
        2025,
    ));
    let store = Arc::new(JsonFileProgressStore::new(
        dir.path().join("learning-progress.json"),
    ));

    let app = SmartAssist::new(backend.clone(), clock.clone(), store);
    TestApp {
        app,
        backend,
        clock,
        dir,
    }
}

/// App whose caller has a saved profile on `plan`.
pub async fn spawn_app(plan: Plan) -> TestApp {
    use smartassist_client::Backend;

    let test_app = spawn_app_without_profile();
    let mut profile = UserProfile::new_free("Asha", EMAIL);
    profile.plan = plan;
    test_app
        .backend
        .save_caller_user_profile(profile)
        .await
        .unwrap();
    test_app
}
