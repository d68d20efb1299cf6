//! # smartassist-client: Application Layer for SmartAssist GST
//!
//! Services the UI calls, built over an injected backend actor, clock and
//! progress store.
//!
//! ## Module Organization
//! ```text
//! smartassist_client/
//! ├── lib.rs             ◄─── You are here (SmartAssist wiring)
//! ├── backend/
//! │   ├── mod.rs         ◄─── Backend trait (remote actor surface)
//! │   ├── memory.rs      ◄─── In-process implementation
//! │   └── seed.rs        ◄─── Due dates, tips, lessons
//! ├── services/          ◄─── One service per screen
//! ├── clock.rs           ◄─── SystemClock / FixedClock
//! ├── progress_store.rs  ◄─── Learning progress on device
//! ├── config.rs          ◄─── TOML + env configuration
//! └── error.rs           ◄─── ClientError
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use smartassist_client::{ClientConfig, SmartAssist};
//!
//! # async fn run() -> smartassist_client::ClientResult<()> {
//! let config = ClientConfig::load_or_default(None);
//! let app = SmartAssist::in_memory(&config, "principal-asha");
//!
//! let preview = app.calculator.preview("1000", "18", false)?;
//! println!("Total: {}", preview.total_amount);
//!
//! let next = app.reminders.upcoming(config.upcoming_limit()).await?;
//! println!("{} upcoming due dates", next.len());
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod clock;
pub mod config;
pub mod error;
pub mod progress_store;
pub mod services;

use std::sync::Arc;

use tracing::info;

pub use backend::{Backend, InMemoryBackend};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use progress_store::{JsonFileProgressStore, MemoryProgressStore, ProgressStore};
pub use services::{
    CalculatorService, InvoiceService, LearningService, ReminderService, SupportService,
};

/// Every service, wired to one set of collaborators.
pub struct SmartAssist {
    pub calculator: CalculatorService,
    pub invoices: InvoiceService,
    pub reminders: ReminderService,
    pub learning: LearningService,
    pub support: SupportService,
}

impl SmartAssist {
    pub fn new(
        backend: Arc<dyn Backend>,
        clock: Arc<dyn Clock>,
        store: Arc<dyn ProgressStore>,
    ) -> Self {
        SmartAssist {
            calculator: CalculatorService::new(Arc::clone(&backend)),
            invoices: InvoiceService::new(Arc::clone(&backend), Arc::clone(&clock)),
            reminders: ReminderService::new(Arc::clone(&backend), clock),
            learning: LearningService::new(Arc::clone(&backend), store),
            support: SupportService::new(backend),
        }
    }

    /// An offline instance: in-memory backend, system clock, and progress
    /// in the configured file (in memory if no data directory exists).
    pub fn in_memory(config: &ClientConfig, caller: &str) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let backend = Arc::new(InMemoryBackend::from_config(
            config,
            caller,
            Arc::clone(&clock),
        ));

        let store: Arc<dyn ProgressStore> = match config.progress_file() {
            Some(path) => {
                info!(?path, "Using learning progress file");
                Arc::new(JsonFileProgressStore::new(path))
            }
            None => Arc::new(MemoryProgressStore::new()),
        };

        Self::new(backend, clock, store)
    }
}
