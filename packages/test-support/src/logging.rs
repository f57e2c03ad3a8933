//! Unified test logging initialization
//!
//! Shared by the db-select unit and integration tests. With logging enabled,
//! the factory's `connection target resolved` events show which
//! `host:port/db_name` each test handed to its connector:
//!
//!   TEST_LOG=db_select=debug cargo test -p db-select --test factory_tests

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe: every test may call it, and only the first call
/// installs a subscriber. The filter is taken, in order of precedence, from:
///
/// 1. `TEST_LOG` environment variable (preferred)
/// 2. `RUST_LOG` environment variable (fallback)
/// 3. `"warn"` (default, which hides the factory's debug events)
///
/// The subscriber is configured with:
/// - `with_test_writer()` so cargo/nextest capture output per test
/// - `without_time()` for stable output
/// - `try_init().ok()` so a subscriber installed elsewhere is left in place
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
