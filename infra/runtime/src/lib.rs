//! # Runtime
//!
//! Tokio runtime profiles used by the FurEver binaries.
//!
//! The portal does very little asynchronous work (fixture loads at panel mount), so the
//! default profile is a small current-thread runtime. A multi-threaded profile is kept for
//! batch tooling that loads many fixtures at once.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[furever_runtime::main(interactive)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use furever_derive::main;

use anyhow::anyhow;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Fallback worker count when parallelism cannot be detected.
const DEFAULT_WORKER_THREADS: usize = 2;
/// Upper bound for worker threads in the background profile.
const MAX_WORKER_THREADS: usize = 64;
const MIN_STACK_SIZE: usize = 512 * 1024;
const MAX_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Scheduler flavour for a [`RuntimeProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    CurrentThread,
    MultiThread { workers: usize },
}

/// Configuration for a Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeProfile {
    pub flavor: Flavor,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeProfile {
    fn default() -> Self {
        Self::interactive()
    }
}

impl RuntimeProfile {
    /// Single-threaded profile for the command-line front end.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            flavor: Flavor::CurrentThread,
            stack_size: 2 * 1024 * 1024,
            thread_name: "furever-ui".to_owned(),
            thread_keep_alive: Duration::from_secs(10),
        }
    }

    /// Multi-threaded profile sized from available parallelism (or `TOKIO_WORKER_THREADS`).
    #[must_use]
    pub fn background() -> Self {
        Self {
            flavor: Flavor::MultiThread { workers: detect_workers() },
            stack_size: 2 * 1024 * 1024,
            thread_name: "furever-bg".to_owned(),
            thread_keep_alive: Duration::from_secs(60),
        }
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.flavor = Flavor::MultiThread { workers: workers.clamp(1, MAX_WORKER_THREADS) };
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.thread_name = name;
        }
        self
    }
}

fn detect_workers() -> usize {
    std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or_else(|| {
            available_parallelism().map(std::num::NonZero::get).unwrap_or(DEFAULT_WORKER_THREADS)
        })
        .clamp(1, MAX_WORKER_THREADS)
}

/// Builds a Tokio runtime for `profile` with I/O and timers enabled.
///
/// # Errors
///
/// Returns an error if the OS refuses to create the runtime threads.
pub fn build_runtime(profile: &RuntimeProfile) -> Result<Runtime> {
    debug!(profile = ?profile, "Building tokio runtime");

    let mut builder = match profile.flavor {
        Flavor::CurrentThread => Builder::new_current_thread(),
        Flavor::MultiThread { workers } => {
            let mut b = Builder::new_multi_thread();
            b.worker_threads(workers.clamp(1, MAX_WORKER_THREADS));
            b
        },
    };

    builder
        .thread_name(&profile.thread_name)
        .thread_stack_size(profile.stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE))
        .thread_keep_alive(profile.thread_keep_alive)
        .enable_all();

    builder.build().map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_interactive() {
        assert_eq!(RuntimeProfile::default().flavor, Flavor::CurrentThread);
    }

    #[test]
    fn worker_count_is_clamped() {
        let profile = RuntimeProfile::background().with_workers(0);
        assert_eq!(profile.flavor, Flavor::MultiThread { workers: 1 });

        let profile = RuntimeProfile::background().with_workers(10_000);
        assert_eq!(profile.flavor, Flavor::MultiThread { workers: MAX_WORKER_THREADS });
    }

    #[test]
    fn stack_size_is_clamped() {
        assert_eq!(RuntimeProfile::default().with_stack_size(1).stack_size, MIN_STACK_SIZE);
        assert_eq!(RuntimeProfile::default().with_stack_size(usize::MAX).stack_size, MAX_STACK_SIZE);
    }

    #[test]
    fn blank_thread_name_is_ignored() {
        assert_eq!(RuntimeProfile::interactive().with_thread_name("  ").thread_name, "furever-ui");
    }

    #[test]
    fn built_runtime_executes_futures() -> Result<()> {
        let rt = build_runtime(&RuntimeProfile::interactive())?;
        let value = rt.block_on(async { 21 * 2 });
        assert_eq!(value, 42);
        Ok(())
    }
}
