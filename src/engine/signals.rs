// src/engine/signals.rs

//! SIGINT / SIGTERM → cooperative shutdown flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::info;

use crate::errors::Result;

/// Process-wide shutdown request.
///
/// Set at most once from the signal task; read by the run loop only at
/// cycle boundaries. Setting it also wakes a pending sleep.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    requested: Arc<AtomicBool>,
    wake: Arc<Notify>,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown. Returns `true` only for the first request.
    pub fn request(&self) -> bool {
        let first = !self.requested.swap(true, Ordering::SeqCst);
        if first {
            self.wake.notify_one();
        }
        first
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Resolve once shutdown has been requested.
    pub async fn wait(&self) {
        if self.is_requested() {
            return;
        }
        self.wake.notified().await;
    }
}

/// Register SIGINT and SIGTERM handlers that set `flag`.
///
/// The handlers only log and set the flag; the run loop performs the actual
/// shutdown. Must be called from within a Tokio runtime.
#[cfg(unix)]
pub fn install_signal_handlers(flag: ShutdownFlag) -> Result<JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(tokio::spawn(async move {
        loop {
            let name = tokio::select! {
                Some(()) = interrupt.recv() => "SIGINT",
                Some(()) = terminate.recv() => "SIGTERM",
                else => break,
            };
            info!("Received {name}");
            if name == "SIGINT" {
                info!("User terminated program.");
            }
            flag.request();
        }
    }))
}

#[cfg(not(unix))]
pub fn install_signal_handlers(flag: ShutdownFlag) -> Result<JoinHandle<()>> {
    Ok(tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            info!("Received SIGINT");
            info!("User terminated program.");
            flag.request();
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn only_the_first_request_counts() {
        let flag = ShutdownFlag::new();
        assert!(!flag.is_requested());
        assert!(flag.request());
        assert!(!flag.request());
        assert!(flag.clone().is_requested());
    }

    #[tokio::test]
    async fn wait_wakes_on_request_from_another_task() {
        let flag = ShutdownFlag::new();
        let remote = flag.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            remote.request();
        });

        tokio::time::timeout(Duration::from_secs(5), flag.wait())
            .await
            .expect("wait did not resolve");
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_already_requested() {
        let flag = ShutdownFlag::new();
        flag.request();
        tokio::time::timeout(Duration::from_millis(100), flag.wait())
            .await
            .expect("wait should not block");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn sigterm_sets_the_flag() {
        let flag = ShutdownFlag::new();
        let _handlers = install_signal_handlers(flag.clone()).unwrap();

        let status = std::process::Command::new("kill")
            .args(["-TERM", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(5), flag.wait())
            .await
            .expect("SIGTERM did not set the shutdown flag");
        assert!(flag.is_requested());
    }
}
