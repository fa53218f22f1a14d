//! Background thread that reloads the feed snapshot on an interval.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::{NeoDescriptor, load_snapshot};

/// One result of a feed refresh.
#[derive(Debug, Clone)]
pub enum FeedDelivery {
    Snapshot(Vec<NeoDescriptor>),
    Failed(String),
}

/// Handle to the refresh thread. Dropping it stops the thread.
#[derive(Debug)]
pub struct FeedWorker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl FeedWorker {
    /// Start refreshing `path` every `interval`; the first load happens immediately.
    pub fn spawn(path: PathBuf, interval: Duration) -> (Self, Receiver<FeedDelivery>) {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let (res_tx, res_rx) = mpsc::channel::<FeedDelivery>();

        let handle = thread::spawn(move || {
            loop {
                let delivery = match load_snapshot(&path) {
                    Ok(descriptors) => FeedDelivery::Snapshot(descriptors),
                    Err(err) => FeedDelivery::Failed(err.to_string()),
                };
                if res_tx.send(delivery).is_err() {
                    break;
                }
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        (
            Self {
                stop_tx: Some(stop_tx),
                handle: Some(handle),
            },
            res_rx,
        )
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Signal the thread and wait for it. Idempotent.
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for FeedWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_snapshot(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("starmap-{}-{name}.json", std::process::id()));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_first_delivery_is_immediate() {
        let path = write_snapshot(
            "first",
            r#"{"near_earth_objects": {"2024-01-01": [{"name": "(2001 A)"}]}}"#,
        );
        let (mut worker, rx) = FeedWorker::spawn(path.clone(), Duration::from_secs(3600));

        let delivery = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let FeedDelivery::Snapshot(neos) = delivery else {
            panic!("expected a snapshot");
        };
        assert_eq!(neos.len(), 1);

        worker.stop();
        assert!(!worker.is_running());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_reports_failure() {
        let (mut worker, rx) =
            FeedWorker::spawn(PathBuf::from("/nonexistent/starmap.json"), Duration::from_secs(3600));
        let delivery = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(delivery, FeedDelivery::Failed(_)));
        worker.stop();
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut worker, _rx) =
            FeedWorker::spawn(PathBuf::from("/nonexistent/starmap.json"), Duration::from_millis(10));
        worker.stop();
        worker.stop();
        assert!(!worker.is_running());
    }

    #[test]
    fn test_refreshes_repeat() {
        let path = write_snapshot("repeat", r#"{"near_earth_objects": {}}"#);
        let (mut worker, rx) = FeedWorker::spawn(path.clone(), Duration::from_millis(10));
        for _ in 0..3 {
            let delivery = rx.recv_timeout(Duration::from_secs(5)).unwrap();
            assert!(matches!(delivery, FeedDelivery::Snapshot(ref neos) if neos.is_empty()));
        }
        worker.stop();
        let _ = std::fs::remove_file(path);
    }
}
