use std::time::Duration;

/// Resolve after `duration_ms` milliseconds on the tokio timer.
///
/// Dropping the future is the only way to cancel it.
pub async fn wait(duration_ms: u64) {
    tokio::time::sleep(Duration::from_millis(duration_ms)).await;
}
