//! Live clock
//!
//! Formats the dashboard's date/time line and drives it from a repeating
//! timer. Ticks are independent and idempotent, with no drift correction.
//! The ticker task can be stopped cleanly at teardown.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// "Monday, Aug 24, 2026 • 3:04:05 PM"
pub fn format_datetime(now: DateTime<Local>) -> String {
    format!(
        "{} • {}",
        now.format("%A, %b %-d, %Y"),
        now.format("%-I:%M:%S %p")
    )
}

/// The formatted line for the current local time
pub fn now_line() -> String {
    format_datetime(Local::now())
}

/// Repeating clock task sending a formatted line every interval
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the ticker. The first line is sent immediately, then one per
    /// `interval`; the task also ends when the receiver is dropped.
    pub fn spawn(interval: Duration, tx: mpsc::UnboundedSender<String>) -> Self {
        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            loop {
                timer.tick().await;
                if tx.send(now_line()).is_err() {
                    debug!("clock receiver dropped, stopping ticker");
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Stop the ticker task
    pub fn stop(&self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_afternoon() {
        let dt = Local.with_ymd_and_hms(2026, 8, 24, 15, 4, 5).unwrap();
        assert_eq!(format_datetime(dt), "Monday, Aug 24, 2026 • 3:04:05 PM");
    }

    #[test]
    fn test_format_datetime_morning_has_no_zero_padding() {
        let dt = Local.with_ymd_and_hms(2026, 8, 3, 9, 7, 1).unwrap();
        assert_eq!(format_datetime(dt), "Monday, Aug 3, 2026 • 9:07:01 AM");
    }

    #[test]
    fn test_format_datetime_midnight_is_twelve() {
        let dt = Local.with_ymd_and_hms(2026, 8, 24, 0, 0, 0).unwrap();
        assert_eq!(format_datetime(dt), "Monday, Aug 24, 2026 • 12:00:00 AM");
    }

    #[test]
    fn test_now_line_contains_separator() {
        assert!(now_line().contains(" • "));
    }

    #[tokio::test]
    async fn test_ticker_sends_lines_then_stops() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::spawn(Duration::from_millis(5), tx);

        let first = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert!(first.unwrap().contains(" • "));

        let second = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert!(second.is_some());

        ticker.stop();
        // Drain anything sent before the abort landed; the channel closes
        // once the task is gone
        let drained = tokio::time::timeout(Duration::from_secs(1), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }
}
