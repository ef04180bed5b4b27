//! Terminal progress spinner
//!
//! Frames tick on stderr so scan results on stdout stay line-oriented. The
//! spinner task owns a child of an explicit cancellation token; the scan
//! flow cancels it exactly once when the scan finishes, and `stop` waits
//! for the line to be cleared before returning.

use std::io::Write;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const TICK: Duration = Duration::from_millis(150);

pub struct Spinner {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Spinner {
    /// Start ticking until [`Spinner::stop`] is called
    pub fn start(label: &str) -> Self {
        let token = CancellationToken::new();
        let ticker = token.child_token();
        let label = label.to_string();

        let handle = tokio::spawn(async move {
            let mut frame = 0usize;
            loop {
                tokio::select! {
                    _ = ticker.cancelled() => break,
                    _ = tokio::time::sleep(TICK) => {
                        let mut err = std::io::stderr();
                        let _ = write!(err, "\r{} {}", label, FRAMES[frame % FRAMES.len()]);
                        let _ = err.flush();
                        frame += 1;
                    }
                }
            }
            // clear the spinner line
            let mut err = std::io::stderr();
            let _ = write!(err, "\r{}\r", " ".repeat(label.len() + 2));
            let _ = err.flush();
        });

        Self { token, handle }
    }

    /// Cancel the ticker and wait for the line to clear
    pub async fn stop(self) {
        self.token.cancel();
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stop_terminates_the_ticker() {
        let spinner = Spinner::start("Scanning...");
        tokio::time::sleep(Duration::from_millis(200)).await;

        tokio::time::timeout(Duration::from_secs(1), spinner.stop())
            .await
            .expect("spinner stops promptly after cancellation");
    }

    #[tokio::test]
    async fn test_immediate_stop_does_not_hang() {
        let spinner = Spinner::start("Scanning...");
        tokio::time::timeout(Duration::from_secs(1), spinner.stop())
            .await
            .expect("cancellation before the first tick is clean");
    }
}
