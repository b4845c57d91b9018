//! Progress spinner shown on stderr while a scan runs

use std::io::{self, IsTerminal, Write};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, Sender, bounded};

const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const FRAME_DELAY: Duration = Duration::from_millis(100);
const CLEAR_LINE: &str = "\r\x1b[K";

/// How long a scan may run before the spinner appears.
pub const START_DELAY: Duration = Duration::from_secs(1);

/// Animated "Exploring..." indicator drawn by a background thread.
///
/// Quick scans finish before `delay` elapses and never draw anything. Once
/// stopped, the line is cleared so the tree starts on a clean line.
pub struct Spinner<W: Write + Send + 'static> {
    stop_tx: Sender<()>,
    handle: JoinHandle<W>,
}

impl Spinner<io::Stderr> {
    /// Start a spinner on stderr, but only if stderr is a terminal.
    pub fn stderr_if_terminal() -> Option<Self> {
        let stderr = io::stderr();
        if !stderr.is_terminal() {
            return None;
        }
        Some(Self::start(stderr, START_DELAY))
    }
}

impl<W: Write + Send + 'static> Spinner<W> {
    pub fn start(mut out: W, delay: Duration) -> Self {
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let handle = thread::spawn(move || {
            let mut drawn = false;

            // A message or a dropped sender both mean "stop"
            if let Err(RecvTimeoutError::Timeout) = stop_rx.recv_timeout(delay) {
                'spin: loop {
                    for frame in FRAMES {
                        if write!(out, "\r{} Exploring...", frame)
                            .and_then(|_| out.flush())
                            .is_err()
                        {
                            break 'spin;
                        }
                        drawn = true;
                        if !matches!(
                            stop_rx.recv_timeout(FRAME_DELAY),
                            Err(RecvTimeoutError::Timeout)
                        ) {
                            break 'spin;
                        }
                    }
                }
            }

            if drawn {
                let _ = write!(out, "{}", CLEAR_LINE).and_then(|_| out.flush());
            }
            out
        });

        Self { stop_tx, handle }
    }

    /// Stop the animation, wait for the thread and hand back the writer.
    pub fn stop(self) -> Option<W> {
        let _ = self.stop_tx.send(());
        self.handle.join().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_draws_and_clears() {
        let spinner = Spinner::start(Vec::new(), Duration::ZERO);
        thread::sleep(Duration::from_millis(250));
        let out = String::from_utf8(spinner.stop().unwrap()).unwrap();
        assert!(out.contains("Exploring..."), "got {:?}", out);
        assert!(out.starts_with("\r⠋"));
        assert!(out.ends_with(CLEAR_LINE));
    }

    #[test]
    fn test_spinner_silent_when_stopped_before_delay() {
        let spinner = Spinner::start(Vec::new(), Duration::from_secs(60));
        let out = spinner.stop().unwrap();
        assert!(out.is_empty());
    }
}
