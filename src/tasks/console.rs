use std::io::BufRead;

use anyhow::Result;
use thiserror::Error;
use tokio::select;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::SwipeOptions;
use crate::events::Navigate;
use crate::input::{Key, NavRequest, SwipeDetector, dot_click};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("slide numbers start at 1")]
    SlideZero,
    #[error("expected `swipe DX DY`, got: {0}")]
    BadSwipe(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Navigate(NavRequest),
    Quit,
    /// Recognized input that maps to no navigation (unbound key, short swipe).
    Ignored,
}

/// Parses one console line. Slide numbers are 1-based, like the dots.
pub fn parse_line(line: &str, swipe: &mut SwipeDetector) -> Result<ConsoleCommand, ConsoleError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(ConsoleCommand::Ignored);
    };

    let request = match head.to_ascii_lowercase().as_str() {
        "q" | "quit" => return Ok(ConsoleCommand::Quit),
        "n" | "next" => Some(NavRequest::Next),
        "p" | "prev" | "previous" => Some(NavRequest::Previous),
        "first" => Some(NavRequest::First),
        "last" => Some(NavRequest::Last),
        "swipe" => {
            let mut coord = || {
                words
                    .next()
                    .and_then(|w| w.parse::<f32>().ok())
                    .ok_or_else(|| ConsoleError::BadSwipe(line.trim().to_string()))
            };
            let dx = coord()?;
            let dy = coord()?;
            swipe.touch_start(1, 0.0, 0.0);
            swipe.touch_move(1, dx, dy);
            swipe.touch_end(Some((dx, dy)))
        }
        other => match other.parse::<usize>() {
            Ok(0) => return Err(ConsoleError::SlideZero),
            Ok(number) => Some(dot_click(number - 1)),
            Err(_) => head.parse::<Key>().ok().and_then(Key::request),
        },
    };

    Ok(request.map_or(ConsoleCommand::Ignored, ConsoleCommand::Navigate))
}

/// Forwards stdin lines from a plain OS thread. The channel closes at end of
/// input or on a read error. A thread blocked in `read` cannot be interrupted,
/// so it is detached and never joined; the runtime does not wait for it.
pub fn stdin_lines() -> Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!("stdin read failed: {err}");
                    break;
                }
            };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Reads navigation commands line by line. End of input (the line channel
/// closing) or `quit` cancels the whole presentation.
pub async fn run(
    mut lines: Receiver<String>,
    to_presenter: Sender<Navigate>,
    swipe: SwipeOptions,
    cancel: CancellationToken,
) -> Result<()> {
    let mut detector = SwipeDetector::new(&swipe);

    loop {
        let line = select! {
            _ = cancel.cancelled() => break,
            line = lines.recv() => line,
        };
        let Some(line) = line else {
            info!("input closed; initiating shutdown");
            cancel.cancel();
            break;
        };

        match parse_line(&line, &mut detector) {
            Ok(ConsoleCommand::Navigate(request)) => {
                debug!(?request, "console request");
                if to_presenter.send(Navigate::user(request)).await.is_err() {
                    warn!("presenter channel closed");
                    break;
                }
            }
            Ok(ConsoleCommand::Quit) => {
                info!("quit requested; initiating shutdown");
                cancel.cancel();
                break;
            }
            Ok(ConsoleCommand::Ignored) => debug!(line = %line, "input ignored"),
            Err(err) => warn!("bad input: {err}"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<ConsoleCommand, ConsoleError> {
        parse_line(line, &mut SwipeDetector::new(&SwipeOptions::default()))
    }

    #[test]
    fn words_and_keys() {
        assert_eq!(parse("next"), Ok(ConsoleCommand::Navigate(NavRequest::Next)));
        assert_eq!(parse("ArrowLeft"), Ok(ConsoleCommand::Navigate(NavRequest::Previous)));
        assert_eq!(parse("home"), Ok(ConsoleCommand::Navigate(NavRequest::First)));
        assert_eq!(parse("End"), Ok(ConsoleCommand::Navigate(NavRequest::Last)));
        assert_eq!(parse("q"), Ok(ConsoleCommand::Quit));
        assert_eq!(parse("tab"), Ok(ConsoleCommand::Ignored));
        assert_eq!(parse("   "), Ok(ConsoleCommand::Ignored));
    }

    #[test]
    fn slide_numbers_are_one_based() {
        assert_eq!(parse("3"), Ok(ConsoleCommand::Navigate(NavRequest::GoTo(2))));
        assert_eq!(parse("0"), Err(ConsoleError::SlideZero));
    }

    #[test]
    fn swipes_go_through_the_detector() {
        assert_eq!(parse("swipe -60 2"), Ok(ConsoleCommand::Navigate(NavRequest::Next)));
        assert_eq!(parse("swipe 60 0"), Ok(ConsoleCommand::Navigate(NavRequest::Previous)));
        assert_eq!(parse("swipe 30 0"), Ok(ConsoleCommand::Ignored));
        assert!(matches!(parse("swipe left"), Err(ConsoleError::BadSwipe(_))));
    }
}
