//! Copying representations to a clipboard.
//!
//! The clipboard itself lives outside this crate and is reached through the
//! [`Clipboard`] trait. A [`Notifier`] performs the copy and keeps the short
//! lived message that tells the user how it went. Copying never touches the
//! color itself.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::{color::Space, error::ClipboardError, swatch::Swatch};

/// Something text can be written to.
pub trait Clipboard {
    /// Replace the contents of the clipboard with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A clipboard that keeps its contents in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// The last text written to the clipboard.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// The outcome a [`Notice`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// The text was copied.
    Copied,
    /// The clipboard refused the text.
    Failed,
}

/// A message for the user that dismisses itself after a while.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Whether the copy succeeded.
    pub kind: NoticeKind,
    /// The message to show.
    pub message: String,
    expires_at: Instant,
}

impl Notice {
    /// Whether the notice should still be shown at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Copies text to a clipboard and tracks the resulting [`Notice`]. Only the
/// most recent notice is kept.
#[derive(Clone, Debug)]
pub struct Notifier {
    duration: Duration,
    current: Option<Notice>,
}

impl Notifier {
    /// Create a notifier whose notices stay visible for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    /// Write `text` to `clipboard` and replace the current notice with the
    /// outcome. A failed write is not retried.
    pub fn copy(
        &mut self,
        clipboard: &mut impl Clipboard,
        text: &str,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        let result = clipboard.write_text(text);

        let (kind, message) = match &result {
            Ok(()) => (NoticeKind::Copied, "Copied to clipboard!".to_owned()),
            Err(err) => {
                warn!(%err, "copy to clipboard failed");
                (NoticeKind::Failed, format!("Copy failed: {err}"))
            }
        };

        self.current = Some(Notice {
            kind,
            message,
            expires_at: now + self.duration,
        });

        result
    }

    /// Copy the representation of `swatch` in `space`.
    pub fn copy_swatch(
        &mut self,
        clipboard: &mut impl Clipboard,
        swatch: &Swatch,
        space: Space,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        self.copy(clipboard, &swatch.format(space), now)
    }

    /// The notice to show at `now`, if any.
    pub fn notice(&self, now: Instant) -> Option<&Notice> {
        self.current.as_ref().filter(|n| n.is_visible(now))
    }

    /// Drop the current notice once it expired.
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| !n.is_visible(now)) {
            self.current = None;
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }
    }

    #[test]
    fn copy_writes_the_formatted_representation() {
        let swatch = Swatch::from_rgb(Rgb::new(255, 0, 0), 0.5);
        let mut clipboard = MemoryClipboard::default();
        let mut notifier = Notifier::default();
        let now = Instant::now();

        notifier
            .copy_swatch(&mut clipboard, &swatch, Space::Rgba, now)
            .unwrap();
        assert_eq!(clipboard.contents(), Some("rgba(255, 0, 0, 0.50)"));
        assert_eq!(notifier.notice(now).unwrap().kind, NoticeKind::Copied);

        notifier
            .copy_swatch(&mut clipboard, &swatch, Space::Cmyk, now)
            .unwrap();
        assert_eq!(clipboard.contents(), Some("cmyk(0%, 100%, 100%, 0%)"));
    }

    #[test]
    fn notices_expire() {
        let mut clipboard = MemoryClipboard::default();
        let mut notifier = Notifier::new(Duration::from_secs(3));
        let now = Instant::now();

        notifier.copy(&mut clipboard, "#007bff", now).unwrap();
        assert!(notifier.notice(now + Duration::from_secs(2)).is_some());
        assert!(notifier.notice(now + Duration::from_secs(3)).is_none());

        notifier.tick(now + Duration::from_secs(1));
        assert!(notifier.notice(now).is_some());
        notifier.tick(now + Duration::from_secs(4));
        assert!(notifier.notice(now).is_none());
    }

    #[test]
    fn newer_notice_replaces_older() {
        let mut clipboard = MemoryClipboard::default();
        let mut notifier = Notifier::new(Duration::from_secs(3));
        let now = Instant::now();

        notifier.copy(&mut clipboard, "a", now).unwrap();
        let later = now + Duration::from_secs(2);
        notifier.copy(&mut clipboard, "b", later).unwrap();

        // The first notice would have expired, the second one has not.
        assert!(notifier.notice(now + Duration::from_secs(4)).is_some());
    }

    #[test]
    fn failures_are_reported_but_not_fatal() {
        let mut notifier = Notifier::default();
        let now = Instant::now();

        let result = notifier.copy(&mut BrokenClipboard, "#000000", now);
        assert_eq!(result, Err(ClipboardError::Unavailable));

        let notice = notifier.notice(now).unwrap();
        assert_eq!(notice.kind, NoticeKind::Failed);
        assert_eq!(notice.message, "Copy failed: clipboard is unavailable");
    }
}
