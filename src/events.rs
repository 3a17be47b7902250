//! Diagnostics emitted while generating assets.
//!
//! Components never print. They describe what happened as an [`AssetEvent`]
//! and hand it to the [`Reporter`] they were given. The binary installs
//! [`TracingReporter`](crate::output::TracingReporter); tests collect events
//! through an `mpsc::Sender`.

use crate::platform::Platform;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, PartialEq)]
pub enum AssetEvent {
    /// No resize was needed; the source bytes were copied.
    Copied { source: PathBuf, output: PathBuf },
    /// A variant was rendered.
    Resized {
        source: PathBuf,
        output: PathBuf,
        source_dims: (u32, u32),
        canvas: (u32, u32),
        padding: f64,
    },
    ResizeFailed {
        source: PathBuf,
        output: PathBuf,
        reason: String,
    },
    /// Every variant of one source was written for a platform.
    PlatformDone {
        platform: Platform,
        source: PathBuf,
        output_dir: PathBuf,
    },
    /// Some Android buckets failed; the others were still written.
    PlatformIncomplete {
        platform: Platform,
        source: PathBuf,
        output_dir: PathBuf,
    },
    EmitFailed {
        platform: Platform,
        source: PathBuf,
        reason: String,
    },
    /// A platform's output directory could not be created; its sources
    /// were skipped.
    PlatformFailed {
        platform: Platform,
        output_dir: PathBuf,
        reason: String,
    },
    BatchFinished {
        input: PathBuf,
        output: PathBuf,
        success: bool,
    },
    /// The batch could not run at all (e.g. the input directory is unreadable).
    BatchFailed { input: PathBuf, reason: String },
}

impl AssetEvent {
    pub fn is_failure(&self) -> bool {
        match self {
            AssetEvent::ResizeFailed { .. }
            | AssetEvent::PlatformIncomplete { .. }
            | AssetEvent::EmitFailed { .. }
            | AssetEvent::PlatformFailed { .. }
            | AssetEvent::BatchFailed { .. } => true,
            AssetEvent::BatchFinished { success, .. } => !success,
            AssetEvent::Copied { .. }
            | AssetEvent::Resized { .. }
            | AssetEvent::PlatformDone { .. } => false,
        }
    }
}

/// Sink for [`AssetEvent`]s.
pub trait Reporter {
    fn emit(&self, event: &AssetEvent);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn emit(&self, event: &AssetEvent) {
        (**self).emit(event)
    }
}

/// Forward events to a channel. A disconnected receiver drops them.
impl Reporter for Sender<AssetEvent> {
    fn emit(&self, event: &AssetEvent) {
        let _ = self.send(event.clone());
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn emit(&self, _event: &AssetEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn sender_forwards_events() {
        let (tx, rx) = mpsc::channel();
        tx.emit(&AssetEvent::Copied {
            source: "a.png".into(),
            output: "b.png".into(),
        });
        let events: Vec<AssetEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 1);
        assert!(!events[0].is_failure());
    }

    #[test]
    fn sender_ignores_disconnected_receiver() {
        let (tx, rx) = mpsc::channel::<AssetEvent>();
        drop(rx);
        tx.emit(&AssetEvent::BatchFailed {
            input: "in".into(),
            reason: "gone".into(),
        });
    }

    #[test]
    fn batch_finished_failure_follows_success_flag() {
        let finished = |success| AssetEvent::BatchFinished {
            input: "in".into(),
            output: "out".into(),
            success,
        };
        assert!(!finished(true).is_failure());
        assert!(finished(false).is_failure());
    }
}
