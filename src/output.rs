//! CLI output formatting for asset events.
//!
//! [`format_event`] is pure: one event in, one line out. [`TracingReporter`]
//! routes the formatted lines through `tracing` at a level chosen per event,
//! so the subscriber's filter decides what a run prints:
//!
//! | Event | Level |
//! |---|---|
//! | failures | `error` |
//! | batch summary | `info` |
//! | copies, renders, per-file completion | `debug` |
//!
//! ```text
//! Resized icons/star.png [512x512] → out/iOS/star/star@2x.png [352x352] (padding 16)
//! iOS set for icons/star.png → out/iOS/star
//! Done. All operations completed successfully.
//! ```

use crate::events::{AssetEvent, Reporter};

/// Format a single event as one human-readable line.
pub fn format_event(event: &AssetEvent) -> String {
    match event {
        AssetEvent::Copied { source, output } => format!(
            "No resize requested for {}, copied to {}",
            source.display(),
            output.display()
        ),
        AssetEvent::Resized {
            source,
            output,
            source_dims,
            canvas,
            padding,
        } => format!(
            "Resized {} [{}x{}] \u{2192} {} [{}x{}] (padding {})",
            source.display(),
            source_dims.0,
            source_dims.1,
            output.display(),
            canvas.0,
            canvas.1,
            padding
        ),
        AssetEvent::ResizeFailed {
            source,
            output,
            reason,
        } => format!(
            "Failed to resize {} to {}: {}",
            source.display(),
            output.display(),
            reason
        ),
        AssetEvent::PlatformDone {
            platform,
            source,
            output_dir,
        } => format!(
            "{} set for {} \u{2192} {}",
            platform,
            source.display(),
            output_dir.display()
        ),
        AssetEvent::PlatformIncomplete {
            platform,
            source,
            output_dir,
        } => format!(
            "{} set for {} is incomplete, some densities failed \u{2192} {}",
            platform,
            source.display(),
            output_dir.display()
        ),
        AssetEvent::EmitFailed {
            platform,
            source,
            reason,
        } => format!(
            "Failed to generate {} set for {}: {}",
            platform,
            source.display(),
            reason
        ),
        AssetEvent::PlatformFailed {
            platform,
            output_dir,
            reason,
        } => format!(
            "Skipping {} assets, cannot create {}: {}",
            platform,
            output_dir.display(),
            reason
        ),
        AssetEvent::BatchFinished { success, .. } => {
            if *success {
                "Done. All operations completed successfully.".to_string()
            } else {
                "Done. There were some errors, please look at the log.".to_string()
            }
        }
        AssetEvent::BatchFailed { input, reason } => {
            format!("Failed to process files in {}: {}", input.display(), reason)
        }
    }
}

/// Reporter that logs through the global `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn emit(&self, event: &AssetEvent) {
        let line = format_event(event);
        match event {
            _ if event.is_failure() => tracing::error!("{line}"),
            AssetEvent::BatchFinished { .. } => tracing::info!("{line}"),
            _ => tracing::debug!("{line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    #[test]
    fn format_copied() {
        let line = format_event(&AssetEvent::Copied {
            source: "in/star.png".into(),
            output: "out/star.png".into(),
        });
        assert_eq!(
            line,
            "No resize requested for in/star.png, copied to out/star.png"
        );
    }

    #[test]
    fn format_resized_shows_source_and_canvas() {
        let line = format_event(&AssetEvent::Resized {
            source: "in/star.png".into(),
            output: "out/star@2x.png".into(),
            source_dims: (512, 512),
            canvas: (352, 352),
            padding: 16.0,
        });
        assert_eq!(
            line,
            "Resized in/star.png [512x512] \u{2192} out/star@2x.png [352x352] (padding 16)"
        );
    }

    #[test]
    fn format_platform_done_uses_platform_name() {
        let line = format_event(&AssetEvent::PlatformDone {
            platform: Platform::Ios,
            source: "in/star.png".into(),
            output_dir: "out/iOS/star".into(),
        });
        assert_eq!(line, "iOS set for in/star.png \u{2192} out/iOS/star");
    }

    #[test]
    fn format_emit_failed_includes_reason() {
        let line = format_event(&AssetEvent::EmitFailed {
            platform: Platform::Android,
            source: "in/star.png".into(),
            reason: "source image not found".into(),
        });
        assert!(line.starts_with("Failed to generate Android set"));
        assert!(line.ends_with("source image not found"));
    }

    #[test]
    fn format_platform_failed_names_directory() {
        let line = format_event(&AssetEvent::PlatformFailed {
            platform: Platform::Android,
            output_dir: "out/Android".into(),
            reason: "File exists".into(),
        });
        assert_eq!(
            line,
            "Skipping Android assets, cannot create out/Android: File exists"
        );
    }

    #[test]
    fn format_batch_summary() {
        let finished = |success| AssetEvent::BatchFinished {
            input: "in".into(),
            output: "out".into(),
            success,
        };
        assert_eq!(
            format_event(&finished(true)),
            "Done. All operations completed successfully."
        );
        assert_eq!(
            format_event(&finished(false)),
            "Done. There were some errors, please look at the log."
        );
    }

    #[test]
    fn tracing_reporter_without_subscriber_is_silent() {
        TracingReporter.emit(&AssetEvent::BatchFailed {
            input: "in".into(),
            reason: "unreadable".into(),
        });
    }
}
