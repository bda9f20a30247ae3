//! Console trace for `store-matrix`
//!
//! Renders `PrepareEvent`s as the human readable progress lines.

use std::io::Write;

use store_matrix::domain::ports::{PrepareEvent, PrepareEventSink};
use store_matrix::domain::services::DropReason;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Lines to print for `event`, with their target stream.
pub fn render_event(event: &PrepareEvent, ctx: &UiContext) -> Vec<(Stream, String)> {
    let icon = |i: Icon| i.colored(ctx.color, ctx.unicode);

    match event {
        PrepareEvent::ConfigWarning(warning) => {
            let message = warning.message();
            let mut lines = vec![(
                Stream::Stderr,
                format!("{} Warning: {}", icon(Icon::Warning), message),
            )];
            if ctx.caps.is_github_actions {
                let file = warning.file.display().to_string();
                lines.push((
                    Stream::Stdout,
                    github_actions_annotation(
                        AnnotationLevel::Warning,
                        &message,
                        Some(&file),
                        warning.line,
                        Some("store-matrix"),
                    ),
                ));
            }
            lines
        }
        PrepareEvent::GroupSelected { group } => vec![(
            Stream::Stdout,
            format!("{} Processing target group: {}", icon(Icon::Group), group),
        )],
        PrepareEvent::StoreDropped(dropped) => {
            if ctx.verbose == 0 {
                return Vec::new();
            }
            let reason = match &dropped.reason {
                DropReason::Unregistered => "not in store registry".to_string(),
                DropReason::NotTarget(kind) => format!("type '{}'", kind),
            };
            vec![(
                Stream::Stdout,
                format!("  {} Skipped {} ({})", icon(Icon::Arrow), dropped.name, reason),
            )]
        }
        PrepareEvent::StoresResolved { stores } => vec![
            (
                Stream::Stdout,
                format!(
                    "{} Target stores found: {}",
                    icon(Icon::Stores),
                    stores.join(", ")
                ),
            ),
            (
                Stream::Stdout,
                format!("{} Total target stores: {}", icon(Icon::Total), stores.len()),
            ),
        ],
        PrepareEvent::LocalMode => vec![(
            Stream::Stdout,
            format!(
                "{} GITHUB_OUTPUT not set, running in local mode",
                icon(Icon::Warning)
            ),
        )],
        PrepareEvent::OutputWritten { path } => vec![(
            Stream::Stdout,
            format!(
                "{} GitHub Actions output written to {}",
                icon(Icon::Success),
                path.display()
            ),
        )],
    }
}

/// Event sink printing the trace to the terminal
pub struct ConsoleEventSink {
    ctx: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ctx: UiContext) -> Self {
        Self { ctx }
    }
}

impl PrepareEventSink for ConsoleEventSink {
    fn on_event(&self, event: PrepareEvent) {
        for (stream, line) in render_event(&event, &self.ctx) {
            match stream {
                Stream::Stdout => {
                    let mut out = std::io::stdout().lock();
                    let _ = writeln!(out, "{}", line);
                    let _ = out.flush();
                }
                Stream::Stderr => eprintln!("{}", line),
            }
        }
    }
}
