use std::io::Write;

use store_matrix::MatrixError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Single diagnostic line for a fatal error.
pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let message = match err.downcast_ref::<MatrixError>() {
        Some(matrix_err) => matrix_err.to_string(),
        None => format!("{:#}", err),
    };
    format!("{} {}", Icon::Error.colored(color, unicode), message)
}

/// Workflow annotation for a fatal error.
pub fn format_annotation(err: &anyhow::Error) -> String {
    let file = err
        .downcast_ref::<MatrixError>()
        .and_then(MatrixError::file)
        .map(|p| p.display().to_string());
    github_actions_annotation(
        AnnotationLevel::Error,
        &err.to_string(),
        file.as_deref(),
        None,
        Some("store-matrix"),
    )
}

pub fn print_error(err: &anyhow::Error, ctx: &UiContext) {
    eprintln!("{}", format_error(err, ctx.color, ctx.unicode));

    if ctx.caps.is_github_actions {
        let mut stdout = std::io::stdout();
        let _ = writeln!(stdout, "{}", format_annotation(err));
        let _ = stdout.flush();
    }
}
