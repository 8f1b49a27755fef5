use std::borrow::Cow;
use std::io;

use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal setup failed")]
    TerminalSetup(#[source] io::Error),
    #[error("terminal restore failed")]
    TerminalRestore(#[source] io::Error),
    #[error("terminal rendering failed")]
    TerminalRender(#[source] io::Error),
    #[error("runtime error: {context}")]
    Runtime {
        context: Cow<'static, str>,
        #[source]
        source: AnyhowError,
    },
}

impl AppError {
    pub fn runtime<S, E>(context: S, source: E) -> Self
    where
        S: Into<Cow<'static, str>>,
        E: Into<AnyhowError>,
    {
        Self::Runtime {
            context: context.into(),
            source: source.into(),
        }
    }
}

impl From<AnyhowError> for AppError {
    fn from(source: AnyhowError) -> Self {
        AppError::Runtime {
            context: Cow::Borrowed("unexpected runtime error"),
            source,
        }
    }
}

/// Single-line rendering of an error and its sources for the status bar.
pub fn render_error_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = inner.source();
    }
    parts.join(": ")
}
