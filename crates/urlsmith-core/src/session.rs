//! Explicit per-user-session state for the parse/edit/rebuild/probe workflow.
//!
//! The front end owns one `Session` per user and drives it: parse stores the
//! decomposed components, edits mutate them, and the probe outcome is fed
//! back in by the caller. The session itself performs no I/O, so isolation
//! between concurrent users is just a matter of not sharing the struct.

use crate::probe::ProbeOutcome;
use crate::url_model::{decompose, recompose, Component, DecomposeError, UrlComponents};

/// State accumulated over one interactive session.
#[derive(Debug, Default)]
pub struct Session {
    components: Option<UrlComponents>,
    status: Option<ProbeOutcome>,
    original_url: Option<String>,
    rebuild_url: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decomposes `url` and stores the result along with the input.
    ///
    /// On failure the previous session state is left untouched and the error
    /// is returned as a value for the caller to display.
    pub fn parse(&mut self, url: &str) -> Result<&UrlComponents, DecomposeError> {
        let components = decompose(url)?;
        self.original_url = Some(url.to_string());
        Ok(self.components.insert(components))
    }

    /// The stored components, if a parse has happened.
    pub fn components(&self) -> Option<&UrlComponents> {
        self.components.as_ref()
    }

    /// Overwrites one stored component. Returns false when nothing has been
    /// parsed yet.
    pub fn edit(&mut self, component: Component, value: &str) -> bool {
        match &mut self.components {
            Some(components) => {
                components.set(component, value);
                true
            }
            None => false,
        }
    }

    /// The URL the session currently points at: the recomposition of the
    /// stored components when present, otherwise the raw `input`.
    pub fn current_url(&self, input: &str) -> String {
        match &self.components {
            Some(components) => recompose(components),
            None => input.to_string(),
        }
    }

    /// The URL most recently given to `parse`.
    pub fn original_url(&self) -> Option<&str> {
        self.original_url.as_deref()
    }

    pub fn record_status(&mut self, outcome: ProbeOutcome) {
        self.status = Some(outcome);
    }

    pub fn status(&self) -> Option<&ProbeOutcome> {
        self.status.as_ref()
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Stages the recomposed URL as the next input value. No-op without
    /// parsed components.
    pub fn request_rebuild(&mut self) {
        if let Some(components) = &self.components {
            self.rebuild_url = Some(recompose(components));
        }
    }

    /// Takes the staged rebuild URL, clearing it so it is used only once.
    pub fn take_rebuild_url(&mut self) -> Option<String> {
        self.rebuild_url.take()
    }
}
