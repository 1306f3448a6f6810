use std::io::{self, Write};

use tracing::debug;

use crate::client::message::NotificationRequest;
use crate::config::Config;
use crate::filter;
use crate::notify::{self, Popup, terminal};

/// Gate, log, popup, fallback.
pub struct NotificationSystem<P> {
    config: Config,
    popup: P,
}

impl<P: Popup> NotificationSystem<P> {
    pub fn new(config: Config, popup: P) -> Self {
        Self { config, popup }
    }

    /// Not consulted by `notify`.
    pub fn is_notifications_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Not consulted by `notify`.
    pub fn is_popup_enabled(&self) -> bool {
        self.config.popup_notifications
    }

    /// Deliver a notification.
    ///
    /// Returns `Ok(false)` without writing anything when the event type is
    /// filtered out, and `Ok(true)` once the request has been handled by
    /// either the popup or the terminal banner. Only a failed write to `out`
    /// is an error.
    pub async fn notify<W: Write>(
        &self,
        request: &NotificationRequest,
        out: &mut W,
    ) -> io::Result<bool> {
        if !filter::allows(&self.config, &request.event_type) {
            debug!("Event {:?} filtered out", request.event_type);
            return Ok(false);
        }

        writeln!(out, "[通知] {}: {}", request.title, request.message)?;
        out.flush()?;

        if !notify::dispatch(&self.popup, request).await {
            terminal::show(out, &request.title, &request.message)?;
        }

        Ok(true)
    }
}
