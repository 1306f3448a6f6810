/// Display seconds used when the caller gives none.
pub const DEFAULT_DURATION: u64 = 5;

/// A single notification request built from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Category tag used only for filtering (e.g. "build_done")
    pub event_type: String,

    /// Notification title
    pub title: String,

    /// Notification body text
    pub message: String,

    /// Advisory display time in seconds. The popup blocks until dismissed and
    /// does not read this.
    pub duration: u64,
}

impl NotificationRequest {
    pub fn new(
        event_type: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            title: title.into(),
            message: message.into(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_new() {
        let req = NotificationRequest::new("build_done", "Build", "OK");
        assert_eq!(req.event_type, "build_done");
        assert_eq!(req.title, "Build");
        assert_eq!(req.message, "OK");
        assert_eq!(req.duration, DEFAULT_DURATION);
    }

    #[test]
    fn test_request_with_duration() {
        let req = NotificationRequest::new("build_done", "Build", "OK").with_duration(30);
        assert_eq!(req.duration, 30);
        assert_eq!(req.title, "Build");
    }
}
