use crate::config::{Config, HookEvents};

/// Decide whether `event_type` should produce a notification.
///
/// `always_notify` wins over everything. Otherwise a non-empty `hook_events`
/// list restricts notifications to its members; `"all"` or no list allows
/// every event.
pub fn allows(config: &Config, event_type: &str) -> bool {
    if config.always_notify {
        return true;
    }

    match &config.hook_events {
        HookEvents::All | HookEvents::Unset => true,
        HookEvents::Listed(events) => events.iter().any(|e| e == event_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_events(always_notify: bool, hook_events: HookEvents) -> Config {
        Config {
            always_notify,
            hook_events,
            ..Config::default()
        }
    }

    fn listed(events: &[&str]) -> HookEvents {
        HookEvents::Listed(events.iter().map(|e| e.to_string()).collect())
    }

    #[test]
    fn test_always_notify_overrides_list() {
        let config = with_events(true, listed(&["build_done"]));
        assert!(allows(&config, "build_done"));
        assert!(allows(&config, "lint_done"));
        assert!(allows(&config, ""));
    }

    #[test]
    fn test_all_allows_everything() {
        let config = with_events(false, HookEvents::All);
        assert!(allows(&config, "build_done"));
        assert!(allows(&config, "anything"));
    }

    #[test]
    fn test_list_restricts_to_members() {
        let config = with_events(false, listed(&["build_done", "task_completed"]));
        assert!(allows(&config, "build_done"));
        assert!(allows(&config, "task_completed"));
        assert!(!allows(&config, "lint_done"));
        assert!(!allows(&config, "build"));
    }

    #[test]
    fn test_unset_allows_everything() {
        let config = with_events(false, HookEvents::Unset);
        assert!(allows(&config, "x"));
        assert!(allows(&Config::default(), "build_done"));
    }

    #[test]
    fn test_list_from_document() {
        let config =
            Config::from_json(r#"{"notifications":{"enabled":true,"hook_events":["build_done"]}}"#)
                .unwrap();
        assert!(allows(&config, "build_done"));
        assert!(!allows(&config, "lint_done"));
    }
}
