use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use hostnotify::client::message::DEFAULT_DURATION;
use hostnotify::config;
use hostnotify::notify::PowerShellPopup;
use hostnotify::notify::powershell::DEFAULT_EXECUTABLE;
use hostnotify::{NotificationRequest, NotificationSystem};

#[derive(Parser)]
#[command(name = "hostnotify")]
#[command(about = "Show a completion popup on the Windows host from a WSL terminal")]
#[command(version)]
#[command(after_help = "Example: hostnotify task_completed 'Done' 'Files created'")]
struct Cli {
    /// Event category, matched against `hook_events`
    event_type: String,

    /// Notification title
    title: String,

    /// Notification body
    message: String,

    /// Display time in seconds (accepted, not applied to the popup)
    #[arg(default_value_t = DEFAULT_DURATION)]
    duration: u64,

    /// Settings file [default: ~/.hostnotify/config.json]
    #[arg(long, env = "HOSTNOTIFY_CONFIG")]
    config: Option<PathBuf>,

    /// Host UI interpreter to run the popup script with
    #[arg(long, env = "HOSTNOTIFY_POWERSHELL", default_value = DEFAULT_EXECUTABLE)]
    powershell: String,
}

/// Colour log lines only when a person is watching the stream.
fn use_ansi(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi(&std::io::stderr()))
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::config_path);
    let system = NotificationSystem::new(
        config::load(&config_path),
        PowerShellPopup::with_executable(cli.powershell),
    );

    let request = NotificationRequest::new(cli.event_type, cli.title, cli.message)
        .with_duration(cli.duration);

    let stdout = std::io::stdout();
    system.notify(&request, &mut stdout.lock()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_parses_positionals() {
        let cli = Cli::try_parse_from(["hostnotify", "build_done", "Build", "OK", "30"]).unwrap();
        assert_eq!(cli.event_type, "build_done");
        assert_eq!(cli.title, "Build");
        assert_eq!(cli.message, "OK");
        assert_eq!(cli.duration, 30);
    }

    #[test]
    fn test_cli_duration_defaults() {
        let cli = Cli::try_parse_from(["hostnotify", "build_done", "Build", "OK"]).unwrap();
        assert_eq!(cli.duration, DEFAULT_DURATION);
    }

    #[test]
    fn test_cli_missing_message_is_usage_error() {
        let err = Cli::try_parse_from(["hostnotify", "build_done", "Build"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_cli_no_arguments_is_usage_error() {
        let err = Cli::try_parse_from(["hostnotify"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_cli_non_integer_duration_is_usage_error() {
        let err = Cli::try_parse_from(["hostnotify", "e", "T", "M", "soon"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_redirected_stream_gets_no_ansi() {
        let file = tempfile::tempfile().unwrap();
        assert!(!use_ansi(&file));
    }
}
