use std::io::ErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::{DispatchError, Popup};

const SCRIPT_TEMPLATE: &str = include_str!("../../resources/windows/popup.ps1");

/// Interpreter reached through the WSL interop bridge.
pub const DEFAULT_EXECUTABLE: &str = "powershell.exe";

const WINDOW_TITLE: &str = "Claude";
const LABEL: &str = "完了";
const BUTTON: &str = "OK";
const WIDTH: u32 = 150;
const HEIGHT: u32 = 70;

/// Render the WinForms script for the completion dialog.
///
/// The dialog is centered on the first enumerated display, or the primary
/// display if enumeration returns nothing.
pub fn render_script() -> String {
    SCRIPT_TEMPLATE
        .replace("{{WINDOW_TITLE}}", WINDOW_TITLE)
        .replace("{{LABEL}}", LABEL)
        .replace("{{BUTTON}}", BUTTON)
        .replace("{{WIDTH}}", &WIDTH.to_string())
        .replace("{{HEIGHT}}", &HEIGHT.to_string())
        .replace("{{HALF_WIDTH}}", &(WIDTH / 2).to_string())
        .replace("{{HALF_HEIGHT}}", &(HEIGHT / 2).to_string())
}

/// Shows the dialog by running PowerShell on the Windows host.
pub struct PowerShellPopup {
    executable: String,
}

impl PowerShellPopup {
    pub fn new() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
        }
    }

    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }
}

impl Default for PowerShellPopup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Popup for PowerShellPopup {
    async fn show(&self, title: &str, message: &str, duration: u64) -> Result<(), DispatchError> {
        debug!(
            executable = %self.executable,
            title,
            message,
            duration,
            "Launching host popup"
        );

        let output = Command::new(&self.executable)
            .arg("-Command")
            .arg(render_script())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    DispatchError::NotFound(self.executable.clone())
                } else {
                    DispatchError::Spawn(e)
                }
            })?;

        if !output.status.success() {
            return Err(DispatchError::Exited {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
