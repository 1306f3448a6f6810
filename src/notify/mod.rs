pub mod powershell;
pub mod terminal;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::client::message::NotificationRequest;

pub use powershell::PowerShellPopup;

/// Why the popup could not be shown
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("host UI interpreter not found: {0}")]
    NotFound(String),

    #[error("failed to launch host UI interpreter: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("popup script exited with {status}: {stderr}")]
    Exited { status: String, stderr: String },
}

/// Renders a modal acknowledgment dialog on the host display.
///
/// Implementations block until the user dismisses the dialog. `duration` is
/// accepted for interface stability but no implementation applies it.
#[async_trait]
pub trait Popup: Send + Sync {
    async fn show(&self, title: &str, message: &str, duration: u64) -> Result<(), DispatchError>;
}

/// Try the popup for a request. Failures are logged and reported as `false`.
pub async fn dispatch<P: Popup + ?Sized>(popup: &P, request: &NotificationRequest) -> bool {
    match popup
        .show(&request.title, &request.message, request.duration)
        .await
    {
        Ok(()) => {
            info!("Popup dismissed for {:?}", request.event_type);
            true
        }
        Err(e) => {
            warn!("Popup notification failed: {}", e);
            false
        }
    }
}
