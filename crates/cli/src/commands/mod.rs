//! Console commands and the terminal dialog implementation.

use flohmarkt_admin::api::RestClient;
use flohmarkt_admin::config::{AdminConfig, ConfigError};
use flohmarkt_admin::notifications::Notifications;
use flohmarkt_admin::{ActionOutcome, AdminController};
use thiserror::Error;

pub mod categories;
mod dialogs;
pub mod products;
pub mod users;

pub use dialogs::TerminalDialogs;

/// Controller type the commands run against.
pub type Controller = AdminController<RestClient>;

/// Errors that end a console command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A list could not be loaded.
    #[error("{0}")]
    Load(String),

    /// The backend refused an action or the input was invalid.
    #[error("{0}")]
    Action(String),
}

/// Build a controller from the environment.
pub fn connect() -> Result<Controller, CliError> {
    let config = AdminConfig::from_env()?;
    tracing::debug!(backend = %config.api_url, "Connecting to marketplace backend");
    let client = RestClient::new(config.api_url, config.api_session);
    Ok(AdminController::new(
        client,
        Notifications::new(config.notification_ttl),
    ))
}

/// Most recent notification text, if any.
async fn last_message(controller: &Controller) -> Option<String> {
    controller
        .with_state(|s| s.notifications.all().last().map(|n| n.message.clone()))
        .await
}

/// Turn a load result into a command result.
async fn loaded(controller: &Controller, ok: bool) -> Result<(), CliError> {
    if ok {
        Ok(())
    } else {
        Err(CliError::Load(
            last_message(controller).await.unwrap_or_default(),
        ))
    }
}

/// Print the outcome of an action and fail on errors.
#[allow(clippy::print_stdout)]
async fn report(controller: &Controller, outcome: ActionOutcome) -> Result<(), CliError> {
    match outcome {
        ActionOutcome::Cancelled => {
            println!("تم الإلغاء");
            Ok(())
        }
        ActionOutcome::Succeeded => {
            if let Some(message) = last_message(controller).await {
                println!("{message}");
            }
            Ok(())
        }
        ActionOutcome::Failed => Err(CliError::Action(
            last_message(controller).await.unwrap_or_default(),
        )),
    }
}
