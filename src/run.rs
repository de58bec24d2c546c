//! Application execution logic.
//!
//! This module turns a parsed subcommand into a webhook operation and
//! prints its result.

use std::io::{self, Write};

use thiserror::Error;

use discord_webhooks::config::{
    Command, ConfigError, ValidatedConfig, compose_edit, compose_post, thread_params,
};
use discord_webhooks::webhook::{HttpClient, HttpError, ReqwestClient, Webhook, WebhookError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The message to send could not be assembled from arguments and files.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] HttpError),

    /// The webhook operation failed.
    #[error(transparent)]
    Webhook(#[from] WebhookError),

    /// Failed to write the result to stdout.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Executes one subcommand against the configured webhook.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be created
/// - The message cannot be composed from arguments and files
/// - The webhook operation fails
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires a real
/// network transport; [`execute_with`] holds the testable logic.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, command: Command) -> Result<(), RunError> {
    let client = ReqwestClient::with_options(config.timeout, &config.user_agent)
        .map_err(RunError::ClientBuild)?;
    let webhook = Webhook::new(client, config.url);

    let stdout = io::stdout();
    execute_with(&webhook, command, &mut stdout.lock()).await
}

/// Executes one subcommand with the given webhook, writing results to `out`.
///
/// `post` writes the new message id and `info` writes pretty JSON; `edit`
/// and `delete` write nothing.
///
/// # Errors
///
/// Returns an error if the message cannot be composed, the webhook call
/// fails, or `out` cannot be written.
pub async fn execute_with<H: HttpClient>(
    webhook: &Webhook<H>,
    command: Command,
    out: &mut impl Write,
) -> Result<(), RunError> {
    match command {
        Command::Post(args) => {
            let message = compose_post(&args)?;
            let id = webhook.post_message(&message).await?;
            tracing::info!(
                "Message {id} posted ({} attachment(s))",
                message.files.len()
            );
            writeln!(out, "{id}")?;
        }
        Command::Edit(args) => {
            let edit = compose_edit(&args)?;
            let params = thread_params(args.thread_id.as_deref());
            webhook
                .edit_message(&args.message_id, &edit, params.as_ref())
                .await?;
            tracing::info!("Message {} edited", args.message_id);
        }
        Command::Delete {
            message_id,
            thread_id,
        } => {
            let params = thread_params(thread_id.as_deref());
            webhook.delete_message(&message_id, params.as_ref()).await?;
            tracing::info!("Message {message_id} deleted");
        }
        Command::Info => {
            let info = webhook.info().await?;
            serde_json::to_writer_pretty(&mut *out, &info).map_err(io::Error::from)?;
            writeln!(out)?;
        }
        Command::Init { .. } => {
            // Handled before configuration is loaded.
            tracing::debug!("init has no webhook operation");
        }
    }

    Ok(())
}
