//! User commands.

use flohmarkt_core::format::{NOT_SPECIFIED, format_date_ar};

use super::{CliError, Controller, loaded};

/// Print every user, one per line.
#[allow(clippy::print_stdout)]
pub async fn list(controller: &Controller) -> Result<(), CliError> {
    let ok = controller.load_users().await;
    loaded(controller, ok).await?;

    controller
        .with_state(|state| {
            for u in state.users_table.rows() {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    u.id,
                    u.fullname,
                    u.email,
                    u.phone.as_deref().unwrap_or(NOT_SPECIFIED),
                    u.role.label_ar(),
                    format_date_ar(u.created_at.as_deref())
                );
            }
        })
        .await;
    Ok(())
}
