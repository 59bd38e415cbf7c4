//! Category commands.

use flohmarkt_admin::controller::LOAD_CATEGORIES_FAILED;
use flohmarkt_admin::dialogs::Dialogs;
use flohmarkt_core::CategoryId;

use super::{CliError, Controller, loaded, report};

/// Print every category with its product count.
#[allow(clippy::print_stdout)]
pub async fn list(controller: &Controller) -> Result<(), CliError> {
    let ok = controller.load_categories_table().await;
    loaded(controller, ok).await?;

    controller
        .with_state(|state| {
            for row in state.categories_table.rows() {
                println!(
                    "{}\t{}\t{}",
                    row.category.id, row.category.name, row.product_count
                );
            }
        })
        .await;
    Ok(())
}

pub async fn add(controller: &Controller, dialogs: &impl Dialogs) -> Result<(), CliError> {
    let outcome = controller.add_category(dialogs).await;
    report(controller, outcome).await
}

/// Rename a category. The category cache is loaded first so the current
/// name can be offered and compared.
///
/// # Errors
///
/// Returns [`CliError::Load`] when the categories cannot be fetched, so an
/// unreachable backend is not reported as a cancelled rename.
pub async fn rename(
    controller: &Controller,
    id: CategoryId,
    dialogs: &impl Dialogs,
) -> Result<(), CliError> {
    if !controller.load_categories().await {
        return Err(CliError::Load(LOAD_CATEGORIES_FAILED.to_string()));
    }
    let outcome = controller.edit_category(id, dialogs).await;
    report(controller, outcome).await
}

pub async fn delete(
    controller: &Controller,
    id: CategoryId,
    dialogs: &impl Dialogs,
) -> Result<(), CliError> {
    let outcome = controller.delete_category(id, dialogs).await;
    report(controller, outcome).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use flohmarkt_admin::api::RestClient;
    use flohmarkt_admin::controller::AdminController;
    use flohmarkt_admin::dialogs::PresetAnswers;
    use flohmarkt_admin::notifications::Notifications;
    use url::Url;

    use super::*;

    #[tokio::test]
    async fn test_rename_reports_unreachable_backend() {
        // Nothing listens on port 1.
        let client = RestClient::new(Url::parse("http://127.0.0.1:1").unwrap(), None);
        let controller = AdminController::new(client, Notifications::default());
        let answers = PresetAnswers::text(Some("أزياء".to_string()));

        let err = rename(&controller, CategoryId::new(1), &answers)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Load(ref message) if message == LOAD_CATEGORIES_FAILED));
    }
}
