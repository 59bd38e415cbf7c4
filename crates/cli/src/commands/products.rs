//! Product commands.

use flohmarkt_admin::dialogs::Dialogs;
use flohmarkt_core::ProductId;

use super::{CliError, Controller, loaded, report};

/// Print every product, one per line.
#[allow(clippy::print_stdout)]
pub async fn list(controller: &Controller) -> Result<(), CliError> {
    let ok = controller.load_products().await;
    loaded(controller, ok).await?;

    controller
        .with_state(|state| {
            for p in state.products_table.rows() {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    p.id,
                    p.status.label_ar(),
                    p.price.display_ar(),
                    p.name,
                    p.category,
                    p.seller
                );
            }
        })
        .await;
    Ok(())
}

pub async fn approve(controller: &Controller, id: ProductId) -> Result<(), CliError> {
    let outcome = controller.approve_product(id).await;
    report(controller, outcome).await
}

pub async fn reject(
    controller: &Controller,
    id: ProductId,
    dialogs: &impl Dialogs,
) -> Result<(), CliError> {
    let outcome = controller.reject_product(id, dialogs).await;
    report(controller, outcome).await
}

pub async fn delete(
    controller: &Controller,
    id: ProductId,
    dialogs: &impl Dialogs,
) -> Result<(), CliError> {
    let outcome = controller.delete_product(id, dialogs).await;
    report(controller, outcome).await
}
