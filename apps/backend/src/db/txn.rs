use futures_util::future::LocalBoxFuture;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::error::AppError;

/// Run `f` inside a transaction: commit on `Ok`, roll back on `Err`.
///
/// The closure gets the transaction by reference and returns a boxed future
/// borrowing it, so captures must be owned:
///
/// ```ignore
/// with_txn(db, move |txn| Box::pin(async move { service.deal(txn, user_id).await })).await
/// ```
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> LocalBoxFuture<'c, Result<R, AppError>>,
{
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            if let Err(rb) = txn.rollback().await {
                tracing::warn!(error = %rb, "rollback failed");
            }
            Err(err)
        }
    }
}
