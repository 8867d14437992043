use tracing::info;

use crate::catalog::TransactionRecord;

/// Trait for custody transaction observation
pub trait TransactionObserver {
    /// Called after a transaction has been applied and recorded
    fn on_transaction(&self, record: &TransactionRecord);
}

/// Logs all transactions that occur in the catalog
#[derive(Debug)]
pub struct TransitionLogger;

impl TransactionObserver for TransitionLogger {
    fn on_transaction(&self, record: &TransactionRecord) {
        info!(
            sequence = record.sequence,
            book = %record.book,
            title = %record.title,
            from = ?record.from,
            to = ?record.to,
            event = record.event.action(),
            user_id = %record.event.user_id(),
            "transaction recorded"
        );
    }
}
