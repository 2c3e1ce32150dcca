use chrono::NaiveDate;

use crate::codec::parse_amount;
use crate::context::{AppContext, Outcome};
use crate::error::ValidationError;
use crate::models::{NewTransaction, Transaction, TxnType, UserId};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TxnForm {
    pub category: String,
    pub amount: String,
    pub kind: Option<TxnType>,
}

/// Which form the values came from. The caller knows; nothing is guessed.
#[derive(Clone, Debug, PartialEq)]
pub enum TxnInputSource {
    Full(TxnForm),
    Quick(TxnForm),
}

impl TxnInputSource {
    pub fn form(&self) -> &TxnForm {
        match self {
            TxnInputSource::Full(form) | TxnInputSource::Quick(form) => form,
        }
    }
}

impl TxnForm {
    pub fn validate(&self, user_id: UserId, today: NaiveDate) -> Result<NewTransaction, ValidationError> {
        let category = self.category.trim();
        let amount = parse_amount(&self.amount).filter(|a| *a > 0.0);
        match amount {
            Some(amount) if !category.is_empty() => Ok(NewTransaction {
                user_id,
                category: category.to_string(),
                amount,
                kind: self.kind.unwrap_or_default(),
                date: today,
            }),
            _ => Err(ValidationError::IncompleteTransaction),
        }
    }
}

/// Most recent first, capped. Entries sharing a date keep the server's order.
pub fn recent_first(txns: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = txns.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Never fails: any problem is notified and yields an empty list.
pub async fn fetch_transactions(ctx: &AppContext) -> Vec<Transaction> {
    let Some(user_id) = ctx.session.user_id() else {
        return Vec::new();
    };
    match ctx.api.transactions(user_id).await {
        Ok(txns) => txns,
        Err(err) => {
            ctx.report_fetch(&err, "Failed to fetch transactions");
            Vec::new()
        }
    }
}

pub async fn add_transaction(ctx: &AppContext, source: &TxnInputSource, today: NaiveDate) -> Outcome {
    let user_id = match ctx.require_user() {
        Ok(id) => id,
        Err(outcome) => return outcome,
    };
    let txn = match source.form().validate(user_id, today) {
        Ok(txn) => txn,
        Err(err) => return ctx.reject(err),
    };

    match ctx.api.add_transaction(&txn).await {
        Ok(_) => {
            log::info!("added {} of {} in {}", txn.kind.as_str(), txn.amount, txn.category);
            ctx.notifier.success("Transaction added");
            Outcome::Done
        }
        Err(err) => {
            ctx.report(&err, "Add failed");
            Outcome::Failed
        }
    }
}
