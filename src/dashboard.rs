use crate::context::AppContext;
use crate::goals::active_goal_count;
use crate::models::{Transaction, TxnType};
use crate::nav::{PageId, Redirect};
use crate::transactions::fetch_transactions;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub saving: f64,
}

impl Totals {
    pub fn of(txns: &[Transaction]) -> Self {
        let sum = |kind: TxnType| -> f64 {
            txns.iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };
        let income = sum(TxnType::Income);
        let expense = sum(TxnType::Expense);
        Self {
            income,
            expense,
            saving: income - expense,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub display_name: String,
    pub totals: Totals,
    pub active_goals: usize,
}

/// Signed-out visitors are sent to the login page.
pub async fn load_dashboard(ctx: &AppContext) -> Result<Snapshot, Redirect> {
    let Some(user_id) = ctx.session.user_id() else {
        return Err(Redirect::now(PageId::Login));
    };
    let display_name = ctx.session.display_name();
    let totals = Totals::of(&fetch_transactions(ctx).await);

    let active_goals = match ctx.api.goals(user_id).await {
        Ok(goals) => active_goal_count(&goals),
        Err(err) => {
            log::error!("goals for dashboard unavailable: {}", err);
            0
        }
    };

    Ok(Snapshot {
        display_name,
        totals,
        active_goals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_number;
    use chrono::NaiveDate;

    fn txn(kind: TxnType, amount: f64) -> Transaction {
        Transaction {
            id: 0,
            user_id: 1,
            category: "x".into(),
            amount,
            kind,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).expect("date"),
        }
    }

    #[test]
    fn saving_is_income_minus_expense() {
        let txns = vec![
            txn(TxnType::Income, 50000.0),
            txn(TxnType::Expense, 12000.5),
            txn(TxnType::Expense, 0.1),
            txn(TxnType::Income, 0.2),
        ];
        let totals = Totals::of(&txns);
        assert_eq!(format_number(totals.income), "50,000.2");
        assert_eq!(format_number(totals.expense), "12,000.6");
        assert_eq!(format_number(totals.saving), "37,999.6");
    }

    #[test]
    fn empty_history_is_all_zero() {
        assert_eq!(Totals::of(&[]), Totals::default());
    }
}
