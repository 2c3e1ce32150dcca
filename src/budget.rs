use crate::codec::parse_amount;
use crate::context::{AppContext, Outcome};
use crate::error::ValidationError;
use crate::models::{BudgetReport, CurrentBudget, NewBudget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetTone {
    Over,
    Low,
    Healthy,
}

impl BudgetTone {
    pub fn of(budget: &CurrentBudget) -> Self {
        if budget.spent > budget.amount {
            BudgetTone::Over
        } else if budget.remaining < budget.amount * 0.2 {
            BudgetTone::Low
        } else {
            BudgetTone::Healthy
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BudgetTone::Over => "#ff7b7b",
            BudgetTone::Low => "#facc15",
            BudgetTone::Healthy => "#22c55e",
        }
    }
}

impl BudgetReport {
    /// The current month's budget, unless none (or zero) was set.
    pub fn active_current(&self) -> Option<&CurrentBudget> {
        self.current.as_ref().filter(|c| c.amount > 0.0)
    }
}

pub fn parse_budget_amount(raw: &str) -> Result<f64, ValidationError> {
    parse_amount(raw)
        .filter(|v| *v > 0.0)
        .ok_or(ValidationError::InvalidBudget)
}

pub async fn add_budget(ctx: &AppContext, raw_amount: &str) -> Outcome {
    let user_id = match ctx.require_user() {
        Ok(id) => id,
        Err(outcome) => return outcome,
    };
    let amount = match parse_budget_amount(raw_amount) {
        Ok(amount) => amount,
        Err(err) => return ctx.reject(err),
    };
    match ctx.api.add_budget(&NewBudget { user_id, amount }).await {
        Ok(_) => {
            ctx.notifier.success("Budget saved for current month");
            Outcome::Done
        }
        Err(err) => {
            ctx.report(&err, "Failed to save budget");
            Outcome::Failed
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BudgetView {
    Loading,
    Loaded(BudgetReport),
    Failed(&'static str),
}

pub async fn load_budget(ctx: &AppContext) -> BudgetView {
    let Some(user_id) = ctx.session.user_id() else {
        return BudgetView::Failed("Please login");
    };
    match ctx.api.budget(user_id).await {
        Ok(report) => BudgetView::Loaded(report),
        Err(err) if err.is_transport() => {
            ctx.report(&err, "Failed to fetch budget");
            BudgetView::Failed("Error loading budget")
        }
        Err(err) => {
            ctx.report(&err, "Failed to fetch budget");
            BudgetView::Failed("Failed to load budget")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(amount: f64, spent: f64) -> CurrentBudget {
        CurrentBudget {
            month_year: "2025-06".into(),
            amount,
            spent,
            remaining: amount - spent,
            remaining_days: 12,
            note: String::new(),
        }
    }

    #[test]
    fn three_tiers() {
        assert_eq!(BudgetTone::of(&current(1000.0, 1200.0)), BudgetTone::Over);
        assert_eq!(BudgetTone::of(&current(1000.0, 850.0)), BudgetTone::Low);
        assert_eq!(BudgetTone::of(&current(1000.0, 800.0)), BudgetTone::Healthy);
        assert_eq!(BudgetTone::of(&current(1000.0, 1000.0)), BudgetTone::Low);
    }

    #[test]
    fn zero_budget_is_not_active() {
        let report = BudgetReport {
            current: Some(current(0.0, 300.0)),
            previous: vec![],
        };
        assert!(report.active_current().is_none());

        let none = BudgetReport {
            current: None,
            previous: vec![],
        };
        assert!(none.active_current().is_none());
    }

    #[test]
    fn budget_amount_must_be_positive() {
        assert_eq!(parse_budget_amount("15000"), Ok(15000.0));
        assert_eq!(parse_budget_amount("0"), Err(ValidationError::InvalidBudget));
        assert_eq!(parse_budget_amount("-1"), Err(ValidationError::InvalidBudget));
        assert_eq!(parse_budget_amount(""), Err(ValidationError::InvalidBudget));
    }
}
