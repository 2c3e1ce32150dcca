//! Savings goals: progress maths, the add/edit/deposit/delete operations and
//! deposit history.
//!
//! Completion has two sources that can disagree: the server's `status` and
//! `saved >= target`. Both are exposed separately; counts use their union.

use chrono::{NaiveDate, NaiveDateTime};

use crate::codec::{parse_amount, parse_date};
use crate::context::{AppContext, Outcome};
use crate::error::ValidationError;
use crate::models::{Deposit, Goal, GoalId, GoalStatus, GoalUpdate, NewDeposit, NewGoal, UserId};

const DAY_MS: f64 = 86_400_000.0;

pub const NO_DEADLINE: i64 = -1;

pub fn progress_percent(saved: f64, target: f64) -> u8 {
    let ratio = saved / target.max(1.0) * 100.0;
    ratio.round().clamp(0.0, 100.0) as u8
}

/// Whole days until midnight at the start of `date`, rounded up.
pub fn remaining_days(date: Option<NaiveDate>, now: NaiveDateTime) -> i64 {
    let Some(date) = date else {
        return NO_DEADLINE;
    };
    let start = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    let millis = (start - now).num_milliseconds() as f64;
    (millis / DAY_MS).ceil() as i64
}

impl Goal {
    pub fn server_completed(&self) -> bool {
        matches!(self.status, Some(GoalStatus::Completed))
    }

    pub fn reached_target(&self) -> bool {
        self.saved >= self.target
    }

    pub fn is_completed(&self) -> bool {
        self.server_completed() || self.reached_target()
    }

    /// Target met but the server has not marked the goal completed, or the
    /// server says completed while the numbers fall short.
    pub fn completion_disputed(&self) -> bool {
        self.server_completed() != self.reached_target()
    }

    pub fn progress(&self) -> u8 {
        progress_percent(self.saved, self.target)
    }

    pub fn status_label(&self) -> &str {
        if self.is_completed() {
            "completed"
        } else {
            self.status
                .as_ref()
                .map(GoalStatus::label)
                .unwrap_or("in_progress")
        }
    }
}

impl Deposit {
    /// When the deposit was recorded, falling back to its value date.
    pub fn recorded_on(&self) -> NaiveDate {
        self.created_at.unwrap_or(self.date)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GoalSummary {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl GoalSummary {
    pub fn of(goals: &[Goal]) -> Self {
        let completed = goals.iter().filter(|g| g.is_completed()).count();
        Self {
            total: goals.len(),
            in_progress: goals.len() - completed,
            completed,
        }
    }
}

/// Goals the dashboard counts as active: status not completed/done/closed.
pub fn active_goal_count(goals: &[Goal]) -> usize {
    goals
        .iter()
        .filter(|g| !g.status.as_ref().map_or(false, GoalStatus::is_closed))
        .count()
}

fn positive_amount(raw: &str) -> Option<f64> {
    parse_amount(raw).filter(|v| *v > 0.0)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalForm {
    pub name: String,
    pub target: String,
    pub date: String,
}

impl GoalForm {
    pub fn validate(&self, user_id: UserId) -> Result<NewGoal, ValidationError> {
        let name = self.name.trim();
        match (positive_amount(&self.target), parse_date(&self.date)) {
            (Some(target), Some(date)) if !name.is_empty() => Ok(NewGoal {
                user_id,
                name: name.to_string(),
                target,
                saved: 0.0,
                date,
            }),
            _ => Err(ValidationError::IncompleteGoal),
        }
    }

    pub fn validate_edit(&self, goal_id: GoalId) -> Result<GoalUpdate, ValidationError> {
        let name = self.name.trim();
        match (positive_amount(&self.target), parse_date(&self.date)) {
            (Some(target), Some(date)) if !name.is_empty() => Ok(GoalUpdate {
                goal_id,
                name: name.to_string(),
                target,
                date,
            }),
            _ => Err(ValidationError::IncompleteGoalEdit),
        }
    }

    pub fn from_goal(goal: &Goal, today: NaiveDate) -> Self {
        Self {
            name: goal.name.clone(),
            target: crate::format::format_number(goal.target).replace(',', ""),
            date: crate::format::format_date(&goal.date.unwrap_or(today)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DepositForm {
    pub amount: String,
    pub date: String,
    pub note: String,
}

impl DepositForm {
    pub fn validate(&self, user_id: UserId, goal_id: GoalId) -> Result<NewDeposit, ValidationError> {
        match (positive_amount(&self.amount), parse_date(&self.date)) {
            (Some(amount), Some(date)) => {
                let note = self.note.trim();
                Ok(NewDeposit {
                    goal_id,
                    amount,
                    date,
                    note: (!note.is_empty()).then(|| note.to_string()),
                    user_id,
                })
            }
            _ => Err(ValidationError::IncompleteDeposit),
        }
    }
}

pub async fn fetch_goals(ctx: &AppContext) -> Vec<Goal> {
    let Some(user_id) = ctx.session.user_id() else {
        return Vec::new();
    };
    match ctx.api.goals(user_id).await {
        Ok(goals) => goals,
        Err(err) => {
            ctx.report_fetch(&err, "Failed to fetch goals");
            Vec::new()
        }
    }
}

pub async fn add_goal(ctx: &AppContext, form: &GoalForm) -> Outcome {
    let user_id = match ctx.require_user() {
        Ok(id) => id,
        Err(outcome) => return outcome,
    };
    let goal = match form.validate(user_id) {
        Ok(goal) => goal,
        Err(err) => return ctx.reject(err),
    };
    match ctx.api.add_goal(&goal).await {
        Ok(_) => {
            ctx.notifier.success("Goal added");
            Outcome::Done
        }
        Err(err) => {
            ctx.report(&err, "Add goal failed");
            Outcome::Failed
        }
    }
}

pub async fn add_money(ctx: &AppContext, goal_id: GoalId, form: &DepositForm) -> Outcome {
    let user_id = match ctx.require_user() {
        Ok(id) => id,
        Err(outcome) => return outcome,
    };
    let deposit = match form.validate(user_id, goal_id) {
        Ok(deposit) => deposit,
        Err(err) => return ctx.reject(err),
    };
    match ctx.api.add_goal_money(&deposit).await {
        Ok(_) => {
            log::info!("deposited {} into goal {}", deposit.amount, goal_id);
            ctx.notifier.success("Amount added");
            Outcome::Done
        }
        Err(err) => {
            ctx.report(&err, "Failed to add money");
            Outcome::Failed
        }
    }
}

pub async fn update_goal(ctx: &AppContext, goal_id: GoalId, form: &GoalForm) -> Outcome {
    if let Err(outcome) = ctx.require_user() {
        return outcome;
    }
    let update = match form.validate_edit(goal_id) {
        Ok(update) => update,
        Err(err) => return ctx.reject(err),
    };
    match ctx.api.update_goal(&update).await {
        Ok(_) => {
            ctx.notifier.success("Goal updated");
            Outcome::Done
        }
        Err(err) => {
            ctx.report(&err, "Update failed");
            Outcome::Failed
        }
    }
}

pub async fn delete_goal(ctx: &AppContext, goal_id: GoalId) -> Outcome {
    if let Err(outcome) = ctx.require_user() {
        return outcome;
    }
    match ctx.api.delete_goal(goal_id).await {
        Ok(_) => {
            log::info!("deleted goal {}", goal_id);
            ctx.notifier.success("Goal deleted");
            Outcome::Done
        }
        Err(err) => {
            ctx.report(&err, "Delete failed");
            Outcome::Failed
        }
    }
}

/// What the history dialog shows. Errors stay inside the dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum HistoryView {
    Loading,
    Entries(Vec<Deposit>),
    Empty,
    Failed(String),
}

pub async fn load_history(ctx: &AppContext, goal_id: GoalId) -> HistoryView {
    let Some(user_id) = ctx.session.user_id() else {
        return HistoryView::Failed("Please login".to_string());
    };
    match ctx.api.goal_money_history(user_id, goal_id).await {
        Ok(entries) if entries.is_empty() => HistoryView::Empty,
        Ok(entries) => HistoryView::Entries(entries),
        Err(err) => HistoryView::Failed(err.user_message("Failed to fetch history")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(saved: f64, target: f64, status: Option<&str>) -> Goal {
        Goal {
            goal_id: 1,
            name: "Trip".into(),
            target,
            saved,
            date: None,
            status: status.map(|s| GoalStatus::from(s.to_string())),
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .expect("datetime")
    }

    #[test]
    fn progress_is_clamped_and_guards_zero_target() {
        assert_eq!(progress_percent(2500.0, 5000.0), 50);
        assert_eq!(progress_percent(1.0, 3.0), 33);
        assert_eq!(progress_percent(2.0, 3.0), 67);
        assert_eq!(progress_percent(9000.0, 5000.0), 100);
        assert_eq!(progress_percent(0.5, 0.0), 50);
        assert_eq!(progress_percent(-10.0, 100.0), 0);
    }

    #[test]
    fn remaining_days_rounds_up_and_marks_missing() {
        let now = at(2025, 11, 29, 15);
        let target = NaiveDate::from_ymd_opt(2025, 12, 1);
        assert_eq!(remaining_days(target, now), 2);
        assert_eq!(remaining_days(NaiveDate::from_ymd_opt(2025, 11, 29), now), 0);
        assert_eq!(remaining_days(NaiveDate::from_ymd_opt(2025, 11, 27), now), -2);
        assert_eq!(remaining_days(None, now), NO_DEADLINE);
    }

    #[test]
    fn summary_partitions_goals() {
        let goals = vec![
            goal(100.0, 100.0, Some("in_progress")),
            goal(10.0, 100.0, Some("completed")),
            goal(10.0, 100.0, None),
            goal(0.0, 50.0, Some("paused")),
        ];
        let summary = GoalSummary::of(&goals);
        assert_eq!(
            summary,
            GoalSummary {
                total: 4,
                in_progress: 2,
                completed: 2
            }
        );
        assert_eq!(summary.in_progress + summary.completed, summary.total);
    }

    #[test]
    fn disagreement_is_visible() {
        assert!(goal(100.0, 100.0, Some("in_progress")).completion_disputed());
        assert!(goal(10.0, 100.0, Some("completed")).completion_disputed());
        assert!(!goal(10.0, 100.0, None).completion_disputed());
        assert_eq!(goal(0.0, 50.0, Some("paused")).status_label(), "paused");
        assert_eq!(goal(0.0, 50.0, None).status_label(), "in_progress");
    }

    #[test]
    fn active_count_uses_status_only() {
        let goals = vec![
            goal(100.0, 100.0, Some("in_progress")),
            goal(0.0, 100.0, Some("Done")),
            goal(0.0, 100.0, Some("closed")),
            goal(0.0, 100.0, None),
        ];
        assert_eq!(active_goal_count(&goals), 2);
    }

    #[test]
    fn goal_form_rules() {
        let form = GoalForm {
            name: "Trip".into(),
            target: "5000".into(),
            date: "2025-12-01".into(),
        };
        let goal = form.validate(4).expect("valid");
        assert_eq!(goal.saved, 0.0);
        assert_eq!(goal.target, 5000.0);

        let missing_date = GoalForm {
            date: "".into(),
            ..form.clone()
        };
        assert_eq!(missing_date.validate(4), Err(ValidationError::IncompleteGoal));
        assert_eq!(
            missing_date.validate_edit(1),
            Err(ValidationError::IncompleteGoalEdit)
        );
    }

    #[test]
    fn deposit_note_is_optional() {
        let form = DepositForm {
            amount: "250".into(),
            date: "2025-06-02".into(),
            note: "  ".into(),
        };
        let deposit = form.validate(1, 8).expect("valid");
        assert_eq!(deposit.note, None);
        assert_eq!(deposit.goal_id, 8);

        let zero = DepositForm {
            amount: "0".into(),
            ..form
        };
        assert_eq!(zero.validate(1, 8), Err(ValidationError::IncompleteDeposit));
    }

    #[test]
    fn edit_form_prefills_from_goal() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).expect("date");
        let mut g = goal(0.0, 125000.5, None);
        let form = GoalForm::from_goal(&g, today);
        assert_eq!(form.target, "125000.5");
        assert_eq!(form.date, "2025-01-02");
        g.date = NaiveDate::from_ymd_opt(2026, 3, 1);
        assert_eq!(GoalForm::from_goal(&g, today).date, "2026-03-01");
    }

    #[test]
    fn deposit_shows_creation_day_when_known() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("date");
        let mut deposit = Deposit {
            amount: 500.0,
            date,
            note: None,
            created_at: None,
        };
        assert_eq!(deposit.recorded_on(), date);

        let created = NaiveDate::from_ymd_opt(2025, 6, 3).expect("date");
        deposit.created_at = Some(created);
        assert_eq!(deposit.recorded_on(), created);
    }
}
