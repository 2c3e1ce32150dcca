use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codec;

pub type UserId = i64;
pub type GoalId = i64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "user_id", alias = "userId")]
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnType {
    Income,
    #[default]
    Expense,
}

impl TxnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnType::Income => "income",
            TxnType::Expense => "expense",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "income" => Some(TxnType::Income),
            "expense" => Some(TxnType::Expense),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    #[serde(alias = "txn_id")]
    pub id: i64,
    pub user_id: UserId,
    pub category: String,
    #[serde(deserialize_with = "codec::amount")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxnType,
    #[serde(deserialize_with = "codec::date")]
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GoalStatus {
    InProgress,
    Completed,
    Done,
    Closed,
    Other(String),
}

impl From<String> for GoalStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "in_progress" => GoalStatus::InProgress,
            "completed" => GoalStatus::Completed,
            "done" => GoalStatus::Done,
            "closed" => GoalStatus::Closed,
            _ => GoalStatus::Other(raw),
        }
    }
}

impl<'de> Deserialize<'de> for GoalStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(GoalStatus::from)
    }
}

impl GoalStatus {
    pub fn label(&self) -> &str {
        match self {
            GoalStatus::InProgress => "in_progress",
            GoalStatus::Completed => "completed",
            GoalStatus::Done => "done",
            GoalStatus::Closed => "closed",
            GoalStatus::Other(raw) => raw,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            GoalStatus::Completed | GoalStatus::Done | GoalStatus::Closed
        )
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Goal {
    pub goal_id: GoalId,
    #[serde(alias = "goal_name")]
    pub name: String,
    #[serde(deserialize_with = "codec::amount")]
    pub target: f64,
    #[serde(deserialize_with = "codec::amount")]
    pub saved: f64,
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<GoalStatus>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Deposit {
    #[serde(deserialize_with = "codec::amount")]
    pub amount: f64,
    #[serde(deserialize_with = "codec::date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "codec::optional_date")]
    pub created_at: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CurrentBudget {
    pub month_year: String,
    #[serde(deserialize_with = "codec::amount")]
    pub amount: f64,
    #[serde(deserialize_with = "codec::amount")]
    pub spent: f64,
    #[serde(deserialize_with = "codec::amount")]
    pub remaining: f64,
    pub remaining_days: i64,
    #[serde(default)]
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PreviousBudget {
    pub month_year: String,
    #[serde(deserialize_with = "codec::amount")]
    pub amount: f64,
    #[serde(deserialize_with = "codec::amount")]
    pub spent: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BudgetReport {
    #[serde(default)]
    pub current: Option<CurrentBudget>,
    pub previous: Vec<PreviousBudget>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Prediction {
    pub labels: Vec<String>,
    #[serde(deserialize_with = "codec::amounts")]
    pub actual: Vec<f64>,
    #[serde(deserialize_with = "codec::amounts")]
    pub predicted: Vec<f64>,
    #[serde(deserialize_with = "codec::amount")]
    pub next_pred: f64,
}

// ---- request payloads ----

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTransaction {
    pub user_id: UserId,
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxnType,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewGoal {
    pub user_id: UserId,
    pub name: String,
    pub target: f64,
    pub saved: f64,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewDeposit {
    pub goal_id: GoalId,
    pub amount: f64,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub user_id: UserId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoalUpdate {
    pub goal_id: GoalId,
    pub name: String,
    pub target: f64,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoalRef {
    pub goal_id: GoalId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewBudget {
    pub user_id: UserId,
    pub amount: f64,
}
