//! JSON client for the finance backend.
//!
//! One typed method per endpoint. Replies go through [`envelope::interpret`],
//! which turns non-JSON bodies, rejections and shape mismatches into
//! [`ApiError`] values.

pub mod envelope;
pub mod transport;

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use envelope::Ack;
pub use transport::{FetchTransport, HttpReply, HttpRequest, Method, ReplyFuture, Transport};

use crate::error::ApiError;
use crate::models::{
    BudgetReport, Deposit, Goal, GoalId, GoalRef, GoalUpdate, LoginRequest, NewBudget,
    NewDeposit, NewGoal, NewTransaction, Prediction, SignupRequest, Transaction, User, UserId,
};

#[derive(Deserialize)]
struct LoginReply {
    user: User,
}

#[derive(Deserialize)]
struct TransactionsReply {
    transactions: Vec<Transaction>,
}

#[derive(Deserialize)]
struct GoalsReply {
    goals: Vec<Goal>,
}

#[derive(Deserialize)]
struct HistoryReply {
    history: Vec<Deposit>,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    transport: Rc<dyn Transport>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Rc<dyn Transport>) -> Self {
        Self {
            base_url: Rc::from(base_url.trim_end_matches('/')),
            transport,
        }
    }

    pub fn fetch(base_url: &str) -> Self {
        Self::new(base_url, Rc::new(FetchTransport))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: &[(&str, i64)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&value.to_string());
        }
        url
    }

    async fn get<T>(&self, path: &str, query: &[(&str, i64)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = HttpRequest {
            method: Method::Get,
            url: self.url(path, query),
            body: None,
        };
        self.dispatch(path, request).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = HttpRequest {
            method: Method::Post,
            url: self.url(path, &[]),
            body: Some(body),
        };
        self.dispatch(path, request).await
    }

    async fn dispatch<T>(&self, endpoint: &str, request: HttpRequest) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        log::debug!("{:?} {}", request.method, request.url);
        let reply = self.transport.execute(request).await.map_err(|err| {
            log::error!("{} failed: {}", endpoint, err);
            ApiError::from(err)
        })?;
        envelope::interpret(endpoint, &reply)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let reply: LoginReply = self.post("/login", request).await?;
        Ok(reply.user)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<Ack, ApiError> {
        self.post("/signup", request).await
    }

    pub async fn transactions(&self, user_id: UserId) -> Result<Vec<Transaction>, ApiError> {
        let reply: TransactionsReply = self.get("/transactions", &[("user_id", user_id)]).await?;
        Ok(reply.transactions)
    }

    pub async fn add_transaction(&self, txn: &NewTransaction) -> Result<Ack, ApiError> {
        self.post("/transactions", txn).await
    }

    pub async fn goals(&self, user_id: UserId) -> Result<Vec<Goal>, ApiError> {
        let reply: GoalsReply = self.get("/goals", &[("user_id", user_id)]).await?;
        Ok(reply.goals)
    }

    pub async fn add_goal(&self, goal: &NewGoal) -> Result<Ack, ApiError> {
        self.post("/goals", goal).await
    }

    pub async fn add_goal_money(&self, deposit: &NewDeposit) -> Result<Ack, ApiError> {
        self.post("/add_goal_money", deposit).await
    }

    pub async fn goal_money_history(
        &self,
        user_id: UserId,
        goal_id: GoalId,
    ) -> Result<Vec<Deposit>, ApiError> {
        let reply: HistoryReply = self
            .get(
                "/goal_money_history",
                &[("user_id", user_id), ("goal_id", goal_id)],
            )
            .await?;
        Ok(reply.history)
    }

    pub async fn update_goal(&self, update: &GoalUpdate) -> Result<Ack, ApiError> {
        self.post("/update_goal", update).await
    }

    pub async fn delete_goal(&self, goal_id: GoalId) -> Result<Ack, ApiError> {
        self.post("/delete_goal", &GoalRef { goal_id }).await
    }

    pub async fn predictions(&self, user_id: UserId) -> Result<Prediction, ApiError> {
        self.get("/predictions", &[("user_id", user_id)]).await
    }

    pub async fn add_budget(&self, budget: &NewBudget) -> Result<Ack, ApiError> {
        self.post("/add_budget", budget).await
    }

    pub async fn budget(&self, user_id: UserId) -> Result<BudgetReport, ApiError> {
        self.get("/get_budget", &[("user_id", user_id)]).await
    }
}
