mod support;

use chrono::NaiveDate;
use finance_advisor_frontend::api::Method;
use finance_advisor_frontend::auth::{self, LoginForm, SignupForm};
use finance_advisor_frontend::budget::{add_budget, load_budget, BudgetView};
use finance_advisor_frontend::context::Outcome;
use finance_advisor_frontend::dashboard::load_dashboard;
use finance_advisor_frontend::goals::{self, DepositForm, GoalForm, HistoryView};
use finance_advisor_frontend::nav::{PageId, Redirect};
use finance_advisor_frontend::notify::ToastKind;
use finance_advisor_frontend::predictions::load_prediction;
use finance_advisor_frontend::transactions::{
    add_transaction, fetch_transactions, TxnForm, TxnInputSource,
};
use serde_json::json;
use support::{Harness, BASE};

fn june_10() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
}

#[tokio::test]
async fn wrong_credentials_notify_and_stay_signed_out() {
    let h = Harness::new();
    h.transport.reply(
        401,
        json!({ "status": "error", "message": "Invalid credentials" }),
    );

    let form = LoginForm {
        email: "asha@example.com".into(),
        password: "nope".into(),
    };
    let redirect = auth::login(&h.ctx, &form).await;

    assert_eq!(redirect, None);
    assert_eq!(h.last_message().as_deref(), Some("Invalid credentials"));
    assert_eq!(h.last_kind(), Some(ToastKind::Error));
    assert!(h.ctx.session.get().is_none());
}

#[tokio::test]
async fn login_stores_user_and_heads_to_dashboard() {
    let h = Harness::new();
    h.transport.reply(
        200,
        json!({
            "status": "success",
            "message": "Login successful",
            "user": { "id": 3, "name": "Ravi", "email": "ravi@example.com" }
        }),
    );

    let form = LoginForm {
        email: " ravi@example.com ".into(),
        password: "secret".into(),
    };
    let redirect = auth::login(&h.ctx, &form).await;

    assert_eq!(
        redirect,
        Some(Redirect {
            to: PageId::Dashboard,
            after_ms: 600
        })
    );
    assert_eq!(h.ctx.session.user_id(), Some(3));
    assert_eq!(h.ctx.session.display_name(), "Ravi");
    assert_eq!(h.transport.body(0)["email"], "ravi@example.com");
    assert_eq!(h.last_message().as_deref(), Some("Login successful"));
}

#[tokio::test]
async fn empty_login_form_sends_nothing() {
    let h = Harness::new();
    let redirect = auth::login(&h.ctx, &LoginForm::default()).await;

    assert_eq!(redirect, None);
    assert!(h.transport.requests().is_empty());
    assert_eq!(h.last_message().as_deref(), Some("Enter email & password"));
}

fn signup_form(confirm: &str) -> SignupForm {
    SignupForm {
        name: "Meera".into(),
        email: "meera@example.com".into(),
        password: "pa55word".into(),
        confirm: confirm.into(),
    }
}

#[tokio::test]
async fn signup_success_heads_back_to_login() {
    let h = Harness::new();
    h.transport.reply(
        200,
        json!({ "status": "success", "message": "Account created successfully" }),
    );

    let redirect = auth::signup(&h.ctx, &signup_form("pa55word")).await;

    assert_eq!(
        redirect,
        Some(Redirect {
            to: PageId::Login,
            after_ms: 900
        })
    );
    assert_eq!(h.transport.requests()[0].url, format!("{}/signup", BASE));
    assert_eq!(
        h.transport.body(0),
        json!({ "name": "Meera", "email": "meera@example.com", "password": "pa55word" })
    );
    assert_eq!(
        h.last_message().as_deref(),
        Some("Account created, please login")
    );
    assert_eq!(h.last_kind(), Some(ToastKind::Success));
}

#[tokio::test]
async fn signup_rejection_without_message_uses_fallback() {
    let h = Harness::new();
    h.transport.reply(400, json!({ "status": "error" }));

    assert_eq!(auth::signup(&h.ctx, &signup_form("pa55word")).await, None);
    assert_eq!(h.last_message().as_deref(), Some("Signup failed"));
}

#[tokio::test]
async fn signup_password_mismatch_sends_nothing() {
    let h = Harness::new();

    assert_eq!(auth::signup(&h.ctx, &signup_form("different")).await, None);
    assert!(h.transport.requests().is_empty());
    assert_eq!(h.last_message().as_deref(), Some("Passwords do not match"));
}

#[tokio::test]
async fn reset_password_never_calls_the_backend() {
    let h = Harness::new();

    assert!(!auth::reset_password(&h.ctx, "   "));
    assert_eq!(h.last_message().as_deref(), Some("Enter registered email"));
    assert_eq!(h.last_kind(), Some(ToastKind::Error));

    assert!(auth::reset_password(&h.ctx, "meera@example.com"));
    let notices = h.notices();
    let last = notices.last().expect("reset notice");
    assert_eq!(last.kind, ToastKind::Info);
    assert_eq!(last.timeout_ms, Some(3500));
    assert!(h.transport.requests().is_empty());
}

#[tokio::test]
async fn logout_clears_session() {
    let h = Harness::signed_in();
    let redirect = auth::logout(&h.ctx);

    assert_eq!(redirect.to, PageId::Login);
    assert_eq!(redirect.after_ms, 350);
    assert!(h.ctx.session.get().is_none());
    assert_eq!(h.last_message().as_deref(), Some("Logged out"));
}

#[tokio::test]
async fn zero_amount_transaction_is_rejected_locally() {
    let h = Harness::signed_in();
    let source = TxnInputSource::Full(TxnForm {
        category: "Food".into(),
        amount: "0".into(),
        kind: None,
    });

    let outcome = add_transaction(&h.ctx, &source, june_10()).await;

    assert_eq!(outcome, Outcome::Invalid);
    assert!(h.transport.requests().is_empty());
    assert_eq!(h.last_message().as_deref(), Some("Enter category & amount"));
}

#[tokio::test]
async fn quick_add_defaults_to_expense_dated_today() {
    let h = Harness::signed_in();
    h.transport
        .reply(200, json!({ "status": "success", "message": "Transaction added" }));
    let source = TxnInputSource::Quick(TxnForm {
        category: "Groceries".into(),
        amount: "450.50".into(),
        kind: None,
    });

    let outcome = add_transaction(&h.ctx, &source, june_10()).await;

    assert_eq!(outcome, Outcome::Done);
    let requests = h.transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, format!("{}/transactions", BASE));
    let body = h.transport.body(0);
    assert_eq!(body["type"], "expense");
    assert_eq!(body["date"], "2025-06-10");
    assert_eq!(body["user_id"], 7);
    assert_eq!(body["amount"], 450.5);
    assert_eq!(h.last_message().as_deref(), Some("Transaction added"));
}

#[tokio::test]
async fn adding_without_a_session_asks_for_login() {
    let h = Harness::new();
    let source = TxnInputSource::Full(TxnForm {
        category: "Rent".into(),
        amount: "100".into(),
        kind: None,
    });

    let outcome = add_transaction(&h.ctx, &source, june_10()).await;

    assert_eq!(outcome, Outcome::NeedsLogin(Redirect::now(PageId::Login)));
    assert!(h.transport.requests().is_empty());
    assert_eq!(h.last_message().as_deref(), Some("Please login"));
}

#[tokio::test]
async fn unreachable_server_yields_empty_list() {
    let h = Harness::signed_in();
    h.transport.fail("connection refused");

    let txns = fetch_transactions(&h.ctx).await;

    assert!(txns.is_empty());
    assert_eq!(
        h.transport.requests()[0].url,
        format!("{}/transactions?user_id=7", BASE)
    );
    assert_eq!(h.last_message().as_deref(), Some("Server not reachable"));
}

#[tokio::test]
async fn malformed_goal_list_names_the_failed_fetch() {
    let h = Harness::signed_in();
    h.transport.reply_raw(500, "<html>Internal Server Error</html>");

    let goals = goals::fetch_goals(&h.ctx).await;

    assert!(goals.is_empty());
    assert_eq!(h.last_message().as_deref(), Some("Failed to fetch goals"));
}

#[tokio::test]
async fn rejected_transaction_list_ignores_server_message() {
    let h = Harness::signed_in();
    h.transport
        .reply(500, json!({ "status": "error", "message": "DB down" }));

    let txns = fetch_transactions(&h.ctx).await;

    assert!(txns.is_empty());
    assert_eq!(
        h.last_message().as_deref(),
        Some("Failed to fetch transactions")
    );
}

#[tokio::test]
async fn mutations_still_echo_invalid_json() {
    let h = Harness::signed_in();
    h.transport.reply_raw(502, "<html>Bad Gateway</html>");

    assert_eq!(goals::delete_goal(&h.ctx, 3).await, Outcome::Failed);
    assert_eq!(h.last_message().as_deref(), Some("Invalid JSON"));
}

#[tokio::test]
async fn add_goal_round_trip() {
    let h = Harness::signed_in();
    h.transport
        .reply(200, json!({ "status": "success", "message": "Goal added" }))
        .reply(
            200,
            json!({
                "status": "success",
                "goals": [{
                    "goal_id": 11, "user_id": 7, "name": "Trip", "target": "5000.00",
                    "saved": "0.00", "date": "Mon, 01 Dec 2025 00:00:00 GMT", "status": "in_progress"
                }]
            }),
        );
    let form = GoalForm {
        name: "Trip".into(),
        target: "5000".into(),
        date: "2025-12-01".into(),
    };

    let outcome = goals::add_goal(&h.ctx, &form).await;
    assert_eq!(outcome, Outcome::Done);
    let body = h.transport.body(0);
    assert_eq!(body["name"], "Trip");
    assert_eq!(body["target"], 5000.0);
    assert_eq!(body["saved"], 0.0);
    assert_eq!(body["date"], "2025-12-01");

    let list = goals::fetch_goals(&h.ctx).await;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Trip");
    assert_eq!(list[0].target, 5000.0);
    assert_eq!(list[0].date, NaiveDate::from_ymd_opt(2025, 12, 1));
    assert_eq!(list[0].progress(), 0);
}

#[tokio::test]
async fn incomplete_goal_form_is_not_sent() {
    let h = Harness::signed_in();
    let form = GoalForm {
        name: "Trip".into(),
        target: "5000".into(),
        date: String::new(),
    };

    assert_eq!(goals::add_goal(&h.ctx, &form).await, Outcome::Invalid);
    assert!(h.transport.requests().is_empty());
    assert_eq!(h.last_message().as_deref(), Some("Complete goal form"));
}

#[tokio::test]
async fn deposit_failure_keeps_server_message() {
    let h = Harness::signed_in();
    h.transport.reply(
        403,
        json!({ "status": "error", "message": "Unauthorized or wrong user for this goal" }),
    );
    let form = DepositForm {
        amount: "250".into(),
        date: "2025-06-10".into(),
        note: "  ".into(),
    };

    let outcome = goals::add_money(&h.ctx, 11, &form).await;

    assert_eq!(outcome, Outcome::Failed);
    let body = h.transport.body(0);
    assert_eq!(body["goal_id"], 11);
    assert!(body["note"].is_null());
    assert_eq!(
        h.last_message().as_deref(),
        Some("Unauthorized or wrong user for this goal")
    );
}

#[tokio::test]
async fn delete_posts_only_the_goal_id() {
    let h = Harness::signed_in();
    h.transport
        .reply(200, json!({ "status": "success", "message": "Goal deleted" }));

    assert_eq!(goals::delete_goal(&h.ctx, 4).await, Outcome::Done);
    assert_eq!(h.transport.body(0), json!({ "goal_id": 4 }));
    assert_eq!(h.last_message().as_deref(), Some("Goal deleted"));
}

#[tokio::test]
async fn update_failure_falls_back_to_generic_message() {
    let h = Harness::signed_in();
    h.transport.reply(500, json!({ "status": "error" }));
    let form = GoalForm {
        name: "Car".into(),
        target: "90000".into(),
        date: "2026-03-01".into(),
    };

    assert_eq!(goals::update_goal(&h.ctx, 2, &form).await, Outcome::Failed);
    assert_eq!(h.last_message().as_deref(), Some("Update failed"));
}

#[tokio::test]
async fn history_states_stay_inside_the_dialog() {
    let h = Harness::signed_in();
    h.transport
        .reply(200, json!({ "status": "success", "history": [] }))
        .reply(404, json!({ "status": "error", "message": "Goal not found" }))
        .fail("offline");

    assert_eq!(goals::load_history(&h.ctx, 9).await, HistoryView::Empty);
    assert_eq!(
        goals::load_history(&h.ctx, 9).await,
        HistoryView::Failed("Goal not found".into())
    );
    assert_eq!(
        goals::load_history(&h.ctx, 9).await,
        HistoryView::Failed("Server not reachable".into())
    );
    assert!(h.notices().is_empty());
    assert_eq!(
        h.transport.requests()[0].url,
        format!("{}/goal_money_history?user_id=7&goal_id=9", BASE)
    );
}

#[tokio::test]
async fn missing_budget_shows_empty_state_not_zero() {
    let h = Harness::signed_in();
    h.transport
        .reply(
            200,
            json!({
                "status": "success",
                "current": {
                    "month_year": "2025-06", "amount": 0, "spent": 1200.5,
                    "remaining": -1200.5, "remaining_days": 20, "note": ""
                },
                "previous": []
            }),
        )
        .reply(200, json!({ "status": "success", "current": null, "previous": [] }));

    for _ in 0..2 {
        match load_budget(&h.ctx).await {
            BudgetView::Loaded(report) => {
                assert!(report.active_current().is_none());
                assert!(report.previous.is_empty());
            }
            other => panic!("unexpected budget view: {:?}", other),
        }
    }
}

#[tokio::test]
async fn budget_load_failures_split_by_cause() {
    let h = Harness::signed_in();
    h.transport.fail("offline").reply(400, json!({ "status": "error" }));

    assert_eq!(
        load_budget(&h.ctx).await,
        BudgetView::Failed("Error loading budget")
    );
    assert_eq!(h.last_message().as_deref(), Some("Server not reachable"));

    assert_eq!(
        load_budget(&h.ctx).await,
        BudgetView::Failed("Failed to load budget")
    );
    assert_eq!(h.last_message().as_deref(), Some("Failed to fetch budget"));
}

#[tokio::test]
async fn signed_out_budget_panel_stops_loading() {
    let h = Harness::new();

    assert_eq!(load_budget(&h.ctx).await, BudgetView::Failed("Please login"));
    assert!(h.transport.requests().is_empty());
}

#[tokio::test]
async fn invalid_budget_amount_is_rejected() {
    let h = Harness::signed_in();

    assert_eq!(add_budget(&h.ctx, "-20").await, Outcome::Invalid);
    assert!(h.transport.requests().is_empty());
    assert_eq!(
        h.last_message().as_deref(),
        Some("Enter a valid budget amount")
    );
}

#[tokio::test]
async fn dashboard_requires_a_session() {
    let h = Harness::new();
    assert_eq!(
        load_dashboard(&h.ctx).await,
        Err(Redirect::now(PageId::Login))
    );
}

#[tokio::test]
async fn dashboard_totals_and_active_goals() {
    let h = Harness::signed_in();
    h.transport
        .reply(
            200,
            json!({
                "status": "success",
                "transactions": [
                    { "txn_id": 1, "user_id": 7, "category": "Salary", "amount": "50000.00", "type": "income", "date": "2025-06-01" },
                    { "txn_id": 2, "user_id": 7, "category": "Rent", "amount": 18000, "type": "expense", "date": "2025-06-02" },
                    { "txn_id": 3, "user_id": 7, "category": "Food", "amount": "2450.75", "type": "expense", "date": "2025-06-03" }
                ]
            }),
        )
        .reply(
            200,
            json!({
                "status": "success",
                "goals": [
                    { "goal_id": 1, "name": "Trip", "target": 5000, "saved": 100, "status": "in_progress" },
                    { "goal_id": 2, "name": "Bike", "target": 900, "saved": 900, "status": "Completed" },
                    { "goal_id": 3, "name": "Old", "target": 10, "saved": 1, "status": "CLOSED" }
                ]
            }),
        );

    let snapshot = load_dashboard(&h.ctx).await.expect("signed in");

    assert_eq!(snapshot.display_name, "Asha");
    assert_eq!(snapshot.totals.income, 50000.0);
    assert_eq!(snapshot.totals.expense, 20450.75);
    assert_eq!(snapshot.totals.saving, 29549.25);
    assert_eq!(snapshot.active_goals, 1);
}

#[tokio::test]
async fn dashboard_goal_failure_only_zeroes_the_count() {
    let h = Harness::signed_in();
    h.transport
        .reply(200, json!({ "status": "success", "transactions": [] }))
        .fail("offline");

    let snapshot = load_dashboard(&h.ctx).await.expect("signed in");

    assert_eq!(snapshot.active_goals, 0);
    assert!(h.notices().is_empty());
}

#[tokio::test]
async fn prediction_failure_uses_fallback() {
    let h = Harness::signed_in();
    h.transport.reply(400, json!({ "status": "error" }));

    assert_eq!(load_prediction(&h.ctx).await, None);
    assert_eq!(h.last_message().as_deref(), Some("Prediction fetch failed"));
}
