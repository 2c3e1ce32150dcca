pub mod auth;
pub mod budget;
pub mod dashboard;
pub mod goal_dialogs;
pub mod goals;
pub mod prediction;
pub mod transactions;

use chrono::{Local, NaiveDate, NaiveDateTime};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub use auth::{LoginPage, ResetPage, SignupPage};
pub use budget::BudgetPage;
pub use dashboard::DashboardPage;
pub use goals::GoalsPage;
pub use prediction::PredictionPage;
pub use transactions::TransactionsPage;

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub(crate) fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub(crate) fn bind_select(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        state.set(select.value());
    })
}

pub(crate) fn muted(text: &str) -> Html {
    html! { <p class="text-sm text-slate-400">{ text.to_string() }</p> }
}
