use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::budget::BudgetPanel;
use super::{bind_input, bind_select, muted, today};
use crate::components::layout::icon_plus;
use crate::components::{page_shell, BarChart, BarChartSpec, StatCard, StatIcon};
use crate::context::use_app_context;
use crate::dashboard::{load_dashboard, Snapshot};
use crate::models::{Prediction, TxnType};
use crate::predictions::load_forecast_quietly;
use crate::refresh::{use_refresh, RefreshAction};
use crate::transactions::{add_transaction, TxnForm, TxnInputSource};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let ctx = use_app_context();
    let generation = use_refresh().map_or(0, |r| r.dashboard);
    let snapshot = use_state(|| None::<Snapshot>);
    let forecast = use_state(|| None::<Prediction>);
    let quick_add_open = use_state(|| false);

    {
        let ctx = ctx.clone();
        let snapshot = snapshot.clone();
        let forecast = forecast.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match load_dashboard(&ctx).await {
                        Ok(next) => snapshot.set(Some(next)),
                        Err(redirect) => {
                            redirect.perform();
                            return;
                        }
                    }
                    forecast.set(load_forecast_quietly(&ctx).await);
                });
                || ()
            },
            generation,
        );
    }

    let toggle = {
        let quick_add_open = quick_add_open.clone();
        Callback::from(move |_: MouseEvent| quick_add_open.set(!*quick_add_open))
    };
    let on_saved = {
        let quick_add_open = quick_add_open.clone();
        Callback::from(move |_: ()| quick_add_open.set(false))
    };

    let actions = html! {
        <button class="flex items-center gap-2 rounded-lg bg-[#06b6d4] px-3 py-2 text-sm font-semibold text-black" onclick={toggle}>
            { icon_plus() }
            <span>{"Quick add"}</span>
        </button>
    };

    let cards = match &*snapshot {
        None => muted("Loading..."),
        Some(snap) => html! {
            <>
                <p id="userName" class="text-sm text-slate-500">{ format!("Welcome back, {}", snap.display_name) }</p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard id="totalIncome" title="Income" value={ctx.currency(snap.totals.income)} icon={StatIcon::Income} />
                    <StatCard id="totalExpense" title="Expense" value={ctx.currency(snap.totals.expense)} icon={StatIcon::Expense} />
                    <StatCard id="totalSaving" title="Saving" value={ctx.currency(snap.totals.saving)} icon={StatIcon::Saving} />
                    <StatCard id="activeGoals" title="Active goals" value={snap.active_goals.to_string()} icon={StatIcon::Goals} />
                </div>
            </>
        },
    };

    let chart = match &*forecast {
        Some(prediction) => html! { <BarChart spec={BarChartSpec::forecast(prediction, "No Data")} /> },
        None => muted("No Data"),
    };

    page_shell(
        "Dashboard",
        actions,
        html! {
            <>
                if *quick_add_open {
                    <QuickAdd {on_saved} />
                }
                { cards }
                <div class="grid gap-4 lg:grid-cols-2">
                    <div class="bg-[#0f1724] rounded-[10px] p-4">
                        <h4 class="mb-2 text-xs font-bold uppercase tracking-widest text-slate-400">{"Expenses"}</h4>
                        { chart }
                    </div>
                    <BudgetPanel />
                </div>
            </>
        },
    )
}

#[derive(Properties, PartialEq)]
struct QuickAddProps {
    on_saved: Callback<()>,
}

#[function_component(QuickAdd)]
fn quick_add(props: &QuickAddProps) -> Html {
    let ctx = use_app_context();
    let refresh = use_refresh();
    let category = use_state(String::new);
    let amount = use_state(String::new);
    let kind = use_state(|| TxnType::Expense.as_str().to_string());

    let onsubmit = {
        let (category, amount, kind) = (category.clone(), amount.clone(), kind.clone());
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ctx = ctx.clone();
            let refresh = refresh.clone();
            let on_saved = on_saved.clone();
            let source = TxnInputSource::Quick(TxnForm {
                category: (*category).clone(),
                amount: (*amount).clone(),
                kind: TxnType::parse(&kind),
            });
            spawn_local(async move {
                if add_transaction(&ctx, &source, today()).await.follow().is_done() {
                    if let Some(refresh) = refresh {
                        refresh.dispatch(RefreshAction::AfterTransaction);
                    }
                    on_saved.emit(());
                }
            });
        })
    };

    html! {
        <form id="quickAdd" class="flex flex-wrap gap-2 rounded-[10px] border border-border p-3" {onsubmit}>
            <input id="qaCategory" class="rounded-lg border border-border px-3 py-2 text-sm" placeholder="Category" value={(*category).clone()} oninput={bind_input(&category)} />
            <input id="qaAmount" type="number" class="rounded-lg border border-border px-3 py-2 text-sm" placeholder="Amount" value={(*amount).clone()} oninput={bind_input(&amount)} />
            <select id="qaType" class="rounded-lg border border-border px-3 py-2 text-sm" onchange={bind_select(&kind)}>
                <option value="expense" selected={*kind == "expense"}>{"Expense"}</option>
                <option value="income" selected={*kind == "income"}>{"Income"}</option>
            </select>
            <button type="submit" class="rounded-lg bg-[#06b6d4] px-4 py-2 text-sm font-semibold text-black">{"Save"}</button>
        </form>
    }
}
