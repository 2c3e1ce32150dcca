use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{bind_input, muted};
use crate::budget::{self, BudgetTone, BudgetView};
use crate::components::page_shell;
use crate::context::{use_app_context, AppContext};
use crate::models::{BudgetReport, CurrentBudget, PreviousBudget};
use crate::refresh::{use_refresh, RefreshAction};

#[function_component(BudgetPage)]
pub fn budget_page() -> Html {
    let ctx = use_app_context();
    let refresh = use_refresh();
    let amount = use_state(String::new);

    let onsubmit = {
        let amount = amount.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ctx = ctx.clone();
            let amount = amount.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let outcome = budget::add_budget(&ctx, &amount).await.follow();
                if outcome.is_done() {
                    amount.set(String::new());
                    if let Some(refresh) = refresh {
                        refresh.dispatch(RefreshAction::Budget);
                    }
                }
            });
        })
    };

    page_shell(
        "Budget",
        Html::default(),
        html! {
            <>
                <form class="flex flex-wrap gap-2" {onsubmit}>
                    <input
                        id="budgetAmount"
                        type="number"
                        class="rounded-lg border border-border px-3 py-2 text-sm"
                        placeholder="Monthly budget"
                        value={(*amount).clone()}
                        oninput={bind_input(&amount)}
                    />
                    <button type="submit" class="rounded-lg bg-[#06b6d4] px-4 py-2 text-sm font-semibold text-black">{"Save budget"}</button>
                </form>
                <BudgetPanel />
            </>
        },
    )
}

#[function_component(BudgetPanel)]
pub fn budget_panel() -> Html {
    let ctx = use_app_context();
    let generation = use_refresh().map_or(0, |r| r.budget);
    let view = use_state(|| BudgetView::Loading);

    {
        let ctx = ctx.clone();
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    view.set(budget::load_budget(&ctx).await);
                });
                || ()
            },
            generation,
        );
    }

    html! {
        <div id="budgetSummary" class="bg-[#0f1724] text-white rounded-[10px] p-4 space-y-3">
            {
                match &*view {
                    BudgetView::Loading => muted("Loading..."),
                    BudgetView::Failed(message) => html! { <p class="text-sm text-[#ff7b7b]">{ *message }</p> },
                    BudgetView::Loaded(report) => render_report(&ctx, report),
                }
            }
        </div>
    }
}

fn render_report(ctx: &AppContext, report: &BudgetReport) -> Html {
    html! {
        <>
            {
                match report.active_current() {
                    Some(current) => render_current(ctx, current),
                    None => muted("No budget set for this month"),
                }
            }
            <div>
                <h4 class="mb-1 text-xs font-bold uppercase tracking-widest text-slate-400">{"Previous months"}</h4>
                {
                    if report.previous.is_empty() {
                        muted("No previous budget records found")
                    } else {
                        html! {
                            <ul class="space-y-1 text-sm">
                                { for report.previous.iter().map(|p| render_previous(ctx, p)) }
                            </ul>
                        }
                    }
                }
            </div>
        </>
    }
}

fn render_current(ctx: &AppContext, current: &CurrentBudget) -> Html {
    let tone = BudgetTone::of(current);
    html! {
        <div class="space-y-1">
            <div class="flex justify-between">
                <strong>{ format!("Budget: {}", ctx.currency(current.amount)) }</strong>
                <span class="text-xs text-slate-400">{ current.month_year.clone() }</span>
            </div>
            <div style={format!("color:{}", tone.color())} class="text-lg font-bold">
                { format!("Remaining: {}", ctx.currency(current.remaining)) }
            </div>
            <div class="text-xs text-slate-400">{ format!("{} days left", current.remaining_days) }</div>
            if !current.note.is_empty() {
                <div class="text-xs">{ current.note.clone() }</div>
            }
            <div class="text-xs text-slate-400">{ format!("Spent: {}", ctx.currency(current.spent)) }</div>
        </div>
    }
}

fn render_previous(ctx: &AppContext, previous: &PreviousBudget) -> Html {
    html! {
        <li class="flex justify-between">
            <span>{ previous.month_year.clone() }</span>
            <span>{ format!("{} / {}", ctx.currency(previous.spent), ctx.currency(previous.amount)) }</span>
        </li>
    }
}
