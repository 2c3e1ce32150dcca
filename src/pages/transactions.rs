use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{bind_input, bind_select, muted, today};
use crate::components::page_shell;
use crate::context::{use_app_context, AppContext};
use crate::format::format_date;
use crate::models::{Transaction, TxnType};
use crate::refresh::{use_refresh, RefreshAction};
use crate::transactions::{add_transaction, fetch_transactions, recent_first, TxnForm, TxnInputSource};

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let ctx = use_app_context();
    let refresh = use_refresh();
    let category = use_state(String::new);
    let amount = use_state(String::new);
    let kind = use_state(|| TxnType::Expense.as_str().to_string());

    let onsubmit = {
        let (category, amount, kind) = (category.clone(), amount.clone(), kind.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ctx = ctx.clone();
            let refresh = refresh.clone();
            let source = TxnInputSource::Full(TxnForm {
                category: (*category).clone(),
                amount: (*amount).clone(),
                kind: TxnType::parse(&kind),
            });
            let (category, amount) = (category.clone(), amount.clone());
            spawn_local(async move {
                let outcome = add_transaction(&ctx, &source, today()).await.follow();
                if outcome.is_done() {
                    category.set(String::new());
                    amount.set(String::new());
                    if let Some(refresh) = refresh {
                        refresh.dispatch(RefreshAction::AfterTransaction);
                    }
                }
            });
        })
    };

    page_shell(
        "Transactions",
        Html::default(),
        html! {
            <>
                <form class="flex flex-wrap gap-2" {onsubmit}>
                    <input id="txnCategory" class="rounded-lg border border-border px-3 py-2 text-sm" placeholder="Category" value={(*category).clone()} oninput={bind_input(&category)} />
                    <input id="txnAmount" type="number" class="rounded-lg border border-border px-3 py-2 text-sm" placeholder="Amount" value={(*amount).clone()} oninput={bind_input(&amount)} />
                    <select id="txnType" class="rounded-lg border border-border px-3 py-2 text-sm" onchange={bind_select(&kind)}>
                        <option value="expense" selected={*kind == "expense"}>{"Expense"}</option>
                        <option value="income" selected={*kind == "income"}>{"Income"}</option>
                    </select>
                    <button type="submit" class="rounded-lg bg-[#06b6d4] px-4 py-2 text-sm font-semibold text-black">{"Add"}</button>
                </form>
                <TransactionList />
            </>
        },
    )
}

#[function_component(TransactionList)]
fn transaction_list() -> Html {
    let ctx = use_app_context();
    let generation = use_refresh().map_or(0, |r| r.transactions);
    let txns = use_state(|| None::<Vec<Transaction>>);

    {
        let ctx = ctx.clone();
        let txns = txns.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    txns.set(Some(fetch_transactions(&ctx).await));
                });
                || ()
            },
            generation,
        );
    }

    html! {
        <div id="txnList" class="bg-[#0f1724] text-white rounded-[10px] p-4">
            {
                match &*txns {
                    None => muted("Loading..."),
                    Some(list) if list.is_empty() => muted("No transactions yet"),
                    Some(list) => html! {
                        <ul class="divide-y divide-white/5">
                            { for recent_first(list, ctx.config.recent_txn_limit).into_iter().map(|t| txn_row(&ctx, t)) }
                        </ul>
                    },
                }
            }
        </div>
    }
}

fn txn_row(ctx: &AppContext, txn: &Transaction) -> Html {
    let (color, sign) = match txn.kind {
        TxnType::Income => ("text-green-400", "+"),
        TxnType::Expense => ("text-[#ff7b7b]", "-"),
    };
    html! {
        <li class="flex items-center justify-between py-2 text-sm">
            <div>
                <div class="font-medium">{ txn.category.clone() }</div>
                <div class="text-xs text-slate-400">{ format_date(&txn.date) }</div>
            </div>
            <span class={classes!("font-semibold", color)}>{ format!("{}{}", sign, ctx.currency(txn.amount)) }</span>
        </li>
    }
}
