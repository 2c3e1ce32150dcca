//! The four per-goal dialogs. Each validates locally, makes one call, and on
//! success closes and refreshes goals and dashboard. Failures keep it open.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{bind_input, muted, today};
use crate::components::Modal;
use crate::context::{use_app_context, Outcome};
use crate::format::format_date;
use crate::goals::{self, DepositForm, GoalForm, HistoryView};
use crate::models::{Goal, GoalId};
use crate::refresh::{use_refresh, RefreshAction};

#[derive(Clone, Debug, PartialEq)]
pub enum GoalDialog {
    AddMoney { goal_id: GoalId, name: String },
    History { goal_id: GoalId },
    Edit(Goal),
    Delete { goal_id: GoalId },
}

#[derive(Properties, PartialEq)]
pub struct GoalDialogHostProps {
    pub dialog: GoalDialog,
    pub on_close: Callback<()>,
}

#[function_component(GoalDialogHost)]
pub fn goal_dialog_host(props: &GoalDialogHostProps) -> Html {
    let refresh = use_refresh();
    let on_done = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if let Some(refresh) = &refresh {
                refresh.dispatch(RefreshAction::AfterGoalChange);
            }
            on_close.emit(());
        })
    };
    let on_close = props.on_close.clone();

    match &props.dialog {
        GoalDialog::AddMoney { goal_id, name } => html! {
            <AddMoneyDialog goal_id={*goal_id} name={name.clone()} {on_close} {on_done} />
        },
        GoalDialog::History { goal_id } => html! {
            <HistoryDialog goal_id={*goal_id} {on_close} />
        },
        GoalDialog::Edit(goal) => html! {
            <EditGoalDialog goal={goal.clone()} {on_close} {on_done} />
        },
        GoalDialog::Delete { goal_id } => html! {
            <DeleteGoalDialog goal_id={*goal_id} {on_close} {on_done} />
        },
    }
}

const INPUT: &str = "w-full rounded-lg border border-white/10 bg-white/5 px-3 py-2 text-sm";
const PRIMARY: &str = "rounded-lg bg-[#06b6d4] px-3 py-2 text-sm font-semibold text-black";

fn finish(outcome: Outcome, on_done: &Callback<()>) {
    if outcome.follow().is_done() {
        on_done.emit(());
    }
}

#[derive(Properties, PartialEq)]
struct AddMoneyProps {
    goal_id: GoalId,
    name: String,
    on_close: Callback<()>,
    on_done: Callback<()>,
}

#[function_component(AddMoneyDialog)]
fn add_money_dialog(props: &AddMoneyProps) -> Html {
    let ctx = use_app_context();
    let amount = use_state(String::new);
    let date = use_state(|| format_date(&today()));
    let note = use_state(String::new);

    let onsubmit = {
        let (amount, date, note) = (amount.clone(), date.clone(), note.clone());
        let goal_id = props.goal_id;
        let on_done = props.on_done.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ctx = ctx.clone();
            let on_done = on_done.clone();
            let form = DepositForm {
                amount: (*amount).clone(),
                date: (*date).clone(),
                note: (*note).clone(),
            };
            spawn_local(async move {
                finish(goals::add_money(&ctx, goal_id, &form).await, &on_done);
            });
        })
    };

    html! {
        <Modal title={format!("Add money to {}", props.name)} on_close={props.on_close.clone()}>
            <form class="space-y-2" {onsubmit}>
                <input id="gmAmount" type="number" class={INPUT} placeholder="Amount" value={(*amount).clone()} oninput={bind_input(&amount)} />
                <input id="gmDate" type="date" class={INPUT} value={(*date).clone()} oninput={bind_input(&date)} />
                <input id="gmNote" class={INPUT} placeholder="Note (optional)" value={(*note).clone()} oninput={bind_input(&note)} />
                <button type="submit" class={PRIMARY}>{"Add"}</button>
            </form>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct HistoryProps {
    goal_id: GoalId,
    on_close: Callback<()>,
}

#[function_component(HistoryDialog)]
fn history_dialog(props: &HistoryProps) -> Html {
    let ctx = use_app_context();
    let view = use_state(|| HistoryView::Loading);

    {
        let ctx = ctx.clone();
        let view = view.clone();
        use_effect_with_deps(
            move |goal_id: &GoalId| {
                let goal_id = *goal_id;
                spawn_local(async move {
                    view.set(goals::load_history(&ctx, goal_id).await);
                });
                || ()
            },
            props.goal_id,
        );
    }

    let body = match &*view {
        HistoryView::Loading => muted("Loading history..."),
        HistoryView::Empty => muted("No savings yet"),
        HistoryView::Failed(message) => html! { <p class="text-sm text-[#ff7b7b]">{ message.clone() }</p> },
        HistoryView::Entries(entries) => html! {
            <ul class="max-h-80 space-y-2 overflow-y-auto text-sm">
                { for entries.iter().map(|entry| html! {
                    <li class="flex justify-between gap-3 border-b border-white/5 pb-1">
                        <div>
                            <strong>{ ctx.currency(entry.amount) }</strong>
                            if let Some(note) = &entry.note {
                                <div class="text-xs text-slate-400">{ note.clone() }</div>
                            }
                        </div>
                        <span class="text-xs text-slate-400">{ format_date(&entry.recorded_on()) }</span>
                    </li>
                }) }
            </ul>
        },
    };

    html! {
        <Modal title="Savings history" on_close={props.on_close.clone()}>
            { body }
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct EditGoalProps {
    goal: Goal,
    on_close: Callback<()>,
    on_done: Callback<()>,
}

#[function_component(EditGoalDialog)]
fn edit_goal_dialog(props: &EditGoalProps) -> Html {
    let ctx = use_app_context();
    let initial = GoalForm::from_goal(&props.goal, today());
    let name = use_state(|| initial.name.clone());
    let target = use_state(|| initial.target.clone());
    let date = use_state(|| initial.date.clone());

    let onsubmit = {
        let (name, target, date) = (name.clone(), target.clone(), date.clone());
        let goal_id = props.goal.goal_id;
        let on_done = props.on_done.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ctx = ctx.clone();
            let on_done = on_done.clone();
            let form = GoalForm {
                name: (*name).clone(),
                target: (*target).clone(),
                date: (*date).clone(),
            };
            spawn_local(async move {
                finish(goals::update_goal(&ctx, goal_id, &form).await, &on_done);
            });
        })
    };

    html! {
        <Modal title="Edit goal" on_close={props.on_close.clone()}>
            <form class="space-y-2" {onsubmit}>
                <input id="egName" class={INPUT} placeholder="Goal name" value={(*name).clone()} oninput={bind_input(&name)} />
                <input id="egTarget" type="number" class={INPUT} placeholder="Target" value={(*target).clone()} oninput={bind_input(&target)} />
                <input id="egDate" type="date" class={INPUT} value={(*date).clone()} oninput={bind_input(&date)} />
                <button type="submit" class={PRIMARY}>{"Save"}</button>
            </form>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct DeleteGoalProps {
    goal_id: GoalId,
    on_close: Callback<()>,
    on_done: Callback<()>,
}

#[function_component(DeleteGoalDialog)]
fn delete_goal_dialog(props: &DeleteGoalProps) -> Html {
    let ctx = use_app_context();

    let onclick = {
        let goal_id = props.goal_id;
        let on_done = props.on_done.clone();
        Callback::from(move |_: MouseEvent| {
            let ctx = ctx.clone();
            let on_done = on_done.clone();
            spawn_local(async move {
                finish(goals::delete_goal(&ctx, goal_id).await, &on_done);
            });
        })
    };

    html! {
        <Modal title="Delete goal" width={360} on_close={props.on_close.clone()}>
            <p class="text-sm">{"Delete this goal and its savings history? This cannot be undone."}</p>
            <button class="mt-3 rounded-lg bg-[#ff7b7b] px-3 py-2 text-sm font-semibold text-black" {onclick}>{"Delete"}</button>
        </Modal>
    }
}
