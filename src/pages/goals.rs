use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::goal_dialogs::{GoalDialog, GoalDialogHost};
use super::{bind_input, muted, now};
use crate::components::page_shell;
use crate::context::{use_app_context, AppContext};
use crate::goals::{self, remaining_days, GoalForm, GoalSummary};
use crate::models::Goal;
use crate::refresh::{use_refresh, RefreshAction};

#[function_component(GoalsPage)]
pub fn goals_page() -> Html {
    let ctx = use_app_context();
    let refresh = use_refresh();
    let name = use_state(String::new);
    let target = use_state(String::new);
    let date = use_state(String::new);

    let onsubmit = {
        let (name, target, date) = (name.clone(), target.clone(), date.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ctx = ctx.clone();
            let refresh = refresh.clone();
            let form = GoalForm {
                name: (*name).clone(),
                target: (*target).clone(),
                date: (*date).clone(),
            };
            let (name, target, date) = (name.clone(), target.clone(), date.clone());
            spawn_local(async move {
                if goals::add_goal(&ctx, &form).await.follow().is_done() {
                    name.set(String::new());
                    target.set(String::new());
                    date.set(String::new());
                    if let Some(refresh) = refresh {
                        refresh.dispatch(RefreshAction::AfterGoalChange);
                    }
                }
            });
        })
    };

    page_shell(
        "Goals",
        Html::default(),
        html! {
            <>
                <form class="flex flex-wrap gap-2" {onsubmit}>
                    <input id="goalName" class="rounded-lg border border-border px-3 py-2 text-sm" placeholder="Goal name" value={(*name).clone()} oninput={bind_input(&name)} />
                    <input id="goalTarget" type="number" class="rounded-lg border border-border px-3 py-2 text-sm" placeholder="Target amount" value={(*target).clone()} oninput={bind_input(&target)} />
                    <input id="goalDate" type="date" class="rounded-lg border border-border px-3 py-2 text-sm" value={(*date).clone()} oninput={bind_input(&date)} />
                    <button type="submit" class="rounded-lg bg-[#06b6d4] px-4 py-2 text-sm font-semibold text-black">{"Add goal"}</button>
                </form>
                <GoalList />
            </>
        },
    )
}

#[function_component(GoalList)]
fn goal_list() -> Html {
    let ctx = use_app_context();
    let generation = use_refresh().map_or(0, |r| r.goals);
    let loaded = use_state(|| None::<Vec<Goal>>);
    let dialog = use_state(|| None::<GoalDialog>);

    {
        let ctx = ctx.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let list = goals::fetch_goals(&ctx).await;
                    for goal in list.iter().filter(|g| g.completion_disputed()) {
                        log::warn!(
                            "goal {} status {:?} disagrees with saved {} / target {}",
                            goal.goal_id,
                            goal.status,
                            goal.saved,
                            goal.target
                        );
                    }
                    loaded.set(Some(list));
                });
                || ()
            },
            generation,
        );
    }

    let open = {
        let dialog = dialog.clone();
        Callback::from(move |next: GoalDialog| dialog.set(Some(next)))
    };
    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(None))
    };

    let list = match &*loaded {
        None => return html! { <div id="goalList">{ muted("Loading...") }</div> },
        Some(list) => list,
    };
    let summary = GoalSummary::of(list);

    html! {
        <>
            <div id="goalSummary" class="flex gap-6 text-sm">
                <span>{ format!("Total: {}", summary.total) }</span>
                <span>{ format!("In progress: {}", summary.in_progress) }</span>
                <span>{ format!("Completed: {}", summary.completed) }</span>
            </div>
            <div id="goalList" class="grid gap-4 md:grid-cols-2">
                if list.is_empty() {
                    { muted("No goals yet") }
                } else {
                    { for list.iter().map(|goal| goal_card(&ctx, goal, &open)) }
                }
            </div>
            if let Some(current) = &*dialog {
                <GoalDialogHost dialog={current.clone()} {on_close} />
            }
        </>
    }
}

fn goal_card(ctx: &AppContext, goal: &Goal, open: &Callback<GoalDialog>) -> Html {
    let progress = goal.progress();
    let days = remaining_days(goal.date, now());
    let deadline = match goal.date {
        None => "No date".to_string(),
        Some(_) if days < 0 => "Past due".to_string(),
        Some(_) => format!("{} days left", days),
    };
    let action = |label: &'static str, dialog: GoalDialog| {
        let open = open.clone();
        html! {
            <button
                class="rounded-lg border border-white/10 px-2 py-1 text-xs hover:bg-white/10"
                onclick={Callback::from(move |_: MouseEvent| open.emit(dialog.clone()))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="bg-[#0f1724] text-white rounded-[10px] p-4 space-y-2">
            <div class="flex items-center justify-between">
                <strong>{ goal.name.clone() }</strong>
                <span class="text-xs uppercase text-slate-400">{ goal.status_label().to_string() }</span>
            </div>
            <div class="text-sm">{ format!("{} / {}", ctx.currency(goal.saved), ctx.currency(goal.target)) }</div>
            <div class="h-2 w-full rounded bg-white/10">
                <div class="h-2 rounded bg-[#06b6d4]" style={format!("width:{}%", progress)}></div>
            </div>
            <div class="flex justify-between text-xs text-slate-400">
                <span>{ format!("{}%", progress) }</span>
                <span>{ deadline }</span>
            </div>
            if goal.completion_disputed() {
                <div class="text-xs text-[#facc15]">{"Server status and saved amount disagree"}</div>
            }
            <div class="flex flex-wrap gap-2 pt-1">
                { action("Add money", GoalDialog::AddMoney { goal_id: goal.goal_id, name: goal.name.clone() }) }
                { action("History", GoalDialog::History { goal_id: goal.goal_id }) }
                { action("Edit", GoalDialog::Edit(goal.clone())) }
                { action("Delete", GoalDialog::Delete { goal_id: goal.goal_id }) }
            </div>
        </div>
    }
}
