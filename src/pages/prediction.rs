use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::muted;
use crate::components::{page_shell, BarChart, BarChartSpec};
use crate::context::use_app_context;
use crate::models::Prediction;
use crate::predictions::load_prediction;

#[derive(Clone, PartialEq)]
enum PredictionState {
    Loading,
    Ready(Prediction),
    Unavailable,
}

#[function_component(PredictionPage)]
pub fn prediction_page() -> Html {
    let ctx = use_app_context();
    let state = use_state(|| PredictionState::Loading);

    {
        let ctx = ctx.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    state.set(match load_prediction(&ctx).await {
                        Some(prediction) => PredictionState::Ready(prediction),
                        None => PredictionState::Unavailable,
                    });
                });
                || ()
            },
            (),
        );
    }

    let body = match &*state {
        PredictionState::Loading => muted("Loading..."),
        PredictionState::Unavailable => muted("No prediction available"),
        PredictionState::Ready(prediction) => html! {
            <div class="space-y-4">
                <div class="bg-card p-6 rounded-[10px] border border-border">
                    <p class="text-muted-foreground text-[10px] font-bold tracking-widest uppercase">{"Next month (predicted)"}</p>
                    <h3 id="nextPred" class="text-2xl font-bold text-[#1D617A]">{ ctx.currency(prediction.next_pred) }</h3>
                </div>
                <div class="bg-[#0f1724] rounded-[10px] p-4">
                    <BarChart spec={BarChartSpec::forecast(prediction, "Next Month")} />
                </div>
            </div>
        },
    };

    page_shell("Prediction", Html::default(), body)
}
