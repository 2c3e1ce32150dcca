use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::models::Prediction;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChartSpec {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl BarChartSpec {
    /// Actual vs predicted spend; `empty_label` stands in when there are no months yet.
    pub fn forecast(prediction: &Prediction, empty_label: &str) -> Self {
        let labels = if prediction.labels.is_empty() {
            vec![empty_label.to_string()]
        } else {
            prediction.labels.clone()
        };
        Self {
            labels,
            series: vec![
                Series {
                    label: "Actual",
                    data: prediction.actual.clone(),
                    color: "rgba(255,110,110,0.6)",
                },
                Series {
                    label: "Predicted",
                    data: prediction.predicted.clone(),
                    color: "rgba(0,198,255,0.6)",
                },
            ],
        }
    }

    pub fn config(&self) -> serde_json::Value {
        let datasets: Vec<serde_json::Value> = self
            .series
            .iter()
            .map(|s| json!({ "label": s.label, "data": s.data, "backgroundColor": s.color }))
            .collect();
        json!({
            "type": "bar",
            "data": { "labels": self.labels, "datasets": datasets },
            "options": {
                "responsive": true,
                "plugins": { "legend": { "labels": { "color": "#fff" } } },
                "scales": {
                    "x": { "ticks": { "color": "#A8B3CF" } },
                    "y": { "ticks": { "color": "#A8B3CF" } }
                }
            }
        })
    }
}

struct ChartInstance(JsValue);

impl Drop for ChartInstance {
    fn drop(&mut self) {
        if let Ok(destroy) = Reflect::get(&self.0, &JsValue::from_str("destroy")) {
            if let Some(destroy) = destroy.dyn_ref::<Function>() {
                let _ = destroy.call0(&self.0);
            }
        }
    }
}

fn chart_constructor() -> Option<Function> {
    let window = web_sys::window()?;
    let ctor = Reflect::get(&window, &JsValue::from_str("Chart")).ok()?;
    ctor.dyn_into::<Function>().ok()
}

fn draw(canvas: &HtmlCanvasElement, spec: &BarChartSpec) -> Option<ChartInstance> {
    let Some(ctor) = chart_constructor() else {
        log::debug!("Chart.js not loaded, skipping chart");
        return None;
    };
    let config = match serde_json::to_string(&spec.config()) {
        Ok(raw) => js_sys::JSON::parse(&raw).ok()?,
        Err(err) => {
            log::error!("chart config not serialisable: {}", err);
            return None;
        }
    };
    match Reflect::construct(&ctor, &Array::of2(canvas, &config)) {
        Ok(instance) => Some(ChartInstance(instance)),
        Err(err) => {
            log::error!("Chart.js refused the chart: {:?}", err);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub spec: BarChartSpec,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let canvas = use_node_ref();

    {
        let canvas = canvas.clone();
        use_effect_with_deps(
            move |spec: &BarChartSpec| {
                let instance = canvas
                    .cast::<HtmlCanvasElement>()
                    .and_then(|el| draw(&el, spec));
                move || drop(instance)
            },
            props.spec.clone(),
        );
    }

    html! { <canvas ref={canvas} class={props.class.clone()}></canvas> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(labels: Vec<&str>) -> Prediction {
        Prediction {
            labels: labels.into_iter().map(String::from).collect(),
            actual: vec![1200.0, 1500.0],
            predicted: vec![1500.0, 1417.0],
            next_pred: 1417.0,
        }
    }

    #[test]
    fn empty_labels_get_placeholder() {
        let spec = BarChartSpec::forecast(&prediction(vec![]), "Next Month");
        assert_eq!(spec.labels, vec!["Next Month".to_string()]);
    }

    #[test]
    fn config_has_actual_and_predicted_datasets() {
        let spec = BarChartSpec::forecast(&prediction(vec!["2025-05", "2025-06"]), "No Data");
        let config = spec.config();
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"][1], "2025-06");
        assert_eq!(config["data"]["datasets"][0]["label"], "Actual");
        assert_eq!(config["data"]["datasets"][1]["data"][1], 1417.0);
    }
}
