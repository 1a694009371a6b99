use std::cell::RefCell;
use std::collections::HashMap;

use gloo_utils::document;
use log::debug;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    /// Chart.js, loaded by the page as a global
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartHandle;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<ChartHandle, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &ChartHandle);
}

thread_local! {
    /// Charts by canvas id, so a redraw replaces the old instance
    static CHARTS: RefCell<HashMap<String, ChartHandle>> = RefCell::new(HashMap::new());
}

const DEFAULT_COLOR: &str = "#6366f1";

/// Single-series line chart in Chart.js terms
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartConfig {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub label: String,
    pub color: String,
    /// Upper bound of the y axis; scores and progress are percentages
    pub y_max: Option<f64>,
}

impl LineChartConfig {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            values,
            label: "Score".to_string(),
            color: DEFAULT_COLOR.to_string(),
            y_max: Some(100.0),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn y_max(mut self, y_max: Option<f64>) -> Self {
        self.y_max = y_max;
        self
    }

    /// Fill colour: the line colour at 10% opacity
    fn fill_color(&self) -> String {
        let hex = self.color.trim_start_matches('#');
        let channel = |i: usize| hex.get(i..i + 2).and_then(|c| u8::from_str_radix(c, 16).ok());
        match (hex.len(), channel(0), channel(2), channel(4)) {
            (6, Some(r), Some(g), Some(b)) => format!("rgba({}, {}, {}, 0.1)", r, g, b),
            _ => self.color.clone(),
        }
    }

    pub fn to_config(&self) -> Value {
        let mut y_axis = json!({
            "beginAtZero": true,
            "grid": {"color": "rgba(0, 0, 0, 0.05)"}
        });
        if let Some(max) = self.y_max {
            y_axis["max"] = json!(max);
        }

        json!({
            "type": "line",
            "data": {
                "labels": self.labels,
                "datasets": [{
                    "label": self.label,
                    "data": self.values,
                    "borderColor": self.color,
                    "backgroundColor": self.fill_color(),
                    "fill": true,
                    "tension": 0.4,
                    "pointBackgroundColor": self.color,
                    "pointRadius": 4
                }]
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": {"legend": {"display": false}},
                "scales": {
                    "y": y_axis,
                    "x": {"grid": {"display": false}}
                }
            }
        })
    }
}

/// Draws the chart on `<canvas id=canvas_id>`, replacing an earlier one.
pub fn render_line_chart(canvas_id: &str, config: &LineChartConfig) -> Result<(), JsValue> {
    let canvas = document()
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas '{}' not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element '{}' is not a canvas", canvas_id)))?;

    let js_config = js_sys::JSON::parse(&config.to_config().to_string())?;
    let chart = ChartHandle::new(&canvas, &js_config)?;
    debug!("Rendered line chart on #{} with {} points", canvas_id, config.values.len());

    CHARTS.with(|charts| {
        if let Some(previous) = charts.borrow_mut().insert(canvas_id.to_string(), chart) {
            previous.destroy();
        }
    });
    Ok(())
}
