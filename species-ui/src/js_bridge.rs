//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js bar chart lives in `assets/js/bar-chart.js`. It is evaluated as a
//! global script (no ES modules) once D3 has loaded and exposed as
//! `window.renderBarChart`. Data and config cross the boundary as JSON strings.

use anyhow::anyhow;
use species_core::ChartPayload;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Species JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// Safe to call more than once; the script is only evaluated the first time.
pub fn init_charts() {
    call_js(&format!(
        "if (!window.__speciesChartsReady && !window.__speciesChartScript) {{ window.__speciesChartScript = {}; }}",
        js_string(BAR_CHART_JS)
    ));

    let init_js = r#"
        (function() {
            if (window.__speciesChartsReady || window.__speciesChartsPolling) return;
            window.__speciesChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Indirect eval keeps the function declarations global
                    (0, eval)(window.__speciesChartScript);
                    delete window.__speciesChartScript;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof clearBarChart !== 'undefined') window.clearBarChart = clearBarChart;
                    window.__speciesChartsReady = true;
                    console.log('Species charts initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Render the speed bar chart into `container_id`, replacing whatever is there.
///
/// Polls until D3, the chart script and the container element all exist.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__speciesChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[Species] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Serialize `payload` and render it, or clear the container when it has no bars.
pub fn draw_speed_chart(container_id: &str, payload: &ChartPayload) {
    if payload.is_empty() {
        destroy_chart(container_id);
        return;
    }
    match (payload.data_json(), payload.config_json()) {
        (Ok(data), Ok(config)) => render_bar_chart(container_id, &data, &config),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("Failed to serialize chart payload: {}", e);
            destroy_chart(container_id);
        }
    }
}

/// Empty the chart container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}

/// Fetch a text resource relative to the page.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {} failed: {:?}", url, e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| anyhow!("fetch {} returned a non-Response: {:?}", url, e))?;

    if !response.ok() {
        return Err(anyhow!("fetch {} returned HTTP {}", url, response.status()));
    }

    let body = response
        .text()
        .map_err(|e| anyhow!("reading body of {} failed: {:?}", url, e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("reading body of {} failed: {:?}", url, e))?;
    text.as_string()
        .ok_or_else(|| anyhow!("body of {} is not text", url))
}
