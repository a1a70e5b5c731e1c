//! Typed wrappers around Plotly.js interop via `js_sys::eval()`.
//!
//! Plotly.js itself is loaded from a `<script>` tag in the app's
//! `index.html`. The helper functions in `assets/js/plotly-charts.js` are
//! evaluated once Plotly is available and exposed via `window.*`.

use gpp_charts::ChartSpec;

static PLOTLY_CHARTS_JS: &str = include_str!("../assets/js/plotly-charts.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GPP JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart helpers with a wait-for-Plotly polling loop.
///
/// The helper script is stored on `window` and evaluated at global scope
/// (indirect eval) once `Plotly` is defined, so its function declarations
/// become globals rather than locals of the interval callback.
pub fn init_charts() {
    let store_js = format!(
        "window.__gppChartScripts = {};",
        serde_json::to_string(PLOTLY_CHARTS_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__gppChartsReady || window.__gppChartsPending) { return; }
            window.__gppChartsPending = true;
            var waitForPlotly = setInterval(function() {
                if (typeof Plotly !== 'undefined') {
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__gppChartScripts);
                    delete window.__gppChartScripts;
                    if (typeof renderFigure !== 'undefined') window.renderFigure = renderFigure;
                    if (typeof resizeFigure !== 'undefined') window.resizeFigure = resizeFigure;
                    window.__gppChartsReady = true;
                    console.log('GPP charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<function>(container_id, ...args)` once the helpers are
/// ready and the container exists in the DOM.
fn call_when_ready(function: &str, container_id: &str, args: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gppChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}'{args});
                    }} catch(e) {{ console.error('[GPP] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a chart specification into the container with the given DOM id.
///
/// Rendering into a container that already holds a chart replaces it.
pub fn render_chart(container_id: &str, spec: &ChartSpec) {
    let figure_json = match spec.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize {:?} chart: {}", spec.kind, e);
            return;
        }
    };
    // Pass the figure as a JS string literal; JSON string escaping is valid JS.
    let figure_literal = serde_json::to_string(&figure_json).unwrap_or_default();
    call_when_ready("renderFigure", container_id, &format!(", {}", figure_literal));
}

/// Re-fit a chart to its container, e.g. after its tab becomes visible.
pub fn resize_chart(container_id: &str) {
    call_when_ready("resizeFigure", container_id, "");
}
