//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides Rust wrappers that serialize data and call those globals.
//!
//! Every render or destroy bumps a per-container generation counter. A render
//! still waiting for D3 or its container gives up once a newer call for the
//! same container has been made, so an old chart can never land on top of a
//! newer one.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static RACE_CHART_JS: &str = include_str!("../assets/js/race-chart.js");
static STANDINGS_CHART_JS: &str = include_str!("../assets/js/standings-chart.js");

const D3_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('F1 JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Safe to call more than once; only the first call does anything. Injects
/// a D3 `<script>` tag if the page did not include one.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, RACE_CHART_JS, STANDINGS_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "if (!window.__f1ChartsInit) {{ window.__f1ChartScripts = {}; }}",
        js_string(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__f1ChartsInit) return;
            window.__f1ChartsInit = true;
            window.__f1ChartGen = window.__f1ChartGen || {{}};
            if (typeof d3 === 'undefined' && !document.getElementById('f1-d3')) {{
                var s = document.createElement('script');
                s.id = 'f1-d3';
                s.src = '{D3_CDN_URL}';
                document.head.appendChild(s);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__f1ChartScripts);
                    delete window.__f1ChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderRaceChart !== 'undefined') window.renderRaceChart = renderRaceChart;
                    if (typeof renderStandingsChart !== 'undefined') window.renderStandingsChart = renderStandingsChart;
                    if (typeof destroySeasonChart !== 'undefined') window.destroySeasonChart = destroySeasonChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__f1ChartsReady = true;
                    console.log('F1 charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    );
    let _ = js_sys::eval(&init_js);
}

/// Render the per-round points/position chart for one driver.
pub fn render_race_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script("renderRaceChart", container_id, data_json, config_json));
}

/// Render the cumulative standings chart (one line per driver).
pub fn render_standings_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script(
        "renderStandingsChart",
        container_id,
        data_json,
        config_json,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}

/// JS that waits for D3, the chart scripts, and the container element, then
/// calls `window.<function>(id, data, config)` unless superseded.
pub fn render_script(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    format!(
        r#"
        (function() {{
            var gens = window.__f1ChartGen = window.__f1ChartGen || {{}};
            var gen = gens[{id}] = (gens[{id}] || 0) + 1;
            var poll = setInterval(function() {{
                if (gens[{id}] !== gen) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__f1ChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[F1] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// JS that cancels pending renders for the container and empties it.
pub fn destroy_script(container_id: &str) -> String {
    let id = js_string(container_id);
    format!(
        r#"
        var gens = window.__f1ChartGen = window.__f1ChartGen || {{}};
        gens[{id}] = (gens[{id}] || 0) + 1;
        if (typeof window.destroySeasonChart !== 'undefined') {{
            window.destroySeasonChart({id});
        }} else {{
            var el = document.getElementById({id}); if (el) el.innerHTML = '';
        }}
        "#,
    )
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}
