use crate::models::Metric;

pub fn render_index() -> String {
    let primary_options: String = Metric::ALL
        .into_iter()
        .map(|metric| {
            let selected = if metric == Metric::default() { " selected" } else { "" };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                metric.column(),
                metric.label()
            )
        })
        .collect();
    let secondary_options: String = Metric::ALL
        .into_iter()
        .map(|metric| format!(r#"<option value="{0}">{0}</option>"#, metric.column()))
        .collect();

    INDEX_HTML
        .replace("{{PRIMARY_OPTIONS}}", &primary_options)
        .replace("{{SECONDARY_OPTIONS}}", &secondary_options)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>World Happiness Index Dashboard</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg: #0b0b0d;
      --ink: #f2efe9;
      --muted: #9a948c;
      --accent: #fdca26;
      --card: #111114;
      --border: rgba(242, 239, 233, 0.08);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, #1d1530, transparent 60%), var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1400px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    .app-header h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 3.2rem);
      margin: 0;
    }

    .row {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 24px;
    }

    .row.wide-narrow {
      grid-template-columns: 2fr 1fr;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      border: 1px solid var(--border);
      box-shadow: var(--shadow);
      padding: 16px;
      min-height: 120px;
    }

    .graph {
      min-height: 420px;
    }

    select {
      appearance: none;
      width: 100%;
      padding: 14px 18px;
      border-radius: 999px;
      border: 1px solid var(--border);
      background: var(--card);
      color: var(--ink);
      font: inherit;
      font-size: 1rem;
      cursor: pointer;
    }

    .dropdown-container {
      max-width: 50%;
    }

    .data-insights h3 {
      margin: 8px 0;
      font-size: 1.3rem;
      color: var(--accent);
    }

    .country-details h3 {
      margin: 0 0 10px;
      font-size: 1.3rem;
    }

    .country-details p {
      margin: 4px 0;
      color: var(--muted);
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #ff6b4a;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 900px) {
      .row,
      .row.wide-narrow {
        grid-template-columns: 1fr;
      }
      .dropdown-container {
        max-width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="app-header">
      <h1>World Happiness Index Dashboard</h1>
    </header>

    <div class="dropdown-container">
      <select id="metric-dropdown" aria-label="Primary metric">{{PRIMARY_OPTIONS}}</select>
    </div>

    <section class="row">
      <div class="card graph" id="world-map"></div>
      <div class="card graph" id="pie-chart"></div>
    </section>

    <section class="row wide-narrow">
      <div class="card data-insights" id="data-insights"></div>
      <div class="card country-details" id="country-details"></div>
    </section>

    <section class="row">
      <div>
        <select id="second-metric-dropdown" aria-label="Secondary metric">
          <option value="">Select a second metric for scatter plot</option>
          {{SECONDARY_OPTIONS}}
        </select>
      </div>
      <div class="card graph" id="scatter-plot"></div>
    </section>

    <section class="row">
      <div class="card graph" id="bar-chart"></div>
      <div class="card graph" id="trend-line"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const primaryEl = document.getElementById('metric-dropdown');
    const secondaryEl = document.getElementById('second-metric-dropdown');
    const mapEl = document.getElementById('world-map');

    // Reset on every page load; the server keeps no per-user state.
    let selection = {
      primary_metric: primaryEl.value,
      secondary_metric: null,
      selected_country: null
    };
    let mapBound = false;
    // Events run one at a time, each posting the selection the previous one returned.
    let queue = Promise.resolve();

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderText = (el, items) => {
      el.replaceChildren(
        ...items.map((item) => {
          const node = document.createElement(item.style === 'heading' ? 'h3' : 'p');
          node.textContent = item.text;
          return node;
        })
      );
    };

    const onMapClick = (event) => {
      const point = event.points && event.points[0];
      if (point && point.location) {
        send({ type: 'map_click', location: point.location });
      }
    };

    const applyViews = (views) => {
      Object.entries(views).forEach(([region, view]) => {
        const el = document.getElementById(region);
        if (!el) {
          return;
        }
        if (view.kind === 'text') {
          renderText(el, view.items);
          return;
        }
        const drawn = Plotly.react(el, view.data, view.layout, { responsive: true });
        if (el === mapEl && !mapBound) {
          mapBound = true;
          drawn.then(() => mapEl.on('plotly_click', onMapClick));
        }
      });
      setStatus('', '');
    };

    const post = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const syncControls = () => {
      primaryEl.value = selection.primary_metric;
      secondaryEl.value = selection.secondary_metric || '';
    };

    const enqueue = (task) => {
      queue = queue.then(task).catch((err) => {
        syncControls();
        setStatus(err.message, 'error');
      });
      return queue;
    };

    const send = (event) =>
      enqueue(async () => {
        const update = await post('/api/event', { selection, event });
        selection = update.selection;
        applyViews(update.views);
      });

    const renderAll = () =>
      enqueue(async () => {
        const response = await post('/api/render', { selection });
        applyViews(response.views);
      });

    primaryEl.addEventListener('change', () => {
      send({ type: 'select_primary', metric: primaryEl.value });
    });

    secondaryEl.addEventListener('change', () => {
      send({ type: 'select_secondary', metric: secondaryEl.value || null });
    });

    renderAll();
  </script>
</body>
</html>
"#;
