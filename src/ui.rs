use crate::models::Goal;

pub fn render_index(
    record_count: usize,
    latest_total: Option<i64>,
    weekly_average: f64,
    goal: Option<Goal>,
) -> String {
    let latest = match latest_total {
        Some(total) => format!("{total} kg"),
        None => "--".to_string(),
    };
    let weekly = if record_count == 0 {
        "--".to_string()
    } else {
        format!("{weekly_average:.0} kg")
    };
    let goal_line = match goal {
        Some(goal) => format!("{} kg {}", goal.target, goal.period.as_str()),
        None => "Not set".to_string(),
    };

    INDEX_HTML
        .replace("{{RECORDS}}", &record_count.to_string())
        .replace("{{LATEST}}", &latest)
        .replace("{{WEEKLY_AVG}}", &weekly)
        .replace("{{GOAL}}", &goal_line)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>EcoTrack</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6ee;
      --bg-2: #cdeccd;
      --ink: #1f2d26;
      --accent: #2e9e5b;
      --accent-2: #1d5c63;
      --warn: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 22px 54px rgba(29, 92, 99, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    [hidden] {
      display: none !important;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e2f3e4 60%, #f2f8ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 36px 18px 52px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 26px;
      box-shadow: var(--shadow);
      padding: 34px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .subtitle {
      margin: 0;
      color: #5c6b60;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 16px 18px;
      border: 1px solid rgba(29, 92, 99, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8a968c;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.goal {
      color: var(--accent);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 24px;
      border: 1px solid rgba(29, 92, 99, 0.08);
      display: grid;
      gap: 18px;
    }

    .card-header {
      display: grid;
      gap: 6px;
    }

    .card-header .subtitle {
      font-size: 0.95rem;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(29, 92, 99, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b7a6e;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(29, 92, 99, 0.12);
    }

    .fields {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 14px;
    }

    .fields label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      font-weight: 500;
      color: #5c6b60;
    }

    .fields input {
      border: 1px solid rgba(29, 92, 99, 0.18);
      border-radius: 12px;
      padding: 12px 14px;
      font: inherit;
      font-size: 1rem;
      color: var(--ink);
      background: white;
    }

    .fields input:focus {
      outline: 2px solid var(--accent);
      border-color: transparent;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(46, 158, 91, 0.3);
    }

    .btn-ghost {
      background: rgba(29, 92, 99, 0.08);
      color: var(--accent-2);
      padding: 10px 16px;
      font-size: 0.9rem;
    }

    .result-headline {
      display: grid;
      justify-items: center;
      gap: 4px;
      text-align: center;
    }

    .result-total {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2.6rem, 6vw, 3.6rem);
      font-weight: 600;
      line-height: 1;
    }

    .result-total[data-level="excellent"],
    .impact[data-level="excellent"] {
      color: var(--accent);
    }

    .result-total[data-level="good"],
    .impact[data-level="good"] {
      color: #7aa531;
    }

    .result-total[data-level="average"],
    .impact[data-level="average"] {
      color: #d99114;
    }

    .result-total[data-level="high"],
    .impact[data-level="high"] {
      color: var(--warn);
    }

    .result-unit {
      color: #6b7a6e;
      font-size: 0.95rem;
    }

    .impact {
      margin: 6px 0 0;
      font-weight: 600;
    }

    .compare {
      display: grid;
      gap: 8px;
    }

    .compare-row {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      font-size: 0.9rem;
      color: #5c6b60;
    }

    .progress {
      height: 12px;
      border-radius: 999px;
      background: rgba(29, 92, 99, 0.1);
      overflow: hidden;
    }

    .progress.slim {
      height: 8px;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      background: var(--accent);
      transition: width 400ms ease;
    }

    .progress-fill[data-state="over"] {
      background: var(--warn);
    }

    .categories {
      display: grid;
      gap: 12px;
    }

    .category-row {
      display: grid;
      grid-template-columns: 1fr auto;
      gap: 6px 12px;
      align-items: center;
      padding: 12px 14px;
      border-radius: 14px;
      background: rgba(46, 158, 91, 0.06);
    }

    .category-row .progress {
      grid-column: 1 / -1;
    }

    .category-name {
      font-weight: 600;
    }

    .category-value {
      font-weight: 600;
      color: var(--accent-2);
    }

    .category-share {
      grid-column: 1 / -1;
      font-size: 0.85rem;
      color: #6b7a6e;
    }

    .chart-area {
      display: grid;
      gap: 16px;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .chart-header .subtitle {
      margin-top: 6px;
      font-size: 0.95rem;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(29, 92, 99, 0.08);
    }

    #chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(29, 92, 99, 0.12);
    }

    .chart-label {
      fill: #7c8a7e;
      font-size: 11px;
    }

    .chart-bar.series-0 {
      fill: var(--accent);
    }

    .chart-bar.series-1 {
      fill: var(--accent-2);
    }

    .chart-bar.series-2 {
      fill: #d99114;
    }

    .chart-bar.series-3 {
      fill: #7c5cd1;
    }

    .chart-metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      font-size: 0.85rem;
      color: #5c6b60;
    }

    .recent {
      display: grid;
      gap: 10px;
    }

    .recent-row {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 10px;
      padding: 12px 14px;
      border-radius: 14px;
      background: white;
      border: 1px solid rgba(29, 92, 99, 0.08);
    }

    .recent-date {
      font-weight: 600;
      margin-right: auto;
    }

    .chips {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .chip {
      padding: 4px 10px;
      border-radius: 999px;
      background: rgba(29, 92, 99, 0.08);
      font-size: 0.82rem;
      color: var(--accent-2);
    }

    .chip.total {
      background: rgba(46, 158, 91, 0.14);
      color: var(--accent);
      font-weight: 600;
    }

    .goal-form {
      display: grid;
      gap: 14px;
    }

    .goal-form label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      font-weight: 500;
      color: #5c6b60;
    }

    .goal-form input {
      border: 1px solid rgba(29, 92, 99, 0.18);
      border-radius: 12px;
      padding: 12px 14px;
      font: inherit;
      font-size: 1rem;
      background: white;
    }

    .goal-form input:focus {
      outline: 2px solid var(--accent);
      border-color: transparent;
    }

    .goal-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
    }

    .goal-progress {
      display: grid;
      gap: 10px;
      padding: 16px;
      border-radius: 16px;
      background: rgba(46, 158, 91, 0.06);
    }

    .goal-status {
      display: flex;
      align-items: center;
      gap: 10px;
      font-size: 0.9rem;
      color: #5c6b60;
    }

    .badge {
      padding: 4px 12px;
      border-radius: 999px;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .badge[data-state="ok"] {
      background: rgba(46, 158, 91, 0.16);
      color: #2d7a4b;
    }

    .badge[data-state="over"] {
      background: rgba(198, 59, 43, 0.14);
      color: var(--warn);
    }

    .tips {
      display: grid;
      gap: 14px;
    }

    .tips-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 14px;
    }

    .tip-card {
      background: white;
      border-radius: 16px;
      padding: 18px;
      border: 1px solid rgba(29, 92, 99, 0.08);
    }

    .tip-card h3 {
      margin: 0 0 10px;
      font-size: 1rem;
    }

    .tip-card ul {
      margin: 0;
      padding-left: 18px;
      display: grid;
      gap: 6px;
      font-size: 0.88rem;
      color: #5c6b60;
    }

    .status {
      font-size: 0.95rem;
      color: #6b7a6e;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--warn);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f7d72;
      font-size: 0.9rem;
    }

    footer {
      text-align: center;
      font-size: 0.85rem;
      color: #8a968c;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(16px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 640px) {
      .app {
        padding: 28px 22px;
      }
      .btn-primary {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>EcoTrack</h1>
      <p class="subtitle">Estimate your annual carbon footprint, watch it over time, and set a reduction goal.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Calculations</span>
        <span id="stat-records" class="value">{{RECORDS}}</span>
      </div>
      <div class="stat">
        <span class="label">Latest estimate</span>
        <span id="stat-latest" class="value">{{LATEST}}</span>
      </div>
      <div class="stat">
        <span class="label">Weekly average</span>
        <span id="stat-weekly" class="value">{{WEEKLY_AVG}}</span>
      </div>
      <div class="stat">
        <span class="label">Goal</span>
        <span id="stat-goal" class="value goal">{{GOAL}}</span>
      </div>
    </section>

    <section class="card">
      <div class="card-header">
        <h2>Calculate your footprint</h2>
        <p class="subtitle">Fill in what applies; everything else can stay at zero. The result is kg CO2 per year.</p>
      </div>
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-tab="transport" role="tab" aria-selected="true">Transport</button>
        <button class="tab" type="button" data-tab="energy" role="tab" aria-selected="false">Energy</button>
        <button class="tab" type="button" data-tab="food" role="tab" aria-selected="false">Food</button>
        <button class="tab" type="button" data-tab="waste" role="tab" aria-selected="false">Waste</button>
      </div>
      <div class="fields" data-panel="transport">
        <label>Car miles per week
          <input id="car-miles" type="number" min="0" value="0" />
        </label>
        <label>Flights per year
          <input id="flights" type="number" min="0" value="0" />
        </label>
        <label>Public transport miles per week
          <input id="public-transport-miles" type="number" min="0" value="0" />
        </label>
      </div>
      <div class="fields" data-panel="energy" hidden>
        <label>Electricity use (kWh per month)
          <input id="electricity-kwh" type="number" min="0" value="0" />
        </label>
        <label>Natural gas (therms per month)
          <input id="gas-therms" type="number" min="0" value="0" />
        </label>
      </div>
      <div class="fields" data-panel="food" hidden>
        <label>Meat servings per week
          <input id="meat-servings" type="number" min="0" value="0" />
        </label>
        <label>Dairy servings per week
          <input id="dairy-servings" type="number" min="0" value="0" />
        </label>
      </div>
      <div class="fields" data-panel="waste" hidden>
        <label>Recycling rate (0-100%)
          <input id="recycling-percent" type="number" min="0" max="100" value="0" />
        </label>
      </div>
      <button class="btn-primary" id="calculate-btn" type="button">Calculate my footprint</button>
    </section>

    <section class="card" id="results" hidden>
      <div class="result-headline">
        <span class="result-total" id="result-total">0</span>
        <span class="result-unit">kg CO2 per year</span>
        <p class="impact" id="impact-line"></p>
      </div>
      <div class="compare">
        <div class="compare-row">
          <span>Compared to the 16,000 kg global average</span>
          <span id="percent-average"></span>
        </div>
        <div class="progress">
          <div class="progress-fill" id="average-fill"></div>
        </div>
      </div>
      <div class="categories" id="category-rows"></div>
      <button class="btn-primary" id="save-btn" type="button">Save to history</button>
    </section>

    <section class="chart-area" id="history-section" hidden>
      <div class="chart-header">
        <div>
          <h2 id="chart-title">Emissions trend</h2>
          <p id="chart-subtitle" class="subtitle">Total kg CO2 across your last 10 calculations.</p>
        </div>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-chart="trend" role="tab" aria-selected="true">Trend</button>
          <button class="tab" type="button" data-chart="categories" role="tab" aria-selected="false">Categories</button>
        </div>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 640 280" aria-label="History chart" role="img"></svg>
      </div>
      <div class="legend" id="chart-legend" hidden>
        <span>Transport</span>
        <span>Energy</span>
        <span>Food</span>
        <span>Waste</span>
      </div>
      <div class="chart-metrics">
        <div class="stat">
          <span class="label">Weekly average</span>
          <span class="value" id="metric-weekly">0</span>
        </div>
        <div class="stat">
          <span class="label">Monthly average</span>
          <span class="value" id="metric-monthly">0</span>
        </div>
        <div class="stat">
          <span class="label">Saved calculations</span>
          <span class="value" id="metric-count">0</span>
        </div>
      </div>
      <div class="recent" id="recent"></div>
      <form id="clear-history-form" method="post" action="/history/clear">
        <button class="btn-ghost" type="submit">Clear history</button>
      </form>
    </section>

    <section class="card">
      <div class="card-header">
        <h2>Your goal</h2>
        <p class="subtitle">Set a target in kg CO2 and track it against your rolling average.</p>
      </div>
      <div class="goal-form">
        <label>Target (kg CO2)
          <input id="goal-target" type="number" min="0" step="0.1" placeholder="e.g. 250" />
        </label>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-period="daily" role="tab" aria-selected="true">Daily</button>
          <button class="tab" type="button" data-period="weekly" role="tab" aria-selected="false">Weekly</button>
          <button class="tab" type="button" data-period="monthly" role="tab" aria-selected="false">Monthly</button>
        </div>
        <div class="goal-actions">
          <button class="btn-primary" id="set-goal-btn" type="button">Set goal</button>
          <form id="clear-goal-form" method="post" action="/goal/clear">
            <button class="btn-ghost" type="submit">Clear goal</button>
          </form>
        </div>
      </div>
      <div class="goal-progress" id="goal-progress" hidden>
        <div class="compare-row">
          <span id="goal-average-label">Weekly average</span>
          <span id="goal-average"></span>
        </div>
        <div class="progress">
          <div class="progress-fill" id="goal-fill"></div>
        </div>
        <div class="goal-status">
          <span class="badge" id="goal-badge"></span>
          <span id="goal-note"></span>
        </div>
      </div>
    </section>

    <section class="tips">
      <div class="card-header">
        <h2>Reduce your impact</h2>
        <p class="subtitle">Small changes add up. Start with the category that dominates your breakdown.</p>
      </div>
      <div class="tips-grid">
        <div class="tip-card">
          <h3>Transport</h3>
          <ul>
            <li>Walk or bike for short trips</li>
            <li>Use public transport where it exists</li>
            <li>Carpool when you can</li>
            <li>Consider an electric or hybrid vehicle</li>
            <li>Combine errands into one trip</li>
          </ul>
        </div>
        <div class="tip-card">
          <h3>Energy</h3>
          <ul>
            <li>Switch to LED bulbs</li>
            <li>Unplug electronics you are not using</li>
            <li>Use a programmable thermostat</li>
            <li>Wash clothes in cold water</li>
            <li>Air-dry laundry when possible</li>
          </ul>
        </div>
        <div class="tip-card">
          <h3>Food</h3>
          <ul>
            <li>Eat less red meat</li>
            <li>Buy local and seasonal produce</li>
            <li>Plan meals to cut food waste</li>
            <li>Choose plant-based meals more often</li>
            <li>Grow herbs or vegetables at home</li>
          </ul>
        </div>
        <div class="tip-card">
          <h3>Waste</h3>
          <ul>
            <li>Recycle paper, plastic, and glass</li>
            <li>Compost food scraps</li>
            <li>Carry reusable bags and bottles</li>
            <li>Buy products with less packaging</li>
            <li>Repair before replacing</li>
          </ul>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Coefficients are rough per-category factors, not a certified audit. History keeps your 30 most recent calculations on this server; clearing removes them for good.</p>
    <footer>EcoTrack &middot; Making every carbon count.</footer>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const statRecords = document.getElementById('stat-records');
    const statLatest = document.getElementById('stat-latest');
    const statWeekly = document.getElementById('stat-weekly');
    const statGoal = document.getElementById('stat-goal');

    const calcTabs = Array.from(document.querySelectorAll('[data-tab]'));
    const calcPanels = Array.from(document.querySelectorAll('[data-panel]'));
    const chartTabs = Array.from(document.querySelectorAll('[data-chart]'));
    const periodTabs = Array.from(document.querySelectorAll('[data-period]'));

    const resultsEl = document.getElementById('results');
    const resultTotalEl = document.getElementById('result-total');
    const impactLineEl = document.getElementById('impact-line');
    const percentAverageEl = document.getElementById('percent-average');
    const averageFillEl = document.getElementById('average-fill');
    const categoryRowsEl = document.getElementById('category-rows');

    const historySection = document.getElementById('history-section');
    const chartEl = document.getElementById('chart');
    const chartTitleEl = document.getElementById('chart-title');
    const chartSubtitleEl = document.getElementById('chart-subtitle');
    const chartLegendEl = document.getElementById('chart-legend');
    const metricWeekly = document.getElementById('metric-weekly');
    const metricMonthly = document.getElementById('metric-monthly');
    const metricCount = document.getElementById('metric-count');
    const recentEl = document.getElementById('recent');

    const goalTargetEl = document.getElementById('goal-target');
    const goalProgressEl = document.getElementById('goal-progress');
    const goalAverageLabelEl = document.getElementById('goal-average-label');
    const goalAverageEl = document.getElementById('goal-average');
    const goalFillEl = document.getElementById('goal-fill');
    const goalBadgeEl = document.getElementById('goal-badge');
    const goalNoteEl = document.getElementById('goal-note');

    const CATEGORIES = [
      { key: 'transport', name: 'Transport' },
      { key: 'energy', name: 'Energy' },
      { key: 'food', name: 'Food' },
      { key: 'waste', name: 'Waste' }
    ];

    let lastEstimate = null;
    let historyData = null;
    let goalData = null;
    let activeChart = 'trend';
    let selectedPeriod = 'daily';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatKg = (value) => `${Math.round(value).toLocaleString()} kg`;

    const shortDate = (iso) =>
      new Date(iso).toLocaleDateString('en-US', { month: 'short', day: 'numeric' });

    const clampPercent = (value) => Math.min(Math.max(value, 0), 100);

    const readInputs = () => ({
      transport: {
        car_miles: Number(document.getElementById('car-miles').value) || 0,
        flights: Number(document.getElementById('flights').value) || 0,
        public_transport_miles: Number(document.getElementById('public-transport-miles').value) || 0
      },
      energy: {
        electricity_kwh: Number(document.getElementById('electricity-kwh').value) || 0,
        gas_therms: Number(document.getElementById('gas-therms').value) || 0
      },
      food: {
        meat_servings: Number(document.getElementById('meat-servings').value) || 0,
        dairy_servings: Number(document.getElementById('dairy-servings').value) || 0
      },
      waste: {
        recycling_percent: Number(document.getElementById('recycling-percent').value) || 0
      }
    });

    const renderResults = (data) => {
      resultTotalEl.textContent = data.total.toLocaleString();
      resultTotalEl.dataset.level = data.impact.level;
      impactLineEl.textContent = `${data.impact.label} ${data.impact.message}`;
      impactLineEl.dataset.level = data.impact.level;
      percentAverageEl.textContent = `${data.percent_of_average}% of average`;
      averageFillEl.style.width = `${clampPercent(data.percent_of_average)}%`;
      categoryRowsEl.innerHTML = CATEGORIES.map((category) => {
        const value = data.breakdown[category.key];
        const share = data.shares[category.key];
        return `
          <div class="category-row">
            <span class="category-name">${category.name}</span>
            <span class="category-value">${formatKg(value)}</span>
            <div class="progress slim"><div class="progress-fill" style="width: ${clampPercent(share)}%"></div></div>
            <span class="category-share">${share}% of total</span>
          </div>`;
      }).join('');
      resultsEl.hidden = false;
      resultsEl.scrollIntoView({ behavior: 'smooth', block: 'nearest' });
    };

    const CHART_W = 640;
    const CHART_H = 280;
    const PAD_LEFT = 52;
    const PAD_BOTTOM = 36;
    const PAD_TOP = 20;
    const plotHeight = CHART_H - PAD_TOP - PAD_BOTTOM;

    const showEmptyChart = () => {
      chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
    };

    const gridLines = (max, y) =>
      Array.from({ length: 5 }, (_, step) => {
        const value = (max * step) / 4;
        const yPos = y(value);
        const line = `<line class="chart-grid" x1="${PAD_LEFT}" y1="${yPos}" x2="${CHART_W - PAD_LEFT}" y2="${yPos}" />`;
        const tick = `<text class="chart-label" x="${PAD_LEFT - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value)}</text>`;
        return line + tick;
      }).join('');

    const axisLabels = (labels, x) => {
      const every = labels.length > 7 ? 2 : 1;
      return labels
        .map((label, index) =>
          index % every === 0
            ? `<text class="chart-label" x="${x(index)}" y="${CHART_H - PAD_BOTTOM + 18}" text-anchor="middle">${label}</text>`
            : ''
        )
        .join('');
    };

    const scaleY = (max) => (value) =>
      CHART_H - PAD_BOTTOM - (Math.max(value, 0) / max) * plotHeight;

    const renderLineChart = (points) => {
      if (!points.length) {
        showEmptyChart();
        return;
      }

      const max = Math.max(...points.map((point) => point.value), 1);
      const stepX = points.length > 1 ? (CHART_W - PAD_LEFT * 2) / (points.length - 1) : 0;
      const x = (index) => PAD_LEFT + index * stepX;
      const y = scaleY(max);

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');
      const dots = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="3.5" />`)
        .join('');
      const axis = axisLabels(points.map((point) => point.label), x);

      chartEl.innerHTML = `${gridLines(max, y)}<path class="chart-line" d="${path}" />${dots}${axis}`;
    };

    const renderBarChart = (rows) => {
      if (!rows.length) {
        showEmptyChart();
        return;
      }

      const max = Math.max(...rows.flatMap((row) => row.values), 1);
      const slot = (CHART_W - PAD_LEFT * 2) / rows.length;
      const barWidth = Math.max(3, Math.min(10, (slot - 10) / 4));
      const y = scaleY(max);

      const bars = rows
        .map((row, rowIndex) => {
          const groupLeft = PAD_LEFT + rowIndex * slot + (slot - barWidth * 4) / 2;
          return row.values
            .map((value, seriesIndex) => {
              const xPos = groupLeft + seriesIndex * barWidth;
              const yPos = y(value);
              const barHeight = CHART_H - PAD_BOTTOM - yPos;
              return `<rect class="chart-bar series-${seriesIndex}" x="${xPos.toFixed(2)}" y="${yPos.toFixed(2)}" width="${barWidth.toFixed(2)}" height="${barHeight.toFixed(2)}" />`;
            })
            .join('');
        })
        .join('');
      const axis = axisLabels(rows.map((row) => row.label), (index) => PAD_LEFT + index * slot + slot / 2);

      chartEl.innerHTML = `${gridLines(max, y)}${bars}${axis}`;
    };

    const chartRows = () => historyData.records.slice(0, 10).reverse();

    const renderActiveChart = () => {
      if (!historyData) {
        return;
      }
      const rows = chartRows();
      if (activeChart === 'categories') {
        chartTitleEl.textContent = 'Emissions by category';
        chartSubtitleEl.textContent = 'Per-category kg CO2 across your last 10 calculations.';
        chartLegendEl.hidden = false;
        renderBarChart(
          rows.map((record) => ({
            label: shortDate(record.date),
            values: CATEGORIES.map((category) => record.breakdown[category.key])
          }))
        );
      } else {
        chartTitleEl.textContent = 'Emissions trend';
        chartSubtitleEl.textContent = 'Total kg CO2 across your last 10 calculations.';
        chartLegendEl.hidden = true;
        renderLineChart(
          rows.map((record) => ({ label: shortDate(record.date), value: record.total }))
        );
      }
    };

    const renderRecent = () => {
      recentEl.innerHTML = historyData.records
        .slice(0, 5)
        .map((record) => {
          const date = new Date(record.date).toLocaleDateString('en-US', {
            month: 'short',
            day: 'numeric',
            year: 'numeric'
          });
          const chips = CATEGORIES.map(
            (category) => `<span class="chip">${category.name} ${record.breakdown[category.key]}</span>`
          ).join('');
          return `
            <div class="recent-row">
              <span class="recent-date">${date}</span>
              <span class="chips">${chips}</span>
              <span class="chip total">${formatKg(record.total)}</span>
            </div>`;
        })
        .join('');
    };

    const updateSummary = () => {
      if (historyData) {
        const count = historyData.records.length;
        statRecords.textContent = count;
        statLatest.textContent = count ? formatKg(historyData.records[0].total) : '--';
        statWeekly.textContent = count ? formatKg(historyData.weekly_average) : '--';
        metricWeekly.textContent = formatKg(historyData.weekly_average);
        metricMonthly.textContent = formatKg(historyData.monthly_average);
        metricCount.textContent = count;
        historySection.hidden = count === 0;
      }
      if (goalData) {
        statGoal.textContent = goalData.goal
          ? `${goalData.goal.target} kg ${goalData.goal.period}`
          : 'Not set';
      }
    };

    const setPeriod = (period) => {
      selectedPeriod = period;
      periodTabs.forEach((button) => {
        const isActive = button.dataset.period === period;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
    };

    const renderGoal = () => {
      if (!goalData || !goalData.goal) {
        goalProgressEl.hidden = true;
        return;
      }
      const goal = goalData.goal;
      goalTargetEl.value = goal.target;
      setPeriod(goal.period);
      goalAverageLabelEl.textContent =
        goal.period === 'monthly' ? 'Monthly average' : 'Weekly average';
      goalAverageEl.textContent = `${formatKg(goalData.current_average)} vs target ${goal.target} kg`;
      goalFillEl.style.width = `${clampPercent(goalData.progress)}%`;
      goalFillEl.dataset.state = goalData.on_track ? 'ok' : 'over';
      goalBadgeEl.textContent = goalData.on_track ? 'On track' : 'Above target';
      goalBadgeEl.dataset.state = goalData.on_track ? 'ok' : 'over';
      goalNoteEl.textContent = goalData.on_track
        ? `Nice work, your average is within the ${goal.period} target.`
        : `About ${formatKg(goalData.current_average - goal.target)} over target; the tips below are a good place to start.`;
      goalProgressEl.hidden = false;
    };

    const loadHistory = async () => {
      const res = await fetch('/api/history');
      if (!res.ok) {
        throw new Error('Unable to load history');
      }
      historyData = await res.json();
      renderActiveChart();
      renderRecent();
      updateSummary();
    };

    const loadGoal = async () => {
      const res = await fetch('/api/goal');
      if (!res.ok) {
        throw new Error('Unable to load goal');
      }
      goalData = await res.json();
      renderGoal();
      updateSummary();
    };

    const refresh = async () => {
      await Promise.all([loadHistory(), loadGoal()]);
    };

    const calculate = async () => {
      setStatus('Calculating...', 'info');
      const res = await fetch('/api/estimate', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(readInputs())
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Estimate failed');
      }

      const data = await res.json();
      lastEstimate = { total: data.total, breakdown: data.breakdown };
      renderResults(data);
      setStatus('', '');
    };

    const saveEstimate = async () => {
      if (!lastEstimate) {
        return;
      }
      setStatus('Saving...', 'info');
      const res = await fetch('/api/history', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(lastEstimate)
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Save failed');
      }

      await refresh();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const setGoal = async () => {
      const target = Number.parseFloat(goalTargetEl.value);
      if (!Number.isFinite(target) || target <= 0) {
        setStatus('Target must be a positive number', 'error');
        return;
      }
      setStatus('Saving goal...', 'info');
      const res = await fetch('/api/goal', {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ target, period: selectedPeriod })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Goal rejected');
      }

      goalData = await res.json();
      renderGoal();
      updateSummary();
      setStatus(`Goal set: ${target} kg CO2 ${selectedPeriod}`, 'ok');
      setTimeout(() => setStatus('', ''), 1500);
    };

    const clearHistory = async () => {
      const res = await fetch('/api/history', { method: 'DELETE' });
      if (!res.ok) {
        throw new Error('Unable to clear history');
      }
      await refresh();
      setStatus('History cleared', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const clearGoal = async () => {
      const res = await fetch('/api/goal', { method: 'DELETE' });
      if (!res.ok) {
        throw new Error('Unable to clear goal');
      }
      goalTargetEl.value = '';
      await refresh();
      setStatus('Goal cleared', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    calcTabs.forEach((button) => {
      button.addEventListener('click', () => {
        calcTabs.forEach((tab) => {
          const isActive = tab === button;
          tab.classList.toggle('active', isActive);
          tab.setAttribute('aria-selected', String(isActive));
        });
        calcPanels.forEach((panel) => {
          panel.hidden = panel.dataset.panel !== button.dataset.tab;
        });
      });
    });

    chartTabs.forEach((button) => {
      button.addEventListener('click', () => {
        activeChart = button.dataset.chart;
        chartTabs.forEach((tab) => {
          const isActive = tab === button;
          tab.classList.toggle('active', isActive);
          tab.setAttribute('aria-selected', String(isActive));
        });
        renderActiveChart();
      });
    });

    periodTabs.forEach((button) => {
      button.addEventListener('click', () => setPeriod(button.dataset.period));
    });

    document.getElementById('calculate-btn').addEventListener('click', () => {
      calculate().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('save-btn').addEventListener('click', () => {
      saveEstimate().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('set-goal-btn').addEventListener('click', () => {
      setGoal().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('clear-history-form').addEventListener('submit', (event) => {
      event.preventDefault();
      clearHistory().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('clear-goal-form').addEventListener('submit', (event) => {
      event.preventDefault();
      clearGoal().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, GoalPeriod};

    #[test]
    fn substitutes_summary_values() {
        let page = render_index(
            4,
            Some(1631),
            449.6,
            Some(Goal {
                target: 5.5,
                period: GoalPeriod::Weekly,
            }),
        );

        assert!(page.contains(">4<"));
        assert!(page.contains("1631 kg"));
        assert!(page.contains("450 kg"));
        assert!(page.contains("5.5 kg weekly"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn empty_state_uses_placeholders() {
        let page = render_index(0, None, 0.0, None);

        assert!(page.contains(">--<"));
        assert!(page.contains("Not set"));
        assert!(page.contains("EcoTrack"));
    }
}
