use crate::window::{DEFAULT_DAYS, MAX_DAYS};

pub fn render_index(latest: Option<&str>) -> String {
    INDEX_HTML
        .replace("{{LATEST}}", latest.unwrap_or("—"))
        .replace("{{DAYS}}", &DEFAULT_DAYS.to_string())
        .replace("{{MAX_DAYS}}", &MAX_DAYS.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="zh-Hant">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>共軍動態儀表板</title>
  <style>
    :root {
      --bg-1: #10161d;
      --bg-2: #1c2833;
      --ink: #eef2f5;
      --muted: #9aa7b2;
      --accent: #ff3b30;
      --card: rgba(255, 255, 255, 0.06);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.35);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Noto Sans TC", "PingFang TC", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      display: grid;
      gap: 24px;
    }

    .card {
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 4vw, 2.2rem);
    }

    .range-control {
      display: flex;
      align-items: center;
      gap: 8px;
      color: var(--muted);
    }

    .range-control input {
      width: 72px;
      padding: 6px 8px;
      border-radius: 8px;
      border: none;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-weight: 600;
      cursor: pointer;
      background: rgba(255, 255, 255, 0.12);
      color: var(--ink);
    }

    .today-summary .date {
      color: var(--muted);
    }

    .total-count {
      font-size: 3rem;
      font-weight: 700;
      margin: 8px 0;
    }

    .delta {
      color: var(--muted);
      font-size: 1rem;
      margin-left: 8px;
    }

    .detail-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
      gap: 12px;
    }

    .detail-item {
      background: rgba(255, 255, 255, 0.05);
      border-radius: 14px;
      padding: 12px;
    }

    .detail-item span {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .detail-item p {
      margin: 6px 0 0;
      font-size: 1.5rem;
      font-weight: 600;
    }

    .narrative {
      margin-top: 12px;
      font-size: 0.9rem;
      opacity: 0.8;
    }

    .day-list {
      max-height: 320px;
      overflow-y: auto;
      display: grid;
      gap: 6px;
    }

    .day-row {
      display: grid;
      grid-template-columns: 1fr auto auto;
      gap: 16px;
      padding: 10px 12px;
      border-radius: 12px;
      cursor: pointer;
    }

    .day-row:hover,
    .day-row.selected {
      background: rgba(255, 255, 255, 0.08);
    }

    .day-row .day-delta {
      color: var(--muted);
      min-width: 3em;
      text-align: right;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
    }

    .tab.active {
      background: var(--ink);
      color: var(--bg-1);
    }

    svg.chart {
      width: 100%;
      height: 220px;
      display: block;
      margin-top: 12px;
    }

    .chart-grid {
      stroke: rgba(255, 255, 255, 0.1);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .detail-row {
      display: grid;
      grid-template-columns: 140px 1fr;
      gap: 12px;
      padding: 10px 0;
      border-top: 1px solid rgba(255, 255, 255, 0.08);
    }

    .detail-time {
      color: var(--muted);
    }

    .empty {
      color: var(--muted);
      padding: 12px 0;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #ff6b5b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>共軍動態儀表板</h1>
      <div class="range-control">
        <label for="daysInput">顯示天數：</label>
        <input id="daysInput" type="number" value="{{DAYS}}" min="1" max="{{MAX_DAYS}}" />
        <button id="applyBtn" type="button">套用</button>
        <button id="reloadBtn" type="button">重新載入</button>
      </div>
    </header>

    <div class="status" id="status"></div>

    <section class="card today-summary">
      <div class="date" id="todayDate">{{LATEST}}</div>
      <div class="total-count"><span id="todayTotal">—</span><span class="delta" id="todayDelta"></span></div>
      <div class="detail-grid" id="todayCategories"></div>
      <p class="narrative" id="todayNarrative"></p>
    </section>

    <section class="card">
      <div class="day-list" id="dayList"></div>
    </section>

    <section class="card">
      <div class="chart-header">
        <h2 id="weekTitle"></h2>
        <div class="tabs" data-chart="week"></div>
      </div>
      <svg class="chart" id="weekChart" viewBox="0 0 600 220" role="img"></svg>
    </section>

    <section class="card">
      <div class="chart-header">
        <h2 id="monthTitle"></h2>
        <div class="tabs" data-chart="month"></div>
      </div>
      <svg class="chart" id="monthChart" viewBox="0 0 600 220" role="img"></svg>
    </section>

    <section class="card details-section">
      <h2 class="details-title" id="detailsTitle">詳細動態</h2>
      <div id="detailRows"></div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const daysInput = document.getElementById('daysInput');
    const charts = { week: null, month: null };
    const activeSeries = { week: 'total', month: 'total' };
    let latestToken = 0;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const text = (id, value) => {
      document.getElementById(id).textContent = value;
    };

    const renderToday = (today) => {
      if (!today) {
        text('todayDate', '—');
        text('todayTotal', '—');
        text('todayDelta', '');
        text('todayNarrative', '');
        document.getElementById('todayCategories').innerHTML = '';
        return;
      }
      text('todayDate', `${today.heading}（事件日 ${today.event_date}）`);
      text('todayTotal', today.total);
      text('todayDelta', today.delta_label);
      text('todayNarrative', today.narrative);
      const grid = document.getElementById('todayCategories');
      grid.innerHTML = '';
      const items = today.categories.map((c) => [c.label, c.count]);
      if (today.median_line_crossings !== null) {
        items.push(['逾越中線', today.median_line_crossings]);
      }
      items.forEach(([label, count]) => {
        const item = document.createElement('div');
        item.className = 'detail-item';
        item.innerHTML = '<span></span><p></p>';
        item.querySelector('span').textContent = label;
        item.querySelector('p').textContent = count;
        grid.appendChild(item);
      });
    };

    const renderRows = (rows, selected) => {
      const list = document.getElementById('dayList');
      list.innerHTML = '';
      rows.forEach((row) => {
        const el = document.createElement('div');
        el.className = 'day-row';
        el.dataset.date = row.report_date;
        el.classList.toggle('selected', row.report_date === selected);
        el.innerHTML = '<div class="day-name"></div><div class="day-count"></div><div class="day-delta"></div>';
        el.querySelector('.day-name').textContent = row.label;
        el.querySelector('.day-count').textContent = row.total;
        el.querySelector('.day-delta').textContent = row.delta_label;
        el.addEventListener('click', () => {
          selectDate(row.report_date).catch((err) => setStatus(err.message, 'error'));
        });
        list.appendChild(el);
      });
    };

    const markSelected = (date) => {
      document.querySelectorAll('.day-row').forEach((el) => {
        el.classList.toggle('selected', el.dataset.date === date);
      });
    };

    const drawLine = (svg, labels, values, color) => {
      if (!values.length) {
        svg.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">尚無資料</text>';
        return;
      }
      const width = 600;
      const height = 220;
      const padX = 40;
      const padY = 30;
      const top = 16;
      const max = Math.max(1, ...values);
      const xStep = values.length > 1 ? (width - padX * 2) / (values.length - 1) : 0;
      const x = (i) => padX + i * xStep;
      const y = (v) => height - padY - (v / max) * (height - top - padY);

      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = (max * i) / 4;
        grid += `<line class="chart-grid" x1="${padX}" y1="${y(value)}" x2="${width - padX}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${padX - 8}" y="${y(value) + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }
      const path = values.map((v, i) => `${i === 0 ? 'M' : 'L'} ${x(i).toFixed(2)} ${y(v).toFixed(2)}`).join(' ');
      const every = labels.length > 10 ? Math.ceil(labels.length / 10) : 1;
      const xLabels = labels
        .map((label, i) => (i % every === 0
          ? `<text class="chart-label" x="${x(i)}" y="${height - padY + 16}" text-anchor="middle">${label}</text>`
          : ''))
        .join('');
      const points = values
        .map((v, i) => `<circle cx="${x(i)}" cy="${y(v)}" r="3" fill="${color}" />`)
        .join('');
      svg.innerHTML = `${grid}<path d="${path}" fill="none" stroke="${color}" stroke-width="2.5" />${points}${xLabels}`;
    };

    const renderChart = (key) => {
      const chart = charts[key];
      if (!chart) {
        return;
      }
      const svg = document.getElementById(`${key}Chart`);
      const active = activeSeries[key];
      const series = chart.series.find((s) => s.category === active);
      if (series) {
        drawLine(svg, chart.labels, series.data, series.color);
      } else {
        drawLine(svg, chart.labels, chart.totals, '#eef2f5');
      }
    };

    const renderTabs = (key) => {
      const chart = charts[key];
      const tabs = document.querySelector(`.tabs[data-chart="${key}"]`);
      tabs.innerHTML = '';
      const options = [{ category: 'total', label: '全部' }].concat(chart.series);
      options.forEach((option) => {
        const btn = document.createElement('button');
        btn.type = 'button';
        btn.className = 'tab';
        btn.textContent = option.label;
        btn.classList.toggle('active', option.category === activeSeries[key]);
        btn.addEventListener('click', () => {
          activeSeries[key] = option.category;
          renderTabs(key);
          renderChart(key);
        });
        tabs.appendChild(btn);
      });
    };

    const renderDetails = (panel) => {
      text('detailsTitle', `詳細動態 (${panel.event_date})`);
      const wrap = document.getElementById('detailRows');
      wrap.innerHTML = '';
      if (panel.status !== 'found') {
        const empty = document.createElement('div');
        empty.className = 'empty';
        empty.textContent = panel.status === 'no_events' ? '本日無詳細事件' : '詳細事件資料無法取得';
        wrap.appendChild(empty);
        return;
      }
      panel.events.forEach((event) => {
        const row = document.createElement('div');
        row.className = 'detail-row';
        row.innerHTML = '<div class="detail-time"></div><div class="detail-info"></div>';
        row.querySelector('.detail-time').textContent = event.time_window;
        row.querySelector('.detail-info').textContent = event.content;
        wrap.appendChild(row);
      });
    };

    const applySelection = (selection) => {
      if (!selection || selection.token < latestToken) {
        return;
      }
      latestToken = selection.token;
      markSelected(selection.details.report_date);
      renderDetails(selection.details);
    };

    const selectDate = async (date) => {
      const res = await fetch('/api/select', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      applySelection(await res.json());
    };

    const loadDashboard = async () => {
      const days = daysInput.value || '{{DAYS}}';
      const res = await fetch(`/api/dashboard?days=${encodeURIComponent(days)}`);
      if (!res.ok) {
        renderToday(null);
        throw new Error((await res.text()) || 'Unable to load dashboard');
      }
      const data = await res.json();
      daysInput.value = data.days;
      renderToday(data.today);
      renderRows(data.rows, data.selection ? data.selection.details.report_date : null);
      charts.week = data.week_chart;
      charts.month = data.month_chart;
      text('weekTitle', data.week_chart.title);
      text('monthTitle', data.month_chart.title);
      ['week', 'month'].forEach((key) => {
        renderTabs(key);
        renderChart(key);
      });
      applySelection(data.selection);
      setStatus('', '');
    };

    const reload = async () => {
      const res = await fetch('/api/reload', { method: 'POST' });
      const report = await res.json();
      const failures = [report.summary, report.details].filter((s) => !s.ok).map((s) => s.message);
      await loadDashboard();
      if (failures.length) {
        setStatus(failures.join('; '), 'error');
      }
    };

    document.getElementById('applyBtn').addEventListener('click', () => {
      loadDashboard().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('reloadBtn').addEventListener('click', () => {
      reload().catch((err) => setStatus(err.message, 'error'));
    });

    loadDashboard().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
