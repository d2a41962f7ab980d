use crate::models::StatusResponse;

pub fn render_index(status: &StatusResponse) -> String {
    INDEX_HTML
        .replace("{{SESSION}}", &status.session_display)
        .replace("{{TODAY}}", &status.today_display)
        .replace("{{TOTAL}}", &status.total_display)
        .replace("{{SESSIONS}}", &status.sessions_count.to_string())
        .replace("{{GOAL}}", &status.goal_display)
        .replace("{{PROGRESS}}", &status.progress_percent.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Server Support Timer</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --ok: #2d7a4b;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
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

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .timer-card {
      background: white;
      border-radius: 20px;
      padding: 28px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 18px;
      text-align: center;
    }

    .timer-display {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(3rem, 9vw, 4.6rem);
      font-weight: 600;
      color: var(--accent-2);
      letter-spacing: 0.04em;
    }

    .progress-track {
      height: 14px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      width: 0%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), var(--accent-2));
      transition: width 400ms ease;
    }

    .progress-fill.done {
      background: linear-gradient(90deg, var(--ok), var(--accent-2));
    }

    .progress-text {
      font-size: 0.95rem;
      color: #6b645d;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
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

    button:disabled {
      opacity: 0.5;
      cursor: default;
    }

    .btn-start {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-pause {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .btn-reset {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .popup {
      position: fixed;
      right: 24px;
      bottom: 24px;
      max-width: 320px;
      background: white;
      border-radius: 18px;
      border: 1px solid rgba(47, 72, 88, 0.12);
      box-shadow: var(--shadow);
      padding: 18px 22px;
      display: grid;
      gap: 6px;
      transform: translateY(24px);
      opacity: 0;
      pointer-events: none;
      transition: transform 300ms ease, opacity 300ms ease;
    }

    .popup.show {
      transform: translateY(0);
      opacity: 1;
    }

    .popup h4 {
      margin: 0;
      font-size: 1.05rem;
      color: var(--accent);
    }

    .popup p {
      margin: 0;
      font-size: 0.95rem;
      color: #5f5c57;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
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

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Server Support Timer</h1>
      <p class="subtitle">Keep the tab open, support the server, unlock daily milestones.</p>
    </header>

    <section class="timer-card">
      <div id="timer" class="timer-display">{{SESSION}}</div>
      <div class="progress-track">
        <div id="progress-fill" class="progress-fill" style="width: {{PROGRESS}}%"></div>
      </div>
      <div id="progress-text" class="progress-text">{{PROGRESS}}% of daily goal</div>
    </section>

    <section class="actions">
      <form id="start-form" method="post" action="/timer/start">
        <button class="btn-start" id="start-btn" type="submit">Start Supporting</button>
      </form>
      <form id="pause-form" method="post" action="/timer/pause">
        <button class="btn-pause" id="pause-btn" type="submit">Pause</button>
      </form>
      <form id="reset-form" method="post" action="/timer/reset">
        <button class="btn-reset" id="reset-btn" type="submit">Reset</button>
      </form>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Today</span>
        <span id="today" class="value">{{TODAY}}</span>
      </div>
      <div class="stat">
        <span class="label">Total</span>
        <span id="total" class="value">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Sessions</span>
        <span id="sessions" class="value">{{SESSIONS}}</span>
      </div>
      <div class="stat">
        <span class="label">Daily goal</span>
        <span id="goal" class="value">{{GOAL}}</span>
      </div>
    </section>

    <p class="hint">Daily counters reset at midnight (server time). The current session survives a restart until you reset it.</p>
  </main>

  <div class="popup" id="popup">
    <h4 id="popup-title"></h4>
    <p id="popup-message"></p>
  </div>

  <script>
    const timerEl = document.getElementById('timer');
    const progressFill = document.getElementById('progress-fill');
    const progressText = document.getElementById('progress-text');
    const todayEl = document.getElementById('today');
    const totalEl = document.getElementById('total');
    const sessionsEl = document.getElementById('sessions');
    const goalEl = document.getElementById('goal');
    const startBtn = document.getElementById('start-btn');
    const pauseBtn = document.getElementById('pause-btn');
    const popup = document.getElementById('popup');
    const popupTitle = document.getElementById('popup-title');
    const popupMessage = document.getElementById('popup-message');

    const POPUP_MS = 4000;
    const popupQueue = [];
    let popupTimer = null;

    const showNextPopup = () => {
      if (popupTimer || popupQueue.length === 0) {
        return;
      }
      const note = popupQueue.shift();
      popupTitle.textContent = '\u{1F3C6} ' + note.title;
      popupMessage.textContent = note.message;
      popup.classList.add('show');
      popupTimer = setTimeout(() => {
        popup.classList.remove('show');
        popupTimer = null;
        setTimeout(showNextPopup, 350);
      }, POPUP_MS);
    };

    const updateUI = (status) => {
      timerEl.textContent = status.session_display;
      progressFill.style.width = status.progress_percent + '%';
      progressFill.classList.toggle('done', status.progress_percent >= 100);
      progressText.textContent = status.progress_percent + '% of daily goal';
      todayEl.textContent = status.today_display;
      totalEl.textContent = status.total_display;
      sessionsEl.textContent = status.sessions_count;
      goalEl.textContent = status.goal_display;
      startBtn.disabled = status.running;
      pauseBtn.disabled = !status.running;
      startBtn.textContent = status.running
        ? 'Running...'
        : status.session_seconds > 0 ? 'Resume' : 'Start Supporting';

      for (const note of status.unlocked) {
        popupQueue.push(note);
      }
      showNextPopup();
    };

    const refresh = async () => {
      const res = await fetch('/api/status');
      if (!res.ok) {
        throw new Error('Unable to load status');
      }
      updateUI(await res.json());
    };

    const send = async (action) => {
      const res = await fetch('/api/timer', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ action })
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      updateUI(await res.json());
    };

    const wire = (formId, action) => {
      document.getElementById(formId).addEventListener('submit', (event) => {
        event.preventDefault();
        send(action).catch((err) => console.error(err));
      });
    };

    wire('start-form', 'start');
    wire('pause-form', 'pause');
    wire('reset-form', 'reset');

    setInterval(() => {
      refresh().catch((err) => console.error(err));
    }, 1000);
    refresh().catch((err) => console.error(err));
  </script>
</body>
</html>
"#;
