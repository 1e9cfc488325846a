pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>ETH Updown</title>
<style>
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#0f1117;color:#e1e4e8;min-height:100vh;padding:16px}
h2{font-size:14px;font-weight:600;color:#8b949e;text-transform:uppercase;letter-spacing:1px;margin-bottom:8px}
.wrap{max-width:480px;margin:0 auto}
.panel{background:#161b22;border:1px solid #30363d;border-radius:12px;padding:14px;margin-bottom:14px}
.pool-total{text-align:center;margin-bottom:10px}
.pool-total .label{font-size:13px;font-weight:600;color:#e1e4e8}
.pool-total .value{font-size:22px;font-weight:700;color:#d29922}
.pool-grid{display:grid;grid-template-columns:1fr 1fr;gap:10px}
.pool-box{border-radius:10px;padding:10px;text-align:center;border:1px solid}
.pool-up{background:rgba(35,134,54,.15);border-color:rgba(63,185,80,.4)}
.pool-down{background:rgba(218,54,51,.12);border-color:rgba(248,81,73,.4)}
.pool-box .dir{font-size:15px;font-weight:700}
.pool-up .dir{color:#3fb950}
.pool-down .dir{color:#f85149}
.pool-box .users{font-size:12px;color:#e1e4e8}
.pool-box .amt{font-size:13px;font-weight:600;color:#8b949e}
.pair-bar{display:flex;justify-content:space-between;align-items:center;margin-bottom:14px}
.pair-name{font-size:17px;font-weight:700;color:#e1e4e8}
.pair-price{font-size:14px;font-weight:700;color:#58a6ff}
.pair-change{font-size:12px;font-weight:600;margin-left:6px}
.chg-up{color:#3fb950}
.chg-down{color:#f85149}
.nav-btns{display:flex;gap:8px}
.nav-btn{width:38px;height:38px;border-radius:50%;background:rgba(88,166,255,.15);border:1px solid rgba(88,166,255,.3);color:#e1e4e8;font-size:17px;cursor:pointer;transition:background .15s}
.nav-btn:hover{background:rgba(88,166,255,.35)}
.track-window{overflow:hidden;border-radius:12px}
.track{display:flex;transition:transform .5s ease}
.track.vertical{flex-direction:column;height:430px}
.slide{flex-shrink:0;padding:4px}
.track.horizontal .slide{width:100%}
.track.vertical .slide{height:100%}
.round-card{position:relative;border:2px solid #30363d;border-radius:14px;padding:14px;height:100%;min-height:400px;display:flex;flex-direction:column;background:#161b22;transition:opacity .4s,transform .4s}
.round-card.dim{opacity:.7;transform:scale(.94)}
.card-live{border-color:#3fb950;background:rgba(35,134,54,.08)}
.card-next{border-color:#0052FF;background:rgba(0,82,255,.08)}
.card-later{border-color:#6e7681;background:rgba(110,118,129,.08)}
.card-expired{border-color:#f85149;background:rgba(218,54,51,.06)}
.badge-row{display:flex;align-items:center;gap:6px;margin-bottom:8px}
.badge-dot{width:8px;height:8px;border-radius:50%;background:#6e7681}
.badge-dot.live{background:#3fb950;animation:pulse 1.2s infinite}
.badge-dot.next{background:#0052FF}
@keyframes pulse{50%{opacity:.3}}
.badge-label{font-size:11px;font-weight:700;text-transform:uppercase;color:#e1e4e8}
.badge-id{font-size:11px;color:#8b949e}
.timer{position:absolute;top:12px;right:14px;text-align:right}
.timer .cap{font-size:10px;color:#8b949e}
.timer .val{font-size:14px;font-family:'SF Mono',Monaco,Consolas,monospace;color:#e1e4e8}
.price-sec{text-align:center;margin:14px 0 8px}
.price-sec .cap{font-size:11px;color:#8b949e;text-transform:uppercase}
.price-sec .val{font-size:24px;font-weight:700;color:#e1e4e8}
.price-sec .locked{font-size:11px;color:#8b949e;margin-top:3px}
.prize{text-align:center;margin-bottom:10px}
.prize .cap{font-size:11px;color:#8b949e}
.prize .val{font-size:16px;font-weight:700;color:#d29922}
.choice-box{background:rgba(0,82,255,.15);border:1px solid rgba(0,82,255,.5);border-radius:10px;padding:8px;text-align:center;margin-bottom:10px}
.choice-box .cap{font-size:11px;color:#8b949e}
.choice-box .val{font-size:15px;font-weight:700}
.choice-up{color:#3fb950}
.choice-down{color:#f85149}
.actions{margin-top:auto}
.bet-btn{width:100%;border:none;border-radius:12px;padding:12px;margin-bottom:8px;cursor:pointer;color:#fff;transition:opacity .15s}
.bet-btn:hover{opacity:.85}
.bet-up{background:linear-gradient(90deg,#238636,#2ea043)}
.bet-down{background:linear-gradient(90deg,#da3633,#f85149)}
.bet-btn .big{font-size:18px;font-weight:700}
.bet-btn .sub{font-size:11px;opacity:.9}
.side-panel{border-radius:10px;padding:9px;text-align:center;margin-bottom:8px;background:rgba(110,118,129,.12)}
.side-panel.up-live{background:rgba(35,134,54,.2)}
.side-panel.down-live{background:rgba(218,54,51,.15)}
.side-panel.picked{border:1px solid #58a6ff}
.side-panel .dir{font-size:15px;font-weight:700;color:#8b949e}
.side-panel.up-live .dir{color:#3fb950}
.side-panel.down-live .dir{color:#f85149}
.side-panel .pay{font-size:11px;color:#8b949e}
.side-panel .mine{font-size:11px;color:#58a6ff;margin-top:2px}
.dim-actions{opacity:.55}
.dots{display:flex;justify-content:center;gap:8px;margin:14px 0}
.dot{width:8px;height:8px;border-radius:4px;border:none;background:#30363d;cursor:pointer;transition:all .3s}
.dot.active{background:#0052FF;width:22px}
.events{max-height:160px;overflow-y:auto;font-size:12px;font-family:'SF Mono',Monaco,Consolas,monospace}
.events::-webkit-scrollbar{width:6px}
.events::-webkit-scrollbar-thumb{background:#30363d;border-radius:3px}
.ev{padding:3px 0;border-bottom:1px solid #21262d;display:flex;gap:8px}
.ev-ts{color:#484f58;min-width:55px}
.ev-kind{color:#58a6ff;min-width:42px;font-weight:600}
.ev-warn .ev-kind{color:#d29922}
.ev-detail{color:#c9d1d9}
</style>
</head>
<body>

<div class="wrap">

<!-- Pool stats -->
<div class="panel">
  <div class="pool-total">
    <div class="label">Total Pool</div>
    <div class="value" id="totalPool">0.0000 ETH</div>
  </div>
  <div class="pool-grid">
    <div class="pool-box pool-up">
      <div class="dir">UP</div>
      <div class="users">Users: <span id="upCount">0</span></div>
      <div class="amt" id="upPool">0.0000 ETH</div>
    </div>
    <div class="pool-box pool-down">
      <div class="dir">DOWN</div>
      <div class="users">Users: <span id="downCount">0</span></div>
      <div class="amt" id="downPool">0.0000 ETH</div>
    </div>
  </div>
</div>

<!-- Pair header -->
<div class="pair-bar">
  <div>
    <div class="pair-name" id="pairName">ETH/USD</div>
    <div>
      <span class="pair-price" id="pairPrice">Loading...</span>
      <span class="pair-change" id="pairChange"></span>
    </div>
  </div>
  <div class="nav-btns">
    <button class="nav-btn" onclick="slide('backward')">&#8249;</button>
    <button class="nav-btn" onclick="slide('forward')">&#8250;</button>
  </div>
</div>

<!-- Card track -->
<div class="track-window">
  <div class="track horizontal" id="track"></div>
</div>

<div class="dots" id="dots"></div>

<!-- Activity -->
<div class="panel">
  <h2>Activity</h2>
  <div class="events" id="eventLog"></div>
</div>

</div>

<script>
const API = '';

async function api(path, opts) {
  try {
    const r = await fetch(API + path, opts);
    const j = await r.json();
    if (!r.ok) throw new Error(j.detail || j || r.statusText);
    return j;
  } catch(e) {
    showToast(e.message);
    throw e;
  }
}

function showToast(msg) {
  const d = document.createElement('div');
  d.style.cssText = 'position:fixed;top:16px;right:16px;background:#da3633;color:#fff;padding:10px 16px;border-radius:6px;font-size:13px;z-index:999;max-width:350px';
  d.textContent = msg;
  document.body.appendChild(d);
  setTimeout(() => d.remove(), 4000);
}

async function slide(direction) {
  await api('/api/advance', {method:'POST', headers:{'Content-Type':'application/json'}, body: JSON.stringify({direction})});
  refresh();
}

async function jumpTo(index) {
  await api('/api/select', {method:'POST', headers:{'Content-Type':'application/json'}, body: JSON.stringify({index})});
  refresh();
}

async function placeBet(roundId, direction) {
  await api('/api/bet', {method:'POST', headers:{'Content-Type':'application/json'}, body: JSON.stringify({round_id: roundId, direction})});
  refresh();
}

function cardHtml(v) {
  const statusCls = ['live','next','later','expired'].includes(v.status) ? 'card-' + v.status : '';
  const dotCls = v.status === 'live' ? 'live' : v.status === 'next' ? 'next' : '';

  let timer = '';
  if (v.countdown != null) {
    const cap = v.status === 'later' ? 'Entry starts' : 'Time left';
    timer = `<div class="timer"><div class="cap">${cap}</div><div class="val">${v.countdown}</div></div>`;
  }

  let price = `<div class="price-sec"><div class="cap">${v.price_label}</div><div class="val">${v.price}</div>`;
  if (v.locked) price += `<div class="locked">${v.locked}</div>`;
  price += '</div>';

  let choice = '';
  if (v.choice) {
    const cls = v.choice.direction === 'up' ? 'choice-up' : 'choice-down';
    choice = `<div class="choice-box"><div class="cap">Your Choice</div><div class="val ${cls}">${v.choice.direction.toUpperCase()} - ${v.choice.amount}</div></div>`;
  }

  let actions;
  if (v.can_bet) {
    actions = `
      <button class="bet-btn bet-up" onclick="placeBet('${v.id}','up')"><div class="big">UP</div><div class="sub">${v.up_payout}</div></button>
      <button class="bet-btn bet-down" onclick="placeBet('${v.id}','down')"><div class="big">DOWN</div><div class="sub">${v.down_payout}</div></button>`;
  } else if (v.status === 'live') {
    const upPick = v.choice && v.choice.direction === 'up';
    const downPick = v.choice && v.choice.direction === 'down';
    actions = `
      <div class="side-panel up-live${upPick ? ' picked' : ''}"><div class="dir">UP</div><div class="pay">${v.up_payout}</div>${upPick ? `<div class="mine">Your bet: ${v.choice.amount}</div>` : ''}</div>
      <div class="side-panel down-live${downPick ? ' picked' : ''}"><div class="dir">DOWN</div><div class="pay">${v.down_payout}</div>${downPick ? `<div class="mine">Your bet: ${v.choice.amount}</div>` : ''}</div>`;
  } else {
    actions = `<div class="dim-actions">
      <div class="side-panel"><div class="dir">UP</div><div class="pay">${v.up_payout}</div></div>
      <div class="side-panel"><div class="dir">DOWN</div><div class="pay">${v.down_payout}</div></div>
    </div>`;
  }

  return `<div class="round-card ${statusCls}${v.is_center ? '' : ' dim'}">
    <div class="badge-row"><div class="badge-dot ${dotCls}"></div><span class="badge-label">${v.status_label}</span><span class="badge-id">#${v.id}</span></div>
    ${timer}
    ${price}
    <div class="prize"><div class="cap">Prize Pool:</div><div class="val">${v.prize_pool}</div></div>
    ${choice}
    <div class="actions">${actions}</div>
  </div>`;
}

let layout = 'horizontal';

async function refresh() {
  try {
    const [s, rounds] = await Promise.all([api('/api/status'), api('/api/rounds')]);
    const el = id => document.getElementById(id);

    layout = s.layout;
    el('pairName').textContent = s.header.pair;
    el('pairPrice').textContent = s.header.price_label;
    const chg = el('pairChange');
    chg.textContent = s.header.change_label || '';
    chg.className = 'pair-change ' + (s.header.change_positive ? 'chg-up' : 'chg-down');

    el('totalPool').textContent = s.header.total_pool;
    el('upCount').textContent = s.header.up_count;
    el('downCount').textContent = s.header.down_count;
    el('upPool').textContent = s.header.up_pool;
    el('downPool').textContent = s.header.down_pool;

    const track = el('track');
    track.className = 'track ' + layout;
    track.innerHTML = rounds.map((v, i) =>
      `<div class="slide" onclick="jumpTo(${i})">${cardHtml(v)}</div>`).join('');
    track.style.transform = layout === 'vertical'
      ? `translateY(-${s.current_index * 100}%)`
      : `translateX(-${s.current_index * 100}%)`;

    el('dots').innerHTML = rounds.map((_, i) =>
      `<button class="dot${i === s.current_index ? ' active' : ''}" onclick="jumpTo(${i})"></button>`).join('');
  } catch(e) { /* ignore poll errors */ }
}

async function pollEvents() {
  try {
    const events = await api('/api/events');
    const el = document.getElementById('eventLog');
    el.innerHTML = events.map(e => {
      const cls = e.kind === 'warn' ? 'ev ev-warn' : 'ev';
      return `<div class="${cls}"><span class="ev-ts">${e.ts}</span><span class="ev-kind">${e.kind}</span><span class="ev-detail">${e.detail}</span></div>`;
    }).reverse().join('');
  } catch(e) {}
}

refresh();
pollEvents();
setInterval(() => { refresh(); pollEvents(); }, 1000);
</script>
</body>
</html>
"##;
