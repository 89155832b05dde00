// The single-page form UI.
//
// Self-contained HTML/CSS/JS served at `/`. The in-page script is the
// browser-side rendition of the Form Controller contract: required-field
// validation inline, one in-flight request (AbortController supersedes),
// live incremental rendering, split-on-complete, click-to-copy cards.

use axum::response::Html;

pub async fn page_handler() -> Html<&'static str> {
    Html(PAGE)
}

const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Bioline — LinkedIn bio generator</title>
<style>
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;background:#f8fafc;color:#0f172a;display:flex;flex-direction:column;align-items:center;min-height:100vh;padding:48px 16px}
h1{font-size:2.5rem;font-weight:700;max-width:900px;text-align:center;color:#0f172a}
form{width:100%;max-width:576px;margin-top:40px;display:flex;flex-direction:column;gap:28px}
label{display:flex;align-items:center;font-weight:600;font-size:14px;margin-bottom:8px}
.num{background:#000;color:#fff;border-radius:50%;width:24px;height:24px;display:inline-flex;align-items:center;justify-content:center;margin-right:8px;font-size:12px}
input{width:100%;padding:10px 12px;border:1px solid #cbd5e1;border-radius:6px;font-size:14px;outline:none;background:#fff}
input:focus{border-color:#0f172a}
.field-error{color:#dc2626;font-size:13px;margin-top:6px;min-height:16px}
button{width:100%;padding:12px;background:#0f172a;color:#fff;border:none;border-radius:6px;font-size:15px;font-weight:600;cursor:pointer}
button:disabled{opacity:.6;cursor:wait}
.notice{color:#dc2626;font-size:14px;margin-top:16px;text-align:center}
#results{width:100%;max-width:576px;margin:40px 0}
#results h2{font-size:1.875rem;font-weight:700;text-align:center;margin-bottom:32px}
#live{white-space:pre-wrap;background:#fff;border:1px solid #e2e8f0;border-radius:12px;padding:16px;font-size:14px;line-height:1.6}
.card{background:#fff;border:1px solid #e2e8f0;border-radius:12px;box-shadow:0 1px 3px rgba(0,0,0,.08);padding:16px;margin-bottom:32px;cursor:copy;white-space:pre-wrap;font-size:14px;line-height:1.6;transition:background .15s}
.card:hover{background:#f1f5f9}
#toast{position:fixed;bottom:32px;left:50%;transform:translateX(-50%);background:#0f172a;color:#fff;padding:10px 20px;border-radius:8px;font-size:14px;opacity:0;transition:opacity .2s;pointer-events:none}
#toast.show{opacity:1}
.hidden{display:none}
</style>
</head>
<body>
<h1>Generate your next LinkedIn bio using ChatGPT</h1>
<form id="bio-form" novalidate>
  <div>
    <label for="industry"><span class="num">1</span>Industry</label>
    <input id="industry" name="industry" placeholder="[Outline your industry or field] e.g. EdTech">
    <div class="field-error" id="industry-error"></div>
  </div>
  <div>
    <label for="jobTitle"><span class="num">2</span>Job Title</label>
    <input id="jobTitle" name="jobTitle" placeholder="[Specify your job title] e.g. Software Engineer">
    <div class="field-error" id="jobTitle-error"></div>
  </div>
  <div>
    <label for="skills"><span class="num">3</span>Skills</label>
    <input id="skills" name="skills" placeholder="[Mention 3-5 core skills you'd like to feature] e.g. React.js, NextJS">
    <div class="field-error"></div>
  </div>
  <div>
    <label for="achievements"><span class="num">4</span>Experiences</label>
    <input id="achievements" name="achievements" placeholder="[Summarize 2-3 remarkable experiences or achievements]">
    <div class="field-error"></div>
  </div>
  <div>
    <label for="objectives"><span class="num">5</span>Objectives</label>
    <input id="objectives" name="objectives" placeholder="e.g. networking, job hunting, personal brand development">
    <div class="field-error"></div>
  </div>
  <button id="generate" type="submit">Generate your bio &rarr;</button>
  <div class="notice hidden" id="notice"></div>
</form>
<div id="results" class="hidden">
  <h2>Your generated bios</h2>
  <div id="live" class="hidden"></div>
  <div id="cards"></div>
</div>
<div id="toast">Bio copied to clipboard</div>
<script>
const FIELDS = ["industry", "jobTitle", "skills", "achievements", "objectives"];
const REQUIRED = { industry: "Industry is required", jobTitle: "Job title is required" };

const form = document.getElementById("bio-form");
const button = document.getElementById("generate");
const notice = document.getElementById("notice");
const results = document.getElementById("results");
const live = document.getElementById("live");
const cards = document.getElementById("cards");
const toast = document.getElementById("toast");

let controller = null;
let requestId = 0;
let toastTimer = null;

form.addEventListener("submit", async (e) => {
  e.preventDefault();

  notice.classList.add("hidden");
  for (const name of Object.keys(REQUIRED)) {
    document.getElementById(name + "-error").textContent = "";
  }

  const body = {};
  for (const name of FIELDS) {
    body[name] = document.getElementById(name).value;
  }

  let valid = true;
  for (const [name, message] of Object.entries(REQUIRED)) {
    if (!body[name]) {
      document.getElementById(name + "-error").textContent = message;
      valid = false;
    }
  }
  if (!valid) return;

  // Supersede any in-flight request: abort it and bump the request id so a
  // straggling read loop cannot touch the display.
  if (controller) controller.abort();
  controller = new AbortController();
  const id = ++requestId;

  button.disabled = true;
  button.textContent = "Please wait";
  cards.innerHTML = "";
  live.textContent = "";
  live.classList.remove("hidden");
  results.classList.remove("hidden");

  try {
    const res = await fetch("/api/chat", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(body),
      signal: controller.signal,
    });

    if (!res.ok) {
      fail(id, "Something went wrong generating your bio. Please try again.");
      return;
    }

    const reader = res.body.getReader();
    const decoder = new TextDecoder();
    let text = "";

    while (true) {
      const { done, value } = await reader.read();
      if (id !== requestId) return; // superseded mid-stream
      if (done) break;
      text += decoder.decode(value, { stream: true });
      live.textContent = text;
    }

    renderCards(text);
    live.classList.add("hidden");
    results.scrollIntoView({ behavior: "smooth" });
  } catch (err) {
    // Abort of a superseded request lands here too; only the current
    // request surfaces a notice. Partial text is discarded, not split.
    fail(id, "The connection was interrupted. Please try again.");
  } finally {
    if (id === requestId) {
      button.disabled = false;
      button.innerHTML = "Generate your bio &rarr;";
    }
  }
});

function fail(id, message) {
  if (id !== requestId) return;
  live.textContent = "";
  live.classList.add("hidden");
  notice.textContent = message;
  notice.classList.remove("hidden");
}

function renderCards(text) {
  const bios = text.substring(text.indexOf("1") + 3).split("2.");
  for (const bio of bios) {
    const card = document.createElement("div");
    card.className = "card";
    card.textContent = bio;
    card.addEventListener("click", () => {
      navigator.clipboard.writeText(bio);
      showToast();
    });
    cards.appendChild(card);
  }
}

function showToast() {
  toast.classList.add("show");
  clearTimeout(toastTimer);
  toastTimer = setTimeout(() => toast.classList.remove("show"), 2000);
}
</script>
</body>
</html>
"##;
