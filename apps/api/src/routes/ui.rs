//! The browser shell: one embedded page with the description form, trigger
//! button, status region, and conditional download link. All behavior goes
//! through the JSON API; the page itself is static.

use axum::response::Html;

/// GET /
pub async fn shell_handler() -> Html<&'static str> {
    Html(SHELL_PAGE)
}

const SHELL_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>WebCraft AI</title>
<style>
  body {
    margin: 0;
    min-height: 100vh;
    font-family: Inter, system-ui, sans-serif;
    color: #e5e7eb;
    background:
      radial-gradient(circle at 10% 10%, rgba(99,102,241,0.15), transparent 40%),
      radial-gradient(circle at 90% 90%, rgba(249,115,22,0.12), transparent 45%),
      #020617;
  }
  .shell { max-width: 880px; margin: auto; padding: 2.5rem 1.4rem 3.5rem; }
  .hero-title {
    font-size: 2.35rem;
    font-weight: 800;
    letter-spacing: -0.02em;
    text-align: center;
  }
  .block-label {
    font-size: 0.85rem;
    font-weight: 600;
    margin-top: 1.8rem;
    text-transform: uppercase;
    letter-spacing: 0.04em;
    opacity: 0.85;
  }
  textarea {
    width: 100%;
    height: 140px;
    margin-top: 0.6rem;
    padding: 0.9rem 1rem;
    border-radius: 1.1rem;
    border: 1px solid rgba(148,163,184,0.55);
    background: #020617;
    color: #e5e7eb;
    font-size: 0.9rem;
    box-sizing: border-box;
  }
  textarea:focus {
    outline: none;
    border-color: rgba(99,102,241,0.9);
    box-shadow: 0 0 0 1px rgba(99,102,241,0.35);
  }
  button {
    margin-top: 1rem;
    border: none;
    border-radius: 999px;
    padding: 0.6rem 1.8rem;
    font-weight: 600;
    color: #fff;
    background: linear-gradient(135deg, #4f46e5, #06b6d4);
    cursor: pointer;
  }
  button:hover { transform: translateY(-1px); }
  button:disabled { opacity: 0.6; cursor: default; }
  #status { margin-top: 1.2rem; min-height: 1.4rem; font-size: 0.9rem; }
  #status.warning { color: #facc15; }
  #status.info    { color: #94a3b8; }
  #status.success { color: #4ade80; }
  #status.error   { color: #f87171; }
  #download {
    display: inline-block;
    margin-top: 1rem;
    color: #67e8f9;
    font-weight: 600;
  }
</style>
</head>
<body>
<div class="shell">
  <div class="hero-title">Build Websites from a Prompt</div>
  <div class="block-label">Website Details</div>
  <textarea id="description" placeholder="Describe the website you want to generate"></textarea>
  <br>
  <button id="generate">Generate Website</button>
  <div id="status"></div>
  <a id="download" hidden download="website.zip">Download Website</a>
</div>
<script>
  let sessionId = null;
  const statusEl = document.getElementById('status');
  const generateBtn = document.getElementById('generate');
  const downloadEl = document.getElementById('download');

  function setStatus(kind, message) {
    statusEl.className = kind;
    statusEl.textContent = message;
  }

  generateBtn.addEventListener('click', async () => {
    const description = document.getElementById('description').value;
    if (!description.trim()) {
      setStatus('warning', 'Please enter a description.');
      return;
    }

    generateBtn.disabled = true;
    setStatus('info', 'Building your website…');
    try {
      const res = await fetch('/api/v1/sites/generate', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ description: description, session_id: sessionId }),
      });
      const body = await res.json();
      if (!res.ok) {
        setStatus('error', body.error.message);
        return;
      }
      sessionId = body.session_id;
      downloadEl.href = '/api/v1/sites/' + sessionId + '/archive';
      downloadEl.hidden = false;
      setStatus('success', 'Website ready');
    } catch (err) {
      setStatus('error', 'Generation failed: ' + err);
    } finally {
      generateBtn.disabled = false;
    }
  });
</script>
</body>
</html>
"#;
