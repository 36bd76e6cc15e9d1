//! Static portfolio pages.

use axum::response::Html;

const HOME_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Santiago Hernandez Pontiles</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 720px; }
    h1 { margin: 0 0 .5rem 0; }
    nav a { margin-right: 1rem; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; margin: 1rem 0; }
  </style>
</head>
<body>
  <h1>Santiago Hernandez Pontiles</h1>
  <p>Software developer. Welcome to my portfolio.</p>
  <nav>
    <a href="/">Home</a>
    <a href="/contact">Contact</a>
  </nav>
  <div class="card">
    <h2>Projects</h2>
    <p>A selection of personal and professional work. Get in touch through the
    <a href="/contact">contact form</a> for details or collaboration.</p>
  </div>
</body>
</html>
"#;

const CONTACT_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Contact</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 540px; }
    label { display: block; margin-top: 1rem; }
    input, textarea { width: 100%; padding: .5rem; margin-top: .25rem; box-sizing: border-box; }
    textarea { min-height: 8rem; }
    button { margin-top: 1rem; padding: .5rem 1.5rem; }
    .form-status { display: none; margin-top: 1rem; padding: .5rem; border-radius: 4px; }
    .form-status.success { display: block; background: #d9f2e0; color: #1a7f37; }
    .form-status.error { display: block; background: #ffe0dd; color: #cf222e; }
    .form-status.loading { display: block; background: #f6f8fa; color: #57606a; }
  </style>
</head>
<body>
  <h1>Contact</h1>
  <p><a href="/">&larr; back</a></p>
  <form id="contact-form">
    <label>Name <input id="name" type="text" required /></label>
    <label>Email <input id="email" type="email" required /></label>
    <label>Message <textarea id="message" required></textarea></label>
    <button id="submit-btn" type="submit">Send</button>
  </form>
  <div id="form-status" class="form-status"></div>
  <script>
    const form = document.getElementById('contact-form');
    const submitBtn = document.getElementById('submit-btn');
    const statusDiv = document.getElementById('form-status');

    function showStatus(message, type) {
      statusDiv.textContent = message;
      statusDiv.className = 'form-status ' + type;
    }

    form.addEventListener('submit', async (e) => {
      e.preventDefault();
      const payload = {
        name: document.getElementById('name').value.trim(),
        email: document.getElementById('email').value.trim(),
        message: document.getElementById('message').value.trim(),
      };
      if (!payload.name || !payload.email || !payload.message) {
        showStatus('Please fill in all fields.', 'error');
        return;
      }
      submitBtn.disabled = true;
      showStatus('Sending your message...', 'loading');
      try {
        const res = await fetch('/send-email', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(payload),
        });
        const data = await res.json();
        showStatus(data.message, data.success ? 'success' : 'error');
        if (data.success) form.reset();
      } catch (err) {
        showStatus('Could not reach the server. Please try again later.', 'error');
      } finally {
        submitBtn.disabled = false;
      }
    });
  </script>
</body>
</html>
"#;

pub async fn home() -> Html<&'static str> {
  Html(HOME_HTML)
}

pub async fn contact() -> Html<&'static str> {
  Html(CONTACT_HTML)
}
