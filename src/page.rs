use crate::form::{TokenConfig, COUNT_RANGE, LENGTH_RANGE};

const TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Unique Token ID Generator</title>
<style>
  body { font-family: sans-serif; display: flex; justify-content: center; padding: 2rem;
         background: linear-gradient(to right, #a855f7, #ec4899, #ef4444); min-height: 100vh; margin: 0; }
  main { background: #fff; border-radius: 8px; padding: 1.5rem; width: 90%; max-width: 56rem; }
  .controls { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
  #tokens { margin-top: 1.5rem; background: #f3f4f6; padding: 1rem; max-height: 16rem; overflow-y: auto; }
  .token { display: flex; justify-content: space-between; background: #fff; padding: .5rem; margin-bottom: .5rem; }
  .token span { font-family: monospace; }
  #error { color: #b91c1c; }
</style>
</head>
<body>
<main>
  <h1>Unique Token ID Generator</h1>
  <div class="controls">
    <label><input id="length" type="range" min="{{LENGTH_MIN}}" max="{{LENGTH_MAX}}" value="{{LENGTH}}"> Length: <span id="length-value">{{LENGTH}}</span></label>
    <label><input id="numbers" type="checkbox"{{NUMBERS}}> Allow Numbers</label>
    <label><input id="symbols" type="checkbox"{{SYMBOLS}}> Allow Characters</label>
    <label>Tokens: <input id="count" type="number" min="{{COUNT_MIN}}" max="{{COUNT_MAX}}" value="{{COUNT}}"></label>
  </div>
  <p id="error"></p>
  <section id="tokens"><h2>Generated Tokens:</h2><div id="list"></div></section>
</main>
<script>
const $ = (id) => document.getElementById(id);
let latest = 0;

async function send(method, body) {
  const seq = ++latest;
  const res = await fetch("/form", {
    method,
    headers: { "Content-Type": "application/json" },
    body: body && JSON.stringify(body),
  });
  const data = await res.json();
  if (seq !== latest) return;
  $("error").textContent = res.ok ? "" : data.error;
  if (res.ok) render(data.tokens);
}

function change() {
  $("length-value").textContent = $("length").value;
  send("PATCH", {
    length: Number($("length").value),
    numbers: $("numbers").checked,
    symbols: $("symbols").checked,
    count: Number($("count").value),
  });
}

function render(tokens) {
  const list = $("list");
  list.replaceChildren();
  tokens.forEach((token, index) => {
    const row = document.createElement("div");
    row.className = "token";
    const text = document.createElement("span");
    text.textContent = `${index + 1}: ${token}`;
    const button = document.createElement("button");
    button.textContent = "Copy";
    button.onclick = () => copy(token);
    row.append(text, button);
    list.append(row);
  });
}

async function copy(token) {
  try {
    await navigator.clipboard.writeText(token);
  } catch (err) {
    alert(`Copy failed: ${err}`);
    return;
  }
  const res = await fetch("/copy", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ token }),
  });
  const notice = await res.json();
  alert(notice.message);
}

["length", "numbers", "symbols", "count"].forEach((id) => $(id).addEventListener("input", change));
send("GET");
</script>
</body>
</html>
"#;

/// The form page, pre-filled with `config`.
pub fn render(config: &TokenConfig) -> String {
    let checked = |on: bool| if on { " checked" } else { "" };
    TEMPLATE
        .replace("{{LENGTH_MIN}}", &LENGTH_RANGE.start().to_string())
        .replace("{{LENGTH_MAX}}", &LENGTH_RANGE.end().to_string())
        .replace("{{COUNT_MIN}}", &COUNT_RANGE.start().to_string())
        .replace("{{COUNT_MAX}}", &COUNT_RANGE.end().to_string())
        .replace("{{LENGTH}}", &config.length.to_string())
        .replace("{{COUNT}}", &config.count.to_string())
        .replace("{{NUMBERS}}", checked(config.numbers))
        .replace("{{SYMBOLS}}", checked(config.symbols))
}
