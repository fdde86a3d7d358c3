//! Static HTML viewer embedding Mermaid markup; rendering happens in the browser.

/// Client-side renderer, pinned to one major version.
pub const MERMAID_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/mermaid@11/dist/mermaid.min.js";

/// Wraps `markup` verbatim in a `<div class="mermaid">` container.
pub fn render_html(title: &str, markup: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>{title}</title>
  <style>
    body {{ background: white; margin: 0; padding: 24px;
           font-family: Inter, system-ui, -apple-system, Segoe UI, Roboto, Arial; }}
  </style>
  <script src="{MERMAID_SCRIPT_URL}"></script>
  <script>mermaid.initialize({{ startOnLoad: true, theme: "default" }});</script>
</head>
<body>
<div class="mermaid">
{markup}
</div>
</body>
</html>"#,
        title = escape_html(title),
    )
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
