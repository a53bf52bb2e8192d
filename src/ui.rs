//! Page shell and the small components both pages are built from.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Employees,
    Attendance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Danger,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "card-primary",
            Self::Success => "card-success",
            Self::Danger => "card-danger",
        }
    }
}

pub fn render_layout(title: &str, active: NavPage, body: &str) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", &escape(title))
        .replace("{{NAV}}", &navbar(active))
        .replace("{{BODY}}", body)
}

pub fn navbar(active: NavPage) -> String {
    let link = |href: &str, label: &str, page: NavPage| {
        let class = if page == active { "nav-link active" } else { "nav-link" };
        format!(r#"<a class="{class}" href="{href}">{label}</a>"#)
    };
    format!(
        r#"<nav class="navbar"><div class="brand">HRMS Lite</div><div class="nav-links">{}{}</div></nav>"#,
        link("/", "Employees", NavPage::Employees),
        link("/attendance", "Attendance", NavPage::Attendance),
    )
}

pub fn page_header(title: &str, subtitle: &str) -> String {
    format!(
        r#"<header class="page-header"><h2>{}</h2><p class="subtitle">{}</p></header>"#,
        escape(title),
        escape(subtitle)
    )
}

pub fn empty_state(message: &str) -> String {
    format!(r#"<div class="empty-state">{}</div>"#, escape(message))
}

pub fn error_banner(message: &str) -> String {
    format!(r#"<div class="error-banner" role="alert">{}</div>"#, escape(message))
}

pub fn stat_card(label: &str, value: usize, tone: Tone) -> String {
    format!(
        r#"<div class="card {}"><div class="card-value">{value}</div><div class="card-label">{}</div></div>"#,
        tone.class(),
        escape(label)
    )
}

/// Submit button whose label switches to `busy_label` while the form posts.
pub fn submit_button(label: &str, busy_label: &str) -> String {
    format!(
        r#"<button class="btn btn-dark" type="submit" data-busy-label="{}">{}</button>"#,
        escape(busy_label),
        escape(label)
    )
}

/// Table with a dark header row; `rows` are already rendered `<tr>` cells.
pub fn table(headers: &[&str], rows: &[String]) -> String {
    let mut html = String::from(r#"<div class="table-wrap"><table><thead><tr>"#);
    for header in headers {
        html.push_str(&format!("<th>{}</th>", escape(header)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str(row);
    }
    html.push_str("</tbody></table></div>");
    html
}

pub fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    )
}

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} | HRMS Lite</title>
  <style>
    :root {
      --ink: #0f172a;
      --muted: #64748b;
      --line: #e2e8f0;
      --night: #020617;
      --accent: #fb7185;
      --accent-strong: #f43f5e;
      --card: #ffffff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: #f8fafc;
      color: var(--ink);
      font-family: "Inter", "Segoe UI", "Helvetica Neue", sans-serif;
    }

    .navbar {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 16px 32px;
      background: var(--night);
      color: white;
    }

    .brand {
      font-size: 1.25rem;
      font-weight: 700;
      color: var(--accent);
    }

    .nav-links {
      display: flex;
      gap: 24px;
    }

    .nav-link {
      color: #cbd5e1;
      text-decoration: none;
      font-size: 0.9rem;
      font-weight: 500;
      padding-bottom: 4px;
      border-bottom: 2px solid transparent;
    }

    .nav-link:hover {
      color: white;
    }

    .nav-link.active {
      color: white;
      border-bottom-color: var(--accent-strong);
    }

    main {
      max-width: 64rem;
      margin: 0 auto;
      padding: 32px 16px;
    }

    .page-header {
      margin-bottom: 24px;
    }

    .page-header h2 {
      margin: 0;
      font-size: 1.5rem;
      font-weight: 600;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .panel {
      background: var(--card);
      border-radius: 12px;
      box-shadow: 0 1px 2px rgba(15, 23, 42, 0.06);
      border: 1px solid var(--line);
      padding: 24px;
      margin-bottom: 32px;
    }

    .panel h3 {
      margin: 0 0 16px;
      font-size: 1.1rem;
    }

    .section-title {
      margin: 0 0 12px;
      font-size: 0.8rem;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.06em;
      color: var(--muted);
    }

    section {
      margin-bottom: 32px;
    }

    .grid {
      display: grid;
      gap: 12px;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      margin-bottom: 16px;
    }

    input,
    select {
      font: inherit;
      font-size: 0.9rem;
      padding: 8px 12px;
      border-radius: 8px;
      border: 1px solid #cbd5e1;
      background: white;
    }

    input:focus,
    select:focus {
      outline: none;
      border-color: var(--accent);
      box-shadow: 0 0 0 3px #ffe4e6;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 8px;
      padding: 8px 16px;
      font: inherit;
      font-size: 0.9rem;
      font-weight: 500;
      cursor: pointer;
      text-decoration: none;
      display: inline-flex;
      align-items: center;
    }

    .btn:disabled {
      cursor: not-allowed;
      opacity: 0.7;
    }

    .btn-dark {
      background: var(--ink);
      color: white;
    }

    .btn-danger {
      background: var(--accent-strong);
      color: white;
      font-size: 0.75rem;
      padding: 6px 12px;
    }

    .btn-light {
      background: var(--line);
      color: #334155;
      font-size: 0.75rem;
      padding: 8px 12px;
    }

    .form-error {
      margin: 0 0 12px;
      color: #dc2626;
      font-size: 0.9rem;
    }

    .error-banner {
      margin-bottom: 16px;
      padding: 12px 16px;
      border-radius: 8px;
      border: 1px solid #fecaca;
      background: #fef2f2;
      color: #b91c1c;
      font-size: 0.9rem;
    }

    .load-error {
      color: #dc2626;
      font-size: 0.9rem;
    }

    .empty-state {
      padding: 32px;
      text-align: center;
      color: var(--muted);
      border: 1px dashed #cbd5e1;
      border-radius: 12px;
      background: white;
      font-size: 0.9rem;
    }

    .cards {
      display: grid;
      gap: 16px;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      margin-bottom: 32px;
    }

    .card {
      border-radius: 12px;
      padding: 16px 20px;
    }

    .card-value {
      font-size: 1.9rem;
      font-weight: 700;
    }

    .card-label {
      margin-top: 4px;
      font-size: 0.75rem;
      font-weight: 500;
      text-transform: uppercase;
      letter-spacing: 0.06em;
      opacity: 0.8;
    }

    .card-primary {
      background: var(--night);
      color: white;
    }

    .card-primary .card-value {
      color: var(--accent);
    }

    .card-success {
      background: #ecfdf5;
      color: #064e3b;
      border: 1px solid #d1fae5;
    }

    .card-danger {
      background: #fff1f2;
      color: #881337;
      border: 1px solid #ffe4e6;
    }

    .table-wrap {
      overflow: hidden;
      border-radius: 12px;
      border: 1px solid var(--line);
      background: white;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th {
      background: var(--night);
      color: white;
      text-align: left;
      font-size: 0.75rem;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.06em;
      padding: 12px 16px;
    }

    td {
      padding: 12px 16px;
      font-size: 0.9rem;
      border-top: 1px solid #f1f5f9;
    }

    tbody tr:nth-child(even) {
      background: #f8fafc;
    }

    .badge {
      display: inline-flex;
      border-radius: 999px;
      padding: 4px 12px;
      font-size: 0.75rem;
      font-weight: 600;
    }

    .badge-info {
      background: #f0f9ff;
      color: #0369a1;
    }

    .badge-present {
      background: #ecfdf5;
      color: #047857;
    }

    .badge-absent {
      background: #fff1f2;
      color: #be123c;
    }

    .records-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      margin-bottom: 12px;
    }

    .records-header .section-title {
      margin: 0;
    }

    .filters {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 8px;
    }

    .filters input,
    .filters select {
      font-size: 0.75rem;
      height: 36px;
    }

    .inline {
      display: inline;
      margin: 0;
    }
  </style>
</head>
<body>
  {{NAV}}
  <main>
{{BODY}}
  </main>
  <script>
    document.querySelectorAll('form').forEach((form) => {
      form.addEventListener('submit', (event) => {
        const prompt = form.dataset.confirm;
        if (prompt && !window.confirm(prompt)) {
          event.preventDefault();
          return;
        }
        const button = form.querySelector('button[data-busy-label]');
        if (button) {
          button.textContent = button.dataset.busyLabel;
          button.disabled = true;
        }
      });
    });

    document.querySelectorAll('form[data-autosubmit]').forEach((form) => {
      form.querySelectorAll('input, select').forEach((field) => {
        field.addEventListener('change', () => form.submit());
      });
    });
  </script>
</body>
</html>
"#;
