//! Server-rendered HTML pages.
//!
//! Plain string rendering; the pages are small enough that a template engine
//! would be more machinery than markup.

pub mod certificate;
pub mod journal;
pub mod participants;
pub mod programs;
pub mod trainings;

/// Minimal HTML escaping for text interpolated into markup or attributes.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8">
<title>{title} — Гигиеническое обучение</title>
<style>
body {{ font-family: "Segoe UI", sans-serif; margin: 24px; color: #1e293b; }}
nav {{ margin-bottom: 20px; }}
nav a {{ margin-right: 14px; }}
table {{ border-collapse: collapse; }}
th, td {{ border: 1px solid #cbd5e1; padding: 6px 10px; text-align: left; }}
th {{ background: #f1f5f9; }}
form.inline {{ display: inline; }}
label {{ display: block; margin-top: 10px; }}
input, select {{ margin-top: 2px; }}
.actions {{ margin-top: 16px; }}
</style>
</head>
<body>
<nav>
<a href="/trainings">Обучения</a>
<a href="/participants">Слушатели</a>
<a href="/programs">Программы</a>
<a href="/journal">Журнал</a>
</nav>
<h1>{title}</h1>
{body}
</body>
</html>"#,
        title = escape(title),
        body = body,
    )
}

/// Inline POST form used for delete buttons.
pub fn delete_button(action: &str) -> String {
    format!(
        r#"<form class="inline" method="post" action="{}"><button type="submit">Удалить</button></form>"#,
        action
    )
}
