//! HTML rendering: a typed view per page wrapped in a shared layout shell.
//!
//! Each route binds to a named struct implementing [`PageView`], so a
//! missing field is a compile error rather than a blank spot in the page.

pub mod pages;

use axum::response::Html;

use crate::flash::{Notice, NoticeLevel};

/// View-data contract every page implements: a document title and a body
/// fragment. The layout shell supplies everything around the body.
pub trait PageView {
    fn title(&self) -> String;
    fn body(&self) -> String;
}

/// Renders a view inside the layout shell, with any pending notices.
pub fn page<V: PageView + ?Sized>(view: &V, notices: &[Notice]) -> Html<String> {
    Html(layout(&view.title(), &view.body(), notices))
}

fn layout(title: &str, body: &str, notices: &[Notice]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <script defer src="https://unpkg.com/alpinejs@3.x.x/dist/cdn.min.js"></script>
</head>
<body class="bg-gray-50 text-gray-900 flex min-h-screen flex-col">
  <nav class="bg-white shadow">
    <div class="mx-auto flex max-w-5xl items-center justify-between px-4 py-3">
      <a href="/" class="text-lg font-semibold">Joshua Nizamudin</a>
      <div class="space-x-4 text-sm">
        <a href="/" class="hover:text-blue-600">Home</a>
        <a href="/business/" class="hover:text-blue-600">Business</a>
        <a href="/developer/" class="hover:text-blue-600">Developer</a>
        <a href="/projects/" class="hover:text-blue-600">Projects</a>
        <a href="/contact/" class="hover:text-blue-600">Contact</a>
      </div>
    </div>
  </nav>
{notices}  <main class="mx-auto w-full max-w-5xl flex-1 px-4 py-8">
{body}
  </main>
  <footer class="bg-white shadow-inner">
    <div class="mx-auto max-w-5xl px-4 py-4 text-sm text-gray-500">
      <p>&copy; Joshua Nizamudin &middot; <a href="mailto:jnizamudin@gmail.com" class="hover:text-blue-600">jnizamudin@gmail.com</a></p>
    </div>
  </footer>
</body>
</html>
"#,
        title = escape(title),
        notices = notices_block(notices),
        body = body,
    )
}

fn notices_block(notices: &[Notice]) -> String {
    if notices.is_empty() {
        return String::new();
    }
    let mut block = String::from("  <div class=\"mx-auto max-w-5xl px-4 pt-4\">\n");
    for notice in notices {
        let classes = match notice.level {
            NoticeLevel::Success => "border-green-300 bg-green-50 text-green-800",
            NoticeLevel::Error => "border-red-300 bg-red-50 text-red-800",
        };
        block.push_str(&format!(
            "    <div class=\"mb-2 rounded border px-4 py-2 {classes}\">{}</div>\n",
            escape(&notice.message)
        ));
    }
    block.push_str("  </div>\n");
    block
}

/// Escapes a dynamic value for interpolation into HTML text or attributes.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
