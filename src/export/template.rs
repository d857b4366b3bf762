//! Standalone HTML document assembly for note exports.

use chrono::Utc;
use minijinja::{context, Environment};

use crate::domain::Note;
use crate::export::ExportOptions;

/// Embedded template for a self-contained note document.
///
/// The template is registered under an extension-less name, so minijinja
/// applies no auto-escaping: the body fragment is trusted output from the
/// markdown renderer, and title/tag text is passed through verbatim.
/// Callers own the guarantee that those strings carry no unescaped markup.
const NOTE_DOCUMENT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ doc_title }}</title>
    <style>
        :root {
            --bg: #ffffff;
            --text: #24292e;
            --muted: #6a737d;
            --accent: #0366d6;
            --surface: #f6f8fa;
            --border: #e1e4e8;
        }
        @media (prefers-color-scheme: dark) {
            :root {
                --bg: #0d1117;
                --text: #c9d1d9;
                --muted: #8b949e;
                --accent: #58a6ff;
                --surface: #161b22;
                --border: #30363d;
            }
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
            font-size: 16px;
            line-height: 1.6;
            color: var(--text);
            background-color: var(--bg);
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem;
        }
        a { color: var(--accent); }
        code, pre {
            background-color: var(--surface);
            border-radius: 6px;
            font-family: "SFMono-Regular", Consolas, Menlo, monospace;
        }
        code { padding: .2em .4em; font-size: 85%; }
        pre { padding: 16px; overflow: auto; }
        pre code { background: transparent; padding: 0; }
        blockquote {
            margin: 16px 0;
            padding: 0 1em;
            color: var(--muted);
            border-left: .25em solid var(--border);
        }
        table { border-collapse: collapse; margin: 16px 0; }
        th, td { padding: 6px 13px; border: 1px solid var(--border); }
        .tags { margin: .5rem 0; }
        .tag {
            display: inline-block;
            background-color: var(--surface);
            color: var(--accent);
            border-radius: 12px;
            padding: 2px 10px;
            margin-right: 6px;
            font-size: .85em;
        }
        .timestamps { color: var(--muted); font-size: .85em; }
        footer {
            margin-top: 3rem;
            padding-top: 1rem;
            border-top: 1px solid var(--border);
            color: var(--muted);
            font-size: .8em;
        }
    </style>
</head>
<body>
    {% if title is not none %}<h1>{{ title }}</h1>{% endif %}
    {% if tags %}<div class="tags">{% for tag in tags %}<span class="tag">#{{ tag }}</span>{% endfor %}</div>{% endif %}
    {% if created or updated %}<div class="timestamps">
        {% if created %}<div>Created: {{ created }}</div>{% endif %}
        {% if updated %}<div>Updated: {{ updated }}</div>{% endif %}
    </div>{% endif %}
    <article>{{ body }}</article>
    <footer>Exported {{ exported }}</footer>
</body>
</html>"##;

/// Wraps a pre-rendered HTML body fragment in a complete standalone
/// document, with title, tag, and timestamp blocks independently
/// controlled by the options.
///
/// `body_html` comes from [`markdown_to_html`](crate::export::markdown_to_html)
/// and is inserted as-is.
pub fn render_document(note: &Note, options: &ExportOptions, body_html: &str) -> String {
    let mut env = Environment::new();
    env.add_template("note", NOTE_DOCUMENT_TEMPLATE)
        .expect("embedded note template is valid");
    let tmpl = env.get_template("note").expect("note template is registered");

    let title = options.include_title.then(|| note.title());
    let tags = if options.include_tags && !note.tags().is_empty() {
        Some(note.tags())
    } else {
        None
    };
    let created = options
        .include_timestamps
        .then(|| note.created())
        .flatten()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string());
    let updated = options
        .include_timestamps
        .then(|| note.updated())
        .flatten()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string());

    tmpl.render(context! {
        doc_title => note.title(),
        title => title,
        tags => tags,
        created => created,
        updated => updated,
        body => body_html,
        exported => Utc::now().format("%Y-%m-%d").to_string(),
    })
    .expect("embedded note template renders infallibly")
}
