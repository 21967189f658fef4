//! Markdown → HTML for site pages.
//!
//! pulldown-cmark with the extended syntax pages rely on (tables, footnotes, definition lists,
//! heading attributes) and typographic punctuation: curly quotes, en/em dashes and ellipses
//! from the parser's smart punctuation, plus French angled quotes (`<<` → «, `>>` → »).

use pulldown_cmark::{CowStr, Event, Options, Parser, TextMergeStream, html::push_html};

pub fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_DEFINITION_LIST
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(content, options);
    // merged so that `<<` is never split across two text events
    let events = TextMergeStream::new(parser).map(|event| match event {
        Event::Text(text) => Event::Text(angle_quotes(text)),
        other => other,
    });

    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events);
    html
}

fn angle_quotes(text: CowStr<'_>) -> CowStr<'_> {
    if !text.contains("<<") && !text.contains(">>") {
        return text;
    }
    text.replace("<<", "«").replace(">>", "»").into()
}

#[cfg(test)]
#[path = "../../tests/unit/site/markdown.rs"]
mod tests;
