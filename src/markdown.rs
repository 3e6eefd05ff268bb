//! Markdown Rendering
//!
//! Dream descriptions are markdown. Rendering goes through pulldown-cmark with:
//! - Raw HTML shown as text, never injected
//! - `javascript:` style link targets neutralised
//! - Images constrained to the content column

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Render markdown to sanitised HTML
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

// State for the event transformer
enum State {
    Normal,
    InImage { dropped_depth: usize },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),

                Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                    events.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url: safe_url(dest_url),
                        title,
                        id,
                    }));
                }

                Event::Start(Tag::Image { dest_url, title, .. }) => {
                    let html = format!(
                        r#"<img src="{}" alt="{}" class="markdown-image" />"#,
                        escape_html(&safe_url(dest_url)),
                        escape_html(&title),
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    // Drop the alt text events
                    state = State::InImage { dropped_depth: 0 };
                }

                other => events.push(other),
            },

            State::InImage { ref mut dropped_depth } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lower = url.trim_start().to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        let html = render_markdown("Some **bold** and ~~gone~~");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>\n\nhi <b>there</b>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_script_links_are_neutralised() {
        let html = render_markdown("[click](javascript:alert(1)) [ok](https://example.org)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"href="#""##));
        assert!(html.contains(r#"href="https://example.org""#));
    }

    #[test]
    fn test_images_get_constrained_tag() {
        let html = render_markdown(r#"![alt *text*](https://cdn/x.png "A title")"#);
        assert!(html.contains(r#"<img src="https://cdn/x.png" alt="A title" class="markdown-image" />"#));
        assert!(!html.contains("<em>"));
    }
}
