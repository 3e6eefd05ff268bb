//! Route Paths
//!
//! Builders for the client-side routes. Slugs are percent-encoded per segment.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Anchor of the comments section on the detail page
pub const COMMENTS_ANCHOR: &str = "comments";

fn segment(slug: &str) -> String {
    utf8_percent_encode(slug, SEGMENT_ENCODE_SET).to_string()
}

pub fn event_path(event_slug: &str) -> String {
    format!("/{}", segment(event_slug))
}

pub fn create_dream_path(event_slug: &str) -> String {
    format!("/{}/create-dream", segment(event_slug))
}

pub fn dream_path(event_slug: &str, dream_slug: &str) -> String {
    format!("/{}/{}", segment(event_slug), segment(dream_slug))
}

pub fn dream_comments_path(event_slug: &str, dream_slug: &str) -> String {
    format!("{}#{}", dream_path(event_slug, dream_slug), COMMENTS_ANCHOR)
}

pub fn edit_dream_path(event_slug: &str, dream_slug: &str) -> String {
    format!("{}/edit", dream_path(event_slug, dream_slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dream_paths() {
        assert_eq!(dream_path("borderland", "my-great-idea-2"), "/borderland/my-great-idea-2");
        assert_eq!(dream_comments_path("borderland", "sauna"), "/borderland/sauna#comments");
        assert_eq!(edit_dream_path("borderland", "sauna"), "/borderland/sauna/edit");
        assert_eq!(create_dream_path("borderland"), "/borderland/create-dream");
        assert_eq!(event_path("borderland"), "/borderland");
    }

    #[test]
    fn test_segments_are_encoded() {
        assert_eq!(dream_path("ev", "a/b#c d"), "/ev/a%2Fb%23c%20d");
        assert_eq!(dream_path("ev", "café"), "/ev/caf%C3%A9");
    }
}
