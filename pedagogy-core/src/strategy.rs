use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
const YOUTUBE_SEARCH_BASE: &str = "https://www.youtube.com/results";

static YOUTUBE_ID: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.|m\.)?(?:youtube\.com/(?:watch\?(?:.*&)?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{6,})",
    )
    .ok()
});

/// A single pedagogical activity in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub phase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub commands: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

/// What the detail view shows in its media slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoPanel {
    /// An embeddable player plus a link to broader search results.
    Embed { src: String, search_url: String },
    /// No video reference; only a search link is offered.
    SearchLink { url: String },
}

impl VideoPanel {
    #[must_use]
    pub fn search_url(&self) -> &str {
        match self {
            Self::Embed { search_url, .. } => search_url,
            Self::SearchLink { url } => url,
        }
    }

    #[must_use]
    pub const fn has_player(&self) -> bool {
        matches!(self, Self::Embed { .. })
    }
}

impl Strategy {
    /// Body text shown on cards and in the detail view.
    ///
    /// `description` wins when it holds any text, otherwise `instructions` is used.
    #[must_use]
    pub fn body(&self) -> &str {
        non_empty(self.description.as_deref())
            .or_else(|| non_empty(self.instructions.as_deref()))
            .unwrap_or_default()
    }

    /// Search phrase for the "find more" link, derived from the title when absent.
    #[must_use]
    pub fn search_query(&self) -> &str {
        non_empty(self.search_query.as_deref().map(str::trim)).unwrap_or(self.title.as_str())
    }

    /// Embeddable video URL, if the strategy references one.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        non_empty(self.youtube.as_deref().map(str::trim)).map(normalize_embed_url)
    }

    /// Search results URL for this strategy's query.
    #[must_use]
    pub fn search_url(&self) -> String {
        Url::parse_with_params(YOUTUBE_SEARCH_BASE, &[("search_query", self.search_query())])
            .map(String::from)
            .unwrap_or_else(|_| YOUTUBE_SEARCH_BASE.to_string())
    }

    #[must_use]
    pub fn video_panel(&self) -> VideoPanel {
        let search_url = self.search_url();
        match self.embed_url() {
            Some(src) => VideoPanel::Embed { src, search_url },
            None => VideoPanel::SearchLink { url: search_url },
        }
    }
}

/// Rewrite watch/short/share links into the `/embed/` form; other URLs pass through.
#[must_use]
pub fn normalize_embed_url(raw: &str) -> String {
    YOUTUBE_ID
        .as_ref()
        .and_then(|re| re.captures(raw))
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || raw.to_string(),
            |id| format!("{YOUTUBE_EMBED_BASE}{}", id.as_str()),
        )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not a JSON array of strategies: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a catalog document: a JSON array of strategies.
///
/// # Errors
///
/// Returns an error if the document is not a JSON array of strategy objects.
pub fn parse_catalog(json: &str) -> Result<Vec<Strategy>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(json: &str) -> Strategy {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_optionals_deserialize_as_absent() {
        let s = strategy(r#"{"id":"a","title":"Warm-up","phase":"start"}"#);
        assert!(s.commands.is_empty());
        assert_eq!(s.body(), "");
        assert_eq!(s.search_query(), "Warm-up");
        assert!(s.embed_url().is_none());
    }

    #[test]
    fn null_commands_are_empty() {
        let s = strategy(r#"{"id":"a","title":"T","phase":"p","commands":null}"#);
        assert!(s.commands.is_empty());
    }

    #[test]
    fn numeric_ids_become_strings() {
        let s = strategy(r#"{"id":12,"title":"T","phase":"p"}"#);
        assert_eq!(s.id, "12");
    }

    #[test]
    fn body_prefers_description_then_instructions() {
        let both = strategy(
            r#"{"id":"a","title":"T","phase":"p","description":"desc","instructions":"inst"}"#,
        );
        assert_eq!(both.body(), "desc");

        let only_inst = strategy(r#"{"id":"a","title":"T","phase":"p","instructions":"inst"}"#);
        assert_eq!(only_inst.body(), "inst");

        let blank_desc = strategy(
            r#"{"id":"a","title":"T","phase":"p","description":"","instructions":"inst"}"#,
        );
        assert_eq!(blank_desc.body(), "inst");
    }

    #[test]
    fn explicit_search_query_overrides_title() {
        let s = strategy(
            r#"{"id":"a","title":"Think Pair Share","phase":"p","searchQuery":"think pair share PE"}"#,
        );
        assert_eq!(s.search_query(), "think pair share PE");
        assert!(s.search_url().contains("search_query=think+pair+share+PE"));
    }

    #[test]
    fn watch_and_short_links_normalize_to_embed() {
        assert_eq!(
            normalize_embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            normalize_embed_url("https://youtu.be/dQw4w9WgXcQ?t=10"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            normalize_embed_url("https://www.youtube.com/watch?feature=share&v=abcDEF123"),
            "https://www.youtube.com/embed/abcDEF123"
        );
        assert_eq!(
            normalize_embed_url("https://player.vimeo.com/video/1"),
            "https://player.vimeo.com/video/1"
        );
    }

    #[test]
    fn video_panel_without_youtube_is_search_link() {
        let s = strategy(r#"{"id":"b","title":"Cool-down","phase":"end","youtube":""}"#);
        let panel = s.video_panel();
        assert!(!panel.has_player());
        assert!(panel.search_url().contains("Cool-down"));
    }

    #[test]
    fn video_panel_with_youtube_embeds() {
        let s = strategy(
            r#"{"id":"a","title":"T","phase":"p","youtube":"https://www.youtube.com/embed/xyz12345"}"#,
        );
        assert_eq!(
            s.video_panel(),
            VideoPanel::Embed {
                src: "https://www.youtube.com/embed/xyz12345".to_string(),
                search_url: s.search_url(),
            }
        );
    }

    #[test]
    fn parse_catalog_rejects_non_arrays() {
        assert!(parse_catalog(r#"{"id":"a"}"#).is_err());
        assert_eq!(parse_catalog("[]").unwrap().len(), 0);
    }
}
