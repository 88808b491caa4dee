//! Insertable editor content
//!
//! What the editing host inserts once the user picks something: a shields.io
//! badge (usually built from a selected logo) or a GitHub stats card. Each
//! variant validates its fields at construction, so a value that exists can
//! always be rendered.

pub mod github_stats;
pub mod shields;

pub use github_stats::{GithubStatsCard, StatsTheme};
pub use shields::{BadgeStyle, ShieldsBadge};

use url::Url;

/// Validation failures for insertable content
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Label must not be empty")]
    EmptyLabel,
    #[error("Invalid colour '{0}'")]
    InvalidColor(String),
    #[error("Invalid GitHub username '{0}'")]
    InvalidUsername(String),
    #[error("Unknown {kind} '{value}'")]
    UnknownOption { kind: &'static str, value: String },
    #[error("Invalid link '{0}'")]
    InvalidLink(String),
}

/// Content the editor can insert, one variant per insertable type
#[derive(Debug, Clone, PartialEq)]
pub enum InsertableContent {
    ShieldsBadge(ShieldsBadge),
    GithubStats(GithubStatsCard),
}

impl InsertableContent {
    /// External image URL
    pub fn image_url(&self) -> Url {
        match self {
            InsertableContent::ShieldsBadge(badge) => badge.image_url(),
            InsertableContent::GithubStats(card) => card.image_url(),
        }
    }

    /// HTML fragment handed to the editor's content parser
    pub fn to_html(&self) -> String {
        match self {
            InsertableContent::ShieldsBadge(badge) => badge.to_html(),
            InsertableContent::GithubStats(card) => card.to_html(),
        }
    }

    /// Markdown form used when exporting the document
    pub fn to_markdown(&self) -> String {
        let (alt, link) = match self {
            InsertableContent::ShieldsBadge(badge) => {
                (badge.alt_text().to_string(), badge.href())
            }
            InsertableContent::GithubStats(card) => (card.alt_text(), card.href()),
        };
        let image = format!("![{}]({})", alt.replace(']', "\\]"), self.image_url());
        match link {
            Some(href) => format!("[{}]({})", image, href),
            None => image,
        }
    }
}

impl From<ShieldsBadge> for InsertableContent {
    fn from(badge: ShieldsBadge) -> Self {
        InsertableContent::ShieldsBadge(badge)
    }
}

impl From<GithubStatsCard> for InsertableContent {
    fn from(card: GithubStatsCard) -> Self {
        InsertableContent::GithubStats(card)
    }
}

/// Parse an optional http(s) link
pub(crate) fn parse_link(href: Option<&str>) -> Result<Option<Url>, ContentError> {
    let Some(href) = href.map(str::trim).filter(|h| !h.is_empty()) else {
        return Ok(None);
    };
    let url = Url::parse(href).map_err(|_| ContentError::InvalidLink(href.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ContentError::InvalidLink(href.to_string()));
    }
    Ok(Some(url))
}

/// Escape text for use inside a double-quoted HTML attribute
pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap an `<img>` fragment in a link that opens in a new tab
pub(crate) fn wrap_link(img: String, href: Option<&Url>, style: Option<&str>) -> String {
    match href {
        Some(href) => {
            let style = style
                .map(|s| format!(r#" style="{}""#, s))
                .unwrap_or_default();
            format!(
                r#"<a href="{}" target="_blank"{}>{}</a>"#,
                escape_attr(href.as_str()),
                style,
                img
            )
        }
        None => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MatchResult;

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            escape_attr(r#"a "quoted" <tag> & 'x'"#),
            "a &quot;quoted&quot; &lt;tag&gt; &amp; &#39;x&#39;"
        );
    }

    #[test]
    fn test_parse_link() {
        assert_eq!(parse_link(None).unwrap(), None);
        assert_eq!(parse_link(Some("  ")).unwrap(), None);
        assert!(parse_link(Some("https://github.com/rust-lang")).unwrap().is_some());
        assert!(matches!(
            parse_link(Some("javascript:alert(1)")),
            Err(ContentError::InvalidLink(_))
        ));
        assert!(parse_link(Some("not a link")).is_err());
    }

    #[test]
    fn test_markdown_export() {
        let logo = MatchResult::new("rust", "Rust", Some(1.0));
        let badge = ShieldsBadge::for_logo(&logo).unwrap();
        let content = InsertableContent::from(badge);
        assert_eq!(
            content.to_markdown(),
            "![Rust](https://img.shields.io/badge/Rust-informational?style=flat&logo=rust&logoColor=white)"
        );

        let card = GithubStatsCard::builder("octocat")
            .href(Some("https://github.com/octocat"))
            .build()
            .unwrap();
        let content = InsertableContent::from(card);
        assert_eq!(
            content.to_markdown(),
            "[![GitHub stats for octocat](https://github-readme-stats.vercel.app/api?username=octocat&theme=default&show_icons=true)](https://github.com/octocat)"
        );
    }

    #[test]
    fn test_markdown_escapes_badge_alt() {
        let badge = ShieldsBadge::builder("a]b", "").build().unwrap();
        let markdown = InsertableContent::from(badge).to_markdown();
        assert!(markdown.starts_with(r"![a\]b]("));
    }
}
