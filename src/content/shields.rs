//! shields.io badge content

use url::Url;

use super::{escape_attr, parse_link, wrap_link, ContentError};
use crate::search::MatchResult;

const SHIELDS_BADGE_BASE: &str = "https://img.shields.io/badge";

/// Colour names shields.io accepts besides hex values
const NAMED_COLORS: &[&str] = &[
    "brightgreen",
    "green",
    "yellowgreen",
    "yellow",
    "orange",
    "red",
    "blue",
    "blueviolet",
    "lightgrey",
    "lightgray",
    "grey",
    "gray",
    "white",
    "black",
    "success",
    "important",
    "critical",
    "informational",
    "inactive",
];

/// Visual style of a badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeStyle {
    #[default]
    Flat,
    FlatSquare,
    Plastic,
    ForTheBadge,
    Social,
}

impl BadgeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStyle::Flat => "flat",
            BadgeStyle::FlatSquare => "flat-square",
            BadgeStyle::Plastic => "plastic",
            BadgeStyle::ForTheBadge => "for-the-badge",
            BadgeStyle::Social => "social",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ContentError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(BadgeStyle::Flat),
            "flat-square" => Ok(BadgeStyle::FlatSquare),
            "plastic" => Ok(BadgeStyle::Plastic),
            "for-the-badge" => Ok(BadgeStyle::ForTheBadge),
            "social" => Ok(BadgeStyle::Social),
            other => Err(ContentError::UnknownOption {
                kind: "badge style",
                value: other.to_string(),
            }),
        }
    }
}

/// A validated shields.io badge
#[derive(Debug, Clone, PartialEq)]
pub struct ShieldsBadge {
    label: String,
    logo: String,
    href: Option<Url>,
    image_url: Url,
}

/// Builder for [`ShieldsBadge`]
#[derive(Debug, Clone)]
pub struct ShieldsBadgeBuilder {
    label: String,
    logo: String,
    logo_color: String,
    color: String,
    style: BadgeStyle,
    href: Option<String>,
}

impl ShieldsBadge {
    pub fn builder(label: impl Into<String>, logo: impl Into<String>) -> ShieldsBadgeBuilder {
        ShieldsBadgeBuilder {
            label: label.into(),
            logo: logo.into(),
            logo_color: "white".to_string(),
            color: "informational".to_string(),
            style: BadgeStyle::Flat,
            href: None,
        }
    }

    /// Default badge for a logo picked in the search
    pub fn for_logo(logo: &MatchResult) -> Result<Self, ContentError> {
        Self::builder(logo.logo_name.as_str(), logo.logo_slug.as_str()).build()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn logo(&self) -> &str {
        &self.logo
    }

    pub fn href(&self) -> Option<&Url> {
        self.href.as_ref()
    }

    pub fn alt_text(&self) -> &str {
        &self.label
    }

    pub fn image_url(&self) -> Url {
        self.image_url.clone()
    }

    pub fn to_html(&self) -> String {
        let img = format!(
            r#"<img src="{}" alt="{}" style="display: inline-block; margin: 0 2px;" />"#,
            escape_attr(self.image_url.as_str()),
            escape_attr(&self.label)
        );
        wrap_link(img, self.href.as_ref(), Some("display: inline-block;"))
    }

    fn assemble(
        label: &str,
        logo: &str,
        logo_color: &str,
        color: &str,
        style: BadgeStyle,
        href: Option<Url>,
    ) -> Result<Self, ContentError> {
        let mut image_url = Url::parse(SHIELDS_BADGE_BASE)
            .map_err(|_| ContentError::InvalidLink(SHIELDS_BADGE_BASE.to_string()))?;
        let segment = format!("{}-{}", escape_label(label), color);
        image_url
            .path_segments_mut()
            .map_err(|_| ContentError::InvalidLink(SHIELDS_BADGE_BASE.to_string()))?
            .push(&segment);
        {
            let mut query = image_url.query_pairs_mut();
            query.append_pair("style", style.as_str());
            if !logo.is_empty() {
                query.append_pair("logo", logo);
                query.append_pair("logoColor", logo_color);
            }
        }

        Ok(Self {
            label: label.to_string(),
            logo: logo.to_string(),
            href,
            image_url,
        })
    }
}

impl ShieldsBadgeBuilder {
    pub fn logo_color(mut self, color: impl Into<String>) -> Self {
        self.logo_color = color.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn style(mut self, style: BadgeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn href(mut self, href: Option<&str>) -> Self {
        self.href = href.map(str::to_string);
        self
    }

    pub fn build(self) -> Result<ShieldsBadge, ContentError> {
        let label = self.label.trim();
        if label.is_empty() {
            return Err(ContentError::EmptyLabel);
        }
        let color = normalize_color(&self.color)?;
        let logo_color = normalize_color(&self.logo_color)?;
        let href = parse_link(self.href.as_deref())?;

        ShieldsBadge::assemble(
            label,
            self.logo.trim(),
            &logo_color,
            &color,
            self.style,
            href,
        )
    }
}

/// shields.io uses `-` as the field separator, so literal dashes and
/// underscores are doubled
fn escape_label(label: &str) -> String {
    label.replace('-', "--").replace('_', "__")
}

/// Accept a named colour or 3/6 hex digits with an optional leading `#`
fn normalize_color(raw: &str) -> Result<String, ContentError> {
    let value = raw.trim().trim_start_matches('#').to_ascii_lowercase();
    let is_hex =
        matches!(value.len(), 3 | 6) && value.chars().all(|c| c.is_ascii_hexdigit());
    if is_hex || NAMED_COLORS.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(ContentError::InvalidColor(raw.to_string()))
    }
}
