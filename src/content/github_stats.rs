//! GitHub readme-stats card content

use url::Url;

use super::{escape_attr, parse_link, wrap_link, ContentError};

const STATS_API_BASE: &str = "https://github-readme-stats.vercel.app/api";
const MAX_USERNAME_LEN: usize = 39;

/// Card themes offered in the insert dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsTheme {
    #[default]
    Default,
    Dark,
    Radical,
    Merko,
    Gruvbox,
    TokyoNight,
    OneDark,
    Cobalt,
    Synthwave,
    HighContrast,
}

impl StatsTheme {
    pub const ALL: [StatsTheme; 10] = [
        StatsTheme::Default,
        StatsTheme::Dark,
        StatsTheme::Radical,
        StatsTheme::Merko,
        StatsTheme::Gruvbox,
        StatsTheme::TokyoNight,
        StatsTheme::OneDark,
        StatsTheme::Cobalt,
        StatsTheme::Synthwave,
        StatsTheme::HighContrast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsTheme::Default => "default",
            StatsTheme::Dark => "dark",
            StatsTheme::Radical => "radical",
            StatsTheme::Merko => "merko",
            StatsTheme::Gruvbox => "gruvbox",
            StatsTheme::TokyoNight => "tokyonight",
            StatsTheme::OneDark => "onedark",
            StatsTheme::Cobalt => "cobalt",
            StatsTheme::Synthwave => "synthwave",
            StatsTheme::HighContrast => "highcontrast",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ContentError> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == wanted)
            .ok_or(ContentError::UnknownOption {
                kind: "stats theme",
                value: wanted,
            })
    }
}

/// A validated GitHub stats card
#[derive(Debug, Clone, PartialEq)]
pub struct GithubStatsCard {
    username: String,
    theme: StatsTheme,
    show_icons: bool,
    href: Option<Url>,
    image_url: Url,
}

#[derive(Debug, Clone)]
pub struct GithubStatsCardBuilder {
    username: String,
    theme: StatsTheme,
    show_icons: bool,
    href: Option<String>,
}

impl GithubStatsCard {
    pub fn builder(username: impl Into<String>) -> GithubStatsCardBuilder {
        GithubStatsCardBuilder {
            username: username.into(),
            theme: StatsTheme::Default,
            show_icons: true,
            href: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn theme(&self) -> StatsTheme {
        self.theme
    }

    pub fn href(&self) -> Option<&Url> {
        self.href.as_ref()
    }

    pub fn alt_text(&self) -> String {
        format!("GitHub stats for {}", self.username)
    }

    pub fn show_icons(&self) -> bool {
        self.show_icons
    }

    pub fn image_url(&self) -> Url {
        self.image_url.clone()
    }

    pub fn to_html(&self) -> String {
        let img = format!(
            r#"<img src="{}" alt="{}" style="display: block; margin: 12px 0; border-radius: 4px;" />"#,
            escape_attr(self.image_url.as_str()),
            escape_attr(&self.alt_text())
        );
        wrap_link(img, self.href.as_ref(), None)
    }
}

impl GithubStatsCardBuilder {
    pub fn theme(mut self, theme: StatsTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn show_icons(mut self, show: bool) -> Self {
        self.show_icons = show;
        self
    }

    pub fn href(mut self, href: Option<&str>) -> Self {
        self.href = href.map(str::to_string);
        self
    }

    pub fn build(self) -> Result<GithubStatsCard, ContentError> {
        let username = self.username.trim();
        if !is_valid_username(username) {
            return Err(ContentError::InvalidUsername(self.username.clone()));
        }
        let href = parse_link(self.href.as_deref())?;
        let show_icons = if self.show_icons { "true" } else { "false" };
        let image_url = Url::parse_with_params(
            STATS_API_BASE,
            [
                ("username", username),
                ("theme", self.theme.as_str()),
                ("show_icons", show_icons),
            ],
        )
        .map_err(|_| ContentError::InvalidUsername(username.to_string()))?;

        Ok(GithubStatsCard {
            username: username.to_string(),
            theme: self.theme,
            show_icons: self.show_icons,
            href,
            image_url,
        })
    }
}

/// GitHub logins: alphanumerics and single hyphens, no hyphen at either end
fn is_valid_username(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_USERNAME_LEN
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
}
