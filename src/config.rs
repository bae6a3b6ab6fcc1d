use log::{warn, Level};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const OVERLAY_HIDE_MS: u32 = 3_000;
pub const FORM_CLOSE_MS: u32 = 2_000;
pub const CLICK_DEBOUNCE_MS: u32 = 300;
pub const HOVER_DEBOUNCE_MS: u32 = 10;

/// Id of the optional `<script type="application/json">` element that
/// overrides the built-in page config.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

pub const REGION_OPTIONS: [&str; 5] = [
    "West Coast",
    "Central Canada",
    "Ottawa Region",
    "East Coast",
    "Northern Territories",
];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FooterStyle {
    /// Call to action floats over the marker area.
    Inline,
    /// Call to action sits below the page as a footer.
    Standalone,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    pub region: String,
    pub spokesperson: String,
    pub description: String,
    pub video_src: String,
    pub color: String,
    /// CSS placement of the marker inside the marker area.
    pub anchor: String,
    #[serde(default = "default_hover_offset")]
    pub hover_offset: Offset,
}

fn default_hover_offset() -> Offset {
    Offset::new(15, 15)
}

fn default_click_debounce() -> u32 {
    CLICK_DEBOUNCE_MS
}

fn default_hover_debounce() -> u32 {
    HOVER_DEBOUNCE_MS
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub heading: String,
    pub background_image: String,
    pub footer: FooterStyle,
    pub markers: Vec<MarkerConfig>,
    #[serde(default = "default_click_debounce")]
    pub click_debounce_ms: u32,
    #[serde(default = "default_hover_debounce")]
    pub hover_debounce_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            heading: "Voices Of Canada".to_string(),
            background_image: "/assets/main-background.jpg".to_string(),
            footer: FooterStyle::Inline,
            markers: vec![
                MarkerConfig {
                    region: "West Coast".to_string(),
                    spokesperson: "Emma Thompson".to_string(),
                    description: "Sharing insights about coastal conservation and sustainable fishing practices".to_string(),
                    video_src: "https://videos.pexels.com/video-files/6548176/6548176-sd_640_360_24fps.mp4".to_string(),
                    color: "#15803d".to_string(),
                    anchor: "margin-bottom: 30em; margin-right: 50em;".to_string(),
                    hover_offset: default_hover_offset(),
                },
                MarkerConfig {
                    region: "Ottawa".to_string(),
                    spokesperson: "James Carter".to_string(),
                    description: "Discussing governmental policies and national initiatives for environmental protection".to_string(),
                    video_src: "https://videos.pexels.com/video-files/854040/854040-sd_640_360_30fps.mp4".to_string(),
                    color: "#1d4ed8".to_string(),
                    anchor: "margin-bottom: 15em;".to_string(),
                    hover_offset: default_hover_offset(),
                },
                MarkerConfig {
                    region: "East Coast".to_string(),
                    spokesperson: "Sarah Mitchell".to_string(),
                    description: "Highlighting maritime traditions and the impact of climate change on coastal communities".to_string(),
                    video_src: "https://videos.pexels.com/video-files/6950902/6950902-sd_640_360_25fps.mp4".to_string(),
                    color: "#14532d".to_string(),
                    anchor: "margin-bottom: 20em; margin-left: 27em;".to_string(),
                    hover_offset: default_hover_offset(),
                },
            ],
            click_debounce_ms: CLICK_DEBOUNCE_MS,
            hover_debounce_ms: HOVER_DEBOUNCE_MS,
        }
    }
}

impl PageConfig {
    /// Layout used on the tablet kiosk: own background, a real footer and
    /// smaller hover nudges for the narrower screen.
    pub fn tablet() -> Self {
        let mut config = Self::default()
            .with_background("/assets/tablet-background.jpg")
            .with_footer(FooterStyle::Standalone);
        let regions: Vec<String> = config.markers.iter().map(|m| m.region.clone()).collect();
        for region in regions {
            config = config.with_hover_offset(&region, Offset::new(10, 10));
        }
        config
    }

    pub fn with_background(mut self, image: impl Into<String>) -> Self {
        self.background_image = image.into();
        self
    }

    pub fn with_footer(mut self, footer: FooterStyle) -> Self {
        self.footer = footer;
        self
    }

    /// Unknown regions are left untouched.
    pub fn with_hover_offset(mut self, region: &str, offset: Offset) -> Self {
        if let Some(marker) = self.markers.iter_mut().find(|m| m.region == region) {
            marker.hover_offset = offset;
        }
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.markers.is_empty() {
            return Err(ConfigError::NoMarkers);
        }
        for (i, marker) in self.markers.iter().enumerate() {
            if self.markers[..i].iter().any(|m| m.region == marker.region) {
                return Err(ConfigError::DuplicateRegion(marker.region.clone()));
            }
            if marker.video_src.trim().is_empty() {
                return Err(ConfigError::MissingVideo(marker.region.clone()));
            }
        }
        Ok(())
    }

    /// Reads the JSON override embedded in the host page, falling back to the
    /// built-in config when it is absent or invalid.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring embedded page config: {}", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}
