use std::{fs, path::Path};

use anyhow::{Context, Result};
use light_cycle_core::{LayoutConfig, Padding, DEFAULT_RANDOMNESS_DIVISOR};
use light_cycle_rendering::{Color, Palette};
use serde::Deserialize;

use crate::widget_locations;

/// Status bar height in density-independent pixels.
const STATUS_BAR_HEIGHT: f32 = 24.0;
/// App drawer handle height in density-independent pixels.
const APP_DRAWER_HEIGHT: f32 = 50.0;

/// Frames per second used when neither the settings nor the command line pick one.
pub(crate) const DEFAULT_FPS: u32 = 20;

/// User settings loaded from a TOML file. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub(crate) layout: LayoutSettings,
    pub(crate) padding: PaddingSettings,
    pub(crate) display: DisplaySettings,
    pub(crate) colors: ColorSettings,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LayoutSettings {
    pub(crate) icon_rows: Option<u32>,
    pub(crate) icon_cols: Option<u32>,
    pub(crate) row_spacing: Option<u32>,
    pub(crate) col_spacing: Option<u32>,
    pub(crate) widget_locations: Option<String>,
    pub(crate) randomness_divisor: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PaddingSettings {
    pub(crate) top: Option<f32>,
    pub(crate) bottom: Option<f32>,
    pub(crate) left: Option<f32>,
    pub(crate) right: Option<f32>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct DisplaySettings {
    pub(crate) show_walls: Option<bool>,
    pub(crate) user_control: Option<bool>,
    pub(crate) fps: Option<u32>,
}

/// Colors as packed `0xAARRGGBB` integers.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ColorSettings {
    pub(crate) background: Option<u32>,
    pub(crate) walls: Option<u32>,
    pub(crate) player: Option<u32>,
    pub(crate) opponent: Option<u32>,
}

impl Settings {
    /// Reads and parses the settings file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse settings from {}", path.display()))
    }

    /// Parses settings from TOML text.
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Translates the settings into a layout snapshot for a display with the
    /// given pixel `density`.
    pub(crate) fn layout_config(&self, density: f32) -> Result<LayoutConfig> {
        let defaults = LayoutConfig::default();
        let layout = &self.layout;
        let excluded_regions = match &layout.widget_locations {
            Some(value) => {
                widget_locations::decode(value).context("invalid widget locations")?
            }
            None => Vec::new(),
        };

        Ok(LayoutConfig {
            icon_rows: layout.icon_rows.unwrap_or(defaults.icon_rows),
            icon_cols: layout.icon_cols.unwrap_or(defaults.icon_cols),
            row_spacing: layout.row_spacing.unwrap_or(defaults.row_spacing),
            col_spacing: layout.col_spacing.unwrap_or(defaults.col_spacing),
            padding: self.padding.resolve(density),
            excluded_regions,
            randomness_divisor: layout
                .randomness_divisor
                .unwrap_or(DEFAULT_RANDOMNESS_DIVISOR),
        })
    }

    /// Colors used for presenting frames.
    pub(crate) fn palette(&self) -> Palette {
        let defaults = Palette::default();
        let pick = |value: Option<u32>, fallback: Color| value.map_or(fallback, Color::from_argb);
        Palette {
            background: pick(self.colors.background, defaults.background),
            walls: pick(self.colors.walls, defaults.walls),
            player: pick(self.colors.player, defaults.player),
            opponent: pick(self.colors.opponent, defaults.opponent),
        }
    }

    pub(crate) fn show_walls(&self) -> bool {
        self.display.show_walls.unwrap_or(true)
    }

    pub(crate) fn user_control(&self) -> bool {
        self.display.user_control.unwrap_or(true)
    }

    pub(crate) fn fps(&self) -> u32 {
        self.display.fps.unwrap_or(DEFAULT_FPS)
    }
}

impl PaddingSettings {
    /// Fills unset edges. Top and bottom default to the launcher's status bar
    /// and app drawer heights scaled by `density`.
    fn resolve(&self, density: f32) -> Padding {
        Padding {
            top: self.top.unwrap_or(STATUS_BAR_HEIGHT * density),
            bottom: self.bottom.unwrap_or(APP_DRAWER_HEIGHT * density),
            left: self.left.unwrap_or(0.0),
            right: self.right.unwrap_or(0.0),
        }
    }
}
