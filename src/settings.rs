//! Game settings and variant presets
//!
//! Every constant that differed between iterations of the game (launch speed
//! range, what happens when the ball drops past the paddle, paddle clamping,
//! initial brick visibility) lives here so each iteration is just a preset.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::BrickfallError;

/// Largest brick grid `validate` accepts
pub const MAX_BRICKS: usize = 10_000;

/// What happens when the ball crosses the bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BottomExit {
    /// Treat it as a miss and relaunch the ball from the middle of the canvas
    #[default]
    Respawn,
    /// Bounce off the bottom edge like any other wall
    Reflect,
}

/// Initial visibility of the brick grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InitialBricks {
    #[default]
    AllVisible,
    /// Each brick starts visible on a fair coin flip
    Random,
}

/// Named presets matching the successive iterations of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Respawn on miss, clamped paddle, full grid
    #[default]
    Refined,
    /// Bottom edge reflects, paddle may slide off-canvas
    Classic,
    /// Refined, but bricks start randomly present
    Scattered,
    /// Refined with the fastest launch range
    Fast,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Refined => "Refined",
            Variant::Classic => "Classic",
            Variant::Scattered => "Scattered",
            Variant::Fast => "Fast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "refined" | "default" => Some(Variant::Refined),
            "classic" => Some(Variant::Classic),
            "scattered" | "random" => Some(Variant::Scattered),
            "fast" => Some(Variant::Fast),
            _ => None,
        }
    }
}

/// Simulation tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Brick grid ===
    pub cols: usize,
    pub rows: usize,
    /// Gap between bricks as a fraction of canvas width
    pub brick_gap_ratio: f32,
    pub initial_bricks: InitialBricks,

    // === Ball ===
    pub ball_radius: f32,
    /// Launch speed per axis is drawn from [low, low + span)
    pub speed_low_bound: u32,
    pub speed_span: u32,
    pub bottom_exit: BottomExit,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_thickness: f32,
    /// Rebound x-velocity per pixel of offset from paddle center
    pub paddle_redirect_factor: f32,
    /// Keep the paddle fully inside the canvas
    pub clamp_paddle: bool,

    // === Driver ===
    /// Ticks per second requested from the scheduler
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cols: BRICK_COLS,
            rows: BRICK_ROWS,
            brick_gap_ratio: BRICK_GAP_RATIO,
            initial_bricks: InitialBricks::AllVisible,

            ball_radius: BALL_RADIUS,
            speed_low_bound: SPEED_LOW_BOUND,
            speed_span: SPEED_SPAN,
            bottom_exit: BottomExit::Respawn,

            paddle_width: PADDLE_WIDTH,
            paddle_thickness: PADDLE_THICKNESS,
            paddle_redirect_factor: PADDLE_REDIRECT_FACTOR,
            clamp_paddle: true,

            fps: FPS,
        }
    }
}

impl Settings {
    /// Create settings from a variant preset
    pub fn from_variant(variant: Variant) -> Self {
        let mut settings = Self::default();
        settings.apply_variant(variant);
        settings
    }

    /// Apply a variant preset on top of the current values
    pub fn apply_variant(&mut self, variant: Variant) {
        match variant {
            Variant::Refined => {
                self.bottom_exit = BottomExit::Respawn;
                self.clamp_paddle = true;
                self.initial_bricks = InitialBricks::AllVisible;
            }
            Variant::Classic => {
                self.bottom_exit = BottomExit::Reflect;
                self.clamp_paddle = false;
                self.initial_bricks = InitialBricks::AllVisible;
                self.speed_low_bound = SPEED_LOW_BOUND;
            }
            Variant::Scattered => {
                self.bottom_exit = BottomExit::Respawn;
                self.clamp_paddle = true;
                self.initial_bricks = InitialBricks::Random;
            }
            Variant::Fast => {
                self.bottom_exit = BottomExit::Respawn;
                self.clamp_paddle = true;
                self.initial_bricks = InitialBricks::AllVisible;
                self.speed_low_bound = 7;
            }
        }
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), BrickfallError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(BrickfallError::InvalidSettings(format!(
                "brick grid must be non-empty, got {}x{}",
                self.cols, self.rows
            )));
        }
        match self.cols.checked_mul(self.rows) {
            Some(count) if count <= MAX_BRICKS => {}
            _ => {
                return Err(BrickfallError::InvalidSettings(format!(
                    "brick grid {}x{} exceeds {} bricks",
                    self.cols, self.rows, MAX_BRICKS
                )));
            }
        }
        if !(self.paddle_width > 0.0 && self.paddle_thickness > 0.0) {
            return Err(BrickfallError::InvalidSettings(
                "paddle width and thickness must be positive".to_string(),
            ));
        }
        if self.speed_span == 0 {
            return Err(BrickfallError::InvalidSettings(
                "speed_span must be at least 1".to_string(),
            ));
        }
        if self.speed_low_bound.checked_add(self.speed_span).is_none() {
            return Err(BrickfallError::InvalidSettings(format!(
                "speed range {} + {} overflows",
                self.speed_low_bound, self.speed_span
            )));
        }
        if !(self.ball_radius >= 0.0) {
            return Err(BrickfallError::InvalidSettings(
                "ball_radius must not be negative".to_string(),
            ));
        }
        if !(self.brick_gap_ratio >= 0.0) {
            return Err(BrickfallError::InvalidSettings(
                "brick_gap_ratio must not be negative".to_string(),
            ));
        }
        if self.fps == 0 {
            return Err(BrickfallError::InvalidSettings("fps must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, BrickfallError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, BrickfallError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, BrickfallError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "brickfall_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_refined() {
        assert_eq!(Settings::default(), Settings::from_variant(Variant::Refined));
    }

    #[test]
    fn test_variant_names_round_trip() {
        for variant in [Variant::Refined, Variant::Classic, Variant::Scattered, Variant::Fast] {
            assert_eq!(Variant::from_str(variant.as_str()), Some(variant));
        }
        assert_eq!(Variant::from_str("nope"), None);
    }

    #[test]
    fn test_classic_preset() {
        let settings = Settings::from_variant(Variant::Classic);
        assert_eq!(settings.bottom_exit, BottomExit::Reflect);
        assert!(!settings.clamp_paddle);
    }

    #[test]
    fn test_from_json_partial() {
        let settings = Settings::from_json(r#"{ "cols": 4, "bottom_exit": "Reflect" }"#).unwrap();
        assert_eq!(settings.cols, 4);
        assert_eq!(settings.rows, BRICK_ROWS);
        assert_eq!(settings.bottom_exit, BottomExit::Reflect);
    }

    #[test]
    fn test_from_json_rejects_empty_grid() {
        let err = Settings::from_json(r#"{ "rows": 0 }"#).unwrap_err();
        assert!(matches!(err, BrickfallError::InvalidSettings(_)));
    }

    #[test]
    fn test_from_json_rejects_overflowing_bounds() {
        for json in [
            r#"{ "speed_low_bound": 4294967295 }"#,
            r#"{ "cols": 18446744073709551615, "rows": 2 }"#,
            r#"{ "cols": 1000, "rows": 1000 }"#,
        ] {
            let err = Settings::from_json(json).unwrap_err();
            assert!(matches!(err, BrickfallError::InvalidSettings(_)), "{}", json);
        }
        // Largest accepted grid and speed range
        let json = r#"{ "cols": 100, "rows": 100, "speed_low_bound": 4294967290, "speed_span": 5 }"#;
        assert!(Settings::from_json(json).is_ok());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, BrickfallError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::from_variant(Variant::Fast);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
