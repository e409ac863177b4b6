/// Canvas and scene configuration.
///
/// Loaded from JSON; every field is optional and falls back to the stock
/// 800x600 demo values.
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::geometry::{Color, Point2};
use crate::projection::{Frustum, Viewport};

/// Logical canvas size all shapes are laid out against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl CanvasConfig {
    pub fn center(&self) -> Point2 {
        Point2::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    pub fn corner(&self) -> Point2 {
        Point2::new(self.width as i32, self.height as i32)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub background: Color,
    pub circle_radius: i32,
    pub fractal_generations: u32,
    pub frustum: Frustum,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            background: Color::BLACK,
            circle_radius: 250,
            fractal_generations: 6,
            frustum: Frustum::default(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!(
            "loaded config from {}: {}x{} canvas",
            path.display(),
            config.canvas.width,
            config.canvas.height
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let CanvasConfig { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if self.fractal_generations == 0 {
            return Err(Error::InvalidGeneration { generation: 0 });
        }
        Ok(())
    }

    /// Viewport covering the whole canvas
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width, self.canvas.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.canvas.center(), Point2::new(400, 300));
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_json(
            r#"{ "canvas": { "width": 1024, "height": 768 }, "background": { "r": 10, "g": 20, "b": 30 } }"#,
        )
        .unwrap();
        assert_eq!(config.canvas.corner(), Point2::new(1024, 768));
        assert_eq!(config.background, Color::rgb(10, 20, 30));
        assert_eq!(config.fractal_generations, 6);
        assert_eq!(config.viewport().width, 1024.0);
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let result = Config::from_json(r#"{ "canvas": { "width": 0, "height": 600 } }"#);
        assert!(matches!(result, Err(Error::InvalidDimensions { width: 0, .. })));
    }

    #[test]
    fn test_zero_generations_rejected() {
        let result = Config::from_json(r#"{ "fractal_generations": 0 }"#);
        assert!(matches!(result, Err(Error::InvalidGeneration { .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Config::from_json("{ canvas"), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/strokes.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_frustum() {
        let mut config = Config::default();
        config.frustum.far = 500.0;
        let parsed = Config::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed.frustum.far, 500.0);
    }
}
