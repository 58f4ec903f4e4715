use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// How frames are drawn and animated.
///
/// The defaults are 12 pixel cells, a 1 pixel margin and 300 ms per frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub cell_size: u32,
    pub margin: u32,
    pub frame_delay_ms: u32,
    pub palette: Palette,
}

/// RGB colors used for drawing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [u8; 3],
    pub wall: [u8; 3],
    pub start: [u8; 3],
    pub goal: [u8; 3],
    /// The position on the path that the frame shows.
    pub current: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: 12,
            margin: 1,
            frame_delay_ms: 300,
            palette: Palette::default(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [255, 255, 255],
            wall: [0, 0, 0],
            start: [0, 255, 0],
            goal: [255, 0, 0],
            current: [0, 0, 255],
        }
    }
}

impl RenderConfig {
    /// Reads a config from a JSON file. Missing fields take their default value.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open render config '{}'", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse render config '{}'", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"cell_size": 20, "palette": {"wall": [10, 20, 30]}}"#)
                .unwrap();
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.margin, 1);
        assert_eq!(config.frame_delay_ms, 300);
        assert_eq!(config.palette.wall, [10, 20, 30]);
        assert_eq!(config.palette.background, [255, 255, 255]);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = RenderConfig::load(Path::new("/nonexistent/render.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/render.json"));
    }
}
