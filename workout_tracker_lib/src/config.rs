pub const DEFAULT_STORAGE_KEY: &str = "workout";
pub const DEFAULT_ZOOM_LEVEL: f64 = 17.;
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupConfig {
    pub min_width: f64,
    pub max_width: f64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            min_width: 100.,
            max_width: 250.,
        }
    }
}

/// Animation used when the map jumps to a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanConfig {
    pub animate: bool,
    pub duration_secs: f64,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            animate: true,
            duration_secs: 1.,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub storage_key: String,
    pub zoom_level: f64,
    pub tile_url: String,
    pub attribution: String,
    pub popup: PopupConfig,
    pub pan: PanConfig,
}

impl TrackerConfig {
    /// Defaults, with the tile server overridable at build time through `WORKOUT_TILE_URL`.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("WORKOUT_TILE_URL").filter(|url| !url.trim().is_empty()) {
            config.tile_url = url.trim().to_string();
        }
        config
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            zoom_level: DEFAULT_ZOOM_LEVEL,
            tile_url: DEFAULT_TILE_URL.into(),
            attribution: DEFAULT_ATTRIBUTION.into(),
            popup: PopupConfig::default(),
            pan: PanConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TrackerConfig::default();

        assert_eq!(config.storage_key, "workout");
        assert_eq!(config.zoom_level, 17.);
        assert_eq!(config.popup, PopupConfig { min_width: 100., max_width: 250. });
    }

    #[test]
    fn pan_animates_for_one_second() {
        let pan = TrackerConfig::default().pan;

        assert!(pan.animate);
        assert_eq!(pan.duration_secs, 1.);
    }
}
