use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A side-scrolling coin run controlled by keyboard, touch or voice
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Seed used to place the monsters
    #[arg(long, default_value = "STEM Loyola")]
    pub seed: String,

    /// JSON file overriding the default game rules
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Run without audio output
    #[arg(long)]
    pub mute: bool,

    /// Read voice command labels from stdin, one per line
    #[arg(long)]
    pub speech_stdin: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Distance between the fighter's feet and the bottom of the screen.
    pub ground_offset: f32,
    pub gravity: f32,
    /// Vertical velocity a jump starts with. Negative is upwards.
    pub launch_dy: f32,
    pub fighter_dx: f32,
    pub fighter_start_x: f32,
    pub fighter_radius: f32,
    pub coin_radius: f32,
    pub coin_speed: f32,
    pub monster_radius: f32,
    pub monster_dx: f32,
    pub monster_spread_min: f32,
    pub monster_spread_max: f32,
    pub lead_distance: f32,
    pub win_score: u32,
    /// The camera follows the fighter up to this many screen widths.
    pub camera_follow_screens: f32,
    pub speech_threshold: f32,
    pub ground_tolerance: f32,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            screen_width: 1024f32,
            screen_height: 668f32,
            ground_offset: 130f32,
            gravity: 0.8f32,
            launch_dy: -20f32,
            fighter_dx: 3f32,
            fighter_start_x: 80f32,
            fighter_radius: 36f32,
            coin_radius: 14f32,
            coin_speed: 2f32,
            monster_radius: 12f32,
            monster_dx: -5f32,
            monster_spread_min: 3f32,
            monster_spread_max: 3.5f32,
            lead_distance: 500f32,
            win_score: 20,
            camera_follow_screens: 4f32,
            speech_threshold: 0.8f32,
            ground_tolerance: 0f32,
        }
    }
}

impl GameRules {
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_offset
    }

    pub fn from_file(path: &Path) -> Result<GameRules, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<GameRules, ConfigError> {
        let rules: GameRules = serde_json::from_str(text)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0f32 || self.screen_height <= 0f32 {
            return Err(ConfigError::Invalid("screen size must be positive".to_string()));
        }
        if self.ground_offset < 0f32 || self.ground_offset >= self.screen_height {
            return Err(ConfigError::Invalid("ground offset must lie inside the screen".to_string()));
        }
        if self.gravity <= 0f32 || self.launch_dy >= 0f32 {
            return Err(ConfigError::Invalid("a jump needs negative launch and positive gravity".to_string()));
        }
        if self.monster_spread_min >= self.monster_spread_max {
            return Err(ConfigError::Invalid("monster spread range is empty".to_string()));
        }
        if !(0f32..=1f32).contains(&self.speech_threshold) {
            return Err(ConfigError::Invalid("speech threshold must be within 0..=1".to_string()));
        }
        if self.ground_tolerance < 0f32 {
            return Err(ConfigError::Invalid("ground tolerance cannot be negative".to_string()));
        }
        Ok(())
    }
}

/// Everything the game state needs when quicksilver constructs it.
#[derive(Clone, Debug)]
pub struct Settings {
    pub rules: GameRules,
    pub seed: String,
    pub mute: bool,
    pub speech_stdin: bool,
}

impl Settings {
    pub fn from_args(args: &Args) -> Result<Settings, ConfigError> {
        let rules = match &args.rules {
            Some(path) => GameRules::from_file(path)?,
            None => GameRules::default(),
        };
        Ok(Settings {
            rules,
            seed: args.seed.clone(),
            mute: args.mute,
            speech_stdin: args.speech_stdin,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rules: GameRules::default(),
            seed: "STEM Loyola".to_string(),
            mute: false,
            speech_stdin: false,
        }
    }
}

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Stores the settings for `State::new`. Only the first call has an effect.
pub fn install(settings: Settings) {
    if SETTINGS.set(settings).is_err() {
        log::warn!("settings were already installed, keeping the first ones");
    }
}

pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let rules = GameRules::from_json(r#"{ "gravity": 1.5, "win_score": 10 }"#).unwrap();
        assert_eq!(rules.gravity, 1.5f32);
        assert_eq!(rules.win_score, 10);
        assert_eq!(rules.launch_dy, GameRules::default().launch_dy);
    }

    #[test]
    fn ground_line_sits_above_the_offset() {
        let rules = GameRules::default();
        assert_eq!(rules.ground_y(), 538f32);
    }

    #[test]
    fn rejects_upward_gravity() {
        let err = GameRules::from_json(r#"{ "gravity": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = GameRules::from_json("{ gravity").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::try_parse_from(&["coinrun", "--verbose", "--seed", "abc", "--mute"]).unwrap();
        assert!(args.verbose);
        assert!(args.mute);
        assert!(!args.speech_stdin);
        let settings = Settings::from_args(&args).unwrap();
        assert_eq!(settings.seed, "abc");
        assert_eq!(settings.rules, GameRules::default());
    }
}
