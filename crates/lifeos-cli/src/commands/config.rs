//! Configuration commands for CLI.

use clap::Subcommand;
use lifeos_core::storage::{Config, FONTS, THEMES};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// List theme and font presets
    Presets,
    /// Set the theme preset
    Theme {
        /// One of: Clean, Nature, Ocean, Sunset, Focus
        name: String,
    },
    /// Set the font preset
    Font {
        /// One of: Modern, Typewriter, Classic, Bold
        name: String,
    },
    /// Set the bedtime target (HH:MM)
    Bedtime { time: String },
    /// Set the wake target (HH:MM)
    Wake { time: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();

    match action {
        ConfigAction::Show => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Presets => {
            let view = serde_json::json!({ "themes": THEMES, "fonts": FONTS });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        ConfigAction::Theme { name } => {
            config.set_theme(&name)?;
            config.save()?;
            println!("Theme: {}", config.theme);
        }
        ConfigAction::Font { name } => {
            config.set_font(&name)?;
            config.save()?;
            println!("Font: {}", config.font);
        }
        ConfigAction::Bedtime { time } => {
            config.set_bedtime(&time)?;
            config.save()?;
            println!("Bedtime: {}", config.ritual.bedtime);
        }
        ConfigAction::Wake { time } => {
            config.set_wake(&time)?;
            config.save()?;
            println!("Wake: {}", config.ritual.wake);
        }
    }
    Ok(())
}
