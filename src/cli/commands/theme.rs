//! Theme preference commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use super::open_store;
use crate::cli::output::{OutputFormat, print_formatted};
use crate::state::{ThemePreference, ThemeSetting};

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,

    /// Switch between dark and light
    Toggle,

    /// Set the theme explicitly
    Set {
        #[arg(value_enum)]
        value: ThemeSetting,
    },
}

#[derive(Serialize)]
struct ThemeResult {
    theme: ThemeSetting,
}

pub async fn run(command: ThemeCommands, format: OutputFormat, _quiet: bool) -> Result<()> {
    let mut pref = ThemePreference::load(open_store()?);

    match command {
        ThemeCommands::Show => {}
        ThemeCommands::Toggle => {
            pref.try_set(pref.setting().toggled())?;
        }
        ThemeCommands::Set { value } => {
            pref.try_set(value)?;
        }
    }

    let result = ThemeResult {
        theme: pref.setting(),
    };
    print_formatted(&result, format, |r| r.theme.to_string());

    Ok(())
}
