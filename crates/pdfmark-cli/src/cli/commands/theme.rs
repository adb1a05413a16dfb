//! `pdfmark theme [dark|light]` – show or set the theme preference.

use anyhow::{bail, Result};
use pdfmark_core::config::{self, PdfmarkConfig, Theme};

pub fn run_theme(mut cfg: PdfmarkConfig, value: Option<&str>) -> Result<()> {
    match value {
        None => println!("{}", cfg.theme.as_str()),
        Some(raw) => {
            let Some(theme) = Theme::parse(raw) else {
                bail!("unknown theme {raw:?}; expected \"dark\" or \"light\"");
            };
            cfg.theme = theme;
            config::save(&cfg)?;
            println!("Theme set to {}", theme.as_str());
        }
    }
    Ok(())
}
