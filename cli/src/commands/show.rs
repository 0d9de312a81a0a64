use anyhow::Result;
use clap::ValueEnum;
use researcher_config::SettingsLoader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

pub fn handle_show(loader: &SettingsLoader, format: OutputFormat) -> Result<()> {
    println!("{}", render(loader, format)?.trim_end());
    Ok(())
}

/// Effective settings in `format`; secrets are left out by the schema
fn render(loader: &SettingsLoader, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Yaml => loader.to_yaml()?,
        OutputFormat::Json => serde_json::to_string_pretty(loader.settings())?,
    })
}
