use anyhow::Result;
use researcher_config::{Provider, SettingsLoader};

pub fn handle_keys(loader: &SettingsLoader) -> Result<()> {
    let configured = loader.settings().llm.provider;

    for provider in Provider::ALL {
        let marker = if provider == configured { "*" } else { " " };
        let state = match loader.api_key(provider.as_str()) {
            Some(key) if !key.is_empty() => "set",
            Some(_) => "empty",
            None => "missing",
        };
        println!(
            "{} {:<11} {:<19} {}",
            marker,
            provider,
            provider.api_key_env(),
            state
        );
    }

    Ok(())
}
