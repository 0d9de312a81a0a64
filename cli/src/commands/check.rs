use anyhow::Result;
use researcher_config::SettingsLoader;

pub fn handle_check(loader: &SettingsLoader) -> Result<()> {
    let settings = loader.settings();

    println!("Configuration OK: {}", loader.config_path().display());
    println!(
        " - LLM: {} / {} (max_tokens={}, temperature={})",
        settings.llm.provider, settings.llm.model, settings.llm.max_tokens, settings.llm.temperature
    );
    println!(
        " - Engine: depth={}, concurrent_queries={}, session_timeout={:?}, auto_save={:?}",
        settings.engine.max_recursion_depth,
        settings.engine.concurrent_queries,
        settings.engine.session_timeout_duration(),
        settings.engine.auto_save_duration()
    );
    println!(" - Mode: {}, log level: {}", settings.mode, settings.log_level);

    if loader.api_key(settings.llm.provider.as_str()).is_none() {
        println!(
            "Warning: {} is not set; requests to {} will fail",
            settings.llm.provider.api_key_env(),
            settings.llm.provider
        );
    }

    Ok(())
}
