use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use domain::settings::Settings;
use infrastructure::config::SettingsStore;
use shared::confirmation::ask_confirmation;
use shared::types::Result;

pub fn print_settings(store: &SettingsStore, settings: &Settings) {
    println!("{}", "Settings for Thought Partner".bold());
    println!("  file:               {}", store.path().display());
    println!("  OpenAI API key:     {}", Settings::mask(&settings.openai_api_key));
    println!("  Humanloop API key:  {}", Settings::mask(&settings.humanloop_api_key));
    println!("  showStatusBar:      {}", settings.show_status_bar);
    println!("  max_tokens:         {}", settings.max_tokens);
    let context = if settings.context.is_empty() {
        "(empty)"
    } else {
        settings.context.as_str()
    };
    println!("  context:            {context}");
}

fn ask_secret(theme: &ColorfulTheme, prompt: &str, current: &str) -> Result<String> {
    let entered = Password::with_theme(theme)
        .with_prompt(format!("{prompt} [{}] (empty keeps current)", Settings::mask(current)))
        .allow_empty_password(true)
        .interact()?;
    Ok(if entered.trim().is_empty() {
        current.to_string()
    } else {
        entered.trim().to_string()
    })
}

/// Prompts for every setting and persists the result once confirmed.
pub fn edit_settings(store: &SettingsStore, current: &Settings) -> Result<Settings> {
    let theme = ColorfulTheme::default();

    let openai_api_key = ask_secret(&theme, "OpenAI API key", &current.openai_api_key)?;
    let humanloop_api_key = ask_secret(&theme, "Humanloop API key", &current.humanloop_api_key)?;
    let show_status_bar = Confirm::with_theme(&theme)
        .with_prompt("Show information in the status bar")
        .default(current.show_status_bar)
        .interact()?;
    let max_tokens: u32 = Input::with_theme(&theme)
        .with_prompt("Maximum tokens per generation")
        .default(current.max_tokens)
        .validate_with(|value: &u32| {
            if *value == 0 {
                Err("must be at least 1")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    let context: String = Input::with_theme(&theme)
        .with_prompt("Context")
        .default(current.context.clone())
        .allow_empty(true)
        .interact_text()?;

    let settings = Settings {
        openai_api_key,
        humanloop_api_key,
        context,
        show_status_bar,
        max_tokens,
    };
    if !ask_confirmation("Save these settings?", true)? {
        return Ok(current.clone());
    }
    store.save(&settings)?;
    Ok(settings)
}
