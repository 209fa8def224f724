use crate::terminal::SystemClipboard;
use application::feedback_service::FeedbackService;
use application::host::Host;
use application::result_display::{ResultCard, ResultDisplay};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Editor as TextEditor, Select};
use domain::api::GenerationApi;
use shared::types::Result;

pub fn render(display: &ResultDisplay) {
    println!("{}", "Thought Partner".bold());
    println!("{}", display.header().cyan());
    for (index, card) in display.cards().iter().enumerate() {
        render_card(index, card);
    }
}

fn render_card(index: usize, card: &ResultCard) {
    let marker = if card.is_edited() { " (edited)" } else { "" };
    println!();
    println!("{}{}", format!("[{}] {}", index + 1, card.id).blue(), marker.yellow());
    for line in card.draft().lines() {
        println!("  {line}");
    }
}

fn preview(card: &ResultCard) -> String {
    let first = card.draft().lines().next().unwrap_or("").trim();
    let short: String = first.chars().take(60).collect();
    if short.len() < first.len() {
        format!("{short}...")
    } else {
        short
    }
}

/// Lets the user act on cards until they choose to leave.
pub async fn interact<A: GenerationApi, H: Host>(display: &mut ResultDisplay, api: &A, host: &H) -> Result<()> {
    let theme = ColorfulTheme::default();
    let service = FeedbackService::new(api, host);
    let mut clipboard = SystemClipboard;

    loop {
        if display.is_empty() {
            return Ok(());
        }
        let mut items: Vec<String> = display
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| format!("[{}] {}", i + 1, preview(card)))
            .collect();
        items.push("Done".to_string());

        let picked = Select::with_theme(&theme)
            .with_prompt("Result")
            .items(&items)
            .default(0)
            .interact()?;
        if picked == display.cards().len() {
            return Ok(());
        }

        let actions = ["Copy", "Good", "Bad", "Edit", "Back"];
        let action = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match action {
            0 => {
                if let Some(card) = display.card(picked) {
                    service.copy(card, &mut clipboard).await;
                }
            }
            1 => {
                if let Some(card) = display.card(picked) {
                    service.upvote(card).await;
                }
            }
            2 => {
                if let Some(card) = display.card(picked) {
                    service.downvote(card).await;
                }
            }
            3 => {
                let Some(card) = display.card_mut(picked) else {
                    continue;
                };
                // Leaving the editor is the blur.
                if let Some(text) = TextEditor::new().edit(card.draft())? {
                    card.edit(text.trim_end_matches('\n'));
                }
                service.blur(card).await;
                render_card(picked, card);
            }
            _ => {}
        }
    }
}
