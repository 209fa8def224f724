use application::events;
use application::feedback_service::FeedbackService;
use application::host::Host;
use application::orchestrator::{CommandOrchestrator, CommandOutcome, ERROR_NOTICE};
use application::result_display::ResultDisplay;
use domain::editor::MarkdownDocument;
use domain::insertion::Position;
use domain::mode::GenerationMode;
use domain::settings::Settings;
use infrastructure::humanloop_client::HumanloopClient;
use serde_json::json;
use std::time::Duration;
use tests::{unreachable_base_url, FakeHumanloop, NoticeLog};

fn settings() -> Settings {
    Settings {
        openai_api_key: "sk-openai".to_string(),
        humanloop_api_key: "hl-key".to_string(),
        ..Settings::default()
    }
}

fn single(id: &str, output: &str, raw_output: &str) -> serde_json::Value {
    json!({
        "data": [{
            "id": id,
            "output": output,
            "raw_output": raw_output,
            "prompt": "",
            "model_config": {}
        }]
    })
}

#[tokio::test]
async fn extend_continues_at_document_end() {
    let server = FakeHumanloop::start(single("a1", "Hello world. Indeed.", " Indeed.")).await;
    let client = HumanloopClient::new(server.base_url.clone(), "hl-key").unwrap();
    let (tx, mut rx) = events::channel();
    let orchestrator = CommandOrchestrator::new(client, NoticeLog::default(), settings(), tx);
    let mut doc = MarkdownDocument::new("Hello world.");

    let outcome = orchestrator.run(GenerationMode::Extend, Some(&mut doc)).await;

    assert!(matches!(outcome, CommandOutcome::Inserted(ref i) if i.position == Position::new(0, 12)));
    assert_eq!(doc.text(), "Hello world. Indeed.");

    let calls = server.generate_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0]["project"], "Extend");
    assert_eq!(calls[0]["inputs"]["input"], "Hello world.");
    assert_eq!(calls[0]["provider_api_keys"]["OpenAI"], "sk-openai");
    assert_eq!(server.api_keys(), vec!["hl-key"]);

    let mut display = ResultDisplay::new();
    assert_eq!(display.drain(&mut rx), 1);
    assert_eq!(display.header(), "Extend");
}

#[tokio::test]
async fn summarise_prefixes_raw_output_at_top() {
    let server = FakeHumanloop::start(single("s1", "A greeting.", "A greeting.")).await;
    let client = HumanloopClient::new(server.base_url.clone(), "hl-key").unwrap();
    let (tx, _rx) = events::channel();
    let orchestrator = CommandOrchestrator::new(client, NoticeLog::default(), settings(), tx);
    let mut doc = MarkdownDocument::new("Hello world.\nSecond line.");

    orchestrator.run(GenerationMode::Summarise, Some(&mut doc)).await;

    assert_eq!(doc.text(), "A greeting.\n\nHello world.\nSecond line.");
    assert_eq!(server.generate_calls()[0]["project"], "summarise");
}

#[tokio::test(start_paused = true)]
async fn network_failure_reports_generic_error_then_clears_status() {
    let client = HumanloopClient::new(unreachable_base_url(), "hl-key").unwrap();
    let (tx, _rx) = events::channel();
    let orchestrator = CommandOrchestrator::new(client, NoticeLog::default(), settings(), tx);
    let mut doc = MarkdownDocument::new("Hello world.");

    let outcome = orchestrator.run(GenerationMode::Extend, Some(&mut doc)).await;

    assert_eq!(outcome, CommandOutcome::Failed);
    assert_eq!(doc.text(), "Hello world.");
    assert_eq!(orchestrator.host().notices().last().unwrap(), ERROR_NOTICE);
    assert_eq!(orchestrator.status().text(), "Thought Partner: Error check console");

    tokio::time::sleep(Duration::from_secs(3) + Duration::from_millis(1)).await;
    assert_eq!(orchestrator.status().text(), "");
}

#[tokio::test]
async fn server_error_leaves_document_untouched() {
    let server = FakeHumanloop::start(serde_json::Value::Null).await;
    let client = HumanloopClient::new(server.base_url.clone(), "hl-key").unwrap();
    let (tx, _rx) = events::channel();
    let orchestrator = CommandOrchestrator::new(client, NoticeLog::default(), settings(), tx);
    let mut doc = MarkdownDocument::new("Body.");

    let outcome = orchestrator.run(GenerationMode::Proseify, Some(&mut doc)).await;

    assert_eq!(outcome, CommandOutcome::Failed);
    assert_eq!(doc.text(), "Body.");
}

#[tokio::test]
async fn critique_cards_send_feedback() {
    let server = FakeHumanloop::start(json!({
        "data": [
            { "id": "c1", "output": "Too long.", "raw_output": "Too long.", "prompt": "", "model_config": null },
            { "id": "c2", "output": "Needs an example.", "raw_output": "Needs an example.", "prompt": "", "model_config": null }
        ]
    }))
    .await;
    let client = HumanloopClient::new(server.base_url.clone(), "hl-key").unwrap();
    let (tx, mut rx) = events::channel();
    let orchestrator = CommandOrchestrator::new(client, NoticeLog::default(), settings(), tx);
    let mut doc = MarkdownDocument::new("My draft.");

    let outcome = orchestrator.run(GenerationMode::Critique, Some(&mut doc)).await;
    assert_eq!(outcome, CommandOutcome::Published);
    assert_eq!(doc.text(), "My draft.");
    assert!(orchestrator.host().is_panel_open());

    let mut display = ResultDisplay::new();
    display.drain(&mut rx);
    assert_eq!(display.header(), "Critique");
    assert_eq!(display.cards().len(), 2);

    let service = FeedbackService::new(orchestrator.api(), orchestrator.host());

    // Blurring without changes sends nothing.
    assert!(!service.blur(display.card(0).unwrap()).await);
    assert!(server.feedback_calls().is_empty());

    display.card_mut(1).unwrap().edit("Needs a concrete example.");
    assert!(service.blur(display.card(1).unwrap()).await);
    service.upvote(display.card(0).unwrap()).await;

    let feedback = server.feedback_calls();
    assert_eq!(feedback.len(), 2);
    assert_eq!(feedback[0]["group"], "correction");
    assert_eq!(feedback[0]["data_id"], "c2");
    assert_eq!(feedback[0]["text"], "Needs a concrete example.");
    assert_eq!(feedback[1]["group"], "vote");
    assert_eq!(feedback[1]["label"], "upvote");
    assert_eq!(feedback[1]["data_id"], "c1");
}
