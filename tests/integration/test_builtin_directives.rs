//! Integration Tests for Built-in Directives
//!
//! Verifies the synchronous built-ins against the engine's public API:
//! output content, state behavior, and interaction with session mutation.

use buddyterm::{
    dispatch, EngineConfig, EngineState, LineKind, SimulatorConfig, TerminalEngine,
};

fn immediate_engine() -> TerminalEngine {
    let mut config = EngineConfig::default();
    config.simulator = SimulatorConfig::immediate();
    TerminalEngine::new(config)
}

#[tokio::test]
async fn test_help_output_is_the_fixed_table() {
    let engine = immediate_engine();
    engine.submit("/help").await.unwrap();

    let transcript = engine.transcript().await;
    let help: Vec<&str> = transcript
        .iter()
        .filter(|l| l.kind == LineKind::System && l.content != dispatch::FAREWELL)
        .filter(|l| dispatch::HELP_LINES.contains(&l.content.as_str()))
        .map(|l| l.content.as_str())
        .collect();
    assert_eq!(help, dispatch::HELP_LINES.to_vec());
}

#[tokio::test]
async fn test_models_marks_the_active_model() {
    let engine = immediate_engine();
    engine.submit("/models").await.unwrap();

    let transcript = engine.transcript().await;
    let current: Vec<_> = transcript
        .iter()
        .filter(|l| l.content.contains("(current)"))
        .collect();
    assert_eq!(current.len(), 1);
    assert!(current[0].content.contains("claude-sonnet-4"));
    assert_eq!(current[0].kind, LineKind::Success);

    // Non-active entries are plain system lines
    assert!(transcript
        .iter()
        .any(|l| l.kind == LineKind::System && l.content.contains("gpt-5")));
}

#[tokio::test]
async fn test_models_follows_model_switch() {
    let engine = immediate_engine();
    engine.set_model("o4-mini").await.unwrap();

    engine.submit("/models").await.unwrap();

    let transcript = engine.transcript().await;
    let current = transcript
        .iter()
        .find(|l| l.content.contains("(current)"))
        .unwrap();
    assert!(current.content.contains("o4-mini"));
}

#[tokio::test]
async fn test_session_reports_four_fields() {
    let engine = immediate_engine();
    let info = engine.session().await;

    engine.submit("/session").await.unwrap();

    let transcript = engine.transcript().await;
    let report: Vec<&str> = transcript
        .iter()
        .filter(|l| {
            l.content.starts_with("Session ID:")
                || l.content.starts_with("Workdir:")
                || l.content.starts_with("Model:")
                || l.content.starts_with("Approval:")
        })
        .map(|l| l.content.as_str())
        .collect();

    assert_eq!(report.len(), 4);
    assert!(report[0].contains(&info.session_id));
    assert!(report[1].contains(&info.workdir));
    assert!(report[2].contains(&info.model));
    assert!(report[3].contains("suggest"));
}

#[tokio::test]
async fn test_clear_wipes_the_echoed_input_too() {
    let engine = immediate_engine();

    engine.submit("/clear").await.unwrap();

    // The input echo is appended before dispatch, then wiped by the clear
    assert!(engine.transcript().await.is_empty());
    assert_eq!(engine.state().await, EngineState::Idle);
}

#[tokio::test]
async fn test_clear_twice_is_a_noop_after_the_first() {
    let engine = immediate_engine();

    engine.submit("/clear").await.unwrap();
    engine.submit("/clear").await.unwrap();
    assert!(engine.transcript().await.is_empty());
}

#[tokio::test]
async fn test_builtins_never_enter_busy() {
    let engine = immediate_engine();

    for directive in ["/help", "/models", "/session", "/clear"] {
        engine.submit(directive).await.unwrap();
        assert_eq!(
            engine.state().await,
            EngineState::Idle,
            "{} must complete synchronously",
            directive
        );
    }
}

#[tokio::test]
async fn test_unrecognized_slash_input_is_free_text() {
    let engine = immediate_engine();
    let mut config_check = engine.subscribe();

    engine.submit("/bogus").await.unwrap();

    // Free text goes through the simulator, so the engine went busy
    let mut went_busy = false;
    while let Ok(Ok(event)) =
        tokio::time::timeout(std::time::Duration::from_millis(200), config_check.recv()).await
    {
        if matches!(
            event,
            buddyterm::EngineEvent::StateChanged(EngineState::Busy)
        ) {
            went_busy = true;
            break;
        }
    }
    assert!(went_busy, "/bogus should fall through to free-text handling");
}

#[tokio::test]
async fn test_exit_matching_is_case_sensitive_end_to_end() {
    let engine = immediate_engine();

    engine.submit("Q").await.unwrap();

    // "Q" is not the exit directive, so the session did not end
    assert_ne!(engine.state().await, EngineState::Ended);
}
