use std::sync::Once;

use leaselens::models::{CLAUSE_TEXT, RISKS_TEXT, SUMMARY_TEXT};
use leaselens::ui::{
    Command, CommandRegistry, UiState, check_risks, explain_clause, save_history, summarize,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(leaselens::logging::initialize_for_tests);
}

#[test]
fn each_command_writes_its_fixed_text_regardless_of_document() {
    init_logging();
    let documents = ["", "This is a 12-month lease.", "<script>alert(1)</script>\n\n\t"];
    let cases: [(fn(&mut UiState), &str); 3] = [
        (summarize, SUMMARY_TEXT),
        (check_risks, RISKS_TEXT),
        (explain_clause, CLAUSE_TEXT),
    ];

    for document in documents {
        for (handler, expected) in cases {
            let mut state = UiState::new(document);
            handler(&mut state);
            assert_eq!(state.result.text(), expected);
            assert_eq!(state.document_text, document);
        }
    }
}

#[test]
fn each_command_appends_exactly_one_labelled_entry() {
    init_logging();
    let registry = CommandRegistry::with_defaults();
    let mut state = UiState::new("some lease");

    for (i, command) in Command::ALL.into_iter().enumerate() {
        assert!(registry.run(command, &mut state));
        assert_eq!(state.history.len(), i + 1);
        let last = state.history.last().expect("entry was appended");
        assert_eq!(last.text, format!("{} checked", command.label()));
        assert_eq!(state.result.text(), command.result_text());
    }
}

#[test]
fn commands_in_sequence_keep_invocation_order() {
    init_logging();
    let mut state = UiState::default();
    summarize(&mut state);
    check_risks(&mut state);
    explain_clause(&mut state);

    assert_eq!(
        state.history.texts(),
        vec!["Summary checked", "Risks checked", "Explain Clause checked"]
    );
    assert_eq!(state.result.text(), CLAUSE_TEXT);
}

#[test]
fn check_risks_on_short_lease() {
    init_logging();
    let mut state = UiState::new("This is a 12-month lease.");
    check_risks(&mut state);

    assert_eq!(
        state.result.text(),
        "⚠️ Risks:\n\n- Security Deposit (2 months)\n- Lock-in Period (6 months)\n- Rent Escalation (8%)\n- Penalty for late payment\n- Arbitration clause"
    );
    assert_eq!(state.history.texts(), vec!["Risks checked"]);
}

#[test]
fn repeating_a_command_appends_identical_entries() {
    init_logging();
    let mut state = UiState::new("lease");
    summarize(&mut state);
    let first = state.result.clone();
    summarize(&mut state);

    assert_eq!(state.result, first);
    assert_eq!(state.history.texts(), vec!["Summary checked", "Summary checked"]);
}

#[test]
fn save_history_uses_label_verbatim() {
    init_logging();
    let mut state = UiState::default();
    save_history(&mut state, "Custom");
    save_history(&mut state, "");

    assert_eq!(state.history.texts(), vec!["Custom checked", " checked"]);
    assert!(state.result.is_empty());
}

#[test]
fn history_timestamps_are_non_decreasing() {
    init_logging();
    let mut state = UiState::default();
    for _ in 0..5 {
        explain_clause(&mut state);
    }

    let entries = state.history.entries();
    assert!(entries.windows(2).all(|w| w[0].recorded_at <= w[1].recorded_at));
}
