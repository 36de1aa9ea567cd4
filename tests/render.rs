use leaselens::ui::{App, Command, render};
use ratatui::{Terminal, backend::TestBackend};

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn empty_state_shows_placeholder_and_document() {
    let app = App::new("This is a 12-month lease.");
    let screen = draw(&app);

    assert!(screen.contains("This is a 12-month lease."));
    assert!(screen.contains("Press [s], [r] or [x] to analyse the document"));
    assert!(screen.contains("History (0)"));
}

#[test]
fn result_and_history_are_rendered() {
    let mut app = App::new("lease");
    app.run_command(Command::CheckRisks);
    app.run_command(Command::Summarize);
    let screen = draw(&app);

    assert!(screen.contains("This document covers rent, deposit"));
    assert!(!screen.contains("Arbitration clause"));
    assert!(screen.contains("Risks checked"));
    assert!(screen.contains("Summary checked"));
    assert!(screen.contains("History (2)"));
}
