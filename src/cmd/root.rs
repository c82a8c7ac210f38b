use crate::data::{QuoteSettings, QuoteVariant};
use crate::ui::quote_form::{run_app, QuoteForm};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::NaiveDate;

pub fn run(settings: QuoteSettings, variant: QuoteVariant, today: Option<NaiveDate>) -> Result<()> {
    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = QuoteForm::new(settings, variant);
    if let Some(today) = today {
        app = app.with_today(today);
    }
    tracing::info!(?variant, "quote form opened");

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    result
}
