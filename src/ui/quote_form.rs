use crate::calc::{quote_from_raw, today_at_offset, RawInput};
use crate::data::{QuoteSettings, QuoteVariant};
use crate::display::{format_outcome, DisplayText, Emphasis};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

// Highlight for the VAT-inclusive total
const TOTAL_COLOR: Color = Color::Rgb(0x19, 0x76, 0xD2);

const LABEL_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Traffic,
    TrafficUnitCost,
    Storage,
    StorageUnitCost,
    WorkDays,
}

impl FieldKind {
    fn label(self) -> &'static str {
        match self {
            FieldKind::Traffic => "일 트래픽",
            FieldKind::TrafficUnitCost => "트래픽 단가",
            FieldKind::Storage => "일 저장하기",
            FieldKind::StorageUnitCost => "저장하기 단가",
            FieldKind::WorkDays => "작업 일수",
        }
    }
}

struct FormField {
    kind: FieldKind,
    value: String,
}

pub struct QuoteForm {
    settings: QuoteSettings,
    variant: QuoteVariant,
    fields: Vec<FormField>,
    focus: usize,
    output: DisplayText,
    /// When Some, used instead of the wall clock. Tests pin the date here.
    today: Option<NaiveDate>,
}

impl QuoteForm {
    pub fn new(settings: QuoteSettings, variant: QuoteVariant) -> Self {
        let mut kinds = vec![
            FieldKind::Traffic,
            FieldKind::TrafficUnitCost,
            FieldKind::Storage,
            FieldKind::StorageUnitCost,
        ];
        if variant == QuoteVariant::Scheduled {
            kinds.push(FieldKind::WorkDays);
        }
        let fields = kinds
            .into_iter()
            .map(|kind| {
                let value = match kind {
                    FieldKind::TrafficUnitCost => settings.default_traffic_unit_cost.to_string(),
                    FieldKind::StorageUnitCost => settings.default_storage_unit_cost.to_string(),
                    FieldKind::WorkDays => settings.default_work_days.to_string(),
                    FieldKind::Traffic | FieldKind::Storage => String::new(),
                };
                FormField { kind, value }
            })
            .collect();
        QuoteForm {
            settings,
            variant,
            fields,
            focus: 0,
            output: DisplayText::default(),
            today: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn field(&self, kind: FieldKind) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.value.as_str())
    }

    fn raw_input(&self) -> RawInput {
        let text = |kind| self.field(kind).unwrap_or_default().to_string();
        RawInput {
            traffic_count: text(FieldKind::Traffic),
            storage_count: text(FieldKind::Storage),
            traffic_unit_cost: text(FieldKind::TrafficUnitCost),
            storage_unit_cost: text(FieldKind::StorageUnitCost),
            work_days: self.field(FieldKind::WorkDays).map(str::to_string),
        }
    }

    /// Replaces the result pane with a fresh calculation.
    fn calculate(&mut self) {
        let today = self
            .today
            .unwrap_or_else(|| today_at_offset(self.settings.utc_offset_hours));
        let outcome = quote_from_raw(&self.raw_input(), today, self.settings.vat_rate);
        self.output = format_outcome(&outcome, &self.settings);
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Esc => return true,
            KeyCode::Enter => self.calculate(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.fields.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
            }
            KeyCode::Backspace => {
                if let Some(f) = self.fields.get_mut(self.focus) {
                    f.value.pop();
                }
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(f) = self.fields.get_mut(self.focus) {
                    f.value.push(c);
                }
            }
            _ => {}
        }
        false
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // title
                Constraint::Length(self.fields.len() as u16 + 2), // inputs
                Constraint::Min(8), // result
                Constraint::Length(1), // key hints
            ])
            .split(f.area());

        let title = match self.variant {
            QuoteVariant::Scheduled => "견적서",
            QuoteVariant::FixedWeek => "견적서 (7일)",
        };
        let title = Paragraph::new(Line::from(Span::styled(
            title,
            Style::default().fg(TOTAL_COLOR).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(title, chunks[0]);

        self.render_inputs(f, chunks[1]);
        self.render_result(f, chunks[2]);

        let hints = Paragraph::new(Line::from(Span::styled(
            "Tab/Up/Down=move  Enter=calculate  Esc=quit",
            Style::default().fg(Color::DarkGray),
        )));
        f.render_widget(hints, chunks[3]);
    }

    fn render_inputs(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let focused = i == self.focus;
                let label = format!("  {:<width$}", field.kind.label(), width = LABEL_WIDTH);
                let value = if focused {
                    format!("{}_", field.value)
                } else {
                    field.value.clone()
                };
                let style = if focused {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![Span::raw(label), Span::styled(value, style)])
            })
            .collect();
        let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" 입력 "));
        f.render_widget(p, area);
    }

    fn render_result(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .output
            .lines()
            .into_iter()
            .map(|runs| {
                Line::from(
                    runs.into_iter()
                        .map(|(text, emphasis)| match emphasis {
                            Emphasis::Normal => Span::raw(text.to_string()),
                            Emphasis::BoldHighlight => Span::styled(
                                text.to_string(),
                                Style::default().fg(TOTAL_COLOR).add_modifier(Modifier::BOLD),
                            ),
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
        let p = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" 결과 "));
        f.render_widget(p, area);
    }
}

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut QuoteForm) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}
