use super::Workbench;
use crate::kernel::display::{employee_filter_label, summary_cards, type_filter_label};
use crate::kernel::NoticeLevel;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

mod dialogs;
mod table;

const SUBTITLE: &str = "Gestión de asistencia, evaluaciones, vacaciones y eventos";
const KEY_HINTS: &[(&str, &str)] = &[
    ("n", "Nuevo"),
    ("e", "Editar"),
    ("d", "Eliminar"),
    ("t", "Tipo"),
    ("f", "Empleado"),
    ("r", "Recargar"),
    ("l", "Registro"),
    ("q", "Salir"),
];

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let log_height = if workbench.store.state().ui.log_panel_visible {
        super::LOG_PANEL_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(super::HEADER_HEIGHT),
            Constraint::Length(super::CARDS_HEIGHT),
            Constraint::Length(super::FILTER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(log_height),
            Constraint::Length(super::STATUS_HEIGHT),
        ])
        .split(area);

    render_header(workbench, frame, chunks[0]);
    render_cards(workbench, frame, chunks[1]);
    render_filters(workbench, frame, chunks[2]);
    table::render_records(workbench, frame, chunks[3]);
    if log_height > 0 {
        render_log_panel(workbench, frame, chunks[4]);
    }
    render_status(workbench, frame, chunks[5]);

    if workbench.store.state().ui.record_dialog.visible {
        dialogs::render_record_dialog(workbench, frame, area);
    }
    if workbench.store.state().ui.confirm_dialog.visible {
        dialogs::render_confirm_dialog(workbench, frame, area);
    }
}

fn render_header(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let theme = &workbench.theme;
    let lines = vec![
        Line::from(Span::styled(
            "Recursos Humanos",
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(theme.muted_fg))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_cards(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let cards = summary_cards(&workbench.store.state().records.statistics);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, cards.len() as u32); 4])
        .split(area);

    let border = Style::default().fg(workbench.theme.inactive_border);
    let value_style = Style::default()
        .fg(workbench.theme.accent_fg)
        .add_modifier(Modifier::BOLD);
    for ((title, value), column) in cards.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(
                *title,
                Style::default().fg(workbench.theme.header_fg),
            ));
        let body = Paragraph::new(Line::from(Span::styled(value.to_string(), value_style)))
            .block(block);
        frame.render_widget(body, *column);
    }
}

fn render_filters(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let state = workbench.store.state();
    let theme = &workbench.theme;
    let key = Style::default().fg(theme.accent_fg);
    let muted = Style::default().fg(theme.muted_fg);

    let mut spans = vec![
        Span::styled("Tipo: ", muted),
        Span::raw(type_filter_label(state.filters.kind)),
        Span::styled(" [t]", key),
        Span::raw("   "),
        Span::styled("Empleado: ", muted),
        Span::raw(employee_filter_label(
            state.filters.employee_id.as_deref(),
            &state.records.employees,
        )),
        Span::styled(" [f]", key),
        Span::raw("   "),
        Span::styled(format!("{} registros", state.records.items.len()), muted),
    ];
    if state.records.loading && !state.records.items.is_empty() {
        spans.push(Span::styled("  (actualizando...)", muted));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_log_panel(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(workbench.theme.inactive_border))
        .title("Registro de actividad");
    let visible = area.height.saturating_sub(1) as usize;
    let skip = workbench.logs.len().saturating_sub(visible);
    let lines: Vec<Line> = workbench
        .logs()
        .skip(skip)
        .map(|line| Line::from(Span::styled(line, Style::default().fg(workbench.theme.muted_fg))))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let theme = &workbench.theme;
    let line = match &workbench.store.state().ui.notice {
        Some(notice) => {
            let fg = match notice.level {
                NoticeLevel::Error => theme.error_fg,
                NoticeLevel::Info => theme.accent_fg,
            };
            Line::from(vec![
                Span::styled(notice.message.as_str(), Style::default().fg(fg)),
                Span::styled("  [Esc]", Style::default().fg(theme.muted_fg)),
            ])
        }
        None => {
            let mut spans = Vec::with_capacity(KEY_HINTS.len() * 2);
            for (key, label) in KEY_HINTS {
                spans.push(Span::styled(*key, Style::default().fg(theme.accent_fg)));
                spans.push(Span::styled(
                    format!(" {label}  "),
                    Style::default().fg(theme.muted_fg),
                ));
            }
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Centres a `width` x `height` box inside `area`, shrinking it to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}
