use super::super::Workbench;
use crate::kernel::display::{employee_name, type_badge, BadgeVariant};
use crate::models::HrRecord;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

const HEADERS: [&str; 6] = ["Empleado", "Tipo", "Fecha", "Estado", "Calificación", "Notas"];
const DISPLAY_DATE: &str = "%d/%m/%Y";
const EMPTY_CELL: &str = "-";

pub(super) fn render_records(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let state = workbench.store.state();
    let theme = &workbench.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.focus_border))
        .title(Span::styled(
            "Registros de RRHH",
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ));

    let records = &state.records;
    if records.loading || records.items.is_empty() {
        let text = if records.loading {
            "Cargando registros..."
        } else {
            "No hay registros"
        };
        let body = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(theme.muted_fg),
        )))
        .block(block);
        frame.render_widget(body, area);
        return;
    }

    let header = Row::new(HEADERS.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        )
    }));
    let rows = records.items.iter().map(|record| record_row(workbench, record));
    let widths = [
        Constraint::Percentage(20),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(11),
        Constraint::Length(12),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .highlight_style(
            Style::default()
                .bg(theme.selected_bg)
                .fg(theme.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(records.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn record_row<'a>(workbench: &'a Workbench, record: &'a HrRecord) -> Row<'a> {
    let theme = &workbench.theme;
    let badge = type_badge(record.kind());
    let badge_style = match badge.variant {
        BadgeVariant::Default => Style::default()
            .fg(theme.accent_fg)
            .add_modifier(Modifier::BOLD),
        BadgeVariant::Secondary => Style::default().fg(theme.header_fg),
        BadgeVariant::Outline => Style::default().add_modifier(Modifier::UNDERLINED),
        BadgeVariant::Destructive => Style::default().fg(theme.error_fg),
    };

    let name = employee_name(&record.employee, &workbench.store.state().records.employees);
    let rating = match record.rating() {
        Some(rating) => Cell::from(rating.stars()).style(Style::default().fg(theme.rating_fg)),
        None => Cell::from(EMPTY_CELL),
    };

    Row::new(vec![
        Cell::from(name),
        Cell::from(format!("{} {}", badge.icon.glyph(), badge.label)).style(badge_style),
        Cell::from(record.date.format(DISPLAY_DATE).to_string()),
        Cell::from(record.status_label().unwrap_or(EMPTY_CELL)),
        rating,
        Cell::from(record.notes.as_deref().unwrap_or(EMPTY_CELL)),
    ])
}
