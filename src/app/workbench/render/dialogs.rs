use super::super::Workbench;
use super::centered;
use crate::kernel::{DraftField, HrDraft};
use crate::models::EmployeeDirectory;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const DIALOG_WIDTH: u16 = 64;
const LABEL_WIDTH: usize = 20;

pub(super) fn render_record_dialog(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let state = workbench.store.state();
    let dialog = &state.ui.record_dialog;
    let theme = &workbench.theme;

    let fields = dialog.draft.visible_fields();
    // Fields, blank, error, hints, plus the border.
    let height = fields.len() as u16 + 5;
    let dialog_area = centered(area, DIALOG_WIDTH, height);
    if dialog_area.width < 24 || dialog_area.height < 4 {
        return;
    }

    let base_style = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
    let label_style = Style::default().fg(theme.muted_fg);
    let focus_style = Style::default()
        .fg(theme.accent_fg)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(fields.len() + 3);
    for field in fields {
        let focused = *field == dialog.focus;
        let marker = if focused { "> " } else { "  " };
        let label = field.label();
        let pad = LABEL_WIDTH.saturating_sub(label.width());
        let value = field_value(&dialog.draft, *field, &state.records.employees, focused);
        lines.push(Line::from(vec![
            Span::styled(marker, focus_style),
            Span::styled(format!("{label}{}", " ".repeat(pad)), label_style),
            Span::styled(value, if focused { focus_style } else { base_style }),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(match &dialog.error {
        Some(error) => Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(theme.error_fg),
        )),
        None => Line::raw(""),
    });

    let hint_key = Style::default().fg(theme.accent_fg);
    let hint_text = Style::default().fg(theme.muted_fg);
    lines.push(if dialog.submitting {
        Line::from(Span::styled("Guardando...", hint_text))
    } else {
        Line::from(vec![
            Span::styled("[Enter]", hint_key),
            Span::styled(format!(" {}  ", dialog.submit_label()), hint_text),
            Span::styled("[Esc]", hint_key),
            Span::styled(" Cancelar  ", hint_text),
            Span::styled("[Tab]", hint_key),
            Span::styled(" Campo  ", hint_text),
            Span::styled("[←/→]", hint_key),
            Span::styled(" Cambiar", hint_text),
        ])
    });

    frame.render_widget(Clear, dialog_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.focus_border))
        .style(base_style)
        .title(Span::styled(
            dialog.title(),
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Paragraph::new(lines).block(block), dialog_area);
}

fn field_value(
    draft: &HrDraft,
    field: DraftField,
    employees: &EmployeeDirectory,
    focused: bool,
) -> String {
    let select = |text: String| {
        if focused {
            format!("◀ {text} ▶")
        } else {
            text
        }
    };
    match field {
        DraftField::Employee => select(if draft.employee_id.is_empty() {
            "Seleccionar empleado".to_string()
        } else {
            employees
                .get(&draft.employee_id)
                .map(|e| e.option_label())
                .unwrap_or_else(|| draft.employee_id.clone())
        }),
        DraftField::Kind => select(draft.kind.label().to_string()),
        DraftField::Status => select(draft.status.unwrap_or("Seleccionar estado").to_string()),
        DraftField::Rating => select(format!(
            "{} - {} {}",
            draft.rating.get(),
            draft.rating.label(),
            draft.rating.stars()
        )),
        DraftField::Date | DraftField::Notes => {
            let text = draft.text(field).unwrap_or_default().to_string();
            if focused {
                format!("{text}_")
            } else {
                text
            }
        }
    }
}

pub(super) fn render_confirm_dialog(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let dialog = &workbench.store.state().ui.confirm_dialog;
    let theme = &workbench.theme;

    let dialog_area = centered(area, 56, 6);
    if dialog_area.width < 20 || dialog_area.height < 4 {
        return;
    }

    let base_style = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
    let hint_line = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(theme.error_fg)),
        Span::raw(" Eliminar  "),
        Span::styled("[Esc]", Style::default().fg(theme.muted_fg)),
        Span::raw(" Cancelar"),
    ]);
    let content = Paragraph::new(vec![
        Line::from(dialog.message.as_str()),
        Line::raw(""),
        hint_line,
    ])
    .style(base_style)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error_fg))
            .style(base_style)
            .title(Span::styled(
                "Confirmar",
                Style::default()
                    .fg(theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(content, dialog_area);
}
