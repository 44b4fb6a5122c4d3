use crate::kernel::{Action, Effect, Notice, NoticeSource, PendingAction};

const DELETE_PROMPT: &str = "¿Estás seguro de que quieres eliminar este registro?";

impl super::Store {
    pub(super) fn reduce_records_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::Refresh => self.refresh(),
            Action::Refreshed {
                generation,
                records,
                employees,
            } => {
                let state = &mut self.state.records;
                if !state.is_current(generation) {
                    tracing::debug!(
                        generation,
                        current = state.generation(),
                        "dropping stale refresh"
                    );
                    return super::DispatchResult::changed(false);
                }

                state.loading = false;
                let mut errors = Vec::new();
                match records {
                    Ok(page) => {
                        state.items = page.records;
                        state.statistics = page.statistics;
                        state.skipped = page.skipped;
                        state.clamp_selection();
                    }
                    Err(e) => errors.push(format!("Error al cargar registros: {e}")),
                }
                match employees {
                    Ok(list) => state.employees.replace(list),
                    Err(e) => errors.push(format!("Error al cargar empleados: {e}")),
                }

                let skipped = state.skipped;
                let notice = if !errors.is_empty() {
                    Some(Notice::error(errors.join("; ")))
                } else if skipped > 0 {
                    Some(Notice::info(format!(
                        "{skipped} registro(s) omitido(s) por datos inválidos"
                    )))
                } else {
                    None
                };
                match notice {
                    Some(notice) => self.raise(notice.from_refresh()),
                    None => {
                        let ui = &mut self.state.ui;
                        if ui
                            .notice
                            .as_ref()
                            .is_some_and(|n| n.source == NoticeSource::Refresh)
                        {
                            ui.notice = None;
                        }
                    }
                }
                super::DispatchResult::changed(true)
            }
            Action::SetTypeFilter(kind) => {
                if self.state.filters.kind == kind {
                    return super::DispatchResult::changed(false);
                }
                self.state.filters.kind = kind;
                self.refresh()
            }
            Action::CycleTypeFilter { delta } => {
                self.state.filters.cycle_kind(delta);
                self.refresh()
            }
            Action::SetEmployeeFilter(employee_id) => {
                let employee_id = employee_id.filter(|id| !id.is_empty());
                if self.state.filters.employee_id == employee_id {
                    return super::DispatchResult::changed(false);
                }
                self.state.filters.employee_id = employee_id;
                self.refresh()
            }
            Action::CycleEmployeeFilter { delta } => {
                let prev = self.state.filters.employee_id.clone();
                let employees = &self.state.records.employees;
                self.state.filters.cycle_employee(employees, delta);
                if self.state.filters.employee_id == prev {
                    return super::DispatchResult::changed(false);
                }
                self.refresh()
            }
            Action::MoveSelection { delta } => {
                super::DispatchResult::changed(self.state.records.move_selection(delta))
            }
            Action::RequestDeleteSelected => {
                let Some(record) = self.state.records.selected_record() else {
                    return super::DispatchResult::changed(false);
                };
                let id = record.id.clone();
                let dialog = &mut self.state.ui.confirm_dialog;
                dialog.visible = true;
                dialog.message = DELETE_PROMPT.to_string();
                dialog.on_confirm = Some(PendingAction::DeleteRecord { id });
                super::DispatchResult::changed(true)
            }
            Action::ConfirmAccept => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                dialog.visible = false;
                dialog.message.clear();
                let effects = match dialog.on_confirm.take() {
                    Some(PendingAction::DeleteRecord { id }) => vec![Effect::DeleteRecord { id }],
                    None => Vec::new(),
                };
                super::DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::ConfirmCancel => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                dialog.visible = false;
                dialog.message.clear();
                dialog.on_confirm = None;
                super::DispatchResult::changed(true)
            }
            Action::DeleteFinished { id, result } => match result {
                Ok(()) => {
                    tracing::info!(id = %id, "hr record deleted");
                    self.refresh()
                }
                Err(e) => {
                    self.raise(Notice::error(format!("No se pudo eliminar el registro: {e}")));
                    super::DispatchResult::changed(true)
                }
            },
            _ => super::DispatchResult::changed(false),
        }
    }
}
