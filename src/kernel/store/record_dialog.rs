use crate::kernel::{Action, DraftField, Effect, HrDraft, Notice};

impl super::Store {
    pub(super) fn reduce_record_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::OpenCreateDialog { today } => {
                let dialog = &mut self.state.ui.record_dialog;
                dialog.today = today;
                dialog.close();
                dialog.visible = true;
                super::DispatchResult::changed(true)
            }
            Action::OpenEditSelected => {
                let Some(record) = self.state.records.selected_record() else {
                    return super::DispatchResult::changed(false);
                };
                let id = record.id.clone();
                let draft = HrDraft::from_record(record);
                let dialog = &mut self.state.ui.record_dialog;
                dialog.visible = true;
                dialog.editing = Some(id);
                dialog.draft = draft;
                dialog.focus = DraftField::Employee;
                dialog.error = None;
                dialog.submitting = false;
                super::DispatchResult::changed(true)
            }
            Action::DialogFocus { delta } => {
                let dialog = &mut self.state.ui.record_dialog;
                if !dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                super::DispatchResult::changed(dialog.move_focus(delta))
            }
            Action::DialogCycle { delta } => {
                let dialog = &mut self.state.ui.record_dialog;
                if !dialog.visible || dialog.submitting {
                    return super::DispatchResult::changed(false);
                }
                let changed = match dialog.focus {
                    DraftField::Employee => dialog
                        .draft
                        .cycle_employee(&self.state.records.employees, delta),
                    DraftField::Kind => {
                        let changed = dialog.draft.cycle_kind(delta);
                        dialog.fix_focus();
                        changed
                    }
                    DraftField::Status => dialog.draft.cycle_status(delta),
                    DraftField::Rating => dialog.draft.cycle_rating(delta),
                    DraftField::Date | DraftField::Notes => false,
                };
                if changed {
                    dialog.error = None;
                }
                super::DispatchResult::changed(changed)
            }
            Action::DialogAppend(ch) => {
                let dialog = &mut self.state.ui.record_dialog;
                if !dialog.visible || dialog.submitting || ch.is_control() {
                    return super::DispatchResult::changed(false);
                }
                let Some(text) = dialog.draft.text_mut(dialog.focus) else {
                    return super::DispatchResult::changed(false);
                };
                text.push(ch);
                dialog.error = None;
                super::DispatchResult::changed(true)
            }
            Action::DialogBackspace => {
                let dialog = &mut self.state.ui.record_dialog;
                if !dialog.visible || dialog.submitting {
                    return super::DispatchResult::changed(false);
                }
                let Some(text) = dialog.draft.text_mut(dialog.focus) else {
                    return super::DispatchResult::changed(false);
                };
                let changed = text.pop().is_some();
                if changed {
                    dialog.error = None;
                }
                super::DispatchResult::changed(changed)
            }
            Action::DialogSetKind(kind) => {
                let dialog = &mut self.state.ui.record_dialog;
                if !dialog.visible || dialog.submitting {
                    return super::DispatchResult::changed(false);
                }
                let changed = dialog.draft.set_kind(kind);
                dialog.fix_focus();
                super::DispatchResult::changed(changed)
            }
            Action::DialogSetStatus(label) => {
                let dialog = &mut self.state.ui.record_dialog;
                if !dialog.visible || dialog.submitting {
                    return super::DispatchResult::changed(false);
                }
                super::DispatchResult::changed(dialog.draft.set_status(label.as_deref()))
            }
            Action::DialogSubmit => {
                let dialog = &mut self.state.ui.record_dialog;
                if !dialog.visible || dialog.submitting {
                    return super::DispatchResult::changed(false);
                }
                match dialog.draft.to_payload() {
                    Ok(payload) => {
                        dialog.error = None;
                        dialog.submitting = true;
                        dialog.save_token += 1;
                        super::DispatchResult {
                            effects: vec![Effect::SaveRecord {
                                id: dialog.editing.clone(),
                                token: dialog.save_token,
                                payload,
                            }],
                            state_changed: true,
                        }
                    }
                    Err(e) => {
                        dialog.error = Some(e.to_string());
                        super::DispatchResult::changed(true)
                    }
                }
            }
            Action::DialogCancel => {
                let dialog = &mut self.state.ui.record_dialog;
                if !dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                dialog.visible = false;
                dialog.editing = None;
                dialog.error = None;
                dialog.submitting = false;
                super::DispatchResult::changed(true)
            }
            Action::SaveFinished { id, token, result } => {
                let dialog = &mut self.state.ui.record_dialog;
                let pending = dialog.visible && dialog.submitting && dialog.save_token == token;
                match result {
                    Ok(()) => {
                        tracing::info!(id = ?id, token, "hr record saved");
                        if pending {
                            dialog.close();
                        }
                        self.refresh()
                    }
                    Err(e) => {
                        tracing::warn!(id = ?id, token, error = %e, "hr record save failed");
                        if pending {
                            dialog.submitting = false;
                            dialog.error = Some(e.to_string());
                        } else {
                            self.raise(Notice::error(format!(
                                "No se pudo guardar el registro: {e}"
                            )));
                        }
                        super::DispatchResult::changed(true)
                    }
                }
            }
            _ => super::DispatchResult::changed(false),
        }
    }
}
