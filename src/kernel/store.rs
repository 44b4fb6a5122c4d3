use super::{Action, AppState, Effect, Notice};

mod record_dialog;
mod records;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Refresh
            | Action::Refreshed { .. }
            | Action::SetTypeFilter(_)
            | Action::CycleTypeFilter { .. }
            | Action::SetEmployeeFilter(_)
            | Action::CycleEmployeeFilter { .. }
            | Action::MoveSelection { .. }
            | Action::RequestDeleteSelected
            | Action::ConfirmAccept
            | Action::ConfirmCancel
            | Action::DeleteFinished { .. } => self.reduce_records_action(action),
            Action::OpenCreateDialog { .. }
            | Action::OpenEditSelected
            | Action::DialogFocus { .. }
            | Action::DialogCycle { .. }
            | Action::DialogAppend(_)
            | Action::DialogBackspace
            | Action::DialogSetKind(_)
            | Action::DialogSetStatus(_)
            | Action::DialogSubmit
            | Action::DialogCancel
            | Action::SaveFinished { .. } => self.reduce_record_dialog_action(action),
            Action::ToggleLogPanel => {
                self.state.ui.log_panel_visible = !self.state.ui.log_panel_visible;
                DispatchResult::changed(true)
            }
            Action::DismissNotice => DispatchResult::changed(self.state.ui.notice.take().is_some()),
            Action::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult::changed(true)
            }
        }
    }

    fn refresh(&mut self) -> DispatchResult {
        let generation = self.state.records.begin_refresh();
        let query = self.state.filters.query();
        tracing::debug!(generation, ?query, "refresh");
        DispatchResult {
            effects: vec![Effect::Refresh { generation, query }],
            state_changed: true,
        }
    }

    fn raise(&mut self, notice: Notice) {
        self.state.ui.notice = Some(notice);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
