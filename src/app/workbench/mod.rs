//! Records screen: owns the store, forwards effects to the runtime and
//! turns runtime messages back into actions.

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime};
use crate::kernel::{Action as KernelAction, AppState, Store};
use chrono::NaiveDate;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};

mod input;
mod render;

const HEADER_HEIGHT: u16 = 2;
const CARDS_HEIGHT: u16 = 4;
const FILTER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const LOG_PANEL_HEIGHT: u16 = 8;
const LOG_BUFFER_CAP: usize = 2000;
const MAX_LOG_DRAIN_PER_TICK: usize = 1024;

pub struct Workbench {
    store: Store,
    runtime: AsyncRuntime,
    theme: UiTheme,
    log_rx: Option<Receiver<String>>,
    logs: VecDeque<String>,
}

impl Workbench {
    pub fn new(
        runtime: AsyncRuntime,
        log_rx: Option<Receiver<String>>,
        theme: UiTheme,
        today: NaiveDate,
    ) -> Self {
        Self {
            store: Store::new(AppState::new(today)),
            runtime,
            theme,
            log_rx,
            logs: VecDeque::with_capacity(256),
        }
    }

    /// Issues the initial fetch.
    pub fn start(&mut self) -> bool {
        tracing::info!("workbench started");
        self.dispatch_kernel(KernelAction::Refresh)
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(String::as_str)
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.runtime.run_effect(effect);
        }
        result.state_changed
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        let action = match msg {
            AppMessage::Refreshed {
                generation,
                records,
                employees,
            } => KernelAction::Refreshed {
                generation,
                records,
                employees,
            },
            AppMessage::RecordSaved { id, token, result } => {
                KernelAction::SaveFinished { id, token, result }
            }
            AppMessage::RecordDeleted { id, result } => KernelAction::DeleteFinished { id, result },
        };
        self.dispatch_kernel(action)
    }

    /// Called by the main loop between frames.
    pub fn tick(&mut self) -> bool {
        self.poll_logs()
    }

    fn poll_logs(&mut self) -> bool {
        let Some(rx) = self.log_rx.take() else {
            return false;
        };

        let mut changed = false;
        let mut drained = 0usize;
        let mut disconnected = false;

        loop {
            match rx.try_recv() {
                Ok(line) => {
                    changed = true;
                    drained += 1;
                    self.push_log(line);
                    if drained >= MAX_LOG_DRAIN_PER_TICK {
                        break;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if !disconnected {
            self.log_rx = Some(rx);
        }
        changed && self.store.state().ui.log_panel_visible
    }

    fn push_log(&mut self, line: String) {
        self.logs.push_back(line);
        while self.logs.len() > LOG_BUFFER_CAP {
            self.logs.pop_front();
        }
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
