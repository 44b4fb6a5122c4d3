use super::Workbench;
use crate::core::event::{InputEvent, Key};
use crate::core::view::EventResult;
use crate::kernel::Action as KernelAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const PAGE_STEP: isize = 10;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    let changed = match event {
        InputEvent::Resize(..) => true,
        InputEvent::Paste(text) => handle_paste(workbench, text),
        InputEvent::Key(_) => match event.as_key_press() {
            Some(key_event) => handle_key(workbench, key_event),
            None => false,
        },
        InputEvent::Other => false,
    };

    if workbench.should_quit() {
        EventResult::Quit
    } else if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

fn handle_paste(workbench: &mut Workbench, text: &str) -> bool {
    if !workbench.store.state().ui.record_dialog.visible {
        return false;
    }
    let mut changed = false;
    for ch in text.chars().filter(|c| !c.is_control()) {
        changed |= workbench.dispatch_kernel(KernelAction::DialogAppend(ch));
    }
    changed
}

fn handle_key(workbench: &mut Workbench, event: &KeyEvent) -> bool {
    let key = Key::from(event);
    if key == Key::ctrl(KeyCode::Char('c')) {
        return workbench.dispatch_kernel(KernelAction::Quit);
    }

    let ui = &workbench.store.state().ui;
    let action = if ui.confirm_dialog.visible {
        confirm_action(key)
    } else if ui.record_dialog.visible {
        let text_focus = ui.record_dialog.focus.is_text();
        record_dialog_action(key, event, text_focus)
    } else {
        main_action(key)
    };

    match action {
        Some(action) => workbench.dispatch_kernel(action),
        None => false,
    }
}

fn confirm_action(key: Key) -> Option<KernelAction> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('s') => {
            Some(KernelAction::ConfirmAccept)
        }
        KeyCode::Esc | KeyCode::Char('n') => Some(KernelAction::ConfirmCancel),
        _ => None,
    }
}

fn record_dialog_action(key: Key, event: &KeyEvent, text_focus: bool) -> Option<KernelAction> {
    if key == Key::ctrl(KeyCode::Char('s')) {
        return Some(KernelAction::DialogSubmit);
    }
    match key.code {
        KeyCode::Esc => Some(KernelAction::DialogCancel),
        KeyCode::Enter => Some(KernelAction::DialogSubmit),
        KeyCode::Tab | KeyCode::Down => Some(KernelAction::DialogFocus { delta: 1 }),
        KeyCode::BackTab | KeyCode::Up => Some(KernelAction::DialogFocus { delta: -1 }),
        KeyCode::Left if !text_focus => Some(KernelAction::DialogCycle { delta: -1 }),
        KeyCode::Right if !text_focus => Some(KernelAction::DialogCycle { delta: 1 }),
        KeyCode::Char(' ') if !text_focus => Some(KernelAction::DialogCycle { delta: 1 }),
        KeyCode::Backspace => Some(KernelAction::DialogBackspace),
        KeyCode::Char(_)
            if !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            // Raw event char keeps the case the user typed.
            match event.code {
                KeyCode::Char(ch) => Some(KernelAction::DialogAppend(ch)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn main_action(key: Key) -> Option<KernelAction> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('q') => Some(KernelAction::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(KernelAction::MoveSelection { delta: -1 }),
        KeyCode::Down | KeyCode::Char('j') => Some(KernelAction::MoveSelection { delta: 1 }),
        KeyCode::PageUp => Some(KernelAction::MoveSelection { delta: -PAGE_STEP }),
        KeyCode::PageDown => Some(KernelAction::MoveSelection { delta: PAGE_STEP }),
        KeyCode::Home => Some(KernelAction::MoveSelection {
            delta: isize::MIN / 2,
        }),
        KeyCode::End => Some(KernelAction::MoveSelection {
            delta: isize::MAX / 2,
        }),
        KeyCode::Char('n') => Some(KernelAction::OpenCreateDialog {
            today: chrono::Local::now().date_naive(),
        }),
        KeyCode::Char('e') | KeyCode::Enter => Some(KernelAction::OpenEditSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(KernelAction::RequestDeleteSelected),
        KeyCode::Char('t') => Some(KernelAction::CycleTypeFilter {
            delta: if shift { -1 } else { 1 },
        }),
        KeyCode::Char('f') => Some(KernelAction::CycleEmployeeFilter {
            delta: if shift { -1 } else { 1 },
        }),
        KeyCode::Char('r') | KeyCode::F(5) => Some(KernelAction::Refresh),
        KeyCode::Char('l') => Some(KernelAction::ToggleLogPanel),
        KeyCode::Esc => Some(KernelAction::DismissNotice),
        _ => None,
    }
}
