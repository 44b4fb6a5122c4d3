use super::*;
use crate::kernel::services::ports::{
    ApiError, ApiFuture, HrBackend, HrListPage, HrQuery, HrRecordPayload,
};
use crate::models::{Employee, EmployeeRef, HrDetails, HrKind, HrRecord, HrStatistics, Rating};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::{mpsc, Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Default)]
struct MemoryBackend {
    records: Mutex<Vec<HrRecord>>,
    employees: Vec<Employee>,
    next_id: Mutex<u32>,
    fail_saves: bool,
}

impl MemoryBackend {
    fn snapshot(&self) -> Vec<HrRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl HrBackend for MemoryBackend {
    fn list_records<'a>(&'a self, query: &'a HrQuery) -> ApiFuture<'a, HrListPage> {
        Box::pin(async move {
            let all = self.records.lock().unwrap();
            let mut statistics = HrStatistics::default();
            for record in all.iter() {
                match record.kind() {
                    HrKind::Attendance => statistics.attendance += 1,
                    HrKind::Evaluation => statistics.evaluation += 1,
                    HrKind::Vacation => statistics.vacation += 1,
                    HrKind::Event => statistics.event += 1,
                }
            }
            let records = all
                .iter()
                .filter(|r| query.kind.map_or(true, |k| r.kind() == k))
                .filter(|r| {
                    query
                        .employee_id
                        .as_deref()
                        .map_or(true, |id| r.employee.id() == id)
                })
                .cloned()
                .collect();
            Ok(HrListPage {
                records,
                statistics,
                skipped: 0,
            })
        })
    }

    fn list_employees(&self) -> ApiFuture<'_, Vec<Employee>> {
        Box::pin(async move { Ok(self.employees.clone()) })
    }

    fn create_record<'a>(&'a self, payload: &'a HrRecordPayload) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            if self.fail_saves {
                return Err(ApiError::Status {
                    status: 500,
                    message: "Failed to create HR record".to_string(),
                });
            }
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            self.records.lock().unwrap().push(HrRecord {
                id: format!("new{}", *next_id),
                employee: EmployeeRef::Id(payload.employee_id.clone()),
                date: payload.date,
                details: payload.details.clone(),
                notes: Some(payload.notes.clone()),
                data: Some(payload.data.clone()),
                created_at: None,
                updated_at: None,
            });
            Ok(())
        })
    }

    fn update_record<'a>(
        &'a self,
        id: &'a str,
        payload: &'a HrRecordPayload,
    ) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            let mut records = self.records.lock().unwrap();
            let Some(record) = records.iter_mut().find(|r| r.id == id) else {
                return Err(ApiError::Status {
                    status: 404,
                    message: "HR record not found".to_string(),
                });
            };
            record.details = payload.details.clone();
            record.notes = Some(payload.notes.clone());
            Ok(())
        })
    }

    fn delete_record<'a>(&'a self, id: &'a str) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            self.records.lock().unwrap().retain(|r| r.id != id);
            Ok(())
        })
    }
}

fn employee(id: &str, first: &str, last: &str, code: &str) -> Employee {
    Employee {
        id: id.to_string(),
        employee_id: code.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        ..Employee::default()
    }
}

fn record(id: &str, employee_id: &str, details: HrDetails) -> HrRecord {
    HrRecord {
        id: id.to_string(),
        employee: EmployeeRef::Id(employee_id.to_string()),
        date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        details,
        notes: Some("revisión".to_string()),
        data: None,
        created_at: None,
        updated_at: None,
    }
}

fn seeded_backend() -> MemoryBackend {
    let attendance = || HrDetails::Attendance { status: None };
    MemoryBackend {
        records: Mutex::new(vec![
            record("a1", "e1", attendance()),
            record("a2", "e2", attendance()),
            record("a3", "e9", attendance()),
            record(
                "v1",
                "e1",
                HrDetails::Evaluation {
                    status: None,
                    rating: Rating::new(4),
                },
            ),
            record("x1", "e2", HrDetails::Event { status: None }),
            record("x2", "e2", HrDetails::Event { status: None }),
        ]),
        employees: vec![
            employee("e1", "Ana", "Lopez", "EMP001"),
            employee("e2", "Luis", "Gómez", "EMP002"),
        ],
        ..MemoryBackend::default()
    }
}

fn create_test_workbench(
    backend: Arc<MemoryBackend>,
) -> (Workbench, mpsc::Receiver<AppMessage>) {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx, backend).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    (Workbench::new(runtime, None, UiTheme::default(), today), rx)
}

fn drain_runtime_messages(workbench: &mut Workbench, rx: &mpsc::Receiver<AppMessage>) -> bool {
    let mut changed = false;
    while let Ok(msg) = rx.try_recv() {
        workbench.handle_message(msg);
        changed = true;
    }
    changed
}

fn drive_until(
    workbench: &mut Workbench,
    rx: &mpsc::Receiver<AppMessage>,
    timeout: Duration,
    mut done: impl FnMut(&Workbench) -> bool,
) {
    let start = Instant::now();
    loop {
        drain_runtime_messages(workbench, rx);
        workbench.tick();
        if done(workbench) {
            return;
        }
        if start.elapsed() > timeout {
            panic!("timeout waiting for condition");
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn loaded(workbench: &Workbench) -> bool {
    !workbench.state().records.loading
}

fn key(workbench: &mut Workbench, code: KeyCode) -> EventResult {
    workbench.handle_input(&InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn render_lines(workbench: &mut Workbench, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            workbench.render(frame, area);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

#[test]
fn start_loads_records_and_employees() {
    let (mut workbench, rx) = create_test_workbench(Arc::new(seeded_backend()));
    assert!(workbench.start());
    assert!(workbench.state().records.loading);

    drive_until(&mut workbench, &rx, Duration::from_secs(5), loaded);

    let records = &workbench.state().records;
    assert_eq!(records.items.len(), 6);
    assert_eq!(records.employees.len(), 2);
    assert_eq!(records.statistics.attendance, 3);
    assert!(workbench.state().ui.notice.is_none());
}

#[test]
fn render_shows_cards_in_order_and_table_rows() {
    let (mut workbench, rx) = create_test_workbench(Arc::new(seeded_backend()));
    workbench.start();
    drive_until(&mut workbench, &rx, Duration::from_secs(5), loaded);

    let lines = render_lines(&mut workbench, 120, 30);
    assert!(lines[0].contains("Recursos Humanos"));

    let card_titles = &lines[2];
    let positions: Vec<usize> = [
        "Registros de Asistencia",
        "Evaluaciones",
        "Vacaciones",
        "Eventos",
    ]
    .iter()
    .map(|title| card_titles.find(title).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let digits: String = lines[3].chars().filter(char::is_ascii_digit).collect();
    assert_eq!(digits, "3102");

    let screen = lines.join("\n");
    assert!(screen.contains("Todos los tipos"));
    assert!(screen.contains("Todos los empleados"));
    assert!(screen.contains("Ana Lopez"));
    assert!(screen.contains("N/A"));
    assert!(screen.contains("05/03/2024"));
    assert!(screen.contains("★★★★☆"));
    assert!(screen.contains("Calificación"));
}

#[test]
fn render_shows_loading_text_before_first_response() {
    let (mut workbench, _rx) = create_test_workbench(Arc::new(seeded_backend()));
    workbench.start();
    let screen = render_lines(&mut workbench, 100, 24).join("\n");
    assert!(screen.contains("Cargando registros..."));
}

#[test]
fn filter_change_hides_rows_until_new_list_arrives() {
    let (mut workbench, rx) = create_test_workbench(Arc::new(seeded_backend()));
    workbench.start();
    drive_until(&mut workbench, &rx, Duration::from_secs(5), loaded);
    assert!(render_lines(&mut workbench, 120, 30).join("\n").contains("Ana Lopez"));

    key(&mut workbench, KeyCode::Char('t'));
    assert!(workbench.state().records.loading);
    let screen = render_lines(&mut workbench, 120, 30).join("\n");
    assert!(screen.contains("Cargando registros..."));
    assert!(!screen.contains("Ana Lopez"));
    assert!(!screen.contains("05/03/2024"));

    drive_until(&mut workbench, &rx, Duration::from_secs(5), loaded);
    let screen = render_lines(&mut workbench, 120, 30).join("\n");
    assert!(!screen.contains("Cargando registros..."));
    assert!(screen.contains("Ana Lopez"));
}

#[test]
fn type_filter_key_refetches_filtered_list() {
    let (mut workbench, rx) = create_test_workbench(Arc::new(seeded_backend()));
    workbench.start();
    drive_until(&mut workbench, &rx, Duration::from_secs(5), loaded);

    // Attendance, then evaluation.
    key(&mut workbench, KeyCode::Char('t'));
    key(&mut workbench, KeyCode::Char('t'));
    assert_eq!(workbench.state().filters.kind, Some(HrKind::Evaluation));
    drive_until(&mut workbench, &rx, Duration::from_secs(5), loaded);

    let records = &workbench.state().records;
    assert_eq!(records.items.len(), 1);
    assert_eq!(records.items[0].id, "v1");
    assert_eq!(records.statistics.event, 2);
}

#[test]
fn delete_flow_removes_record_after_confirmation() {
    let backend = Arc::new(seeded_backend());
    let (mut workbench, rx) = create_test_workbench(backend.clone());
    workbench.start();
    drive_until(&mut workbench, &rx, Duration::from_secs(5), loaded);

    key(&mut workbench, KeyCode::Char('d'));
    assert!(workbench.state().ui.confirm_dialog.visible);
    let screen = render_lines(&mut workbench, 100, 30).join("\n");
    assert!(screen.contains("¿Estás seguro de que quieres eliminar este registro?"));

    key(&mut workbench, KeyCode::Esc);
    assert!(!workbench.state().ui.confirm_dialog.visible);
    assert_eq!(backend.snapshot().len(), 6);

    key(&mut workbench, KeyCode::Char('d'));
    key(&mut workbench, KeyCode::Enter);
    drive_until(&mut workbench, &rx, Duration::from_secs(5), |wb| {
        loaded(wb) && wb.state().records.items.len() == 5
    });
    assert!(backend.snapshot().iter().all(|r| r.id != "a1"));
}

#[test]
fn create_flow_posts_draft_and_closes_dialog() {
    let backend = Arc::new(seeded_backend());
    let (mut workbench, rx) = create_test_workbench(backend.clone());
    workbench.start();
    drive_until(&mut workbench, &rx, Duration::from_secs(5), loaded);

    key(&mut workbench, KeyCode::Char('n'));
    assert!(workbench.state().ui.record_dialog.visible);
    let screen = render_lines(&mut workbench, 100, 30).join("\n");
    assert!(screen.contains("Nuevo Registro de RRHH"));
    assert!(screen.contains("Crear Registro"));

    // Employee select: first employee.
    key(&mut workbench, KeyCode::Right);
    // Type select: attendance -> evaluation.
    key(&mut workbench, KeyCode::Tab);
    key(&mut workbench, KeyCode::Right);
    // Date, status, rating, notes.
    key(&mut workbench, KeyCode::Tab);
    key(&mut workbench, KeyCode::Tab);
    key(&mut workbench, KeyCode::Right);
    key(&mut workbench, KeyCode::Tab);
    key(&mut workbench, KeyCode::Left);
    key(&mut workbench, KeyCode::Tab);
    for ch in "Buen trimestre".chars() {
        key(&mut workbench, KeyCode::Char(ch));
    }

    let draft = &workbench.state().ui.record_dialog.draft;
    assert_eq!(draft.employee_id, "e1");
    assert_eq!(draft.kind, HrKind::Evaluation);
    assert_eq!(draft.status, Some("Completada"));
    assert_eq!(draft.rating.get(), 4);
    assert_eq!(draft.notes, "Buen trimestre");

    key(&mut workbench, KeyCode::Enter);
    drive_until(&mut workbench, &rx, Duration::from_secs(5), |wb| {
        !wb.state().ui.record_dialog.visible && loaded(wb) && wb.state().records.items.len() == 7
    });

    let created = backend
        .snapshot()
        .into_iter()
        .find(|r| r.id.starts_with("new"))
        .unwrap();
    assert_eq!(created.kind(), HrKind::Evaluation);
    assert_eq!(created.rating(), Rating::new(4));
    assert_eq!(created.date, chrono::Local::now().date_naive());
    assert_eq!(created.notes.as_deref(), Some("Buen trimestre"));
}

#[test]
fn failed_save_keeps_dialog_open_with_error() {
    let backend = Arc::new(MemoryBackend {
        fail_saves: true,
        ..seeded_backend()
    });
    let (mut workbench, rx) = create_test_workbench(backend);
    workbench.start();
    drive_until(&mut workbench, &rx, Duration::from_secs(5), loaded);

    key(&mut workbench, KeyCode::Char('n'));
    key(&mut workbench, KeyCode::Right);
    key(&mut workbench, KeyCode::Enter);
    drive_until(&mut workbench, &rx, Duration::from_secs(5), |wb| {
        !wb.state().ui.record_dialog.submitting
    });

    let dialog = &workbench.state().ui.record_dialog;
    assert!(dialog.visible);
    assert_eq!(dialog.draft.employee_id, "e1");
    assert!(dialog
        .error
        .as_deref()
        .unwrap()
        .contains("Failed to create HR record"));
}

#[test]
fn edit_flow_updates_selected_record() {
    let backend = Arc::new(seeded_backend());
    let (mut workbench, rx) = create_test_workbench(backend.clone());
    workbench.start();
    drive_until(&mut workbench, &rx, Duration::from_secs(5), loaded);

    key(&mut workbench, KeyCode::Down);
    key(&mut workbench, KeyCode::Char('e'));
    let dialog = &workbench.state().ui.record_dialog;
    assert_eq!(dialog.editing.as_deref(), Some("a2"));
    assert_eq!(dialog.draft.employee_id, "e2");
    let screen = render_lines(&mut workbench, 100, 30).join("\n");
    assert!(screen.contains("Editar Registro"));
    assert!(screen.contains("Actualizar Registro"));

    for _ in 0..3 {
        key(&mut workbench, KeyCode::Tab);
    }
    assert_eq!(workbench.state().ui.record_dialog.focus, crate::kernel::DraftField::Status);
    key(&mut workbench, KeyCode::Char(' '));
    key(&mut workbench, KeyCode::Enter);
    drive_until(&mut workbench, &rx, Duration::from_secs(5), |wb| {
        !wb.state().ui.record_dialog.visible && loaded(wb)
    });

    let updated = backend
        .snapshot()
        .into_iter()
        .find(|r| r.id == "a2")
        .unwrap();
    assert_eq!(updated.status_label(), Some("Presente"));
}

#[test]
fn quit_key_reports_quit() {
    let (mut workbench, _rx) = create_test_workbench(Arc::new(seeded_backend()));
    assert_eq!(key(&mut workbench, KeyCode::Char('q')), EventResult::Quit);
    assert!(workbench.should_quit());
}

#[test]
fn log_lines_are_buffered_from_channel() {
    let (tx, rx) = mpsc::channel();
    let (runtime_tx, _runtime_rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(runtime_tx, Arc::new(seeded_backend())).unwrap();
    let mut workbench = Workbench::new(
        runtime,
        Some(rx),
        UiTheme::default(),
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    );

    tx.send("INFO neli_hr: hello".to_string()).unwrap();
    assert!(!workbench.tick());
    assert_eq!(workbench.logs().collect::<Vec<_>>(), vec!["INFO neli_hr: hello"]);

    key(&mut workbench, KeyCode::Char('l'));
    tx.send("INFO neli_hr: again".to_string()).unwrap();
    assert!(workbench.tick());
    let screen = render_lines(&mut workbench, 100, 30).join("\n");
    assert!(screen.contains("neli_hr: again"));
}
