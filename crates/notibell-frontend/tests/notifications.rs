use std::time::Duration;

use notibell_bridge::{
    MessageFromBackend,
    config::{Config, ToastConfig},
    connection::ConnectionState,
    notification::NotificationEvent,
};
use notibell_frontend::{
    Frontend, PageEvent,
    page::{
        Bell, FieldEvent, MaterialField, NotificationList, Page, SearchInput, Table, TableRow,
        ToastPhase, list::JUST_NOW,
    },
};
use pretty_assertions::assert_eq;
use tokio::{
    sync::mpsc,
    time::{Instant, advance},
};

fn received(message: &str, url: &str) -> MessageFromBackend {
    MessageFromBackend::NotificationReceived(NotificationEvent::new(message, url))
}

fn entry_messages(page: &Page) -> Vec<&str> {
    page.notification_list
        .as_ref()
        .map(|list| list.entries.iter().map(|entry| entry.message.as_str()).collect())
        .unwrap_or_default()
}

async fn advance_and_run(frontend: &mut Frontend, duration: Duration) {
    advance(duration).await;
    frontend.run_due_tasks(Instant::now());
}

#[tokio::test(start_paused = true)]
async fn one_notification_updates_badge_list_and_toasts() {
    let mut frontend = Frontend::new(Page::admin_header(3), ToastConfig::default());

    frontend.apply(received("Su documento 'Silabo' ha sido aprobado.", "/documentos/"));

    let page = frontend.page();
    assert_eq!(page.badge_text(), Some("4"));
    assert_eq!(entry_messages(page), ["Su documento 'Silabo' ha sido aprobado."]);
    let list = page.notification_list.as_ref().unwrap();
    assert!(!list.empty_placeholder);
    assert_eq!(list.entries[0].url, "/documentos/");
    assert_eq!(list.entries[0].time_label, JUST_NOW);
    assert_eq!(page.toasts().len(), 1);
    assert_eq!(page.toasts()[0].phase, ToastPhase::Hidden);
}

#[tokio::test(start_paused = true)]
async fn first_notification_creates_the_badge() {
    let mut frontend = Frontend::new(Page::admin_header(0), ToastConfig::default());
    assert_eq!(frontend.page().badge_text(), None);

    frontend.apply(received("hola", "/"));
    assert_eq!(frontend.page().badge_text(), Some("1"));

    frontend.apply(received("otra", "/"));
    assert_eq!(frontend.page().badge_text(), Some("2"));
    assert_eq!(entry_messages(frontend.page()), ["otra", "hola"]);
    assert_eq!(frontend.page().toasts().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn non_notification_messages_leave_the_page_alone() {
    let mut frontend = Frontend::new(Page::admin_header(2), ToastConfig::default());
    let before = frontend.page().clone();

    frontend.apply(MessageFromBackend::ConnectionStateChanged(
        ConnectionState::Open,
    ));
    frontend.apply(MessageFromBackend::ConfigurationResponse(Config::default()));

    assert_eq!(frontend.page(), &before);
    assert_eq!(frontend.connection(), ConnectionState::Open);
    assert!(frontend.page().notification_list.as_ref().unwrap().empty_placeholder);
}

#[tokio::test(start_paused = true)]
async fn pages_without_targets_still_get_toasts() {
    let mut frontend = Frontend::new(Page::default(), ToastConfig::default());

    frontend.apply(received("solo toast", "/"));

    let page = frontend.page();
    assert_eq!(page.bell, None);
    assert_eq!(page.notification_list, None);
    assert_eq!(page.toasts().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn toast_leaves_after_dwell_plus_transition() {
    let mut frontend = Frontend::new(Page::admin_header(0), ToastConfig::default());
    frontend.apply(received("X", "/"));

    advance_and_run(&mut frontend, Duration::from_millis(16)).await;
    assert_eq!(frontend.page().toasts()[0].phase, ToastPhase::Shown);

    advance_and_run(&mut frontend, Duration::from_millis(5_000 - 16)).await;
    assert_eq!(frontend.page().toasts()[0].phase, ToastPhase::Leaving);

    advance_and_run(&mut frontend, Duration::from_millis(299)).await;
    assert_eq!(frontend.page().toasts().len(), 1);

    advance_and_run(&mut frontend, Duration::from_millis(1)).await;
    assert!(frontend.page().toasts().is_empty());
    // the list entry outlives the toast
    assert_eq!(entry_messages(frontend.page()), ["X"]);
}

#[tokio::test(start_paused = true)]
async fn configured_timing_applies_to_later_toasts() {
    let mut frontend = Frontend::new(Page::admin_header(0), ToastConfig::default());
    let mut config = Config::default();
    config.toast.dwell_ms = 1_000;
    config.toast.transition_ms = 100;
    frontend.apply(MessageFromBackend::ConfigurationResponse(config));

    frontend.apply(received("quick", "/"));
    advance_and_run(&mut frontend, Duration::from_millis(16)).await;
    advance_and_run(&mut frontend, Duration::from_millis(984)).await;
    assert_eq!(frontend.page().toasts()[0].phase, ToastPhase::Leaving);
    advance_and_run(&mut frontend, Duration::from_millis(100)).await;
    assert!(frontend.page().toasts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn run_loop_drives_toasts_and_page_events() {
    let page = Page {
        bell: Some(Bell::default()),
        notification_list: Some(NotificationList::empty()),
        search_input: Some(SearchInput::default()),
        result_table: Some(Table {
            rows: vec![
                TableRow::new(["", "Aula 101", "disponible"]),
                TableRow::new(["", "Laboratorio 2", "reservado"]),
            ],
        }),
        material_fields: vec![MaterialField::new("titulo", "Título")],
        ..Page::default()
    };

    let (tx, rx) = mpsc::channel(8);
    let (page_tx, page_rx) = mpsc::channel(8);
    let handle = tokio::spawn(Frontend::new(page, ToastConfig::default()).run(rx, page_rx));

    tx.send(received("Reserva confirmada", "/reservas/"))
        .await
        .unwrap();
    page_tx
        .send(PageEvent::Search("LAB".to_owned()))
        .await
        .unwrap();
    page_tx
        .send(PageEvent::Field {
            name: "titulo".to_owned(),
            event: FieldEvent::Input("Informe".to_owned()),
        })
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_secs(6)).await;
    tx.send(received("Segunda", "/")).await.unwrap();
    drop(tx);

    let page = handle.await.unwrap();
    assert_eq!(page.badge_text(), Some("2"));
    assert_eq!(entry_messages(&page), ["Segunda", "Reserva confirmada"]);
    // the first toast is gone, the second was cut off by the shutdown
    assert_eq!(page.toasts().len(), 1);
    assert_eq!(page.toasts()[0].message, "Segunda");

    let visible: Vec<_> = page
        .result_table
        .as_ref()
        .unwrap()
        .visible_rows()
        .map(|row| row.cells[1].as_str())
        .collect();
    assert_eq!(visible, ["Laboratorio 2"]);
    assert!(page.material_fields[0].label.as_ref().unwrap().active);
}
