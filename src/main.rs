use std::{io::BufRead, thread};

use notibell_frontend::{
    PageEvent,
    page::{Page, SearchInput, Table},
};
use tokio::sync::mpsc;

/// Forwards every line typed on stdin to the page as a search query.
fn spawn_search_reader(tx: mpsc::Sender<PageEvent>) {
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(PageEvent::Search(line)).is_err() {
                break;
            }
        }
    });
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()?;

    let page = Page {
        search_input: Some(SearchInput::default()),
        result_table: Some(Table::default()),
        ..Page::admin_header(0)
    };

    let channels = notibell_bridge::BridgeChannels::default();
    notibell_backend::run(
        channels.backend_rx,
        channels.backend_tx,
        page.has_notification_affordance(),
    );

    let (page_tx, page_rx) = mpsc::channel(16);
    spawn_search_reader(page_tx);

    notibell_frontend::run(channels.frontend_rx, channels.frontend_tx, page_rx, page)?;
    Ok(())
}
