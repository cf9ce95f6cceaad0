use crate::events::AppEvent;
use anyhow::Context;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Runtime;

pub fn start_background_services(tx: Sender<AppEvent>) {
    thread::spawn(move || {
        if let Err(e) = run(tx) {
            log::error!("Background services stopped: {:#}", e);
        }
    });
}

fn run(tx: Sender<AppEvent>) -> anyhow::Result<()> {
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;

    rt.block_on(async {
        tokio::spawn(crate::config::run_async_watcher(tx));
        std::future::pending::<()>().await;
    });

    Ok(())
}
