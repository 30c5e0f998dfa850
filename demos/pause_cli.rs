//! Example: pause a process from the terminal
//!
//! ```text
//! cargo run --example pause_cli --features tracing -- notepad.exe 30
//! ```
//!
//! Ctrl-C resumes the process early.
use std::io::Write;

use process_pauser::pause::{event::PauseEvent, tokio::pauser::Pauser};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const BAR_WIDTH: u32 = 40;

fn draw_progress(done: u32, total: u32) {
    let filled = done * BAR_WIDTH / total.max(1);
    let bar: String = (0..BAR_WIDTH)
        .map(|i| if i < filled { '#' } else { '.' })
        .collect();
    print!("\r[{}] {:>3}/{}", bar, done, total);
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "GTA5.exe".to_string());
    let duration = args.next().unwrap_or_else(|| "10".to_string());

    let (event_tx, mut event_rx) = mpsc::channel::<PauseEvent>(128);
    let mut pauser = Pauser::native(event_tx);

    if let Err(e) = pauser.start_pause(&name, &duration).await {
        eprintln!("Error: {}", e);
        return Ok(());
    }

    let mut total = 0;
    loop {
        tokio::select! {
            event = event_rx.recv() => match event {
                Some(PauseEvent::Started { process_id, process_name, total_ticks, .. }) => {
                    total = total_ticks;
                    println!("Suspending {} (PID {})", process_name, process_id);
                }
                Some(PauseEvent::Progress { tick }) => draw_progress(tick + 1, total),
                Some(PauseEvent::Completed { reason, .. }) => {
                    println!("\nResumed ({:?})", reason);
                    break;
                }
                Some(PauseEvent::ProcessDied { .. }) => {
                    println!("\nThe process has been terminated.");
                    break;
                }
                Some(PauseEvent::Error { error }) => {
                    eprintln!("\nError: {}", error);
                    break;
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                println!("\nResuming early");
                pauser.cancel_pause().await?;
            }
        }
    }

    pauser.shutdown().await?;
    Ok(())
}
