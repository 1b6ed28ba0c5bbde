//! Demo run: load, refresh, print, dispose.

use std::future::Future;
use std::io::Write;

use color_eyre::Result;
use tracing::info;

use super::args::RunOptions;
use crate::discovery::{DiscoveryController, DiscoveryEvent};
use crate::startup::DemoDiscovery;
use crate::view_state::DiscoverySnapshot;

/// What a demo run observed.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Snapshots printed
    pub snapshots: usize,
    /// Events received, in order
    pub events: Vec<DiscoveryEvent>,
    /// Whether the run ended through `shutdown`
    pub interrupted: bool,
    /// Last snapshot seen before disposing
    pub last_snapshot: DiscoverySnapshot,
}

/// Drive `demo` until the initial load and refresh have settled, printing
/// every snapshot and event to `out`.
///
/// Ends early when `shutdown` resolves. The controller is disposed before
/// returning.
pub async fn run_demo<W, S>(
    demo: DemoDiscovery,
    options: &RunOptions,
    out: &mut W,
    shutdown: S,
) -> Result<RunSummary>
where
    W: Write,
    S: Future<Output = ()>,
{
    let DemoDiscovery {
        controller,
        mut events,
        ..
    } = demo;
    let mut snapshots = controller.subscribe();
    let mut summary = RunSummary::default();
    let mut failed = false;

    controller.load_data();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                summary.interrupted = true;
                break;
            }
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                summary.snapshots += 1;
                write_snapshot(out, summary.snapshots, &snapshot, options.json)?;
            }
            Some(event) = events.recv() => {
                writeln!(out, "event: {}", serde_json::to_string(&event)?)?;
                failed |= matches!(event, DiscoveryEvent::Command(_));
                summary.events.push(event);
            }
        }

        if is_settled(&controller, summary.snapshots, failed) {
            break;
        }
    }

    summary.last_snapshot = controller.snapshot();
    controller.dispose();
    info!(
        snapshots = summary.snapshots,
        events = summary.events.len(),
        interrupted = summary.interrupted,
        "Demo run finished"
    );
    Ok(summary)
}

fn is_settled(controller: &DiscoveryController, printed: usize, failed: bool) -> bool {
    if !controller.config().refresh_on_load {
        return printed > 0;
    }
    let snapshot = controller.snapshot();
    if controller.is_refreshing_all() || snapshot.is_any_progress_visible() {
        return false;
    }
    failed || snapshot.items().iter().all(|item| !item.children.is_empty())
}

fn write_snapshot<W: Write>(
    out: &mut W,
    number: usize,
    snapshot: &DiscoverySnapshot,
    json: bool,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(snapshot.items())?)?;
        return Ok(());
    }

    writeln!(out, "snapshot #{number}")?;
    for item in snapshot.items() {
        let marker = if item.is_progress_bar_visible { " [refreshing]" } else { "" };
        writeln!(
            out,
            "  {:<18} {:>2} games{}",
            item.title,
            item.children.len(),
            marker
        )?;
    }
    Ok(())
}
