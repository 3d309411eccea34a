use std::time::Duration;

use crossbeam::channel::Receiver;
use tokio::sync::mpsc;

use crate::actor::fs::FsActor;
use crate::actor::messages::{StyleMsg, WsMsg};
use crate::actor::style::StyleActor;
use crate::actor::ws::WsActor;

/// Time granted to actors to wind down after shutdown
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Run all actors concurrently.
pub(super) async fn run_actors(
    fs: FsActor,
    style: StyleActor,
    ws: WsActor,
    style_tx: mpsc::Sender<StyleMsg>,
    ws_tx: mpsc::Sender<WsMsg>,
    shutdown_rx: Option<Receiver<()>>,
) {
    let mut fs_handle = tokio::spawn(fs.run());
    let style_handle = tokio::spawn(style.run());
    let ws_handle = tokio::spawn(ws.run());

    if let Some(rx) = shutdown_rx {
        loop {
            if rx.try_recv().is_ok() || crate::core::is_shutdown() {
                crate::debug!("actor"; "shutdown signal received");
                break;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    } else {
        let _ = (&mut fs_handle).await;
    }

    fs_handle.abort();
    let _ = style_tx.send(StyleMsg::Shutdown).await;
    let _ = ws_tx.send(WsMsg::Shutdown).await;

    let _ = tokio::time::timeout(SHUTDOWN_GRACE, async {
        let _ = style_handle.await;
        let _ = ws_handle.await;
    })
    .await;
}
