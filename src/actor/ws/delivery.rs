use tungstenite::protocol::Message;

use super::WsActor;
use crate::reload::message::Notification;

impl WsActor {
    /// Broadcast a notification to all connected clients.
    ///
    /// A client whose send fails is removed; the others still receive it.
    pub(super) fn broadcast(&self, notification: Notification) {
        let mut clients = self.clients.lock();
        if clients.is_empty() {
            crate::debug!("ws"; "no clients connected");
            return;
        }

        let msg = Message::Text(notification.as_str().into());
        clients.retain_mut(|client| match client.ws.send(msg.clone()) {
            Ok(()) => true,
            Err(e) => {
                crate::debug!("ws"; "client disconnected {:?}: {}", client.peer, e);
                false
            }
        });
        crate::debug!("ws"; "sent {} to {} clients", notification, clients.len());
    }
}
