use crossbeam_channel::{Receiver, Sender};

/// Requests sent from the settings UI to the emulator thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// Re-read the effective settings and apply whatever changed.
    ApplySettings,
    /// The current game's override file was rewritten on disk.
    ReloadGameSettings,
}

#[derive(Clone)]
pub struct Handle {
    message_tx: Sender<Message>,
}

impl Handle {
    pub fn new(message_tx: Sender<Message>) -> Self {
        Handle { message_tx }
    }

    pub fn unbounded() -> (Self, Receiver<Message>) {
        let (message_tx, message_rx) = crossbeam_channel::unbounded();
        (Handle { message_tx }, message_rx)
    }

    pub fn send(&self, message: Message) {
        // The emulator thread dropping its receiver just means nothing is running
        let _ = self.message_tx.send(message);
    }
}
