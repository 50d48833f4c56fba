//! Semantic events and their synchronous dispatcher.
//!
//! Every inbound line is classified into exactly one [`Event`] (or
//! consumed entirely by an auto-reply). Payload shapes are fixed per
//! variant; handlers match on the variants they care about.

use crate::message::Message;

/// A classified notification produced from one protocol message or
/// lifecycle transition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// The transport connected and registration commands were sent.
    Connected,
    /// The connection ended; the reason describes why.
    Disconnected {
        /// Human-readable cause ("EOF", "timeout", ...).
        reason: String,
    },
    /// The server finished sending its MOTD; auto-joins have been sent.
    MotdComplete,
    /// A PRIVMSG addressed to a channel.
    ChannelMessage {
        /// The channel the message was sent to.
        channel: String,
        /// Identity of the sender, when the line carried a prefix.
        sender: Option<String>,
        /// The message text.
        text: String,
    },
    /// A PRIVMSG addressed directly to our own nickname.
    PrivateMessage {
        /// Identity of the sender, when the line carried a prefix.
        sender: Option<String>,
        /// The message text.
        text: String,
    },
    /// We joined a channel.
    SelfJoined {
        /// The channel joined.
        channel: String,
    },
    /// Another user joined a channel we are in.
    Joined {
        /// The channel joined.
        channel: String,
        /// The joining user's identity.
        nick: String,
    },
    /// A user left a channel; carries the full parsed message.
    Parted(Message),
    /// A user quit the network; carries the full parsed message.
    Quit(Message),
    /// A user changed nickname; carries the full parsed message.
    NickChanged(Message),
    /// A mode change.
    Mode {
        /// The channel or nickname the mode applies to.
        target: String,
        /// The mode string (e.g. `+o`).
        mode: String,
        /// The mode argument, when one was given.
        arg: Option<String>,
    },
    /// A NAMES reply listing a channel's members.
    Names {
        /// The channel the listing is for.
        channel: String,
        /// Nicknames, split on whitespace.
        nicks: Vec<String>,
    },
    /// Any other all-digit reply code; carries the full parsed message.
    Numeric(Message),
    /// Anything not otherwise classified; carries the full parsed message.
    Other(Message),
}

/// Ordered, synchronous delivery of events to registered handlers.
///
/// Handlers run in registration order, on the caller's task, with the
/// event fully delivered before the next line is processed.
#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<Box<dyn FnMut(&Event) + Send>>,
}

impl Dispatcher {
    /// An empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers see every event.
    pub fn on<F>(&mut self, handler: F)
    where
        F: FnMut(&Event) + Send + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Deliver one event to every handler, in registration order.
    pub fn dispatch(&mut self, event: &Event) {
        for handler in &mut self.handlers {
            handler(event);
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether any handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
