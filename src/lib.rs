//! # banter-irc
//!
//! A lightweight async IRC client connection library. One [`Client`]
//! owns one TCP connection's full lifecycle: dialing, registration,
//! framing the byte stream into CRLF lines, parsing lines into
//! [`Message`]s, and classifying every message into exactly one
//! semantic [`Event`] (auto-replying to PING and auto-joining channels
//! after the MOTD along the way).
//!
//! ## Quick Start
//!
//! ```no_run
//! use banter_irc::{Client, Config, Dispatcher, Event};
//!
//! # #[tokio::main]
//! # async fn main() -> banter_irc::Result<()> {
//! let config = Config::default()
//!     .with_host("irc.libera.chat")
//!     .with_nick("banter_bot")
//!     .with_channels(["#banter"]);
//!
//! let mut client = Client::connect(config).await?;
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.on(|event| {
//!     if let Event::ChannelMessage { channel, sender, text } = event {
//!         println!("{} <{}> {}", channel, sender.as_deref().unwrap_or("?"), text);
//!     }
//! });
//!
//! client.run(&mut dispatcher).await;
//! # Ok(())
//! # }
//! ```
//!
//! Callers that want to drive the loop themselves can pull events one
//! at a time with [`Client::next_event`] and react in between (the
//! library never reconnects on its own; a `Disconnected` event is the
//! end of the stream).

#![deny(clippy::all)]

pub mod casemap;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod message;
pub mod prefix;
pub mod router;

pub use self::casemap::{irc_eq, irc_to_lower};
pub use self::client::{Client, ConnectionState};
pub use self::codec::{LineCodec, MAX_LINE_LEN};
pub use self::config::Config;
pub use self::error::{MessageParseError, ProtocolError, Result};
pub use self::event::{Dispatcher, Event};
pub use self::format::{bold, color, italic, underline, ColorSpec};
pub use self::message::Message;
pub use self::prefix::Prefix;
pub use self::router::{Routed, Router};
