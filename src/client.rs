//! Connection lifecycle management.
//!
//! A [`Client`] owns one stream for its whole life: it dials, registers,
//! frames inbound bytes into lines, parses and routes each line, and
//! exposes the outbound write primitive the send helpers are built on.
//!
//! All processing is single-task and synchronous between reads: a
//! line's event is fully surfaced before the next line is parsed, and
//! nothing here is shared across clients.

use std::collections::VecDeque;

use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_util::codec::Framed;
use tracing::{debug, trace, warn};

use crate::codec::LineCodec;
use crate::config::Config;
use crate::error::Result;
use crate::event::{Dispatcher, Event};
use crate::message::Message;
use crate::router::Router;

/// Lifecycle state of a connection.
///
/// Writes are only permitted in `Connected`; every transport failure
/// funnels through the same disconnect path into `Disconnected`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection established.
    Disconnected,
    /// Dialing the server.
    Connecting,
    /// Registered and processing traffic.
    Connected,
    /// Tearing the stream down.
    Closing,
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::Disconnected
    }
}

/// A single IRC client connection.
///
/// Generic over the stream so tests and embedders can drive it with an
/// in-memory duplex; [`Client::connect`] produces the TCP flavor.
pub struct Client<S> {
    config: Config,
    state: ConnectionState,
    framed: Framed<S, LineCodec>,
    router: Router,
    pending: VecDeque<Event>,
}

impl Client<TcpStream> {
    /// Dial the configured server and perform registration.
    ///
    /// On success the first event yielded by [`next_event`] is
    /// [`Event::Connected`]. Dial and codec-construction failures are
    /// the only errors surfaced as `Err`; everything after this point
    /// degrades to a [`Event::Disconnected`] lifecycle event instead.
    ///
    /// [`next_event`]: Client::next_event
    pub async fn connect(config: Config) -> Result<Self> {
        debug!(addr = %config.addr(), "starting connection");
        let stream = TcpStream::connect(config.addr()).await?;

        if let Err(e) = enable_keepalive(&stream) {
            warn!("failed to enable TCP keepalive: {}", e);
        }

        Self::from_stream(config, stream).await
    }
}

fn enable_keepalive(stream: &TcpStream) -> std::io::Result<()> {
    use socket2::{SockRef, TcpKeepalive};
    use std::time::Duration;

    let sock = SockRef::from(stream);
    let keepalive = TcpKeepalive::new()
        .with_time(Duration::from_secs(120))
        .with_interval(Duration::from_secs(30));
    sock.set_tcp_keepalive(&keepalive)
}

impl<S: AsyncRead + AsyncWrite + Unpin> Client<S> {
    /// Build a client over an already-established stream and perform
    /// registration on it.
    pub async fn from_stream(config: Config, stream: S) -> Result<Self> {
        let codec = LineCodec::new(&config.encoding)?;
        let router = Router::new(&config);

        let mut client = Client {
            state: ConnectionState::Connecting,
            framed: Framed::new(stream, codec),
            router,
            pending: VecDeque::new(),
            config,
        };
        client.register().await;
        Ok(client)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// The configuration this connection was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn register(&mut self) {
        debug!("connected");
        self.state = ConnectionState::Connected;

        if let Some(pass) = self.config.pass.clone() {
            self.write(&format!("PASS {}", pass)).await;
        }
        let nick = self.config.nick.clone();
        self.write(&format!("NICK {}", nick)).await;
        self.write(&format!("USER {} 0 * :{}", nick, nick)).await;

        self.pending.push_back(Event::Connected);
    }

    /// Write one raw protocol line; the CRLF terminator is appended by
    /// the codec.
    ///
    /// Permitted only while connected: attempting to write on a dead
    /// connection sends nothing and reports a [`Event::Disconnected`]
    /// with a descriptive reason, rather than surfacing an error.
    pub async fn write(&mut self, line: &str) {
        if self.state != ConnectionState::Connected {
            debug!("write refused while not connected: {:?}", line);
            self.pending.push_back(Event::Disconnected {
                reason: "cannot send while not connected".to_string(),
            });
            return;
        }

        trace!("> {}", line);
        if let Err(e) = self.framed.send(line.to_string()).await {
            self.disconnect(&format!("write failed: {}", e)).await;
        }
    }

    /// Tear the connection down, once.
    ///
    /// Idempotent: only acts when the connection is still live, so the
    /// EOF/timeout/close notifications that race each other produce a
    /// single [`Event::Disconnected`].
    pub async fn disconnect(&mut self, reason: &str) {
        if !matches!(
            self.state,
            ConnectionState::Connecting | ConnectionState::Connected
        ) {
            return;
        }

        debug!("disconnecting ({})", reason);
        self.state = ConnectionState::Closing;
        if let Err(e) = self.framed.close().await {
            trace!("error closing stream: {}", e);
        }
        self.state = ConnectionState::Disconnected;
        self.pending.push_back(Event::Disconnected {
            reason: reason.to_string(),
        });
    }

    /// Drive the connection until the next semantic event.
    ///
    /// Reads and processes lines in arrival order, performing any
    /// auto-replies (PONG, post-MOTD joins) before returning. Malformed
    /// lines are dropped silently. Transport failures (EOF, idle
    /// timeout, errors) yield a final [`Event::Disconnected`]; after
    /// that, `None`.
    pub async fn next_event(&mut self) -> Option<Event> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.state != ConnectionState::Connected {
                return None;
            }

            match timeout(self.config.timeout(), self.framed.next()).await {
                Err(_) => self.disconnect("timeout").await,
                Ok(None) => self.disconnect("EOF").await,
                Ok(Some(Err(e))) => self.disconnect(&e.to_string()).await,
                Ok(Some(Ok(line))) => {
                    trace!("< {}", line);
                    let msg = match Message::parse(&line) {
                        Ok(msg) => msg,
                        Err(e) => {
                            debug!("dropping malformed line ({}): {:?}", e, line);
                            continue;
                        }
                    };

                    let routed = self.router.route(msg);
                    for reply in routed.replies {
                        self.write(&reply).await;
                    }
                    if let Some(event) = routed.event {
                        return Some(event);
                    }
                }
            }
        }
    }

    /// Consume the connection, delivering every event to `dispatcher`
    /// until the stream ends.
    pub async fn run(&mut self, dispatcher: &mut Dispatcher) {
        while let Some(event) = self.next_event().await {
            dispatcher.dispatch(&event);
        }
    }

    /// Send a message to a channel or user.
    pub async fn send_message(&mut self, target: &str, text: &str) {
        self.write(&format!("PRIVMSG {} :{}", target, text)).await;
    }

    /// Request a channel's member list; the reply arrives as
    /// [`Event::Names`].
    pub async fn names(&mut self, channel: &str) {
        self.write(&format!("NAMES {}", channel)).await;
    }

    /// Join a channel.
    pub async fn join(&mut self, channel: &str) {
        self.write(&format!("JOIN {}", channel)).await;
    }

    /// Announce a quit to the server. The server closes the stream in
    /// response, which surfaces as a normal disconnect.
    pub async fn quit(&mut self, message: Option<&str>) {
        match message {
            Some(text) => self.write(&format!("QUIT :{}", text)).await,
            None => self.write("QUIT").await,
        }
    }
}

impl<S> std::fmt::Debug for Client<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("addr", &self.config.addr())
            .field("nick", &self.config.nick)
            .field("state", &self.state)
            .finish()
    }
}
