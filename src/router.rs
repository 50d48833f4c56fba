//! Classification of parsed messages into semantic events.
//!
//! The router is sans-IO in the style of a handshake state machine: it
//! consumes one [`Message`] and produces at most one [`Event`] plus any
//! raw lines that must be written back to the server (PONG replies,
//! post-MOTD auto-joins). The connection loop performs the writes
//! before surfacing the event, so ordering is preserved.

use crate::casemap::irc_eq;
use crate::config::Config;
use crate::event::Event;
use crate::message::Message;
use crate::prefix::identity_of;

/// Numeric reply marking the end of the MOTD (RPL_ENDOFMOTD).
const RPL_ENDOFMOTD: &str = "376";
/// Numeric reply carrying a channel member listing (RPL_NAMREPLY).
const RPL_NAMREPLY: &str = "353";

/// The commands the router gives dedicated treatment, plus the numeric
/// category and a catch-all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Known {
    Ping,
    EndOfMotd,
    Privmsg,
    Join,
    Part,
    Quit,
    Nick,
    Mode,
    NamesReply,
    Numeric,
    Other,
}

impl Known {
    fn classify(command: Option<&str>) -> Known {
        match command {
            Some("PING") => Known::Ping,
            Some(RPL_ENDOFMOTD) => Known::EndOfMotd,
            Some("PRIVMSG") => Known::Privmsg,
            Some("JOIN") => Known::Join,
            Some("PART") => Known::Part,
            Some("QUIT") => Known::Quit,
            Some("NICK") => Known::Nick,
            Some("MODE") => Known::Mode,
            Some(RPL_NAMREPLY) => Known::NamesReply,
            Some(cmd) if !cmd.is_empty() && cmd.bytes().all(|b| b.is_ascii_digit()) => {
                Known::Numeric
            }
            _ => Known::Other,
        }
    }
}

/// The outcome of routing one message.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Routed {
    /// The semantic event, if the message produces one. PING is the
    /// only row that does not: its whole outcome is the PONG reply.
    pub event: Option<Event>,
    /// Raw lines to write back to the server, in order, before the
    /// event is delivered.
    pub replies: Vec<String>,
}

impl Routed {
    fn event(event: Event) -> Self {
        Routed {
            event: Some(event),
            replies: Vec::new(),
        }
    }
}

/// Maps protocol commands to semantic events and auto-replies.
#[derive(Clone, Debug)]
pub struct Router {
    nick: String,
    auto_join: Vec<String>,
}

impl Router {
    /// Build a router from the connection configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            nick: config.nick.clone(),
            auto_join: config.auto_join_channels.clone(),
        }
    }

    /// Classify one message. Exactly one outcome per call: an event, a
    /// set of replies, or both.
    pub fn route(&self, msg: Message) -> Routed {
        match Known::classify(msg.command.as_deref()) {
            Known::Ping => {
                let reply = if msg.params.is_empty() {
                    "PONG".to_string()
                } else {
                    format!("PONG :{}", msg.params.join(" "))
                };
                Routed {
                    event: None,
                    replies: vec![reply],
                }
            }

            Known::EndOfMotd => Routed {
                event: Some(Event::MotdComplete),
                replies: self
                    .auto_join
                    .iter()
                    .map(|channel| format!("JOIN {}", channel))
                    .collect(),
            },

            Known::Privmsg => {
                let (Some(target), Some(text)) = (msg.param(0), msg.param(1)) else {
                    return Routed::event(Event::Other(msg));
                };
                let sender = identity_of(msg.prefix.as_deref()).map(str::to_string);
                if irc_eq(target, &self.nick) {
                    Routed::event(Event::PrivateMessage {
                        sender,
                        text: text.to_string(),
                    })
                } else {
                    Routed::event(Event::ChannelMessage {
                        channel: target.to_string(),
                        sender,
                        text: text.to_string(),
                    })
                }
            }

            Known::Join => {
                let (Some(channel), Some(nick)) =
                    (msg.param(0), identity_of(msg.prefix.as_deref()))
                else {
                    return Routed::event(Event::Other(msg));
                };
                if irc_eq(nick, &self.nick) {
                    Routed::event(Event::SelfJoined {
                        channel: channel.to_string(),
                    })
                } else {
                    Routed::event(Event::Joined {
                        channel: channel.to_string(),
                        nick: nick.to_string(),
                    })
                }
            }

            Known::Part => Routed::event(Event::Parted(msg)),
            Known::Quit => Routed::event(Event::Quit(msg)),
            Known::Nick => Routed::event(Event::NickChanged(msg)),

            Known::Mode => {
                let (Some(target), Some(mode)) = (msg.param(0), msg.param(1)) else {
                    return Routed::event(Event::Other(msg));
                };
                Routed::event(Event::Mode {
                    target: target.to_string(),
                    mode: mode.to_string(),
                    arg: msg.param(2).map(str::to_string),
                })
            }

            Known::NamesReply => {
                let (Some(channel), Some(listing)) = (msg.param(2), msg.param(3)) else {
                    return Routed::event(Event::Other(msg));
                };
                Routed::event(Event::Names {
                    channel: channel.to_string(),
                    nicks: listing.split_whitespace().map(str::to_string).collect(),
                })
            }

            Known::Numeric => Routed::event(Event::Numeric(msg)),
            Known::Other => Routed::event(Event::Other(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::new(
            &Config::default()
                .with_nick("TehBot")
                .with_channels(["#one", "#two"]),
        )
    }

    fn parse(line: &str) -> Message {
        Message::parse(line).unwrap()
    }

    #[test]
    fn test_ping_replies_pong_no_event() {
        let routed = router().route(parse("PING :token"));
        assert_eq!(routed.event, None);
        assert_eq!(routed.replies, vec!["PONG :token"]);
    }

    #[test]
    fn test_motd_end_joins_configured_channels() {
        let routed = router().route(parse(":server 376 TehBot :End of /MOTD"));
        assert_eq!(routed.event, Some(Event::MotdComplete));
        assert_eq!(routed.replies, vec!["JOIN #one", "JOIN #two"]);
    }

    #[test]
    fn test_motd_end_without_channels() {
        let router = Router::new(&Config::default());
        let routed = router.route(parse(":server 376 banter :End of /MOTD"));
        assert_eq!(routed.event, Some(Event::MotdComplete));
        assert!(routed.replies.is_empty());
    }

    #[test]
    fn test_channel_message() {
        let routed = router().route(parse(":alice!a@h PRIVMSG #one :hi all"));
        assert_eq!(
            routed.event,
            Some(Event::ChannelMessage {
                channel: "#one".to_string(),
                sender: Some("alice".to_string()),
                text: "hi all".to_string(),
            })
        );
        assert!(routed.replies.is_empty());
    }

    #[test]
    fn test_private_message_case_insensitive_target() {
        let routed = router().route(parse(":alice!a@h PRIVMSG tehbot :psst"));
        assert_eq!(
            routed.event,
            Some(Event::PrivateMessage {
                sender: Some("alice".to_string()),
                text: "psst".to_string(),
            })
        );
    }

    #[test]
    fn test_self_join_case_insensitive() {
        let routed = router().route(parse(":TEHBOT!t@h JOIN #one"));
        assert_eq!(
            routed.event,
            Some(Event::SelfJoined {
                channel: "#one".to_string()
            })
        );
    }

    #[test]
    fn test_peer_join_preserves_identity() {
        let routed = router().route(parse(":Bob!b@h JOIN #one"));
        assert_eq!(
            routed.event,
            Some(Event::Joined {
                channel: "#one".to_string(),
                nick: "Bob".to_string(),
            })
        );
    }

    #[test]
    fn test_join_without_prefix_falls_back() {
        let routed = router().route(parse("JOIN #one extra"));
        assert!(matches!(routed.event, Some(Event::Other(_))));
    }

    #[test]
    fn test_part_quit_nick_carry_full_message() {
        let msg = parse(":bob!b@h PART #one :bye");
        assert_eq!(
            router().route(msg.clone()).event,
            Some(Event::Parted(msg))
        );

        let msg = parse(":bob!b@h QUIT :gone");
        assert_eq!(router().route(msg.clone()).event, Some(Event::Quit(msg)));

        let msg = parse(":bob!b@h NICK robert");
        assert_eq!(
            router().route(msg.clone()).event,
            Some(Event::NickChanged(msg))
        );
    }

    #[test]
    fn test_mode_with_and_without_arg() {
        let routed = router().route(parse(":srv MODE #one +o bob"));
        assert_eq!(
            routed.event,
            Some(Event::Mode {
                target: "#one".to_string(),
                mode: "+o".to_string(),
                arg: Some("bob".to_string()),
            })
        );

        let routed = router().route(parse(":srv MODE #one +m"));
        assert_eq!(
            routed.event,
            Some(Event::Mode {
                target: "#one".to_string(),
                mode: "+m".to_string(),
                arg: None,
            })
        );
    }

    #[test]
    fn test_names_reply_splits_nicks() {
        let routed = router().route(parse(":srv 353 TehBot = #one :alice @bob +carol"));
        assert_eq!(
            routed.event,
            Some(Event::Names {
                channel: "#one".to_string(),
                nicks: vec![
                    "alice".to_string(),
                    "@bob".to_string(),
                    "+carol".to_string()
                ],
            })
        );
    }

    #[test]
    fn test_unclassified_numeric() {
        let routed = router().route(parse(":srv 001 TehBot :Welcome"));
        assert!(matches!(routed.event, Some(Event::Numeric(_))));
    }

    #[test]
    fn test_unknown_command_is_other() {
        let routed = router().route(parse(":srv WALLOPS :hear ye"));
        assert!(matches!(routed.event, Some(Event::Other(_))));
    }

    #[test]
    fn test_missing_command_is_other() {
        let routed = router().route(parse(":srv :only trailing"));
        assert!(matches!(routed.event, Some(Event::Other(_))));
    }
}
