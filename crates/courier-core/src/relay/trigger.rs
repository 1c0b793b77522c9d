//! Which inbound messages are relayed, and which expect a reply.

use courier_types::config::RelayConfig;
use courier_types::message::InboundMessage;

/// True when the message should be dropped without contacting the worker.
pub fn is_ignored(message: &InboundMessage, config: &RelayConfig) -> bool {
    config.ignore_bots && message.author_is_bot
}

/// True when the message mentions the bot or starts with the trigger prefix.
pub fn should_respond(message: &InboundMessage, config: &RelayConfig) -> bool {
    let mentioned = config.respond_to_mentions && message.mentions_bot;
    let prefixed =
        !config.trigger_prefix.is_empty() && message.content.starts_with(&config.trigger_prefix);
    mentioned || prefixed
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn message(content: &str) -> InboundMessage {
        InboundMessage {
            message_id: "m".to_string(),
            channel_id: "c".to_string(),
            session_id: "s".to_string(),
            author_id: "u".to_string(),
            author_is_bot: false,
            content: content.to_string(),
            mentions_bot: false,
            received_at: Utc::now(),
        }
    }

    #[test]
    fn prefix_triggers_reply() {
        let config = RelayConfig::default();
        assert!(should_respond(&message("!ai what time is it"), &config));
        assert!(!should_respond(&message("what time is it !ai"), &config));
        assert!(!should_respond(&message("just chatting"), &config));
    }

    #[test]
    fn mention_triggers_reply_unless_disabled() {
        let mut msg = message("hey there");
        msg.mentions_bot = true;
        let mut config = RelayConfig::default();
        assert!(should_respond(&msg, &config));

        config.respond_to_mentions = false;
        assert!(!should_respond(&msg, &config));
    }

    #[test]
    fn empty_prefix_never_matches() {
        let config = RelayConfig {
            trigger_prefix: String::new(),
            ..RelayConfig::default()
        };
        assert!(!should_respond(&message("anything"), &config));
    }

    #[test]
    fn bot_authors_are_ignored() {
        let mut msg = message("!ai loop");
        msg.author_is_bot = true;
        let mut config = RelayConfig::default();
        assert!(is_ignored(&msg, &config));

        config.ignore_bots = false;
        assert!(!is_ignored(&msg, &config));
    }
}
