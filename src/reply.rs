//! Server-side answer to a text received over `/ws`.

#[cfg(test)]
#[path = "reply_test.rs"]
mod reply_test;

pub const TAROT_KEYWORD: &str = "tarot";
pub const TAROT_REPLY: &str = "🔮 Aeon: As cartas estão sendo embaralhadas...";

/// Reply broadcast for an inbound `text`.
///
/// Mentions of tarot (any case) get the card-shuffling line; everything
/// else is echoed back with an "Aeon Ouviu:" prefix.
pub fn compose(text: &str) -> String {
    if text.to_lowercase().contains(TAROT_KEYWORD) {
        TAROT_REPLY.to_owned()
    } else {
        format!("Aeon Ouviu: {text}")
    }
}
