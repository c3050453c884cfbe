use super::*;

#[test]
fn echoes_plain_text_with_prefix() {
    assert_eq!(compose("Ping: Toque na esfera"), "Aeon Ouviu: Ping: Toque na esfera");
}

#[test]
fn echoes_empty_text() {
    assert_eq!(compose(""), "Aeon Ouviu: ");
}

#[test]
fn tarot_is_case_insensitive() {
    assert_eq!(compose("tire um TAROT pra mim"), TAROT_REPLY);
    assert_eq!(compose("Tarot"), TAROT_REPLY);
}

#[test]
fn tarot_matches_inside_words() {
    assert_eq!(compose("tarologo"), "Aeon Ouviu: tarologo");
    assert_eq!(compose("tarotista"), TAROT_REPLY);
}
