use super::{Divider, NamedSign, Token, Variant, Word};
use crate::transliteration::atf::{CommentaryProtocol, Side};
use crate::transliteration::enclosure::EnclosureType;

/// Visitor over the closed token set
///
/// [`Token::accept`](super::Token::accept) dispatches with an exhaustive match, so a new
/// token kind has to be routed here before the crate compiles. Every specialised method
/// falls back to [`visit_token`](TokenVisitor::visit_token).
pub trait TokenVisitor {
    fn visit_token(&mut self, _token: &Token) {}

    fn visit_word(&mut self, token: &Token, _word: &Word) {
        self.visit_token(token)
    }

    fn visit_lone_determinative(&mut self, token: &Token, word: &Word) {
        self.visit_word(token, word)
    }

    fn visit_named_sign(&mut self, token: &Token, _sign: &NamedSign) {
        self.visit_token(token)
    }

    fn visit_gloss(&mut self, token: &Token, _parts: &[Token]) {
        self.visit_token(token)
    }

    fn visit_variant(&mut self, token: &Token, _variant: &Variant) {
        self.visit_token(token)
    }

    fn visit_language_shift(&mut self, token: &Token) {
        self.visit_token(token)
    }

    fn visit_divider(&mut self, token: &Token, _divider: &Divider) {
        self.visit_token(token)
    }

    fn visit_commentary_protocol(&mut self, token: &Token, _protocol: CommentaryProtocol) {
        self.visit_token(token)
    }

    fn visit_enclosure(&mut self, token: &Token, _enclosure: EnclosureType, _side: Side) {
        self.visit_token(token)
    }

    fn visit_erasure(&mut self, token: &Token, _side: Side) {
        self.visit_token(token)
    }
}
