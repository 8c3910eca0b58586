//! Property-based tests for alignment maps, rendering and merging

use atf::transliteration::merger::{create_alignment_map, edit_script, Edit};
use atf::transliteration::{AtfParser, Token};
use proptest::prelude::*;

const READINGS: &[&str] = &["ku", "ra", "šu", "mu", "pa"];

const WORDS: &[&str] = &[
    "ku", "ra", "šu", "gid₂", "kur-ra", "x", "X", "{d}utu", "[ku]", "%sux", "...",
];

fn words() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(prop::sample::select(READINGS), 0..8).prop_map(|names| {
        names
            .into_iter()
            .map(|name| Token::word(vec![Token::reading(name, Some(1))]))
            .collect()
    })
}

/// Documents of one to five text lines, numbered from 1
fn documents() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(WORDS), 1..6),
        1..5,
    )
    .prop_map(|lines| {
        lines
            .iter()
            .enumerate()
            .map(|(index, words)| format!("{}. {}", index + 1, words.join(" ")))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

proptest! {
    #[test]
    fn alignment_map_covers_old_tokens(old in words(), new in words()) {
        let map = create_alignment_map(&old, &new);
        prop_assert_eq!(map.len(), old.len());
        prop_assert!(map.iter().flatten().all(|index| *index < new.len()));
    }

    #[test]
    fn alignment_map_keeps_order(old in words(), new in words()) {
        let targets: Vec<usize> = create_alignment_map(&old, &new).into_iter().flatten().collect();
        prop_assert!(targets.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn alignment_map_of_unchanged_tokens_is_identity(tokens in words()) {
        let map = create_alignment_map(&tokens, &tokens);
        let identity: Vec<Option<usize>> = (0..tokens.len()).map(Some).collect();
        prop_assert_eq!(map, identity);
    }

    #[test]
    fn edit_script_consumes_both_sides(old in words(), new in words()) {
        let old: Vec<String> = old.iter().map(Token::value).collect();
        let new: Vec<String> = new.iter().map(Token::value).collect();
        let script = edit_script(&old, &new);
        let consumed_old = script.iter().filter(|edit| **edit != Edit::Insert).count();
        let consumed_new = script.iter().filter(|edit| **edit != Edit::Delete).count();
        prop_assert_eq!(consumed_old, old.len());
        prop_assert_eq!(consumed_new, new.len());
    }

    #[test]
    fn canonical_documents_round_trip(atf in documents()) {
        let text = AtfParser::default().parse_atf(&atf);
        prop_assert!(text.is_ok(), "{:?} was rejected", atf);
        prop_assert_eq!(text.unwrap().atf(), atf);
    }

    #[test]
    fn merging_a_text_with_itself_changes_nothing(atf in documents()) {
        let text = AtfParser::default().parse_atf(&atf).unwrap();
        prop_assert_eq!(text.merge(&text), text);
    }
}
