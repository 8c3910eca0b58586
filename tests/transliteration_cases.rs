//! Document level behaviour of the ATF parser
//!
//! Tables of lines that must survive a parse and render unchanged, bracket sequences that
//! must be accepted or rejected, and the languages words pick up from shifts.

use atf::signs::{AtfConverter, MemorySignRepository};
use atf::transliteration::annotation::LemmatizationToken;
use atf::transliteration::{AtfParser, Language, LineError, ParseError, ParserConfig, TokenKind};
use rstest::rstest;

#[rstest]
#[case("1. šu gid₂")]
#[case("2'. ka-ra")]
#[case("1. [kur] %sux lugal")]
#[case("1. {d}utu")]
#[case("1. x X ...")]
#[case("@obverse")]
#[case("@seal 1")]
#[case("@colophon")]
#[case("$ seal 2")]
#[case("$ end of obverse")]
#[case("#note: see @i{here}")]
#[case("#tr.en.(3): the king")]
#[case("// (my name 1)")]
#[case("=: comment")]
#[case("# comment")]
#[case("1. kuₓ")]
#[case("1. me-°e\\li°-ku")]
#[case("1. °me-e-li\\°-ku")]
#[case("1. [{iti}...]")]
#[case("2. kur{d}... kur{d} ...")]
#[case("1. mu-un;-e₃ ;")]
#[case("1. %grc α#β %akk kur")]
#[case("$ several surface stone blank *")]
#[case("$ at least 1 fragment a")]
#[case("$ at least 1 surface missing")]
#[case("// cf. F K.1 &d tablet* o! iii? 1")]
#[case("// L 0.0 1")]
#[case("// Mag III.1 2")]
fn test_canonical_lines_round_trip(#[case] atf: &str) {
    let line = AtfParser::default()
        .parse_line(atf)
        .unwrap_or_else(|error| panic!("{:?} was rejected: {}", atf, error));
    assert_eq!(line.atf(), atf);
}

#[test]
fn test_spaced_joiners_render_attached() {
    let line = AtfParser::default()
        .parse_line("1. ... -ad ad- ... -ad")
        .unwrap();
    assert_eq!(line.atf(), "1. ...-ad ad-...-ad");
}

#[rstest]
#[case("1. kuₓ₂")]
#[case("1. ku₂ₓ")]
#[case("1. me°-e\\li°-ku")]
#[case("1. me-°e\\li-°ku")]
#[case("1. ku - ra")]
fn test_malformed_words(#[case] atf: &str) {
    assert!(
        matches!(AtfParser::default().parse_line(atf), Err(LineError::Syntax(_))),
        "{:?}",
        atf
    );
}

#[test]
fn test_sub_index_overflow_is_an_error() {
    assert!(matches!(
        AtfParser::default().parse_line("1. ku₉₉₉₉₉₉₉₉₉₉₉"),
        Err(LineError::Invalid(_))
    ));
}

#[test]
fn test_line_emptied_by_legacy_passes_is_rejected() {
    let parser = AtfParser::new(ParserConfig::legacy());
    assert!(matches!(parser.parse_line("1. ⸢"), Err(LineError::Invalid(_))));
    assert!(parser.parse_atf("1. ⸢").is_err());
}

#[test]
fn test_greek_words() {
    let line = AtfParser::default().parse_line("1. %grc αβ").unwrap();
    match line.content()[1].kind() {
        TokenKind::GreekWord(word) => assert_eq!(word.language(), Language::Greek),
        other => panic!("unexpected {:?}", other),
    }
}

#[rstest]
#[case("1. [ku]")]
#[case("1. [(ku)]")]
#[case("1. <ku>")]
#[case("1. ku-[ra ...]")]
fn test_balanced_enclosures(#[case] atf: &str) {
    assert!(AtfParser::default().parse_line(atf).is_ok(), "{:?}", atf);
}

#[rstest]
#[case("1. [ku")]
#[case("1. ku]")]
#[case("1. (ku)")]
fn test_unbalanced_enclosures(#[case] atf: &str) {
    assert!(
        matches!(
            AtfParser::default().parse_line(atf),
            Err(LineError::Enclosure(_))
        ),
        "{:?}",
        atf
    );
}

#[rstest]
#[case("1. kur", Language::Akkadian)]
#[case("1. %sux kur", Language::Sumerian)]
#[case("1. %es kur", Language::Emesal)]
#[case("1. %sux %akk kur", Language::Akkadian)]
#[case("1. %grc kur", Language::Greek)]
fn test_language_shifts(#[case] atf: &str, #[case] expected: Language) {
    let line = AtfParser::default().parse_line(atf).unwrap();
    let languages: Vec<Language> = line
        .content()
        .iter()
        .filter_map(|token| match token.kind() {
            TokenKind::Word(word) => Some(word.language()),
            _ => None,
        })
        .collect();
    assert_eq!(languages, vec![expected]);
}

#[test]
fn test_error_report_numbers_lines_from_one() {
    let error = AtfParser::default()
        .parse_atf("@obverse\n1. kur\n2. [ra\n3. ku\n4. ku–ra")
        .unwrap_err();
    let lines: Vec<usize> = error.errors().iter().map(|entry| entry.line_number).collect();
    assert_eq!(lines, vec![3, 5]);
    assert!(matches!(error, ParseError::Transliteration(_)));
}

#[test]
fn test_legacy_configuration_accepts_legacy_joiners() {
    let parser = AtfParser::new(ParserConfig::legacy());
    let text = parser.parse_atf("1. ku–ra").unwrap();
    assert_eq!(text.atf(), "1. ku-ra");
}

#[test]
fn test_lemmatization_update() {
    let parser = AtfParser::default();
    let text = parser.parse_atf("@obverse\n1. kur %sux ra").unwrap();
    let mut lemmatization = text.lemmatization();
    assert_eq!(lemmatization.tokens[0], vec![]);
    assert_eq!(
        lemmatization.tokens[1],
        vec![
            LemmatizationToken::new("kur", Some(vec![])),
            LemmatizationToken::new("%sux", None),
            LemmatizationToken::new("ra", Some(vec![])),
        ]
    );

    lemmatization.tokens[1][0] = LemmatizationToken::new("kur", Some(vec!["mātu I".into()]));
    let updated = text.update_lemmatization(&lemmatization).unwrap();
    assert_eq!(
        updated.lemmatization().tokens[1][0].unique_lemma,
        Some(vec!["mātu I".to_string()])
    );

    lemmatization.tokens[1][2] = LemmatizationToken::new("ra", Some(vec!["lemma".into()]));
    assert!(text.update_lemmatization(&lemmatization).is_err());
}

#[test]
fn test_merge_keeps_lemmas_of_unchanged_words() {
    let parser = AtfParser::default();
    let old = parser.parse_atf("1. kur ra").unwrap();
    let mut lemmatization = old.lemmatization();
    lemmatization.tokens[0][0] = LemmatizationToken::new("kur", Some(vec!["mātu I".into()]));
    let old = old.update_lemmatization(&lemmatization).unwrap();

    let new = parser.parse_atf("1. kur pa ra").unwrap();
    let merged = old.merge(&new);
    assert_eq!(merged.atf(), "1. kur pa ra");
    assert_eq!(
        merged.lemmatization().tokens[0][0].unique_lemma,
        Some(vec!["mātu I".to_string()])
    );
}

#[test]
fn test_merge_keeps_lemmas_of_moved_words() {
    let parser = AtfParser::default();
    let old = parser.parse_atf("1. kur ra pa").unwrap();
    let mut lemmatization = old.lemmatization();
    lemmatization.tokens[0][1] = LemmatizationToken::new("ra", Some(vec!["ra I".into()]));
    let old = old.update_lemmatization(&lemmatization).unwrap();

    let new = parser.parse_atf("1. kur pa ra#").unwrap();
    let merged = old.merge(&new);
    assert_eq!(merged.atf(), "1. kur pa ra#");
    assert_eq!(
        merged.lemmatization().tokens[0][2].unique_lemma,
        Some(vec!["ra I".to_string()])
    );
}

#[test]
fn test_sign_matrix_from_json_sign_list() {
    let repository = MemorySignRepository::from_json(
        r#"[
            {"name": "ŠU", "values": [{"value": "šu", "subIndex": 1}]},
            {"name": "BU", "lists": [{"name": "ABZ", "number": "371"}], "values": [{"value": "gid", "subIndex": 2}]}
        ]"#,
    )
    .unwrap();
    let converter = AtfConverter::new(repository);
    assert_eq!(
        converter.convert_atf_to_sign_matrix("1. šu-gid₂\n#note: foo\n2. [x] šu"),
        Ok(vec![
            vec!["ŠU".to_string(), "ABZ371".to_string()],
            vec!["X".to_string(), "ŠU".to_string()],
        ])
    );
}
