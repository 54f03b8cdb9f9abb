use lox_scanner::{scan, Scanner, TokenKind};
use proptest::{prelude::*, prop_assert, prop_assert_eq, proptest};

fn lox_like_source() -> impl Strategy<Value = String> {
    "[a-zA-Z_0-9 \\t\\r\\n(){},.;*+!=<>/\"-]{0,96}"
}

fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "(", ")", "{", "}", ",", ".", "-", "+", ";", "*", "/",
            "!", "!=", "=", "==", "<", "<=", ">", ">=",
        ])
        .prop_map(String::from),
        "[0-9]{1,4}(\\.[0-9]{1,3})?",
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "\"[^\"\\n]{0,8}\"",
    ]
}

proptest! {
    #[test]
    fn ends_with_exactly_one_end_of_file(source in lox_like_source()) {
        if let Ok(tokens) = scan(&source) {
            let eofs = tokens.iter().filter(|t| t.kind() == TokenKind::EndOfFile).count();
            prop_assert_eq!(1, eofs);

            let last = tokens.last().expect("at least the end of file token");
            prop_assert_eq!(TokenKind::EndOfFile, last.kind());
            prop_assert_eq!("", last.lexeme());
        }
    }

    #[test]
    fn lexemes_are_source_slices(source in lox_like_source()) {
        for token in Scanner::new(&source).filter_map(Result::ok) {
            prop_assert_eq!(token.lexeme(), token.span().slice(&source));
            prop_assert!(token.span().start <= token.span().end);
            prop_assert!(token.span().end <= source.len());
        }
    }

    #[test]
    fn lines_count_preceding_newlines(source in lox_like_source()) {
        for token in Scanner::new(&source).filter_map(Result::ok) {
            let newlines = source[..token.span().start].matches('\n').count();
            prop_assert_eq!(1 + newlines, token.line());
        }
    }

    #[test]
    fn spans_are_ordered(source in lox_like_source()) {
        let tokens: Vec<_> = Scanner::new(&source).filter_map(Result::ok).collect();
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span().end <= pair[1].span().start);
        }
    }

    #[test]
    fn scanning_is_deterministic(source in lox_like_source()) {
        let first = format!("{:?}", scan(&source));
        let second = format!("{:?}", scan(&source));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn errors_carry_a_line_within_the_source(source in lox_like_source()) {
        if let Err(e) = scan(&source) {
            let line = e.line().expect("scan errors are lexical");
            prop_assert!(line >= 1);
            prop_assert!(line <= 1 + source.matches('\n').count());
        }
    }

    #[test]
    fn space_separated_lexemes_scan_back(lexemes in prop::collection::vec(lexeme(), 0..24)) {
        let source = lexemes.join(" ");
        let tokens = scan(&source).expect("well formed lexemes should scan");

        let scanned: Vec<_> = tokens
            .iter()
            .take_while(|t| t.kind() != TokenKind::EndOfFile)
            .map(|t| t.lexeme().to_string())
            .collect();
        prop_assert_eq!(lexemes, scanned);
    }
}
