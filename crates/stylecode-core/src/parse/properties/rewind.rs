//! Every parser leaves the cursor and buffer untouched when it fails.

use proptest::prelude::*;

use crate::bytecode::StyleBuffer;
use crate::cursor::TokenCursor;
use crate::lexer::tokenize;
use crate::parse::{PROPERTY_NAMES, ParseContext, property_parser};

const FRAGMENTS: &[&str] = &[
    "auto", "none", "normal", "inherit", "unset", "1px", "-2em", "50%", "0", "3", "-1", "1.5",
    "1fr", "10deg", "2s", "/", ",", "(", ")", "translate(", "scale(", "rotate(",
    "linear-gradient(", "url(a.png)", "left", "right", "top", "bottom", "center", "row", "column",
    "dense", "stretch", "flex-end", "space-evenly", "cover", "#fff", "'s'", "!",
];

fn arb_value() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        (proptest::sample::select(FRAGMENTS), proptest::bool::ANY),
        0..8,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(text, space)| if space { format!("{text} ") } else { text.to_string() })
            .collect()
    })
}

proptest! {
    #[test]
    fn parsers_rewind_on_failure(
        name in proptest::sample::select(PROPERTY_NAMES.to_vec()),
        value in arb_value(),
    ) {
        let Some(parser) = property_parser(name) else {
            panic!("no parser for {name}");
        };
        let tokens = tokenize(&value);
        let mut ctx = ParseContext::default();
        let mut cursor = TokenCursor::new(&tokens);
        let mut out = StyleBuffer::new();
        out.append(0xdead).unwrap();

        match parser(&mut ctx, &mut cursor, &mut out) {
            Ok(()) => {
                prop_assert!(cursor.position() > 0);
                let mut fresh = StyleBuffer::new();
                fresh.vappend(&out.words()[1..]).unwrap();
                let walked: usize = fresh.declarations().map(|(_, ops)| 1 + ops.len()).sum();
                prop_assert_eq!(walked, fresh.len());
            },
            Err(_) => {
                prop_assert_eq!(cursor.position(), 0);
                prop_assert_eq!(out.words(), &[0xdead][..]);
            },
        }
    }
}
