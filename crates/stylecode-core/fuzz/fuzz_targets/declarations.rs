#![no_main]

use libfuzzer_sys::fuzz_target;
use stylecode_core::{ComputedStyle, ParseContext, SelectState, parse_declaration_list, tokenize};
use stylecode_types::Origin;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Whatever the parser emits must cascade without tripping the
        // malformed-bytecode panic.
        let mut ctx = ParseContext::default();
        let Ok(style) = parse_declaration_list(&mut ctx, &tokenize(input)) else {
            return;
        };
        let strings = ctx.into_strings();
        let mut state = SelectState::new();
        if state.cascade(&style, &strings, Origin::Author, 0).is_ok() {
            let child = state.finish();
            let _ = ComputedStyle::compose(&ComputedStyle::default(), &child);
        }
    }
});
