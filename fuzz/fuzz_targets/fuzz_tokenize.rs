#![no_main]
use libfuzzer_sys::fuzz_target;
use tagsieve::Tokenizer;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Tokens are contiguous and cover the whole input.
    let rebuilt: String = Tokenizer::new(input).map(|token| token.raw()).collect();
    assert_eq!(rebuilt, input);
});
