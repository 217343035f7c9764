#![no_main]
use libfuzzer_sys::fuzz_target;
use tagsieve::{Sanitizer, SanitizerConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let _ = tagsieve::sanitize(input, &SanitizerConfig::allow_all());

    // A second pass after reset must match a fresh sanitizer.
    let config = SanitizerConfig::default()
        .with_allowed_tags(["p", "b"])
        .with_allowed_attributes(["id"]);
    let mut reused = Sanitizer::new(config.clone());
    reused.sanitize(input);
    reused.reset();
    reused.sanitize(input);
    assert_eq!(reused.result(), tagsieve::sanitize(input, &config));
});
