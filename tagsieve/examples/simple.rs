use tagsieve::{sanitize, Sanitizer, SanitizerConfig, Tokenizer};

fn main() {
    println!("Testing tagsieve functionality...");

    let config = SanitizerConfig::default()
        .with_allowed_tags(["p", "b", "a", "br"])
        .with_allowed_attributes(["href", "title"]);

    let cases = [
        ("<p>Hello <b>world</b></p>", "Safe markup"),
        ("<p>hi</p><script>alert('xss')</script>", "Script tag"),
        ("<a href=/x onclick=steal()>link</a>", "Event handler"),
        ("line<BR>break", "Void tag"),
        ("1 < 2 <!-- note -->", "Text and comment"),
    ];

    println!("\n=== Sanitize ===");
    for (input, description) in &cases {
        println!("{}: {} -> {}", description, input, sanitize(input, &config));
    }

    println!("\n=== Tokens ===");
    for token in Tokenizer::new("<p class=x>a</p><!--c-->") {
        println!("{},{}", token.kind(), token.raw());
    }

    println!("\n=== Reused sanitizer ===");
    let mut sanitizer = Sanitizer::new(config);
    sanitizer.sanitize("<div>open");
    println!("depth after first pass: {}", sanitizer.suppression_depth());
    sanitizer.reset();
    sanitizer.sanitize("<p>fresh</p>");
    println!("after reset: {}", sanitizer.result());
}
