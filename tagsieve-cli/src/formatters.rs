use colored::*;
use serde::Serialize;
use tagsieve::{Sanitizer, Token};

#[derive(Serialize, Debug)]
pub struct CleanRecord {
    pub input: String,
    pub output: String,
    /// Suppression depth left open at the end of the input.
    pub residual_depth: usize,
}

impl CleanRecord {
    pub fn new(input: &str, sanitizer: &Sanitizer) -> Self {
        CleanRecord {
            input: input.to_string(),
            output: sanitizer.result().to_string(),
            residual_depth: sanitizer.suppression_depth(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct TokenRecord {
    pub kind: String,
    pub len: usize,
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
}

impl From<Token<'_>> for TokenRecord {
    fn from(token: Token<'_>) -> Self {
        let kind = token.kind().to_string();
        let raw = token.raw().to_string();
        let (name, attributes) = match token {
            Token::OpenTag {
                name, attributes, ..
            } => (
                Some(name),
                attributes
                    .iter()
                    .map(|attr| (attr.name.clone(), attr.value.clone()))
                    .collect(),
            ),
            Token::CloseTag { name, .. } => (Some(name), Vec::new()),
            Token::Comment { .. } | Token::Text(_) => (None, Vec::new()),
        };
        TokenRecord {
            kind,
            len: raw.len(),
            raw,
            name,
            attributes,
        }
    }
}

pub fn output_tokens(records: &[TokenRecord]) {
    for record in records {
        let kind = match record.kind.as_str() {
            "OPEN_TAG" => record.kind.bright_green(),
            "CLOSE_TAG" => record.kind.bright_yellow(),
            "COMMENT" => record.kind.bright_magenta(),
            _ => record.kind.bright_white(),
        };
        println!("{},{},{}", kind, record.len, record.raw.bright_cyan());
        for (name, value) in &record.attributes {
            println!("    {}={:?}", name.bright_blue(), value);
        }
    }
}
