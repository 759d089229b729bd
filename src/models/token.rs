use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw coordinate input: free-form text or a plain decimal-degree number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Number(f64),
    Text(String),
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Token::Number(value)
    }
}

impl From<i32> for Token {
    fn from(value: i32) -> Self {
        Token::Number(value as f64)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token::Text(value.to_string())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token::Text(value)
    }
}

impl From<&Token> for Token {
    fn from(value: &Token) -> Self {
        value.clone()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_json_array() {
        let tokens: Vec<Token> =
            serde_json::from_str(r#"["S43°38.3232'", 32.30642, "W 122° 36'52.5"]"#).unwrap();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::Text("S43°38.3232'".to_string()));
        assert_eq!(tokens[1], Token::Number(32.30642));
        assert_eq!(tokens[2].to_string(), "W 122° 36'52.5");
    }
}
