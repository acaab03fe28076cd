// SPDX-License-Identifier: MPL-2.0
//! Per-locale message dictionaries.
//!
//! Each locale ships as one JSON document mapping translation keys to
//! template strings. Nested objects are allowed and are flattened into
//! dot-joined keys at load time, so `{"nav": {"home": "Início"}}` is
//! addressed as `nav.home`. Dictionaries are immutable once parsed.

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;

/// The flattened dictionary for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleMessages {
    messages: HashMap<String, String>,
}

impl LocaleMessages {
    /// Parses a JSON document into a flattened dictionary.
    ///
    /// The document must be a JSON object whose leaves are all strings;
    /// any other leaf type is a malformed dictionary.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let root: Value = serde_json::from_slice(data)?;
        let Value::Object(map) = root else {
            return Err(Error::Catalog(
                "locale document must be a JSON object".to_string(),
            ));
        };

        let mut messages = HashMap::new();
        for (key, value) in map {
            flatten_into(&mut messages, key, value)?;
        }
        Ok(Self { messages })
    }

    /// Looks up a template string by flattened key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over all flattened keys in this locale.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }
}

fn flatten_into(out: &mut HashMap<String, String>, key: String, value: Value) -> Result<()> {
    match value {
        Value::String(s) => {
            out.insert(key, s);
            Ok(())
        }
        Value::Object(map) => {
            for (child_key, child_value) in map {
                flatten_into(out, format!("{}.{}", key, child_key), child_value)?;
            }
            Ok(())
        }
        other => Err(Error::Catalog(format!(
            "expected string or object at key '{}', found {}",
            key, other
        ))),
    }
}

/// Single-pass `{name}` interpolation. Placeholders without a matching
/// argument and unclosed braces are emitted verbatim.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        let mut name = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            name.push(c);
        }

        if closed {
            match args.iter().find(|(n, _)| *n == name) {
                Some((_, value)) => result.push_str(value),
                None => {
                    result.push('{');
                    result.push_str(&name);
                    result.push('}');
                }
            }
        } else {
            result.push('{');
            result.push_str(&name);
        }
    }

    result
}
