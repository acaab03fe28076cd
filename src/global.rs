// SPDX-License-Identifier: MPL-2.0
//! Process-wide translator registration.
//!
//! The application builds one [`Translator`] at bootstrap and hands it to
//! [`install`]; everything downstream reaches it through [`get`] or the
//! [`t!`](crate::t) macro. The instance is immutable once installed.

use crate::translator::Translator;
use std::sync::OnceLock;

static TRANSLATOR: OnceLock<Translator> = OnceLock::new();

/// Registers the process-wide translator. Only the first call wins.
pub fn install(translator: Translator) {
    let _ = TRANSLATOR.set(translator);
}

/// Returns the process-wide translator.
///
/// If nothing was installed yet, a default-constructed instance is used;
/// construction is deterministic, so the result is the same either way.
pub fn get() -> &'static Translator {
    TRANSLATOR.get_or_init(Translator::default)
}

/// A formatted message argument captured by the [`t!`](crate::t) macro.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g. `"name"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Translates `key` through the installed translator, substituting `args`.
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let translator = get();
    if args.is_empty() {
        return translator.tr(key);
    }
    let pairs: Vec<(&str, &str)> = args
        .iter()
        .map(|arg| (arg.key, arg.value.as_str()))
        .collect();
    translator.tr_args(key, &pairs)
}

/// Formats a localized message from a key and named arguments.
///
/// Named arguments are substituted into `{placeholder}` positions of the
/// resolved template.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::global::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::global::translate($key, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    // The singleton is shared across the test binary, so these tests only
    // rely on the default construction every path produces.

    #[test]
    fn get_installs_default_translator() {
        let translator = get();
        assert!(!translator.available_locales.is_empty());
    }

    #[test]
    fn install_after_get_is_a_no_op() {
        let before = get().current_locale().to_string();
        install(Translator::default());
        assert_eq!(get().current_locale().to_string(), before);
    }

    #[test]
    fn translate_without_args_skips_interpolation() {
        assert_eq!(translate("does.not.exist", Vec::new()), "does.not.exist");
    }

    #[test]
    fn t_macro_substitutes_named_args() {
        let rendered = t!("greeting.welcome", name = "Alice");
        assert!(rendered.contains("Alice"), "got: {}", rendered);
    }
}
