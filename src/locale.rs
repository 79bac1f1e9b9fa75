//! Locale-preferred encoding lookup, used as a decode fallback.
//!
//! The preferred encoding is resolved once per process from the usual
//! locale environment variables and cached.

use alloc::string::String;
use std::sync::OnceLock;

use encoding_rs::Encoding;

/// Decodes `bytes` with the locale-preferred encoding, strictly.
///
/// Returns `None` when no usable locale encoding is configured or when the
/// bytes are malformed under that encoding.
pub(crate) fn decode(bytes: &[u8]) -> Option<String> {
    let encoding = preferred_encoding()?;
    let decoded = encoding.decode_without_bom_handling_and_without_replacement(bytes)?;
    Some(decoded.into_owned())
}

fn preferred_encoding() -> Option<&'static Encoding> {
    static PREFERRED: OnceLock<Option<&'static Encoding>> = OnceLock::new();
    *PREFERRED.get_or_init(detect)
}

fn detect() -> Option<&'static Encoding> {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|value| !value.is_empty()))
        .and_then(|locale| encoding_from_locale(&locale))
}

/// Resolves the codeset part of a locale string such as `en_US.UTF-8` or
/// `pt_BR.ISO8859-1@currency` to an encoding. Locales without a codeset
/// (`C`, `POSIX`) resolve to nothing.
fn encoding_from_locale(locale: &str) -> Option<&'static Encoding> {
    let codeset = locale.split('.').nth(1)?;
    let codeset = codeset.split('@').next().unwrap_or(codeset);
    Encoding::for_label_no_replacement(codeset.as_bytes())
}
