//! Body-form symbol set
//!
//! Clojure special forms and core macros whose nested content is indented
//! by a fixed two-column offset from the opener instead of aligning with a
//! first argument. The set is process-wide constant data, consulted by
//! value and never mutated; per-symbol configuration is deliberately not
//! offered.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Symbols that head body-style forms.
pub static BODY_FORMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "binding",
        "bound-fn",
        "case",
        "catch",
        "comment",
        "cond",
        "cond->",
        "cond->>",
        "condp",
        "def",
        "defmacro",
        "defmethod",
        "defmulti",
        "defn",
        "defn-",
        "defonce",
        "defprotocol",
        "defrecord",
        "defstruct",
        "deftest",
        "deftype",
        "delay",
        "do",
        "doall",
        "dorun",
        "doseq",
        "dosync",
        "dotimes",
        "doto",
        "finally",
        "fn",
        "for",
        "future",
        "if",
        "if-let",
        "if-not",
        "if-some",
        "let",
        "letfn",
        "locking",
        "loop",
        "ns",
        "proxy",
        "reify",
        "try",
        "when",
        "when-first",
        "when-let",
        "when-not",
        "when-some",
        "while",
        "with-bindings",
        "with-local-vars",
        "with-open",
        "with-out-str",
        "with-redefs",
    ]
    .into_iter()
    .collect()
});

/// True when `symbol` exactly names a built-in body form.
pub fn is_body_form(symbol: &str) -> bool {
    BODY_FORMS.contains(symbol)
}
