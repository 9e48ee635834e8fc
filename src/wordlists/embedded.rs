//! Embedded word list
//!
//! The bundled vocabulary compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/builtin_words.rs"));
