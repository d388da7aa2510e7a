//! WASM bindings for the HRML query engine.
//!
//! Exposes `query()` and `check()` to JavaScript via wasm-bindgen.
//! Query results come back as a JS array of strings; structural errors
//! in the markup are thrown.

use hrml_resolver::{resolve_all, Strategy};
use wasm_bindgen::prelude::*;

/// Resolve newline-separated `queries` against HRML `source`.
///
/// `parser` is `"tag_tree"` (default) or `"in_stream"`.
/// Returns a JS array with one result string per non-empty query line.
/// Throws a JS error if the parser name is unknown or the markup is malformed.
#[wasm_bindgen]
pub fn query(source: &str, queries: &str, parser: Option<String>) -> Result<js_sys::Array, JsError> {
    let lines =
        run_queries(source, queries, parser.as_deref()).map_err(|message| JsError::new(&message))?;

    let out = js_sys::Array::new();
    for line in lines {
        out.push(&JsValue::from_str(&line));
    }
    Ok(out)
}

/// Check HRML source for structural errors. Throws on the first one.
#[wasm_bindgen]
pub fn check(source: &str) -> Result<(), JsError> {
    hrml_parser::Parser::parse(source)
        .map(|_| ())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Get the engine version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Native half of [`query`], kept free of JS types so it can be tested.
fn run_queries(source: &str, queries: &str, parser: Option<&str>) -> Result<Vec<String>, String> {
    let strategy = match parser {
        Some(name) => name.parse::<Strategy>().map_err(|e| e.to_string())?,
        None => Strategy::default(),
    };

    let resolver = strategy.build(source).map_err(|e| e.to_string())?;

    let lines = queries.lines().filter(|line| !line.trim().is_empty());
    Ok(resolve_all(&resolver, lines))
}
