//! Parse a document, then print it in both layouts.
//!
//! Run with: `cargo run --example roundtrip`

use anyhow::Result;
use xcdn::{parse, to_string_compact, to_string_pretty};

fn main() -> Result<()> {
    let input = r#"
$schema: "https://example.com/schemas/v1/meta.xcdn",

config: {
  name: "demo",
  ids: [1, 2, 3,],
  timeout: r"PT30S",
  id: u"550e8400-e29b-41d4-a716-446655440000",
  created_at: t"2025-12-07T10:00:00Z",
  payload: b"aGVsbG8=",
}
"#;

    let doc = parse(input)?;

    println!("=== Pretty ===\n{}", to_string_pretty(&doc));
    println!("\n=== Compact ===\n{}", to_string_compact(&doc));

    Ok(())
}
