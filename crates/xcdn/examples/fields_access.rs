//! Accessing fields in an xCDN document.
//!
//! Demonstrates step-by-step navigation and dot-separated path access.
//! Run with: `cargo run --example fields_access`

use anyhow::Result;
use xcdn::parse;

fn main() -> Result<()> {
    let input = r#"
config: {
  name: "demo",
  version: "1.0.0",
  ids: [1, 2, 3],
  nested: {
    deep: {
      value: "found it!"
    }
  }
}
"#;

    let doc = parse(input)?;

    // Step-by-step access through the object accessors.
    if let Some(config) = doc.get_key("config") {
        if let Some(name) = config.value.get("name") {
            println!("Name: {}", name.value.as_str().unwrap_or(""));
        }
        if let Some(version) = config.value.get("version") {
            println!("Version: {}", version.value.as_str().unwrap_or(""));
        }
        if let Some(first) = config.value.get("ids").and_then(|ids| ids.value.at(0)) {
            println!("First ID: {}", first.value.as_int());
        }
    }

    // Deep access with a dot-separated path.
    if let Some(deep) = doc.get_path("config.nested.deep.value") {
        println!("Deep value: {}", deep.value.as_str().unwrap_or(""));
    }

    Ok(())
}
