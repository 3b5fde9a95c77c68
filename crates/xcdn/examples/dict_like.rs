//! Dict-like operations on xCDN documents.
//!
//! Demonstrates key existence checks, ordered iteration, array access,
//! and reading tags and annotations.
//! Run with: `cargo run --example dict_like`

use anyhow::{anyhow, Result};
use xcdn::parse;

fn main() -> Result<()> {
    let input = r#"
config: {
  name: "demo",
  version: "1.0.0",
  ids: [1, 2, 3],
  admin: #user @role("superuser") {
    id: u"550e8400-e29b-41d4-a716-446655440000",
    email: "admin@example.com"
  },
}
"#;

    let doc = parse(input)?;
    let config = doc
        .get_key("config")
        .ok_or_else(|| anyhow!("no config key found"))?;
    let obj = &config.value;

    // Key existence.
    if obj.has("name") {
        println!("'name' exists in config");
    }

    // Keys iterate in insertion order.
    println!("\nConfig keys:");
    for i in 0..obj.len() {
        if let Some(key) = obj.key_at(i) {
            println!("  - {key}");
        }
    }

    // Missing keys are None, not errors.
    println!(
        "\nMissing key: {}",
        if obj.get("missing_key").is_some() {
            "found"
        } else {
            "None (not found)"
        }
    );

    // Array iteration.
    if let Some(ids) = obj.get("ids") {
        println!("\nArray length: {}", ids.value.len());
        for i in 0..ids.value.len() {
            if let Some(item) = ids.value.at(i) {
                println!("  [{i}] = {}", item.value.as_int());
            }
        }
    }

    // Tags and annotations on the admin node.
    if let Some(admin) = obj.get("admin") {
        println!("\nAdmin node:");
        println!("  Tags ({}):", admin.tag_count());
        for i in 0..admin.tag_count() {
            if let Some(tag) = admin.tag_at(i) {
                println!("    #{tag}");
            }
        }
        println!(
            "  Has #user tag: {}",
            if admin.has_tag("user") { "yes" } else { "no" }
        );

        println!("  Annotations ({}):", admin.annotation_count());
        if let Some(role) = admin.find_annotation("role") {
            println!("    @{} with {} args", role.name, role.arg_count());
            if let Some(first) = role.arg(0) {
                println!("    First arg: {}", first.as_str().unwrap_or(""));
            }
        }
    }

    Ok(())
}
