//! Generate CATALOG.md from the clause registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-catalog
//! ```
//!
//! The generated file is written to `CATALOG.md` at the workspace root.

use std::fs;
use std::path::Path;

use eurocalc_core::registry::generate_catalog_markdown;

fn main() {
    println!("Generating CATALOG.md...");

    let markdown = generate_catalog_markdown();
    let output_path = Path::new("CATALOG.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
