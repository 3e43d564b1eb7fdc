//! Example: Rendering the diagram without touching the filesystem
//!
//! Builds the document from font bytes already in memory and prints a short
//! summary instead of writing a file.

use rovibe_diagram::{FontAsset, Template};

fn main() {
    let regular = FontAsset::from_bytes("Regular.ttf", b"regular font bytes".to_vec());
    let bold = FontAsset::from_bytes("Bold.ttf", b"bold font bytes".to_vec());

    let regular = regular.encode();
    let bold = bold.encode();

    for template in Template::variants() {
        let document = template.render(regular.as_str(), bold.as_str());
        println!(
            "{}: {} bytes ({} template, {} regular, {} bold)",
            template.name(),
            document.len(),
            template.static_len(),
            regular.len(),
            bold.len()
        );
    }
}
