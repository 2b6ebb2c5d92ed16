//! Generates invoice HTML from the sample data and stylesheet in assets/.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use invoice_assembler::{assemble_invoice_xml, FileFetcher, InvoiceGenerator, InvoicePage};

fn main() -> anyhow::Result<()> {
    let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");

    let data = fs::read_to_string(assets.join("invoice_data.json"))?;
    let pages: Vec<InvoicePage> = serde_json::from_str(&data)?;
    println!("✓ Loaded {} invoice page(s)", pages.len());

    let xml = assemble_invoice_xml(&pages);
    println!("✓ Assembled payload ({} bytes)", xml.len());

    let stylesheet_path = assets.join("invoice.xslt");
    let mut generator = InvoiceGenerator::new(FileFetcher::new());
    let html = generator.generate_invoice_html(
        stylesheet_path.to_str().expect("asset path is UTF-8"),
        &xml,
        HashMap::new(),
    )?;

    let output_path = "invoice.html";
    fs::write(output_path, &html)?;
    println!("\nSuccess! Generated {}", output_path);
    Ok(())
}
