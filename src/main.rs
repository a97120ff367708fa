use std::env;
use std::error::Error;

use qrsketch::{ECLevel, SymbolBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let data = args.next().unwrap_or_else(|| "Hello, World!".to_string());
    let output_path = args.next().unwrap_or_else(|| "symbol.png".to_string());

    println!("Data analysis:");
    println!("Original text: {data}");
    println!("UTF-8 bytes: {}", data.len());

    let symbol = SymbolBuilder::new(data.as_bytes()).ec_level(ECLevel::L).build()?;

    println!("{}", symbol.to_str());

    let img = symbol.to_image(4);
    img.save(&output_path)?;
    println!("Symbol saved to: {output_path}");

    Ok(())
}
