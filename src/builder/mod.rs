mod symbol;

pub use symbol::Symbol;

use crate::common::{
    codec,
    error::SymbolResult,
    metadata::{ECLevel, Version},
};

pub struct SymbolBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    ec_level: ECLevel,
}

impl<'a> SymbolBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, ec_level: ECLevel::L }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn metadata(&self) -> String {
        match self.version {
            Some(v) => format!(
                "{{ Version: {}, Ec level: {:?} }}",
                v.number(),
                self.ec_level
            ),
            None => format!("{{ Version: None, Ec level: {:?} }}", self.ec_level),
        }
    }
}

#[cfg(test)]
mod symbol_builder_util_tests {
    use super::SymbolBuilder;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_metadata() {
        let data = "Hello, world!".as_bytes();
        let mut builder = SymbolBuilder::new(data);
        builder.version(Version::new(1)).ec_level(ECLevel::L);
        assert_eq!(builder.metadata(), "{ Version: 1, Ec level: L }");
        builder.unset_version();
        assert_eq!(builder.metadata(), "{ Version: None, Ec level: L }");
    }
}

impl SymbolBuilder<'_> {
    pub fn build(&self) -> SymbolResult<Symbol> {
        println!("\nGenerating symbol {}...", self.metadata());

        let version = match self.version {
            Some(v) => v,
            None => {
                println!("Finding smallest version...");
                let version = codec::fit_version(self.data, self.ec_level)?;
                println!("Selected version: {}", version.number());
                version
            }
        };

        println!("Drawing function patterns...");
        let mut symbol = Symbol::new(version.width(), self.ec_level);

        println!("Encoding data...");
        symbol.encode(self.data)?;

        println!("\x1b[1;32mSymbol generated successfully!\n\x1b[0m");

        let total_modules = symbol.width() * symbol.width();
        let dark_modules = symbol.count_dark_modules();
        let light_modules = total_modules - dark_modules;

        println!("Report:");
        println!("{}", symbol.metadata());
        println!(
            "Data capacity: {} bits, Payload: {} bytes",
            version.data_bit_capacity(self.ec_level),
            self.data.len()
        );
        println!(
            "Dark Cells: {}, Light Cells: {}, Balance: {}%\n",
            dark_modules,
            light_modules,
            dark_modules * 100 / total_modules
        );

        Ok(symbol)
    }
}
