/*
   Runtime symbol table
*/
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    // the program's own name; carries no value
    Function,
    Variable(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<char, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: HashMap::new(),
        }
    }

    pub fn get(&self, name: char) -> Option<Symbol> {
        self.symbols.get(&name).copied()
    }

    /// Binds `name`, replacing whatever was bound before.
    pub fn bind(&mut self, name: char, symbol: Symbol) {
        self.symbols.insert(name, symbol);
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Entries ordered by name.
    pub fn sorted(&self) -> Vec<(char, Symbol)> {
        let mut entries: Vec<(char, Symbol)> =
            self.symbols.iter().map(|(name, sym)| (*name, *sym)).collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8} | {:<10} | {:<20}", "Symbol", "Kind", "Value")?;
        writeln!(f, "{:-<44}", "")?;
        for (name, sym) in self.sorted() {
            match sym {
                Symbol::Function => writeln!(f, "{:<8} | {:<10} | {:<20}", name, "FUNCTION", "-")?,
                Symbol::Variable(v) => writeln!(f, "{:<8} | {:<10} | {:<20}", name, "VARIABLE", v)?,
            }
        }
        Ok(())
    }
}
