//! Package registry for the current parse session.
//!
//! Parsing only tracks the current package name plus one symbol table scope
//! per declared package; real symbol resolution happens in later stages.

use std::collections::HashMap;

use crate::ast::types::NiftyType;

/// One package's symbol scope.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    symbols: HashMap<String, NiftyType>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            symbols: HashMap::new(),
        }
    }

    /// Defines a symbol. Returns false if the name was already defined in
    /// this scope (the existing entry is kept).
    pub fn define(&mut self, name: String, ty: NiftyType) -> bool {
        if self.symbols.contains_key(&name) {
            return false;
        }

        self.symbols.insert(name, ty);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn lookup(&self, name: &str) -> Option<&NiftyType> {
        self.symbols.get(name)
    }
}

/// Maps package names to their symbol table scopes.
#[derive(Debug, Default)]
pub struct Packages {
    packages: HashMap<String, SymbolTable>,
}

impl Packages {
    pub fn new() -> Packages {
        Packages {
            packages: HashMap::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Adds a fresh scope for `name`. Returns false if the package already
    /// exists; re-declaring a package never clobbers its scope.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }

        self.packages.insert(name.to_string(), SymbolTable::new());
        true
    }

    pub fn get(&self, name: &str) -> Option<&SymbolTable> {
        self.packages.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SymbolTable> {
        self.packages.get_mut(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_package_once() {
        let mut packages = Packages::new();
        assert!(packages.add("main"));
        assert!(!packages.add("main"));
        assert!(packages.contains("main"));
    }

    #[test]
    fn test_symbol_table_define() {
        let mut packages = Packages::new();
        packages.add("main");

        let table = packages.get_mut("main").unwrap();
        assert!(table.define(String::from("x"), NiftyType::Void));
        assert!(!table.define(String::from("x"), NiftyType::Void));
        assert!(table.contains("x"));
        assert_eq!(table.lookup("x"), Some(&NiftyType::Void));
    }
}
