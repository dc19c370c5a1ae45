//! Ready-made copy strategies for `ProductionTable::resolve`. Any
//! `FnOnce(ProductionMap) -> ProductionMap` will do.

use super::grammar::ProductionMap;

/// Keep the productions in the order they were defined.
pub fn identity(productions: ProductionMap) -> ProductionMap {
    productions
}

/// Order the productions by name.
pub fn sorted(mut productions: ProductionMap) -> ProductionMap {
    productions.sort_keys();
    productions
}
