use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolData {
    description: String,
}

impl SymbolData {
    pub fn new(description: impl Into<String>) -> Self {
        SymbolData {
            description: description.into(),
        }
    }
}

impl Display for SymbolData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description)
    }
}

lazy_static! {
    /* Well known symbols */
    pub static ref SYMBOL_TO_STRING_TAG: SymbolData = SymbolData::new("Symbol.toStringTag");
}
