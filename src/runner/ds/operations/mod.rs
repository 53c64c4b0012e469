pub mod numeric_string;
#[cfg(test)]
mod numeric_string_unit_tests;
pub mod object;
pub mod type_conversion;
