//! Writing tests - inspect the parts of packages produced by `XlsxWriter`.

mod package;
mod sheet_parts;
mod styles;
