// src/resolve/mod.rs
//
// Matching policy for the rendered calendar: date labels are expanded into
// candidate spellings and matched by substring containment against
// normalized header text; row labels are matched by substring containment
// against normalized leading-cell text. First match wins in both cases, so
// resolution is deterministic left to right.

pub mod column;
pub mod dates;
pub mod row;

pub use column::resolve_column;
pub use row::resolve_row;
