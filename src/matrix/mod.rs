//! Score matrices: parsing, the symmetric distance table and the
//! best-of-all merge.

pub mod merge;
pub mod parser;
pub mod table;
