//! Emission of the divider's lookup-table header.

use std::fs;
use std::io;
use std::path::Path;

use itertools::Itertools;
use log::info;

use crate::table::Table;

const GUARD: &str = "_DIVIDER_LUT_H_";
const TABLE_NAME: &str = "DIVIDER_LUT";

/// Renders the table as a C++ header declaring a single constant.
///
/// The layout is part of the consumer's ABI: rows appear in subinterval
/// order, coefficients within a row ascend by degree, and each element is
/// a zero-extended 32-bit IEEE-754 bit pattern in a `uint64_t` slot.
pub fn emit(table: &Table) -> String {
    let rows = table
        .rows()
        .iter()
        .map(|row| format!("\t{{{}}}", row.iter().join(", ")))
        .join(",\n");

    format!(
        "#ifndef {GUARD}\n\
         #define {GUARD}\n\
         #include <cstdint>\n\
         #include <vector>\n\
         const std::vector<std::vector<uint64_t>> {TABLE_NAME} = {{\n\
         {rows}\n\
         }};\n\
         #endif  // {GUARD}\n"
    )
}

/// Writes the rendered header to `path`.
///
/// The text is assembled in full before a single write call, so a failure
/// never leaves a syntactically truncated table accepted by the consumer's
/// build.
pub fn write(table: &Table, path: &Path) -> io::Result<()> {
    let text = emit(table);

    fs::write(path, text)?;

    info!("wrote {} rows to {}", table.rows().len(), path.display());

    Ok(())
}
