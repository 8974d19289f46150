use crate::error::TableGenError;
use crate::writer::{CHeaderWriter, WriteOutcome};
use dxt_constant_color_tables::{ConstantColorTable, TableVariant, INTENSITY_COUNT};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Name of the generated header, written into the output directory.
pub const OUTPUT_FILE_NAME: &str = "dxt_encoder_implementation_autogen.h";

/// Name of the C array holding the table for `variant`, e.g. `kDXTConstantColors55`.
pub fn table_name(variant: TableVariant) -> String {
    format!("kDXTConstantColors{}", variant.suffix())
}

/// Runs the search for every [`TableVariant`], in declaration order.
pub fn generate_all_tables() -> Vec<ConstantColorTable> {
    TableVariant::all_values()
        .iter()
        .map(|&variant| {
            let start = Instant::now();
            let table = ConstantColorTable::generate(variant);
            println!("Generated {} in {:.2?}", table_name(variant), start.elapsed());
            table
        })
        .collect()
}

/// Emits `table` as a `const uint8_t name[256][2]` definition, one `{max, min}` row per intensity.
pub fn write_table(writer: &mut CHeaderWriter, table: &ConstantColorTable) {
    writer.write(&format!(
        "const uint8_t {}[{INTENSITY_COUNT}][2] = {{",
        table_name(table.variant())
    ));

    for (intensity, pair) in table.entries().iter().enumerate() {
        if intensity == 0 {
            writer.write(&format!("{{{}, {}}}", pair.max_code, pair.min_code));
        } else {
            writer.write(",\n");
            writer.write(&format!("    {{{}, {}}}", pair.max_code, pair.min_code));
        }
    }

    writer.write("};\n");
    writer.write("\n");
}

/// Writes generated headers and remembers which files it produced, so they can be formatted
/// afterwards.
#[derive(Debug, Default)]
pub struct TableGenerator {
    generated_files: Vec<PathBuf>,
}

impl TableGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes all `tables` into a single header at `path`.
    ///
    /// The file is only touched if its content would change. Either way it is recorded in
    /// [`generated_files`](Self::generated_files).
    pub fn write_constant_color_tables(
        &mut self,
        path: &Path,
        tables: &[ConstantColorTable],
    ) -> Result<WriteOutcome, TableGenError> {
        let mut header = CHeaderWriter::new(path, None)?;
        for table in tables {
            write_table(&mut header, table);
        }

        let generated = header.path().to_path_buf();
        let outcome = header.close()?;
        self.generated_files.push(generated);
        Ok(outcome)
    }

    pub fn generated_files(&self) -> &[PathBuf] {
        &self.generated_files
    }
}
