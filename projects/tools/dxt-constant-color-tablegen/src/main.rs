mod error;
mod format;
mod generator;
mod util;
mod writer;

use argh::FromArgs;
use core::error::Error;
use error::TableGenError;
use generator::{generate_all_tables, TableGenerator, OUTPUT_FILE_NAME};
use std::env;
use std::path::PathBuf;
use std::time::Instant;
use writer::WriteOutcome;

#[derive(FromArgs, Debug)]
/// Generates the constant colour endpoint tables used by the DXT encoder
struct TopLevel {
    /// base directory for the generated header [default: current directory]
    #[argh(option, from_str_fn(crate::util::canonicalize_cli_path))]
    output_dir: Option<PathBuf>,

    /// do not run clang-format on the generated header
    #[argh(switch)]
    skip_format: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();
    run(cli)?;
    Ok(())
}

fn run(cli: TopLevel) -> Result<WriteOutcome, TableGenError> {
    let output_dir = match cli.output_dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };
    let path = output_dir.join(OUTPUT_FILE_NAME);

    let start = Instant::now();
    let tables = generate_all_tables();

    let mut generator = TableGenerator::new();
    let outcome = generator.write_constant_color_tables(&path, &tables)?;
    match outcome {
        WriteOutcome::Written => println!("Wrote {}", path.display()),
        WriteOutcome::Unchanged => println!("{} is up to date", path.display()),
    }

    if cli.skip_format {
        println!("⚠ Skipping formatting");
    } else {
        format::format_files(generator.generated_files())?;
    }

    println!("Table generation completed in {:.2?}", start.elapsed());
    Ok(outcome)
}
