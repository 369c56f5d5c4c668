use std::path::PathBuf;

use barista_codegen::Generator;
use barista_manifest::SchemaFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the schema JSON (defaults to ./schema.json)
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema_file = SchemaFile::open(&self.schema).unwrap_or_exit();
        let schema = schema_file.schema();

        let compiled = Generator::new(schema).preview();

        for failure in &compiled.failures {
            eprintln!("error: {failure}");
        }

        println!(
            "{}: {} entities, {} files",
            self.schema.display(),
            schema.entities.len(),
            compiled.units.len()
        );

        if !compiled.failures.is_empty() {
            std::process::exit(1);
        }
        Ok(())
    }
}
