use std::path::PathBuf;

use barista_codegen::Generator;
use barista_core::Overwrite;
use barista_manifest::SchemaFile;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the schema JSON (defaults to ./schema.json)
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,

    /// Output directory (defaults to the schema's output_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite existing files instead of skipping them
    #[arg(long)]
    pub force: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let schema_file = SchemaFile::open(&self.schema).unwrap_or_exit();
        let schema = schema_file.schema();
        let generator = Generator::new(schema);

        if self.dry_run {
            return self.run_preview(&generator);
        }

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| schema.config.output_dir.clone());
        let overwrite = if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };

        let summary = generator
            .generate(&output_dir, overwrite)
            .wrap_err("Failed to generate code")?;

        for failure in &summary.failures {
            eprintln!("warning: {failure}");
        }

        println!("Generated: {}", output_dir.display());
        println!("  {} files written", summary.written);
        if summary.skipped > 0 {
            println!(
                "  {} files skipped (already exist, use --force to overwrite)",
                summary.skipped
            );
        }
        if !summary.failures.is_empty() {
            println!("  {} entities skipped with errors", summary.failures.len());
        }

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let compiled = generator.preview();

        for unit in &compiled.units {
            println!("── {} ──", unit.path.display());
            println!("{}", unit.content);
        }

        for failure in &compiled.failures {
            eprintln!("warning: {failure}");
        }

        println!("── Summary ──");
        println!("{} files would be generated", compiled.units.len());

        Ok(())
    }
}
