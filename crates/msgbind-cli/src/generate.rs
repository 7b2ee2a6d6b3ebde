//! `generate` and `check` command implementations

use anyhow::{Context, Result};
use msgbind_core::{GeneratorConfig, Meta, Service, StringSink, WriterSink, generate};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Everything a generation run reads.
#[derive(Debug)]
pub struct Inputs {
    pub service: Service,
    pub meta: Meta,
    pub config: GeneratorConfig,
}

impl Inputs {
    /// Load the service, optional code maps and optional configuration.
    pub fn load(schema: &Path, meta: Option<&Path>, config: Option<&Path>) -> Result<Self> {
        let text = std::fs::read_to_string(schema)
            .with_context(|| format!("Failed to read schema: {}", schema.display()))?;
        let service = Service::from_json(&text)
            .with_context(|| format!("Failed to parse schema: {}", schema.display()))?;

        let meta = match meta {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read meta: {}", path.display()))?;
                Meta::from_json(&text)
                    .with_context(|| format!("Failed to parse meta: {}", path.display()))?
            }
            None => Meta::default(),
        };

        let config = match config {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        tracing::debug!(
            "Loaded {} methods from {}",
            service.methods.len(),
            schema.display()
        );

        Ok(Self {
            service,
            meta,
            config,
        })
    }
}

/// Banner written above the generated declarations.
pub fn header(command_line: &str) -> String {
    format!(
        "#![allow(non_camel_case_types)]\n\
         //\n\
         // This file was generated by msgbind with the following command:\n\
         //\n\
         // ```bash\n\
         // {command_line}\n\
         // ```\n\
         //\n\
         // Do not edit this file, it will be overwritten. Edit the schema it was\n\
         // generated from instead.\n\
         \n\
         //! Models describing [requests] and [responses].\n\
         \n"
    )
}

/// Generate declarations and write them, with the header, to `output`.
///
/// The declarations are rendered in memory first so a failed run never
/// creates or truncates the output file.
pub fn run(inputs: &Inputs, output: &Path, command_line: &str) -> Result<()> {
    let mut rendered = StringSink::new(inputs.config.indent.clone());
    generate(&inputs.service, &inputs.meta, &inputs.config, &mut rendered)
        .context("Failed to generate declarations")?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = File::create(output)
        .with_context(|| format!("Failed to create output: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    write_output(&mut writer, command_line, rendered.as_str())
        .with_context(|| format!("Failed to write output: {}", output.display()))?;

    println!(
        "Generated {} methods into {}",
        inputs.service.methods.len(),
        output.display()
    );

    Ok(())
}

/// Write the header and the rendered declarations, then flush.
fn write_output(writer: &mut impl Write, command_line: &str, rendered: &str) -> std::io::Result<()> {
    writer.write_all(header(command_line).as_bytes())?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()
}

/// Validate that the inputs generate cleanly, discarding the output.
pub fn check(inputs: &Inputs) -> Result<()> {
    let mut sink = WriterSink::new(std::io::sink(), inputs.config.indent.clone());
    generate(&inputs.service, &inputs.meta, &inputs.config, &mut sink)
        .context("Service description does not generate")?;

    println!("✓ Methods: {}", inputs.service.methods.len());
    println!(
        "✓ Code maps: {}",
        inputs.meta.field_map.len() + inputs.meta.enum_map.len()
    );
    println!("\nService description is valid!");

    Ok(())
}
