//! Read command for printing the bibliographic entries of PDF files.

use serde_json::json;

use super::*;

/// How entries are printed.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
  /// One BibTeX entry per record
  #[default]
  Bibtex,
  /// A JSON array with the entries of every file
  Json,
}

/// Arguments that can be used for the [`Commands::Read`]
#[derive(Args, Clone)]
pub struct ReadOptions {
  /// PDF files to read
  #[arg(required = true, num_args = 1..)]
  pub paths: Vec<PathBuf>,

  /// Output format of the entries
  #[arg(long, short, value_enum, default_value_t = OutputFormat::Bibtex)]
  pub format: OutputFormat,

  /// Print the Dublin Core properties of every description section instead of entries
  #[arg(long, conflicts_with = "format")]
  pub raw: bool,
}

/// Function for the [`Commands::Read`] in the CLI.
///
/// Files that cannot be read are reported on stderr with their path; the remaining
/// files are still processed and the command fails at the end.
pub fn read(preferences: &XmpPreferences, options: ReadOptions) -> Result<()> {
  let total = options.paths.len();
  let mut failed = 0;
  let mut json_output = Vec::new();

  for path in &options.paths {
    debug!("Reading {}", path.display());
    let outcome = if options.raw {
      reader::read_raw_xmp(path).map(|metadata| print_raw(path, metadata.as_deref()))
    } else {
      reader::read_xmp(path, preferences).map(|entries| match options.format {
        OutputFormat::Bibtex => print_bibtex(path, &entries),
        OutputFormat::Json => json_output.push(json!({
          "file": path.display().to_string(),
          "entries": entries,
        })),
      })
    };

    if let Err(e) = outcome {
      failed += 1;
      report_failure(path, &e);
    }
  }

  if !options.raw && options.format == OutputFormat::Json {
    println!("{}", serde_json::to_string_pretty(&json_output)?);
  }

  if failed > 0 {
    return Err(BibXmpCliError::Unreadable { failed, total });
  }
  Ok(())
}

/// Prints the error for a file that could not be processed.
fn report_failure(path: &Path, error: &BibXmpError) {
  let reason = if error.is_read_failure() { "Could not read" } else { "Invalid metadata in" };
  eprintln!("{} {reason} {}: {error}", style(ERROR_PREFIX).red(), style(path.display()).yellow());
}

/// Prints entries as BibTeX, preceded by a comment naming the file.
fn print_bibtex(path: &Path, entries: &[BibEntry]) {
  if entries.is_empty() {
    eprintln!(
      "{} No bibliographic metadata found in {}",
      style(INFO_PREFIX).cyan(),
      style(path.display()).yellow()
    );
    return;
  }

  println!("% {}", path.display());
  for entry in entries {
    println!("{entry}\n");
  }
}

/// Prints the Dublin Core properties of every description section as a tree.
fn print_raw(path: &Path, metadata: Option<&[XmpMetadata]>) {
  let Some(metadata) = metadata else {
    eprintln!(
      "{} No XMP metadata stream in {}",
      style(WARNING_PREFIX).yellow(),
      style(path.display()).yellow()
    );
    return;
  };

  println!(
    "{} {}: {} description sections",
    style(INFO_PREFIX).cyan(),
    style(path.display()).bold(),
    metadata.len()
  );
  for (index, section) in metadata.iter().enumerate() {
    let last = index + 1 == metadata.len();
    println!("{} Section {}", if last { TREE_LEAF } else { TREE_BRANCH }, index + 1);
    let indent = if last { "   " } else { CONTINUE_PREFIX };
    match &section.dublin_core {
      Some(schema) => print_schema(indent, schema),
      None => println!("{indent}{}", style("no Dublin Core properties").dim()),
    }
  }
}

/// Prints one `name: value` line per Dublin Core property.
fn print_schema(indent: &str, schema: &DublinCoreSchema) {
  for name in schema.property_names() {
    let values = schema
      .lang_values(name)
      .iter()
      .map(|value| match &value.lang {
        Some(lang) => format!("{} [{lang}]", value.value),
        None => value.value.clone(),
      })
      .collect::<Vec<_>>()
      .join("; ");
    println!("{indent}{}: {values}", style(name).green());
  }
}
