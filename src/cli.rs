use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use std::path::PathBuf;

/// Path parser that accepts empty values so request validation can report
/// them as `InvalidRequest` instead of clap rejecting them up front.
fn path_value_parser() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}

#[derive(Parser, Debug)]
#[command(
    name = "json-file-merge",
    about = "Merge two JSON files into one, with configurable array-merge strategies",
    long_about = "json-file-merge reads two JSON documents, deep-merges them, and writes the \
result to a third file.

Objects merge key-by-key (the merge file wins on scalar collisions) and the
way array-valued fields combine is selectable:
  • CombineAll (default): concatenate base-file elements, then merge-file elements
  • OverwriteBaseArray: keep the merge file's array verbatim
  • MergeByIndex: reconcile arrays element-by-element at matching positions
  • MergeByObjectName: reserved, currently behaves as CombineAll

Each input can also be supplied through an INPUT_* environment variable,
matching how a CI workflow passes action inputs.

Examples:
  # Merge with the default array strategy
  json-file-merge --base-file base.json --merge-file overrides.json --output-file merged.json

  # Replace arrays wholesale instead of concatenating
  json-file-merge -b base.json -m overrides.json -o merged.json \\
      --array-merge-strategy OverwriteBaseArray",
    version,
    author
)]
pub struct Cli {
    /// Path to the base JSON file
    #[arg(short, long, env = "INPUT_BASE_FILE", value_hint = clap::ValueHint::FilePath, value_parser = path_value_parser())]
    pub base_file: PathBuf,

    /// Path to the JSON file merged on top of the base
    #[arg(short, long, env = "INPUT_MERGE_FILE", value_hint = clap::ValueHint::FilePath, value_parser = path_value_parser())]
    pub merge_file: PathBuf,

    /// Path the merged JSON document is written to
    #[arg(short, long, env = "INPUT_OUTPUT_FILE", value_hint = clap::ValueHint::FilePath, value_parser = path_value_parser())]
    pub output_file: PathBuf,

    /// How array-valued fields combine: CombineAll, OverwriteBaseArray,
    /// MergeByIndex, or MergeByObjectName (unrecognized values fall back to
    /// CombineAll)
    #[arg(short = 's', long, env = "INPUT_ARRAY_MERGE_STRATEGY")]
    pub array_merge_strategy: Option<String>,

    /// Enable debug output (shows INFO and DEBUG messages)
    #[arg(long)]
    pub debug: bool,

    /// Enable trace output (shows all log messages including TRACE)
    #[arg(short = 't', long)]
    pub trace: bool,
}
