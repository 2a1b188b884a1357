//! CLI argument parsing for promptlib.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptlib: a file-based library of reusable prompt templates.
///
/// Paste a prompt with placeholders in any of three forms
/// (`{name}`, `__NAME__`, `\[name\]`), store it as a template, then fill
/// in the variables whenever you need the finished text:
/// - `forge` turns raw text into a stored template
/// - `fill` renders a template with your values
/// - `export`/`import` move the whole library as one JSON file
#[derive(Parser, Debug)]
#[command(name = "promptlib")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptlib.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a prompt library in the current directory.
    ///
    /// Creates `.promptlib/` with a default config.yaml and an empty
    /// collection.
    Init,

    /// Create a template from raw prompt text.
    ///
    /// Detects variables, derives title and description from the first
    /// lines, rewrites placeholders to `{name}`, and stores the result.
    Forge(ForgeArgs),

    /// Show the variables detected in raw text without storing anything.
    Vars(VarsArgs),

    /// List stored templates.
    List(ListArgs),

    /// Search templates by title, description, or tag.
    Search(SearchArgs),

    /// Show one template in full.
    Show(ShowArgs),

    /// Render a template with variable values.
    ///
    /// Unset variables use their defaults.
    Fill(FillArgs),

    /// Change an existing template.
    Edit(EditArgs),

    /// Delete a template.
    Remove(RemoveArgs),

    /// Write the whole library to a JSON file.
    Export(ExportArgs),

    /// Replace the whole library with the contents of a JSON file.
    ///
    /// Requires --yes; without it, reports what would change.
    Import(ImportArgs),
}

/// Arguments for the `forge` command.
#[derive(Parser, Debug)]
pub struct ForgeArgs {
    /// File with the raw prompt text, or `-` for stdin.
    pub source: String,

    /// Title (default: first line of the raw text).
    #[arg(long)]
    pub title: Option<String>,

    /// Description (default: lines 2-3 of the raw text).
    #[arg(long)]
    pub description: Option<String>,

    /// Category label.
    #[arg(long)]
    pub category: Option<String>,

    /// Comma-separated tags.
    #[arg(long)]
    pub tags: Option<String>,

    /// File with an edited base prompt to store instead of the raw text.
    #[arg(long)]
    pub body: Option<PathBuf>,

    /// Default value for a variable (repeatable).
    #[arg(long = "default", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub defaults: Vec<(String, String)>,

    /// Rename a detected variable (repeatable).
    #[arg(long = "rename", value_name = "OLD=NEW", value_parser = parse_assignment)]
    pub renames: Vec<(String, String)>,

    /// Drop a detected variable, e.g. a brace pair in example code (repeatable).
    #[arg(long = "remove-var", value_name = "NAME")]
    pub remove_vars: Vec<String>,

    /// Number of extra, manually named variables to append.
    #[arg(long, default_value_t = 0)]
    pub add_vars: usize,

    /// Save even if some variables have no `{name}` placeholder.
    #[arg(long)]
    pub yes: bool,

    /// Print the template that would be stored without storing it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `vars` command.
#[derive(Parser, Debug)]
pub struct VarsArgs {
    /// File with the raw prompt text, or `-` for stdin.
    pub source: String,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only templates in this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Only templates with a tag matching this glob (e.g. `py*`).
    #[arg(long)]
    pub tag: Option<String>,
}

/// Arguments for the `search` command.
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Case-insensitive search term.
    pub term: String,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Template id.
    pub id: String,
}

/// Arguments for the `fill` command.
#[derive(Parser, Debug)]
pub struct FillArgs {
    /// Template id.
    pub id: String,

    /// Value for a variable (repeatable).
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub values: Vec<(String, String)>,

    /// Also copy the result using `clipboard_command`.
    #[arg(long)]
    pub copy: bool,
}

/// Arguments for the `edit` command.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Template id.
    pub id: String,

    /// New title.
    #[arg(long)]
    pub title: Option<String>,

    /// New description.
    #[arg(long)]
    pub description: Option<String>,

    /// New category.
    #[arg(long)]
    pub category: Option<String>,

    /// New comma-separated tags.
    #[arg(long)]
    pub tags: Option<String>,

    /// File with a new base prompt.
    #[arg(long)]
    pub body: Option<PathBuf>,

    /// New default value for an existing variable (repeatable).
    #[arg(long = "default", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub defaults: Vec<(String, String)>,

    /// Save even if some variables have no `{name}` placeholder.
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `remove` command.
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Template id.
    pub id: String,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output path (default: `{export_prefix}_{timestamp}.json` in the current directory).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `import` command.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// JSON file containing an array of templates.
    pub file: PathBuf,

    /// Replace the current library (required; otherwise dry-run).
    #[arg(long)]
    pub yes: bool,
}

/// Parse `name=value`. The value may contain `=`.
fn parse_assignment(input: &str) -> Result<(String, String), String> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", input))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{}'", input));
    }
    Ok((name.to_string(), value.to_string()))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init() {
        let cli = Cli::try_parse_from(["promptlib", "init"]).unwrap();
        assert!(matches!(cli.command, Command::Init));
    }

    #[test]
    fn parse_forge_minimal() {
        let cli = Cli::try_parse_from(["promptlib", "forge", "raw.txt"]).unwrap();
        if let Command::Forge(args) = cli.command {
            assert_eq!(args.source, "raw.txt");
            assert!(args.title.is_none());
            assert!(args.defaults.is_empty());
            assert!(args.remove_vars.is_empty());
            assert_eq!(args.add_vars, 0);
            assert!(!args.yes);
            assert!(!args.dry_run);
        } else {
            panic!("Expected Forge command");
        }
    }

    #[test]
    fn parse_forge_full() {
        let cli = Cli::try_parse_from([
            "promptlib",
            "forge",
            "-",
            "--title",
            "Email",
            "--tags",
            "a, b",
            "--default",
            "tone=warm",
            "--default",
            "expr=a=b",
            "--rename",
            "RECIPIENT=recipient",
            "--remove-var",
            "x",
            "--remove-var",
            "y",
            "--add-vars",
            "2",
            "--yes",
            "--dry-run",
        ])
        .unwrap();

        if let Command::Forge(args) = cli.command {
            assert_eq!(args.source, "-");
            assert_eq!(args.title.as_deref(), Some("Email"));
            assert_eq!(args.tags.as_deref(), Some("a, b"));
            assert_eq!(
                args.defaults,
                vec![
                    ("tone".to_string(), "warm".to_string()),
                    ("expr".to_string(), "a=b".to_string())
                ]
            );
            assert_eq!(
                args.renames,
                vec![("RECIPIENT".to_string(), "recipient".to_string())]
            );
            assert_eq!(args.remove_vars, vec!["x", "y"]);
            assert_eq!(args.add_vars, 2);
            assert!(args.yes);
            assert!(args.dry_run);
        } else {
            panic!("Expected Forge command");
        }
    }

    #[test]
    fn parse_fill_with_values() {
        let cli = Cli::try_parse_from([
            "promptlib", "fill", "prompt-1", "--set", "topic=cats", "--copy",
        ])
        .unwrap();

        if let Command::Fill(args) = cli.command {
            assert_eq!(args.id, "prompt-1");
            assert_eq!(args.values, vec![("topic".to_string(), "cats".to_string())]);
            assert!(args.copy);
        } else {
            panic!("Expected Fill command");
        }
    }

    #[test]
    fn parse_rejects_bad_assignment() {
        let result = Cli::try_parse_from(["promptlib", "fill", "p", "--set", "novalue"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from(["promptlib", "fill", "p", "--set", "=x"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_list_filters() {
        let cli =
            Cli::try_parse_from(["promptlib", "list", "--category", "Coding", "--tag", "py*"])
                .unwrap();
        if let Command::List(args) = cli.command {
            assert_eq!(args.category.as_deref(), Some("Coding"));
            assert_eq!(args.tag.as_deref(), Some("py*"));
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn parse_import_requires_file() {
        assert!(Cli::try_parse_from(["promptlib", "import"]).is_err());

        let cli = Cli::try_parse_from(["promptlib", "import", "backup.json", "--yes"]).unwrap();
        if let Command::Import(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("backup.json"));
            assert!(args.yes);
        } else {
            panic!("Expected Import command");
        }
    }

    #[test]
    fn parse_export_output() {
        let cli = Cli::try_parse_from(["promptlib", "export", "-o", "out.json"]).unwrap();
        if let Command::Export(args) = cli.command {
            assert_eq!(args.output, Some(PathBuf::from("out.json")));
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn parse_edit() {
        let cli = Cli::try_parse_from([
            "promptlib",
            "edit",
            "prompt-1",
            "--title",
            "New",
            "--default",
            "topic=dogs",
        ])
        .unwrap();
        if let Command::Edit(args) = cli.command {
            assert_eq!(args.id, "prompt-1");
            assert_eq!(args.title.as_deref(), Some("New"));
            assert_eq!(args.defaults.len(), 1);
            assert!(!args.yes);
        } else {
            panic!("Expected Edit command");
        }
    }
}
