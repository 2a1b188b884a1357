//! Implementation of the `promptlib fill` command.

use super::open_library;
use crate::cli::FillArgs;
use crate::clipboard::copy_to_clipboard;
use crate::error::Result;
use crate::events::{Event, EventAction, record_event};
use crate::store::RecordStore;
use crate::view::TemplateView;
use serde_json::json;

/// Execute the `promptlib fill` command.
///
/// The assembled text always goes to stdout before any copy is attempted,
/// so it stays visible when the clipboard command fails.
pub fn cmd_fill(args: FillArgs) -> Result<()> {
    let library = open_library()?;
    let record = library.store.get(&args.id)?;

    let mut view = TemplateView::new(record);
    for (name, value) in &args.values {
        view.set(name, value.clone())?;
    }

    let text = view.assembled();
    println!("{}", text);

    if args.copy {
        copy_to_clipboard(&text, &library.config.clipboard_command)?;

        let event = Event::new(EventAction::Copy)
            .with_template(&view.record().id)
            .with_details(json!({
                "overrides": args.values.iter().map(|(name, _)| name).collect::<Vec<_>>(),
                "chars": text.chars().count(),
            }));
        record_event(&library.ctx, &library.config, &event)?;

        eprintln!("Copied to clipboard.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_helpers::TestLibrary;
    use crate::error::PromptError;
    use crate::test_support::sample_record;
    use serial_test::serial;

    fn fill_args(id: &str, values: &[(&str, &str)], copy: bool) -> FillArgs {
        FillArgs {
            id: id.to_string(),
            values: values
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
            copy,
        }
    }

    #[test]
    #[serial]
    fn test_fill_unknown_variable_fails() {
        let lib = TestLibrary::new();
        lib.insert(sample_record("p-1", "T"));

        let err = cmd_fill(fill_args("p-1", &[("nope", "x")], false)).unwrap_err();
        assert!(matches!(err, PromptError::UserError(_)));
    }

    #[test]
    #[serial]
    fn test_fill_missing_template() {
        let _lib = TestLibrary::new();
        let err = cmd_fill(fill_args("ghost", &[], false)).unwrap_err();
        assert!(matches!(err, PromptError::NotFound(_)));
    }

    #[test]
    #[serial]
    fn test_fill_copy_without_command_fails() {
        let lib = TestLibrary::new();
        lib.insert(sample_record("p-1", "T"));

        let err = cmd_fill(fill_args("p-1", &[("topic", "dogs")], true)).unwrap_err();
        assert!(matches!(err, PromptError::Clipboard(_)));
        assert!(lib.event_actions().is_empty());
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_fill_copy_pipes_assembled_text() {
        let lib = TestLibrary::new();
        lib.insert(sample_record("p-1", "T"));
        let out = lib.temp.path().join("clip.txt");
        let config = format!(
            "clipboard_command: \"sh -c 'cat > {}'\"\n",
            out.display()
        );
        std::fs::write(lib.ctx.config_path(), config).unwrap();

        cmd_fill(fill_args("p-1", &[("topic", "dogs")], true)).unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "Write about dogs.");
        assert_eq!(lib.event_actions(), vec!["copy"]);
    }
}
