//! Snippet variable inspector.
//!
//! Resolves variable names against a context assembled from the command
//! line, useful for checking what a snippet would receive:
//!
//! ```text
//! snippet-vars TM_FILENAME CURRENT_DAY_NAME --file src/lib.rs
//! snippet-vars LINE_COMMENT --file a.py --language python
//! snippet-vars WORKSPACE_NAME --workspace ~/proj
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use snippet_vars::{
    ClipboardResolver, CommentResolver, CompositeResolver, LanguageRegistry, ModelResolver,
    PathLabels, PlainLabels, RandomResolver, StringBuffer, TimeResolver, Variable,
    VariableResolver, WorkspaceIdentity, WorkspaceResolver,
};

#[derive(Parser)]
#[command(name = "snippet-vars")]
#[command(about = "Resolve snippet variables against a hand-assembled context")]
struct Cli {
    /// Variable names to resolve (e.g. TM_FILENAME CURRENT_YEAR)
    #[arg(required = true)]
    variables: Vec<String>,

    /// File identity for the TM_FILENAME family
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Language identifier for the comment variables
    #[arg(short, long)]
    language: Option<String>,

    /// Language comment-token table (TOML; built-in table if omitted)
    #[arg(long)]
    languages: Option<PathBuf>,

    /// Single-folder workspace path
    #[arg(short, long, conflicts_with = "workspace_config")]
    workspace: Option<PathBuf>,

    /// Multi-root workspace configuration file
    #[arg(long)]
    workspace_config: Option<PathBuf>,

    /// Clipboard text for the CLIPBOARD variable
    #[arg(short, long)]
    clipboard: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let registry = match &cli.languages {
        Some(path) => match LanguageRegistry::from_file(path) {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("Error loading language table '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => LanguageRegistry::default(),
    };

    let mut buffer = StringBuffer::new("");
    if let Some(file) = &cli.file {
        buffer = buffer.with_path(file.clone());
    }
    if let Some(language) = &cli.language {
        buffer = buffer.with_language(language.clone());
    }

    let identity = match (&cli.workspace, &cli.workspace_config) {
        (Some(path), _) => Some(WorkspaceIdentity::single_folder(path.clone())),
        (None, Some(config)) => Some(WorkspaceIdentity::multi_root(config.clone())),
        (None, None) => None,
    };

    let labels = PlainLabels;
    let clipboard_text = cli.clipboard.clone();

    let composite = CompositeResolver::new(vec![
        Box::new(ModelResolver::new(&buffer, Some(&labels as &dyn PathLabels))),
        Box::new(ClipboardResolver::new(
            move || clipboard_text.clone(),
            0,
            1,
            false,
        )),
        Box::new(CommentResolver::new(&buffer, &registry)),
        Box::new(TimeResolver::new()),
        Box::new(WorkspaceResolver::new(identity)),
        Box::new(RandomResolver::new()),
    ]);

    let mut all_resolved = true;
    for name in &cli.variables {
        match composite.resolve(&Variable::new(name)) {
            Some(value) => println!("{name} = {value}"),
            None => {
                println!("{name} (unresolved)");
                all_resolved = false;
            }
        }
    }

    if all_resolved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
