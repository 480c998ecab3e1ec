//! Print the template tree of one entity.
//!
//! ```text
//! template_dump --config data/editor.ron --seed data/world.sql --entry 1000 --filter model
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use tabula_core::{SpellProvider, Value};
use tabula_db::{QueryEngine, Session, Template};
use tabula_script::{EditorConfig, EditorDefs, Loader};
use tabula_tree::{ModelIndex, TemplateTree, TreeModel};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "template_dump", about = "Print a template tree from a world database")]
struct Args {
    /// Editor configuration (RON)
    #[arg(long)]
    config: PathBuf,

    /// Key of the root row
    #[arg(long)]
    entry: i64,

    /// Only show fields whose name or value contains this text
    #[arg(long, default_value = "")]
    filter: String,

    /// Catalog to build
    #[arg(long, default_value = "creature_template")]
    catalog: String,

    /// SQL script run against the session before querying
    #[arg(long)]
    seed: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();

    let config = EditorConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let defs = Loader::from_config(&config)?;
    let Some(catalog) = defs.catalog(&args.catalog) else {
        bail!("no catalog named {:?}", args.catalog);
    };

    let session = Session::open(&config.session)?;
    if let Some(seed) = &args.seed {
        let sql = std::fs::read_to_string(seed)
            .with_context(|| format!("reading {}", seed.display()))?;
        session.execute_batch(&sql)?;
    }
    let engine = QueryEngine::new(&session);
    let template = Template::build(&engine, catalog, args.entry)
        .with_context(|| format!("building {} {}", catalog.name, args.entry))?;

    let mut tree = TemplateTree::from_template(template);
    tree.set_filter_text(&args.filter);
    info!(
        queries = session.queries_issued(),
        visible = tree.visible_leaf_count(),
        "tree ready"
    );

    print_rows(&tree, &defs, None, 0);
    Ok(())
}

fn print_rows(tree: &TemplateTree, defs: &EditorDefs, parent: Option<ModelIndex>, depth: usize) {
    for row in 0..tree.row_count(parent) {
        if tree.is_row_hidden(row, parent) {
            continue;
        }
        let (Some(label), Some(value)) = (tree.index(row, 0, parent), tree.index(row, 1, parent))
        else {
            continue;
        };
        let name = tree.data(label).to_text();
        let value = tree.data(value);
        let indent = "  ".repeat(depth);
        match annotation(defs, &name, &value) {
            Some(note) => println!("{indent}{name:<24} {value}  ({note})"),
            None => println!("{indent}{name:<24} {value}"),
        }
        print_rows(tree, defs, Some(label), depth + 1);
    }
}

/// Human-readable name for id-valued fields
fn annotation(defs: &EditorDefs, field: &str, value: &Value) -> Option<String> {
    let id = value.as_int()?;
    if field == "event_type" {
        return defs.event_ai.event_name(id).map(str::to_string);
    }
    if field.starts_with("action") && field.ends_with("_type") {
        return defs.event_ai.action_name(id).map(str::to_string);
    }
    if field.starts_with("spell") || field == "trainer_spell" {
        let id = u32::try_from(id).ok()?;
        return defs.spells.get_by_id(id).map(|s| s.name.clone());
    }
    None
}
