//! Execution of parsed CLI commands.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info};

use stepfs_core::fs::{path, validate};
use stepfs_core::utils::ExtensionSearchQuery;
use stepfs_core::{CombinedPath, Root, Step, TreeNode, TreeRegistry, config};

use crate::cli::Command;

/// Run a command and return its JSON result.
pub fn run(command: Command) -> Result<Value> {
    match command {
        Command::Basename { path } => Ok(json!(path::basename(&path)?)),
        Command::Parent { path } => match path.parse::<CombinedPath>() {
            Ok(combined) => Ok(json!(combined.parent().to_string())),
            Err(_) => Ok(json!(path::parent_path(&path))),
        },
        Command::Relpath { file, folder } => Ok(json!(path::relative_path(&file, &folder))),
        Command::Move { source, target } => {
            let target = path::derive_move_target(&source, &target)?;
            if target.is_noop() {
                info!(source = %target.source, "drop target is the source or inside it");
            }
            Ok(serde_json::to_value(target)?)
        }
        Command::Describe { path } => Ok(json!(path::describe_target(&path)?)),
        Command::Filter { paths } => Ok(json!(path::filter_redundant_child_paths(&paths))),
        Command::TargetFolder { paths } => Ok(json!(path::target_folder(
            &paths,
            &config::configured_roots()
        )?)),
        Command::Search { tree, path } => {
            let path: CombinedPath = path.parse()?;
            let registry = load_registry(&tree, path.root())?;
            let found = registry.search(&path);
            Ok(json!({
                "parent": found.parent.map(|n| n.path.as_str()),
                "node": found.node,
            }))
        }
        Command::Childless { tree, path } => {
            let path: CombinedPath = path.parse()?;
            let registry = load_registry(&tree, path.root())?;
            Ok(json!(registry.is_childless(&path)))
        }
        Command::Merge {
            tree: tree_file,
            subtree,
            root,
        } => {
            let root: Root = root.parse()?;
            let mut registry = load_registry(&tree_file, root)?;
            let sub_tree: TreeNode = read_json(&subtree)?;
            if !registry.merge(root, sub_tree) {
                info!(%root, "no node to merge into; tree unchanged");
            }
            Ok(serde_json::to_value(registry.tree(root))?)
        }
        Command::Validate { step, steps, paths } => {
            let steps: HashMap<String, Step> = read_json(&steps)?;
            Ok(serde_json::to_value(validate::validate_files(
                &step, &steps, &paths,
            ))?)
        }
        Command::Query {
            project,
            root,
            path,
            extensions,
        } => {
            let query = ExtensionSearchQuery::new(project, root.parse()?, path, &extensions)?;
            Ok(json!(query.to_url()))
        }
    }
}

/// Load a root's tree from a browse JSON file into a fresh registry.
fn load_registry(file: &Path, root: Root) -> Result<TreeRegistry> {
    let tree: TreeNode = read_json(file)?;
    let mut registry = TreeRegistry::from_config();
    if !registry.merge(root, tree) {
        anyhow::bail!(
            "{} does not hold a root tree (expected path \"/\")",
            file.display()
        );
    }
    Ok(registry)
}

fn read_json<T: DeserializeOwned>(file: &Path) -> Result<T> {
    debug!(file = %file.display(), "reading JSON input");
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", file.display()))
}
