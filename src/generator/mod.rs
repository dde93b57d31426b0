//! Output generation for transaction graphs

mod text;

use std::path::Path;
use std::fs::File;
use std::io::Write;
use anyhow::{Context, Result};
use log::{info, error};
use crate::models::TransactionsGraph;

/// Save the graph as JSON to a file
pub fn save_graph(graph: &TransactionsGraph<'_>, path: &Path) -> Result<()> {
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    
    info!("Saving graph to absolute path: {}", absolute_path.display());
    
    if let Some(parent) = absolute_path.parent() {
        if !parent.exists() {
            info!("Creating directory: {}", parent.display());
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    
    let json = to_json(graph)?;
    
    let mut file = match File::create(&absolute_path) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to create file: {} - Error: {}", absolute_path.display(), e);
            return Err(anyhow::anyhow!("Failed to create file: {} - Error: {}", absolute_path.display(), e));
        }
    };
    
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write to file: {}", absolute_path.display()))?;
    
    info!("Wrote {} bytes to {}", json.len(), absolute_path.display());
    
    Ok(())
}

/// Serialize the graph as pretty-printed JSON
pub fn to_json(graph: &TransactionsGraph<'_>) -> Result<String> {
    serde_json::to_string_pretty(graph)
        .with_context(|| "Failed to serialize graph to JSON")
}

/// Render the graph as plain text, one line per column and per edge
pub fn to_text(graph: &TransactionsGraph<'_>) -> String {
    text::render(graph)
}
