//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use driveview_entity::FileSystemItem;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One folder or file, flattened for table display.
#[derive(Debug, Serialize, Tabled)]
pub struct ItemRow {
    /// `folder` or `file`
    pub kind: String,
    /// Name
    pub name: String,
    /// Size in bytes (`-` for folders)
    pub size: String,
    /// Last modification time
    pub modified: String,
    /// Remote identifier
    pub id: String,
}

impl From<&FileSystemItem> for ItemRow {
    fn from(item: &FileSystemItem) -> Self {
        Self {
            kind: if item.is_folder() { "folder" } else { "file" }.to_string(),
            name: item.name().to_string(),
            size: if item.is_folder() {
                "-".to_string()
            } else {
                item.size().to_string()
            },
            modified: item
                .updated_at()
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            id: item.id().to_string(),
        }
    }
}

/// Convert items into table rows.
pub fn item_rows(items: &[FileSystemItem]) -> Vec<ItemRow> {
    items.iter().map(ItemRow::from).collect()
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(&items),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    eprintln!("⚠ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use driveview_core::types::FolderId;
    use driveview_entity::{FileNode, FolderNode};

    #[test]
    fn test_rows_for_mixed_items() {
        let items: Vec<FileSystemItem> = vec![
            FolderNode::new("1", "docs", None).into(),
            FileNode::new("2", "a.txt", 42, Some(FolderId::from("1"))).into(),
        ];
        let rows = item_rows(&items);
        assert_eq!(rows[0].kind, "folder");
        assert_eq!(rows[0].size, "-");
        assert_eq!(rows[1].kind, "file");
        assert_eq!(rows[1].size, "42");
        assert_eq!(rows[1].modified, "-");
    }
}
