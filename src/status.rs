// Dataset status display: file size, slices, clique and entity counts.

use anyhow::Result;
use std::path::Path;

use crate::dataset::Dataset;

/// Display dataset status to the terminal.
pub fn show(dataset_path: &Path) -> Result<()> {
    if !dataset_path.exists() {
        println!("Dataset: not found at {}", dataset_path.display());
        println!("\nSet CLIQUESCOPE_DATASET or pass --dataset to point at a clique file.");
        return Ok(());
    }

    let file_size = std::fs::metadata(dataset_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Dataset: {} ({})", dataset_path.display(), file_size);

    let dataset = Dataset::load(dataset_path)?;
    let slices = dataset.time_slices();

    match (slices.first(), slices.last()) {
        (Some(first), Some(last)) => {
            println!("Time slices: {} (from {} to {})", slices.len(), first, last);
        }
        _ => println!("Time slices: none"),
    }
    println!("Cliques: {}", dataset.clique_count());
    println!("Entities: {}", dataset.entity_count());

    if let Some(largest) = slices.iter().max_by_key(|t| dataset.slice(**t).len()) {
        println!(
            "Busiest slice: {} ({} cliques)",
            largest,
            dataset.slice(*largest).len()
        );
    }

    Ok(())
}

/// Human-readable dataset size, scaled by powers of 1024.
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit + 1 < UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_byte_sizes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.0 GB");
    }
}
