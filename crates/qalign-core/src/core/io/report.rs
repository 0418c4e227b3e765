use std::io;
use std::path::Path;

/// Renders the persisted result artifact: four lines of text holding the first
/// gapped sequence, the match ribbon, the second gapped sequence, and the
/// per-residue similarity scores formatted to two decimal places,
/// space-separated.
pub fn render_report(aligned_a: &str, ribbon: &str, aligned_b: &str, scores: &[f64]) -> String {
    let score_line = scores
        .iter()
        .map(|score| format!("{score:.2}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{aligned_a}\n{ribbon}\n{aligned_b}\n{score_line}")
}

/// Writes the result artifact to `path`, replacing any existing file.
pub fn write_report(
    path: &Path,
    aligned_a: &str,
    ribbon: &str,
    aligned_b: &str,
    scores: &[f64],
) -> io::Result<()> {
    std::fs::write(path, render_report(aligned_a, ribbon, aligned_b, scores))
}
