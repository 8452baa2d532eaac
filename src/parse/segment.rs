//! Marker-based segmentation of raw status output.
//!
//! `wg show` output is a flat sequence of lines; interface sections start at
//! lines containing `interface:` and peer sections at lines containing
//! `peer:`. Splitting is the same operation at both levels, so it is a
//! single function applied twice by the assembler.

/// Split `lines` into blocks, one per line containing `marker`.
///
/// Each block spans from its marker line (inclusive) up to the line before
/// the next marker occurrence, or the end of input for the last block.
/// Lines before the first marker belong to no block; if the marker never
/// occurs the result is empty. Two markers on adjacent lines yield a
/// one-line block, which is valid.
pub fn split_by_marker<'a>(lines: &[&'a str], marker: &str) -> Vec<Vec<&'a str>> {
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(marker))
        .map(|(index, _)| index)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(lines.len());
            lines[start..end].to_vec()
        })
        .collect()
}
