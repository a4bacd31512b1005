use anyhow::{Context, Result};
use content_inspector::ContentType;
use regex::bytes::{Captures, Regex};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::case_model::Variants;

/// Replaces every placeholder spelling with the same-style spelling of the new name.
///
/// All five placeholders are matched by one alternation in a single
/// left-to-right pass. Inserted text is never searched again, so a
/// replacement that happens to spell another placeholder stays as written.
///
/// Matching works on raw bytes. Placeholder spellings are ASCII, so text in
/// any ASCII-compatible encoding (UTF-8, Latin-1, ...) is rewritten in place
/// and every other byte is kept as it was.
#[derive(Debug, Clone)]
pub struct Substitution {
    regex: Regex,
    replacements: HashMap<Vec<u8>, Vec<u8>>,
}

impl Substitution {
    pub fn new(placeholder: &Variants, replacement: &Variants) -> Result<Self, regex::Error> {
        let mut replacements = HashMap::new();
        for ((_, from), (_, to)) in placeholder.iter().zip(replacement.iter()) {
            // First style wins if two styles spell the placeholder the same way
            replacements
                .entry(from.as_bytes().to_vec())
                .or_insert_with(|| to.as_bytes().to_vec());
        }

        let mut escaped: Vec<String> = placeholder
            .iter()
            .map(|(_, from)| regex::escape(from))
            .collect();
        escaped.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        escaped.dedup();
        let regex = Regex::new(&format!("(?:{})", escaped.join("|")))?;

        Ok(Self {
            regex,
            replacements,
        })
    }

    /// Returns the rewritten bytes and the number of replacements made.
    pub fn replace_all(&self, content: &[u8]) -> (Vec<u8>, usize) {
        let mut count = 0;
        let replaced = self.regex.replace_all(content, |caps: &Captures<'_>| {
            count += 1;
            self.replacements[&caps[0]].clone()
        });
        (replaced.into_owned(), count)
    }

    pub fn count(&self, content: &[u8]) -> usize {
        self.regex.find_iter(content).count()
    }
}

fn is_binary(content: &[u8]) -> bool {
    matches!(content_inspector::inspect(content), ContentType::BINARY)
}

/// Read a file's bytes, or `None` if it looks binary.
pub fn read_text(path: &Path) -> Result<Option<Vec<u8>>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    if is_binary(&bytes) {
        return Ok(None);
    }
    Ok(Some(bytes))
}

/// Count placeholder occurrences in a file without changing it.
pub fn count_in_file(path: &Path, substitution: &Substitution) -> Result<usize> {
    Ok(read_text(path)?.map_or(0, |content| substitution.count(&content)))
}

/// Rewrite placeholders in one file, returning how many were replaced.
///
/// Binary files are left alone. The file is only written when something
/// changed, through a temp file in the same directory that is then persisted
/// over the original.
pub fn rewrite_file(path: &Path, substitution: &Substitution) -> Result<usize> {
    let Some(content) = read_text(path)? else {
        tracing::debug!("skipping binary file {}", path.display());
        return Ok(0);
    };

    let (replaced, count) = substitution.replace_all(&content);
    if count == 0 {
        return Ok(0);
    }

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(path)?.permissions();
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    temp.write_all(&replaced)?;
    temp.as_file().set_permissions(permissions)?;
    temp.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("rewrote {} ({} replacements)", path.display(), count);
    Ok(count)
}
