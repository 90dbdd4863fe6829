use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Start tags, or comments which are matched only so their contents are skipped.
static START_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<([A-Za-z][A-Za-z0-9-]*)(?:[\s/>]|$)").expect("Invalid regex")
});

/// Byte offsets of every start tag in `source`, keyed by lowercase tag name.
pub(super) fn tag_offsets(source: &str) -> HashMap<String, Vec<usize>> {
    let mut offsets: HashMap<String, Vec<usize>> = HashMap::new();
    for caps in START_TAG.captures_iter(source) {
        if let Some(name) = caps.get(1) {
            offsets
                .entry(name.as_str().to_ascii_lowercase())
                .or_default()
                .push(name.start() - 1);
        }
    }
    offsets
}

/// Maps byte offsets to 1-based line numbers.
pub(super) struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub(super) fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    pub(super) fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(next) => next,
        }
    }
}
