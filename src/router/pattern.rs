use regex::{Regex, RegexBuilder};

use super::{Error, Result};

/// A route path template compiled into an anchored, case insensitive regex.
///
/// The template is anchored at both ends and tolerates one trailing slash,
/// so `videos/comedy` and `videos/comedy/` test equal. Surrounding slashes
/// in the template itself are ignored.
#[derive(Debug, Clone)]
pub struct Pattern {
    template: Box<str>,
    regex: Regex,
}

impl Pattern {
    pub(crate) fn compile(route: &str, template: &str) -> Result<Self> {
        let anchored = format!("^{}/?$", template.trim_matches('/'));
        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::pattern(route, source))?;
        Ok(Self {
            template: template.into(),
            regex,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Number of capturing groups in the template.
    pub fn capture_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Test the pattern against a normalized path.
    ///
    /// Returns the captured substrings in group order on a match. Groups
    /// that did not participate in the match are `None`.
    pub(crate) fn captures(&self, path: &str) -> Option<Vec<Option<String>>> {
        self.regex.captures(path).map(|captures| {
            captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect()
        })
    }
}
