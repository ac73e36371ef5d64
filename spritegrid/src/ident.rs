use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path};

/// Turns input paths into mapping identifiers.
///
/// The first `skip` separator-delimited segments of the path are dropped and
/// `prefix` is prepended. Paths with `skip` segments or fewer are kept whole,
/// so an identifier is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdNaming {
    prefix: String,
    skip: usize,
}

impl IdNaming {
    pub fn new(prefix: impl Into<String>, skip: usize) -> Self {
        Self {
            prefix: prefix.into(),
            skip,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn identify(&self, path: &Path) -> String {
        let raw = path.to_string_lossy();
        let parts: Vec<&str> = raw.split(MAIN_SEPARATOR).collect();
        let tail = if self.skip == 0 || parts.len() <= self.skip {
            raw.to_string()
        } else {
            parts[self.skip..].join(MAIN_SEPARATOR_STR)
        };
        format!("{}{}", self.prefix, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path(parts: &[&str]) -> PathBuf {
        parts.iter().collect()
    }

    #[test]
    fn default_keeps_path_verbatim() {
        let p = path(&["assets", "icons", "save.png"]);
        assert_eq!(IdNaming::default().identify(&p), p.to_string_lossy());
    }

    #[test]
    fn prefix_is_prepended() {
        let naming = IdNaming::new("/static/", 0);
        assert_eq!(naming.identify(Path::new("a.png")), "/static/a.png");
    }

    #[test]
    fn leading_segments_are_skipped() {
        let naming = IdNaming::new("img:", 2);
        let p = path(&["assets", "icons", "ui", "save.png"]);
        let expected = format!("img:ui{MAIN_SEPARATOR}save.png");
        assert_eq!(naming.identify(&p), expected);
    }

    #[test]
    fn skipping_every_segment_keeps_the_whole_path() {
        let naming = IdNaming::new("", 3);
        let p = path(&["assets", "icons", "save.png"]);
        assert_eq!(naming.identify(&p), p.to_string_lossy());
    }
}
