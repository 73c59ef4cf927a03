//! Language detection from classified files

use crate::core::constants::languages;
use crate::project::types::{FileCategory, FileEntry, LanguageStat};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Categories whose files count towards a language. Entry points and tests
/// are code too; a project made of `main.py` and its tests is a Python
/// project.
const CODE_CATEGORIES: &[FileCategory] = &[
    FileCategory::Source,
    FileCategory::EntryPoint,
    FileCategory::Test,
];

/// Language of a file, if its extension is in the language table
pub fn language_for(entry: &FileEntry) -> Option<&'static str> {
    let extension = entry.extension()?;
    languages::for_extension(&extension).map(|spec| spec.name)
}

/// Accumulates per-language totals during the walk
#[derive(Debug, Default)]
pub struct LanguageDetector {
    stats: BTreeMap<&'static str, LanguageStat>,
}

/// Ranked language totals and the chosen primary language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSummary {
    pub primary: Option<String>,
    pub languages: Vec<LanguageStat>,
}

impl LanguageDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: &FileEntry) {
        if !CODE_CATEGORIES.contains(&entry.category) {
            return;
        }

        if let Some(language) = language_for(entry) {
            let stat = self.stats.entry(language).or_insert_with(|| LanguageStat {
                language: language.to_string(),
                files: 0,
                bytes: 0,
            });
            stat.files += 1;
            stat.bytes += entry.size;
        }
    }

    pub fn finish(self) -> LanguageSummary {
        let mut languages: Vec<LanguageStat> = self.stats.into_values().collect();
        languages.sort_by(rank);

        LanguageSummary {
            primary: languages.first().map(|stat| stat.language.clone()),
            languages,
        }
    }
}

/// Most files first, then most bytes, then the smallest name
fn rank(a: &LanguageStat, b: &LanguageStat) -> Ordering {
    b.files
        .cmp(&a.files)
        .then_with(|| b.bytes.cmp(&a.bytes))
        .then_with(|| a.language.cmp(&b.language))
}

/// Pick the primary language from unranked totals
pub fn select_primary(stats: &[LanguageStat]) -> Option<&LanguageStat> {
    stats.iter().min_by(|a, b| rank(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn file(path: &str, size: u64, category: FileCategory) -> FileEntry {
        FileEntry {
            relative_path: path.to_string(),
            absolute_path: PathBuf::from(path),
            size,
            category,
        }
    }

    fn stat(language: &str, files: usize, bytes: u64) -> LanguageStat {
        LanguageStat {
            language: language.to_string(),
            files,
            bytes,
        }
    }

    #[test]
    fn test_every_entry_point_counts_towards_its_language() {
        for spec in languages::TABLE {
            for entry_point in spec.entry_points {
                let entry = file(entry_point, 1, FileCategory::EntryPoint);
                assert_eq!(language_for(&entry), Some(spec.name), "{entry_point}");
            }
        }
    }

    #[test]
    fn test_rack_config_is_ruby() {
        let mut detector = LanguageDetector::new();
        detector.record(&file("config.ru", 40, FileCategory::EntryPoint));
        detector.record(&file("app/models/user.rb", 10, FileCategory::Source));

        let summary = detector.finish();
        assert_eq!(summary.languages, vec![stat("ruby", 2, 50)]);
    }

    #[test]
    fn test_counts_code_categories_only() {
        let mut detector = LanguageDetector::new();
        detector.record(&file("main.py", 10, FileCategory::EntryPoint));
        detector.record(&file("tests/test_a.py", 20, FileCategory::Test));
        detector.record(&file("util.py", 30, FileCategory::Source));
        detector.record(&file("README.md", 100, FileCategory::Documentation));

        let summary = detector.finish();
        assert_eq!(summary.primary.as_deref(), Some("python"));
        assert_eq!(summary.languages, vec![stat("python", 3, 60)]);
    }

    #[test]
    fn test_tie_on_files_broken_by_bytes() {
        let mut detector = LanguageDetector::new();
        detector.record(&file("a.js", 10, FileCategory::Source));
        detector.record(&file("b.py", 50, FileCategory::Source));

        let summary = detector.finish();
        assert_eq!(summary.primary.as_deref(), Some("python"));
        assert_eq!(summary.languages[1].language, "javascript");
    }

    #[test]
    fn test_full_tie_broken_by_name() {
        let stats = vec![stat("ruby", 2, 100), stat("go", 2, 100)];
        assert_eq!(select_primary(&stats).unwrap().language, "go");
    }

    #[test]
    fn test_file_count_wins_over_bytes() {
        let stats = vec![stat("java", 1, 10_000), stat("kotlin", 2, 10)];
        assert_eq!(select_primary(&stats).unwrap().language, "kotlin");
    }

    #[test]
    fn test_no_source_files_means_no_primary() {
        let summary = LanguageDetector::new().finish();
        assert!(summary.primary.is_none());
        assert!(summary.languages.is_empty());
    }
}
