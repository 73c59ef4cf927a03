//! Rule-table file classification
//!
//! Categories are assigned by walking [`RULES`] in order and taking the first
//! rule that matches. The rules themselves only consult the literal tables in
//! [`crate::core::constants`], so classification is total and deterministic.

use crate::config::AnalysisConfig;
use crate::core::constants::{configuration, documentation, languages, manifest_files, test_patterns};
use crate::project::types::FileCategory;
use std::collections::BTreeSet;
use std::path::Path;

/// A single classification test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// File name is a known (or configured) dependency manifest
    ManifestName,
    /// A directory segment or the file name follows a test convention
    TestConvention,
    /// File name is a language's conventional starting module
    EntryPointName,
    /// Documentation extension or well-known document basename
    DocumentationFile,
    /// Configuration extension or basename
    ConfigurationFile,
    /// Extension belongs to a supported language
    SourceExtension,
}

/// Precedence order, first match wins. Unmatched files are `Other`.
pub const RULES: &[(Rule, FileCategory)] = &[
    (Rule::ManifestName, FileCategory::Manifest),
    (Rule::TestConvention, FileCategory::Test),
    (Rule::EntryPointName, FileCategory::EntryPoint),
    (Rule::DocumentationFile, FileCategory::Documentation),
    (Rule::ConfigurationFile, FileCategory::Configuration),
    (Rule::SourceExtension, FileCategory::Source),
];

/// Facts about a path that the rules look at
struct PathFacts<'p> {
    file_name: &'p str,
    stem: &'p str,
    extension: Option<String>,
    directories: Vec<&'p str>,
}

impl<'p> PathFacts<'p> {
    fn new(relative_path: &'p str) -> Self {
        let mut segments: Vec<&str> = relative_path.split('/').filter(|s| !s.is_empty()).collect();
        let file_name = segments.pop().unwrap_or("");
        let path = Path::new(file_name);

        Self {
            file_name,
            stem: path.file_stem().and_then(|s| s.to_str()).unwrap_or(file_name),
            extension: path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase()),
            directories: segments,
        }
    }

    fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// Assigns a [`FileCategory`] to relative paths
#[derive(Debug, Clone, Default)]
pub struct FileClassifier {
    extra_manifest_names: BTreeSet<String>,
}

impl FileClassifier {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            extra_manifest_names: config.extra_manifest_names.clone(),
        }
    }

    pub fn classify(&self, relative_path: &str) -> FileCategory {
        let facts = PathFacts::new(relative_path);
        RULES
            .iter()
            .find(|(rule, _)| self.matches(*rule, &facts))
            .map(|(_, category)| *category)
            .unwrap_or(FileCategory::Other)
    }

    /// The first rule that matches, for diagnostics and tests
    pub fn matching_rule(&self, relative_path: &str) -> Option<Rule> {
        let facts = PathFacts::new(relative_path);
        RULES
            .iter()
            .map(|(rule, _)| *rule)
            .find(|rule| self.matches(*rule, &facts))
    }

    pub fn is_manifest_name(&self, file_name: &str) -> bool {
        manifest_files::ALL.contains(&file_name) || self.extra_manifest_names.contains(file_name)
    }

    fn matches(&self, rule: Rule, facts: &PathFacts<'_>) -> bool {
        match rule {
            Rule::ManifestName => self.is_manifest_name(facts.file_name),
            Rule::TestConvention => is_test_path(facts),
            Rule::EntryPointName => languages::for_entry_point(facts.file_name).is_some(),
            Rule::DocumentationFile => {
                facts.extension().is_some_and(is_documentation_extension) || is_document_basename(facts)
            }
            Rule::ConfigurationFile => {
                configuration::BASENAMES.contains(&facts.file_name)
                    || facts
                        .extension()
                        .is_some_and(|ext| configuration::EXTENSIONS.contains(&ext))
            }
            Rule::SourceExtension => facts
                .extension()
                .is_some_and(|ext| languages::for_extension(ext).is_some()),
        }
    }
}

fn is_documentation_extension(extension: &str) -> bool {
    documentation::EXTENSIONS.contains(&extension)
}

/// `LICENSE`, `README.md`, `NOTICE.apache`; but `history.py` is code and
/// `security.yaml` is configuration.
fn is_document_basename(facts: &PathFacts<'_>) -> bool {
    let claimed_elsewhere = facts.extension().is_some_and(|ext| {
        languages::for_extension(ext).is_some() || configuration::EXTENSIONS.contains(&ext)
    });
    !claimed_elsewhere && documentation::BASENAMES.contains(&facts.stem.to_ascii_uppercase().as_str())
}

fn is_test_path(facts: &PathFacts<'_>) -> bool {
    let in_test_dir = facts
        .directories
        .iter()
        .any(|dir| test_patterns::DIRECTORIES.contains(&dir.to_ascii_lowercase().as_str()));
    if in_test_dir {
        return true;
    }

    // Documents keep their category: `test_plan.md` is not a test
    if facts.extension().is_some_and(is_documentation_extension) {
        return false;
    }

    let stem = facts.stem.to_ascii_lowercase();
    test_patterns::EXACT_STEMS.contains(&stem.as_str())
        || test_patterns::STEM_PREFIXES.iter().any(|p| stem.starts_with(p))
        || test_patterns::STEM_SUFFIXES.iter().any(|s| stem.ends_with(s))
        || test_patterns::CAMEL_SUFFIXES
            .iter()
            .any(|s| facts.stem.len() > s.len() && facts.stem.ends_with(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("requirements.txt" => FileCategory::Manifest ; "requirements")]
    #[test_case("web/package.json" => FileCategory::Manifest ; "nested package json")]
    #[test_case("pom.xml" => FileCategory::Manifest ; "maven pom")]
    #[test_case("app/build.gradle.kts" => FileCategory::Manifest ; "gradle kotlin dsl")]
    #[test_case("tests/package.json" => FileCategory::Manifest ; "manifest beats test dir")]
    #[test_case("tests/test_foo.py" => FileCategory::Test ; "python test in tests dir")]
    #[test_case("pkg/foo_test.go" => FileCategory::Test ; "go test suffix")]
    #[test_case("src/Button.spec.ts" => FileCategory::Test ; "spec suffix")]
    #[test_case("src/main/java/FooTest.java" => FileCategory::Test ; "java camel case test")]
    #[test_case("tests/main.py" => FileCategory::Test ; "test dir beats entry point")]
    #[test_case("main.py" => FileCategory::EntryPoint ; "python main")]
    #[test_case("src/index.ts" => FileCategory::EntryPoint ; "typescript index")]
    #[test_case("cmd/server/main.go" => FileCategory::EntryPoint ; "go main")]
    #[test_case("README.md" => FileCategory::Documentation ; "readme")]
    #[test_case("LICENSE" => FileCategory::Documentation ; "license without extension")]
    #[test_case("docs/test_plan.md" => FileCategory::Documentation ; "test prefixed doc")]
    #[test_case("config/settings.yaml" => FileCategory::Configuration ; "yaml config")]
    #[test_case("Dockerfile" => FileCategory::Configuration ; "dockerfile")]
    #[test_case("tsconfig.json" => FileCategory::Configuration ; "json config")]
    #[test_case("config/test_config.yaml" => FileCategory::Test ; "test prefixed config")]
    #[test_case("tsconfig.test.json" => FileCategory::Test ; "test suffixed json")]
    #[test_case("CHANGELOG" => FileCategory::Documentation ; "changelog without extension")]
    #[test_case("NOTICE.apache" => FileCategory::Documentation ; "notice with unknown extension")]
    #[test_case("src/history.py" => FileCategory::Source ; "module named like a document")]
    #[test_case("app/security.py" => FileCategory::Source ; "security module")]
    #[test_case("lib/changes.rb" => FileCategory::Source ; "ruby changes module")]
    #[test_case("src/notice.ts" => FileCategory::Source ; "typescript notice module")]
    #[test_case("deploy/security.yaml" => FileCategory::Configuration ; "security config")]
    #[test_case("src/utils.py" => FileCategory::Source ; "python source")]
    #[test_case("lib/parser.rs" => FileCategory::Source ; "rust source")]
    #[test_case("src/latest.py" => FileCategory::Source ; "test inside word is not a test")]
    #[test_case("assets/logo.png" => FileCategory::Other ; "image")]
    #[test_case("Makefile.bak" => FileCategory::Other ; "unknown extension")]
    fn test_classify(path: &str) -> FileCategory {
        FileClassifier::default().classify(path)
    }

    #[test]
    fn test_extra_manifest_names() {
        let config = AnalysisConfig::default().with_extra_manifest("requirements-prod.txt");
        let classifier = FileClassifier::new(&config);

        assert_eq!(classifier.classify("requirements-prod.txt"), FileCategory::Manifest);
        assert_eq!(
            FileClassifier::default().classify("requirements-prod.txt"),
            FileCategory::Documentation
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = FileClassifier::default();
        for path in ["main.py", "tests/test_a.py", "README.md", "a/b/c.unknown"] {
            assert_eq!(classifier.classify(path), classifier.classify(path));
        }
    }

    #[test]
    fn test_matching_rule_reports_precedence() {
        let classifier = FileClassifier::default();
        assert_eq!(classifier.matching_rule("tests/main.py"), Some(Rule::TestConvention));
        assert_eq!(classifier.matching_rule("photo.jpg"), None);
    }

    #[test]
    fn test_rule_order_matches_precedence() {
        let categories: Vec<_> = RULES.iter().map(|(_, c)| *c).collect();
        assert_eq!(
            categories,
            vec![
                FileCategory::Manifest,
                FileCategory::Test,
                FileCategory::EntryPoint,
                FileCategory::Documentation,
                FileCategory::Configuration,
                FileCategory::Source,
            ]
        );
    }
}
