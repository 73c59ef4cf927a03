/// Literal lookup tables that drive classification, language detection and
/// the default exclusion rules.
///
/// Every table here is plain data: supporting another language, manifest or
/// documentation format means adding an entry, not touching the code that
/// reads the table. Bump [`TABLE_VERSION`] whenever an entry changes the
/// outcome of a scan.
pub const TABLE_VERSION: u32 = 1;

/// Language identifiers and the per-language extension/entry-point table
pub mod languages {
    pub const PYTHON: &str = "python";
    pub const JAVASCRIPT: &str = "javascript";
    pub const TYPESCRIPT: &str = "typescript";
    pub const JAVA: &str = "java";
    pub const KOTLIN: &str = "kotlin";
    pub const RUST: &str = "rust";
    pub const GO: &str = "go";
    pub const RUBY: &str = "ruby";
    pub const PHP: &str = "php";
    pub const C: &str = "c";
    pub const CPP: &str = "cpp";
    pub const CSHARP: &str = "csharp";
    pub const SWIFT: &str = "swift";
    pub const SCALA: &str = "scala";
    pub const SHELL: &str = "shell";

    /// One row of the language table.
    #[derive(Debug, Clone, Copy)]
    pub struct LanguageSpec {
        pub name: &'static str,
        /// Lowercase extensions without the leading dot
        pub extensions: &'static [&'static str],
        /// File names conventionally used as the program's starting module
        pub entry_points: &'static [&'static str],
    }

    pub const TABLE: &[LanguageSpec] = &[
        LanguageSpec {
            name: PYTHON,
            extensions: &["py", "pyi"],
            entry_points: &["main.py", "__main__.py", "app.py", "manage.py", "wsgi.py", "asgi.py", "server.py", "cli.py"],
        },
        LanguageSpec {
            name: JAVASCRIPT,
            extensions: &["js", "jsx", "mjs", "cjs"],
            entry_points: &["index.js", "main.js", "app.js", "server.js", "index.mjs", "main.mjs"],
        },
        LanguageSpec {
            name: TYPESCRIPT,
            extensions: &["ts", "tsx", "mts", "cts"],
            entry_points: &["index.ts", "main.ts", "app.ts", "server.ts"],
        },
        LanguageSpec {
            name: JAVA,
            extensions: &["java"],
            entry_points: &["Main.java", "Application.java", "App.java"],
        },
        LanguageSpec {
            name: KOTLIN,
            extensions: &["kt"],
            entry_points: &["Main.kt", "Application.kt", "App.kt"],
        },
        LanguageSpec {
            name: RUST,
            extensions: &["rs"],
            entry_points: &["main.rs"],
        },
        LanguageSpec {
            name: GO,
            extensions: &["go"],
            entry_points: &["main.go"],
        },
        LanguageSpec {
            name: RUBY,
            extensions: &["rb", "ru"],
            entry_points: &["main.rb", "app.rb", "config.ru"],
        },
        LanguageSpec {
            name: PHP,
            extensions: &["php"],
            entry_points: &["index.php", "main.php"],
        },
        LanguageSpec {
            name: C,
            extensions: &["c", "h"],
            entry_points: &["main.c"],
        },
        LanguageSpec {
            name: CPP,
            extensions: &["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
            entry_points: &["main.cpp", "main.cc", "main.cxx"],
        },
        LanguageSpec {
            name: CSHARP,
            extensions: &["cs"],
            entry_points: &["Program.cs"],
        },
        LanguageSpec {
            name: SWIFT,
            extensions: &["swift"],
            entry_points: &["main.swift"],
        },
        LanguageSpec {
            name: SCALA,
            extensions: &["scala"],
            entry_points: &["Main.scala"],
        },
        LanguageSpec {
            name: SHELL,
            extensions: &["sh", "bash"],
            entry_points: &[],
        },
    ];

    /// Look up the language for a lowercase extension.
    pub fn for_extension(extension: &str) -> Option<&'static LanguageSpec> {
        TABLE.iter().find(|spec| spec.extensions.contains(&extension))
    }

    /// Look up the language whose entry-point list contains `file_name`.
    pub fn for_entry_point(file_name: &str) -> Option<&'static LanguageSpec> {
        TABLE.iter().find(|spec| spec.entry_points.contains(&file_name))
    }
}

/// Dependency manifest file names
pub mod manifest_files {
    pub const REQUIREMENTS_TXT: &str = "requirements.txt";
    pub const REQUIREMENTS_DEV_TXT: &str = "requirements-dev.txt";
    pub const PYPROJECT_TOML: &str = "pyproject.toml";
    pub const PACKAGE_JSON: &str = "package.json";
    pub const POM_XML: &str = "pom.xml";
    pub const BUILD_GRADLE: &str = "build.gradle";
    pub const BUILD_GRADLE_KTS: &str = "build.gradle.kts";
    pub const CARGO_TOML: &str = "Cargo.toml";

    pub const ALL: &[&str] = &[
        REQUIREMENTS_TXT,
        REQUIREMENTS_DEV_TXT,
        PYPROJECT_TOML,
        PACKAGE_JSON,
        POM_XML,
        BUILD_GRADLE,
        BUILD_GRADLE_KTS,
        CARGO_TOML,
    ];
}

/// Test-indicating path segments and file-name affixes
pub mod test_patterns {
    pub const DIRECTORIES: &[&str] = &["test", "tests", "spec", "specs", "__tests__", "testing"];
    /// Checked against the lowercased file stem
    pub const STEM_PREFIXES: &[&str] = &["test_", "test-"];
    pub const STEM_SUFFIXES: &[&str] = &["_test", "-test", ".test", "_spec", ".spec", "_tests"];
    /// Checked case-sensitively against the stem (`FooTest.java`)
    pub const CAMEL_SUFFIXES: &[&str] = &["Test", "Tests", "Spec"];
    pub const EXACT_STEMS: &[&str] = &["test", "tests", "conftest"];
}

/// Documentation extensions and well-known document basenames
pub mod documentation {
    pub const EXTENSIONS: &[&str] = &["md", "markdown", "rst", "adoc", "txt", "textile"];
    /// Compared against the uppercased file stem when the extension is
    /// not a code or configuration one
    pub const BASENAMES: &[&str] = &[
        "README", "LICENSE", "LICENCE", "COPYING", "CHANGELOG", "CHANGES", "HISTORY",
        "CONTRIBUTING", "AUTHORS", "NOTICE", "CODE_OF_CONDUCT", "SECURITY",
    ];
}

/// Configuration extensions and basenames
pub mod configuration {
    pub const EXTENSIONS: &[&str] = &[
        "toml", "yaml", "yml", "json", "ini", "cfg", "conf", "config", "xml", "properties", "env",
    ];
    pub const BASENAMES: &[&str] = &[
        "Dockerfile", "Makefile", "makefile", "Procfile", "Vagrantfile", ".editorconfig",
        ".gitlab-ci.yml", ".travis.yml", ".env.example", ".env.sample",
    ];
}

/// Default walker exclusions
pub mod exclusions {
    pub const EXCLUDED_DIRS: &[&str] = &[
        ".git", ".svn", ".hg", "node_modules", "__pycache__", ".pytest_cache", ".mypy_cache",
        ".tox", "venv", ".venv", "env", "target", "dist", "build", ".idea", ".vscode",
        ".gradle", "out", "obj", "coverage",
    ];
    pub const HIDDEN_WHITELIST: &[&str] = &[
        ".env.example", ".env.sample", ".github", ".gitlab-ci.yml", ".travis.yml", ".editorconfig",
    ];
    pub const IGNORED_FILE_PATTERNS: &[&str] = &[
        "*.pyc", "*.log", "*.tmp", "*.temp", "*.sqlite", "*.db", ".DS_Store",
    ];
}

/// Defaults for scan limits
pub mod limits {
    pub const DEFAULT_MAX_DEPTH: usize = 3;
}
