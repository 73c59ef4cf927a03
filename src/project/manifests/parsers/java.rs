//! Maven POM and Gradle build files
//!
//! Both are located by structural markers only. A declaration that cannot be
//! read is skipped without affecting its neighbours.

use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use regex::Regex;
use tracing::debug;

use crate::project::manifests::types::{ManifestError, ParsedDependency};

#[derive(Debug, Default)]
struct PomDependency {
    group_id: String,
    artifact_id: String,
    version: String,
    scope: String,
    /// Saw a mismatched closing tag or unreadable text
    malformed: bool,
}

impl PomDependency {
    fn finish(self) -> Option<ParsedDependency> {
        if self.malformed {
            debug!("Skipping malformed <dependency> {}", self.artifact_id);
            return None;
        }
        if self.artifact_id.is_empty() {
            debug!("Skipping <dependency> without artifactId");
            return None;
        }

        let name = if self.group_id.is_empty() {
            self.artifact_id
        } else {
            format!("{}:{}", self.group_id, self.artifact_id)
        };
        let dev = self.scope == "test";
        let version = Some(self.version);

        Some(ParsedDependency::new(name, version, dev))
    }
}

/// Parse `<dependency>` elements of any `<dependencies>` block in a pom.xml.
///
/// Only a document without a `<project>` root fails as a whole. A broken
/// declaration (mismatched tags, bad escapes) is dropped and its
/// neighbours are kept, as is everything read before a truncation.
pub fn parse_pom(content: &str) -> Result<Vec<ParsedDependency>, ManifestError> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);
    reader.check_end_names(false);

    let mut buf = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut current: Option<PomDependency> = None;
    let mut dependency_depth = 0;
    let mut saw_root = false;
    let mut last_error_at = None;
    let mut dependencies = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if !saw_root {
                    check_root(&name)?;
                    saw_root = true;
                }

                if name == "dependency" && stack.last().map(String::as_str) == Some("dependencies") {
                    current = Some(PomDependency::default());
                    dependency_depth = stack.len() + 1;
                }
                stack.push(name);
            }
            Ok(Event::Empty(ref e)) if !saw_root => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                check_root(&name)?;
                saw_root = true;
            }
            Ok(Event::End(ref e)) => {
                let closed = stack.pop();
                if closed.as_deref().map(str::as_bytes) != Some(e.local_name().as_ref()) {
                    if let Some(dependency) = current.as_mut() {
                        dependency.malformed = true;
                    }
                }

                if stack.len() + 1 == dependency_depth && closed.as_deref() == Some("dependency") {
                    if let Some(parsed) = current.take().and_then(PomDependency::finish) {
                        dependencies.push(parsed);
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                let direct_child = stack.len() == dependency_depth + 1;
                if let Some(dependency) = current.as_mut().filter(|_| direct_child) {
                    match e.unescape() {
                        Ok(text) => set_field(dependency, stack.last(), text.trim()),
                        Err(err) => {
                            debug!("Unreadable text in <dependency>: {}", err);
                            dependency.malformed = true;
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                let position = reader.buffer_position();
                if !saw_root {
                    return Err(ManifestError::Parse(format!(
                        "XML error at position {position}: {e}"
                    )));
                }

                debug!("XML error at position {}: {}", position, e);
                if let Some(dependency) = current.as_mut() {
                    dependency.malformed = true;
                }
                // The reader made no progress; nothing more can be read
                if last_error_at == Some(position) {
                    break;
                }
                last_error_at = Some(position);
            }
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(ManifestError::Unsupported("no root element".to_string()));
    }

    Ok(dependencies)
}

fn set_field(dependency: &mut PomDependency, element: Option<&String>, text: &str) {
    let field = match element.map(String::as_str) {
        Some("groupId") => &mut dependency.group_id,
        Some("artifactId") => &mut dependency.artifact_id,
        Some("version") => &mut dependency.version,
        Some("scope") => &mut dependency.scope,
        _ => return,
    };
    *field = text.to_string();
}

fn check_root(name: &str) -> Result<(), ManifestError> {
    if name == "project" {
        Ok(())
    } else {
        Err(ManifestError::Unsupported(format!(
            "root element is <{name}>, expected <project>"
        )))
    }
}

const CONFIGURATIONS: &str = "implementation|api|compileOnly|runtimeOnly|compile|runtime|\
testImplementation|testCompileOnly|testRuntimeOnly|testCompile|androidTestImplementation|\
debugImplementation|releaseImplementation|annotationProcessor|kapt|ksp|classpath|developmentOnly";

/// `implementation 'g:a:v'` and `implementation("g:a:v")`
static STRING_NOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"^\s*(?P<config>{CONFIGURATIONS})\s*\(?\s*["'](?P<coords>[^"']+)["']"#
    ))
    .expect("gradle string notation pattern is valid")
});

/// `implementation group: 'g', name: 'a', version: 'v'`
static MAP_NOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"^\s*(?P<config>{CONFIGURATIONS})\s*\(?\s*group\s*[:=]\s*["'](?P<group>[^"']+)["']\s*,\s*name\s*[:=]\s*["'](?P<name>[^"']+)["'](?:\s*,\s*version\s*[:=]\s*["'](?P<version>[^"']+)["'])?"#
    ))
    .expect("gradle map notation pattern is valid")
});

/// Extract dependency declarations from build.gradle / build.gradle.kts.
/// Project, platform, file and version-catalog references are skipped.
pub fn parse_gradle(content: &str) -> Vec<ParsedDependency> {
    let mut dependencies = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }

        if let Some(caps) = MAP_NOTATION.captures(line) {
            let name = format!("{}:{}", &caps["group"], &caps["name"]);
            let version = caps.name("version").map(|v| v.as_str().to_string());
            dependencies.push(ParsedDependency::new(name, version, is_test_configuration(&caps["config"])));
            continue;
        }

        if let Some(caps) = STRING_NOTATION.captures(line) {
            match split_coordinates(&caps["coords"]) {
                Some((name, version)) => dependencies.push(ParsedDependency::new(
                    name,
                    version,
                    is_test_configuration(&caps["config"]),
                )),
                None => debug!("Skipping malformed Gradle coordinates: {}", &caps["coords"]),
            }
        }
    }

    dependencies
}

/// `group:artifact[:version[:classifier]][@ext]`
fn split_coordinates(coords: &str) -> Option<(String, Option<String>)> {
    let coords = coords.split('@').next().unwrap_or(coords);
    let mut parts = coords.split(':');
    let group = parts.next().filter(|g| !g.is_empty())?;
    let artifact = parts.next().filter(|a| !a.is_empty())?;
    let version = parts.next().filter(|v| !v.is_empty()).map(String::from);

    Some((format!("{group}:{artifact}"), version))
}

fn is_test_configuration(configuration: &str) -> bool {
    configuration.starts_with("test") || configuration.starts_with("androidTest")
}
