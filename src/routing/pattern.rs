use crate::errors::RouterError;
use regex::Regex;
use std::collections::HashMap;

/// A URI template compiled to an anchored regex with one named capture
/// group per `{placeholder}`. Compilation is a pure function of the
/// template string: the same template always yields the same pattern.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl CompiledPattern {
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Extracts path parameters from `path`. Keys are exactly the
    /// placeholder names of the template; values are the raw, un-decoded
    /// path segments. `None` when the path does not match.
    pub fn extract(&self, path: &str) -> Option<HashMap<String, String>> {
        let captures = self.regex.captures(path)?;
        let mut params = HashMap::new();
        for name in &self.param_names {
            if let Some(value) = captures.name(name) {
                params.insert(name.clone(), value.as_str().to_string());
            }
        }
        Some(params)
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Compiles a URI template into a [`CompiledPattern`].
///
/// Literal portions are regex-escaped; each `{name}` becomes a named
/// capture matching one or more non-slash characters. The pattern is
/// anchored at both ends and tolerates a single trailing slash. An empty
/// template matches only the empty/root path.
pub fn compile(template: &str) -> Result<CompiledPattern, RouterError> {
    let mut regex_pattern = String::from("^");
    let mut param_names = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '{' {
            literal.push(c);
            continue;
        }
        regex_pattern.push_str(&regex::escape(&literal));
        literal.clear();

        let mut name = String::new();
        let mut closed = false;
        for inner in chars.by_ref() {
            if inner == '}' {
                closed = true;
                break;
            }
            name.push(inner);
        }
        if !closed {
            return Err(invalid(template, "unclosed '{' placeholder"));
        }
        if !is_identifier(&name) {
            return Err(invalid(
                template,
                &format!("placeholder name '{}' is not an identifier", name),
            ));
        }
        regex_pattern.push_str(&format!(r"(?P<{}>[^/]+)", name));
        param_names.push(name);
    }
    regex_pattern.push_str(&regex::escape(&literal));
    regex_pattern.push_str("/?$");

    // Duplicate placeholder names are rejected here by the regex engine's
    // duplicate-group-name rule.
    let regex = Regex::new(&regex_pattern)
        .map_err(|e| invalid(template, &e.to_string()))?;

    Ok(CompiledPattern {
        source: template.to_string(),
        regex,
        param_names,
    })
}

/// Public introspection hook: the regex source a template compiles to.
pub fn get_pattern(template: &str) -> Result<String, RouterError> {
    Ok(compile(template)?.as_str().to_string())
}

fn invalid(pattern: &str, reason: &str) -> RouterError {
    RouterError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
