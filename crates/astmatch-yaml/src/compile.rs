//! Compiling decoded documents into patterns.

use astmatch_core::{Node, Pattern, extract_field, extract_field_with, match_length_strict};
use serde_json::Map;
use tracing::debug;

use crate::DocumentError;

const EXTRACT: &str = "$extract";
const MATCH: &str = "$match";
const EXACT: &str = "$exact";
const LITERAL: &str = "$literal";

/// Compiles a decoded pattern document into a [`Pattern`].
///
/// Scalars become literals, sequences become sequence patterns and plain
/// mappings become mapping patterns. Mappings whose keys start with `$`
/// are directives:
///
/// - `{ $extract: NAME }` captures the node as `NAME`;
/// - `{ $extract: NAME, $match: DOC }` captures it only when `DOC` matches;
/// - `{ $exact: [DOC, ...] }` requires a sequence of exactly that length;
/// - `{ $literal: VALUE }` matches `VALUE` without interpreting directives.
///
/// # Errors
///
/// Returns [`DocumentError`] when a mapping mixes directive and plain keys,
/// names an unknown directive, or gives a directive a value of the wrong
/// shape.
///
/// # Example
///
/// ```
/// use astmatch_core::is_match;
/// use astmatch_yaml::compile;
/// use serde_json::json;
///
/// let pattern = compile(&json!({
///     "type": "Identifier",
///     "name": { "$extract": "name" },
/// }))?;
/// let captures = is_match(&json!({ "type": "Identifier", "name": "x" }), &pattern);
/// assert_eq!(captures.and_then(|c| c.get("name").cloned()), Some(json!("x")));
/// # Ok::<(), astmatch_yaml::DocumentError>(())
/// ```
pub fn compile(document: &Node) -> Result<Pattern, DocumentError> {
    let mut compiler = Compiler::default();
    let pattern = compiler.node(document, &mut String::new())?;
    debug!(
        directives = compiler.directives,
        predicates = pattern.has_predicates(),
        "compiled pattern document"
    );
    Ok(pattern)
}

#[derive(Default)]
struct Compiler {
    directives: usize,
}

impl Compiler {
    fn node(&mut self, node: &Node, path: &mut String) -> Result<Pattern, DocumentError> {
        match node {
            Node::Array(items) => self.sequence(items, path).map(Pattern::Sequence),
            Node::Object(fields) if fields.keys().any(|key| is_directive(key)) => {
                self.directive(fields, path)
            }
            Node::Object(fields) => {
                let mut entries = Vec::with_capacity(fields.len());
                for (key, value) in fields {
                    entries.push((key.clone(), self.child(value, path, key)?));
                }
                Ok(Pattern::Mapping(entries))
            }
            scalar => Ok(Pattern::Literal(scalar.clone())),
        }
    }

    fn sequence(&mut self, items: &[Node], path: &mut String) -> Result<Vec<Pattern>, DocumentError> {
        let mut patterns = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            patterns.push(self.child(item, path, &index.to_string())?);
        }
        Ok(patterns)
    }

    fn child(&mut self, node: &Node, path: &mut String, token: &str) -> Result<Pattern, DocumentError> {
        let parent_len = path.len();
        push_token(path, token);
        let compiled = self.node(node, path);
        path.truncate(parent_len);
        compiled
    }

    fn directive(&mut self, fields: &Map<String, Node>, path: &mut String) -> Result<Pattern, DocumentError> {
        if let Some(plain) = fields.keys().find(|key| !is_directive(key)) {
            return Err(DocumentError::mixed_directive(path.as_str(), plain.as_str()));
        }
        if let Some(unknown) = fields
            .keys()
            .find(|key| ![EXTRACT, MATCH, EXACT, LITERAL].contains(&key.as_str()))
        {
            return Err(DocumentError::unknown_directive(path.as_str(), unknown.as_str()));
        }
        self.directives += 1;

        if let Some(value) = fields.get(LITERAL) {
            require_alone(fields, LITERAL, path)?;
            return Ok(Pattern::Literal(value.clone()));
        }
        if let Some(value) = fields.get(EXACT) {
            require_alone(fields, EXACT, path)?;
            let Node::Array(items) = value else {
                return Err(DocumentError::invalid_directive(
                    path.as_str(),
                    "`$exact` expects a sequence",
                ));
            };
            let parent_len = path.len();
            push_token(path, EXACT);
            let compiled = self.sequence(items, path);
            path.truncate(parent_len);
            return Ok(Pattern::from(match_length_strict(compiled?)));
        }
        self.extraction(fields, path)
    }

    fn extraction(&mut self, fields: &Map<String, Node>, path: &mut String) -> Result<Pattern, DocumentError> {
        let name = match fields.get(EXTRACT) {
            Some(Node::String(text)) => text.as_str(),
            Some(_) => {
                return Err(DocumentError::invalid_directive(
                    path.as_str(),
                    "`$extract` expects a capture name string",
                ));
            }
            None => {
                return Err(DocumentError::invalid_directive(
                    path.as_str(),
                    "`$match` is only valid alongside `$extract`",
                ));
            }
        };
        let Some(nested) = fields.get(MATCH) else {
            return Ok(Pattern::from(extract_field(name)));
        };
        let matcher = self.child(nested, path, MATCH)?;
        Ok(Pattern::from(extract_field_with(name, matcher)))
    }
}

fn is_directive(key: &str) -> bool {
    key.starts_with('$')
}

fn push_token(path: &mut String, token: &str) {
    path.push('/');
    path.push_str(&token.replace('~', "~0").replace('/', "~1"));
}

fn require_alone(fields: &Map<String, Node>, directive: &str, path: &str) -> Result<(), DocumentError> {
    if fields.len() == 1 {
        Ok(())
    } else {
        Err(DocumentError::invalid_directive(
            path,
            format!("`{directive}` cannot be combined with other directives"),
        ))
    }
}
