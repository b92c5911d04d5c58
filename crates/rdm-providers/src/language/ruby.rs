//! Ruby module-tree parser
//!
//! Parses Ruby sources with tree-sitter-ruby and records every `class` and
//! `module` declaration in a [`SymbolStore`], together with the comment
//! block directly above each declaration site.

use super::comments::CommentIndex;
use crate::constants::{FIELD_NAME, NODE_CLASS, NODE_COMMENT, NODE_MODULE, OPAQUE_NODES};
use rdm_domain::constants::NAMESPACE_SEPARATOR;
use rdm_domain::error::{Error, Result};
use rdm_domain::ports::{ModuleTreeParser, ParserOptions, Verbosity};
use rdm_domain::{
    CommentLocation, FullName, ModuleId, ModuleKind, ParseContext, ParsedCorpus, SymbolStore,
};
use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::{Language, Node, Parser};

/// Ruby parser backed by tree-sitter-ruby
///
/// Every [`parse_files`](ModuleTreeParser::parse_files) call starts from an
/// empty store, so nothing is cached between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyTreeParser {
    options: ParserOptions,
}

impl RubyTreeParser {
    /// Create a parser with fixed options
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Parse one in-memory source into `store`
    pub fn parse_source(
        &self,
        store: &mut SymbolStore,
        path: &Path,
        source: &str,
    ) -> Result<ParseContext> {
        let mut parser = Self::create_parser()?;
        Self::parse_with(&mut parser, store, path, source)
    }

    fn create_parser() -> Result<Parser> {
        let language: Language = tree_sitter_ruby::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| Error::internal(format!("Failed to load Ruby grammar: {e}")))?;
        Ok(parser)
    }

    fn parse_with(
        parser: &mut Parser,
        store: &mut SymbolStore,
        path: &Path,
        source: &str,
    ) -> Result<ParseContext> {
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| Error::parse(path, 1, "parser produced no syntax tree"))?;
        let root = tree.root_node();

        if let Some(node) = first_syntax_error(root) {
            let message = if node.is_missing() {
                format!("missing `{}`", node.kind())
            } else {
                "syntax error".to_string()
            };
            return Err(Error::parse(path, node.start_position().row + 1, message));
        }

        let comments = CommentIndex::build(root, source);
        let mut walker = DeclarationWalker {
            store,
            source,
            path,
            comments: &comments,
            context: ParseContext::new(path),
        };
        walker.visit(root);

        let mut context = walker.context;
        context.modules = store.classes_then_modules(&context.modules);
        Ok(context)
    }
}

impl ModuleTreeParser for RubyTreeParser {
    fn parse_files(&self, paths: &[PathBuf]) -> Result<ParsedCorpus> {
        let mut parser = Self::create_parser()?;
        let mut corpus = ParsedCorpus::default();

        for path in paths {
            let source = std::fs::read_to_string(path).map_err(|e| {
                Error::io_with_source(format!("Failed to read source file {}", path.display()), e)
            })?;
            let context = Self::parse_with(&mut parser, &mut corpus.store, path, &source)?;
            if self.options.verbosity == Verbosity::Normal {
                debug!(
                    path = %path.display(),
                    declarations = context.modules.len(),
                    "Parsed source file"
                );
            }
            corpus.contexts.push(context);
        }

        Ok(corpus)
    }

    fn provider_name(&self) -> &str {
        "tree-sitter-ruby"
    }
}

/// Records declarations of one file into the shared store
struct DeclarationWalker<'a> {
    store: &'a mut SymbolStore,
    source: &'a str,
    path: &'a Path,
    comments: &'a CommentIndex,
    context: ParseContext,
}

impl DeclarationWalker<'_> {
    /// Depth-first walk in source order over an explicit worklist
    fn visit(&mut self, root: Node<'_>) {
        let mut pending: Vec<(Node<'_>, Option<ModuleId>)> = vec![(root, None)];
        while let Some((node, namespace)) = pending.pop() {
            let scope = match node.kind() {
                NODE_CLASS | NODE_MODULE => self.declare(node, namespace).or(namespace),
                NODE_COMMENT => continue,
                kind if OPAQUE_NODES.contains(&kind) => continue,
                _ => namespace,
            };
            let mut cursor = node.walk();
            let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
            pending.extend(children.into_iter().rev().map(|child| (child, scope)));
        }
    }

    /// Record a `class`/`module` declaration and return the namespace of
    /// its body, `None` when the declaration has no usable name
    fn declare(&mut self, node: Node<'_>, namespace: Option<ModuleId>) -> Option<ModuleId> {
        let kind = if node.kind() == NODE_CLASS {
            ModuleKind::Class
        } else {
            ModuleKind::Module
        };
        let name = node
            .child_by_field_name(FIELD_NAME)
            .and_then(|n| self.source.get(n.byte_range()))?;

        let name: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        let (absolute, qualified) = match name.strip_prefix(NAMESPACE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, name.as_str()),
        };
        let segments: Vec<&str> = qualified
            .split(NAMESPACE_SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect();
        let (last, scopes) = segments.split_last()?;

        let mut parent = if absolute { None } else { namespace };
        let mut outermost = None;
        for (i, segment) in scopes.iter().enumerate() {
            let id = if i == 0 && !absolute {
                self.resolve_constant(namespace, segment)
            } else {
                self.store.ensure_namespace(parent, segment)
            };
            outermost.get_or_insert(id);
            parent = Some(id);
        }

        let id = self.store.declare(parent, last, kind);
        let outermost = outermost.unwrap_or(id);
        if self.store[outermost].full_name.is_top_level() {
            self.context.add_module(outermost);
        }

        let row = node.start_position().row;
        let text = self.comments.comment_above(row);
        self.store
            .add_comment(id, CommentLocation::new(text).at(self.path, row + 1));

        Some(id)
    }

    /// Resolve the first segment of a qualified name the way Ruby looks up
    /// constants: enclosing namespaces outwards, then the top level. Unknown
    /// names become implicit modules inside the current namespace.
    fn resolve_constant(&mut self, namespace: Option<ModuleId>, segment: &str) -> ModuleId {
        let mut scope = namespace.map(|id| self.store[id].full_name.clone());
        while let Some(name) = scope {
            if let Some(id) = self.store.find(&FullName::nested(Some(&name), segment)) {
                return id;
            }
            scope = name.parent();
        }
        if let Some(id) = self.store.find(&FullName::new(segment)) {
            return id;
        }
        self.store.ensure_namespace(namespace, segment)
    }
}

/// First `ERROR` or `MISSING` node in source order
fn first_syntax_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() {
            let mut cursor = node.walk();
            let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
            pending.extend(children.into_iter().rev());
        }
    }
    None
}
