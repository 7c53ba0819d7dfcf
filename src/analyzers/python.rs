//! Tree-sitter integration for Python sources.
//!
//! Produces the typed [`PythonModule`] model: every function definition in
//! the file with its name, positional parameters and declaration line.

use crate::core::ast::{FunctionDef, FunctionKind, PythonModule};
use crate::errors::{Error, Result};
use std::collections::VecDeque;
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Parse Python source text and extract its function definitions.
///
/// Any syntax error in the file fails the whole parse.
pub fn parse_python(source: &str, path: &Path) -> Result<PythonModule> {
    let tree = parse_tree(source, path)?;
    let root = tree.root_node();

    if let Some(node) = first_syntax_error(root) {
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "invalid syntax".to_string()
        };
        return Err(Error::parse(path, node_line(&node), node_column(&node), message));
    }

    if let Some(node) = first_legacy_statement(root) {
        let keyword = node.child(0).map(|k| node_text(&k, source)).unwrap_or("print");
        return Err(Error::parse(
            path,
            node_line(&node),
            node_column(&node),
            format!("Missing parentheses in call to '{}'", keyword),
        ));
    }

    Ok(PythonModule {
        path: path.to_path_buf(),
        functions: collect_functions(root, source),
    })
}

fn parse_tree(source: &str, path: &Path) -> Result<Tree> {
    let mut parser = Parser::new();
    let language: tree_sitter::Language = tree_sitter_python::LANGUAGE.into();

    parser.set_language(&language).map_err(|e| {
        Error::parse(path, 1, 1, format!("Failed to set tree-sitter language: {}", e))
    })?;

    parser
        .parse(source, None)
        .ok_or_else(|| Error::parse(path, 1, 1, "Failed to parse source code"))
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}

/// Locate the first error or missing node in document order
fn first_syntax_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node> = node
            .children(&mut cursor)
            .filter(|child| child.has_error())
            .collect();
        stack.extend(children.into_iter().rev());
    }

    Some(root)
}

/// Python 2 statements the grammar accepts but the Python 3 compiler rejects
fn is_legacy_statement(node: &Node) -> bool {
    matches!(node.kind(), "print_statement" | "exec_statement")
}

/// Locate the first legacy statement in document order
fn first_legacy_statement(root: Node<'_>) -> Option<Node<'_>> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if is_legacy_statement(&node) {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    None
}

/// Breadth-first walk over statement nesting levels.
///
/// A function is recorded when it is dequeued, so every module-level function
/// precedes every nested one.
fn collect_functions(root: Node<'_>, source: &str) -> Vec<FunctionDef> {
    let mut functions = Vec::new();
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        if node.kind() == "function_definition" {
            if let Some(def) = function_def(&node, source) {
                functions.push(def);
            }
        }
        push_level_children(node, &mut queue);
    }

    functions
}

/// Wrappers that hold statements without adding a nesting level.
///
/// `else:` and `finally:` bodies sit directly on their statement, while
/// `elif_clause` and `except_clause` each count as one level.
fn is_transparent(node: &Node) -> bool {
    matches!(
        node.kind(),
        "block" | "decorated_definition" | "else_clause" | "finally_clause"
    )
}

fn push_level_children<'tree>(node: Node<'tree>, queue: &mut VecDeque<Node<'tree>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if is_transparent(&child) {
            push_level_children(child, queue);
        } else {
            queue.push_back(child);
        }
    }
}

fn function_def(node: &Node, source: &str) -> Option<FunctionDef> {
    let name = node.child_by_field_name("name")?;
    let kind = match node.child(0) {
        Some(first) if first.kind() == "async" => FunctionKind::AsyncDef,
        _ => FunctionKind::Def,
    };
    let params = node
        .child_by_field_name("parameters")
        .map(|params| positional_params(&params, source))
        .unwrap_or_default();

    Some(FunctionDef {
        name: node_text(&name, source).to_string(),
        params,
        line: node_line(node),
        kind,
    })
}

/// Names of the positional-or-keyword parameters.
///
/// Names before a `/` are positional-only and dropped; collection stops at the
/// first `*`, `*args` or `**kwargs`.
fn positional_params(params: &Node, source: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = params.walk();

    for param in params.named_children(&mut cursor) {
        match param.kind() {
            "identifier" => names.push(node_text(&param, source).to_string()),
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = param
                    .child_by_field_name("name")
                    .filter(|n| n.kind() == "identifier")
                {
                    names.push(node_text(&name, source).to_string());
                }
            }
            "typed_parameter" => match param.named_child(0) {
                Some(inner) if inner.kind() == "identifier" => {
                    names.push(node_text(&inner, source).to_string())
                }
                Some(_) => break,
                None => {}
            },
            "positional_separator" => names.clear(),
            "keyword_separator" | "list_splat_pattern" | "dictionary_splat_pattern" => break,
            _ => {}
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::path::PathBuf;

    fn parse(source: &str) -> PythonModule {
        parse_python(source, &PathBuf::from("sample.py")).unwrap()
    }

    fn names(module: &PythonModule) -> Vec<&str> {
        module.functions.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_top_level_functions_in_source_order() {
        let module = parse(indoc! {"
            def first(a, b):
                return a + b

            def second():
                pass
        "});

        assert_eq!(names(&module), vec!["first", "second"]);
        assert_eq!(module.functions[0].params, vec!["a", "b"]);
        assert_eq!(module.functions[0].line, 1);
        assert_eq!(module.functions[1].line, 4);
        assert!(module.functions[1].params.is_empty());
    }

    #[test]
    fn test_nested_functions_follow_all_outer_ones() {
        let module = parse(indoc! {"
            def outer():
                def inner():
                    pass
                return inner

            def after():
                pass
        "});

        assert_eq!(names(&module), vec!["outer", "after", "inner"]);
        assert_eq!(module.functions[2].line, 2);
    }

    #[test]
    fn test_methods_are_discovered() {
        let module = parse(indoc! {"
            class Greeter:
                def __init__(self, name):
                    self.name = name

                def greet(self, loud=False):
                    return self.name
        "});

        assert_eq!(names(&module), vec!["__init__", "greet"]);
        assert_eq!(module.functions[1].params, vec!["self", "loud"]);
    }

    #[test]
    fn test_decorated_function_reports_def_line() {
        let module = parse(indoc! {"
            import functools

            @functools.cache
            def cached(n):
                return n
        "});

        assert_eq!(module.functions.len(), 1);
        assert_eq!(module.functions[0].line, 4);
    }

    #[test]
    fn test_positional_parameters_only() {
        let module = parse(indoc! {"
            def f(pos, /, a, b: int, c=1, d: str = 'x', *args, e, **kwargs):
                pass

            def g(a, *, b):
                pass

            def h(**options):
                pass
        "});

        assert_eq!(module.functions[0].params, vec!["a", "b", "c", "d"]);
        assert_eq!(module.functions[1].params, vec!["a"]);
        assert!(module.functions[2].params.is_empty());
    }

    #[test]
    fn test_async_functions_are_tagged() {
        let module = parse(indoc! {"
            async def fetch(url):
                pass

            def plain():
                pass
        "});

        assert_eq!(module.functions[0].kind, FunctionKind::AsyncDef);
        assert_eq!(module.functions[1].kind, FunctionKind::Def);
        let sync: Vec<_> = module.sync_functions().map(|f| f.name.as_str()).collect();
        assert_eq!(sync, vec!["plain"]);
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let result = parse_python("def broken(:\n    pass\n", &PathBuf::from("bad.py"));
        match result {
            Err(Error::Parse { file, line, .. }) => {
                assert_eq!(file, PathBuf::from("bad.py"));
                assert_eq!(line, 1);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_if_else_body_counts_as_statement_level() {
        let module = parse(indoc! {"
            if cond:
                pass
            else:
                def from_else(): pass

            class K:
                def method(self): pass
        "});

        assert_eq!(names(&module), vec!["from_else", "method"]);
    }

    #[test]
    fn test_for_else_body_counts_as_statement_level() {
        let module = parse(indoc! {"
            for item in items:
                pass
            else:
                def after_loop(): pass

            class K:
                def method(self): pass
        "});

        assert_eq!(names(&module), vec!["after_loop", "method"]);
    }

    #[test]
    fn test_try_finally_body_counts_as_statement_level() {
        let module = parse(indoc! {"
            try:
                pass
            finally:
                def cleanup(): pass

            class K:
                def method(self): pass
        "});

        assert_eq!(names(&module), vec!["cleanup", "method"]);
    }

    #[test]
    fn test_except_handler_adds_a_level() {
        let module = parse(indoc! {"
            try:
                pass
            except ValueError:
                def recover(): pass

            class K:
                def method(self): pass

            def outer():
                def inner():
                    def innermost(): pass
        "});

        assert_eq!(
            names(&module),
            vec!["outer", "method", "inner", "recover", "innermost"]
        );
    }

    #[test]
    fn test_print_statement_is_parse_error() {
        let result = parse_python("print \"hi\"\ndef f(): pass\n", &PathBuf::from("legacy.py"));
        match result {
            Err(Error::Parse { line, message, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(message, "Missing parentheses in call to 'print'");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_exec_statement_is_parse_error() {
        let result = parse_python(
            "def f():\n    exec \"x = 1\"\n",
            &PathBuf::from("legacy.py"),
        );
        assert!(matches!(result, Err(Error::Parse { line: 2, .. })));
    }

    #[test]
    fn test_print_call_is_accepted() {
        let module = parse(indoc! {r#"
            print("hi")
            exec("x = 1")

            def f():
                print("inside", end="")
        "#});

        assert_eq!(names(&module), vec!["f"]);
    }

    #[test]
    fn test_empty_source_has_no_functions() {
        let module = parse("");
        assert!(module.functions.is_empty());
    }
}
