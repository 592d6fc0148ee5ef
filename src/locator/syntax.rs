use anyhow::Result;
use tree_sitter::{Node, Parser, Tree};

/// Reusable C# parser. Tree-sitter recovers from malformed input, so a
/// returned tree may contain error nodes; `parse` yields `None` only when the
/// parser itself gives up.
pub struct CSharpParser {
    parser: Parser,
}

impl CSharpParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_c_sharp::LANGUAGE;
        parser.set_language(&language.into())?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> Option<Tree> {
        self.parser.parse(source, None)
    }
}

/// First node in document order (pre-order over named descendants, the node
/// itself included) satisfying `pred`.
pub fn first_descendant<'a>(
    node: Node<'a>,
    pred: &mut dyn FnMut(Node<'a>) -> bool,
) -> Option<Node<'a>> {
    if pred(node) {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(found) = first_descendant(child, pred) {
            return Some(found);
        }
    }
    None
}

/// One entry of a declaration's base list. For a bare or generic base name
/// `simple_name` is the identifier alone; a qualified base name keeps its
/// dots, so it never compares equal to a bare marker name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseType {
    pub simple_name: String,
    pub type_arguments: Vec<String>,
}

impl BaseType {
    pub fn is_generic(&self) -> bool {
        !self.type_arguments.is_empty()
    }
}

/// Ordered base-type entries of a class/record declaration. Empty when the
/// declaration carries no base list.
pub fn base_types(declaration: Node<'_>, source: &str) -> Vec<BaseType> {
    let mut out = Vec::new();
    let mut cursor = declaration.walk();
    for child in declaration.named_children(&mut cursor) {
        if child.kind() != "base_list" {
            continue;
        }
        let mut list_cursor = child.walk();
        for entry in child.named_children(&mut list_cursor) {
            match entry.kind() {
                "argument_list" => {}
                "primary_constructor_base_type" => {
                    let type_node = entry.child_by_field_name("type").or_else(|| {
                        let mut entry_cursor = entry.walk();
                        entry
                            .named_children(&mut entry_cursor)
                            .find(|child| child.kind() != "argument_list")
                    });
                    if let Some(base) =
                        type_node.and_then(|node| base_type_from_node(node, source))
                    {
                        out.push(base);
                    }
                }
                _ => {
                    if let Some(base) = base_type_from_node(entry, source) {
                        out.push(base);
                    }
                }
            }
        }
    }
    out
}

fn base_type_from_node(node: Node<'_>, source: &str) -> Option<BaseType> {
    if node.kind() == "generic_name" {
        let mut name = String::new();
        let mut args = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "identifier" => name = node_text(child, source),
                "type_argument_list" => {
                    let mut arg_cursor = child.walk();
                    for arg in child.named_children(&mut arg_cursor) {
                        let text = node_text(arg, source);
                        if !text.is_empty() {
                            args.push(text);
                        }
                    }
                }
                _ => {}
            }
        }
        if name.is_empty() {
            return None;
        }
        return Some(BaseType {
            simple_name: name,
            type_arguments: args,
        });
    }
    let text = node_text(node, source);
    if text.is_empty() {
        return None;
    }
    Some(BaseType {
        simple_name: text,
        type_arguments: Vec::new(),
    })
}

pub fn is_public(declaration: Node<'_>, source: &str) -> bool {
    let mut cursor = declaration.walk();
    for child in declaration.named_children(&mut cursor) {
        if child.kind() == "modifier" && node_text(child, source) == "public" {
            return true;
        }
    }
    false
}

pub fn declaration_name(declaration: Node<'_>, source: &str) -> Option<String> {
    let name_node = declaration.child_by_field_name("name")?;
    let name = node_text(name_node, source);
    if name.is_empty() { None } else { Some(name) }
}

pub fn start_line(node: Node<'_>) -> i64 {
    node.start_position().row as i64 + 1
}

pub fn node_text(node: Node<'_>, source: &str) -> String {
    source
        .get(node.start_byte()..node.end_byte())
        .unwrap_or("")
        .trim()
        .to_string()
}
