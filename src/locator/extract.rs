use crate::locator::syntax::{self, CSharpParser};
use anyhow::{Result, anyhow};

/// Finds the request type declared in a single file: the first public class
/// or record (document order) whose base list names the request marker
/// interface by bare simple name, generic arity ignored.
pub struct RequestTypeExtractor {
    parser: CSharpParser,
}

impl RequestTypeExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: CSharpParser::new()?,
        })
    }

    /// Identifier of the first qualifying declaration, or `None`. Malformed
    /// input relies on tree-sitter recovery and simply yields no match; an
    /// error is returned only when no tree could be produced at all.
    pub fn request_type(&mut self, source: &str, marker: &str) -> Result<Option<String>> {
        let tree = self
            .parser
            .parse(source)
            .ok_or_else(|| anyhow!("parse failed"))?;
        let found = syntax::first_descendant(tree.root_node(), &mut |node| {
            if !matches!(node.kind(), "class_declaration" | "record_declaration") {
                return false;
            }
            if !syntax::is_public(node, source) {
                return false;
            }
            syntax::base_types(node, source)
                .iter()
                .any(|base| base.simple_name == marker)
        });
        Ok(found.and_then(|node| syntax::declaration_name(node, source)))
    }
}

#[cfg(test)]
mod tests {
    use super::RequestTypeExtractor;

    fn extract(source: &str) -> Option<String> {
        let mut extractor = RequestTypeExtractor::new().unwrap();
        extractor.request_type(source, "IRequest").unwrap()
    }

    #[test]
    fn finds_public_class_with_bare_marker() {
        let source = r#"
namespace Orders;

public class CreateOrder : IRequest
{
}
"#;
        assert_eq!(extract(source).as_deref(), Some("CreateOrder"));
    }

    #[test]
    fn generic_arity_on_marker_is_ignored() {
        let source = "public class CreateOrder : IRequest<OrderId> {}";
        assert_eq!(extract(source).as_deref(), Some("CreateOrder"));
    }

    #[test]
    fn record_declarations_qualify() {
        let source = "public record CreateOrder(string Sku) : IRequest<OrderId>;";
        assert_eq!(extract(source).as_deref(), Some("CreateOrder"));
    }

    #[test]
    fn first_declaration_in_document_order_wins() {
        let source = r#"
public class First : IRequest<int> {}
public class Second : IRequest<int> {}
"#;
        assert_eq!(extract(source).as_deref(), Some("First"));
    }

    #[test]
    fn non_public_declarations_are_skipped() {
        let source = r#"
internal class Hidden : IRequest {}
public class Visible : IRequest {}
"#;
        assert_eq!(extract(source).as_deref(), Some("Visible"));
    }

    #[test]
    fn qualified_marker_name_does_not_match() {
        let source = "public class CreateOrder : MediatR.IRequest {}";
        assert_eq!(extract(source), None);
    }

    #[test]
    fn no_base_list_means_no_request_type() {
        assert_eq!(extract("public class Plain {}"), None);
    }

    #[test]
    fn malformed_text_yields_no_match() {
        assert_eq!(extract("public class {{{ : IRequest"), None);
    }

    #[test]
    fn deterministic_across_reparses() {
        let source = "public class Ping : IRequest<Pong> {}";
        let mut extractor = RequestTypeExtractor::new().unwrap();
        let first = extractor.request_type(source, "IRequest").unwrap();
        let second = extractor.request_type(source, "IRequest").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("Ping"));
    }
}
