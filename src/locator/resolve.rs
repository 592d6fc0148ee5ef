use crate::locator::syntax::{self, CSharpParser};
use crate::model::{HandlerLocation, SourceFile};
use anyhow::Result;

/// Scans candidate files in order for the first class whose base list carries
/// the generic handler marker with the target request type as its first type
/// argument. Matching is exact source text, not semantic type identity, so
/// `Foo`, `Ns.Foo` and `Foo<T>` are all distinct targets.
pub struct HandlerResolver {
    parser: CSharpParser,
}

impl HandlerResolver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: CSharpParser::new()?,
        })
    }

    /// First match across `files` in scan order, then document order within a
    /// file. A candidate that fails to parse is skipped with a warning and
    /// never aborts the scan.
    pub fn resolve(
        &mut self,
        target: &str,
        marker: &str,
        files: &[SourceFile],
    ) -> Option<HandlerLocation> {
        for file in files {
            let tree = match self.parser.parse(&file.text) {
                Some(tree) => tree,
                None => {
                    eprintln!("medloc: Warning: failed to parse {}, skipping", file.path);
                    continue;
                }
            };
            let source = file.text.as_str();
            let found = syntax::first_descendant(tree.root_node(), &mut |node| {
                node.kind() == "class_declaration"
                    && syntax::base_types(node, source).iter().any(|base| {
                        base.is_generic()
                            && base.simple_name == marker
                            && base.type_arguments.first().map(String::as_str) == Some(target)
                    })
            });
            if let Some(node) = found {
                return Some(HandlerLocation {
                    file_path: file.path.clone(),
                    line: syntax::start_line(node),
                });
            }
        }
        None
    }
}
