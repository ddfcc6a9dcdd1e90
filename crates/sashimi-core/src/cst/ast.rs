//! Typed AST layer over the CST
//!
//! Ergonomic wrappers over raw syntax nodes for the node kinds the
//! formatter and tests interrogate. Each wrapper casts from a
//! `ScalaSyntaxNode` and exposes the children it knows about; the raw
//! node stays reachable through `syntax()`.

use super::{ScalaSyntaxKind, ScalaSyntaxNode, ScalaSyntaxToken};

/// Casting trait for typed wrappers
pub trait AstNode: Sized {
    fn can_cast(kind: ScalaSyntaxKind) -> bool;
    fn cast(node: ScalaSyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &ScalaSyntaxNode;
}

fn child_of_kind(parent: &ScalaSyntaxNode, kind: ScalaSyntaxKind) -> Option<ScalaSyntaxNode> {
    parent.children().find(|n| n.kind() == kind)
}

fn first_identifier(parent: &ScalaSyntaxNode) -> Option<ScalaSyntaxToken> {
    parent
        .children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind().is_identifier())
}

macro_rules! ast_node {
    ($(#[$doc:meta])* $name:ident, $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            syntax: ScalaSyntaxNode,
        }

        impl AstNode for $name {
            fn can_cast(kind: ScalaSyntaxKind) -> bool {
                kind == ScalaSyntaxKind::$kind
            }

            fn cast(node: ScalaSyntaxNode) -> Option<Self> {
                Self::can_cast(node.kind()).then(|| Self { syntax: node })
            }

            fn syntax(&self) -> &ScalaSyntaxNode {
                &self.syntax
            }
        }
    };
}

ast_node!(
    /// Root of every parse
    SourceFile,
    SourceFile
);

impl SourceFile {
    pub fn classes(&self) -> impl Iterator<Item = ClassDef> + '_ {
        self.syntax.children().filter_map(ClassDef::cast)
    }

    pub fn objects(&self) -> impl Iterator<Item = ObjectDef> + '_ {
        self.syntax.children().filter_map(ObjectDef::cast)
    }

    pub fn vals(&self) -> impl Iterator<Item = ValDef> + '_ {
        self.syntax.children().filter_map(ValDef::cast)
    }
}

ast_node!(ClassDef, ClassDef);

impl ClassDef {
    pub fn name(&self) -> Option<String> {
        first_identifier(&self.syntax).map(|t| t.text().to_string())
    }

    pub fn param_clauses(&self) -> impl Iterator<Item = ParamClause> + '_ {
        self.syntax.children().filter_map(ParamClause::cast)
    }

    pub fn body(&self) -> Option<ScalaSyntaxNode> {
        child_of_kind(&self.syntax, ScalaSyntaxKind::TemplateBody)
    }
}

ast_node!(ObjectDef, ObjectDef);

impl ObjectDef {
    pub fn name(&self) -> Option<String> {
        first_identifier(&self.syntax).map(|t| t.text().to_string())
    }

    pub fn body(&self) -> Option<ScalaSyntaxNode> {
        child_of_kind(&self.syntax, ScalaSyntaxKind::TemplateBody)
    }
}

ast_node!(ValDef, ValDef);

impl ValDef {
    /// The bound name for a plain `val x = ...`
    pub fn name(&self) -> Option<String> {
        self.syntax
            .descendants()
            .find(|n| {
                matches!(
                    n.kind(),
                    ScalaSyntaxKind::VariablePattern | ScalaSyntaxKind::TypedPattern
                )
            })
            .and_then(|p| first_identifier(&p))
            .map(|t| t.text().to_string())
    }
}

ast_node!(DefDef, DefDef);

impl DefDef {
    pub fn name(&self) -> Option<String> {
        first_identifier(&self.syntax).map(|t| t.text().to_string())
    }

    pub fn param_clauses(&self) -> impl Iterator<Item = ParamClause> + '_ {
        self.syntax.children().filter_map(ParamClause::cast)
    }
}

ast_node!(ParamClause, ParamClause);

impl ParamClause {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.syntax.children().filter_map(Param::cast)
    }
}

ast_node!(Param, Param);

impl Param {
    pub fn name(&self) -> Option<String> {
        first_identifier(&self.syntax).map(|t| t.text().to_string())
    }

    pub fn type_text(&self) -> Option<String> {
        self.syntax
            .children()
            .find(|n| {
                matches!(
                    n.kind(),
                    ScalaSyntaxKind::SimpleType
                        | ScalaSyntaxKind::AppliedType
                        | ScalaSyntaxKind::FunctionType
                        | ScalaSyntaxKind::ContextFunctionType
                        | ScalaSyntaxKind::TupleType
                        | ScalaSyntaxKind::InfixType
                        | ScalaSyntaxKind::ByNameType
                )
            })
            .map(|n| n.text().to_string())
    }
}

ast_node!(CallExpr, CallExpr);

impl CallExpr {
    pub fn argument_list(&self) -> Option<ArgumentList> {
        self.syntax.children().find_map(ArgumentList::cast)
    }
}

ast_node!(ArgumentList, ArgumentList);

impl ArgumentList {
    pub fn arguments(&self) -> impl Iterator<Item = ScalaSyntaxNode> + '_ {
        self.syntax.children()
    }
}

ast_node!(MatchExpr, MatchExpr);

impl MatchExpr {
    pub fn cases(&self) -> impl Iterator<Item = CaseClause> + '_ {
        self.syntax.children().filter_map(CaseClause::cast)
    }
}

ast_node!(CaseClause, CaseClause);

impl CaseClause {
    pub fn guard(&self) -> Option<ScalaSyntaxNode> {
        child_of_kind(&self.syntax, ScalaSyntaxKind::Guard)
    }
}

ast_node!(Lambda, Lambda);

impl Lambda {
    pub fn params(&self) -> Option<ScalaSyntaxNode> {
        child_of_kind(&self.syntax, ScalaSyntaxKind::LambdaParams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::parser::parse_source;

    fn root(source: &str) -> ScalaSyntaxNode {
        let parse = parse_source(source);
        assert!(parse.is_ok(), "{:?}", parse.errors);
        parse.root
    }

    #[test]
    fn test_class_cast_and_accessors() {
        let root = root("class Person(name: String, age: Int)");
        let file = SourceFile::cast(root).unwrap();
        let class = file.classes().next().unwrap();
        assert_eq!(class.name().as_deref(), Some("Person"));

        let clause = class.param_clauses().next().unwrap();
        let params: Vec<_> = clause.params().collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name().as_deref(), Some("name"));
        assert_eq!(params[0].type_text().as_deref(), Some("String"));
        assert_eq!(params[1].type_text().as_deref(), Some("Int"));
    }

    #[test]
    fn test_val_name_through_pattern() {
        let root = root("val answer = 42");
        let file = SourceFile::cast(root).unwrap();
        let val = file.vals().next().unwrap();
        assert_eq!(val.name().as_deref(), Some("answer"));
    }

    #[test]
    fn test_cast_rejects_other_kinds() {
        let root = root("object Single");
        assert!(ClassDef::cast(root.first_child().unwrap()).is_none());
        assert!(ObjectDef::cast(root.first_child().unwrap()).is_some());
    }

    #[test]
    fn test_match_cases() {
        let root = root("x match { case 1 => a case _ => b }");
        let m = root
            .descendants()
            .find_map(MatchExpr::cast)
            .unwrap();
        assert_eq!(m.cases().count(), 2);
    }
}
