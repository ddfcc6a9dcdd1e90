//! Definition productions: class, object, trait, val, var, def, type
//!
//! Annotations and modifiers are collected first into a `Modifiers`
//! node at a checkpoint, then the definition keyword selects the
//! production and the whole prefix is wrapped into the definition node
//! retroactively. The Scala 3 definitions (enum, extension, given)
//! share the dispatch but live in their own module.

use rowan::Checkpoint;

use super::Parser;
use crate::cst::ScalaSyntaxKind;

impl Parser<'_> {
    /// Entry point for any definition position. The caller has already
    /// established (via `at_definition_start`) that a definition
    /// keyword is reachable through the modifier prefix.
    pub(crate) fn parse_definition(&mut self) {
        let cp = self.builder.checkpoint();
        self.parse_modifiers();
        self.consume_trivia();

        match self.current_kind() {
            ScalaSyntaxKind::ClassKw => self.parse_class_like(cp, ScalaSyntaxKind::ClassDef),
            ScalaSyntaxKind::TraitKw => self.parse_class_like(cp, ScalaSyntaxKind::TraitDef),
            ScalaSyntaxKind::ObjectKw => self.parse_object_def(cp),
            ScalaSyntaxKind::EnumKw => self.parse_enum_def(cp),
            ScalaSyntaxKind::ExtensionKw => self.parse_extension_def(cp),
            ScalaSyntaxKind::GivenKw => self.parse_given_def(cp),
            ScalaSyntaxKind::ValKw => self.parse_val_like(cp, ScalaSyntaxKind::ValDef),
            ScalaSyntaxKind::VarKw => self.parse_val_like(cp, ScalaSyntaxKind::VarDef),
            ScalaSyntaxKind::DefKw => self.parse_def_def(cp),
            ScalaSyntaxKind::TypeKw => self.parse_type_def(cp),
            _ => self.error("definition"),
        }
    }

    /// Annotations and modifier keywords in source order, wrapped in a
    /// `Modifiers` node when any are present.
    fn parse_modifiers(&mut self) {
        let has_any = self.nth_kind(0) == ScalaSyntaxKind::At
            || (self.nth_kind(0).is_modifier() && self.modifier_applies(0));
        if !has_any {
            return;
        }

        self.builder.start_node(ScalaSyntaxKind::Modifiers);
        loop {
            match self.nth_kind(0) {
                ScalaSyntaxKind::At => {
                    self.consume_trivia();
                    self.parse_annotation();
                }
                ScalaSyntaxKind::CaseKw
                    if matches!(
                        self.nth_kind(1),
                        ScalaSyntaxKind::ClassKw | ScalaSyntaxKind::ObjectKw
                    ) =>
                {
                    self.consume_trivia();
                    self.bump();
                }
                ScalaSyntaxKind::PrivateKw | ScalaSyntaxKind::ProtectedKw => {
                    self.consume_trivia();
                    self.bump();
                    // Access qualifier, e.g. `private[util]`
                    if self.at(ScalaSyntaxKind::LBracket) {
                        self.bump();
                        self.consume_trivia();
                        if self.current_kind().is_identifier()
                            || self.at(ScalaSyntaxKind::ThisKw)
                        {
                            self.bump();
                        }
                        self.consume_trivia();
                        self.expect(ScalaSyntaxKind::RBracket, "']'");
                    }
                }
                kind if kind.is_modifier() && kind != ScalaSyntaxKind::CaseKw => {
                    self.consume_trivia();
                    self.bump();
                }
                _ => break,
            }
            if self.failed() {
                break;
            }
        }
        self.builder.finish_node();
    }

    fn modifier_applies(&self, n: usize) -> bool {
        if self.nth_kind(n) != ScalaSyntaxKind::CaseKw {
            return true;
        }
        matches!(
            self.nth_kind(n + 1),
            ScalaSyntaxKind::ClassKw | ScalaSyntaxKind::ObjectKw
        )
    }

    /// `@Name` or `@Name(args)`
    fn parse_annotation(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::Annotation);
        self.bump(); // @
        self.consume_trivia();
        if self.current_kind().is_identifier() {
            self.bump();
            while self.nth_kind(0) == ScalaSyntaxKind::Dot && self.nth_kind(1).is_identifier() {
                self.consume_trivia();
                self.bump();
                self.consume_trivia();
                self.bump();
            }
        } else {
            self.error("annotation name");
        }
        if self.at(ScalaSyntaxKind::LParen) {
            self.parse_argument_list();
        }
        self.builder.finish_node();
    }

    fn parse_class_like(&mut self, cp: Checkpoint, kind: ScalaSyntaxKind) {
        self.builder.start_node_at(cp, kind);
        self.bump(); // class / trait
        self.consume_trivia();
        if self.current_kind().is_identifier() {
            self.bump();
        } else {
            self.error("type name");
        }
        if self.at(ScalaSyntaxKind::LBracket) && !self.failed() {
            self.parse_type_param_clause();
        }
        while self.nth_kind(0) == ScalaSyntaxKind::LParen
            && !self.newline_before_next()
            && !self.failed()
        {
            self.consume_trivia();
            self.parse_param_clause();
        }
        self.parse_template_opt();
        self.builder.finish_node();
    }

    fn parse_object_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, ScalaSyntaxKind::ObjectDef);
        self.bump(); // object
        self.consume_trivia();
        if self.current_kind().is_identifier() {
            self.bump();
        } else {
            self.error("object name");
        }
        self.parse_template_opt();
        self.builder.finish_node();
    }

    fn parse_val_like(&mut self, cp: Checkpoint, kind: ScalaSyntaxKind) {
        self.builder.start_node_at(cp, kind);
        self.bump(); // val / var
        self.consume_trivia();
        self.parse_pattern();
        if self.failed() {
            self.builder.finish_node();
            return;
        }
        self.consume_trivia();
        if self.at(ScalaSyntaxKind::Colon) {
            self.bump();
            self.parse_type();
            self.consume_trivia();
        }
        if self.at(ScalaSyntaxKind::Equals) {
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_expression();
        }
        self.builder.finish_node();
    }

    fn parse_def_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, ScalaSyntaxKind::DefDef);
        self.bump(); // def
        self.consume_trivia();
        // Method names include operator identifiers, e.g. `def +`
        if self.current_kind().is_identifier() || self.at(ScalaSyntaxKind::OpIdent) {
            self.bump();
        } else {
            self.error("method name");
        }
        if self.at(ScalaSyntaxKind::LBracket) && !self.failed() {
            self.parse_type_param_clause();
        }
        while self.nth_kind(0) == ScalaSyntaxKind::LParen
            && !self.newline_before_next()
            && !self.failed()
        {
            self.consume_trivia();
            self.parse_param_clause();
        }
        self.consume_trivia();
        if self.at(ScalaSyntaxKind::Colon) {
            self.bump();
            self.parse_type();
            self.consume_trivia();
        }
        if self.at(ScalaSyntaxKind::Equals) {
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_expression();
        }
        self.builder.finish_node();
    }

    fn parse_type_def(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, ScalaSyntaxKind::TypeDef);
        self.bump(); // type
        self.consume_trivia();
        if self.current_kind().is_identifier() {
            self.bump();
        } else {
            self.error("type name");
        }
        if self.at(ScalaSyntaxKind::LBracket) && !self.failed() {
            self.parse_type_param_clause();
        }
        loop {
            self.consume_trivia();
            if self.at(ScalaSyntaxKind::Subtype) || self.at(ScalaSyntaxKind::Supertype) {
                self.bump();
                self.parse_type();
            } else {
                break;
            }
        }
        if self.at(ScalaSyntaxKind::Equals) {
            self.bump();
            self.parse_type();
        }
        self.builder.finish_node();
    }

    /// `(name: Type = default, ...)`, including `using`/`implicit`
    /// clauses and `val`/`var` class parameters
    pub(crate) fn parse_param_clause(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::ParamClause);
        self.expect(ScalaSyntaxKind::LParen, "'('");
        self.consume_trivia_and_newlines();
        if self.at(ScalaSyntaxKind::UsingKw) || self.at(ScalaSyntaxKind::ImplicitKw) {
            self.bump();
            self.consume_trivia_and_newlines();
        }
        while !self.at(ScalaSyntaxKind::RParen) && !self.at_end() && !self.failed() {
            self.parse_param();
            self.consume_trivia_and_newlines();
            if self.at(ScalaSyntaxKind::Comma) {
                self.bump();
                self.consume_trivia_and_newlines();
            } else {
                break;
            }
        }
        self.expect(ScalaSyntaxKind::RParen, "')'");
        self.builder.finish_node();
    }

    fn parse_param(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::Param);
        self.consume_trivia();
        while self.current_kind().is_modifier()
            || self.at(ScalaSyntaxKind::ValKw)
            || self.at(ScalaSyntaxKind::VarKw)
        {
            self.bump();
            self.consume_trivia();
        }
        if self.current_kind().is_identifier() || self.at(ScalaSyntaxKind::Underscore) {
            self.bump();
        } else {
            self.error("parameter name");
            self.builder.finish_node();
            return;
        }
        if self.nth_kind(0) == ScalaSyntaxKind::Colon {
            self.consume_trivia();
            self.bump();
            self.parse_type();
        }
        if self.nth_kind(0) == ScalaSyntaxKind::Equals && !self.newline_before_next() {
            self.consume_trivia();
            self.bump();
            self.consume_trivia_and_newlines();
            self.parse_expression();
        }
        self.builder.finish_node();
    }

    /// Optional `extends`/`derives` clauses and braced body after a
    /// class/object/trait header
    pub(crate) fn parse_template_opt(&mut self) {
        if self.nth_kind(0) == ScalaSyntaxKind::ExtendsKw && !self.failed() {
            self.builder.start_node(ScalaSyntaxKind::Template);
            self.consume_trivia_and_newlines();
            self.bump(); // extends
            self.consume_trivia_and_newlines();
            self.parse_parent_constructor();
            while matches!(
                self.nth_kind(0),
                ScalaSyntaxKind::WithKw | ScalaSyntaxKind::Comma
            ) && !self.failed()
            {
                self.consume_trivia_and_newlines();
                self.bump();
                self.consume_trivia_and_newlines();
                self.parse_parent_constructor();
            }
            self.builder.finish_node();
        }

        if self.nth_kind(0) == ScalaSyntaxKind::DerivesKw && !self.failed() {
            self.builder.start_node(ScalaSyntaxKind::DerivesClause);
            self.consume_trivia_and_newlines();
            self.bump(); // derives
            self.consume_trivia();
            self.parse_type();
            while self.nth_kind(0) == ScalaSyntaxKind::Comma && !self.failed() {
                self.consume_trivia();
                self.bump();
                self.consume_trivia_and_newlines();
                self.parse_type();
            }
            self.builder.finish_node();
        }

        if self.nth_kind(0) == ScalaSyntaxKind::LBrace && !self.failed() {
            self.consume_trivia_and_newlines();
            self.parse_template_body();
        }
    }

    /// Parent with optional constructor arguments, e.g.
    /// `extends Base(x)`
    fn parse_parent_constructor(&mut self) {
        self.parse_infix_type();
        if self.at(ScalaSyntaxKind::LParen) && !self.failed() {
            self.parse_argument_list();
        }
    }

    /// `{ member* }` — each member a definition, import/export, or
    /// expression statement
    pub(crate) fn parse_template_body(&mut self) {
        self.builder.start_node(ScalaSyntaxKind::TemplateBody);
        self.expect(ScalaSyntaxKind::LBrace, "'{'");
        loop {
            while self.at_trivia()
                || self.at(ScalaSyntaxKind::Newline)
                || self.at(ScalaSyntaxKind::Semicolon)
            {
                self.bump();
            }
            if self.at(ScalaSyntaxKind::RBrace) || self.at_end() || self.failed() {
                break;
            }
            let before = self.pos;
            match self.current_kind() {
                ScalaSyntaxKind::ImportKw => self.parse_import_clause(),
                ScalaSyntaxKind::ExportKw => self.parse_export_clause(),
                _ if self.at_definition_start() => self.parse_definition(),
                _ => self.parse_expression(),
            }
            if self.pos == before {
                self.error("member");
                break;
            }
        }
        self.expect(ScalaSyntaxKind::RBrace, "'}'");
        self.builder.finish_node();
    }
}

#[cfg(test)]
mod tests {
    use crate::cst::ScalaSyntaxKind;
    use crate::cst::ScalaSyntaxNode;
    use crate::cst::parser::parse_source;

    fn parse_ok(source: &str) -> ScalaSyntaxNode {
        let parse = parse_source(source);
        assert!(parse.is_ok(), "{source}: {:?}", parse.errors);
        assert_eq!(parse.root.text().to_string(), source);
        parse.root
    }

    fn find(root: &ScalaSyntaxNode, kind: ScalaSyntaxKind) -> Option<ScalaSyntaxNode> {
        root.descendants().find(|n| n.kind() == kind)
    }

    #[test]
    fn test_class_with_params() {
        let root = parse_ok("class Person(name: String, age: Int)");
        let class = find(&root, ScalaSyntaxKind::ClassDef).unwrap();
        let clause = class
            .children()
            .find(|n| n.kind() == ScalaSyntaxKind::ParamClause)
            .unwrap();
        let params = clause
            .children()
            .filter(|n| n.kind() == ScalaSyntaxKind::Param)
            .count();
        assert_eq!(params, 2);
    }

    #[test]
    fn test_case_class_modifier() {
        let root = parse_ok("case class Point(x: Int, y: Int)");
        let class = find(&root, ScalaSyntaxKind::ClassDef).unwrap();
        let mods = class
            .children()
            .find(|n| n.kind() == ScalaSyntaxKind::Modifiers)
            .unwrap();
        assert_eq!(mods.text().to_string(), "case");
    }

    #[test]
    fn test_modifier_run_in_source_order() {
        let root = parse_ok("final sealed abstract class Base");
        let mods = find(&root, ScalaSyntaxKind::Modifiers).unwrap();
        assert_eq!(mods.text().to_string(), "final sealed abstract");
    }

    #[test]
    fn test_object_with_body() {
        let root = parse_ok("object Main {\n  val greeting = \"hi\"\n  def run(): Unit = println(greeting)\n}");
        let obj = find(&root, ScalaSyntaxKind::ObjectDef).unwrap();
        let body = obj
            .children()
            .find(|n| n.kind() == ScalaSyntaxKind::TemplateBody)
            .unwrap();
        assert!(body.children().any(|n| n.kind() == ScalaSyntaxKind::ValDef));
        assert!(body.children().any(|n| n.kind() == ScalaSyntaxKind::DefDef));
    }

    #[test]
    fn test_extends_with_chain() {
        let root = parse_ok("class Dog extends Animal with HasLegs");
        let template = find(&root, ScalaSyntaxKind::Template).unwrap();
        assert!(template.text().to_string().contains("with HasLegs"));
    }

    #[test]
    fn test_extends_constructor_arguments() {
        let root = parse_ok("class Labrador(n: String) extends Dog(n)");
        let template = find(&root, ScalaSyntaxKind::Template).unwrap();
        assert!(
            template
                .descendants()
                .any(|n| n.kind() == ScalaSyntaxKind::ArgumentList)
        );
    }

    #[test]
    fn test_derives_clause() {
        let root = parse_ok("case class Point(x: Int) derives Eq, Show");
        let derives = find(&root, ScalaSyntaxKind::DerivesClause).unwrap();
        assert_eq!(derives.text().to_string(), "derives Eq, Show");
    }

    #[test]
    fn test_def_with_type_params_and_default() {
        let root = parse_ok("def pad[A](xs: List[A], n: Int = 0): List[A] = xs");
        let def = find(&root, ScalaSyntaxKind::DefDef).unwrap();
        assert!(
            def.children()
                .any(|n| n.kind() == ScalaSyntaxKind::TypeParamClause)
        );
        assert!(
            def.children()
                .any(|n| n.kind() == ScalaSyntaxKind::ParamClause)
        );
    }

    #[test]
    fn test_operator_method_name() {
        parse_ok("def +(other: Vec): Vec = add(other)");
    }

    #[test]
    fn test_val_with_tuple_pattern() {
        let root = parse_ok("val (a, b) = pair");
        let val = find(&root, ScalaSyntaxKind::ValDef).unwrap();
        assert!(
            val.children()
                .any(|n| n.kind() == ScalaSyntaxKind::TuplePattern)
        );
    }

    #[test]
    fn test_var_definition() {
        let root = parse_ok("var counter: Int = 0");
        assert!(find(&root, ScalaSyntaxKind::VarDef).is_some());
    }

    #[test]
    fn test_type_alias() {
        let root = parse_ok("type Row = Map[String, String]");
        let alias = find(&root, ScalaSyntaxKind::TypeDef).unwrap();
        assert!(
            alias
                .descendants()
                .any(|n| n.kind() == ScalaSyntaxKind::AppliedType)
        );
    }

    #[test]
    fn test_annotation_with_arguments() {
        let root = parse_ok("@deprecated(\"use other\") def old(): Unit = ()");
        let ann = find(&root, ScalaSyntaxKind::Annotation).unwrap();
        assert!(
            ann.children()
                .any(|n| n.kind() == ScalaSyntaxKind::ArgumentList)
        );
    }

    #[test]
    fn test_private_with_qualifier() {
        parse_ok("private[util] val secret = 1");
    }

    #[test]
    fn test_using_clause() {
        let root = parse_ok("def render(using ctx: Context): String = ctx.show");
        let clause = find(&root, ScalaSyntaxKind::ParamClause).unwrap();
        assert!(clause.text().to_string().starts_with("(using"));
    }

    #[test]
    fn test_abstract_val_without_initializer() {
        let root = parse_ok("trait Named {\n  val name: String\n}");
        let val = find(&root, ScalaSyntaxKind::ValDef).unwrap();
        assert!(val.text().to_string().contains("name: String"));
    }
}
