//! Per-node formatting rules
//!
//! One visitor, dispatched on node kind. Kinds with no dedicated rule
//! fall back to a canonical-spacing walk over their children, so an
//! unhandled node never loses tokens. The discrete policies live here:
//! modifier lists are space-joined, parameter and argument lists break
//! when their flat form exceeds a quarter of the print width, string
//! literals are requoted on demand, semicolons are stripped and
//! re-added per the terminator policy, and bodies put one member per
//! line inside braces.
//!
//! Bare identifiers and literals reach expression positions as plain
//! tokens, not wrapped nodes, so every rule that lays out statements
//! feeds loose tokens through the same spacing walk as node children.

use rowan::NodeOrToken;

use super::format_element::{
    FormatElement, group, hard_line_break, if_group_breaks, join, sequence, soft_line_break,
    soft_line_or_space, space, text, token,
};
use super::{FormatOptions, TrailingComma};
use crate::cst::{ScalaSyntaxElement, ScalaSyntaxKind, ScalaSyntaxNode, ScalaSyntaxToken};

pub struct FormatRules<'a> {
    options: &'a FormatOptions,
}

impl<'a> FormatRules<'a> {
    pub fn new(options: &'a FormatOptions) -> Self {
        Self { options }
    }

    /// Format a whole source file. The result always ends with a line
    /// break.
    pub fn format_root(&self, root: &ScalaSyntaxNode) -> Vec<FormatElement> {
        self.statement_lines(root.children_with_tokens(), self.options.semi)
    }

    fn node(&self, node: &ScalaSyntaxNode) -> FormatElement {
        use ScalaSyntaxKind::*;
        match node.kind() {
            ParamClause => self.param_clause(node),
            ArgumentList => self.argument_list(node),
            TemplateBody => self.braced_statements(node),
            BlockExpr => self.block_expr(node),
            MatchExpr => self.match_expr(node),
            CaseClause => self.case_clause(node),
            Enumerators => self.enumerators(node),
            TypeParam => self.type_param(node),
            BindPattern => self.bind_pattern(node),
            PrefixExpr => self.prefix_expr(node),

            // Compact constructs: punctuation glued, commas and colons
            // canonical
            SimpleType | AppliedType | TypeArgList | TypeParamClause | TupleType
            | WildcardPattern | LiteralPattern | VariablePattern | StableIdPattern
            | ConstructorPattern | TuplePattern | TypedPattern | PatternArgList
            | ParenExpr | TupleExpr | LambdaParams | ImportExpr | ImportSelectors
            | Annotation => self.tight(node),

            // Everything else reads well under the canonical-spacing
            // walk: keywords and binary operators spaced, dots and
            // brackets glued
            _ => self.spaced(node),
        }
    }

    // ---- statement layout ------------------------------------------------

    /// Lay out statements one per line. Semicolons from the source are
    /// stripped; the terminator policy re-adds them. A run of two or
    /// more source newlines between statements keeps one blank line.
    /// A comment on the same line as a statement stays attached to it.
    fn statement_lines<I>(&self, children: I, semi: bool) -> Vec<FormatElement>
    where
        I: Iterator<Item = ScalaSyntaxElement>,
    {
        let mut out = Vec::new();
        let mut line = Joiner::default();
        let mut line_has_code = false;
        let mut newlines = 0usize;
        let mut prev: Option<ScalaSyntaxKind> = None;

        for child in children {
            match child.kind() {
                ScalaSyntaxKind::Whitespace
                | ScalaSyntaxKind::Eof
                | ScalaSyntaxKind::LBrace
                | ScalaSyntaxKind::RBrace => continue,
                ScalaSyntaxKind::Newline => {
                    newlines += 1;
                    continue;
                }
                ScalaSyntaxKind::Semicolon => {
                    newlines = newlines.max(1);
                    continue;
                }
                _ => {}
            }

            // Trailing comment on the same line as the statement
            if child.kind().is_comment() && line_has_code && newlines == 0 {
                if let NodeOrToken::Token(t) = child {
                    if semi {
                        line.push(token(";"));
                    }
                    line.space();
                    line.push(self.token_text(&t));
                    // Terminator already placed for this line
                    line_has_code = false;
                }
                continue;
            }

            if !line.is_empty() && newlines > 0 {
                if semi && line_has_code {
                    line.push(token(";"));
                }
                out.push(line.finish());
                out.push(hard_line_break());
                line = Joiner::default();
                line_has_code = false;
                prev = None;
                if newlines >= 2 {
                    out.push(hard_line_break());
                }
            }
            newlines = 0;

            match child {
                NodeOrToken::Token(t) => {
                    if t.kind().is_comment() {
                        line.push(self.token_text(&t));
                    } else {
                        self.spaced_token(&mut line, &t, prev);
                        prev = Some(t.kind());
                        line_has_code = true;
                    }
                }
                NodeOrToken::Node(n) => {
                    if wants_leading_space(n.kind()) {
                        line.space();
                    }
                    line.push(self.node(&n));
                    prev = None;
                    line_has_code = true;
                }
            }
        }
        if !line.is_empty() {
            if semi && line_has_code {
                line.push(token(";"));
            }
            out.push(line.finish());
            out.push(hard_line_break());
        }
        out
    }

    /// `{ members }` with one member per line, or `{}` when empty
    fn braced_statements(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let interior = node.children_with_tokens().filter(|el| {
            !matches!(el.kind(), ScalaSyntaxKind::LBrace | ScalaSyntaxKind::RBrace)
        });
        let lines = self.statement_lines(interior, self.options.semi);
        if lines.is_empty() {
            return token("{}");
        }
        let mut out = vec![token("{"), FormatElement::Indent, hard_line_break()];
        out.extend(lines);
        out.push(FormatElement::Dedent);
        out.push(token("}"));
        sequence(out)
    }

    fn block_expr(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let cases: Vec<FormatElement> = node
            .children()
            .filter(|n| n.kind() == ScalaSyntaxKind::CaseClause)
            .map(|n| self.node(&n))
            .collect();
        if cases.is_empty() {
            self.braced_statements(node)
        } else {
            self.case_braces(cases)
        }
    }

    fn case_braces(&self, cases: Vec<FormatElement>) -> FormatElement {
        if cases.is_empty() {
            return token("{}");
        }
        let mut out = vec![token("{"), FormatElement::Indent];
        for case in cases {
            out.push(hard_line_break());
            out.push(case);
        }
        out.push(FormatElement::Dedent);
        out.push(hard_line_break());
        out.push(token("}"));
        sequence(out)
    }

    // ---- control constructs ----------------------------------------------

    /// `scrutinee match { cases }`. The scrutinee may be a bare token.
    fn match_expr(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let mut head = Joiner::default();
        let mut prev: Option<ScalaSyntaxKind> = None;
        let mut cases = Vec::new();
        let mut seen_match = false;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Token(t) => match t.kind() {
                    ScalaSyntaxKind::Whitespace
                    | ScalaSyntaxKind::Newline
                    | ScalaSyntaxKind::Eof
                    | ScalaSyntaxKind::LBrace
                    | ScalaSyntaxKind::RBrace => {}
                    ScalaSyntaxKind::MatchKw => {
                        head.space();
                        head.push(token("match"));
                        seen_match = true;
                    }
                    _ if !seen_match => {
                        self.spaced_token(&mut head, &t, prev);
                        prev = Some(t.kind());
                    }
                    _ => {}
                },
                NodeOrToken::Node(n) => {
                    if n.kind() == ScalaSyntaxKind::CaseClause {
                        cases.push(self.node(&n));
                    } else {
                        head.push(self.node(&n));
                        prev = None;
                    }
                }
            }
        }

        sequence(vec![head.finish(), space(), self.case_braces(cases)])
    }

    /// `case pattern if guard => body`, body on the same line when it
    /// is a single statement
    fn case_clause(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let mut header = Joiner::default();
        let mut seen_arrow = false;
        let mut body: Vec<FormatElement> = Vec::new();
        let mut current = Joiner::default();
        let mut prev: Option<ScalaSyntaxKind> = None;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Token(t) => {
                    let kind = t.kind();
                    match kind {
                        ScalaSyntaxKind::Whitespace | ScalaSyntaxKind::Eof => {}
                        ScalaSyntaxKind::Newline | ScalaSyntaxKind::Semicolon => {
                            if seen_arrow && !current.is_empty() {
                                body.push(current.finish());
                                current = Joiner::default();
                                prev = None;
                            }
                        }
                        ScalaSyntaxKind::Arrow if !seen_arrow => {
                            header.space();
                            header.push(token("=>"));
                            seen_arrow = true;
                            prev = None;
                        }
                        _ if seen_arrow => {
                            self.spaced_token(&mut current, &t, prev);
                            prev = Some(kind);
                        }
                        _ => {
                            self.spaced_token(&mut header, &t, prev);
                            prev = Some(kind);
                        }
                    }
                }
                NodeOrToken::Node(n) => {
                    if seen_arrow {
                        current.push(self.node(&n));
                    } else {
                        if n.kind() == ScalaSyntaxKind::Guard {
                            header.space();
                        }
                        header.push(self.node(&n));
                    }
                    prev = None;
                }
            }
        }
        if !current.is_empty() {
            body.push(current.finish());
        }

        match body.len() {
            0 => header.finish(),
            1 => {
                let mut out = header;
                out.space();
                out.push(body.into_iter().next().unwrap_or_else(|| sequence(vec![])));
                out.finish()
            }
            _ => {
                let mut out = vec![header.finish(), FormatElement::Indent];
                for statement in body {
                    out.push(hard_line_break());
                    out.push(statement);
                }
                out.push(FormatElement::Dedent);
                sequence(out)
            }
        }
    }

    /// Generators and guards joined with `;` on one line
    fn enumerators(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let items: Vec<FormatElement> = node.children().map(|n| self.node(&n)).collect();
        join(items, sequence(vec![token(";"), space()]))
    }

    // ---- breakable lists -------------------------------------------------

    fn param_clause(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let prefix = node
            .children_with_tokens()
            .filter_map(|el| el.into_token())
            .find_map(|t| match t.kind() {
                ScalaSyntaxKind::UsingKw => Some("using"),
                ScalaSyntaxKind::ImplicitKw => Some("implicit"),
                _ => None,
            });
        let items: Vec<FormatElement> = node
            .children()
            .filter(|n| n.kind() == ScalaSyntaxKind::Param)
            .map(|n| self.node(&n))
            .collect();
        self.delimited_list(prefix, items)
    }

    /// Arguments are the runs of children between commas; this keeps
    /// bare-token arguments such as the vararg splice `xs: _*` intact.
    fn argument_list(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let mut items: Vec<FormatElement> = Vec::new();
        let mut current = Joiner::default();
        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Token(t) => match t.kind() {
                    ScalaSyntaxKind::LParen | ScalaSyntaxKind::RParen => {}
                    ScalaSyntaxKind::Comma => {
                        if !current.is_empty() {
                            items.push(current.finish());
                            current = Joiner::default();
                        }
                    }
                    _ => self.tight_token(&mut current, &t),
                },
                NodeOrToken::Node(n) => current.push(self.node(&n)),
            }
        }
        if !current.is_empty() {
            items.push(current.finish());
        }
        self.delimited_list(None, items)
    }

    /// A parenthesized list prints flat when its joined form fits a
    /// quarter of the print width, otherwise one element per line. The
    /// flat form is still a group, so a list narrow enough for the
    /// quarter-width rule can break anyway when it starts deep inside
    /// an already long line.
    fn delimited_list(
        &self,
        prefix: Option<&'static str>,
        items: Vec<FormatElement>,
    ) -> FormatElement {
        if items.is_empty() {
            return match prefix {
                Some(word) => sequence(vec![token("("), token(word), token(")")]),
                None => token("()"),
            };
        }

        let trailing_comma = match self.options.trailing_comma {
            TrailingComma::None => false,
            TrailingComma::Multiline | TrailingComma::All => true,
        };

        let joined = join(items.clone(), sequence(vec![token(","), space()]));
        let budget = self.options.print_width / 4;
        let fits_fraction = joined.flat_width().is_some_and(|w| w <= budget);
        let count = items.len();

        if fits_fraction {
            let mut out = vec![token("(")];
            if let Some(word) = prefix {
                out.push(token(word));
                out.push(space());
            }
            out.push(FormatElement::Indent);
            out.push(soft_line_break());
            for (idx, item) in items.into_iter().enumerate() {
                out.push(item);
                if idx + 1 < count {
                    out.push(token(","));
                    out.push(soft_line_or_space());
                }
            }
            if trailing_comma {
                out.push(if_group_breaks(vec![token(",")]));
            }
            out.push(FormatElement::Dedent);
            out.push(soft_line_break());
            out.push(token(")"));
            group(out)
        } else {
            let mut out = vec![token("(")];
            if let Some(word) = prefix {
                out.push(token(word));
            }
            out.push(FormatElement::Indent);
            for (idx, item) in items.into_iter().enumerate() {
                out.push(hard_line_break());
                out.push(item);
                if idx + 1 < count || trailing_comma {
                    out.push(token(","));
                }
            }
            out.push(FormatElement::Dedent);
            out.push(hard_line_break());
            out.push(token(")"));
            sequence(out)
        }
    }

    // ---- small custom rules ----------------------------------------------

    fn type_param(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let mut j = Joiner::default();
        let mut first = true;
        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Token(t) => {
                    let kind = t.kind();
                    if kind.is_trivia() {
                        continue;
                    }
                    match kind {
                        // Leading variance annotation glues to the name
                        ScalaSyntaxKind::OpIdent if first => j.push(self.token_text(&t)),
                        ScalaSyntaxKind::Subtype | ScalaSyntaxKind::Supertype => {
                            j.space();
                            j.push(self.token_text(&t));
                            j.space();
                        }
                        ScalaSyntaxKind::Colon => {
                            j.push(token(":"));
                            j.space();
                        }
                        _ => j.push(self.token_text(&t)),
                    }
                    first = false;
                }
                NodeOrToken::Node(n) => {
                    j.push(self.node(&n));
                    first = false;
                }
            }
        }
        j.finish()
    }

    fn bind_pattern(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let mut j = Joiner::default();
        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Token(t) => {
                    if t.kind() == ScalaSyntaxKind::At {
                        j.space();
                        j.push(token("@"));
                        j.space();
                    } else if !t.kind().is_trivia() {
                        j.push(self.token_text(&t));
                    }
                }
                NodeOrToken::Node(n) => j.push(self.node(&n)),
            }
        }
        j.finish()
    }

    fn prefix_expr(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let mut j = Joiner::default();
        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Token(t) if !t.kind().is_trivia() => j.push(self.token_text(&t)),
                NodeOrToken::Token(_) => {}
                NodeOrToken::Node(n) => j.push(self.node(&n)),
            }
        }
        j.finish()
    }

    // ---- the two generic walks -------------------------------------------

    /// Canonical-spacing walk: keywords and binary operators are
    /// surrounded by spaces, commas and colons get a trailing space,
    /// dots and brackets glue to their neighbors.
    fn spaced(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let mut j = Joiner::default();
        let mut prev: Option<ScalaSyntaxKind> = None;
        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Token(t) => {
                    let kind = t.kind();
                    if matches!(
                        kind,
                        ScalaSyntaxKind::Whitespace
                            | ScalaSyntaxKind::Newline
                            | ScalaSyntaxKind::Eof
                    ) {
                        continue;
                    }
                    self.spaced_token(&mut j, &t, prev);
                    if !kind.is_comment() {
                        prev = Some(kind);
                    }
                }
                NodeOrToken::Node(n) => {
                    if wants_leading_space(n.kind()) {
                        j.space();
                    }
                    j.push(self.node(&n));
                    prev = None;
                }
            }
        }
        j.finish()
    }

    fn spaced_token(&self, j: &mut Joiner, t: &ScalaSyntaxToken, prev: Option<ScalaSyntaxKind>) {
        use ScalaSyntaxKind::*;
        match t.kind() {
            Whitespace | Newline | Eof => {}
            CommentLine | CommentBlock => {
                j.space();
                j.push(self.token_text(t));
                j.space();
            }
            Semicolon => {}
            Comma => {
                j.cancel_space();
                j.push(token(","));
                j.space();
            }
            Colon => {
                j.push(token(":"));
                j.space();
            }
            Dot => {
                j.cancel_space();
                j.push(token("."));
                j.glue_next();
            }
            LBracket => {
                j.cancel_space();
                j.push(token("["));
                j.glue_next();
            }
            RBracket => {
                j.cancel_space();
                j.push(token("]"));
            }
            LParen => {
                j.push(token("("));
                j.glue_next();
            }
            RParen => {
                j.cancel_space();
                j.push(token(")"));
                j.space();
            }
            LBrace => {
                j.space();
                j.push(token("{"));
                j.space();
            }
            RBrace => {
                j.space();
                j.push(token("}"));
                j.space();
            }
            // `def +` and the `_*` splice glue their operator
            OpIdent if matches!(prev, Some(DefKw) | Some(Underscore)) => {
                j.push(self.token_text(t));
            }
            kind if is_binary_operator(kind) => {
                j.space();
                j.push(self.token_text(t));
                j.space();
            }
            _ if is_keyword_token(t) => {
                j.space();
                j.push(self.token_text(t));
                j.space();
            }
            _ => j.push(self.token_text(t)),
        }
    }

    /// Compact walk for types, patterns, tuples and import trees:
    /// everything glues except commas, colons and the few spaced
    /// operators that can occur inside these constructs.
    fn tight(&self, node: &ScalaSyntaxNode) -> FormatElement {
        let mut j = Joiner::default();
        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Token(t) => self.tight_token(&mut j, &t),
                NodeOrToken::Node(n) => j.push(self.node(&n)),
            }
        }
        j.finish()
    }

    fn tight_token(&self, j: &mut Joiner, t: &ScalaSyntaxToken) {
        use ScalaSyntaxKind::*;
        match t.kind() {
            Whitespace | Newline | Eof | Semicolon => {}
            CommentLine | CommentBlock => {
                j.space();
                j.push(self.token_text(t));
                j.space();
            }
            Comma => {
                j.cancel_space();
                j.push(token(","));
                j.space();
            }
            Colon => {
                j.push(token(":"));
                j.space();
            }
            Arrow | CtxArrow | LeftArrow | Equals | Subtype | Supertype | Pipe => {
                j.space();
                j.push(self.token_text(t));
                j.space();
            }
            _ => j.push(self.token_text(t)),
        }
    }

    /// Token image, requoted when the quote policy asks for it.
    /// Interpolated and triple-quoted strings keep their quotes.
    fn token_text(&self, t: &ScalaSyntaxToken) -> FormatElement {
        let image = t.text();
        if t.kind() == ScalaSyntaxKind::StringLit && self.options.single_quote {
            return text(&requote_single(image), t.text_range().start());
        }
        text(image, t.text_range().start())
    }
}

/// Node kinds that read as a new word after whatever precedes them
fn wants_leading_space(kind: ScalaSyntaxKind) -> bool {
    use ScalaSyntaxKind::*;
    matches!(
        kind,
        Template
            | TemplateBody
            | DerivesClause
            | BlockExpr
            | CatchClause
            | FinallyClause
            | Guard
            | ClassDef
            | TraitDef
            | ObjectDef
            | EnumDef
            | ExtensionDef
            | GivenDef
            | ValDef
            | VarDef
            | DefDef
            | TypeDef
            | ImportClause
            | ExportClause
    )
}

fn is_binary_operator(kind: ScalaSyntaxKind) -> bool {
    use ScalaSyntaxKind::*;
    kind.is_sbt_assign_op()
        || matches!(
            kind,
            Equals
                | Arrow
                | CtxArrow
                | TypeLambdaArrow
                | LeftArrow
                | Subtype
                | Supertype
                | Pipe
                | Ampersand
                | OpIdent
        )
}

fn is_keyword_token(t: &ScalaSyntaxToken) -> bool {
    ScalaSyntaxKind::from_keyword(t.text()) == Some(t.kind())
}

/// Switch a double-quoted literal to single quotes, re-escaping the
/// interior
fn requote_single(image: &str) -> String {
    if image.len() < 2 {
        return image.to_string();
    }
    let inner = &image[1..image.len() - 1];
    let mut out = String::with_capacity(image.len() + 2);
    out.push('\'');
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => out.push('"'),
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                }
                None => out.push('\\'),
            },
            '\'' => out.push_str("\\'"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

/// Element joiner with canonical single-space separation. A pending
/// space collapses with the automatic space inserted between two
/// word-like neighbors, so no rule ever produces a double space.
#[derive(Default)]
struct Joiner {
    out: Vec<FormatElement>,
    pending_space: bool,
    suppress_space: bool,
    last_word: bool,
}

impl Joiner {
    fn push(&mut self, element: FormatElement) {
        if element.is_empty() {
            return;
        }
        let starts_word = first_char(&element).is_some_and(is_word_char);
        if (self.pending_space || (self.last_word && starts_word)) && !self.out.is_empty() {
            self.out.push(FormatElement::Space);
        }
        self.pending_space = false;
        self.suppress_space = false;
        self.last_word = last_char(&element).is_some_and(is_word_char);
        self.out.push(element);
    }

    fn space(&mut self) {
        if !self.suppress_space {
            self.pending_space = true;
        }
    }

    fn cancel_space(&mut self) {
        self.pending_space = false;
    }

    /// Ignore the next space request; used after `.` and `[`
    fn glue_next(&mut self) {
        self.suppress_space = true;
    }

    fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    fn finish(self) -> FormatElement {
        sequence(self.out)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn first_char(element: &FormatElement) -> Option<char> {
    match element {
        FormatElement::Token(s) => s.chars().next(),
        FormatElement::Text { text, .. } => text.chars().next(),
        FormatElement::Space | FormatElement::SoftLineOrSpace => Some(' '),
        FormatElement::HardLineBreak => Some('\n'),
        FormatElement::SoftLineBreak
        | FormatElement::Indent
        | FormatElement::Dedent
        | FormatElement::IfGroupBreaks(_) => None,
        FormatElement::Group(elements) | FormatElement::Sequence(elements) => {
            elements.iter().find_map(first_char)
        }
    }
}

fn last_char(element: &FormatElement) -> Option<char> {
    match element {
        FormatElement::Token(s) => s.chars().last(),
        FormatElement::Text { text, .. } => text.chars().last(),
        FormatElement::Space | FormatElement::SoftLineOrSpace => Some(' '),
        FormatElement::HardLineBreak => Some('\n'),
        FormatElement::SoftLineBreak
        | FormatElement::Indent
        | FormatElement::Dedent
        | FormatElement::IfGroupBreaks(_) => None,
        FormatElement::Group(elements) | FormatElement::Sequence(elements) => {
            elements.iter().rev().find_map(last_char)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::parser::parse_source;
    use crate::formatter::printer::Printer;

    fn format_with(source: &str, options: &FormatOptions) -> String {
        let parse = parse_source(source);
        assert!(parse.is_ok(), "{source}: {:?}", parse.errors);
        let elements = FormatRules::new(options).format_root(&parse.root);
        Printer::new(options.printer_options())
            .print(&elements)
            .unwrap()
    }

    fn format(source: &str) -> String {
        format_with(source, &FormatOptions::default())
    }

    #[test]
    fn test_val_spacing_normalized() {
        assert_eq!(format("val x=42"), "val x = 42\n");
    }

    #[test]
    fn test_wide_param_clause_breaks() {
        assert_eq!(
            format("class Person(name:String,age:Int)"),
            "class Person(\n  name: String,\n  age: Int\n)\n"
        );
    }

    #[test]
    fn test_narrow_param_clause_stays_flat() {
        assert_eq!(format("class Box(x:Int)"), "class Box(x: Int)\n");
    }

    #[test]
    fn test_trailing_comma_multiline() {
        let options = FormatOptions {
            trailing_comma: TrailingComma::Multiline,
            ..FormatOptions::default()
        };
        assert_eq!(
            format_with("class Person(name:String,age:Int)", &options),
            "class Person(\n  name: String,\n  age: Int,\n)\n"
        );
        // Flat lists never take a trailing comma
        assert_eq!(
            format_with("class Box(x:Int)", &options),
            "class Box(x: Int)\n"
        );
    }

    #[test]
    fn test_semicolon_policy() {
        let options = FormatOptions {
            semi: true,
            ..FormatOptions::default()
        };
        assert_eq!(
            format_with("val a = 1\nval b = 2", &options),
            "val a = 1;\nval b = 2;\n"
        );
        // Existing terminators are stripped first, not doubled
        assert_eq!(format_with("val a = 1;", &options), "val a = 1;\n");
        assert_eq!(format("val a = 1;"), "val a = 1\n");
    }

    #[test]
    fn test_single_quote_policy() {
        let options = FormatOptions {
            single_quote: true,
            ..FormatOptions::default()
        };
        assert_eq!(format_with("val s = \"hi\"", &options), "val s = 'hi'\n");
        // Interpolated strings keep their quotes
        let out = format_with("val s = s\"hi $name\"", &options);
        assert!(out.contains("s\"hi $name\""), "{out}");
    }

    #[test]
    fn test_requote_escapes() {
        assert_eq!(requote_single("\"it's\""), "'it\\'s'");
        assert_eq!(requote_single("\"say \\\"hi\\\"\""), "'say \"hi\"'");
    }

    #[test]
    fn test_modifier_list_space_joined() {
        assert_eq!(
            format("final  sealed   abstract class A"),
            "final sealed abstract class A\n"
        );
    }

    #[test]
    fn test_blank_lines_collapse_to_one() {
        assert_eq!(
            format("val a = 1\n\n\n\nval b = 2"),
            "val a = 1\n\nval b = 2\n"
        );
    }

    #[test]
    fn test_empty_body_prints_closed_braces() {
        assert_eq!(format("object Empty { }"), "object Empty {}\n");
    }

    #[test]
    fn test_body_members_one_per_line() {
        assert_eq!(
            format("object A { val x = 1; val y = 2 }"),
            "object A {\n  val x = 1\n  val y = 2\n}\n"
        );
    }

    #[test]
    fn test_if_else_layout() {
        assert_eq!(format("if(x>0)a else b"), "if (x > 0) a else b\n");
    }

    #[test]
    fn test_match_layout() {
        assert_eq!(
            format("x match { case 1 => a case _ => b }"),
            "x match {\n  case 1 => a\n  case _ => b\n}\n"
        );
    }

    #[test]
    fn test_for_yield_layout() {
        assert_eq!(
            format("for (i <- xs if i > 0) yield i * 2"),
            "for (i <- xs; if i > 0) yield i * 2\n"
        );
    }

    #[test]
    fn test_def_with_result_type() {
        assert_eq!(
            format("def add(a:Int,b:Int):Int = a+b"),
            "def add(a: Int, b: Int): Int = a + b\n"
        );
    }

    #[test]
    fn test_operator_method_name_glues() {
        assert_eq!(
            format("def +(other: V): V = plus(other)"),
            "def +(other: V): V = plus(other)\n"
        );
    }

    #[test]
    fn test_extends_and_derives() {
        assert_eq!(
            format("case class C(x:Int) extends B derives Eq, Show"),
            "case class C(x: Int) extends B derives Eq, Show\n"
        );
    }

    #[test]
    fn test_import_selectors() {
        assert_eq!(
            format("import  scala.collection.{Map,Seq}"),
            "import scala.collection.{Map, Seq}\n"
        );
        assert_eq!(
            format("import java.util.{List => JList}"),
            "import java.util.{List => JList}\n"
        );
    }

    #[test]
    fn test_sbt_assignment() {
        assert_eq!(format("name := \"my-project\""), "name := \"my-project\"\n");
    }

    #[test]
    fn test_select_chain_collapses_to_one_line() {
        assert_eq!(
            format("xs\n  .map(f)\n  .filter(g)"),
            "xs.map(f).filter(g)\n"
        );
    }

    #[test]
    fn test_lambda_layouts() {
        assert_eq!(format("x=>x*2"), "x => x * 2\n");
        assert_eq!(format("(a,b)=>a+b"), "(a, b) => a + b\n");
    }

    #[test]
    fn test_vararg_splice_argument() {
        assert_eq!(format("f(xs: _*)"), "f(xs: _*)\n");
    }

    #[test]
    fn test_line_comment_stays_attached() {
        assert_eq!(
            format("val x = 1 // answer\nval y = 2"),
            "val x = 1 // answer\nval y = 2\n"
        );
    }

    #[test]
    fn test_own_line_comment() {
        assert_eq!(format("// header\nval x = 1"), "// header\nval x = 1\n");
    }
}
