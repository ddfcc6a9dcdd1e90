//! Syntax kinds for the Scala-like CST
//!
//! One closed, priority-ordered set of tags covering trivia, keywords,
//! operators, literals and one node kind per grammar production. The
//! discriminants are grouped in ranges (trivia 0-9, keywords 10-69,
//! literals 70-99, punctuation 100-149, identifiers 150-159, nodes
//! 200-399, special 400+) so raw kinds stay readable in debug output.

/// Syntax kind for every token and node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum ScalaSyntaxKind {
    // Trivia (0-9)
    Whitespace = 0,
    CommentLine = 1,
    CommentBlock = 2,
    Newline = 3,

    // Definition keywords (10-19)
    ClassKw = 10,
    ObjectKw = 11,
    TraitKw = 12,
    EnumKw = 13,
    ExtensionKw = 14,
    GivenKw = 15,
    ValKw = 16,
    VarKw = 17,
    DefKw = 18,
    TypeKw = 19,

    // Statement keywords (20-29)
    PackageKw = 20,
    ImportKw = 21,
    ExportKw = 22,
    IfKw = 23,
    ThenKw = 24,
    ElseKw = 25,
    WhileKw = 26,
    DoKw = 27,
    ForKw = 28,
    YieldKw = 29,

    // Control keywords (30-39)
    MatchKw = 30,
    CaseKw = 31,
    TryKw = 32,
    CatchKw = 33,
    FinallyKw = 34,
    NewKw = 35,
    ReturnKw = 36,
    ThrowKw = 37,
    ExtendsKw = 38,
    WithKw = 39,

    // Clause keywords (40-41)
    DerivesKw = 40,
    UsingKw = 41,

    // Modifier keywords (42-54)
    FinalKw = 42,
    SealedKw = 43,
    AbstractKw = 44,
    OverrideKw = 45,
    ImplicitKw = 46,
    LazyKw = 47,
    PrivateKw = 48,
    ProtectedKw = 49,
    OpenKw = 50,
    InlineKw = 51,
    OpaqueKw = 52,
    TransparentKw = 53,
    InfixKw = 54,

    // Reference keywords (55-57)
    ThisKw = 55,
    SuperKw = 56,
    EndKw = 57,

    // Literals (70-99)
    IntLit = 70,
    FloatLit = 71,
    StringLit = 72,
    TripleStringLit = 73,
    InterpolatedStringLit = 74,
    CharLit = 75,
    TrueKw = 76,
    FalseKw = 77,
    NullKw = 78,

    // Punctuation (100-129)
    LParen = 100,
    RParen = 101,
    LBracket = 102,
    RBracket = 103,
    LBrace = 104,
    RBrace = 105,
    Comma = 106,
    Semicolon = 107,
    Dot = 108,
    Colon = 109,
    Equals = 110,
    Arrow = 111,
    CtxArrow = 112,
    TypeLambdaArrow = 113,
    LeftArrow = 114,
    Subtype = 115,
    Supertype = 116,
    At = 117,
    Hash = 118,
    Underscore = 119,
    Pipe = 120,
    Ampersand = 121,

    // Compound assignment operators (123-129)
    ColonEquals = 123,
    PlusEquals = 124,
    MinusEquals = 125,
    StarEquals = 126,
    SlashEquals = 127,
    PercentEquals = 128,
    PlusPlusEquals = 129,

    // Operator identifiers (130)
    OpIdent = 130,

    // Identifiers (150-159)
    Ident = 150,
    BackquotedIdent = 151,

    // Structure nodes (200-249)
    SourceFile = 200,
    PackageClause = 210,
    ImportClause = 211,
    ExportClause = 212,
    ImportExpr = 213,
    ImportSelectors = 214,
    AssignmentStatement = 215,
    ClassDef = 220,
    ObjectDef = 221,
    TraitDef = 222,
    EnumDef = 223,
    EnumCase = 224,
    ExtensionDef = 225,
    GivenDef = 226,
    ValDef = 227,
    VarDef = 228,
    DefDef = 229,
    TypeDef = 230,
    Modifiers = 231,
    Annotation = 232,
    TypeParamClause = 234,
    TypeParam = 235,
    ParamClause = 236,
    Param = 237,
    Template = 238,
    TemplateBody = 239,
    DerivesClause = 240,

    // Type nodes (250-269)
    SimpleType = 250,
    AppliedType = 251,
    FunctionType = 252,
    ContextFunctionType = 253,
    TypeLambda = 254,
    PolyFunctionType = 255,
    TupleType = 256,
    InfixType = 257,
    WildcardType = 258,
    TypeArgList = 259,
    ByNameType = 260,

    // Pattern nodes (270-289)
    WildcardPattern = 270,
    LiteralPattern = 271,
    VariablePattern = 272,
    StableIdPattern = 273,
    ConstructorPattern = 274,
    TuplePattern = 275,
    TypedPattern = 276,
    AlternativePattern = 277,
    BindPattern = 278,
    PatternArgList = 279,

    // Expression nodes (300-339)
    Lambda = 300,
    LambdaParams = 301,
    BlockExpr = 302,
    IfExpr = 303,
    WhileExpr = 304,
    ForExpr = 305,
    Enumerators = 306,
    Generator = 307,
    Guard = 308,
    MatchExpr = 309,
    CaseClause = 310,
    TryExpr = 311,
    CatchClause = 312,
    FinallyClause = 313,
    NewExpr = 314,
    CallExpr = 315,
    ArgumentList = 316,
    TypeApplyExpr = 317,
    SelectExpr = 318,
    InfixExpr = 319,
    PrefixExpr = 320,
    ParenExpr = 321,
    TupleExpr = 322,
    AssignExpr = 323,
    ReturnExpr = 324,
    ThrowExpr = 325,

    // Special (400+)
    Error = 400,
    Eof = 401,
    Unknown = 402,

    // Tombstone
    Tombstone = 999,
}

impl ScalaSyntaxKind {
    /// Trivia tokens carry no syntactic weight
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            ScalaSyntaxKind::Whitespace
                | ScalaSyntaxKind::CommentLine
                | ScalaSyntaxKind::CommentBlock
                | ScalaSyntaxKind::Newline
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            ScalaSyntaxKind::CommentLine | ScalaSyntaxKind::CommentBlock
        )
    }

    /// Modifier keywords that may prefix a definition
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            ScalaSyntaxKind::FinalKw
                | ScalaSyntaxKind::SealedKw
                | ScalaSyntaxKind::AbstractKw
                | ScalaSyntaxKind::OverrideKw
                | ScalaSyntaxKind::ImplicitKw
                | ScalaSyntaxKind::LazyKw
                | ScalaSyntaxKind::PrivateKw
                | ScalaSyntaxKind::ProtectedKw
                | ScalaSyntaxKind::OpenKw
                | ScalaSyntaxKind::InlineKw
                | ScalaSyntaxKind::OpaqueKw
                | ScalaSyntaxKind::TransparentKw
                | ScalaSyntaxKind::InfixKw
                | ScalaSyntaxKind::CaseKw
        )
    }

    /// Keywords that can open a definition once modifiers are consumed
    pub fn is_definition_keyword(self) -> bool {
        matches!(
            self,
            ScalaSyntaxKind::ClassKw
                | ScalaSyntaxKind::ObjectKw
                | ScalaSyntaxKind::TraitKw
                | ScalaSyntaxKind::EnumKw
                | ScalaSyntaxKind::ExtensionKw
                | ScalaSyntaxKind::GivenKw
                | ScalaSyntaxKind::ValKw
                | ScalaSyntaxKind::VarKw
                | ScalaSyntaxKind::DefKw
                | ScalaSyntaxKind::TypeKw
        )
    }

    /// Literal tokens the literal production accepts
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            ScalaSyntaxKind::IntLit
                | ScalaSyntaxKind::FloatLit
                | ScalaSyntaxKind::StringLit
                | ScalaSyntaxKind::TripleStringLit
                | ScalaSyntaxKind::InterpolatedStringLit
                | ScalaSyntaxKind::CharLit
                | ScalaSyntaxKind::TrueKw
                | ScalaSyntaxKind::FalseKw
                | ScalaSyntaxKind::NullKw
        )
    }

    /// sbt-style assignment operators recognized by the statement gate
    pub fn is_sbt_assign_op(self) -> bool {
        matches!(
            self,
            ScalaSyntaxKind::ColonEquals
                | ScalaSyntaxKind::PlusEquals
                | ScalaSyntaxKind::MinusEquals
                | ScalaSyntaxKind::StarEquals
                | ScalaSyntaxKind::SlashEquals
                | ScalaSyntaxKind::PercentEquals
                | ScalaSyntaxKind::PlusPlusEquals
        )
    }

    /// Tokens that may appear as an infix operator between operands
    pub fn is_infix_operator(self) -> bool {
        matches!(
            self,
            ScalaSyntaxKind::OpIdent | ScalaSyntaxKind::Pipe | ScalaSyntaxKind::Ampersand
        )
    }

    /// Identifier-shaped tokens (plain or backquoted)
    pub fn is_identifier(self) -> bool {
        matches!(
            self,
            ScalaSyntaxKind::Ident | ScalaSyntaxKind::BackquotedIdent
        )
    }

    /// Map a lexed word to its keyword kind, if it is one.
    ///
    /// Keyword matching runs before the generic identifier rule; this
    /// table is the ordered-precedence encoding for word-shaped tokens.
    pub fn from_keyword(word: &str) -> Option<ScalaSyntaxKind> {
        let kind = match word {
            "class" => ScalaSyntaxKind::ClassKw,
            "object" => ScalaSyntaxKind::ObjectKw,
            "trait" => ScalaSyntaxKind::TraitKw,
            "enum" => ScalaSyntaxKind::EnumKw,
            "extension" => ScalaSyntaxKind::ExtensionKw,
            "given" => ScalaSyntaxKind::GivenKw,
            "val" => ScalaSyntaxKind::ValKw,
            "var" => ScalaSyntaxKind::VarKw,
            "def" => ScalaSyntaxKind::DefKw,
            "type" => ScalaSyntaxKind::TypeKw,
            "package" => ScalaSyntaxKind::PackageKw,
            "import" => ScalaSyntaxKind::ImportKw,
            "export" => ScalaSyntaxKind::ExportKw,
            "if" => ScalaSyntaxKind::IfKw,
            "then" => ScalaSyntaxKind::ThenKw,
            "else" => ScalaSyntaxKind::ElseKw,
            "while" => ScalaSyntaxKind::WhileKw,
            "do" => ScalaSyntaxKind::DoKw,
            "for" => ScalaSyntaxKind::ForKw,
            "yield" => ScalaSyntaxKind::YieldKw,
            "match" => ScalaSyntaxKind::MatchKw,
            "case" => ScalaSyntaxKind::CaseKw,
            "try" => ScalaSyntaxKind::TryKw,
            "catch" => ScalaSyntaxKind::CatchKw,
            "finally" => ScalaSyntaxKind::FinallyKw,
            "new" => ScalaSyntaxKind::NewKw,
            "return" => ScalaSyntaxKind::ReturnKw,
            "throw" => ScalaSyntaxKind::ThrowKw,
            "extends" => ScalaSyntaxKind::ExtendsKw,
            "with" => ScalaSyntaxKind::WithKw,
            "derives" => ScalaSyntaxKind::DerivesKw,
            "using" => ScalaSyntaxKind::UsingKw,
            "final" => ScalaSyntaxKind::FinalKw,
            "sealed" => ScalaSyntaxKind::SealedKw,
            "abstract" => ScalaSyntaxKind::AbstractKw,
            "override" => ScalaSyntaxKind::OverrideKw,
            "implicit" => ScalaSyntaxKind::ImplicitKw,
            "lazy" => ScalaSyntaxKind::LazyKw,
            "private" => ScalaSyntaxKind::PrivateKw,
            "protected" => ScalaSyntaxKind::ProtectedKw,
            "open" => ScalaSyntaxKind::OpenKw,
            "inline" => ScalaSyntaxKind::InlineKw,
            "opaque" => ScalaSyntaxKind::OpaqueKw,
            "transparent" => ScalaSyntaxKind::TransparentKw,
            "infix" => ScalaSyntaxKind::InfixKw,
            "this" => ScalaSyntaxKind::ThisKw,
            "super" => ScalaSyntaxKind::SuperKw,
            "end" => ScalaSyntaxKind::EndKw,
            "true" => ScalaSyntaxKind::TrueKw,
            "false" => ScalaSyntaxKind::FalseKw,
            "null" => ScalaSyntaxKind::NullKw,
            _ => return None,
        };
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_covers_modifiers() {
        for word in ["final", "sealed", "implicit", "lazy", "case"] {
            let kind = ScalaSyntaxKind::from_keyword(word).unwrap();
            assert!(kind.is_modifier() || kind == ScalaSyntaxKind::CaseKw);
        }
    }

    #[test]
    fn identifiers_are_not_keywords() {
        assert_eq!(ScalaSyntaxKind::from_keyword("classy"), None);
        assert_eq!(ScalaSyntaxKind::from_keyword("valuation"), None);
        assert_eq!(ScalaSyntaxKind::from_keyword("λ"), None);
    }

    #[test]
    fn sbt_assign_ops_are_closed() {
        assert!(ScalaSyntaxKind::ColonEquals.is_sbt_assign_op());
        assert!(ScalaSyntaxKind::PlusPlusEquals.is_sbt_assign_op());
        assert!(!ScalaSyntaxKind::Equals.is_sbt_assign_op());
        assert!(!ScalaSyntaxKind::Arrow.is_sbt_assign_op());
    }
}
