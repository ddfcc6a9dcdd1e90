//! Rowan language implementation for the Scala-like syntax
//!
//! Connects `ScalaSyntaxKind` to Rowan's generic CST infrastructure.

use rowan::Language;

use super::ScalaSyntaxKind;

/// Language implementation for the Scala-like source language
///
/// Zero-sized type implementing `rowan::Language` so the syntax kinds
/// above can live inside Rowan's generic green/red trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScalaLanguage;

impl Language for ScalaLanguage {
    type Kind = ScalaSyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        match raw.0 {
            // Trivia
            0 => ScalaSyntaxKind::Whitespace,
            1 => ScalaSyntaxKind::CommentLine,
            2 => ScalaSyntaxKind::CommentBlock,
            3 => ScalaSyntaxKind::Newline,

            // Keywords (10-57)
            10 => ScalaSyntaxKind::ClassKw,
            11 => ScalaSyntaxKind::ObjectKw,
            12 => ScalaSyntaxKind::TraitKw,
            13 => ScalaSyntaxKind::EnumKw,
            14 => ScalaSyntaxKind::ExtensionKw,
            15 => ScalaSyntaxKind::GivenKw,
            16 => ScalaSyntaxKind::ValKw,
            17 => ScalaSyntaxKind::VarKw,
            18 => ScalaSyntaxKind::DefKw,
            19 => ScalaSyntaxKind::TypeKw,
            20 => ScalaSyntaxKind::PackageKw,
            21 => ScalaSyntaxKind::ImportKw,
            22 => ScalaSyntaxKind::ExportKw,
            23 => ScalaSyntaxKind::IfKw,
            24 => ScalaSyntaxKind::ThenKw,
            25 => ScalaSyntaxKind::ElseKw,
            26 => ScalaSyntaxKind::WhileKw,
            27 => ScalaSyntaxKind::DoKw,
            28 => ScalaSyntaxKind::ForKw,
            29 => ScalaSyntaxKind::YieldKw,
            30 => ScalaSyntaxKind::MatchKw,
            31 => ScalaSyntaxKind::CaseKw,
            32 => ScalaSyntaxKind::TryKw,
            33 => ScalaSyntaxKind::CatchKw,
            34 => ScalaSyntaxKind::FinallyKw,
            35 => ScalaSyntaxKind::NewKw,
            36 => ScalaSyntaxKind::ReturnKw,
            37 => ScalaSyntaxKind::ThrowKw,
            38 => ScalaSyntaxKind::ExtendsKw,
            39 => ScalaSyntaxKind::WithKw,
            40 => ScalaSyntaxKind::DerivesKw,
            41 => ScalaSyntaxKind::UsingKw,
            42 => ScalaSyntaxKind::FinalKw,
            43 => ScalaSyntaxKind::SealedKw,
            44 => ScalaSyntaxKind::AbstractKw,
            45 => ScalaSyntaxKind::OverrideKw,
            46 => ScalaSyntaxKind::ImplicitKw,
            47 => ScalaSyntaxKind::LazyKw,
            48 => ScalaSyntaxKind::PrivateKw,
            49 => ScalaSyntaxKind::ProtectedKw,
            50 => ScalaSyntaxKind::OpenKw,
            51 => ScalaSyntaxKind::InlineKw,
            52 => ScalaSyntaxKind::OpaqueKw,
            53 => ScalaSyntaxKind::TransparentKw,
            54 => ScalaSyntaxKind::InfixKw,
            55 => ScalaSyntaxKind::ThisKw,
            56 => ScalaSyntaxKind::SuperKw,
            57 => ScalaSyntaxKind::EndKw,

            // Literals (70-78)
            70 => ScalaSyntaxKind::IntLit,
            71 => ScalaSyntaxKind::FloatLit,
            72 => ScalaSyntaxKind::StringLit,
            73 => ScalaSyntaxKind::TripleStringLit,
            74 => ScalaSyntaxKind::InterpolatedStringLit,
            75 => ScalaSyntaxKind::CharLit,
            76 => ScalaSyntaxKind::TrueKw,
            77 => ScalaSyntaxKind::FalseKw,
            78 => ScalaSyntaxKind::NullKw,

            // Punctuation (100-130)
            100 => ScalaSyntaxKind::LParen,
            101 => ScalaSyntaxKind::RParen,
            102 => ScalaSyntaxKind::LBracket,
            103 => ScalaSyntaxKind::RBracket,
            104 => ScalaSyntaxKind::LBrace,
            105 => ScalaSyntaxKind::RBrace,
            106 => ScalaSyntaxKind::Comma,
            107 => ScalaSyntaxKind::Semicolon,
            108 => ScalaSyntaxKind::Dot,
            109 => ScalaSyntaxKind::Colon,
            110 => ScalaSyntaxKind::Equals,
            111 => ScalaSyntaxKind::Arrow,
            112 => ScalaSyntaxKind::CtxArrow,
            113 => ScalaSyntaxKind::TypeLambdaArrow,
            114 => ScalaSyntaxKind::LeftArrow,
            115 => ScalaSyntaxKind::Subtype,
            116 => ScalaSyntaxKind::Supertype,
            117 => ScalaSyntaxKind::At,
            118 => ScalaSyntaxKind::Hash,
            119 => ScalaSyntaxKind::Underscore,
            120 => ScalaSyntaxKind::Pipe,
            121 => ScalaSyntaxKind::Ampersand,
            123 => ScalaSyntaxKind::ColonEquals,
            124 => ScalaSyntaxKind::PlusEquals,
            125 => ScalaSyntaxKind::MinusEquals,
            126 => ScalaSyntaxKind::StarEquals,
            127 => ScalaSyntaxKind::SlashEquals,
            128 => ScalaSyntaxKind::PercentEquals,
            129 => ScalaSyntaxKind::PlusPlusEquals,
            130 => ScalaSyntaxKind::OpIdent,

            // Identifiers (150-151)
            150 => ScalaSyntaxKind::Ident,
            151 => ScalaSyntaxKind::BackquotedIdent,

            // Structure nodes (200-240)
            200 => ScalaSyntaxKind::SourceFile,
            210 => ScalaSyntaxKind::PackageClause,
            211 => ScalaSyntaxKind::ImportClause,
            212 => ScalaSyntaxKind::ExportClause,
            213 => ScalaSyntaxKind::ImportExpr,
            214 => ScalaSyntaxKind::ImportSelectors,
            215 => ScalaSyntaxKind::AssignmentStatement,
            220 => ScalaSyntaxKind::ClassDef,
            221 => ScalaSyntaxKind::ObjectDef,
            222 => ScalaSyntaxKind::TraitDef,
            223 => ScalaSyntaxKind::EnumDef,
            224 => ScalaSyntaxKind::EnumCase,
            225 => ScalaSyntaxKind::ExtensionDef,
            226 => ScalaSyntaxKind::GivenDef,
            227 => ScalaSyntaxKind::ValDef,
            228 => ScalaSyntaxKind::VarDef,
            229 => ScalaSyntaxKind::DefDef,
            230 => ScalaSyntaxKind::TypeDef,
            231 => ScalaSyntaxKind::Modifiers,
            232 => ScalaSyntaxKind::Annotation,
            234 => ScalaSyntaxKind::TypeParamClause,
            235 => ScalaSyntaxKind::TypeParam,
            236 => ScalaSyntaxKind::ParamClause,
            237 => ScalaSyntaxKind::Param,
            238 => ScalaSyntaxKind::Template,
            239 => ScalaSyntaxKind::TemplateBody,
            240 => ScalaSyntaxKind::DerivesClause,

            // Type nodes (250-260)
            250 => ScalaSyntaxKind::SimpleType,
            251 => ScalaSyntaxKind::AppliedType,
            252 => ScalaSyntaxKind::FunctionType,
            253 => ScalaSyntaxKind::ContextFunctionType,
            254 => ScalaSyntaxKind::TypeLambda,
            255 => ScalaSyntaxKind::PolyFunctionType,
            256 => ScalaSyntaxKind::TupleType,
            257 => ScalaSyntaxKind::InfixType,
            258 => ScalaSyntaxKind::WildcardType,
            259 => ScalaSyntaxKind::TypeArgList,
            260 => ScalaSyntaxKind::ByNameType,

            // Pattern nodes (270-279)
            270 => ScalaSyntaxKind::WildcardPattern,
            271 => ScalaSyntaxKind::LiteralPattern,
            272 => ScalaSyntaxKind::VariablePattern,
            273 => ScalaSyntaxKind::StableIdPattern,
            274 => ScalaSyntaxKind::ConstructorPattern,
            275 => ScalaSyntaxKind::TuplePattern,
            276 => ScalaSyntaxKind::TypedPattern,
            277 => ScalaSyntaxKind::AlternativePattern,
            278 => ScalaSyntaxKind::BindPattern,
            279 => ScalaSyntaxKind::PatternArgList,

            // Expression nodes (300-325)
            300 => ScalaSyntaxKind::Lambda,
            301 => ScalaSyntaxKind::LambdaParams,
            302 => ScalaSyntaxKind::BlockExpr,
            303 => ScalaSyntaxKind::IfExpr,
            304 => ScalaSyntaxKind::WhileExpr,
            305 => ScalaSyntaxKind::ForExpr,
            306 => ScalaSyntaxKind::Enumerators,
            307 => ScalaSyntaxKind::Generator,
            308 => ScalaSyntaxKind::Guard,
            309 => ScalaSyntaxKind::MatchExpr,
            310 => ScalaSyntaxKind::CaseClause,
            311 => ScalaSyntaxKind::TryExpr,
            312 => ScalaSyntaxKind::CatchClause,
            313 => ScalaSyntaxKind::FinallyClause,
            314 => ScalaSyntaxKind::NewExpr,
            315 => ScalaSyntaxKind::CallExpr,
            316 => ScalaSyntaxKind::ArgumentList,
            317 => ScalaSyntaxKind::TypeApplyExpr,
            318 => ScalaSyntaxKind::SelectExpr,
            319 => ScalaSyntaxKind::InfixExpr,
            320 => ScalaSyntaxKind::PrefixExpr,
            321 => ScalaSyntaxKind::ParenExpr,
            322 => ScalaSyntaxKind::TupleExpr,
            323 => ScalaSyntaxKind::AssignExpr,
            324 => ScalaSyntaxKind::ReturnExpr,
            325 => ScalaSyntaxKind::ThrowExpr,

            // Special (400+)
            400 => ScalaSyntaxKind::Error,
            401 => ScalaSyntaxKind::Eof,
            402 => ScalaSyntaxKind::Unknown,

            // Tombstone
            999 => ScalaSyntaxKind::Tombstone,

            _ => ScalaSyntaxKind::Unknown,
        }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        let kinds = [
            ScalaSyntaxKind::Whitespace,
            ScalaSyntaxKind::ClassKw,
            ScalaSyntaxKind::Ident,
            ScalaSyntaxKind::Arrow,
            ScalaSyntaxKind::CtxArrow,
            ScalaSyntaxKind::SourceFile,
            ScalaSyntaxKind::Lambda,
            ScalaSyntaxKind::ConstructorPattern,
            ScalaSyntaxKind::ContextFunctionType,
            ScalaSyntaxKind::Error,
        ];

        for &kind in &kinds {
            let raw = ScalaLanguage::kind_to_raw(kind);
            let back = ScalaLanguage::kind_from_raw(raw);
            assert_eq!(kind, back, "Roundtrip failed for {kind:?}");
        }
    }

    #[test]
    fn test_kind_values() {
        assert_eq!(ScalaLanguage::kind_to_raw(ScalaSyntaxKind::Whitespace).0, 0);
        assert_eq!(ScalaLanguage::kind_to_raw(ScalaSyntaxKind::ClassKw).0, 10);
        assert_eq!(ScalaLanguage::kind_to_raw(ScalaSyntaxKind::LParen).0, 100);
        assert_eq!(
            ScalaLanguage::kind_to_raw(ScalaSyntaxKind::SourceFile).0,
            200
        );
    }

    #[test]
    fn test_unknown_raw_kind_maps_to_unknown() {
        let back = ScalaLanguage::kind_from_raw(rowan::SyntaxKind(777));
        assert_eq!(back, ScalaSyntaxKind::Unknown);
    }
}
