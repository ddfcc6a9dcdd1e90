//! Grammar assembler and one-time self-validation
//!
//! The recursive-descent modules under `parser/` are the grammar's
//! implementation; this registry is its declaration. Every production
//! is listed with the module that owns it and the productions it
//! references, mirroring the cross-module wiring (a type production
//! needing an expression production and vice versa). Validation runs
//! once per process, before the first parse, and checks the table for
//! duplicate names, dangling references and productions unreachable
//! from the entry production. A validation failure is a construction
//! bug, so it is fatal at first use rather than surfaced per parse.

use std::collections::{HashSet, VecDeque};
use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

use super::parser::{self, Parse};

/// Entry production name
pub const ENTRY: &str = "compilationUnit";

/// One named production: which module owns it and which productions
/// its right-hand side references.
#[derive(Debug, Clone, Copy)]
pub struct Production {
    pub name: &'static str,
    pub module: &'static str,
    pub references: &'static [&'static str],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("duplicate production name '{0}'")]
    Duplicate(&'static str),
    #[error("production '{0}' references unknown production '{1}'")]
    Dangling(&'static str, &'static str),
    #[error("production '{0}' is unreachable from '{ENTRY}'")]
    Unreachable(&'static str),
    #[error("entry production '{ENTRY}' is missing")]
    MissingEntry,
}

/// The assembled, validated grammar. One per process.
pub struct Grammar {
    productions: &'static [Production],
}

impl Grammar {
    /// The process-wide grammar. Assembled and validated on first
    /// use; a table defect panics here, never mid-parse.
    pub fn get() -> &'static Grammar {
        static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
        GRAMMAR.get_or_init(|| {
            let grammar = Grammar {
                productions: PRODUCTIONS,
            };
            if let Err(err) = grammar.validate() {
                panic!("grammar self-validation failed: {err}");
            }
            debug!(productions = grammar.productions.len(), "grammar validated");
            grammar
        })
    }

    /// Parse source text through the validated grammar
    pub fn parse(&self, source: &str) -> Parse {
        parser::parse_source(source)
    }

    pub fn production(&self, name: &str) -> Option<&Production> {
        self.productions.iter().find(|p| p.name == name)
    }

    pub fn productions(&self) -> &[Production] {
        self.productions
    }

    fn validate(&self) -> Result<(), GrammarError> {
        let mut names = HashSet::new();
        for production in self.productions {
            if !names.insert(production.name) {
                return Err(GrammarError::Duplicate(production.name));
            }
        }
        if !names.contains(ENTRY) {
            return Err(GrammarError::MissingEntry);
        }

        for production in self.productions {
            for reference in production.references {
                if !names.contains(reference) {
                    return Err(GrammarError::Dangling(production.name, reference));
                }
            }
        }

        let mut reachable = HashSet::new();
        let mut queue = VecDeque::from([ENTRY]);
        while let Some(name) = queue.pop_front() {
            if !reachable.insert(name) {
                continue;
            }
            if let Some(production) = self.production(name) {
                for reference in production.references {
                    queue.push_back(reference);
                }
            }
        }
        for production in self.productions {
            if !reachable.contains(production.name) {
                return Err(GrammarError::Unreachable(production.name));
            }
        }
        Ok(())
    }
}

/// The full production table, one entry per grammar production, in
/// module order.
static PRODUCTIONS: &[Production] = &[
    // assembler
    Production {
        name: "compilationUnit",
        module: "parser",
        references: &[
            "packageClause",
            "importClause",
            "exportClause",
            "definition",
            "assignmentStatement",
            "expression",
        ],
    },
    // statements
    Production {
        name: "packageClause",
        module: "stmts",
        references: &["templateBody"],
    },
    Production {
        name: "importClause",
        module: "stmts",
        references: &["importExpr"],
    },
    Production {
        name: "exportClause",
        module: "stmts",
        references: &["importExpr"],
    },
    Production {
        name: "importExpr",
        module: "stmts",
        references: &["importSelectors"],
    },
    Production {
        name: "importSelectors",
        module: "stmts",
        references: &[],
    },
    Production {
        name: "assignmentStatement",
        module: "stmts",
        references: &["expression"],
    },
    // definitions
    Production {
        name: "definition",
        module: "defs",
        references: &[
            "modifiers",
            "classDef",
            "objectDef",
            "traitDef",
            "enumDef",
            "extensionDef",
            "givenDef",
            "valDef",
            "varDef",
            "defDef",
            "typeDef",
        ],
    },
    Production {
        name: "modifiers",
        module: "defs",
        references: &["annotation"],
    },
    Production {
        name: "annotation",
        module: "defs",
        references: &["argumentList"],
    },
    Production {
        name: "classDef",
        module: "defs",
        references: &["typeParamClause", "paramClause", "template"],
    },
    Production {
        name: "traitDef",
        module: "defs",
        references: &["typeParamClause", "paramClause", "template"],
    },
    Production {
        name: "objectDef",
        module: "defs",
        references: &["template"],
    },
    Production {
        name: "valDef",
        module: "defs",
        references: &["pattern", "type", "expression"],
    },
    Production {
        name: "varDef",
        module: "defs",
        references: &["pattern", "type", "expression"],
    },
    Production {
        name: "defDef",
        module: "defs",
        references: &["typeParamClause", "paramClause", "type", "expression"],
    },
    Production {
        name: "typeDef",
        module: "defs",
        references: &["typeParamClause", "type"],
    },
    Production {
        name: "paramClause",
        module: "defs",
        references: &["param"],
    },
    Production {
        name: "param",
        module: "defs",
        references: &["type", "expression"],
    },
    Production {
        name: "template",
        module: "defs",
        references: &["type", "argumentList", "templateBody"],
    },
    Production {
        name: "templateBody",
        module: "defs",
        references: &["definition", "importClause", "exportClause", "expression"],
    },
    // language-version extensions
    Production {
        name: "enumDef",
        module: "extensions",
        references: &["typeParamClause", "paramClause", "enumCase", "definition"],
    },
    Production {
        name: "enumCase",
        module: "extensions",
        references: &["typeParamClause", "paramClause", "type", "argumentList"],
    },
    Production {
        name: "extensionDef",
        module: "extensions",
        references: &["typeParamClause", "paramClause", "definition", "templateBody"],
    },
    Production {
        name: "givenDef",
        module: "extensions",
        references: &["typeParamClause", "paramClause", "type", "expression", "templateBody"],
    },
    // expressions
    Production {
        name: "expression",
        module: "exprs",
        references: &[
            "lambda",
            "infixExpression",
            "type",
        ],
    },
    Production {
        name: "lambda",
        module: "exprs",
        references: &["param", "expression"],
    },
    Production {
        name: "infixExpression",
        module: "exprs",
        references: &["prefixExpression", "caseClause"],
    },
    Production {
        name: "prefixExpression",
        module: "exprs",
        references: &["postfixExpression"],
    },
    Production {
        name: "postfixExpression",
        module: "exprs",
        references: &["primaryExpression", "argumentList", "typeArgList"],
    },
    Production {
        name: "primaryExpression",
        module: "exprs",
        references: &[
            "literal",
            "blockExpr",
            "ifExpr",
            "whileExpr",
            "forExpr",
            "tryExpr",
            "newExpr",
            "expression",
        ],
    },
    Production {
        name: "blockExpr",
        module: "exprs",
        references: &["definition", "importClause", "expression", "caseClause"],
    },
    Production {
        name: "ifExpr",
        module: "exprs",
        references: &["expression"],
    },
    Production {
        name: "whileExpr",
        module: "exprs",
        references: &["expression"],
    },
    Production {
        name: "forExpr",
        module: "exprs",
        references: &["enumerators", "expression"],
    },
    Production {
        name: "enumerators",
        module: "exprs",
        references: &["pattern", "expression"],
    },
    Production {
        name: "tryExpr",
        module: "exprs",
        references: &["expression", "blockExpr"],
    },
    Production {
        name: "newExpr",
        module: "exprs",
        references: &["type", "argumentList", "blockExpr"],
    },
    Production {
        name: "caseClause",
        module: "exprs",
        references: &["pattern", "expression", "definition"],
    },
    Production {
        name: "argumentList",
        module: "exprs",
        references: &["expression"],
    },
    // patterns
    Production {
        name: "pattern",
        module: "patterns",
        references: &["simplePattern", "type"],
    },
    Production {
        name: "simplePattern",
        module: "patterns",
        references: &["pattern", "literal"],
    },
    // types
    Production {
        name: "type",
        module: "types",
        references: &["typeParamClause", "simpleType"],
    },
    Production {
        name: "simpleType",
        module: "types",
        references: &["type", "typeArgList"],
    },
    Production {
        name: "typeArgList",
        module: "types",
        references: &["type"],
    },
    Production {
        name: "typeParamClause",
        module: "types",
        references: &["type"],
    },
    // literals
    Production {
        name: "literal",
        module: "literals",
        references: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_validates_once() {
        let grammar = Grammar::get();
        assert!(grammar.production(ENTRY).is_some());
        assert!(!grammar.productions().is_empty());
    }

    #[test]
    fn test_all_references_resolve() {
        let grammar = Grammar::get();
        for production in grammar.productions() {
            for reference in production.references {
                assert!(
                    grammar.production(reference).is_some(),
                    "{} -> {reference}",
                    production.name
                );
            }
        }
    }

    #[test]
    fn test_validation_rejects_dangling_reference() {
        let table: &[Production] = &[
            Production {
                name: "compilationUnit",
                module: "parser",
                references: &["missing"],
            },
        ];
        let grammar = Grammar { productions: table };
        assert_eq!(
            grammar.validate(),
            Err(GrammarError::Dangling("compilationUnit", "missing"))
        );
    }

    #[test]
    fn test_validation_rejects_duplicates_and_unreachable() {
        let duplicated: &[Production] = &[
            Production {
                name: "compilationUnit",
                module: "parser",
                references: &[],
            },
            Production {
                name: "compilationUnit",
                module: "parser",
                references: &[],
            },
        ];
        let grammar = Grammar {
            productions: duplicated,
        };
        assert_eq!(
            grammar.validate(),
            Err(GrammarError::Duplicate("compilationUnit"))
        );

        let island: &[Production] = &[
            Production {
                name: "compilationUnit",
                module: "parser",
                references: &[],
            },
            Production {
                name: "orphan",
                module: "exprs",
                references: &[],
            },
        ];
        let grammar = Grammar {
            productions: island,
        };
        assert_eq!(grammar.validate(), Err(GrammarError::Unreachable("orphan")));
    }

    #[test]
    fn test_grammar_parse_entry_point() {
        let parse = Grammar::get().parse("val x = 1");
        assert!(parse.is_ok());
    }
}
