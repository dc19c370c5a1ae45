use super::expr::Expr;
use super::production::Production;
use super::GrammarError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_case_sensitive() -> bool {
    true
}

/// A grammar document: the productions of one language, plus the vocabularies it pulls in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarSpec {
    /// The language name. The production with this name is the root of the grammar.
    pub language: String,
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
    /// Paths of vocabulary documents, relative to this document.
    #[serde(default)]
    pub vocabularies: Vec<String>,
    pub productions: Vec<ProductionSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductionSpec {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub body: Expr,
}

/// A reusable set of productions that grammars can import. Every production in it is tagged
/// with the vocabulary's language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabularySpec {
    pub language: String,
    pub productions: Vec<ProductionSpec>,
}

impl ProductionSpec {
    pub fn into_production(self, vocabulary: Option<&str>) -> Production {
        Production {
            name: self.name,
            description: self.description,
            vocabulary: vocabulary.map(|language| language.to_owned()),
            body: self.body,
        }
    }
}

impl GrammarSpec {
    pub fn load(path: &Path) -> Result<GrammarSpec, GrammarError> {
        load_document(path)
    }
}

impl VocabularySpec {
    pub fn load(path: &Path) -> Result<VocabularySpec, GrammarError> {
        load_document(path)
    }

    pub fn into_productions(self) -> Vec<Production> {
        let language = self.language;
        self.productions
            .into_iter()
            .map(|spec| spec.into_production(Some(language.as_str())))
            .collect()
    }
}

/// Read and deserialize a document, picking the format from the file extension.
fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, GrammarError> {
    let filename = path.to_string_lossy().into_owned();
    let extension = path.extension().and_then(|ext| ext.to_str());
    if !matches!(extension, Some("ron") | Some("json")) {
        return Err(GrammarError::UnknownFormat(filename));
    }

    let source = fs::read_to_string(path).map_err(|source| GrammarError::Io {
        path: filename.clone(),
        source,
    })?;
    parse_document(&filename, extension, &source)
}

fn parse_document<T: DeserializeOwned>(
    filename: &str,
    extension: Option<&str>,
    source: &str,
) -> Result<T, GrammarError> {
    match extension {
        Some("ron") => {
            ron::from_str::<T>(source).map_err(|err| GrammarError::from_ron_error(filename, err))
        }
        Some("json") => serde_json::from_str::<T>(source)
            .map_err(|err| GrammarError::from_json_error(filename, err)),
        _ => Err(GrammarError::UnknownFormat(filename.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ron_grammar() {
        let source = r#"(
            language: "digits",
            productions: [
                (
                    name: "digits",
                    description: Some("A run of digits"),
                    body: Repetition(min: 1, expr: NonTerminal("digit")),
                ),
                (name: "digit", body: CharacterSet("Nd")),
            ],
        )"#;
        let spec: GrammarSpec = parse_document("digits.ron", Some("ron"), source).unwrap();
        assert_eq!(spec.language, "digits");
        assert!(spec.case_sensitive);
        assert!(spec.vocabularies.is_empty());
        assert_eq!(spec.productions.len(), 2);
        assert_eq!(
            spec.productions[0].body,
            Expr::Repetition {
                min: 1,
                max: None,
                expr: Box::new(Expr::NonTerminal("digit".to_owned())),
            }
        );
    }

    #[test]
    fn test_parse_json_vocabulary() {
        let source = r#"{
            "language": "common",
            "productions": [
                { "name": "Space", "body": { "Literal": " " } }
            ]
        }"#;
        let spec: VocabularySpec = parse_document("common.json", Some("json"), source).unwrap();
        let productions = spec.into_productions();
        assert_eq!(productions.len(), 1);
        assert_eq!(productions[0].vocabulary.as_deref(), Some("common"));
        assert_eq!(productions[0].body, Expr::Literal(" ".to_owned()));
    }

    #[test]
    fn test_ron_error_position() {
        let source = "(\n  language: \"x\",\n  oops: 1,\n)";
        match parse_document::<GrammarSpec>("bad.ron", Some("ron"), source) {
            Err(GrammarError::Parse { filename, pos, .. }) => {
                assert_eq!(filename, "bad.ron");
                assert!(pos.is_some());
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format() {
        assert!(matches!(
            GrammarSpec::load(Path::new("grammar.xml")),
            Err(GrammarError::UnknownFormat(_))
        ));
    }
}
