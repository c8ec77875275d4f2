use serde::{Deserialize, Serialize};

/// Name used for declarations that carry no identifier
pub const ANONYMOUS: &str = "anonymous";

/// Type reported when a parameter or variable has no annotation
pub const DEFAULT_TYPE: &str = "any";

/// Return type reported for block-bodied functions without annotation
pub const DEFAULT_BLOCK_RETURN: &str = "void";

/// Return type reported for expression-bodied arrow functions without annotation
pub const DEFAULT_EXPRESSION_RETURN: &str = "any";

/// Name every constructor is reported under
pub const CONSTRUCTOR: &str = "constructor";

/// The declaration inventory of a single source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStructure {
    pub functions: Vec<FunctionRecord>,
    pub classes: Vec<ClassRecord>,
    pub imports: Vec<ImportRecord>,
    pub variables: Vec<VariableRecord>,
}

impl CodeStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
            && self.classes.is_empty()
            && self.imports.is_empty()
            && self.variables.is_empty()
    }

    /// Total number of top-level records (methods are counted with their class)
    pub fn record_count(&self) -> usize {
        self.functions.len() + self.classes.len() + self.imports.len() + self.variables.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ParameterRecord {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    pub name: String,
    pub line: u32,
    pub docstring: String,
    #[serde(alias = "args")]
    pub parameters: Vec<ParameterRecord>,
    #[serde(alias = "returns")]
    pub return_type: String,
    #[serde(alias = "is_async")]
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    pub name: String,
    pub line: u32,
    pub docstring: String,
    #[serde(alias = "args")]
    pub parameters: Vec<ParameterRecord>,
    #[serde(alias = "returns")]
    pub return_type: String,
}

impl MethodRecord {
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub line: u32,
    pub docstring: String,
    pub methods: Vec<MethodRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    pub module: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_import: Option<String>,
    #[serde(default)]
    pub named_imports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub line: u32,
}
