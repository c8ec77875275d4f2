pub mod analyzer;
pub mod error;
pub mod languages;
pub mod models;

use once_cell::sync::Lazy;

pub use analyzer::{
    analyze, analyze_file, scan_directory, Analyzer, ConstructExtractor, DeclarationWalker,
    ExtractorRegistry, FileWalker, ParsedFile, Parser, ScanReport, SourceContext,
};
pub use error::{AnalyzerError, Diagnostic, ParseError, Result};
pub use languages::{LanguageGrammar, LanguageRegistry};
pub use models::{
    ClassRecord, CodeStructure, FunctionRecord, ImportRecord, MethodRecord, ParameterRecord,
    VariableRecord,
};

/// Global language registry instance (lazily initialized)
pub static REGISTRY: Lazy<LanguageRegistry> = Lazy::new(LanguageRegistry::new);

/// Global extractor registry instance (lazily initialized)
pub static EXTRACTORS: Lazy<ExtractorRegistry> = Lazy::new(ExtractorRegistry::new);
