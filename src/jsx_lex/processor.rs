//! File processing API for the markup lexer
//!
//! This module provides an extensible API for running the pipeline over
//! markup files with different stages (normalized, line) and output formats
//! (simple, json). It is the programmatic surface behind the `jsx-lex`
//! binary.

use crate::jsx_lex::classifier::lex;
use crate::jsx_lex::lexer::normalize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    /// Stop after normalization and emit the one-construct-per-line string
    Normalized,
    /// Run the full pipeline and emit classified line tokens
    Line,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "line-simple" or "normalized-simple"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage_str, format_str_rest)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage_str {
            "normalized" => ProcessingStage::Normalized,
            "line" => ProcessingStage::Line,
            _ => return Err(ProcessingError::InvalidStage(stage_str.to_string())),
        };

        let format = match format_str_rest {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            _ => return Err(ProcessingError::InvalidFormatType(format_str_rest.to_string())),
        };

        // Normalized output is a plain string; there is nothing to serialize.
        if stage == ProcessingStage::Normalized && format == OutputFormat::Json {
            return Err(ProcessingError::InvalidFormatType(
                "Format 'json' only works with the line stage".to_string(),
            ));
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Normalized,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Line,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Line,
                format: OutputFormat::Json,
            },
        ]
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    Serialization(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Process a markup file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec)
}

/// Process in-memory markup according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Normalized => Ok(normalize(source)),
        ProcessingStage::Line => {
            let tokens = lex(source);
            match spec.format {
                OutputFormat::Simple => {
                    let mut result = String::new();
                    for token in &tokens {
                        result.push_str(&format!("{}\n", token));
                    }
                    Ok(result)
                }
                OutputFormat::Json => serde_json::to_string_pretty(&tokens)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
            }
        }
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| {
            format!(
                "{}-{}",
                match spec.stage {
                    ProcessingStage::Normalized => "normalized",
                    ProcessingStage::Line => "line",
                },
                match spec.format {
                    OutputFormat::Simple => "simple",
                    OutputFormat::Json => "json",
                }
            )
        })
        .collect()
}
