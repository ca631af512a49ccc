//! RG-010: Generator - merged resource maps into a C++ source/header pair.

use super::codegen::{self, GeneratedPair};
use super::config::GeneratorConfig;
use super::registry::Registry;
use super::{merge, output};
use std::path::{Path, PathBuf};

/// What a generator run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub resources: usize,
    pub total_bytes: usize,
}

/// Merge `inputs`, validate, and render without touching the filesystem for output.
pub fn prepare(
    source: &Path,
    header: &Path,
    inputs: &[PathBuf],
    config: &GeneratorConfig,
) -> Result<(GeneratedPair, Registry), String> {
    let map = merge::load_and_merge(inputs)?;
    let registry = Registry::from_map(&map)?;
    if registry.is_empty() {
        tracing::warn!("no resources found in inputs, generating an empty registry");
    }
    Ok((codegen::render(source, header, &map, config), registry))
}

/// Full generator run: merge, validate, render, write both files.
pub fn generate(
    source: &Path,
    header: &Path,
    inputs: &[PathBuf],
    config: &GeneratorConfig,
) -> Result<GenerateSummary, String> {
    let (pair, registry) = prepare(source, header, inputs, config)?;
    output::write_output(source, &pair.source)?;
    output::write_output(header, &pair.header)?;
    Ok(GenerateSummary {
        resources: registry.len(),
        total_bytes: registry.total_size(),
    })
}
