// ABOUTME: Compile step for the vitality application
// ABOUTME: Loads a document, resolves it and writes the model as JSON for the renderer

use crate::document;
use crate::errors::{Result, VitalityError};
use crate::model::PresentationModel;
use crate::presentation::build_presentation;
use crate::utils;
use log::info;
use std::fs;
use std::path::Path;

/// Serialize a resolved model to JSON text.
pub fn model_to_json(model: &PresentationModel, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(model)?
    } else {
        serde_json::to_string(model)?
    };
    Ok(json)
}

/// Write a resolved model to `output_path` as JSON.
pub fn write_model_to_file(model: &PresentationModel, output_path: &Path, pretty: bool) -> Result<()> {
    info!("Writing presentation model to file: {:?}", output_path);
    utils::ensure_parent_directory_exists(output_path)?;
    let json = model_to_json(model, pretty)?;
    fs::write(output_path, json).map_err(VitalityError::FileReadError)?;
    Ok(())
}

/// Run one full compilation pass: read, resolve, write.
pub fn compile_presentation(input: &Path, output: &Path, pretty: bool) -> Result<PresentationModel> {
    let document = document::load_document(input)?;
    let model = build_presentation(&document)?;
    write_model_to_file(&model, output, pretty)?;
    info!("Presentation generated at {:?}", output);
    Ok(model)
}
