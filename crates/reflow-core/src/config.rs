use crate::error::ReflowError;
use crate::model::DEFAULT_FONT_SIZE_HALF_POINTS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest font size Word accepts, in half-points (1638pt).
const MAX_FONT_SIZE_HALF_POINTS: u32 = 3276;

/// Page geometry and paragraph spacing for the DOCX writer. All lengths are
/// in twips (1/20 pt).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocxOptions {
    pub page_width: u32,
    pub page_height: u32,
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    /// Space after each paragraph.
    pub spacing_after: u32,
}

impl Default for DocxOptions {
    /// A4 portrait with one-inch margins.
    fn default() -> Self {
        DocxOptions {
            page_width: 11906,
            page_height: 16838,
            margin_top: 1440,
            margin_right: 1440,
            margin_bottom: 1440,
            margin_left: 1440,
            spacing_after: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Font size applied to every paragraph.
    pub font_size_half_points: u32,
    pub docx: DocxOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            font_size_half_points: DEFAULT_FONT_SIZE_HALF_POINTS,
            docx: DocxOptions::default(),
        }
    }
}

/// Load conversion options from a JSON file. Missing fields take defaults.
pub fn load_options(path: &Path) -> Result<ConvertOptions, ReflowError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReflowError::OptionsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let options: ConvertOptions =
        serde_json::from_str(&content).map_err(|e| ReflowError::OptionsLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_options(&options)?;
    Ok(options)
}

/// Parse conversion options from a JSON string (no file path context).
pub fn parse_options_str(json: &str) -> Result<ConvertOptions, ReflowError> {
    let options: ConvertOptions = serde_json::from_str(json)?;
    validate_options(&options)?;
    Ok(options)
}

/// Validate that options describe a printable document.
pub fn validate_options(options: &ConvertOptions) -> Result<(), ReflowError> {
    if !(2..=MAX_FONT_SIZE_HALF_POINTS).contains(&options.font_size_half_points) {
        return Err(ReflowError::OptionsInvalid(format!(
            "font_size_half_points must be between 2 and {}, got {}",
            MAX_FONT_SIZE_HALF_POINTS, options.font_size_half_points
        )));
    }

    let docx = &options.docx;
    if docx.page_width == 0 || docx.page_height == 0 {
        return Err(ReflowError::OptionsInvalid(
            "page dimensions must be positive".into(),
        ));
    }

    let horizontal = u64::from(docx.margin_left) + u64::from(docx.margin_right);
    if horizontal >= u64::from(docx.page_width) {
        return Err(ReflowError::OptionsInvalid(format!(
            "left + right margins ({}) leave no room on a page {} twips wide",
            horizontal, docx.page_width
        )));
    }

    let vertical = u64::from(docx.margin_top) + u64::from(docx.margin_bottom);
    if vertical >= u64::from(docx.page_height) {
        return Err(ReflowError::OptionsInvalid(format!(
            "top + bottom margins ({}) leave no room on a page {} twips high",
            vertical, docx.page_height
        )));
    }

    Ok(())
}
