//! Dialogue scripts

use std::io::Read;
use serde::Deserialize;
use tipo_layout::{DialogueLine, SolverConfig};

use crate::{PreviewError, Result};

/// A batch of dialogue lines plus optional solver tuning
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    pub config: SolverConfig,
    pub lines: Vec<DialogueLine>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Lines with text, in script order; fails when there are none
    pub fn active_lines(&self) -> Result<Vec<&DialogueLine>> {
        let lines: Vec<&DialogueLine> = self.lines.iter().filter(|l| l.has_text()).collect();
        if lines.is_empty() {
            return Err(PreviewError::NoText);
        }
        Ok(lines)
    }
}
