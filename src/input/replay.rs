use std::collections::VecDeque;
use std::io::BufRead;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::LandmarkSource;
use crate::error::HandOrbitError;
use crate::hand::Hand;

/// One line of a landmark recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    /// Capture time in milliseconds.
    #[serde(default)]
    pub timestamp_ms: f64,
    /// Hands detected in the frame.
    #[serde(default)]
    pub hands: Vec<Hand>,
}

impl RecordedFrame {
    /// Encode as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, HandOrbitError> {
        serde_json::to_string(self).map_err(|e| HandOrbitError::LandmarkParse {
            line: 0,
            message: e.to_string(),
        })
    }
}

/// Plays back a JSON-lines recording, one frame per `detect` call.
///
/// Lines are decoded up front; a line that fails to decode is reported as
/// an error for its own frame only. Once every frame has been played the
/// source keeps returning empty frames.
#[derive(Debug, Default)]
pub struct ReplaySource {
    frames: VecDeque<(usize, Result<RecordedFrame, String>)>,
}

impl ReplaySource {
    /// Decode a recording held in memory.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let frames = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| (i + 1, decode(line)))
            .collect();
        Self { frames }
    }

    /// Decode a recording from a reader.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, HandOrbitError> {
        let mut frames = VecDeque::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if !line.trim().is_empty() {
                frames.push_back((i + 1, decode(&line)));
            }
        }
        Ok(Self { frames })
    }

    /// Open and decode a recording file.
    pub fn open(path: &Path) -> Result<Self, HandOrbitError> {
        let file = std::fs::File::open(path)?;
        let source = Self::from_reader(std::io::BufReader::new(file))?;
        log::info!(
            "loaded {} recorded frame(s) from {}",
            source.remaining(),
            path.display()
        );
        Ok(source)
    }

    /// Frames not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// Whether every recorded frame has been played.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }

    /// Recorded timestamp of the next frame, if it decoded.
    #[must_use]
    pub fn next_timestamp(&self) -> Option<f64> {
        match self.frames.front() {
            Some((_, Ok(frame))) => Some(frame.timestamp_ms),
            _ => None,
        }
    }
}

fn decode(line: &str) -> Result<RecordedFrame, String> {
    serde_json::from_str(line).map_err(|e| e.to_string())
}

impl LandmarkSource for ReplaySource {
    fn detect(
        &mut self,
        _timestamp_ms: f64,
    ) -> Result<Vec<Hand>, HandOrbitError> {
        match self.frames.pop_front() {
            None => Ok(Vec::new()),
            Some((_, Ok(frame))) => Ok(frame.hands),
            Some((line, Err(message))) => {
                log::debug!("recorded frame on line {line} is malformed");
                Err(HandOrbitError::LandmarkParse { line, message })
            }
        }
    }
}
