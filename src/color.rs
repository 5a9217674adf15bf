//! Highlight colours, as sent by the server in HSL notation

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use csscolorparser::Color;

/// The highlight a view starts with, before any task has been loaded or completed (pure red)
pub const DEFAULT_HIGHLIGHT: &str = "0,100%,50%";

/// A hue-saturation-lightness triple, e.g. `"120,100%,50%"`.
///
/// The server computes it from how overdue a task is (from green on its due date to red when it is not worth any point anymore).
/// The raw string is kept verbatim, so that it can be handed back to a renderer exactly as it was received.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hsl {
    triple: String,
}

impl Hsl {
    pub fn new<S: ToString>(triple: S) -> Self {
        Self { triple: triple.to_string() }
    }

    pub fn as_str(&self) -> &str {
        &self.triple
    }

    /// Parse this triple into an actual colour, e.g. to render it on a terminal
    pub fn to_color(&self) -> Result<Color, Box<dyn Error>> {
        let css = format!("hsl({})", self.triple);
        csscolorparser::parse(&css)
            .map_err(|err| format!("Invalid HSL triple {:?}: {}", self.triple, err).into())
    }
}

impl Default for Hsl {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT)
    }
}

impl From<&str> for Hsl {
    fn from(triple: &str) -> Self {
        Self::new(triple)
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.triple)
    }
}
