use serde::Serialize;

/// Open/closed state of a widget's floating panel.
///
/// Purely presentational: toggling it never touches widget data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    #[default]
    Closed,
    Open,
}

impl Panel {
    pub fn open(&mut self) {
        *self = Self::Open;
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        };
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[cfg(test)]
#[path = "panel_test.rs"]
mod tests;
