use std::fmt;

/// `Adding` means the add-new row has focus and keystrokes go to the text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    Adding,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Browsing => write!(f, "BROWSE"),
            Mode::Adding => write!(f, "ADD"),
        }
    }
}
