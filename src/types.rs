//! Screens and menu entries of the terminal interface.
//!
//! These are plain values: the input handlers replace the current [`Screen`] wholesale and the
//! drawing code matches on it, so no screen keeps state of its own.

/// Screen currently displayed.
///
/// Menu screens carry the highlighted entry so that going back to a menu lands on the entry that
/// led away from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu with the highlighted entry.
    MainMenu(MainMenuItem),
    /// Options menu with the highlighted entry.
    OptionsMenu(OptionsMenuItem),
    /// Maze being generated or finished.
    InGame,
}

/// Entries of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// Starts a run with the current options.
    Generate,
    /// Opens the options menu.
    Options,
    /// Leaves the application.
    Quit,
}

impl MainMenuItem {
    /// Entry below this one, staying on the last.
    pub(crate) const fn down(self) -> Self {
        match self {
            Self::Generate => Self::Options,
            Self::Options | Self::Quit => Self::Quit,
        }
    }

    /// Entry above this one, staying on the first.
    pub(crate) const fn up(self) -> Self {
        match self {
            Self::Generate | Self::Options => Self::Generate,
            Self::Quit => Self::Options,
        }
    }
}

/// Entries of the options menu.
///
/// Selecting one of the first three entries changes its value in place instead of opening a
/// submenu; the value is shown next to the entry's label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OptionsMenuItem {
    /// Cycles through the generation algorithms.
    Algorithm,
    /// Cycles through the offered grid sizes.
    GridSize,
    /// Toggles step-by-step animation.
    Animation,
    /// Returns to the main menu.
    Back,
}

impl OptionsMenuItem {
    /// Entry below this one, staying on the last.
    pub(crate) const fn down(self) -> Self {
        match self {
            Self::Algorithm => Self::GridSize,
            Self::GridSize => Self::Animation,
            Self::Animation | Self::Back => Self::Back,
        }
    }

    /// Entry above this one, staying on the first.
    pub(crate) const fn up(self) -> Self {
        match self {
            Self::Algorithm | Self::GridSize => Self::Algorithm,
            Self::Animation => Self::GridSize,
            Self::Back => Self::Animation,
        }
    }
}

/// Menu kinds sharing the centered bordered layout.
///
/// The entry count sizes the popup: one line per entry plus the border.
#[derive(Clone, Copy, Debug)]
pub(crate) enum MenuType {
    /// Main menu with its number of entries.
    MainMenu(u8),
    /// Options menu with its number of entries.
    OptionsMenu(u8),
}

impl MenuType {
    /// Title drawn in the menu border.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::OptionsMenu(_) => "Options Menu",
        }
    }

    /// Number of entries.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::OptionsMenu(value) => *value,
        }
    }
}
