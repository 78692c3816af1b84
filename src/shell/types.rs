use crate::calc::Key;

use std::fmt;
use std::time::Instant;

/// Shell features that can fail to initialize and be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Fullscreen,
    Clock,
    StartMenu,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Feature::Fullscreen => "full screen",
            Feature::Clock => "clock timer",
            Feature::StartMenu => "start menu",
        };
        f.write_str(name)
    }
}

/// Start menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Calculator,
    Quit,
}

impl MenuEntry {
    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Calculator => "Calculator",
            MenuEntry::Quit => "Quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "calculator" => Some(MenuEntry::Calculator),
            "quit" => Some(MenuEntry::Quit),
            _ => None,
        }
    }
}

/// Point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Screen-space rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    /// Position of `p` relative to this rectangle's origin
    pub fn to_local(&self, p: Point) -> Point {
        Point::new(p.x - self.x, p.y - self.y)
    }

    /// Screen position of `p`, given relative to this rectangle's origin
    pub fn to_global(&self, p: Point) -> Point {
        Point::new(p.x + self.x, p.y + self.y)
    }
}

/// Calculator windows are addressed by a per-shell counter
pub type CalculatorId = u64;

/// Everything the shell reacts to. Produced by the UI layer and handled
/// in order by `Shell::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellEvent {
    /// Frame tick; drives the clock timer
    Tick(Instant),
    /// Launcher clicked; `anchor` is its bottom-left corner on screen
    LauncherClicked { anchor: Point },
    MenuSelected(MenuEntry),
    /// Click outside an open menu
    MenuDismissed,
    CalculatorKey { id: CalculatorId, key: Key },
    /// First frame of a new calculator has been shown (and raised)
    CalculatorShown(CalculatorId),
    CalculatorClosed(CalculatorId),
}
