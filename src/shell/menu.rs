use crate::error::{ShellError, ShellResult};
use crate::shell::types::{Feature, MenuEntry, Point};

/// Start menu: fixed entries, open while anchored to a screen point
#[derive(Debug, Clone, PartialEq)]
pub struct PopupMenu {
    entries: Vec<MenuEntry>,
    anchor: Option<Point>,
}

impl PopupMenu {
    /// Build the menu from configured entry names.
    pub fn from_names(names: &[String]) -> ShellResult<Self> {
        if names.is_empty() {
            return Err(ShellError::init(Feature::StartMenu, "no menu entries configured"));
        }

        let entries = names
            .iter()
            .map(|name| {
                MenuEntry::from_name(name).ok_or_else(|| {
                    ShellError::init(Feature::StartMenu, format!("unknown menu entry {:?}", name))
                })
            })
            .collect::<ShellResult<Vec<_>>>()?;

        Ok(PopupMenu {
            entries,
            anchor: None,
        })
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    /// Open (or move) the menu so its top-left corner sits at `at`
    pub fn popup(&mut self, at: Point) {
        self.anchor = Some(at);
    }

    /// Pick an entry. Closes the menu; returns `None` if the menu was not
    /// open or doesn't offer `entry`.
    pub fn select(&mut self, entry: MenuEntry) -> Option<MenuEntry> {
        let was_open = self.anchor.take().is_some();
        (was_open && self.entries.contains(&entry)).then_some(entry)
    }

    pub fn dismiss(&mut self) {
        self.anchor = None;
    }
}
