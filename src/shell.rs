//! Shell window state and event handling, independent of the UI toolkit
//!
//! The UI layer turns clicks and frame ticks into `ShellEvent`s and
//! renders whatever state this module exposes. Every handler failure is
//! logged here and never escapes `dispatch`.

pub mod clock;
pub mod geometry;
pub mod menu;
pub mod types;

#[cfg(test)]
mod tests;

use crate::calc::Evaluator;
use crate::context::AppContext;
use crate::error::{ShellError, ShellResult};
use crate::session::DisplayServer;

pub use clock::Clock;
pub use geometry::full_screen_geometry;
pub use menu::PopupMenu;
pub use types::{CalculatorId, Feature, MenuEntry, Point, ScreenRect, ShellEvent};

use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// One open calculator dialog, owned by the shell
pub struct CalculatorWindow {
    pub id: CalculatorId,
    pub evaluator: Evaluator,
    /// Raise and focus on the next frame (not done on Wayland)
    pub raise_pending: bool,
}

pub struct Shell {
    display_server: DisplayServer,
    clock: Option<Clock>,
    clock_text: String,
    menu: Option<PopupMenu>,
    geometry: Option<ScreenRect>,
    calculators: Vec<CalculatorWindow>,
    next_calculator_id: CalculatorId,
    degraded: Vec<Feature>,
    quit_requested: bool,
}

impl Shell {
    /// Set up the clock and start menu, then run the first clock update.
    ///
    /// A step that fails is logged and its feature left out.
    pub fn new(context: &AppContext, now: Instant) -> Self {
        let config = &context.config;
        let mut shell = Shell {
            display_server: context.display_server,
            clock: None,
            clock_text: String::new(),
            menu: None,
            geometry: None,
            calculators: Vec::new(),
            next_calculator_id: 1,
            degraded: Vec::new(),
            quit_requested: false,
        };

        let interval = Duration::from_millis(config.clock_interval_ms);
        shell.clock = shell.init_step(
            Feature::Clock,
            Clock::new(&config.clock_format, interval, now),
        );
        shell.menu = shell.init_step(Feature::StartMenu, PopupMenu::from_names(&config.menu_entries));

        shell.dispatch(ShellEvent::Tick(now));
        shell
    }

    /// Size the window to cover the screen. Returns the geometry to apply,
    /// or `None` if the screen size is unknown.
    pub fn apply_screen_size(&mut self, screen_size: Option<(f32, f32)>) -> Option<ScreenRect> {
        self.geometry = self.init_step(Feature::Fullscreen, full_screen_geometry(screen_size));
        self.geometry
    }

    fn init_step<T>(&mut self, feature: Feature, result: ShellResult<T>) -> Option<T> {
        match result {
            Ok(value) => {
                debug!("Initialized {}", feature);
                Some(value)
            }
            Err(e) => {
                error!("{}", e);
                if !self.degraded.contains(&feature) {
                    self.degraded.push(feature);
                }
                None
            }
        }
    }

    /// Handle one event. Failures are logged and otherwise ignored.
    pub fn dispatch(&mut self, event: ShellEvent) {
        if let Err(e) = self.handle(event) {
            error!("{}", e);
        }
    }

    fn handle(&mut self, event: ShellEvent) -> ShellResult<()> {
        match event {
            ShellEvent::Tick(now) => self.update_clock(now),
            ShellEvent::LauncherClicked { anchor } => self.show_start_menu(anchor),
            ShellEvent::MenuSelected(entry) => self.select_menu_entry(entry),
            ShellEvent::MenuDismissed => {
                if let Some(menu) = &mut self.menu {
                    menu.dismiss();
                }
                Ok(())
            }
            ShellEvent::CalculatorKey { id, key } => {
                let window = self.calculator_mut(id)?;
                window
                    .evaluator
                    .press(key)
                    .map_err(|e| ShellError::handler("calculator button", e))
            }
            ShellEvent::CalculatorShown(id) => {
                self.calculator_mut(id)?.raise_pending = false;
                Ok(())
            }
            ShellEvent::CalculatorClosed(id) => {
                self.calculators.retain(|w| w.id != id);
                info!("Closed calculator #{}", id);
                Ok(())
            }
        }
    }

    fn update_clock(&mut self, now: Instant) -> ShellResult<()> {
        let Some(clock) = &mut self.clock else {
            return Ok(());
        };
        if clock.poll(now) {
            self.clock_text = clock.render(&chrono::Local::now())?;
        }
        Ok(())
    }

    fn show_start_menu(&mut self, anchor: Point) -> ShellResult<()> {
        let menu = self
            .menu
            .as_mut()
            .ok_or_else(|| ShellError::handler("start menu", "menu unavailable"))?;
        menu.popup(anchor);
        debug!("Start menu opened at ({}, {})", anchor.x, anchor.y);
        Ok(())
    }

    fn select_menu_entry(&mut self, entry: MenuEntry) -> ShellResult<()> {
        let menu = self
            .menu
            .as_mut()
            .ok_or_else(|| ShellError::handler("menu entry", "menu unavailable"))?;
        let Some(entry) = menu.select(entry) else {
            return Err(ShellError::handler(
                "menu entry",
                format!("{} is not available", entry.label()),
            ));
        };

        info!("Start menu: {}", entry.label());
        match entry {
            MenuEntry::Calculator => self.open_calculator(),
            MenuEntry::Quit => self.quit_requested = true,
        }
        Ok(())
    }

    fn open_calculator(&mut self) {
        let id = self.next_calculator_id;
        self.next_calculator_id += 1;
        self.calculators.push(CalculatorWindow {
            id,
            evaluator: Evaluator::new(),
            raise_pending: !self.display_server.is_wayland(),
        });
        info!("Opened calculator #{}", id);
    }

    fn calculator_mut(&mut self, id: CalculatorId) -> ShellResult<&mut CalculatorWindow> {
        self.calculators
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| ShellError::handler("calculator", format!("no calculator #{}", id)))
    }

    pub fn clock_text(&self) -> &str {
        &self.clock_text
    }

    pub fn menu(&self) -> Option<&PopupMenu> {
        self.menu.as_ref()
    }

    pub fn calculators(&self) -> &[CalculatorWindow] {
        &self.calculators
    }

    /// Window placement on screen, once known
    pub fn geometry(&self) -> Option<ScreenRect> {
        self.geometry
    }

    pub fn is_degraded(&self, feature: Feature) -> bool {
        self.degraded.contains(&feature)
    }

    /// True once after "Quit" was picked
    pub fn take_quit_request(&mut self) -> bool {
        std::mem::take(&mut self.quit_requested)
    }

    /// When the clock next needs a frame; `None` without a clock
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.clock.as_ref().map(|clock| clock.until_next_tick(now))
    }
}
