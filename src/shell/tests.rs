// Shell event handling tests

use super::*;
use crate::calc::Key;
use crate::calc::types::Operator;
use crate::config::ArcaConfig;

fn shell_with(config: ArcaConfig, display_server: DisplayServer) -> (Shell, Instant) {
    let now = Instant::now();
    let context = AppContext::with_config(config, display_server);
    (Shell::new(&context, now), now)
}

fn default_shell() -> (Shell, Instant) {
    shell_with(ArcaConfig::default(), DisplayServer::X11)
}

fn open_calculator(shell: &mut Shell) -> CalculatorId {
    shell.dispatch(ShellEvent::LauncherClicked {
        anchor: Point::new(5.0, 1080.0),
    });
    shell.dispatch(ShellEvent::MenuSelected(MenuEntry::Calculator));
    shell.calculators().last().map(|w| w.id).unwrap()
}

fn press(shell: &mut Shell, id: CalculatorId, keys: &[Key]) {
    for &key in keys {
        shell.dispatch(ShellEvent::CalculatorKey { id, key });
    }
}

fn display(shell: &Shell, id: CalculatorId) -> String {
    shell
        .calculators()
        .iter()
        .find(|w| w.id == id)
        .map(|w| w.evaluator.display().to_string())
        .unwrap()
}

#[test]
fn test_clock_shows_time_immediately() {
    let (shell, _) = default_shell();
    let text = shell.clock_text();
    assert_eq!(text.len(), 8, "expected HH:MM:SS, got {:?}", text);
    assert_eq!(text.matches(':').count(), 2);
}

#[test]
fn test_clock_schedules_next_tick() {
    let (mut shell, start) = default_shell();
    assert_eq!(shell.until_next_tick(start), Some(Duration::from_millis(1000)));

    shell.dispatch(ShellEvent::Tick(start + Duration::from_millis(1000)));
    assert_eq!(
        shell.until_next_tick(start + Duration::from_millis(1200)),
        Some(Duration::from_millis(800))
    );
}

#[test]
fn test_bad_clock_format_degrades_only_clock() {
    let config = ArcaConfig {
        clock_format: "%H:%Q".to_string(),
        ..ArcaConfig::default()
    };
    let (mut shell, now) = shell_with(config, DisplayServer::X11);

    assert!(shell.is_degraded(Feature::Clock));
    assert!(!shell.is_degraded(Feature::StartMenu));
    assert_eq!(shell.clock_text(), "");
    assert_eq!(shell.until_next_tick(now), None);

    shell.dispatch(ShellEvent::Tick(now + Duration::from_secs(5)));
    assert_eq!(shell.clock_text(), "");

    // The rest of the shell still works
    let id = open_calculator(&mut shell);
    press(&mut shell, id, &[Key::Digit(1)]);
    assert_eq!(display(&shell, id), "1");
}

#[test]
fn test_launcher_opens_menu_at_anchor() {
    let (mut shell, _) = default_shell();
    assert!(!shell.menu().unwrap().is_open());

    shell.dispatch(ShellEvent::LauncherClicked {
        anchor: Point::new(5.0, 1080.0),
    });
    let menu = shell.menu().unwrap();
    assert_eq!(menu.anchor(), Some(Point::new(5.0, 1080.0)));
    assert_eq!(menu.entries(), &[MenuEntry::Calculator, MenuEntry::Quit]);
}

#[test]
fn test_menu_dismissed_by_outside_click() {
    let (mut shell, _) = default_shell();
    shell.dispatch(ShellEvent::LauncherClicked {
        anchor: Point::default(),
    });
    shell.dispatch(ShellEvent::MenuDismissed);
    assert!(!shell.menu().unwrap().is_open());
    assert!(shell.calculators().is_empty());
}

#[test]
fn test_empty_menu_degrades_launcher() {
    let config = ArcaConfig {
        menu_entries: Vec::new(),
        ..ArcaConfig::default()
    };
    let (mut shell, _) = shell_with(config, DisplayServer::X11);

    assert!(shell.is_degraded(Feature::StartMenu));
    assert!(shell.menu().is_none());

    shell.dispatch(ShellEvent::LauncherClicked {
        anchor: Point::default(),
    });
    shell.dispatch(ShellEvent::MenuSelected(MenuEntry::Quit));
    assert!(!shell.take_quit_request());
}

#[test]
fn test_selection_needs_open_menu() {
    let (mut shell, _) = default_shell();
    shell.dispatch(ShellEvent::MenuSelected(MenuEntry::Calculator));
    assert!(shell.calculators().is_empty());
}

#[test]
fn test_quit() {
    let (mut shell, _) = default_shell();
    shell.dispatch(ShellEvent::LauncherClicked {
        anchor: Point::default(),
    });
    shell.dispatch(ShellEvent::MenuSelected(MenuEntry::Quit));

    assert!(!shell.menu().unwrap().is_open());
    assert!(shell.take_quit_request());
    assert!(!shell.take_quit_request());
}

#[test]
fn test_calculators_are_independent() {
    let (mut shell, _) = default_shell();
    let first = open_calculator(&mut shell);
    let second = open_calculator(&mut shell);
    assert_ne!(first, second);
    assert!(!shell.menu().unwrap().is_open());

    press(
        &mut shell,
        first,
        &[Key::Digit(5), Key::Op(Operator::Add), Key::Digit(3), Key::Equals],
    );
    press(
        &mut shell,
        second,
        &[Key::Digit(9), Key::Op(Operator::Div), Key::Digit(0), Key::Equals],
    );

    assert_eq!(display(&shell, first), "8");
    assert_eq!(display(&shell, second), "Error");
}

#[test]
fn test_new_calculator_equals_keeps_zero() {
    let (mut shell, _) = default_shell();
    let id = open_calculator(&mut shell);
    press(&mut shell, id, &[Key::Equals]);
    assert_eq!(display(&shell, id), "0");
}

#[test]
fn test_calculator_error_is_contained() {
    let (mut shell, _) = default_shell();
    let id = open_calculator(&mut shell);
    press(
        &mut shell,
        id,
        &[Key::Digit(1), Key::Point, Key::Point, Key::Op(Operator::Add)],
    );
    assert_eq!(display(&shell, id), "1..");
    assert_eq!(shell.calculators()[0].evaluator.operation(), None);

    // Keys for a calculator that no longer exists are dropped
    shell.dispatch(ShellEvent::CalculatorClosed(id));
    press(&mut shell, id, &[Key::Digit(2)]);
    assert!(shell.calculators().is_empty());
}

#[test]
fn test_raise_on_x11_only() {
    let (mut x11, _) = default_shell();
    let id = open_calculator(&mut x11);
    assert!(x11.calculators()[0].raise_pending);
    x11.dispatch(ShellEvent::CalculatorShown(id));
    assert!(!x11.calculators()[0].raise_pending);

    let (mut wayland, _) = shell_with(ArcaConfig::default(), DisplayServer::Wayland);
    open_calculator(&mut wayland);
    assert!(!wayland.calculators()[0].raise_pending);
}

#[test]
fn test_screen_geometry() {
    let (mut shell, _) = default_shell();
    assert_eq!(shell.apply_screen_size(None), None);
    assert!(shell.is_degraded(Feature::Fullscreen));

    let (mut shell, _) = default_shell();
    let rect = shell.apply_screen_size(Some((1280.0, 720.0))).unwrap();
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, 0.0, 1280.0, 720.0));
    assert_eq!(shell.geometry(), Some(rect));
    assert!(!shell.is_degraded(Feature::Fullscreen));
}
