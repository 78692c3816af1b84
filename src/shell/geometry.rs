use crate::error::{ShellError, ShellResult};
use crate::shell::types::{Feature, ScreenRect};

/// Geometry of a window covering the whole screen, centered on it.
pub fn full_screen_geometry(screen_size: Option<(f32, f32)>) -> ShellResult<ScreenRect> {
    let Some((width, height)) = screen_size else {
        return Err(ShellError::init(Feature::Fullscreen, "screen size unavailable"));
    };
    if !(width > 0.0 && height > 0.0) {
        return Err(ShellError::init(
            Feature::Fullscreen,
            format!("bad screen size {}x{}", width, height),
        ));
    }

    Ok(centered(width, height, width, height))
}

/// Rectangle of `width`x`height` centered on a screen of the given size
pub fn centered(width: f32, height: f32, screen_width: f32, screen_height: f32) -> ScreenRect {
    ScreenRect {
        x: ((screen_width - width) / 2.0).max(0.0),
        y: ((screen_height - height) / 2.0).max(0.0),
        width,
        height,
    }
}
