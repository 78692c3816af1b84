mod start_menu;
mod taskbar;
