//! Terminal setup and restoration

use crossterm::event::DisableMouseCapture;
use crossterm::execute;

/// Install a panic hook that restores the terminal and releases mouse capture
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}
