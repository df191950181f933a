use crate::ui::tui::Tui;

/// Leave the terminal usable when a panic unwinds through raw mode.
pub fn set_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = Tui::restore();
        default_hook(panic_info);
    }));
}
