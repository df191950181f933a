use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x0061afef);
pub const SECONDARY: Color = Color::from_u32(0x0098c379);
pub const NEUTRAL: Color = Color::from_u32(0x004b5263);
pub const BACKGROUND: Color = Color::from_u32(0x00101216);
pub const WARNING: Color = Color::from_u32(0x00e5c07b);
pub const DANGER: Color = Color::from_u32(0x00e06c75);
