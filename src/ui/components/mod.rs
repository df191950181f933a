pub mod pagination_bar;
pub mod sidebar;
pub mod spinner;
pub mod toast;
