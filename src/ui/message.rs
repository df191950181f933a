#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    Quit,
    NextPanel,
    PreviousPanel,
    SetPanel(usize),
}
