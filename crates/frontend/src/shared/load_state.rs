/// Lifecycle of a page's remote data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<String> {
        match self {
            LoadState::Error(msg) => Some(msg.clone()),
            _ => None,
        }
    }
}
