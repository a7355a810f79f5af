// A simple ui action queue so panels don't need mutable references to the
// app state they draw.
#[derive(Debug, Clone)]
pub enum UiAction {
    RequestCat,
    ClearHistory,
    SelectCat(String),
    ToggleBan(String),
    Unban(String),
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}
