use crate::core::{
    errors::CatFinderError,
    models::CatRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Fetching,
}

/// Per-session state: the accepted cats in acceptance order, the record the
/// UI is showing, and whether a fetch round is in flight. Owned by the GUI
/// thread.
#[derive(Debug)]
pub struct Session {
    cats: Vec<CatRecord>,
    current: Option<usize>,
    state: FetchState,
}

impl Session {
    pub fn new() -> Self {
        Self { cats: Vec::new(), current: None, state: FetchState::Idle }
    }

    pub fn cats(&self) -> &[CatRecord] {
        &self.cats
    }

    pub fn accept_cat(&mut self, record: CatRecord) {
        self.cats.push(record);
        self.current = Some(self.cats.len() - 1);
    }

    pub fn clear_all(&mut self) {
        self.cats.clear();
        self.current = None;
    }

    /// Points the display at a cat already in the history. An unknown id is
    /// a precondition violation; nothing changes and the caller is told.
    pub fn select_current(&mut self, id: &str) -> Result<(), CatFinderError> {
        match self.cats.iter().position(|cat| cat.id == id) {
            Some(index) => {
                self.current = Some(index);
                Ok(())
            }
            None => Err(CatFinderError::UnknownCat(id.to_string())),
        }
    }

    pub fn current_or_latest(&self) -> Option<&CatRecord> {
        match self.current {
            Some(index) => self.cats.get(index),
            None => self.cats.last(),
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.state == FetchState::Fetching
    }

    /// The busy guard: returns false when a round is already in flight, and
    /// the caller must drop the request.
    pub fn begin_fetch(&mut self) -> bool {
        if self.state == FetchState::Fetching {
            return false;
        }
        self.state = FetchState::Fetching;
        true
    }

    pub fn finish_fetch(&mut self) {
        self.state = FetchState::Idle;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> CatRecord {
        CatRecord {
            id: id.to_string(),
            image_url: format!("https://cdn2.thecatapi.com/images/{id}.jpg"),
            breeds: Vec::new(),
        }
    }

    #[test]
    fn test_accept_cat_appends_and_becomes_current() {
        let mut session = Session::new();
        session.accept_cat(record("a"));
        session.accept_cat(record("b"));

        assert_eq!(session.cats().len(), 2);
        assert_eq!(session.current_or_latest().unwrap().id, "b");
    }

    #[test]
    fn test_select_current_picks_an_older_cat() {
        let mut session = Session::new();
        session.accept_cat(record("a"));
        session.accept_cat(record("b"));

        session.select_current("a").unwrap();
        assert_eq!(session.current_or_latest().unwrap().id, "a");

        // A fresh acceptance moves the display to the newcomer.
        session.accept_cat(record("c"));
        assert_eq!(session.current_or_latest().unwrap().id, "c");
    }

    #[test]
    fn test_select_current_rejects_unknown_id() {
        let mut session = Session::new();
        session.accept_cat(record("a"));

        assert!(session.select_current("nope").is_err());
        assert_eq!(session.cats().len(), 1);
        assert_eq!(session.current_or_latest().unwrap().id, "a");
    }

    #[test]
    fn test_clear_all_empties_history_and_pointer() {
        let mut session = Session::new();
        session.accept_cat(record("a"));
        session.accept_cat(record("b"));
        session.accept_cat(record("c"));

        session.clear_all();

        assert!(session.cats().is_empty());
        assert!(session.current_or_latest().is_none());
    }

    #[test]
    fn test_begin_fetch_refuses_reentrant_requests() {
        let mut session = Session::new();

        assert!(session.begin_fetch());
        assert!(session.is_fetching());
        assert!(!session.begin_fetch());

        session.finish_fetch();
        assert!(session.begin_fetch());
    }
}
