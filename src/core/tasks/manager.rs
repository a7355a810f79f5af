use std::{
    sync::mpsc,
    thread,
};

use super::TaskResult;
use crate::core::{
    ban_list::BanList,
    cat_api::CatApi,
    fetch::fetch_acceptable_cat,
};

/// Runs fetch rounds off the GUI thread and hands results back over a
/// channel the GUI drains every frame.
pub struct TaskManager {
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();

        Self { receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    /// One fetch round on a worker thread. `bans` is the registry as it
    /// stood when the user clicked; acceptance is checked against that
    /// snapshot.
    pub fn fetch_cat(&self, api: CatApi, bans: BanList) {
        let sender = self.sender.clone();

        thread::spawn(move || {
            let mut api = api;
            let result = fetch_acceptable_cat(&mut api, &bans).map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::CatFetch(result));
        });
    }
}
