use std::time::Duration;

use eframe::egui;

use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        BanList,
        CatApi,
        FetchOutcome,
        Session,
        MAX_ATTEMPTS,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        ban_panel::BanPanel,
        cat_view::CatView,
        error_modal::ErrorModal,
        history_panel::HistoryPanel,
        theme::{
            set_theme,
            Theme,
        },
    },
};

pub struct CatFinderApp {
    // Session state
    session: Session,
    ban_list: BanList,
    status: Option<String>,

    // UI state
    theme: Theme,
    error_modal: ErrorModal,

    // External services
    api: CatApi,
    task_manager: TaskManager,
}

impl CatFinderApp {
    pub fn new(cc: &eframe::CreationContext<'_>, api: CatApi) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, &theme);

        Self {
            session: Session::new(),
            ban_list: BanList::new(),
            status: None,
            theme,
            error_modal: ErrorModal::new(),
            api,
            task_manager: TaskManager::new(),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::CatFetch(result) => {
                self.session.finish_fetch();

                match result {
                    Ok(FetchOutcome::Found(record)) => {
                        self.status = None;
                        self.session.accept_cat(record);
                    }
                    Ok(FetchOutcome::Exhausted) => {
                        println!(
                            "Could not find a cat without banned attributes after {} attempts",
                            MAX_ATTEMPTS
                        );
                        self.status = Some(format!(
                            "No cat without banned attributes after {} attempts.",
                            MAX_ATTEMPTS
                        ));
                    }
                    Err(details) => {
                        self.error_modal.show_error(
                            "Fetch Error",
                            "Could not fetch a cat image.",
                            Some(details),
                        );
                    }
                }
            }
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::RequestCat => self.request_cat(),
            UiAction::ClearHistory => self.session.clear_all(),
            UiAction::SelectCat(id) => {
                if let Err(e) = self.session.select_current(&id) {
                    eprintln!("{}", e);
                }
            }
            UiAction::ToggleBan(value) => {
                if self.ban_list.toggle(&value) {
                    println!("Banned attribute: {}", value);
                } else {
                    println!("Unbanned attribute: {}", value);
                }
            }
            UiAction::Unban(value) => {
                if self.ban_list.remove(&value) {
                    println!("Unbanned attribute: {}", value);
                }
            }
        }
    }

    fn request_cat(&mut self) {
        // A round is already in flight; the extra click is dropped.
        if !self.session.begin_fetch() {
            return;
        }

        self.status = None;
        self.task_manager.fetch_cat(self.api.clone(), self.ban_list.clone());
    }
}

impl eframe::App for CatFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let mut queue = ActionQueue::new();

        HistoryPanel::show(ctx, &self.theme, &self.session, &mut queue);
        BanPanel::show(ctx, &self.theme, &self.ban_list, &mut queue);
        CatView::show(
            ctx,
            &self.theme,
            &self.session,
            &self.ban_list,
            self.status.as_deref(),
            &mut queue,
        );

        self.error_modal.show(ctx, &self.theme);

        for action in queue.drain() {
            self.apply_action(action);
        }

        // Keep frames coming while a worker is out, so its result is picked
        // up without waiting for input. Checked after the actions so the
        // frame that starts a fetch schedules the next one itself.
        if self.session.is_fetching() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
