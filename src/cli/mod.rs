pub mod commands;
pub mod parser;

use std::path::PathBuf;

use crate::app::Controller;
use crate::config::Config;
use crate::errors::AppResult;
use crate::gateway::Gateway;
use crate::ui::notice::Notices;
use crate::validation::Validator;

/// State shared by every command of one run (or of one interactive shell).
pub struct Session {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub controller: Controller,
    employees_loaded: bool,
    events_loaded: bool,
}

impl Session {
    pub fn new(cfg: Config, config_path: PathBuf) -> AppResult<Self> {
        let controller = Controller::new(
            Gateway::from_config(&cfg),
            Validator::with_default_forms()?,
            Notices::new(cfg.notice_timeout()),
        );

        Ok(Self {
            cfg,
            config_path,
            controller,
            employees_loaded: false,
            events_loaded: false,
        })
    }

    /// Fetch employees the first time they are needed; later calls keep the
    /// in-memory list (and anything appended to it).
    pub async fn ensure_employees(&mut self) {
        if !self.employees_loaded {
            self.controller.notices_mut().set_loading(true);
            self.controller.load_employees().await;
            self.controller.notices_mut().set_loading(false);
            self.employees_loaded = true;
        }
    }

    pub async fn ensure_events(&mut self) {
        if !self.events_loaded {
            self.controller.notices_mut().set_loading(true);
            self.controller.load_events().await;
            self.controller.notices_mut().set_loading(false);
            self.events_loaded = true;
        }
    }
}
