use std::sync::Arc;

use skifield_core::application::SkiFieldTrackerService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SkiFieldTrackerService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SkiFieldTrackerService) -> Self {
        Self { args, service }
    }
}
