use std::sync::Arc;

use skinrelay_core::application::SkinRelayService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<SkinRelayService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SkinRelayService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
