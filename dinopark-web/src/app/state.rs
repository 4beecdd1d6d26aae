use std::sync::Arc;

use crate::repository::DinosaurRepository;
use crate::views::Renderer;

/// Collaborators shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub dinosaurs: Arc<dyn DinosaurRepository>,
    pub views: Arc<dyn Renderer>,
}

impl AppState {
    pub fn new(dinosaurs: Arc<dyn DinosaurRepository>, views: Arc<dyn Renderer>) -> Arc<Self> {
        Arc::new(Self { dinosaurs, views })
    }
}
