// Common test utilities and fixtures
#![allow(dead_code)]

use axum::Router;
use dinopark_common::Dinosaur;
use dinopark_web::app::{build_app, AppState};
use dinopark_web::repository::InMemoryDinosaurRepository;
use dinopark_web::views::{RenderError, Renderer, TemplateRenderer};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// The two-record park used across tests.
pub fn sample_dinosaurs() -> Vec<Dinosaur> {
    vec![
        Dinosaur::new(1, "Tyrannosaurus", "Tyrannosaurus")
            .with_length(12)
            .carnivorous(true),
        Dinosaur::new(2, "Stegosaurus", "Stegosaurus").with_length(9),
    ]
}

/// N distinct records with ids 1..=n.
pub fn numbered_dinosaurs(n: i32) -> Vec<Dinosaur> {
    (1..=n)
        .map(|id| Dinosaur::new(id, format!("Dino {id}"), "Testosaurus"))
        .collect()
}

/// Renderer that remembers every call and returns a fixed body.
#[derive(Default)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<(String, Value)>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, template: &str, bindings: &Value) -> Result<String, RenderError> {
        self.calls
            .lock()
            .unwrap()
            .push((template.to_string(), bindings.clone()));
        Ok(format!("rendered {template}"))
    }
}

/// Application over an in-memory store and the real templates.
pub fn create_test_app(records: Vec<Dinosaur>) -> Router {
    let repo = InMemoryDinosaurRepository::with_records(records);
    let views = TemplateRenderer::new().expect("templates must load");
    build_app(AppState::new(Arc::new(repo), Arc::new(views)))
}

/// Application over an in-memory store and a recording renderer.
pub fn create_recording_app(records: Vec<Dinosaur>) -> (Router, Arc<RecordingRenderer>) {
    let repo = InMemoryDinosaurRepository::with_records(records);
    let views = Arc::new(RecordingRenderer::default());
    let app = build_app(AppState::new(Arc::new(repo), views.clone()));
    (app, views)
}
