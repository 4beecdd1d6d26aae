// Handlers module - Centralizes all request handlers
pub mod dinosaurs;
