// Chat session: transcript, the modal's view model, the completion service
// seam and the controller that ties them together.

pub mod controller;
pub mod panel;
pub mod prompts;
pub mod service;
pub mod transcript;
