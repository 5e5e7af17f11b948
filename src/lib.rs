// ABOUTME: Library module for the vitality program.
// ABOUTME: Resolves YAML slide descriptions into render-ready presentation models.

// Reexport modules
pub mod compile;
pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod document;
pub mod errors;
pub mod index;
pub mod model;
pub mod objects;
pub mod presentation;
pub mod shorthand;
pub mod slides;
pub mod utils;
pub mod watch;

// Reexport common types and functions
pub use compile::{compile_presentation, model_to_json, write_model_to_file};
pub use config::Config;
pub use defaults::{resolve_defaults, ResolvedDefaults};
pub use dispatch::{classify_slide, dispatch_slide, SlideShape};
pub use document::{load_document, parse_document};
pub use errors::{Result, VitalityError};
pub use index::index_slide_ids;
pub use model::{PresentationModel, Slide, SlideLayout, SlideObject};
pub use objects::carry_objects;
pub use presentation::build_presentation;
pub use watch::{watch_presentation, WatchConfig};
