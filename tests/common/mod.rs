#![allow(dead_code)]

use parking_lot::Mutex;
use shortlink::application::services::LinkService;
use shortlink::domain::clock::ManualClock;
use shortlink::domain::registry::{DEFAULT_MAX_ATTEMPTS, LinkRegistry};
use shortlink::state::AppState;
use shortlink::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
use std::collections::VecDeque;
use std::sync::Arc;

pub const BASE_URL: &str = "http://short.yerva";

/// Hands out a fixed list of codes, then falls back to random ones.
pub struct ScriptedGenerator {
    codes: Mutex<VecDeque<String>>,
    fallback: RandomCodeGenerator,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            fallback: RandomCodeGenerator::default(),
        }
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fallback.generate())
    }
}

pub fn create_test_registry(
    generator: Arc<dyn CodeGenerator>,
) -> (Arc<LinkRegistry>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::default());
    let registry = Arc::new(LinkRegistry::new(
        generator,
        clock.clone(),
        DEFAULT_MAX_ATTEMPTS,
    ));
    (registry, clock)
}

pub fn create_test_state_with_codes(codes: &[&str]) -> (AppState, Arc<ManualClock>) {
    let (registry, clock) = create_test_registry(Arc::new(ScriptedGenerator::new(codes)));
    let link_service = Arc::new(LinkService::new(registry, BASE_URL, 30));

    (AppState::new(link_service), clock)
}

pub fn create_test_state() -> (AppState, Arc<ManualClock>) {
    create_test_state_with_codes(&[])
}
