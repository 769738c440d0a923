use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use crate::schedule::Schedules;

pub const INITIAL_SCHEDULE_ID: &str = "initial-schedule";
pub const OPTIMIZED_SCHEDULE_ID: &str = "optimized-schedule";
pub const RESULT_CONTAINER_ID: &str = "result";

/// An element whose text the bridge overwrites.
pub trait DisplayElement: Send + Sync {
    fn set_text_content(&self, text: &str);
}

/// The region that stays hidden until a response has been rendered.
pub trait Container: Send + Sync {
    fn show(&self);
}

/// The three handles the bridge writes to, injected instead of looked up.
#[derive(Clone)]
pub struct ResultView {
    pub initial: Arc<dyn DisplayElement>,
    pub optimized: Arc<dyn DisplayElement>,
    pub result: Arc<dyn Container>,
}

impl ResultView {
    pub fn new(
        initial: Arc<dyn DisplayElement>,
        optimized: Arc<dyn DisplayElement>,
        result: Arc<dyn Container>,
    ) -> Self {
        Self {
            initial,
            optimized,
            result,
        }
    }

    pub fn render(&self, schedules: &Schedules) {
        self.initial.set_text_content(&schedules.initial_schedule);
        self.optimized.set_text_content(&schedules.optimized_schedule);
        self.result.show();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementState {
    pub id: String,
    pub text_content: String,
    pub display: String,
}

#[derive(Debug)]
pub struct MemoryElement {
    state: Mutex<ElementState>,
}

impl MemoryElement {
    pub fn new(id: &str, display: &str) -> Self {
        Self {
            state: Mutex::new(ElementState {
                id: id.to_string(),
                text_content: String::new(),
                display: display.to_string(),
            }),
        }
    }

    // A poisoned lock still holds a usable element state.
    fn lock(&self) -> MutexGuard<'_, ElementState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> ElementState {
        self.lock().clone()
    }

    pub fn text_content(&self) -> String {
        self.lock().text_content.clone()
    }

    pub fn display(&self) -> String {
        self.lock().display.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.lock().display != "none"
    }
}

impl DisplayElement for MemoryElement {
    fn set_text_content(&self, text: &str) {
        self.lock().text_content = text.to_string();
    }
}

impl Container for MemoryElement {
    fn show(&self) {
        self.lock().display = "block".to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    pub initial_schedule: ElementState,
    pub optimized_schedule: ElementState,
    pub result: ElementState,
}

/// Stand-in for the treatment results page: two outputs and a hidden container.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    pub initial: Arc<MemoryElement>,
    pub optimized: Arc<MemoryElement>,
    pub result: Arc<MemoryElement>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    pub fn new() -> Self {
        Self {
            initial: Arc::new(MemoryElement::new(INITIAL_SCHEDULE_ID, "inline")),
            optimized: Arc::new(MemoryElement::new(OPTIMIZED_SCHEDULE_ID, "inline")),
            result: Arc::new(MemoryElement::new(RESULT_CONTAINER_ID, "none")),
        }
    }

    pub fn view(&self) -> ResultView {
        ResultView::new(
            self.initial.clone(),
            self.optimized.clone(),
            self.result.clone(),
        )
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            initial_schedule: self.initial.state(),
            optimized_schedule: self.optimized.state(),
            result: self.result.state(),
        }
    }
}
