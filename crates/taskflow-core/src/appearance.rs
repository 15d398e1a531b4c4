//! Visual State Tables
//!
//! Class lists and labels the markup uses for each completion state. The UI
//! applies these verbatim; keeping them here lets the tables be checked
//! without a browser.

/// Classes to add and remove for one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassChange {
    pub add: &'static [&'static str],
    pub remove: &'static [&'static str],
}

impl ClassChange {
    /// The same change applied in reverse
    pub const fn inverted(self) -> Self {
        Self {
            add: self.remove,
            remove: self.add,
        }
    }
}

/// Applied to a toggle button while its request is in flight
pub const BUSY_CLASSES: &[&str] = &["opacity-50", "cursor-not-allowed"];

/// Selector of the card enclosing a task toggle button
pub const TASK_CARD_SELECTOR: &str = ".bg-white\\/80";

const TASK_BUTTON_DONE: ClassChange = ClassChange {
    add: &["bg-green-500", "border-green-500"],
    remove: &["border-gray-300"],
};

const TASK_TITLE_DONE: ClassChange = ClassChange {
    add: &["line-through", "text-gray-500"],
    remove: &[],
};

const TASK_DESCRIPTION_DONE: ClassChange = ClassChange {
    add: &["line-through"],
    remove: &[],
};

const PROJECT_BADGE_DONE: ClassChange = ClassChange {
    add: &["bg-green-100", "text-green-800"],
    remove: &["bg-blue-100", "text-blue-800"],
};

/// Checkmark drawn inside a completed task button
pub const CHECKMARK_SVG: &str = r#"<svg class="w-4 h-4 text-white" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"></path></svg>"#;

fn pick(done: ClassChange, completed: bool) -> ClassChange {
    if completed {
        done
    } else {
        done.inverted()
    }
}

/// How a task card looks in one completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskAppearance {
    pub button: ClassChange,
    pub button_html: &'static str,
    pub title: ClassChange,
    pub description: ClassChange,
}

impl TaskAppearance {
    pub fn for_state(completed: bool) -> Self {
        Self {
            button: pick(TASK_BUTTON_DONE, completed),
            button_html: if completed { CHECKMARK_SVG } else { "" },
            title: pick(TASK_TITLE_DONE, completed),
            description: pick(TASK_DESCRIPTION_DONE, completed),
        }
    }
}

/// How a project row looks in one completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectAppearance {
    pub button_label: &'static str,
    pub badge_label: &'static str,
    pub badge: ClassChange,
}

impl ProjectAppearance {
    pub fn for_state(completed: bool) -> Self {
        Self {
            button_label: if completed { "Mark as Active" } else { "Mark as Completed" },
            badge_label: if completed { "Completed" } else { "Active" },
            badge: pick(PROJECT_BADGE_DONE, completed),
        }
    }

    /// Element id of the status badge for `project_id`
    pub fn badge_id(project_id: &str) -> String {
        format!("project-status-{}", project_id)
    }
}
