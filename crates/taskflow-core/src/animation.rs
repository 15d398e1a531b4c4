//! Animation Presets
//!
//! Cosmetic timings and style values for the calendar and task list. No state
//! survives an interaction; everything is a scheduled style change.

/// Staggered fade/slide entrance for a list of elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    /// Transform applied before the element is revealed
    pub offset: &'static str,
    pub settled: &'static str,
    pub transition: &'static str,
    pub start_ms: u32,
    pub step_ms: u32,
}

impl Entrance {
    /// Task cards on the task list; the step comes from configuration
    pub const fn task_cards(step_ms: u32) -> Self {
        Self {
            offset: "translateY(20px)",
            settled: "translateY(0)",
            transition: "all 0.5s ease-out",
            start_ms: 0,
            step_ms,
        }
    }

    pub const CALENDAR_DAYS: Entrance = Entrance {
        offset: "translateY(20px)",
        settled: "translateY(0)",
        transition: "all 0.4s ease-out",
        start_ms: 0,
        step_ms: 30,
    };

    /// Agenda cards enter after the calendar grid has mostly settled
    pub const AGENDA_CARDS: Entrance = Entrance {
        offset: "translateX(-20px)",
        settled: "translateX(0)",
        transition: "all 0.5s ease-out",
        start_ms: 800,
        step_ms: 100,
    };

    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.start_ms.saturating_add(index.saturating_mul(self.step_ms))
    }
}

pub const CALENDAR_GRID_SELECTOR: &str = ".grid.grid-cols-7.gap-1";
pub const CALENDAR_DAY_SELECTOR: &str = ".grid.grid-cols-7.gap-1 > div";
pub const AGENDA_CARD_SELECTOR: &str = ".space-y-3 > div";
/// Marker rendered inside a day that has tasks
pub const TASK_INDICATOR_SELECTOR: &str = ".bg-indigo-100";
pub const MONTH_NAV_SELECTOR: &str = "a[href*=\"month=\"]";

pub const HOVER_SCALE: &str = "scale(1.02)";
pub const REST_SCALE: &str = "scale(1)";
pub const HOVER_TRANSITION: &str = "transform 0.2s ease-out";

/// Highlight shown briefly when a day with tasks is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    pub background: &'static str,
    pub border: &'static str,
    pub duration_ms: u32,
}

pub const DAY_FLASH: Flash = Flash {
    background: "#e0e7ff",
    border: "#6366f1",
    duration_ms: 300,
};

/// Feedback on month navigation links while the next page loads
pub const NAV_PRESS_OPACITY: &str = "0.7";
pub const NAV_PRESS_TRANSFORM: &str = "scale(0.95)";

/// Padding cells render nothing or a literal `0`
pub fn is_blank_day(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text == "0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays() {
        assert_eq!(Entrance::CALENDAR_DAYS.delay_for(0), 0);
        assert_eq!(Entrance::CALENDAR_DAYS.delay_for(10), 300);
        assert_eq!(Entrance::AGENDA_CARDS.delay_for(2), 1000);
        assert_eq!(Entrance::task_cards(100).delay_for(3), 300);
        assert_eq!(Entrance::AGENDA_CARDS.delay_for(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_blank_days() {
        assert!(is_blank_day("  "));
        assert!(is_blank_day(" 0 "));
        assert!(!is_blank_day("14\n 2 tasks"));
    }
}
