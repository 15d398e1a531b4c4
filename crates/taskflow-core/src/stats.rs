//! Dashboard Data
//!
//! Aggregates are computed by the server and rendered into the page; this
//! module only reads them back into a typed snapshot.

/// Element ids the server renders the aggregates into
pub mod ids {
    pub const TOTAL: &str = "totalTasks";
    pub const COMPLETED: &str = "completedTasks";
    pub const PENDING: &str = "pendingTasks";
    pub const HIGH: &str = "highPriorityCount";
    pub const MEDIUM: &str = "mediumPriorityCount";
    pub const LOW: &str = "lowPriorityCount";
    pub const WEEKLY_VALUES: &str = "weeklyData";
    pub const WEEKLY_LABELS: &str = "weeklyLabels";
    pub const COMPLETION_PERCENTAGE: &str = "completionPercentage";
}

/// Text content lookup by element id
pub trait PageText {
    fn text_of(&self, id: &str) -> Option<String>;
}

/// Leading decimal integer of `text`, 0 when there is none
///
/// Digit runs beyond `u32::MAX` saturate.
pub fn parse_count(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].bytes().fold(0u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    pub priorities: PriorityCounts,
}

impl DashboardStats {
    pub fn read(page: &impl PageText) -> Self {
        let count = |id: &str| page.text_of(id).map(|t| parse_count(&t)).unwrap_or(0);
        Self {
            total: count(ids::TOTAL),
            completed: count(ids::COMPLETED),
            pending: count(ids::PENDING),
            priorities: PriorityCounts {
                high: count(ids::HIGH),
                medium: count(ids::MEDIUM),
                low: count(ids::LOW),
            },
        }
    }

    /// `round(100 * completed / total)`, 0 for an empty list
    pub fn completion_percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let completed = u64::from(self.completed);
        let total = u64::from(self.total);
        // Integer form of floor(x + 0.5)
        ((200 * completed + total) / (2 * total)) as u32
    }

    pub fn completion_label(&self) -> String {
        format!("{}%", self.completion_percentage())
    }
}

pub const DEFAULT_WEEK_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Completions per day for the trend chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

impl Default for WeeklySeries {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            values: vec![0; 7],
        }
    }
}

fn default_labels() -> Vec<String> {
    DEFAULT_WEEK_LABELS.iter().map(|l| l.to_string()).collect()
}

impl WeeklySeries {
    /// Parse the two comma-separated payloads
    ///
    /// Either payload missing yields the default week. A blank payload falls
    /// back to its own default half.
    pub fn parse(values: Option<&str>, labels: Option<&str>) -> Self {
        let (Some(values), Some(labels)) = (values, labels) else {
            return Self::default();
        };
        let values = values.trim();
        let labels = labels.trim();
        Self {
            values: if values.is_empty() {
                vec![0; 7]
            } else {
                values.split(',').map(parse_count).collect()
            },
            labels: if labels.is_empty() {
                default_labels()
            } else {
                labels.split(',').map(|l| l.trim().to_string()).collect()
            },
        }
    }

    pub fn read(page: &impl PageText) -> Self {
        Self::parse(
            page.text_of(ids::WEEKLY_VALUES).as_deref(),
            page.text_of(ids::WEEKLY_LABELS).as_deref(),
        )
    }
}

/// Everything the dashboard renderer needs, read in one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub weekly: WeeklySeries,
}

impl DashboardSnapshot {
    pub fn read(page: &impl PageText) -> Self {
        Self {
            stats: DashboardStats::read(page),
            weekly: WeeklySeries::read(page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakePage(HashMap<&'static str, &'static str>);

    impl PageText for FakePage {
        fn text_of(&self, id: &str) -> Option<String> {
            self.0.get(id).map(|t| t.to_string())
        }
    }

    fn stats(total: u32, completed: u32) -> DashboardStats {
        DashboardStats {
            total,
            completed,
            pending: total - completed,
            ..Default::default()
        }
    }

    #[test]
    fn test_completion_percentage_rounds() {
        assert_eq!(stats(0, 0).completion_label(), "0%");
        assert_eq!(stats(5, 2).completion_label(), "40%");
        assert_eq!(stats(3, 1).completion_label(), "33%");
        assert_eq!(stats(3, 2).completion_label(), "67%");
        assert_eq!(stats(8, 1).completion_label(), "13%");
        assert_eq!(stats(4, 4).completion_label(), "100%");
    }

    #[test]
    fn test_parse_count_like_parse_int() {
        assert_eq!(parse_count(" 12 "), 12);
        assert_eq!(parse_count("7 tasks"), 7);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("n/a"), 0);
        assert_eq!(parse_count("-3"), 0);
    }

    #[test]
    fn test_parse_count_saturates() {
        assert_eq!(parse_count("4294967295"), u32::MAX);
        assert_eq!(parse_count("4294967296"), u32::MAX);
        assert_eq!(parse_count("99999999999999999999 done"), u32::MAX);
    }

    #[test]
    fn test_read_stats_from_page() {
        let page = FakePage(HashMap::from([
            (ids::TOTAL, "10"),
            (ids::COMPLETED, "4"),
            (ids::PENDING, "6"),
            (ids::HIGH, "2"),
            (ids::LOW, "\n 5\n"),
        ]));
        let stats = DashboardStats::read(&page);
        assert_eq!(stats.total, 10);
        assert_eq!(stats.pending, 6);
        assert_eq!(stats.priorities, PriorityCounts { high: 2, medium: 0, low: 5 });
    }

    #[test]
    fn test_weekly_missing_elements_default() {
        let page = FakePage(HashMap::from([(ids::WEEKLY_VALUES, "1,2,3,4,5,6,7")]));
        let weekly = WeeklySeries::read(&page);
        assert_eq!(weekly.values, vec![0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(weekly.labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(WeeklySeries::parse(None, None), WeeklySeries::default());
    }

    #[test]
    fn test_weekly_parses_payloads() {
        let weekly = WeeklySeries::parse(Some(" 0, 3,1,x,2,0,4 "), Some("Thu, Fri,Sat,Sun,Mon,Tue,Wed"));
        assert_eq!(weekly.values, vec![0, 3, 1, 0, 2, 0, 4]);
        assert_eq!(weekly.labels[0], "Thu");
        assert_eq!(weekly.labels[1], "Fri");
    }

    #[test]
    fn test_weekly_blank_payload_uses_default_half() {
        let weekly = WeeklySeries::parse(Some("  "), Some("a,b"));
        assert_eq!(weekly.values, vec![0; 7]);
        assert_eq!(weekly.labels, vec!["a", "b"]);
    }
}
