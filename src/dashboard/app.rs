//! Dashboard state: the loaded dataset, the filter controls and the view
//! battery for the current subset.

use std::time::Instant;

use crate::dataset::Dataset;
use crate::filter::{selector_options, CategoricalField, DashboardFilters, Selection, AGE_MAX, AGE_MIN};
use crate::observability::{log_event_with_fields, Event};
use crate::views::ViewBattery;

/// Seconds a status message stays visible
const STATUS_TTL_SECS: u64 = 4;

/// Main dashboard state.
pub struct DashboardApp {
    /// Current active tab
    pub current_tab: Tab,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message with creation time
    pub status_message: Option<(String, Instant)>,
    dataset: Dataset,
    filters: DashboardFilters,
    school_options: Vec<Selection>,
    sex_options: Vec<Selection>,
    battery: ViewBattery,
}

impl DashboardApp {
    /// Build the app with default filters and compute the first battery
    pub fn new(dataset: Dataset) -> Self {
        let school_options = selector_options(dataset.records(), CategoricalField::School);
        let sex_options = selector_options(dataset.records(), CategoricalField::Sex);
        let filters = DashboardFilters::default();
        let battery = ViewBattery::compute(&filters.to_filter_set().apply(dataset.records()));

        Self {
            current_tab: Tab::default(),
            should_quit: false,
            status_message: None,
            dataset,
            filters,
            school_options,
            sex_options,
            battery,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &DashboardFilters {
        &self.filters
    }

    pub fn battery(&self) -> &ViewBattery {
        &self.battery
    }

    pub fn school_options(&self) -> &[Selection] {
        &self.school_options
    }

    pub fn sex_options(&self) -> &[Selection] {
        &self.sex_options
    }

    /// Recompute the battery from scratch for the current filters
    pub fn refresh(&mut self) {
        let filter_set = self.filters.to_filter_set();
        let subset = filter_set.apply(self.dataset.records());
        self.battery = ViewBattery::compute(&subset);

        log_event_with_fields(
            Event::FilterApplied,
            &[
                ("filters", &filter_set.describe()),
                ("matched", &subset.len().to_string()),
            ],
        );
    }

    pub fn cycle_school(&mut self) {
        self.filters.school = next_option(&self.school_options, &self.filters.school);
        self.set_status(format!("School: {}", self.filters.school));
        self.refresh();
    }

    pub fn cycle_sex(&mut self) {
        self.filters.sex = next_option(&self.sex_options, &self.filters.sex);
        self.set_status(format!("Sex: {}", self.filters.sex));
        self.refresh();
    }

    /// Move the lower age bound; it never passes the upper bound
    pub fn shift_age_min(&mut self, delta: i8) {
        let lo = shift(self.filters.age_min, delta).min(self.filters.age_max);
        self.set_age(lo, self.filters.age_max);
    }

    /// Move the upper age bound; it never passes the lower bound
    pub fn shift_age_max(&mut self, delta: i8) {
        let hi = shift(self.filters.age_max, delta).max(self.filters.age_min);
        self.set_age(self.filters.age_min, hi);
    }

    fn set_age(&mut self, lo: u8, hi: u8) {
        let next = self.filters.clone().with_age(lo, hi);
        if next != self.filters {
            self.filters = next;
            self.set_status(format!(
                "Age: {}-{}",
                self.filters.age_min, self.filters.age_max
            ));
            self.refresh();
        }
    }

    pub fn reset_filters(&mut self) {
        self.filters = DashboardFilters::default();
        self.set_status("Filters reset");
        self.refresh();
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > STATUS_TTL_SECS {
                self.status_message = None;
            }
        }
    }

    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
    }

    /// Jump to a specific tab by number (1-5).
    pub fn goto_tab(&mut self, num: u8) {
        self.current_tab = Tab::from_num(num);
    }
}

fn next_option(options: &[Selection], current: &Selection) -> Selection {
    let position = options.iter().position(|o| o == current);
    match position {
        Some(i) => options[(i + 1) % options.len()].clone(),
        None => Selection::All,
    }
}

fn shift(age: u8, delta: i8) -> u8 {
    let moved = i16::from(age) + i16::from(delta);
    moved.clamp(i16::from(AGE_MIN), i16::from(AGE_MAX)) as u8
}

/// Dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Performance,
    Characteristics,
    Factors,
    Cases,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Overview => Tab::Performance,
            Tab::Performance => Tab::Characteristics,
            Tab::Characteristics => Tab::Factors,
            Tab::Factors => Tab::Cases,
            Tab::Cases => Tab::Overview,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tab::Overview => Tab::Cases,
            Tab::Performance => Tab::Overview,
            Tab::Characteristics => Tab::Performance,
            Tab::Factors => Tab::Characteristics,
            Tab::Cases => Tab::Factors,
        }
    }

    pub fn from_num(num: u8) -> Self {
        match num {
            2 => Tab::Performance,
            3 => Tab::Characteristics,
            4 => Tab::Factors,
            5 => Tab::Cases,
            _ => Tab::Overview,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Performance => 1,
            Tab::Characteristics => 2,
            Tab::Factors => 3,
            Tab::Cases => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Performance => "Performance",
            Tab::Characteristics => "Characteristics",
            Tab::Factors => "Factors",
            Tab::Cases => "Cases",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[
            Tab::Overview,
            Tab::Performance,
            Tab::Characteristics,
            Tab::Factors,
            Tab::Cases,
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::dataset::StudentRecord;
    use std::path::Path;

    pub(crate) fn record(school: &str, sex: &str, age: u8, g1: i32, g3: i32) -> StudentRecord {
        StudentRecord {
            school: school.into(),
            sex: sex.into(),
            age,
            studytime: 2,
            failures: 0,
            schoolsup: false,
            famsup: true,
            absences: 2,
            g1,
            g2: g1,
            g3,
        }
    }

    pub(crate) fn sample_app() -> DashboardApp {
        let records = vec![
            record("GP", "F", 15, 10, 12),
            record("GP", "M", 16, 8, 9),
            record("MS", "F", 18, 14, 15),
            record("GP", "F", 21, 6, 11),
        ];
        DashboardApp::new(Dataset::from_records(records, Path::new("test.csv")))
    }

    #[test]
    fn test_initial_state_covers_everything() {
        let app = sample_app();
        assert_eq!(app.current_tab, Tab::Overview);
        assert_eq!(app.battery().total, 4);
        assert_eq!(app.filters(), &DashboardFilters::default());
        assert_eq!(app.school_options().len(), 3);
        assert_eq!(app.school_options()[0], Selection::All);
    }

    #[test]
    fn test_cycle_school_wraps_to_all() {
        let mut app = sample_app();

        app.cycle_school();
        assert_eq!(app.filters().school, Selection::Only("GP".into()));
        assert_eq!(app.battery().total, 3);

        app.cycle_school();
        assert_eq!(app.filters().school, Selection::Only("MS".into()));
        assert_eq!(app.battery().total, 1);

        app.cycle_school();
        assert_eq!(app.filters().school, Selection::All);
        assert_eq!(app.battery().total, 4);
    }

    #[test]
    fn test_age_bounds_never_cross() {
        let mut app = sample_app();

        for _ in 0..20 {
            app.shift_age_min(1);
        }
        assert_eq!(app.filters().age_min, AGE_MAX);
        assert_eq!(app.filters().age_max, AGE_MAX);
        assert_eq!(app.battery().total, 0);

        app.shift_age_max(-3);
        assert_eq!(app.filters().age_max, AGE_MAX);

        app.reset_filters();
        app.shift_age_max(-5);
        assert_eq!((app.filters().age_min, app.filters().age_max), (15, 17));
        assert_eq!(app.battery().total, 2);
    }

    #[test]
    fn test_empty_subset_has_undefined_means() {
        let mut app = sample_app();
        app.cycle_sex(); // F
        app.cycle_school(); // GP
        app.shift_age_min(2); // 17..22
        assert_eq!(app.battery().total, 1);

        app.shift_age_max(-2); // 17..20
        assert!(app.battery().is_empty());
        assert_eq!(app.battery().means.g3, None);
    }

    #[test]
    fn test_tab_navigation() {
        let mut app = sample_app();
        app.previous_tab();
        assert_eq!(app.current_tab, Tab::Cases);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Overview);
        app.goto_tab(4);
        assert_eq!(app.current_tab, Tab::Factors);
        assert_eq!(Tab::all().len(), 5);
    }
}
