//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here.
//!
//! The career-track view owns one [`DialSelector`] for the company on
//! screen. Switching company replaces it with a fresh dial in its idle
//! state, so no selection leaks between companies.

use careertrack::{DialSelector, Point, RoleHistoryEntry, SelectionChange};
use chrono::NaiveDate;
use ratatui::layout::Rect;
use tracing::debug;

use crate::content::{Experience, Portfolio};
use crate::section::Section;

/// How keyboard input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Normal,
    /// Help overlay is shown
    Help,
}

/// Where the dial was last drawn, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    /// Area the dial occupies; the pointer is "on" the dial while inside it
    pub area: Rect,
    /// Height of a cell relative to its width
    pub cell_aspect: f64,
}

impl DialGeometry {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }

    /// Dial center in square units
    pub fn center(&self) -> Point {
        Point::new(
            f64::from(self.area.x) + f64::from(self.area.width) / 2.0,
            (f64::from(self.area.y) + f64::from(self.area.height) / 2.0) * self.cell_aspect,
        )
    }

    /// Middle of a cell in square units
    pub fn cell_point(&self, column: u16, row: u16) -> Point {
        Point::new(f64::from(column) + 0.5, (f64::from(row) + 0.5) * self.cell_aspect)
    }
}

/// Application state
#[derive(Debug)]
pub struct AppState {
    pub portfolio: Portfolio,
    /// Date "Present" resolves to
    pub today: NaiveDate,
    pub current_section: Section,
    pub interaction_mode: InteractionMode,
    pub should_quit: bool,
    /// Vertical scroll for text sections
    pub scroll: u16,
    /// Company shown on the career track
    pub selected_company: usize,
    /// Dial for the company shown, `None` when it has no roles
    pub dial: Option<DialSelector>,
    /// Set by the views module on every draw of the career track
    pub dial_geometry: Option<DialGeometry>,
    /// Whether the pointer is currently over the dial
    pub pointer_on_dial: bool,
    /// Cell height relative to width, from config
    pub cell_aspect: f64,
}

impl AppState {
    pub fn new(portfolio: Portfolio, today: NaiveDate, cell_aspect: f64) -> Self {
        debug!(%today, cell_aspect, "AppState::new: called");
        let dial = portfolio
            .experiences
            .first()
            .and_then(|exp| exp.role_history.dial());
        Self {
            portfolio,
            today,
            current_section: Section::default(),
            interaction_mode: InteractionMode::default(),
            should_quit: false,
            scroll: 0,
            selected_company: 0,
            dial,
            dial_geometry: None,
            pointer_on_dial: false,
            cell_aspect,
        }
    }

    /// Jump to a section, resetting scroll
    pub fn go_to(&mut self, section: Section) {
        debug!(?section, "AppState::go_to: called");
        if section != self.current_section {
            self.pointer_left();
            self.current_section = section;
            self.scroll = 0;
            self.dial_geometry = None;
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn current_experience(&self) -> Option<&Experience> {
        self.portfolio.experiences.get(self.selected_company)
    }

    /// Show another company, wrapping around
    pub fn select_company(&mut self, index: usize) {
        let count = self.portfolio.experiences.len();
        if count == 0 {
            return;
        }
        let index = index % count;
        debug!(index, "AppState::select_company: called");
        self.selected_company = index;
        self.dial = self.portfolio.experiences[index].role_history.dial();
        self.pointer_on_dial = false;
    }

    pub fn next_company(&mut self) {
        self.select_company(self.selected_company + 1);
    }

    pub fn prev_company(&mut self) {
        let count = self.portfolio.experiences.len().max(1);
        self.select_company(self.selected_company + count - 1);
    }

    /// Role the dial currently points at
    pub fn active_role(&self) -> Option<&RoleHistoryEntry> {
        let exp = self.current_experience()?;
        let dial = self.dial.as_ref()?;
        exp.role_history.get(dial.active_index())
    }

    /// Pointer moved to a cell; routes to the dial or treats it as leaving
    pub fn pointer_moved(&mut self, column: u16, row: u16) -> Option<SelectionChange> {
        let geometry = self.dial_geometry?;
        if !geometry.contains(column, row) {
            return self.pointer_left();
        }
        self.pointer_on_dial = true;
        let dial = self.dial.as_mut()?;
        dial.on_pointer_move(geometry.cell_point(column, row), geometry.center())
    }

    /// Pointer is no longer over the dial
    pub fn pointer_left(&mut self) -> Option<SelectionChange> {
        if !self.pointer_on_dial {
            return None;
        }
        self.pointer_on_dial = false;
        self.dial.as_mut()?.on_pointer_leave()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let portfolio = Portfolio::builtin().unwrap();
        AppState::new(portfolio, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(), 2.0)
    }

    fn geometry() -> DialGeometry {
        DialGeometry {
            area: Rect::new(10, 5, 40, 20),
            cell_aspect: 2.0,
        }
    }

    #[test]
    fn test_geometry() {
        let g = geometry();
        assert!(g.contains(10, 5));
        assert!(g.contains(49, 24));
        assert!(!g.contains(50, 24));
        assert!(!g.contains(9, 10));
        assert_eq!(g.center(), Point::new(30.0, 30.0));
        assert_eq!(g.cell_point(30, 5), Point::new(30.5, 11.0));
    }

    #[test]
    fn test_initial_company_and_dial() {
        let state = state();
        assert_eq!(state.selected_company, 0);
        let dial = state.dial.as_ref().unwrap();
        assert_eq!(dial.len(), 1);
        assert!(!dial.is_interactive());
    }

    #[test]
    fn test_company_navigation_wraps_and_resets_dial() {
        let mut state = state();
        state.prev_company();
        assert_eq!(state.selected_company, 2);
        assert_eq!(state.dial.as_ref().map(|d| d.active_index()), Some(2));
        assert_eq!(state.active_role().map(|r| r.role.as_str()), Some("Assistant Consultant"));
        state.next_company();
        assert_eq!(state.selected_company, 0);
    }

    #[test]
    fn test_pointer_moves_select_roles() {
        let mut state = state();
        state.select_company(2);
        state.dial_geometry = Some(geometry());

        // Above the center: first arc
        let change = state.pointer_moved(31, 6);
        assert_eq!(change, Some(SelectionChange { previous: 2, current: 0 }));
        assert!(state.pointer_on_dial);
        assert_eq!(state.active_role().map(|r| r.role.as_str()), Some("Associate Engineer"));

        // Below-right: second arc
        state.pointer_moved(40, 22);
        assert_eq!(state.dial.as_ref().unwrap().active_index(), 1);

        // Leaving the area returns to the latest role
        let change = state.pointer_moved(0, 0);
        assert_eq!(change, Some(SelectionChange { previous: 1, current: 2 }));
        assert!(!state.pointer_on_dial);
        assert_eq!(state.pointer_left(), None);
    }

    #[test]
    fn test_pointer_ignored_without_geometry() {
        let mut state = state();
        state.select_company(2);
        assert_eq!(state.pointer_moved(31, 6), None);
        assert_eq!(state.dial.as_ref().unwrap().active_index(), 2);
    }

    #[test]
    fn test_section_jump_releases_dial() {
        let mut state = state();
        state.go_to(Section::Experience);
        state.select_company(2);
        state.dial_geometry = Some(geometry());
        state.pointer_moved(31, 6);
        assert_eq!(state.dial.as_ref().unwrap().active_index(), 0);

        state.go_to(Section::Skills);
        assert!(!state.pointer_on_dial);
        assert_eq!(state.dial.as_ref().unwrap().active_index(), 2);

        state.go_to(Section::Experience);
        assert_eq!(state.dial.as_ref().unwrap().active_index(), 2);
    }

    #[test]
    fn test_go_to_resets_scroll() {
        let mut state = state();
        state.scroll_down(5);
        state.go_to(Section::Skills);
        assert_eq!(state.scroll, 0);
        state.scroll_down(3);
        state.scroll_up(10);
        assert_eq!(state.scroll, 0);
    }

    proptest::proptest! {
        #[test]
        fn prop_any_pointer_keeps_selection_in_range(column in 0u16..200, row in 0u16..100) {
            let mut state = state();
            state.select_company(2);
            state.dial_geometry = Some(geometry());
            state.pointer_moved(column, row);
            let dial = state.dial.as_ref().unwrap();
            proptest::prop_assert!(dial.active_index() < dial.len());
            if !state.pointer_on_dial {
                proptest::prop_assert_eq!(dial.active_index(), dial.len() - 1);
            }
        }
    }
}
