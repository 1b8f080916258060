//! Which section of the page is showing.
//!
//! Exactly one [`Tab`] is active at a time and [`ViewState::activate`] is the only
//! way to change it. Printing a card group goes through a [`PrintSession`], which
//! remembers the state it replaced and puts it back when finished.

use crate::models::PersonType;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    StudentCards,
    TeacherCards,
    Verification,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::StudentCards, Tab::TeacherCards, Tab::Verification];

    /// Identifier shared by a tab button and its content panel.
    pub fn id(self) -> &'static str {
        match self {
            Tab::StudentCards => "student-cards",
            Tab::TeacherCards => "teacher-cards",
            Tab::Verification => "verification",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::StudentCards => "Student ID Cards",
            Tab::TeacherCards => "Teacher ID Cards",
            Tab::Verification => "Verification",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Tab::ALL.into_iter().find(|t| t.id() == id)
    }

    /// The card section holding a group.
    pub fn cards_for(person_type: PersonType) -> Self {
        match person_type {
            PersonType::Student => Tab::StudentCards,
            PersonType::Teacher => Tab::TeacherCards,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    active: Tab,
    printing: Option<PersonType>,
}

impl ViewState {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn printing(&self) -> Option<PersonType> {
        self.printing
    }

    pub fn activate(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Whether a content panel is shown. While printing, only the printed group is.
    pub fn is_visible(&self, tab: Tab) -> bool {
        match self.printing {
            Some(group) => tab == Tab::cards_for(group),
            None => self.is_active(tab),
        }
    }

    /// Switch to print layout for one card group.
    ///
    /// Returns `None` while another print is in progress; only one session may own
    /// the layout at a time.
    pub fn begin_print(&mut self, group: PersonType) -> Option<PrintSession> {
        if self.printing.is_some() {
            return None;
        }
        let previous = *self;
        self.printing = Some(group);
        self.active = Tab::cards_for(group);
        Some(PrintSession { previous })
    }
}

/// Token for an in-progress print; hand it back to restore the page.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "finish the session to restore the previous view"]
pub struct PrintSession {
    previous: ViewState,
}

impl PrintSession {
    pub fn finish(self, state: &mut ViewState) {
        *state = self.previous;
    }
}
