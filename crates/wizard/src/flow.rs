use tracing::debug;

use crate::{
    state::{WizardRules, WizardState},
    steps::{CompanionsStep, ProfileStep, ReviewStep, TripStep},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Profile,
    Companions,
    Trip,
    Review,
}

/// Screen-to-screen navigator. The wizard state lives inside the current variant
/// and is never shared with another screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardFlow {
    Home(WizardState),
    Profile(ProfileStep),
    Companions(CompanionsStep),
    Trip(TripStep),
    Review(ReviewStep),
}

impl WizardFlow {
    pub fn start(rules: WizardRules) -> Self {
        WizardFlow::Home(WizardState::with_rules(rules))
    }

    pub fn screen(&self) -> Screen {
        match self {
            WizardFlow::Home(_) => Screen::Home,
            WizardFlow::Profile(_) => Screen::Profile,
            WizardFlow::Companions(_) => Screen::Companions,
            WizardFlow::Trip(_) => Screen::Trip,
            WizardFlow::Review(_) => Screen::Review,
        }
    }

    pub fn state(&self) -> &WizardState {
        match self {
            WizardFlow::Home(state) => state,
            WizardFlow::Profile(step) => step.state(),
            WizardFlow::Companions(step) => step.state(),
            WizardFlow::Trip(step) => step.state(),
            WizardFlow::Review(step) => step.state(),
        }
    }

    pub fn next_allowed(&self) -> bool {
        match self {
            WizardFlow::Home(_) => true,
            WizardFlow::Profile(step) => step.next_allowed(),
            WizardFlow::Companions(step) => step.next_allowed(),
            WizardFlow::Trip(step) => step.next_allowed(),
            WizardFlow::Review(_) => false,
        }
    }

    /// Moves forward when the current screen's gate holds; otherwise stays put.
    pub fn advance(self) -> Self {
        let from = self.screen();
        let next = match self {
            WizardFlow::Home(state) => WizardFlow::Profile(ProfileStep::enter(state)),
            WizardFlow::Profile(step) => step
                .next()
                .map_or_else(WizardFlow::Profile, WizardFlow::Companions),
            WizardFlow::Companions(step) => step
                .next()
                .map_or_else(WizardFlow::Companions, WizardFlow::Trip),
            WizardFlow::Trip(step) => step
                .next()
                .map_or_else(WizardFlow::Trip, WizardFlow::Review),
            review @ WizardFlow::Review(_) => review,
        };
        debug!(?from, to = ?next.screen(), "wizard advance");
        next
    }

    /// Moves backward without validation, keeping every edit.
    pub fn back(self) -> Self {
        match self {
            home @ WizardFlow::Home(_) => home,
            WizardFlow::Profile(step) => WizardFlow::Home(step.prev()),
            WizardFlow::Companions(step) => WizardFlow::Profile(step.prev()),
            WizardFlow::Trip(step) => WizardFlow::Companions(step.prev()),
            WizardFlow::Review(step) => WizardFlow::Trip(step.prev()),
        }
    }

    /// Discards everything collected and returns home.
    pub fn restart(self) -> Self {
        Self::start(self.state().rules)
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::{AgeBand, Gender, Region, Theme};

    use super::*;

    #[test]
    fn gates_hold_the_flow_in_place() {
        let flow = WizardFlow::start(WizardRules::default()).advance();
        assert_eq!(flow.screen(), Screen::Profile);
        assert!(!flow.next_allowed());
        assert_eq!(flow.clone().advance(), flow);
    }

    #[test]
    fn walks_to_review_and_back_preserving_state() {
        let mut flow = WizardFlow::start(WizardRules::default()).advance();
        if let WizardFlow::Profile(step) = &mut flow {
            step.select_gender(Gender::Male);
            step.select_age_band(AgeBand::Forties);
            step.select_destination(Region::PhuQuoc);
        }
        flow = flow.advance();
        assert_eq!(flow.screen(), Screen::Companions);
        if let WizardFlow::Companions(step) = &mut flow {
            let id = step.state().companions.entries()[0].id();
            step.increment(id);
        }
        flow = flow.advance();
        assert_eq!(flow.screen(), Screen::Trip);
        if let WizardFlow::Trip(step) = &mut flow {
            step.toggle_theme(Theme::PoolVilla);
        }
        flow = flow.advance();
        assert_eq!(flow.screen(), Screen::Review);

        let before = flow.state().clone();
        let flow = flow.back().back().back().back();
        assert_eq!(flow.screen(), Screen::Home);
        assert_eq!(flow.state(), &before);

        let flow = flow.restart();
        assert_eq!(flow.state(), &WizardState::default());
    }

    #[test]
    fn restart_keeps_rules() {
        let rules = WizardRules {
            require_relation: true,
        };
        let flow = WizardFlow::start(rules).advance().restart();
        assert_eq!(flow.state().rules, rules);
    }
}
