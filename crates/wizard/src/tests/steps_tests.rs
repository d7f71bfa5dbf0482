use super::*;
use crate::state::{IncompleteWizard, WizardRules};

fn profile_step() -> ProfileStep {
    let mut step = ProfileStep::enter(WizardState::default());
    step.select_gender(Gender::Female);
    step.select_age_band(AgeBand::Twenties);
    step.select_destination(Region::NhaTrang);
    step
}

fn companions_step() -> CompanionsStep {
    profile_step().next().expect("profile complete")
}

fn trip_step() -> TripStep {
    let mut step = companions_step();
    let id = step.state().companions.entries()[0].id();
    step.increment(id);
    step.next().expect("companions complete")
}

#[test]
fn profile_gate_blocks_until_every_field_is_chosen() {
    let mut step = ProfileStep::enter(WizardState::default());
    assert!(!step.next_allowed());

    step.select_gender(Gender::Undisclosed);
    step.select_destination(Region::PhuQuoc);
    assert!(!step.next_allowed());

    let step = match step.next() {
        Ok(_) => panic!("advanced without an age band"),
        Err(step) => step,
    };
    assert_eq!(step.state().profile.gender, Some(Gender::Undisclosed));
}

#[test]
fn companions_gate_requires_a_counted_head() {
    let mut step = companions_step();
    assert!(!step.next_allowed());
    let id = step.state().companions.entries()[0].id();

    step.increment(id);
    step.decrement(id);
    let mut step = step.next().expect_err("zero headcount must not advance");

    step.increment(id);
    assert!(step.next_allowed());
    assert!(step.next().is_ok());
}

#[test]
fn relation_is_gated_only_when_rules_demand_it() {
    let mut state = WizardState::with_rules(WizardRules {
        require_relation: true,
    });
    state.profile = profile_step().state().profile;
    let mut step = ProfileStep::enter(state).next().expect("profile complete");
    let id = step.state().companions.entries()[0].id();
    step.increment(id);
    assert_eq!(
        step.state().check_companions(),
        Err(IncompleteWizard::NoRelation)
    );

    step.toggle_relation(Relation::Parents);
    assert!(step.next_allowed());
}

#[test]
fn trip_gate_requires_a_theme() {
    let mut step = trip_step();
    assert!(!step.next_allowed());
    step.toggle_theme(Theme::LocalFood);
    step.toggle_theme(Theme::LocalFood);
    let mut step = step.next().expect_err("no theme selected");

    step.toggle_theme(Theme::SunsetBar);
    step.increase_days();
    let review = step.next().expect("trip complete");
    assert_eq!(review.request().days, 4);
    assert_eq!(review.request().categories, vec!["#선셋바"]);
}

#[test]
fn going_back_keeps_in_progress_edits() {
    let mut step = trip_step();
    step.toggle_theme(Theme::Healing);
    step.decrease_days();

    let mut companions = step.prev();
    assert_eq!(companions.state().companions.total_headcount(), 1);
    let extra = companions.add_group();
    companions.set_age_band(extra, AgeBand::Child);
    companions.increment(extra);

    let profile = companions.prev();
    assert_eq!(profile.state().profile.destination, Some(Region::NhaTrang));

    let trip = profile
        .next()
        .and_then(|companions| companions.next().map_err(CompanionsStep::prev))
        .expect("still complete");
    assert!(trip.state().themes.contains(Theme::Healing));
    assert_eq!(trip.state().duration.days(), 2);
    assert_eq!(trip.state().companions.total_headcount(), 2);
}

#[test]
fn revisiting_profile_produces_a_new_profile_value() {
    let companions = companions_step();
    let original = companions.profile();

    let mut profile = companions.prev();
    profile.select_destination(Region::PhuQuoc);
    let companions = profile.next().expect("still complete");

    assert_eq!(original.destination, Region::NhaTrang);
    assert_eq!(companions.profile().destination, Region::PhuQuoc);
}

#[test]
fn review_request_flattens_companions() {
    let mut companions = companions_step();
    let first = companions.state().companions.entries()[0].id();
    let second = companions.add_group();
    companions.set_age_band(second, AgeBand::Infant);
    companions.increment(first);
    companions.increment(second);
    companions.increment(second);
    companions.toggle_relation(Relation::Kid);

    let mut trip = companions.next().expect("companions complete");
    trip.toggle_theme(Theme::PrivateBeach);
    let request = trip.next().expect("trip complete").into_request();

    assert_eq!(request.companion_age_groups, vec!["20대", "유아", "유아"]);
    assert_eq!(request.companion_relations, vec!["아이"]);
    assert_eq!(request.age, "20대");
}
