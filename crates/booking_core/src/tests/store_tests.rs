use super::*;
use shared::{
    domain::{Gender, VisitType},
    toast::ToastKind,
};

fn booking(name: &str) -> NewAppointment {
    NewAppointment {
        name: name.to_string(),
        age: "41".to_string(),
        phone: "9876543210".to_string(),
        dr_name: "Dr. Iyer".to_string(),
        visit_date: "2024-03-01".to_string(),
        visit_time: "9:15 am".to_string(),
        visit_type: VisitType::Revisit,
        gender: Gender::Female,
    }
}

fn ids(store: &AppointmentStore) -> Vec<i64> {
    store.appointments().iter().map(|a| a.id.0).collect()
}

#[test]
fn seeded_store_holds_two_examples_and_no_transient_state() {
    let store = AppointmentStore::seeded();
    assert_eq!(ids(&store), vec![1, 2]);
    assert_eq!(store.appointments()[0].name, "John Doe");
    assert_eq!(store.appointments()[1].visit_type, VisitType::Revisit);
    assert_eq!(store.edited_id(), None);
    assert!(store.toast().is_none());
}

#[test]
fn add_assigns_max_plus_one() {
    let mut store = AppointmentStore::seeded();
    let id = store.add_appointment(booking("Nila"));
    assert_eq!(id, AppointmentId(3));
    assert_eq!(ids(&store), vec![1, 2, 3]);
    assert_eq!(store.appointments()[2].name, "Nila");
}

#[test]
fn add_into_empty_store_starts_at_one() {
    let mut store = AppointmentStore::new(Vec::new());
    assert_eq!(store.add_appointment(booking("First")), AppointmentId(1));
}

#[test]
fn add_uses_highest_id_not_length() {
    let mut store = AppointmentStore::seeded();
    let mut far = store.appointments()[0].clone();
    far.id = AppointmentId(10);
    store.set_appointments(vec![far]);
    assert_eq!(store.add_appointment(booking("Next")), AppointmentId(11));
}

#[test]
fn deleting_highest_id_lets_next_add_reuse_it() {
    let mut store = AppointmentStore::seeded();
    store.delete_appointment(AppointmentId(2));
    let id = store.add_appointment(booking("Reused"));
    assert_eq!(id, AppointmentId(2));
    assert_eq!(ids(&store), vec![1, 2]);
}

#[test]
fn update_replaces_in_place() {
    let mut store = AppointmentStore::seeded();
    store.add_appointment(booking("Third"));
    let mut record = store.appointments()[1].clone();
    record.dr_name = "Dr. Kapoor".to_string();
    store.update_appointment(record.clone());
    assert_eq!(ids(&store), vec![1, 2, 3]);
    assert_eq!(store.appointments()[1], record);
}

#[test]
fn update_with_unknown_id_changes_nothing() {
    let mut store = AppointmentStore::seeded();
    let before = store.appointments().to_vec();
    store.update_appointment(booking("Ghost").with_id(AppointmentId(99)));
    assert_eq!(store.appointments(), before.as_slice());
}

#[test]
fn delete_with_unknown_id_changes_nothing() {
    let mut store = AppointmentStore::seeded();
    let before = store.appointments().to_vec();
    store.delete_appointment(AppointmentId(42));
    assert_eq!(store.appointments(), before.as_slice());
}

#[test]
fn edited_id_set_and_clear() {
    let mut store = AppointmentStore::seeded();
    store.set_edited_id(AppointmentId(2));
    assert_eq!(store.edited_id(), Some(AppointmentId(2)));
    store.clear_edited_id();
    assert_eq!(store.edited_id(), None);
}

#[test]
fn every_toast_change_bumps_revision() {
    let mut store = AppointmentStore::seeded();
    assert_eq!(store.toast_revision(), 0);

    store.set_toast(Toast::success("Saved"));
    store.set_toast(Toast::success("Saved"));
    assert_eq!(store.toast_revision(), 2);
    assert_eq!(store.toast().map(|t| t.kind), Some(ToastKind::Success));

    store.clear_toast();
    assert_eq!(store.toast_revision(), 3);
    assert!(store.toast().is_none());
}

#[test]
fn set_appointments_replaces_everything() {
    let mut store = AppointmentStore::seeded();
    store.set_appointments(vec![booking("Solo").with_id(AppointmentId(5))]);
    assert_eq!(ids(&store), vec![5]);
    store.set_appointments(Vec::new());
    assert!(store.appointments().is_empty());
}

#[test]
fn reducer_applies_actions_in_order() {
    let mut state = StoreState::default();
    for action in [
        StoreAction::AddAppointment(booking("A")),
        StoreAction::AddAppointment(booking("B")),
        StoreAction::DeleteAppointment(AppointmentId(1)),
        StoreAction::AddAppointment(booking("C")),
        StoreAction::SetEditedId(AppointmentId(3)),
    ] {
        reduce(&mut state, action);
    }
    let names: Vec<_> = state.appointments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["B", "C"]);
    assert_eq!(state.appointments[1].id, AppointmentId(3));
    assert_eq!(state.edited_id, Some(AppointmentId(3)));
}
