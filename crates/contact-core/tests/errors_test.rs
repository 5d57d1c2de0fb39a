use contact_core::errors::*;

#[test]
fn empty_trajectory_error_carries_person() {
    let err = TrajectoryError::Empty {
        person: "QWERTYU".into(),
    };
    assert!(err.to_string().contains("QWERTYU"));
}

#[test]
fn mixed_condition_error_carries_values() {
    let err = TrajectoryError::MixedCondition {
        person: "ASDFGHJ".into(),
        index: 3,
        expected: "healthy".into(),
        found: "sick".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("ASDFGHJ"));
    assert!(msg.contains('3'));
    assert!(msg.contains("sick"));
}

#[test]
fn foreign_record_error_names_both_people() {
    let err = TrajectoryError::ForeignRecord {
        person: "ASDFGHJ".into(),
        index: 4,
        found: "QWERTYU".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("ASDFGHJ"));
    assert!(msg.contains('4'));
    assert!(msg.contains("QWERTYU"));
}

#[test]
fn duplicate_person_error_carries_person() {
    let err: ContactError = TrajectoryError::DuplicatePerson {
        person: "ZXCVBNM".into(),
    }
    .into();
    assert!(err.to_string().contains("ZXCVBNM"));
    assert_eq!(err.error_code(), error_code::TRAJECTORY_ERROR);
}

#[test]
fn conflicting_breach_carries_both_visits() {
    let err = GraphError::ConflictingBreach {
        first: "a#0".into(),
        second: "b#1".into(),
        details: "risk differs".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("a#0"));
    assert!(msg.contains("b#1"));
}

// --- From impls ---

#[test]
fn subsystem_errors_convert_to_contact_error() {
    let err: ContactError = TrajectoryError::Empty { person: "x".into() }.into();
    assert!(matches!(err, ContactError::Trajectory(_)));

    let err: ContactError = ConfigError::FileNotFound { path: "p".into() }.into();
    assert!(matches!(err, ContactError::Config(_)));

    let err: ContactError = GraphError::UnknownVisit { visit: "v".into() }.into();
    assert!(matches!(err, ContactError::Graph(_)));

    let err: ContactError = RecordError::InvalidTime {
        value: "2560".into(),
        reason: "bad".into(),
    }
    .into();
    assert!(matches!(err, ContactError::Record(_)));
}

// --- Error codes ---

#[test]
fn error_codes_follow_the_subsystem() {
    let err: ContactError = TrajectoryError::Empty { person: "x".into() }.into();
    assert_eq!(err.error_code(), error_code::TRAJECTORY_ERROR);
    assert!(err.boundary_string().starts_with("[TRAJECTORY_ERROR]"));

    let err = ConfigError::ValidationFailed {
        field: "overlap.microcell_radius".into(),
        message: "must be positive".into(),
    };
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
    assert!(err.boundary_string().contains("overlap.microcell_radius"));
}
