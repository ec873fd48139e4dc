mod common;
use checkgate::{AppError, CheckInRequest, EventConfig, EventSetup, MemberSession};
use common::{all_gates, assert_consistent, open_event, snapshot};

fn req(name: &str, members: u32) -> CheckInRequest {
    CheckInRequest::new(name, "guest", members).expect("valid request")
}

#[test]
fn test_four_four_four_against_capacity_ten() {
    for (label, gate, _dir) in all_gates() {
        open_event(&gate, "Meetup", 10, "pw");

        let first = gate.attempt_check_in(&req("Ann", 4)).expect("first");
        assert_eq!(first.running_total, 4, "[{label}]");

        let second = gate.attempt_check_in(&req("Bo", 4)).expect("second");
        assert_eq!(second.running_total, 8, "[{label}]");

        let third = gate.attempt_check_in(&req("Cy", 4));
        match third {
            Err(AppError::CapacityExceeded { event, capacity }) => {
                assert_eq!(event, "Meetup", "[{label}]");
                assert_eq!(capacity, 10, "[{label}]");
            }
            other => panic!("[{label}] expected CapacityExceeded, got {other:?}"),
        }

        let state = snapshot(&gate);
        assert_eq!(state.event.total, 8, "[{label}]");
        assert_eq!(state.entries.len(), 2, "[{label}]");
        assert_consistent(label, &state);
    }
}

#[test]
fn test_rejection_leaves_state_unchanged() {
    for (label, gate, _dir) in all_gates() {
        open_event(&gate, "Gala", 5, "pw");
        gate.attempt_check_in(&req("Ann", 3)).expect("admit");

        let before = snapshot(&gate);
        let json_before = serde_json::to_string(&before).expect("json");

        assert!(gate.attempt_check_in(&req("Bo", 3)).is_err(), "[{label}]");

        let after = snapshot(&gate);
        assert_eq!(
            serde_json::to_string(&after).expect("json"),
            json_before,
            "[{label}] rejected check-in changed state"
        );
    }
}

#[test]
fn test_inactive_event_refuses_check_in() {
    for (label, gate, _dir) in all_gates() {
        let err = gate.attempt_check_in(&req("Ann", 1)).unwrap_err();
        assert!(matches!(err, AppError::EventNotActive), "[{label}] {err:?}");
        assert!(gate.list_all().expect("list").is_empty(), "[{label}]");
    }
}

#[test]
fn test_reconfigure_keeps_total() {
    for (label, gate, _dir) in all_gates() {
        open_event(&gate, "Meetup", 50, "pw1");
        gate.attempt_check_in(&req("Ann", 7)).expect("admit");

        open_event(&gate, "Meetup", 100, "pw2");

        let ev = gate.get_event();
        assert_eq!(
            ev,
            EventConfig {
                active: true,
                name: "Meetup".into(),
                capacity: 100,
                member_password: "pw2".into(),
                total: 7,
            },
            "[{label}]"
        );
        assert_eq!(gate.list_all().expect("list").len(), 1, "[{label}]");
    }
}

#[test]
fn test_capacity_cannot_drop_below_total() {
    for (label, gate, _dir) in all_gates() {
        open_event(&gate, "Meetup", 10, "pw");
        gate.attempt_check_in(&req("Ann", 6)).expect("admit");

        let err = gate
            .configure_and_activate(&EventSetup::new("Meetup", 5, "pw"))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)), "[{label}] {err:?}");
        assert_eq!(gate.get_event().capacity, 10, "[{label}]");
    }
}

#[test]
fn test_empty_event_name_is_invalid() {
    for (label, gate, _dir) in all_gates() {
        let err = gate
            .configure_and_activate(&EventSetup::new("   ", 5, "pw"))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)), "[{label}]");
        assert!(!gate.get_event().active, "[{label}]");
    }
}

#[test]
fn test_reset_is_complete() {
    for (label, gate, _dir) in all_gates() {
        open_event(&gate, "Meetup", 10, "pw");
        gate.attempt_check_in(&req("Ann", 2)).expect("admit");
        gate.attempt_check_in(&req("Bo", 3)).expect("admit");

        gate.reset().expect("reset");

        assert_eq!(gate.get_event(), EventConfig::default(), "[{label}]");
        assert!(gate.list_all().expect("list").is_empty(), "[{label}]");
        assert!(gate.export_all().expect("export").is_empty(), "[{label}]");

        // A new event after reset starts from zero.
        open_event(&gate, "Second", 3, "x");
        let e = gate.attempt_check_in(&req("Cy", 3)).expect("admit");
        assert_eq!(e.running_total, 3, "[{label}]");
    }
}

#[test]
fn test_list_is_newest_first_and_export_oldest_first() {
    for (label, gate, _dir) in all_gates() {
        open_event(&gate, "Meetup", 10, "pw");
        for (name, n) in [("Ann", 1), ("Bo", 2), ("Cy", 3)] {
            gate.attempt_check_in(&req(name, n)).expect("admit");
        }

        let listed: Vec<String> = gate
            .list_all()
            .expect("list")
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(listed, ["Cy", "Bo", "Ann"], "[{label}]");

        let exported: Vec<u32> = gate
            .export_all()
            .expect("export")
            .into_iter()
            .map(|e| e.running_total)
            .collect();
        assert_eq!(exported, [1, 3, 6], "[{label}]");
    }
}

#[test]
fn test_apply_admission_returns_new_total() {
    for (label, gate, _dir) in all_gates() {
        open_event(&gate, "Meetup", 5, "pw");
        assert_eq!(gate.apply_admission(2).expect("admit"), 2, "[{label}]");
        assert_eq!(gate.apply_admission(3).expect("admit"), 5, "[{label}]");
        assert!(gate.apply_admission(1).is_err(), "[{label}]");
        assert!(
            matches!(gate.apply_admission(0), Err(AppError::InvalidInput(_))),
            "[{label}]"
        );
    }
}

#[test]
fn test_member_authorization_is_single_use() {
    for (label, gate, _dir) in all_gates() {
        open_event(&gate, "Meetup", 4, "secret");

        let mut session = MemberSession::new();
        let wrong = session.authenticate(&gate.get_event(), "nope");
        assert!(matches!(wrong, Err(AppError::Unauthorized(_))), "[{label}]");
        assert!(!session.is_authorized(), "[{label}]");

        session
            .authenticate(&gate.get_event(), "secret")
            .expect("login");

        // Rejected: authorization survives, member may retry.
        assert!(session.check_in(&gate, &req("Ann", 5)).is_err(), "[{label}]");
        assert!(session.is_authorized(), "[{label}]");

        // Admitted: authorization is spent.
        session.check_in(&gate, &req("Ann", 2)).expect("admit");
        assert!(!session.is_authorized(), "[{label}]");

        let again = session.check_in(&gate, &req("Ann", 1));
        assert!(matches!(again, Err(AppError::Unauthorized(_))), "[{label}]");
        assert_eq!(gate.get_event().total, 2, "[{label}]");
    }
}

#[test]
fn test_member_login_requires_active_event() {
    let gate = common::memory_gate();
    let mut session = MemberSession::new();
    let err = session.authenticate(&gate.get_event(), "").unwrap_err();
    assert!(matches!(err, AppError::EventNotActive));
}

#[test]
fn test_admin_session_gate() {
    let mut admin = checkgate::AdminSession::new();
    assert!(admin.require().is_err());
    assert!(admin.login("kira", "wrong").is_err());
    assert!(admin.require().is_err());
    admin.login("kira", "kira").expect("login");
    assert!(admin.require().is_ok());
    admin.logout();
    assert!(admin.require().is_err());
}
