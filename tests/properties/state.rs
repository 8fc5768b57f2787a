//! Property tests for role assignment and role id policies.

use proptest::prelude::*;

use roster::{IdPolicy, ModuleGrants, PermissionSet, RoleDraft, RosterState};

#[derive(Debug, Clone)]
enum Op {
    Assign(u32, u32),
    Remove(u32, u32),
    AddRole,
    DeleteRole(u32),
}

fn op() -> impl Strategy<Value = Op> {
    // ids slightly past the seeded range to hit unknown employees and roles
    prop_oneof![
        4 => (1u32..=7, 1u32..=6).prop_map(|(e, r)| Op::Assign(e, r)),
        3 => (1u32..=7, 1u32..=6).prop_map(|(e, r)| Op::Remove(e, r)),
        2 => Just(Op::AddRole),
        1 => (1u32..=6).prop_map(Op::DeleteRole),
    ]
}

fn policy() -> impl Strategy<Value = IdPolicy> {
    prop_oneof![Just(IdPolicy::Count), Just(IdPolicy::Monotonic)]
}

fn draft() -> RoleDraft {
    let mut modules = ModuleGrants::new();
    modules.insert("ORG".to_string(), PermissionSet::all());
    RoleDraft::new("Viewer", modules)
}

fn apply(state: &mut RosterState, op: &Op, policy: IdPolicy) {
    match op {
        Op::Assign(e, r) => {
            state.assign_role(*e, *r);
        }
        Op::Remove(e, r) => {
            state.remove_role(*e, *r);
        }
        Op::AddRole => {
            state.add_role(draft(), policy);
        }
        Op::DeleteRole(r) => {
            state.delete_role(*r);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No employee ever holds the same role id twice.
    #[test]
    fn property_assignments_have_no_duplicates(
        ops in proptest::collection::vec(op(), 0..40),
        policy in policy(),
    ) {
        let mut state = RosterState::seed();
        for op in &ops {
            apply(&mut state, op, policy);
        }

        for employee in &state.employees {
            let mut ids = employee.roles.clone();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), employee.roles.len(), "{:?}", employee);
        }
    }

    /// PROPERTY: Assigning twice equals assigning once; removing twice equals removing once.
    #[test]
    fn property_assign_and_remove_are_idempotent(
        ops in proptest::collection::vec(op(), 0..20),
        employee_id in 1u32..=5,
        role_id in 1u32..=4,
    ) {
        let mut state = RosterState::seed();
        for op in &ops {
            apply(&mut state, op, IdPolicy::Count);
        }

        let mut once = state.clone();
        once.assign_role(employee_id, role_id);
        let mut twice = once.clone();
        prop_assert!(!twice.assign_role(employee_id, role_id));
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.employee(employee_id).unwrap().has_role(role_id));

        let mut removed = once.clone();
        removed.remove_role(employee_id, role_id);
        let mut removed_twice = removed.clone();
        prop_assert!(!removed_twice.remove_role(employee_id, role_id));
        prop_assert_eq!(&removed, &removed_twice);
        prop_assert!(!removed.employee(employee_id).unwrap().has_role(role_id));
    }

    /// PROPERTY: Under the monotonic policy a new role id is never one that was seen before.
    #[test]
    fn property_monotonic_ids_are_fresh(
        ops in proptest::collection::vec(op(), 0..40),
    ) {
        let mut state = RosterState::seed();
        let mut seen: Vec<u32> = state.roles.iter().map(|r| r.id).collect();

        for op in &ops {
            if let Op::AddRole = op {
                let role = state.add_role(draft(), IdPolicy::Monotonic);
                prop_assert!(!seen.contains(&role.id), "id {} handed out twice", role.id);
                seen.push(role.id);
            } else {
                apply(&mut state, op, IdPolicy::Monotonic);
            }
        }
    }

    /// PROPERTY: Roles resolved for an employee always exist and are held by that employee.
    #[test]
    fn property_resolved_roles_exist(
        ops in proptest::collection::vec(op(), 0..40),
    ) {
        let mut state = RosterState::seed();
        for op in &ops {
            apply(&mut state, op, IdPolicy::Monotonic);
        }

        for employee in &state.employees {
            for role in state.roles_for_employee(employee.id) {
                prop_assert!(state.role(role.id).is_some());
                prop_assert!(employee.has_role(role.id));
            }
            for role in state.assignable_roles(employee.id) {
                prop_assert!(!employee.has_role(role.id));
            }
        }
    }
}
