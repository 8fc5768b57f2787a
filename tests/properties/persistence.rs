//! Property tests for write-through persistence.

use proptest::prelude::*;

use roster::domain::ports::StateRepository;
use roster::infrastructure::InMemoryStateRepository;
use roster::{IdPolicy, ModuleGrants, Permission, PermissionSet, RoleDraft, Store};

#[derive(Debug, Clone)]
enum Op {
    Assign(u32, u32),
    Remove(u32, u32),
    AddRole(Vec<Permission>),
    DeleteRole(u32),
}

fn op() -> impl Strategy<Value = Op> {
    let permissions = proptest::collection::vec(
        prop_oneof![
            Just(Permission::All),
            Just(Permission::View),
            Just(Permission::Add),
        ],
        1..3,
    );
    prop_oneof![
        (1u32..=6, 1u32..=5).prop_map(|(e, r)| Op::Assign(e, r)),
        (1u32..=6, 1u32..=5).prop_map(|(e, r)| Op::Remove(e, r)),
        permissions.prop_map(Op::AddRole),
        (1u32..=5).prop_map(Op::DeleteRole),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After any mutation sequence, reopening the repository restores the same state.
    #[test]
    fn property_reopen_restores_state(
        ops in proptest::collection::vec(op(), 0..25),
        monotonic in any::<bool>(),
    ) {
        let policy = if monotonic { IdPolicy::Monotonic } else { IdPolicy::Count };
        let repo = InMemoryStateRepository::new();
        let mut store = Store::open(repo.clone(), policy).unwrap();

        for op in &ops {
            match op {
                Op::Assign(e, r) => {
                    store.assign_role(*e, *r).unwrap();
                }
                Op::Remove(e, r) => {
                    store.remove_role(*e, *r).unwrap();
                }
                Op::AddRole(permissions) => {
                    let mut modules = ModuleGrants::new();
                    modules.insert("Reports".to_string(), PermissionSet::from(permissions.clone()));
                    store.add_role(RoleDraft::new("Viewer", modules)).unwrap();
                }
                Op::DeleteRole(r) => {
                    store.delete_role(*r).unwrap();
                }
            }
        }

        let loaded = repo.load().unwrap().unwrap();
        prop_assert_eq!(&loaded, store.state());

        let reopened = Store::open(repo.clone(), policy).unwrap();
        prop_assert_eq!(reopened.state(), store.state());
    }

    /// PROPERTY: Every write-through save corresponds to a call that changed the state.
    #[test]
    fn property_saves_match_changes(
        assignments in proptest::collection::vec((1u32..=6, 1u32..=2, any::<bool>()), 0..30),
    ) {
        let repo = InMemoryStateRepository::new();
        let mut store = Store::open(repo.clone(), IdPolicy::Count).unwrap();
        let mut changes = 0;

        for (employee_id, role_id, assign) in assignments {
            let changed = if assign {
                store.assign_role(employee_id, role_id).unwrap()
            } else {
                store.remove_role(employee_id, role_id).unwrap()
            };
            if changed {
                changes += 1;
            }
        }

        // one extra save seeds the empty repository
        prop_assert_eq!(repo.save_count(), changes + 1);
    }
}
