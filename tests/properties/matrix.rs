//! Property tests for the permission checkbox reducer.

use proptest::prelude::*;

use roster::domain::services::{permission_matrix, toggle_module, toggle_permission};
use roster::{ModuleCatalog, ModuleGrants, Permission, PermissionSet};

fn permission() -> impl Strategy<Value = Permission> {
    prop_oneof![
        Just(Permission::All),
        Just(Permission::View),
        Just(Permission::Add),
        Just(Permission::Update),
        Just(Permission::Delete),
    ]
}

fn module() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Dashboard"),
        Just("Employees"),
        Just("Reports"),
        Just("Skill Matrix"),
        Just("ORG"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any click sequence leaves each module as `[All]` or concrete permissions only.
    #[test]
    fn property_clicks_keep_selection_consistent(
        clicks in proptest::collection::vec((module(), permission()), 0..60),
    ) {
        let mut selected = ModuleGrants::new();
        for (module, permission) in &clicks {
            toggle_module(&mut selected, module, *permission);
            for set in selected.values() {
                prop_assert!(set.is_consistent(), "{:?}", set);
            }
        }

        let rows = permission_matrix(&ModuleCatalog::default(), &selected);
        for row in &rows {
            let all_checked = row.cell(Permission::All).is_some_and(|c| c.checked);
            for cell in row.cells.iter().filter(|c| c.permission.is_concrete()) {
                prop_assert_eq!(cell.disabled, all_checked);
                prop_assert!(!(cell.checked && all_checked));
            }
        }
    }

    /// PROPERTY: Clicking the same concrete box twice restores the checked boxes.
    #[test]
    fn property_concrete_click_is_an_involution(
        start in proptest::collection::vec(permission(), 0..6),
        clicked in permission(),
    ) {
        prop_assume!(clicked != Permission::All);
        let current: PermissionSet = start.into_iter().filter(Permission::is_concrete).collect();

        let once = toggle_permission(&current, clicked);
        prop_assert_ne!(once.contains(clicked), current.contains(clicked));

        // membership comes back; a re-checked box moves to the end of the list
        let back = toggle_permission(&once, clicked);
        let mut expected: Vec<Permission> = current.iter().collect();
        let mut actual: Vec<Permission> = back.iter().collect();
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: While `All` is selected concrete clicks change nothing.
    #[test]
    fn property_all_locks_concrete_clicks(clicked in permission()) {
        prop_assume!(clicked != Permission::All);
        let all = PermissionSet::all();
        prop_assert_eq!(toggle_permission(&all, clicked), all);
    }
}
