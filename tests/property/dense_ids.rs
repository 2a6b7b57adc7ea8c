//! Property tests for the dense id invariant.
//!
//! For any interleaving of adds and deletes, the persisted list must carry
//! ids exactly `1..=N` in order, and the surviving descriptions must keep
//! their relative order. This is the invariant that makes length-derived
//! id assignment in `add` safe.

use proptest::prelude::*;

use taskvault_core::tasks::{TaskStatus, TaskStore};

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Delete(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{1,12}".prop_map(Op::Add),
        (1usize..24).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn ids_stay_dense_under_any_add_delete_interleaving(
        ops in prop::collection::vec(arb_op(), 1..24),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks"));
        // Model: the descriptions that should survive, in order.
        let mut model: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Op::Add(description) => {
                    let task = store.add("prop", &description).unwrap();
                    prop_assert_eq!(task.id, model.len() + 1);
                    prop_assert_eq!(task.status, TaskStatus::Pending);
                    model.push(description);
                }
                Op::Delete(id) => {
                    store.delete("prop", id).unwrap();
                    if (1..=model.len()).contains(&id) {
                        model.remove(id - 1);
                    }
                }
            }

            let tasks = store.list("prop").unwrap();
            prop_assert_eq!(tasks.len(), model.len());
            for (index, task) in tasks.iter().enumerate() {
                prop_assert_eq!(task.id, index + 1);
                prop_assert_eq!(&task.description, &model[index]);
            }
        }
    }
}
