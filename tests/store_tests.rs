/// Store and locking tests
///
/// ID allocation, CRUD properties and the two-tier lock discipline.
/// Run with: cargo test --test store_tests
use std::sync::Arc;

use tokio::sync::Barrier;

use rosterdb::{Kind, Person, Record, RosterError, Staff, Store, Student, Teacher};

fn teacher(name: &str, subject: &str, salary: f64) -> Record {
    Record::Teacher(Teacher {
        subject: subject.to_string(),
        salary,
        classroom: vec!["A1".to_string()],
        person: Person {
            name: name.to_string(),
            surname: "Lovelace".to_string(),
            personal_code: "8705".to_string(),
        },
        ..Teacher::default()
    })
}

#[tokio::test]
async fn ids_are_sequential_from_one() {
    let store = Store::new();

    assert_eq!(store.create(teacher("a", "Math", 1.0)).await, "1");
    assert_eq!(store.create(Record::Student(Student::default())).await, "2");
    assert_eq!(store.create(Record::Staff(Staff::default())).await, "3");

    assert_eq!(store.ids().await, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn concurrent_creation_yields_dense_unique_ids() {
    let store = Arc::new(Store::new());
    let barrier = Arc::new(Barrier::new(10));

    let mut handles = vec![];
    for task_id in 0..10 {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            let mut minted = vec![];
            for i in 0..10 {
                let name = format!("t{task_id}-{i}");
                minted.push(store.create(teacher(&name, "Math", 1.0)).await);
            }
            minted
        }));
    }

    let mut all: Vec<u64> = vec![];
    for handle in handles {
        for id in handle.await.unwrap() {
            all.push(id.parse().unwrap());
        }
    }
    all.sort_unstable();

    // Strictly increasing from 1, no gaps, no reuse.
    assert_eq!(all, (1..=100).collect::<Vec<u64>>());
}

#[tokio::test]
async fn create_then_read_echoes_fields_with_assigned_id() {
    let store = Store::new();
    let id = store.create(teacher("Ada", "Math", 1000.0)).await;

    let snapshot = store.read(Kind::Teacher, &id).await.unwrap();
    match snapshot {
        Record::Teacher(t) => {
            assert_eq!(t.id, "1");
            assert_eq!(t.person.name, "Ada");
            assert_eq!(t.subject, "Math");
            assert_eq!(t.salary, 1000.0);
        }
        other => panic!("expected a teacher, got {other:?}"),
    }
}

#[tokio::test]
async fn update_replaces_fields_and_preserves_id() {
    let store = Store::new();
    let id = store.create(teacher("Ada", "Math", 1000.0)).await;

    let mut replacement = match teacher("Grace", "Physics", 2000.0) {
        Record::Teacher(t) => t,
        _ => unreachable!(),
    };
    replacement.id = id.clone();
    store.update(Record::Teacher(replacement)).await.unwrap();

    let snapshot = store.read(Kind::Teacher, &id).await.unwrap();
    match snapshot {
        Record::Teacher(t) => {
            assert_eq!(t.id, "1");
            assert_eq!(t.person.name, "Grace");
            assert_eq!(t.subject, "Physics");
        }
        other => panic!("expected a teacher, got {other:?}"),
    }
}

#[tokio::test]
async fn read_and_update_of_missing_ids_are_typed_failures() {
    let store = Store::new();

    match store.read(Kind::Student, "7").await {
        Err(RosterError::NotFound { kind, id }) => {
            assert_eq!(kind, Kind::Student);
            assert_eq!(id, "7");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }

    let mut ghost = Student::default();
    ghost.id = "7".to_string();
    assert!(matches!(
        store.update(Record::Student(ghost)).await,
        Err(RosterError::NotFound { .. })
    ));
}

#[tokio::test]
async fn delete_removes_the_id_from_the_listing() {
    let store = Store::new();
    let first = store.create(teacher("Ada", "Math", 1.0)).await;
    let second = store.create(teacher("Grace", "Physics", 2.0)).await;

    assert!(store.delete(&first).await);
    assert_eq!(store.ids().await, vec![second.clone()]);
    assert!(matches!(
        store.read(Kind::Teacher, &first).await,
        Err(RosterError::NotFound { .. })
    ));

    // Idempotent by ID: a second delete is a no-op.
    assert!(!store.delete(&first).await);
    assert_eq!(store.ids().await, vec![second.clone()]);
    assert_eq!(store.len().await, 1);

    assert!(store.delete(&second).await);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn same_id_updates_never_expose_torn_records() {
    let store = Arc::new(Store::new());
    let id = store.create(teacher("w0", "w0", 0.0)).await;
    let barrier = Arc::new(Barrier::new(9));

    let mut handles = vec![];
    for writer in 1..=4u32 {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            for round in 0..25 {
                let marker = format!("w{writer}-{round}");
                let record = Record::Teacher(Teacher {
                    id: id.clone(),
                    subject: marker.clone(),
                    salary: writer as f64,
                    classroom: vec![marker.clone()],
                    person: Person {
                        name: marker.clone(),
                        surname: marker.clone(),
                        personal_code: marker,
                    },
                });
                store.update(record).await.unwrap();
            }
        }));
    }

    for _ in 0..4 {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            for _ in 0..50 {
                let snapshot = store.read(Kind::Teacher, &id).await.unwrap();
                match snapshot {
                    Record::Teacher(t) => {
                        // All marked fields must come from the same writer pass.
                        assert_eq!(t.person.name, t.subject);
                        assert_eq!(t.person.name, t.person.surname);
                        assert_eq!(t.classroom, vec![t.subject.clone()]);
                    }
                    other => panic!("expected a teacher, got {other:?}"),
                }
            }
        }));
    }

    barrier.wait().await;
    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn different_ids_update_concurrently() {
    let store = Arc::new(Store::new());
    let first = store.create(teacher("a", "Math", 1.0)).await;
    let second = store.create(teacher("b", "Physics", 2.0)).await;
    let barrier = Arc::new(Barrier::new(2));

    let mut handles = vec![];
    for id in [first.clone(), second.clone()] {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            for round in 0..100 {
                let mut record = match store.read(Kind::Teacher, &id).await.unwrap() {
                    Record::Teacher(t) => t,
                    other => panic!("expected a teacher, got {other:?}"),
                };
                record.salary = round as f64;
                store.update(Record::Teacher(record)).await.unwrap();
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.ids().await, vec![first, second]);
}
