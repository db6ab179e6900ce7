use socialgraph::{NetworkError, Registry};

fn main() {
    let mut people = Registry::new();
    let alice_id = people.add_person("Alice").unwrap();
    let bob_id = people.add_person("Bob").unwrap();
    assert!(people.befriend(alice_id, bob_id));
    assert!(!people.befriend(bob_id, alice_id)); // no-op
    assert!(people[bob_id].is_friends_with(alice_id));

    // Registering Bob again hands back the Bob we already have.
    match people.add_person("Bob") {
        Err(NetworkError::DuplicatePerson { existing, .. }) => assert_eq!(existing, bob_id),
        other => panic!("unexpected result: {other:?}"),
    }
    print!("{people}");
}
