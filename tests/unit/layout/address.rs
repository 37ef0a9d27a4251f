use super::*;

#[test]
fn next_address_fills_in_creation_order() {
    assert_eq!(Arrangement::Stack.next_address(0), Address::Stack(0));
    assert_eq!(Arrangement::Stack.next_address(4), Address::Stack(4));
    assert_eq!(Arrangement::Grid.next_address(0), Address::Grid(0, 0));
    assert_eq!(Arrangement::Grid.next_address(1), Address::Grid(0, 1));
    assert_eq!(Arrangement::Grid.next_address(2), Address::Grid(1, 0));
    assert_eq!(Arrangement::Grid.next_address(5), Address::Grid(2, 1));
}

#[test]
fn address_shape_must_match_arrangement() {
    Arrangement::Stack.check(Address::Stack(3)).unwrap();
    Arrangement::Grid.check(Address::Grid(3, 1)).unwrap();

    let err = Arrangement::Stack.check(Address::Grid(0, 0)).unwrap_err();
    assert!(matches!(err, VarScopeError::Layout(_)));
    let err = Arrangement::Grid.check(Address::Stack(0)).unwrap_err();
    assert!(matches!(err, VarScopeError::Layout(_)));
    let err = Arrangement::Grid.check(Address::Grid(0, 2)).unwrap_err();
    assert!(err.to_string().contains("column 2"));
}

#[test]
fn arrangement_round_trips_through_vars_per_row() {
    assert_eq!(Arrangement::try_from(1).unwrap(), Arrangement::Stack);
    assert_eq!(Arrangement::try_from(2).unwrap(), Arrangement::Grid);
    assert!(Arrangement::try_from(3).is_err());
    assert_eq!(usize::from(Arrangement::Grid), 2);

    let a: Arrangement = serde_json::from_str("2").unwrap();
    assert_eq!(a, Arrangement::Grid);
    assert!(serde_json::from_str::<Arrangement>("0").is_err());
}

#[test]
fn addresses_parse_from_index_or_pair() {
    let a: Address = serde_json::from_str("3").unwrap();
    assert_eq!(a, Address::Stack(3));
    let a: Address = serde_json::from_str("[1, 0]").unwrap();
    assert_eq!(a, Address::Grid(1, 0));
    assert!(serde_json::from_str::<Address>("[1, 0, 2]").is_err());
}

#[test]
fn grid_addresses_order_row_major() {
    let mut v = vec![Address::Grid(1, 0), Address::Grid(0, 1), Address::Grid(0, 0)];
    v.sort();
    assert_eq!(
        v,
        vec![Address::Grid(0, 0), Address::Grid(0, 1), Address::Grid(1, 0)]
    );
}
