use arena_engine::{Class, GameError, Item, Player};

fn dead_fighter() -> Player {
    let mut killer = Player::fighter("Killer");
    killer.pickup(Item::weapon("Maul", 90).unwrap()).unwrap();
    killer.use_item("Maul").unwrap();
    let mut victim = Player::fighter("Victim");
    assert!(killer.attack(&mut victim).unwrap());
    assert!(victim.is_dead());
    victim
}

#[test]
fn new_player_defaults() {
    let p = Player::healer("Cara");
    assert_eq!(p.name(), "Cara");
    assert_eq!(p.class(), Class::Healer);
    assert_eq!(p.health(), 100);
    assert_eq!(p.stamina(), 100);
    assert_eq!(p.equipped_weapon(), None);
    assert!(p.equipped_armour().is_empty());
    assert!(p.inventory().is_empty());
}

#[test]
fn pickup_preserves_order() {
    let mut p = Player::fighter("Alice");
    p.pickup(Item::food("Bread", 30).unwrap()).unwrap();
    p.pickup(Item::weapon("Sword", 15).unwrap()).unwrap();
    let names: Vec<_> = p.inventory().iter().map(|i| i.name()).collect();
    assert_eq!(names, ["Bread", "Sword"]);
}

#[test]
fn unknown_item_is_false_without_change() {
    let mut p = Player::fighter("Alice");
    p.pickup(Item::food("Bread", 30).unwrap()).unwrap();
    let before = p.clone();
    assert!(!p.use_item("Unknown").unwrap());
    assert_eq!(p, before);
}

#[test]
fn dead_player_cannot_pickup_or_use() {
    let mut victim = dead_fighter();
    assert_eq!(
        victim.pickup(Item::food("Bread", 10).unwrap()),
        Err(GameError::DeadPlayer {
            name: "Victim".to_string()
        })
    );
    assert!(matches!(
        victim.use_item("Anything"),
        Err(GameError::DeadPlayer { .. })
    ));
    assert!(victim.inventory().is_empty());
}

#[test]
fn food_is_consumed_once() {
    let mut p = Player::fighter("Alice");
    let mut dummy = Player::fighter("Dummy");
    for _ in 0..3 {
        p.attack(&mut dummy).unwrap();
    }
    assert_eq!(p.stamina(), 70);

    p.pickup(Item::food("Stew", 20).unwrap()).unwrap();
    assert!(p.use_item("Stew").unwrap());
    assert_eq!(p.stamina(), 90);
    assert!(p.find_item("Stew").is_none());
    assert!(!p.use_item("Stew").unwrap());
    assert_eq!(p.stamina(), 90);
}

#[test]
fn max_value_food_caps_stamina() {
    let mut p = Player::fighter("Alice");
    let mut dummy = Player::fighter("Dummy");
    p.attack(&mut dummy).unwrap();
    p.pickup(Item::food("Feast", i32::MAX).unwrap()).unwrap();
    assert!(p.use_item("Feast").unwrap());
    assert_eq!(p.stamina(), 100);
    assert!(p.inventory().is_empty());
}
