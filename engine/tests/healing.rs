use arena_engine::{resolve_heal, GameError, HealOutcome, Item, Player};

fn wounded(name: &str, damage: i32) -> Player {
    let mut attacker = Player::fighter("Trainer");
    attacker
        .pickup(Item::weapon("Stick", damage - 10).unwrap())
        .unwrap();
    attacker.use_item("Stick").unwrap();
    let mut p = Player::fighter(name);
    attacker.attack(&mut p).unwrap();
    p
}

#[test]
fn heal_is_capped_at_full_health() {
    let mut cara = Player::healer("Cara");
    let mut bob = wounded("Bob", 15);
    assert_eq!(bob.health(), 85);
    assert_eq!(
        resolve_heal(&mut cara, &mut bob).unwrap(),
        HealOutcome::Healed {
            before: 85,
            after: 100
        }
    );
}

#[test]
fn healing_a_full_target_still_costs_stamina() {
    let mut cara = Player::healer("Cara");
    let mut bob = Player::fighter("Bob");
    assert_eq!(
        resolve_heal(&mut cara, &mut bob).unwrap(),
        HealOutcome::AlreadyFull
    );
    assert_eq!(cara.stamina(), 90);
}

#[test]
fn exhausted_healer_spends_nothing() {
    let mut cara = Player::healer("Cara");
    let mut bob = Player::fighter("Bob");
    for _ in 0..10 {
        cara.heal(&mut bob).unwrap();
    }
    assert_eq!(cara.stamina(), 0);
    assert_eq!(
        resolve_heal(&mut cara, &mut bob).unwrap(),
        HealOutcome::Exhausted
    );
    assert_eq!(cara.stamina(), 0);
}

#[test]
fn healer_may_heal_another_healer() {
    let mut a = Player::healer("A");
    let mut b = Player::healer("B");
    assert!(!a.heal(&mut b).unwrap());
}

#[test]
fn dead_target_cannot_be_healed() {
    let mut cara = Player::healer("Cara");
    let mut bob = wounded("Bob", 100);
    assert!(bob.is_dead());
    assert_eq!(
        cara.heal(&mut bob),
        Err(GameError::TargetDead {
            name: "Bob".to_string()
        })
    );
    assert_eq!(cara.stamina(), 100);
    assert_eq!(bob.health(), 0);
}

#[test]
fn fighters_cannot_heal() {
    let mut f = Player::fighter("F");
    let mut g = Player::fighter("G");
    assert!(matches!(
        f.heal(&mut g),
        Err(GameError::NotCapable { action: "heal", .. })
    ));
}
