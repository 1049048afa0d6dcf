use engine::duel::{fight, DuelResult};
use engine::{
    resolve_duel, Combatant, Dice, DuelRound, Hero, HeroClass, Monster, Roster, Side, Species,
};

fn armed(class: HeroClass, weapon: &str) -> Hero {
    let mut hero = Hero::new(class);
    hero.equip(weapon).unwrap();
    hero
}

#[test]
fn knight_always_striking_fells_spider_in_twenty_turns() {
    let mut roster = Roster::new(
        vec![armed(HeroClass::Knight, "sword")],
        vec![Monster::new(Species::Spider)],
        vec![],
    );
    let mut dice = Dice::from_scripted(vec![0]);
    let mut log: Vec<String> = Vec::new();

    let round = resolve_duel(&mut roster, &mut dice, &mut log);

    let DuelRound::Resolved(result) = round else {
        panic!("expected a duel");
    };
    assert_eq!(
        result,
        DuelResult {
            winner: Side::Hero,
            winner_kind: "knight".into(),
            loser_kind: "spider".into(),
            exchanges: 20,
            hero_health: 100,
            monster_health: 0,
        }
    );
    assert_eq!(log.len(), 21);
    assert!(log[..20]
        .iter()
        .all(|l| l == "knight has attacked spider using sword!"));
    assert_eq!(
        log[20],
        "The knight is the winner of this duel against the spider"
    );

    assert!(roster.monsters.is_empty());
    assert_eq!(roster.heroes.len(), 1);
    assert!(!roster.heroes[0].in_duel());
}

#[test]
fn monster_side_picks_one_of_its_two_attacks() {
    let mut wizard = armed(HeroClass::Wizard, "sorcery");
    let mut dragon = Monster::new(Species::Dragon);
    // 60 -> monster strikes, then 1 -> firespit; repeat.
    let mut dice = Dice::from_scripted(vec![60, 1]);
    let mut log: Vec<String> = Vec::new();

    let result = fight(&mut wizard, &mut dragon, &mut dice, &mut log);

    assert_eq!(result.winner, Side::Monster);
    assert_eq!(result.exchanges, 8);
    assert_eq!(wizard.health(), -10);
    assert_eq!(dragon.health(), 300);
    assert_eq!(log[0], "dragon has attacked wizard using firespit!");
    insta::assert_snapshot!(log.last().unwrap(), @"The dragon is the winner of this duel against the wizard");
}

#[test]
fn roll_of_fifty_goes_to_the_monster() {
    let mut knight = armed(HeroClass::Knight, "javelin");
    let mut spider = Monster::new(Species::Spider);
    let mut dice = Dice::from_scripted(vec![50, 0]);
    let mut log: Vec<String> = Vec::new();

    let result = fight(&mut knight, &mut spider, &mut dice, &mut log);

    assert_eq!(result.winner, Side::Monster);
    assert_eq!(result.exchanges, 20);
    assert!(log[0].ends_with("using hit!"));
}

#[test]
fn unequipped_hero_fights_with_first_weapon() {
    let mut knight = armed(HeroClass::Knight, "javelin");
    knight.equip("sword").unwrap();
    knight.drop(None).unwrap();
    knight.equip("sword").unwrap();
    knight.drop(Some("sword")).unwrap();
    assert_eq!(knight.equipped(), None);

    let mut spider = Monster::new(Species::Spider);
    let mut dice = Dice::from_scripted(vec![10]);
    let mut log: Vec<String> = Vec::new();
    let result = fight(&mut knight, &mut spider, &mut dice, &mut log);

    assert_eq!(result.exchanges, 14);
    assert_eq!(spider.health(), -10);
    assert_eq!(log[0], "knight has attacked spider using javelin!");
}

#[test]
fn no_armed_hero_means_no_duel() {
    let mut roster = Roster::new(
        vec![Hero::new(HeroClass::Knight)],
        vec![Monster::new(Species::Dragon)],
        vec![],
    );
    let mut dice = Dice::from_seed(1);
    let mut log: Vec<String> = Vec::new();

    assert_eq!(resolve_duel(&mut roster, &mut dice, &mut log), DuelRound::Idle);
    assert!(log.is_empty());
    assert_eq!(roster.heroes.len(), 1);
    assert_eq!(roster.monsters.len(), 1);
}

#[test]
fn no_monster_means_no_duel() {
    let mut roster = Roster::new(vec![armed(HeroClass::Wizard, "sorcery")], vec![], vec![]);
    let mut dice = Dice::from_seed(1);
    assert_eq!(
        resolve_duel(&mut roster, &mut dice, &mut Vec::<String>::new()),
        DuelRound::Idle
    );
}

#[test]
fn exactly_one_side_falls_in_random_duels() {
    for seed in 0..200 {
        let mut knight = armed(HeroClass::Knight, "sword");
        let mut dragon = Monster::new(Species::Dragon);
        let mut dice = Dice::from_seed(seed);
        let result = fight(&mut knight, &mut dragon, &mut dice, &mut Vec::<String>::new());

        assert!(knight.is_defeated() != dragon.is_defeated(), "seed {seed}");
        assert!(!knight.in_duel() && !dragon.in_duel());
        match result.winner {
            Side::Hero => assert!(dragon.is_defeated()),
            Side::Monster => assert!(knight.is_defeated()),
        }
    }
}

#[test]
fn loser_is_removed_and_winner_stays() {
    let mut roster = Roster::new(
        vec![Hero::new(HeroClass::Wizard), armed(HeroClass::Knight, "sword")],
        vec![Monster::new(Species::Spider), Monster::new(Species::Dragon)],
        vec![],
    );
    // Only the knight is eligible; 99 picks monster index 1 (the dragon), which
    // then wins every roll with firespit.
    let mut dice = Dice::from_scripted(vec![99]);
    let mut log: Vec<String> = Vec::new();
    let round = resolve_duel(&mut roster, &mut dice, &mut log);

    assert_eq!(round.result().map(|r| r.winner), Some(Side::Monster));
    assert_eq!(round.result().map(|r| r.exchanges), Some(5));
    assert_eq!(roster.heroes.len(), 1);
    assert_eq!(roster.heroes[0].class(), HeroClass::Wizard);
    assert_eq!(roster.monsters.len(), 2);
}
