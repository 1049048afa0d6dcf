use std::collections::HashMap;

pub fn builtin_games() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("classic", include_str!("../content/games/classic.yaml")),
        ("gauntlet", include_str!("../content/games/gauntlet.yaml")),
    ])
}
