use enricher_data::{CommandOptions, DamageOptions, OneOrMany};
use enricher_script::{parse_command, serialize_damage};

/// Canonical command text that must survive parse-then-serialize unchanged.
const CANONICAL: &[&str] = &[
    "[[/check dexterity]]",
    "[[/skill stealth]]",
    "[[/check strength acrobatics]]",
    "[[/check acrobatics athletics 15]]",
    "[[/check dexterity acrobatics athletics 15]]",
    "[[/check ability=strength dc=15 format=long]]",
    "[[/check ability=intelligence dc=@abilities.int.dc]]",
    "[[/tool tool=thieves-tools dc=15]]",
    "[[/attack +5]]",
    "[[/attack 5 thrown]]",
    "[[/attack -2 thrown]]",
    "[[/attack extended]]",
    "[[/attack +4 activity=swing attackMode=twoHanded format=long rules=2014]]",
    "[[/damage 2d6 fire]]",
    "[[/damage 2d6 fire radiant average]]",
    "[[/damage 1d6 bludgeoning & 1d4 fire]]",
    "[[/damage 2d6 sonic]]",
    "[[/damage fire cold]]",
    "[[/damage 1d6 + @mod sonic & 1d4 fire]]",
    "[[/damage formula=2d6 type=fire/radiant average=9]]",
    "[[/damage activity=xyz]]",
    "[[/heal 1d8 temp]]",
    "[[/heal formula=2d4 type=healing]]",
    "[[/heal activity=heal01]]",
    "[[/save dexterity 15]]",
    "[[/concentration constitution 10]]",
    "[[/save ability=wisdom/charisma dc=@abilities.wis.dc format=long activity=save01]]",
    "[[/item Actor.abc.Item.def]]",
    "[[/item .Item.xyz \"Throw It\"]]",
    "[[/item Flame Tongue]]",
    "[[/roll 2d6]]",
    "[[/gmroll 1d20 # Secret]]",
    "[[/roll 1d4]]{Luck}",
    "&Reference[prone apply=false]",
    "&Reference[condition=grappled apply=false]",
    "&Reference[\"Falling Damage\"]",
    "&Reference[skill=stealth]",
    "&Reference[rule=flanking]",
];

#[test]
fn canonical_text_round_trips() {
    for text in CANONICAL {
        let parsed = parse_command(text).unwrap_or_else(|| panic!("'{text}' should parse"));
        assert_eq!(parsed.original_text, *text);
        assert_eq!(parsed.to_command_text(), *text, "round trip of '{text}'");
    }
}

#[test]
fn house_rule_damage_type_survives_parsing() {
    let options = DamageOptions {
        formula: Some("2d6".into()),
        damage_type: Some(OneOrMany::from("sonic")),
        ..DamageOptions::default()
    };
    let text = serialize_damage(options.clone());
    assert_eq!(text, "[[/damage 2d6 sonic]]");
    let parsed = parse_command(&text).expect("damage parses");
    assert_eq!(parsed.options, CommandOptions::Damage(options));

    let parsed = parse_command("[[/damage 1d6 sonic & 1d4 fire]]").expect("multi-roll parses");
    let CommandOptions::Damage(damage) = parsed.options else {
        panic!("damage options");
    };
    assert_eq!(damage.rolls[0].formula, "1d6");
    assert_eq!(damage.rolls[0].damage_type, Some(OneOrMany::from("sonic")));
}
