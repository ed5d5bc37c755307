use enricher_data::*;
use enricher_script::*;

#[test]
fn empty_records_serialize_to_bare_keywords() {
    for kind in CommandKind::ALL {
        let expected = match kind {
            CommandKind::Reference => "&Reference[]".to_string(),
            other => format!("[[/{other}]]"),
        };
        assert_eq!(serialize(kind, &kind.empty_options()), expected);
    }
}

#[test]
fn check_ability_shorthand() {
    let options = CheckOptions {
        ability: Some("dexterity".into()),
        ..CheckOptions::default()
    };
    assert_eq!(serialize_check(options, CommandKind::Check), "[[/check dexterity]]");
}

#[test]
fn check_dc_dropped_without_other_fields() {
    let mut options = CheckOptions {
        ability: Some("strength".into()),
        dc: Some(NumberOrText::Number(15)),
        ..CheckOptions::default()
    };
    assert_eq!(serialize_check(options.clone(), CommandKind::Check), "[[/check strength]]");
    options.format = Some(DisplayFormat::Long);
    assert_eq!(
        serialize_check(options, CommandKind::Check),
        "[[/check ability=strength dc=15 format=long]]"
    );
}

#[test]
fn attack_numeric_shorthand() {
    let mut options = AttackOptions {
        formula: Some(NumberOrText::Number(5)),
        ..AttackOptions::default()
    };
    assert_eq!(serialize_attack(options.clone()), "[[/attack +5]]");
    options.attack_mode = Some("thrown".into());
    assert_eq!(serialize_attack(options), "[[/attack 5 thrown]]");
}

#[test]
fn damage_multi_roll() {
    let options = DamageOptions {
        rolls: vec![
            DamageRoll {
                formula: "1d6".into(),
                damage_type: Some("bludgeoning".into()),
            },
            DamageRoll {
                formula: "1d4".into(),
                damage_type: Some("fire".into()),
            },
        ],
        ..DamageOptions::default()
    };
    assert_eq!(serialize_damage(options), "[[/damage 1d6 bludgeoning & 1d4 fire]]");
}

#[test]
fn item_uuid_wins() {
    let options = ItemOptions {
        uuid: Some("Actor.A.Item.B".into()),
        relative_id: Some("X".into()),
        item_name: Some("Bite".into()),
        ..ItemOptions::default()
    };
    assert_eq!(serialize_item(options), "[[/item Actor.A.Item.B]]");
}

#[test]
fn reference_apply_flag() {
    let mut options = ReferenceOptions {
        rule: Some("prone".into()),
        apply: Some(false),
        ..ReferenceOptions::default()
    };
    assert_eq!(serialize_reference(options.clone()), "&Reference[prone apply=false]");
    options.apply = Some(true);
    assert_eq!(serialize_reference(options.clone()), "&Reference[prone]");
    options.apply = None;
    assert_eq!(serialize_reference(options), "&Reference[prone]");
}

#[test]
fn unrecognized_strings_pass_through() {
    assert_eq!(normalize_ability("xyz"), "xyz");
    assert_eq!(serialize_check("custom-check", CommandKind::Check), "[[/check custom-check]]");
}

#[test]
fn legacy_attack_ability_uses_old_syntax() {
    assert_eq!(serialize_attack("strength"), "@attack[strength]");
    assert_eq!(serialize_damage("strength"), "[[/damage strength]]");
}

#[test]
fn options_from_editor_json() {
    let options: CheckOptions =
        serde_json::from_str(r#"{"skill":["acr","ath"],"dc":15}"#).expect("valid check json");
    assert_eq!(serialize_check(options, CommandKind::Skill), "[[/skill acrobatics athletics 15]]");

    let options: BasicRollOptions =
        serde_json::from_str(r#"{"formula":"1d20","inline":"immediate","label":"Luck"}"#).expect("valid roll json");
    assert_eq!(serialize_basic_roll(options), "[[1d20]]{Luck}");
}
