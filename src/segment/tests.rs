use super::split;

#[test]
fn splits_on_commas() {
    assert_eq!(split("helmet, gloves, boots"), vec!["helmet", "gloves", "boots"]);
}

#[test]
fn strips_boilerplate_prefix_and_location_suffix() {
    assert_eq!(
        split("supply of - helmets, gloves - city hospital"),
        vec!["helmets", "gloves"]
    );
}

#[test]
fn strips_equipment_location_suffix() {
    assert_eq!(
        split("5 part analyser - gmc jagdalpur equipments"),
        vec!["5 part analyser"]
    );
}

#[test]
fn splits_numbered_lists() {
    assert_eq!(
        split("1. hematology analyser 2) laparoscope"),
        vec!["hematology analyser", "laparoscope"]
    );
}

#[test]
fn splits_on_semicolons_and_pipes() {
    assert_eq!(
        split("elisa washer; microscope | centrifuge"),
        vec!["elisa washer", "microscope", "centrifuge"]
    );
}

#[test]
fn newlines_are_normalized_to_spaces_before_splitting() {
    assert_eq!(split("centrifuge\npipette stand"), vec!["centrifuge pipette stand"]);
}

#[test]
fn drops_noise_fragments() {
    // "a" and "of" are below the length gates
    assert_eq!(split("a, of, surgical sutures"), vec!["surgical sutures"]);
}

#[test]
fn strips_edge_punctuation() {
    assert_eq!(split("- analyser reagents -, : elisa kits"), vec!["analyser reagents", "elisa kits"]);
}

#[test]
fn single_requirement_stays_whole() {
    assert_eq!(split("semi automatic biochemistry analyser"), vec![
        "semi automatic biochemistry analyser"
    ]);
}

#[test]
fn never_returns_empty() {
    // every fragment is noise, so the whole (stripped) input comes back
    let out = split("a, b");
    assert_eq!(out, vec!["a, b"]);

    let out = split("");
    assert_eq!(out.len(), 1);
}

#[test]
fn prefix_strip_is_case_insensitive() {
    assert_eq!(split("QUOTATION FOR: dengue ns1 elisa kits"), vec!["dengue ns1 elisa kits"]);
}
