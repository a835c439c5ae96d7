//! Integration tests parsing a complete GEDCOM document.

use gtr_gedcom::{DateValue, Reader};

const DOCUMENT: &str = "\
0 HEAD
1 SOUR gtr
1 GEDC
2 VERS 5.5.1
1 CHAR UTF-8
0 @I0001@ INDI
1 NAME Marie /Curie/
2 TYPE birth
1 NAME Marie /Sklodowska/
2 TYPE maiden
1 SEX F
1 BIRT
2 DATE 7 NOV 1867
2 PLAC Warsaw
1 DEAT
2 DATE 4 JUL 1934
1 OCCU Physicist
1 NOTE Two Nobel
2 CONC  Prizes
2 CONT One in physics, one in chemistry
0 @F0001@ FAM
1 WIFE @I0001@
1 MARR
2 DATE 26 JUL 1895
0 TRLR
";

#[test]
fn full_document_round_trip() {
    let reader = Reader::from_string(DOCUMENT).unwrap();
    assert_eq!(reader.records().len(), 4);
    assert_eq!(reader.records0("INDI").count(), 1);
    assert_eq!(reader.records0("FAM").count(), 1);
}

#[test]
fn nested_values_are_reachable_by_path() {
    let reader = Reader::from_string(DOCUMENT).unwrap();
    let indi = reader.records0("INDI").next().unwrap();
    assert_eq!(indi.sub_tag_value("BIRT/DATE"), Some("7 NOV 1867"));
    assert_eq!(indi.sub_tag_value("BIRT/PLAC"), Some("Warsaw"));
    assert_eq!(indi.sub_tag_value("OCCU"), Some("Physicist"));
    assert_eq!(indi.sub_tags("NAME").len(), 2);
    assert_eq!(
        indi.sub_tags("NAME")[1].sub_tag_value("TYPE"),
        Some("maiden")
    );
}

#[test]
fn continuations_fold_into_the_note() {
    let reader = Reader::from_string(DOCUMENT).unwrap();
    let indi = reader.records0("INDI").next().unwrap();
    assert_eq!(
        indi.sub_tag_value("NOTE"),
        Some("Two Nobel Prizes\nOne in physics, one in chemistry")
    );
}

#[test]
fn date_payloads_parse_into_date_values() {
    let reader = Reader::from_string(DOCUMENT).unwrap();
    let fam = reader.records0("FAM").next().unwrap();
    let date = DateValue::parse(fam.sub_tag_value("MARR/DATE").unwrap());
    assert!(matches!(date, DateValue::Simple(d) if d.year == 1895 && d.month == Some(7)));
}
