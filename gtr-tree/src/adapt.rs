//! Record adaptation
//!
//! Turns raw GEDCOM records into graph entities with their GTR fields
//! already rendered. Field values are brace-escaped here, exactly once;
//! the serializer only concatenates them.
//!
//! A person's rendered name comes from at most one of the recorded name
//! roles, in fixed priority: maiden, birth, unlabeled, married. Missing
//! name parts render as a literal `?`, and a person with no name record
//! at all still gets a name field (`?` for both parts).

use std::collections::HashMap;

use gtr_gedcom::{DateValue, Record};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::date_format::format_date_value;
use crate::model::{Event, Person};

/// Name-role priority for the single rendered name
const NAME_ROLE_PRIORITY: [Option<&str>; 4] = [Some("maiden"), Some("birth"), None, Some("married")];

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([^/]*?)\s*(?:/([^/]*)/.*)?$").unwrap());

/// Strip the `@` delimiters from an xref token
pub fn strip_xref(token: &str) -> String {
    token.replace('@', "")
}

/// Split a GEDCOM name payload into given and surname parts
///
/// The surname is the `/`-delimited part (`John /Smith/`); anything after
/// the closing slash (suffixes) is ignored. Empty parts come back as
/// `None`.
fn name_parts(value: &str) -> (Option<String>, Option<String>) {
    let Some(captures) = NAME_RE.captures(value) else {
        return (None, None);
    };
    let part = |index: usize| {
        captures
            .get(index)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    };
    (part(1), part(2))
}

/// Extract an event (date and/or place) from a sub-record
fn event_from(record: &Record, tag: &str) -> Event {
    Event {
        date: record
            .sub_tag_value(&format!("{}/DATE", tag))
            .map(DateValue::parse),
        place: record
            .sub_tag_value(&format!("{}/PLAC", tag))
            .map(|place| place.to_string()),
    }
}

/// Render an event as a GTR field
///
/// The key gets a `-` modifier when the place is absent; the value is
/// `{date}` or `{date}{place}`.
pub(crate) fn event_field(key: &str, event: &Event) -> (String, String) {
    let date = event
        .date
        .as_ref()
        .map(format_date_value)
        .unwrap_or_default();
    match &event.place {
        Some(place) => (key.to_string(), format!("{{{}}}{{{}}}", date, place)),
        None => (format!("{}-", key), format!("{{{}}}", date)),
    }
}

/// Create a person entity from an `INDI` record
///
/// Relationship links start empty; the graph builder fills them in.
pub(crate) fn person_from_record(record: &Record, xref: &str) -> Person {
    let mut fields = Vec::new();

    let names: HashMap<Option<String>, (Option<String>, Option<String>)> = record
        .sub_tags("NAME")
        .iter()
        .map(|name_record| {
            (
                name_record
                    .sub_tag_value("TYPE")
                    .map(|role| role.to_string()),
                name_parts(name_record.value.as_deref().unwrap_or("")),
            )
        })
        .collect();
    let (given, surname) = NAME_ROLE_PRIORITY
        .iter()
        .find_map(|role| names.get(&role.map(|r| r.to_string())))
        .cloned()
        .unwrap_or((None, None));
    fields.push((
        "name".to_string(),
        format!(
            r"{{\pref{{{}}} \surn{{{}}}}}",
            given.as_deref().unwrap_or("?"),
            surname.as_deref().unwrap_or("?")
        ),
    ));

    let birth = event_from(record, "BIRT");
    if birth.is_present() {
        let (key, value) = event_field("birth", &birth);
        fields.push((key, value));
    }
    let death = event_from(record, "DEAT");
    if death.is_present() {
        let (key, value) = event_field("death", &death);
        fields.push((key, value));
    }

    if let Some(sex) = record.sub_tag_value("SEX") {
        let rendered = if sex == "F" { "{female}" } else { "{male}" };
        fields.push(("sex".to_string(), rendered.to_string()));
    }

    if let Some(occupation) = record.sub_tag_value("OCCU") {
        fields.push(("profession".to_string(), format!("{{{}}}", occupation)));
    }

    Person {
        id: strip_xref(xref),
        fields,
        parent_families: Vec::new(),
        child_family: None,
    }
}

/// Unresolved family data from a `FAM` record
///
/// Parent and child references are still xref tokens; the graph builder
/// resolves them against the person index.
#[derive(Debug, Clone)]
pub(crate) struct FamilySpec {
    pub id: String,
    pub parent_xrefs: Vec<String>,
    pub child_xrefs: Vec<String>,
    pub marriage: Option<Event>,
}

/// Read a `FAM` record into an unresolved family spec
pub(crate) fn family_from_record(record: &Record, xref: &str) -> FamilySpec {
    let parent_xrefs = ["HUSB", "WIFE"]
        .into_iter()
        .filter_map(|tag| record.sub_tag_value(tag))
        .map(|token| token.to_string())
        .collect();
    let child_xrefs = record
        .sub_tags("CHIL")
        .iter()
        .filter_map(|child| child.value.as_deref())
        .map(|token| token.to_string())
        .collect();
    let marriage = Some(event_from(record, "MARR")).filter(Event::is_present);
    FamilySpec {
        id: strip_xref(xref),
        parent_xrefs,
        child_xrefs,
        marriage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtr_gedcom::Reader;

    fn indi(body: &str) -> Record {
        let source = format!("0 @I0001@ INDI\n{}", body);
        let reader = Reader::from_string(&source).unwrap();
        reader.records()[0].clone()
    }

    fn fields(body: &str) -> Vec<(String, String)> {
        person_from_record(&indi(body), "@I0001@").fields
    }

    #[test]
    fn test_name_splitting() {
        assert_eq!(
            name_parts("John /Smith/"),
            (Some("John".to_string()), Some("Smith".to_string()))
        );
        assert_eq!(name_parts("/Smith/"), (None, Some("Smith".to_string())));
        assert_eq!(name_parts("John"), (Some("John".to_string()), None));
        assert_eq!(
            name_parts("John /Smith/ Jr"),
            (Some("John".to_string()), Some("Smith".to_string()))
        );
        assert_eq!(name_parts(""), (None, None));
    }

    #[test]
    fn test_field_order_is_fixed() {
        let fields = fields(
            "1 OCCU Carpenter\n1 SEX M\n1 DEAT\n2 DATE 1950\n1 BIRT\n2 DATE 1900\n1 NAME John /Smith/\n",
        );
        let keys: Vec<&str> = fields.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["name", "birth-", "death-", "sex", "profession"]);
    }

    #[test]
    fn test_name_role_priority() {
        // A maiden name beats the unlabeled default name.
        let fields1 = fields("1 NAME Married /Name/\n2 TYPE married\n1 NAME Default /Name/\n1 NAME Maiden /Name/\n2 TYPE maiden\n");
        assert_eq!(fields1[0].1, r"{\pref{Maiden} \surn{Name}}");

        // Without maiden or birth roles, the unlabeled name wins over married.
        let fields2 = fields("1 NAME Married /Name/\n2 TYPE married\n1 NAME Default /Name/\n");
        assert_eq!(fields2[0].1, r"{\pref{Default} \surn{Name}}");
    }

    #[test]
    fn test_missing_name_parts_render_question_marks() {
        let fields = fields("1 NAME /Smith/\n");
        assert_eq!(fields[0].1, r"{\pref{?} \surn{Smith}}");
    }

    #[test]
    fn test_absent_name_record_still_renders_a_name_field() {
        let fields = fields("1 SEX F\n");
        assert_eq!(fields[0].0, "name");
        assert_eq!(fields[0].1, r"{\pref{?} \surn{?}}");
    }

    #[test]
    fn test_event_key_modifier_tracks_place_presence() {
        let fields1 = fields("1 BIRT\n2 DATE 1 JAN 1900\n2 PLAC Somewhere\n");
        assert_eq!(
            fields1[1],
            ("birth".to_string(), "{(AD)1900-01-01}{Somewhere}".to_string())
        );

        let fields2 = fields("1 BIRT\n2 DATE 1 JAN 1900\n");
        assert_eq!(
            fields2[1],
            ("birth-".to_string(), "{(AD)1900-01-01}".to_string())
        );
    }

    #[test]
    fn test_place_only_event() {
        let fields = fields("1 DEAT\n2 PLAC Elsewhere\n");
        assert_eq!(fields[1], ("death".to_string(), "{}{Elsewhere}".to_string()));
    }

    #[test]
    fn test_sex_mapping() {
        assert_eq!(fields("1 SEX F\n")[1].1, "{female}");
        assert_eq!(fields("1 SEX M\n")[1].1, "{male}");
        // No SEX record, no sex field.
        assert_eq!(fields("1 NAME A /B/\n").len(), 1);
    }

    #[test]
    fn test_profession_is_copied_verbatim() {
        let fields = fields("1 OCCU Master of the Rolls\n");
        assert_eq!(
            fields[1],
            ("profession".to_string(), "{Master of the Rolls}".to_string())
        );
    }

    #[test]
    fn test_family_spec() {
        let source = "0 @F0001@ FAM\n1 HUSB @I0001@\n1 WIFE @I0002@\n1 CHIL @I0003@\n1 CHIL @I0004@\n1 MARR\n2 DATE 1920\n";
        let reader = Reader::from_string(source).unwrap();
        let spec = family_from_record(&reader.records()[0], "@F0001@");
        assert_eq!(spec.id, "F0001");
        assert_eq!(spec.parent_xrefs, vec!["@I0001@", "@I0002@"]);
        assert_eq!(spec.child_xrefs, vec!["@I0003@", "@I0004@"]);
        assert!(spec.marriage.is_some());
    }

    #[test]
    fn test_family_without_marriage_event() {
        let source = "0 @F0001@ FAM\n1 HUSB @I0001@\n";
        let reader = Reader::from_string(source).unwrap();
        let spec = family_from_record(&reader.records()[0], "@F0001@");
        assert!(spec.marriage.is_none());
    }
}
