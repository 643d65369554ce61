//! Unit tests for filter construction

use super::*;
use chrono::TimeZone;

fn winter_sports() -> SportsCategory {
    SportsCategory {
        id: None,
        name: "winter sports".to_string(),
        sports: vec!["skiing".to_string(), "snowboarding".to_string()],
    }
}

#[test]
fn test_name_filter_wraps_term_in_regex() {
    let filter = name_filter("Doe");
    let name = filter.get_document("name").unwrap();
    assert_eq!(name.get_str("$regex").unwrap(), ".*Doe.*");
}

#[test]
fn test_name_filter_keeps_term_case() {
    let filter = name_filter("jane");
    let name = filter.get_document("name").unwrap();
    // Case-sensitive match: no $options key is set
    assert_eq!(name.get_str("$regex").unwrap(), ".*jane.*");
    assert!(!name.contains_key("$options"));
}

#[test]
fn test_championship_filter_is_bare_equality() {
    let filter = championship_filter("Olympics 2014");
    assert_eq!(filter.get_str("championships").unwrap(), "Olympics 2014");
}

#[test]
fn test_skill_filter_is_bare_equality() {
    let filter = skill_filter("skiing");
    assert_eq!(filter.get_str("skills").unwrap(), "skiing");
}

#[test]
fn test_skills_any_filter_uses_in_operator() {
    let filter = skills_any_filter(&winter_sports().sports);
    let skills = filter.get_document("skills").unwrap();
    let members = skills.get_array("$in").unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].as_str(), Some("skiing"));
    assert_eq!(members[1].as_str(), Some("snowboarding"));
}

#[test]
fn test_resolve_skill_filter_expands_matched_category() {
    let category = winter_sports();
    let filter = resolve_skill_filter("winter sports", Some(&category));
    let skills = filter.get_document("skills").unwrap();
    assert!(skills.contains_key("$in"));
}

#[test]
fn test_resolve_skill_filter_falls_back_to_exact_match() {
    let filter = resolve_skill_filter("archery", None);
    assert_eq!(filter.get_str("skills").unwrap(), "archery");
}

#[test]
fn test_age_range_bounds_are_exclusive() {
    let now = Utc.with_ymd_and_hms(2020, 6, 15, 12, 0, 0).unwrap();
    let filter = age_range_filter(30, 40, now).unwrap();
    let birthday = filter.get_document("birthday").unwrap();

    assert!(birthday.contains_key("$gt"));
    assert!(birthday.contains_key("$lt"));
    assert!(!birthday.contains_key("$gte"));
    assert!(!birthday.contains_key("$lte"));
}

#[test]
fn test_age_range_bound_values() {
    let now = Utc.with_ymd_and_hms(2020, 6, 15, 12, 0, 0).unwrap();
    let filter = age_range_filter(30, 40, now).unwrap();
    let birthday = filter.get_document("birthday").unwrap();

    // Older bound comes from the max age, younger bound from the min age
    let oldest = birthday.get_datetime("$gt").unwrap().to_chrono();
    let youngest = birthday.get_datetime("$lt").unwrap().to_chrono();
    assert_eq!(oldest, Utc.with_ymd_and_hms(1980, 6, 15, 12, 0, 0).unwrap());
    assert_eq!(youngest, Utc.with_ymd_and_hms(1990, 6, 15, 12, 0, 0).unwrap());
}

#[test]
fn test_age_range_crossed_bounds_still_build() {
    // min > max is not validated; the window is empty and matches nothing
    let now = Utc.with_ymd_and_hms(2020, 6, 15, 12, 0, 0).unwrap();
    let filter = age_range_filter(40, 30, now).unwrap();
    let birthday = filter.get_document("birthday").unwrap();

    let gt = birthday.get_datetime("$gt").unwrap().to_chrono();
    let lt = birthday.get_datetime("$lt").unwrap().to_chrono();
    assert!(gt > lt);
}

#[test]
fn test_age_range_rejects_unrepresentable_bound() {
    let now = Utc.with_ymd_and_hms(2020, 6, 15, 12, 0, 0).unwrap();
    let result = age_range_filter(0, u32::MAX, now);

    match result {
        Err(AthleteError::AgeOutOfRange { years }) => assert_eq!(years, u32::MAX),
        other => panic!("Expected AgeOutOfRange, got {:?}", other),
    }
}
