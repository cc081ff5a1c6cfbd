//! Loader tests against small synthetic city files

use super::DataLoader;
use crate::config::ExplorerConfig;
use crate::error::BikeshareError;
use crate::models::{City, DayFilter, FilterCriteria, MonthFilter};
use chrono::{Datelike, Month, Timelike, Weekday};
use std::fs;
use tempfile::TempDir;

// 2017-01-02, 2017-02-06 and 2017-06-05 are Mondays
const CHICAGO_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-02 09:07:57,2017-01-02 09:20:53,776,Canal St & Adams St,Clark St & Randolph St,Subscriber,Male,1992.0
2017-01-03 14:10:00,2017-01-03 14:11:00,60,A,B,Subscriber,Female,1985.0
2017-02-06 07:00:00,2017-02-06 07:02:00,120,A,B,Customer,,
2017-06-05 07:30:00,2017-06-05 07:33:00,180,B,A,Subscriber,Male,1985.0
2017-06-06 17:45:00,2017-06-06 17:49:00,240,A,C,Customer,,
";

const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
";

fn write_city(temp_dir: &TempDir, city: City, content: &str) {
    fs::write(temp_dir.path().join(city.file_name()), content).unwrap();
}

fn loader_for(temp_dir: &TempDir) -> DataLoader {
    DataLoader::new(&ExplorerConfig::default().with_data_dir(temp_dir.path()))
}

#[test]
fn test_unfiltered_load_keeps_every_row() {
    let temp_dir = TempDir::new().unwrap();
    write_city(&temp_dir, City::Chicago, CHICAGO_CSV);

    let dataset = loader_for(&temp_dir).load("chicago", "all", "all").unwrap();

    assert_eq!(dataset.len(), 5);
    assert!(dataset.columns().user_type);
    assert!(dataset.columns().gender);
    assert!(dataset.columns().birth_year);

    let first = &dataset.records()[0];
    assert_eq!(first.start_station.as_deref(), Some("Canal St & Adams St"));
    assert_eq!(first.trip_duration, Some(776.0));
    assert_eq!(first.month, Some(1));
    assert_eq!(first.day_of_week, Some(Weekday::Mon));
    assert_eq!(first.start_time.map(|t| t.hour()), Some(9));
    assert_eq!(first.birth_year, Some(1992));
}

#[test]
fn test_rows_with_empty_cells_are_kept() {
    let temp_dir = TempDir::new().unwrap();
    write_city(
        &temp_dir,
        City::Chicago,
        "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 09:00:00,60,A,B,Subscriber
2017-01-02 10:00:00,120,A,,Customer
2017-01-02 11:00:00,,A,C,Customer
",
    );

    let dataset = loader_for(&temp_dir).load("chicago", "all", "all").unwrap();

    assert_eq!(dataset.len(), 3);
    let second = &dataset.records()[1];
    assert_eq!(second.start_station.as_deref(), Some("A"));
    assert_eq!(second.end_station, None);
    assert_eq!(second.user_type.as_deref(), Some("Customer"));
    assert_eq!(dataset.records()[2].trip_duration, None);
}

#[test]
fn test_month_filter() {
    let temp_dir = TempDir::new().unwrap();
    write_city(&temp_dir, City::Chicago, CHICAGO_CSV);

    let dataset = loader_for(&temp_dir)
        .load("Chicago", "January", "all")
        .unwrap();

    assert_eq!(dataset.len(), 2);
    assert!(
        dataset
            .records()
            .iter()
            .all(|r| r.start_time.map(|t| t.month()) == Some(1))
    );
    assert_eq!(dataset.criteria().month, MonthFilter::Only(Month::January));
}

#[test]
fn test_day_filter() {
    let temp_dir = TempDir::new().unwrap();
    write_city(&temp_dir, City::Chicago, CHICAGO_CSV);

    let dataset = loader_for(&temp_dir).load("chicago", "all", "monday").unwrap();

    assert_eq!(dataset.len(), 3);
    assert!(
        dataset
            .records()
            .iter()
            .all(|r| r.start_time.map(|t| t.weekday()) == Some(Weekday::Mon))
    );
}

#[test]
fn test_combined_filters_intersect() {
    let temp_dir = TempDir::new().unwrap();
    write_city(&temp_dir, City::Chicago, CHICAGO_CSV);
    let loader = loader_for(&temp_dir);

    let both = loader.load("chicago", "june", "monday").unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both.records()[0].trip_duration, Some(180.0));

    let june = loader.load("chicago", "june", "all").unwrap();
    let narrowed = june.filtered(MonthFilter::All, DayFilter::Only(Weekday::Mon));
    assert_eq!(narrowed.records(), both.records());
}

#[test]
fn test_reloading_with_same_criteria_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    write_city(&temp_dir, City::Chicago, CHICAGO_CSV);
    let loader = loader_for(&temp_dir);

    let first = loader.load("chicago", "january", "all").unwrap();
    let again = first.filtered(MonthFilter::Only(Month::January), DayFilter::All);

    assert_eq!(first, again);
}

#[test]
fn test_month_without_trips_yields_empty_dataset() {
    let temp_dir = TempDir::new().unwrap();
    write_city(&temp_dir, City::Chicago, CHICAGO_CSV);

    let dataset = loader_for(&temp_dir)
        .load("chicago", "december", "all")
        .unwrap();

    assert!(dataset.is_empty());
}

#[test]
fn test_missing_optional_columns_are_reported() {
    let temp_dir = TempDir::new().unwrap();
    write_city(&temp_dir, City::Washington, WASHINGTON_CSV);

    let dataset = loader_for(&temp_dir)
        .load("washington", "all", "all")
        .unwrap();

    assert_eq!(dataset.len(), 2);
    assert!(dataset.columns().user_type);
    assert!(!dataset.columns().gender);
    assert!(!dataset.columns().birth_year);
    let duration = dataset.records()[0].trip_duration.unwrap();
    assert!((duration - 489.066).abs() < 1e-9);
    assert_eq!(dataset.records()[0].gender, None);
}

#[test]
fn test_invalid_city() {
    let temp_dir = TempDir::new().unwrap();

    let result = loader_for(&temp_dir).load("boston", "all", "all");

    match result.unwrap_err() {
        BikeshareError::InvalidCity { input } => assert_eq!(input, "boston"),
        other => panic!("Expected InvalidCity error, got {other:?}"),
    }
}

#[test]
fn test_invalid_month() {
    let temp_dir = TempDir::new().unwrap();
    write_city(&temp_dir, City::Chicago, CHICAGO_CSV);

    let result = loader_for(&temp_dir).load("chicago", "smarch", "all");

    assert!(matches!(
        result,
        Err(BikeshareError::InvalidMonth { input }) if input == "smarch"
    ));
}

#[test]
fn test_missing_source_file() {
    let temp_dir = TempDir::new().unwrap();

    let result = loader_for(&temp_dir).load("new york city", "all", "all");

    assert!(matches!(
        result,
        Err(BikeshareError::DataSourceNotFound { .. })
    ));
}

#[test]
fn test_missing_required_column() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.csv");
    fs::write(
        &path,
        "Start Time,Trip Duration,Start Station\n2017-01-02 09:00:00,60,A\n",
    )
    .unwrap();

    let result = DataLoader::load_path(&path, FilterCriteria::unfiltered(City::Chicago));

    match result.unwrap_err() {
        BikeshareError::MissingColumn { column, .. } => assert_eq!(column, "End Station"),
        other => panic!("Expected MissingColumn error, got {other:?}"),
    }
}

#[test]
fn test_unparseable_start_time() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.csv");
    fs::write(
        &path,
        "Start Time,Trip Duration,Start Station,End Station\nyesterday,60,A,B\n",
    )
    .unwrap();

    let result = DataLoader::load_path(&path, FilterCriteria::unfiltered(City::Chicago));

    assert!(matches!(
        result,
        Err(BikeshareError::InvalidColumnType { column, .. }) if column == "Start Time"
    ));
}
