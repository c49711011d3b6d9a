use medal_journey::aggregator::{
    cumulative_medal_counts, event_time_series, medal_progression, medal_totals,
    per_year_medal_counts, EventTimeSeries, MedalTotals, TimePoint, YearMedalCount,
};
use medal_journey::parser::{load_dataset, LoadOptions, Medal, MedalDataset, MedalRank, MedalRecord};
use medal_journey::utils::config::DEFAULT_GAMES_YEARS;
use pretty_assertions::assert_eq;

fn reference_dataset() -> MedalDataset {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/mp_olympics_medals_data.csv");
    load_dataset(path, &LoadOptions::default()).unwrap()
}

fn butterfly_dataset() -> MedalDataset {
    let records = vec![
        MedalRecord::new(2004, "Men 100 Butterfly", Some(Medal::Gold), Some("51.25")).unwrap(),
        MedalRecord::new(2008, "Men 100 Butterfly", Some(Medal::Gold), Some("50.58")).unwrap(),
        MedalRecord::new(2000, "Men 100 Butterfly", None, Some("52.15")).unwrap(),
    ];
    MedalDataset::new(records, &[2000, 2004, 2008])
}

#[test]
fn test_every_games_year_present() {
    let dataset = reference_dataset();
    let per_year = per_year_medal_counts(&dataset);

    for year in DEFAULT_GAMES_YEARS {
        assert!(
            per_year.iter().any(|row| row.year == *year),
            "year {} missing",
            year
        );
    }
}

#[test]
fn test_placeholder_for_medal_less_year() {
    let per_year = per_year_medal_counts(&reference_dataset());

    assert_eq!(
        per_year[0],
        YearMedalCount {
            year: 2000,
            rank: MedalRank::None,
            count: 0,
            annotation: Some("5th place".to_string()),
        }
    );
    assert_eq!(per_year.iter().filter(|r| r.is_placeholder()).count(), 1);
}

#[test]
fn test_per_year_ordering() {
    let per_year = per_year_medal_counts(&reference_dataset());
    let rows: Vec<(u16, MedalRank, u32)> =
        per_year.iter().map(|r| (r.year, r.rank, r.count)).collect();

    assert_eq!(
        rows,
        vec![
            (2000, MedalRank::None, 0),
            (2004, MedalRank::Bronze, 2),
            (2004, MedalRank::Gold, 6),
            (2008, MedalRank::Gold, 8),
            (2012, MedalRank::Silver, 2),
            (2012, MedalRank::Gold, 4),
            (2016, MedalRank::Silver, 1),
            (2016, MedalRank::Gold, 5),
        ]
    );
}

#[test]
fn test_cumulative_final_matches_career_totals() {
    let dataset = reference_dataset();
    let per_year = per_year_medal_counts(&dataset);
    let cumulative = cumulative_medal_counts(&per_year, dataset.years());

    let last = cumulative.last().unwrap();
    assert_eq!(last.year, 2016);
    assert_eq!(
        last.totals,
        MedalTotals {
            gold: 23,
            silver: 3,
            bronze: 2,
        }
    );
    assert_eq!(last.totals, medal_totals(&dataset));
    assert_eq!(last.totals.total(), 28);
}

#[test]
fn test_cumulative_is_inclusive_and_non_decreasing() {
    let dataset = reference_dataset();
    let cumulative = cumulative_medal_counts(&per_year_medal_counts(&dataset), dataset.years());

    let years: Vec<u16> = cumulative.iter().map(|c| c.year).collect();
    assert_eq!(years, vec![2000, 2004, 2008, 2012, 2016]);

    assert_eq!(cumulative[0].totals.total(), 0);
    assert_eq!(cumulative[1].totals.gold, 6);
    assert_eq!(cumulative[2].totals.gold, 14);

    for pair in cumulative.windows(2) {
        for medal in [Medal::Gold, Medal::Silver, Medal::Bronze] {
            assert!(pair[1].totals.get(medal) >= pair[0].totals.get(medal));
        }
    }
}

#[test]
fn test_cumulative_orders_unsorted_years() {
    let per_year = vec![
        YearMedalCount {
            year: 2008,
            rank: MedalRank::Gold,
            count: 2,
            annotation: None,
        },
        YearMedalCount {
            year: 2004,
            rank: MedalRank::Silver,
            count: 1,
            annotation: None,
        },
    ];
    let cumulative = cumulative_medal_counts(&per_year, &[2008, 2004]);

    assert_eq!(cumulative[0].year, 2004);
    assert_eq!(cumulative[0].totals.total(), 1);
    assert_eq!(cumulative[1].totals, MedalTotals { gold: 2, silver: 1, bronze: 0 });
}

#[test]
fn test_end_to_end_butterfly_scenario() {
    let dataset = butterfly_dataset();

    let per_year = per_year_medal_counts(&dataset);
    assert_eq!(per_year[0].year, 2000);
    assert_eq!(per_year[0].rank, MedalRank::None);
    assert_eq!(per_year[0].count, 0);

    let series = event_time_series(&dataset, &["Men 100 Butterfly"]);
    assert_eq!(series.len(), 1);
    let points: Vec<(u16, f64)> = series[0].points.iter().map(|p| (p.year, p.seconds)).collect();
    assert_eq!(points, vec![(2000, 52.15), (2004, 51.25), (2008, 50.58)]);

    // monotonically improving
    assert!(series[0].points.windows(2).all(|w| w[1].seconds < w[0].seconds));
}

#[test]
fn test_time_series_reference_events() {
    let dataset = reference_dataset();
    let series = event_time_series(&dataset, &["Men 200 Butterfly", "Men 100 Butterfly"]);

    assert_eq!(series[0].event, "Men 200 Butterfly");
    assert_eq!(series[0].points.len(), 5);
    assert_eq!(series[0].points[0].time, "1:56.50");
    assert_eq!(series[0].best().unwrap().year, 2008);
    assert_eq!(series[0].label(), "200m Butterfly");

    assert_eq!(series[1].points.len(), 4);
    assert_eq!(series[1].points[0].year, 2004);
}

#[test]
fn test_time_series_unknown_event_is_empty() {
    let series = event_time_series(&reference_dataset(), &["Men 1500 Freestyle"]);
    assert_eq!(series.len(), 1);
    assert!(series[0].points.is_empty());
    assert!(series[0].best().is_none());
}

#[test]
fn test_time_series_equal_years_keep_source_order() {
    let records = vec![
        MedalRecord::new(2008, "Men 100 Butterfly", None, Some("50.65")).unwrap(),
        MedalRecord::new(2004, "Men 100 Butterfly", Some(Medal::Gold), Some("51.25")).unwrap(),
        MedalRecord::new(2008, "Men 100 Butterfly", Some(Medal::Gold), Some("50.58")).unwrap(),
    ];
    let dataset = MedalDataset::new(records, &[2004, 2008]);
    let series = event_time_series(&dataset, &["Men 100 Butterfly"]);

    let times: Vec<&str> = series[0].points.iter().map(|p| p.time.as_str()).collect();
    assert_eq!(times, vec!["51.25", "50.65", "50.58"]);
}

#[test]
fn test_series_label_fallback() {
    let series = EventTimeSeries {
        event: "Marathon Swim".to_string(),
        points: vec![TimePoint {
            year: 2008,
            seconds: 10.0,
            time: "10.0".to_string(),
        }],
    };
    assert_eq!(series.label(), "Marathon Swim");
}

#[test]
fn test_medal_progression_counts_up() {
    let dataset = reference_dataset();
    let progression = medal_progression(&dataset);

    assert_eq!(progression.len(), 28);
    assert_eq!(progression[0].medal_count, 1);
    assert_eq!(progression[0].year, 2004);
    assert_eq!(progression.last().unwrap().medal_count, 28);
    assert!(progression.windows(2).all(|w| w[0].year <= w[1].year));
}

#[test]
fn test_medal_progression_uses_dates_within_year() {
    let a = MedalRecord::new(2008, "Men 100 Butterfly", Some(Medal::Gold), None)
        .unwrap()
        .with_date(chrono::NaiveDate::from_ymd_opt(2008, 8, 16).unwrap());
    let b = MedalRecord::new(2008, "Men 400 Individual Medley", Some(Medal::Gold), None)
        .unwrap()
        .with_date(chrono::NaiveDate::from_ymd_opt(2008, 8, 10).unwrap());
    let dataset = MedalDataset::new(vec![a, b], &[2008]);

    let progression = medal_progression(&dataset);
    assert_eq!(progression[0].event, "Men 400 Individual Medley");
    assert_eq!(progression[1].medal_count, 2);
}

#[test]
fn test_derivations_are_deterministic() {
    let dataset = reference_dataset();
    assert_eq!(per_year_medal_counts(&dataset), per_year_medal_counts(&dataset));
    assert_eq!(
        event_time_series(&dataset, &["Men 200 Butterfly"]),
        event_time_series(&dataset, &["Men 200 Butterfly"])
    );
}

#[test]
fn test_dataset_adopts_record_years() {
    let records = vec![
        MedalRecord::new(2020, "Men 100 Butterfly", Some(Medal::Gold), Some("49.45")).unwrap(),
    ];
    let dataset = MedalDataset::new(records, &[2016]);
    assert_eq!(dataset.years(), &[2016, 2020]);

    let per_year = per_year_medal_counts(&dataset);
    let cumulative = cumulative_medal_counts(&per_year, dataset.years());
    let last = cumulative.last().unwrap();
    assert_eq!(last.year, 2020);
    assert_eq!(last.totals, medal_totals(&dataset));
    assert_eq!(last.totals.gold, 1);
}
