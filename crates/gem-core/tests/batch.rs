use gem_core::prelude::*;
use std::fs;

fn gazetteer() -> Gazetteer {
    Gazetteer::from_places(vec![
        PlaceRecord {
            name: "Springfield".into(),
            country: "US".into(),
            state: "IL".into(),
            latitude: 39.8,
            longitude: -89.6,
            population: 116_250,
            country_code: "US".into(),
        },
        PlaceRecord {
            name: "Springfield".into(),
            country: "US".into(),
            state: "MO".into(),
            latitude: 37.2,
            longitude: -93.3,
            population: 167_882,
            country_code: "US".into(),
        },
    ])
}

#[test]
fn every_input_row_produces_one_output_row() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(
        &input,
        "name,location\n\
         a,\"Springfield, IL\"\n\
         b,springfield\n\
         c,Nowhere\n\
         d,\n",
    )
    .unwrap();

    let summary = geocode_file(&gazetteer(), &input, &output, DEFAULT_LOCATION_COLUMN).unwrap();
    assert_eq!(summary, BatchSummary { rows: 4, matched: 2 });

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(&output).unwrap();
    assert_eq!(
        rdr.headers().unwrap().iter().collect::<Vec<_>>(),
        ["name", "location", "code_placename", "code_longitude", "code_latitude"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.len() == 5));
    assert_eq!(&rows[0][2], "Springfield, IL, US");
    assert_eq!(&rows[1][2], "Springfield, MO, US");
    assert_eq!((&rows[1][3], &rows[1][4]), ("-93.3", "37.2"));
    assert_eq!(rows[2].iter().skip(2).collect::<Vec<_>>(), ["", "", ""]);
    assert_eq!(rows[3].iter().skip(2).collect::<Vec<_>>(), ["", "", ""]);
}

#[test]
fn custom_location_column() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "city\nSpringfield\n").unwrap();

    let summary = geocode_file(&gazetteer(), &input, &output, "city").unwrap();
    assert_eq!(summary.matched, 1);
}

#[test]
fn missing_column_fails_before_writing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "city\nSpringfield\n").unwrap();

    let err = geocode_file(&gazetteer(), &input, &output, "location").unwrap_err();
    assert!(matches!(err, GemError::MissingColumn(_)));
    assert!(!output.exists());
}

#[test]
fn persisted_gazetteer_resolves_like_the_original() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gazetteer.bin");
    gazetteer().save_as(&path).unwrap();

    let db = Gazetteer::open(&path).unwrap();
    let m = Matcher::new(&db);
    assert_eq!(m.locate("Springfield, IL").unwrap().state, "IL");
    assert_eq!(m.locate("SPRINGFIELD").unwrap().state, "MO");
}
