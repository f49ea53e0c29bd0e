//! Integration tests for it-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{EditRow, PlanRow};
    use crate::writer::PlanWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn plan_row(number: usize, place: &str, start: &str) -> PlanRow {
        PlanRow {
            number,
            activity_id:            number as u32 - 1,
            place:                  place.to_owned(),
            label:                  place.to_lowercase(),
            category:               String::new(),
            location:               "Seoul".to_owned(),
            start:                  start.to_owned(),
            end:                    "23:00".to_owned(),
            duration_minutes:       60,
            travel_minutes_to_next: 15,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("plan.csv").exists());
        assert!(dir.path().join("edits.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("edits.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["revision", "command", "activities", "schedule_start", "total_minutes"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("plan.csv")).unwrap();
        assert_eq!(rdr2.headers().unwrap().len(), 10);
        assert_eq!(&rdr2.headers().unwrap()[6], "start");
    }

    #[test]
    fn csv_plan_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_plan(&[plan_row(1, "Cafe", "10:00"), plan_row(2, "Park", "11:15")]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("plan.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "Cafe");
        assert_eq!(&rows[1][6], "11:15");
        assert_eq!(&rows[0][4], ""); // no category
    }

    #[test]
    fn csv_edit_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_edit(&EditRow {
            revision:       4,
            command:        "reorder",
            activities:     3,
            schedule_start: "10:00".to_owned(),
            total_minutes:  245,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("edits.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "reorder");
        assert_eq!(&rows[0][4], "245");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_plan_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_plan(&[]).unwrap();
    }
}

// ── JSON tests ────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "json"))]
mod json_tests {
    use serde_json::Value;
    use tempfile::TempDir;

    use crate::json::JsonWriter;
    use crate::row::PlanRow;
    use crate::writer::PlanWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, name: &str) -> Value {
        let text = std::fs::read_to_string(dir.path().join(name)).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn nothing_written_before_finish() {
        let dir = tmp();
        let _w = JsonWriter::new(dir.path()).unwrap();
        assert!(!dir.path().join("plan.json").exists());
    }

    #[test]
    fn missing_directory_rejected() {
        let dir = tmp();
        assert!(JsonWriter::new(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn plans_written_as_nested_arrays() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        let row = PlanRow {
            number:                 1,
            activity_id:            0,
            place:                  "Cafe".to_owned(),
            label:                  "coffee".to_owned(),
            category:               "food".to_owned(),
            location:               String::new(),
            start:                  "10:00".to_owned(),
            end:                    "11:00".to_owned(),
            duration_minutes:       60,
            travel_minutes_to_next: 0,
        };
        w.write_plan(std::slice::from_ref(&row)).unwrap();
        w.write_plan(&[]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let plans = read(&dir, "plan.json");
        assert_eq!(plans.as_array().unwrap().len(), 2);
        let first = &plans[0][0];
        assert_eq!(first["place"], "Cafe");
        assert_eq!(first["category"], "food");
        assert!(first["location"].is_null());
        assert_eq!(first["start"], "10:00");

        assert_eq!(read(&dir, "edits.json"), Value::Array(Vec::new()));
    }
}

// ── Observer tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use it_core::PlannerConfig;
    use it_editor::EditorBuilder;
    use it_schedule::PlaceSeed;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::PlanOutputObserver;
    use crate::row::{EditRow, PlanRow};
    use crate::writer::PlanWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn places() -> Vec<PlaceSeed> {
        vec![
            PlaceSeed::new("A", "a").with_duration(60).with_travel(15),
            PlaceSeed::new("B", "b").with_duration(90).with_travel(20),
            PlaceSeed::new("C", "c").with_duration(60).with_travel(0),
        ]
    }

    /// Fails every write, counting attempts.
    #[derive(Default)]
    struct Broken {
        attempts: usize,
    }

    impl PlanWriter for Broken {
        fn write_plan(&mut self, _rows: &[PlanRow]) -> OutputResult<()> {
            self.attempts += 1;
            Err(std::io::Error::other("disk full").into())
        }

        fn write_edit(&mut self, _row: &EditRow) -> OutputResult<()> {
            self.attempts += 1;
            Err(std::io::Error::other("disk full").into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut editor = EditorBuilder::new(PlannerConfig::default())
            .places(places())
            .end(None)
            .observer(PlanOutputObserver::new(writer))
            .build()
            .unwrap();

        let c = editor.itinerary().activities()[2].id();
        editor.reorder(c, 0).unwrap();
        editor.set_duration(c, -1).unwrap_err();
        editor.finalize();

        let (_, mut obs) = editor.into_parts();
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("plan.csv")).unwrap();
        let starts: Vec<String> = rdr.records().map(|r| r.unwrap()[6].to_owned()).collect();
        assert_eq!(starts, ["10:00", "11:00", "12:15"]);

        // Rejected edits are not logged.
        let mut rdr = csv::Reader::from_path(dir.path().join("edits.csv")).unwrap();
        let edits: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(edits.len(), 1);
        assert_eq!(&edits[0][1], "reorder");
    }

    #[test]
    fn first_error_kept_and_surfaced_by_finish() {
        let mut editor = EditorBuilder::new(PlannerConfig::default())
            .places(places())
            .observer(PlanOutputObserver::new(Broken::default()))
            .build()
            .unwrap();
        let a = editor.itinerary().activities()[0].id();
        editor.set_travel_time(a, 5).unwrap();
        editor.finalize();

        let (_, mut obs) = editor.into_parts();
        assert!(matches!(obs.finish(), Err(OutputError::Io(_))));
        // Only one error is stored; the second finish succeeds.
        assert!(obs.finish().is_ok());
        assert_eq!(obs.into_writer().attempts, 2);
    }

    #[test]
    fn edit_log_can_be_disabled() {
        let mut editor = EditorBuilder::new(PlannerConfig::default())
            .places(places())
            .observer(PlanOutputObserver::new(Broken::default()).without_edit_log())
            .build()
            .unwrap();
        let a = editor.itinerary().activities()[0].id();
        editor.set_travel_time(a, 5).unwrap();

        let (_, mut obs) = editor.into_parts();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().attempts, 0);
    }
}
