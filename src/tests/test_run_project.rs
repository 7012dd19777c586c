mod test_run_project {
    use crate::errors::RoomError;
    use crate::output::{Output, SinkOutput};
    use crate::{run_project, write_catalog, ProjectFlags, RoomResults};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::{json, Value};
    use std::io;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Collects every "file" written during a run, keyed by location key and extension.
    #[derive(Debug, Default)]
    struct MemoryOutput(Arc<Mutex<IndexMap<String, Vec<u8>>>>);

    impl MemoryOutput {
        fn file(&self, name: &str) -> Option<String> {
            self.0
                .lock()
                .unwrap()
                .get(name)
                .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
        }
    }

    struct MemoryFile {
        files: Arc<Mutex<IndexMap<String, Vec<u8>>>>,
        name: String,
    }

    impl Write for MemoryFile {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.files
                .lock()
                .unwrap()
                .entry(self.name.clone())
                .or_default()
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Output for &MemoryOutput {
        fn writer_for_location_key(
            &self,
            location_key: &str,
            file_extension: &str,
        ) -> anyhow::Result<impl Write> {
            Ok(MemoryFile {
                files: self.0.clone(),
                name: format!("{location_key}.{file_extension}"),
            })
        }
    }

    #[fixture]
    fn input() -> Value {
        json!({
            "Dimensions": {"width": 4.0, "height": 3.0, "depth": 5.0},
            "ExteriorTemperature": 25.0,
            "WallLayers": [{"material": "concrete", "thickness_mm": 200.0}],
            "Openings": [{"kind": "window", "width": 1.0, "height": 1.0, "material": "single_glass"}],
            "HeatSources": [{"kind": "person", "quantity": 1}]
        })
    }

    fn run(
        input: &Value,
        output: impl Output,
        flags: ProjectFlags,
    ) -> Result<RoomResults, RoomError> {
        run_project(input.to_string().as_bytes(), output, &flags)
    }

    #[rstest]
    fn should_estimate_interior_temperature(input: Value) {
        let results = run(&input, SinkOutput, ProjectFlags::empty()).unwrap();

        assert_eq!(results.interior_temperature(), 30.75);
        assert_eq!(results.thermal_balance.openings_area, 1.);
        assert_eq!(results.geometry, None);
    }

    #[rstest]
    fn should_write_results_csv(input: Value) {
        let output = MemoryOutput::default();

        run(&input, &output, ProjectFlags::empty()).unwrap();

        let results = output.file("results.csv").unwrap();
        let lines = results.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Exterior temp,Interior temp,Temperature change"));
        assert!(lines[1].starts_with("[deg C],[deg C],[K]"));
        assert!(lines[2].starts_with("25,30.75,5.75,5.75,115,94,1,93,60,"));
        assert!(lines[2].ends_with(",false"));
        assert_eq!(output.file("geometry.json"), None);
        assert_eq!(output.file("catalog.txt"), None);
    }

    #[rstest]
    fn should_write_geometry_when_requested(input: Value) {
        let output = MemoryOutput::default();

        let results = run(&input, &output, ProjectFlags::GEOMETRY).unwrap();

        assert_eq!(results.geometry.as_ref().unwrap().openings.len(), 1);
        let geometry: Value = serde_json::from_str(&output.file("geometry.json").unwrap()).unwrap();
        assert_eq!(geometry["interior_temperature"], json!(30.75));
        assert_eq!(geometry["geometry"]["faces"].as_array().unwrap().len(), 6);
        assert_eq!(geometry["geometry"]["openings"][0]["kind"], json!("window"));
    }

    #[rstest]
    fn should_write_catalog_when_requested(input: Value) {
        let output = MemoryOutput::default();

        run(&input, &output, ProjectFlags::CATALOG).unwrap();

        let catalog = output.file("catalog.txt").unwrap();
        assert!(catalog.contains("double_glass"));
        assert!(catalog.contains("air_conditioner      Supplied by user"));
    }

    #[rstest]
    fn should_fail_with_domain_error_when_openings_fill_envelope() {
        let input = json!({
            "Dimensions": {"width": 4.0, "height": 3.0, "depth": 5.0},
            "ExteriorTemperature": 25.0,
            "Openings": [{"kind": "door", "width": 10.0, "height": 10.0, "material": "wood"}]
        });

        let error = run(&input, SinkOutput, ProjectFlags::empty()).unwrap_err();

        assert!(matches!(error, RoomError::FailureInCalculation(_)));
        assert!(error.is_user_error());
    }

    #[rstest]
    fn should_fail_with_invalid_input_for_misplaced_btu() {
        let input = json!({
            "Dimensions": {"width": 4.0, "height": 3.0, "depth": 5.0},
            "ExteriorTemperature": 25.0,
            "HeatSources": [{"kind": "lamp", "btu": 100.0}]
        });

        let error = run(&input, SinkOutput, ProjectFlags::empty()).unwrap_err();

        assert!(matches!(error, RoomError::InvalidInput(_)));
    }

    #[rstest]
    fn should_fail_with_invalid_request_for_malformed_json() {
        let error = run_project("{\"Dimensions\":".as_bytes(), SinkOutput, &ProjectFlags::empty())
            .unwrap_err();

        assert!(matches!(error, RoomError::InvalidRequest(_)));
    }

    #[rstest]
    fn should_list_every_catalog_entry() {
        let mut listing = Vec::new();

        write_catalog(&mut listing).unwrap();

        let listing = String::from_utf8(listing).unwrap();
        assert!(listing.starts_with("Available materials:\n"));
        assert!(listing.contains("concrete        Concrete             1.750           Normal concrete"));
        assert!(listing.contains("microwave            1500 W"));
        assert_eq!(listing.lines().filter(|line| line.ends_with(" W")).count(), 6);
    }
}
