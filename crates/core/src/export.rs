//! Export engine: renders every ninja and mission into a single CSV or JSON
//! artifact.
//!
//! Records are a closed sum type ([`ExportRecord`]) and each output format is
//! an [`ExportVisitor`]. Adding a format means implementing the visitor and
//! adding an [`ExportFormat`] variant; the record types never change.

use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// CSV record-type token for ninja lines.
pub const CSV_NINJA_TAG: &str = "NINJA";

/// CSV record-type token for mission lines.
pub const CSV_MISSION_TAG: &str = "MISION";

/// Format identifiers accepted by [`ExportFormat::from_str`].
pub const VALID_FORMATS: &[&str] = &["csv", "json"];

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Flattened view of a ninja, with the village name already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NinjaRecord {
    pub id: DbId,
    pub name: String,
    pub rank: String,
    pub village: String,
    pub attack: i32,
    pub defense: i32,
    pub chakra: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionRecord {
    pub id: DbId,
    pub name: String,
    pub rank: String,
    pub reward: f64,
}

/// A single exportable record of either kind.
#[derive(Debug, Clone, Copy)]
pub enum ExportRecord<'a> {
    Ninja(&'a NinjaRecord),
    Mission(&'a MissionRecord),
}

impl ExportRecord<'_> {
    /// Hand this record to the kind-appropriate visitor method.
    pub fn accept<V: ExportVisitor>(self, visitor: &mut V) {
        match self {
            ExportRecord::Ninja(ninja) => visitor.visit_ninja(ninja),
            ExportRecord::Mission(mission) => visitor.visit_mission(mission),
        }
    }
}

/// An output format that accumulates records and renders them at the end.
pub trait ExportVisitor {
    fn visit_ninja(&mut self, ninja: &NinjaRecord);
    fn visit_mission(&mut self, mission: &MissionRecord);
    fn finish(self) -> Result<String, CoreError>;
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// One line per record, no header, no delimiter escaping.
#[derive(Debug, Default)]
pub struct CsvExporter {
    lines: Vec<String>,
}

impl ExportVisitor for CsvExporter {
    fn visit_ninja(&mut self, ninja: &NinjaRecord) {
        self.lines.push(format!(
            "{CSV_NINJA_TAG},{},{},{},{}",
            ninja.id, ninja.name, ninja.rank, ninja.village
        ));
    }

    fn visit_mission(&mut self, mission: &MissionRecord) {
        self.lines.push(format!(
            "{CSV_MISSION_TAG},{},{},{},{}",
            mission.id,
            mission.name,
            mission.rank,
            format_reward(mission.reward)
        ));
    }

    fn finish(self) -> Result<String, CoreError> {
        Ok(self.lines.join("\n"))
    }
}

/// Decimal exponents outside this range render in scientific notation.
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Render a reward as the shortest round-tripping decimal.
///
/// Positional values keep at least one fractional digit (`50` becomes
/// `50.0`). Magnitudes below `1e-4` or from `1e16` up use a signed exponent of
/// at least two digits (`1e+16`, `1e-05`). Non-finite values render as `nan`,
/// `inf`, and `-inf`.
pub fn format_reward(reward: f64) -> String {
    if reward.is_nan() {
        return "nan".to_string();
    }
    if reward.is_infinite() {
        return if reward > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{reward:e}");
    let parts = scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| exp.parse::<i32>().ok().map(|exp| (mantissa, exp)));
    match parts {
        Some((mantissa, exp)) if !POSITIONAL_EXPONENTS.contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        _ => {
            let positional = reward.to_string();
            if positional.contains('.') {
                positional
            } else {
                format!("{positional}.0")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Top-level JSON export document.
#[derive(Debug, Default, Serialize)]
pub struct ExportDocument {
    pub ninjas: Vec<NinjaRecord>,
    pub missions: Vec<MissionRecord>,
}

/// Collects records into an [`ExportDocument`] and pretty-prints it.
#[derive(Debug, Default)]
pub struct JsonExporter {
    document: ExportDocument,
}

impl ExportVisitor for JsonExporter {
    fn visit_ninja(&mut self, ninja: &NinjaRecord) {
        self.document.ninjas.push(ninja.clone());
    }

    fn visit_mission(&mut self, mission: &MissionRecord) {
        self.document.missions.push(mission.clone());
    }

    fn finish(self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.document)
            .map_err(|e| CoreError::Internal(format!("Failed to serialize export: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Format selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(CoreError::UnsupportedFormat(format!(
                "'{other}' is not supported. Use one of: {}",
                VALID_FORMATS.join(", ")
            ))),
        }
    }
}

/// Render all ninjas, then all missions, in the requested format.
pub fn export(
    format: ExportFormat,
    ninjas: &[NinjaRecord],
    missions: &[MissionRecord],
) -> Result<String, CoreError> {
    match format {
        ExportFormat::Csv => render(CsvExporter::default(), ninjas, missions),
        ExportFormat::Json => render(JsonExporter::default(), ninjas, missions),
    }
}

fn render<V: ExportVisitor>(
    mut visitor: V,
    ninjas: &[NinjaRecord],
    missions: &[MissionRecord],
) -> Result<String, CoreError> {
    let records = ninjas
        .iter()
        .map(ExportRecord::Ninja)
        .chain(missions.iter().map(ExportRecord::Mission));
    for record in records {
        record.accept(&mut visitor);
    }
    visitor.finish()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn naruto() -> NinjaRecord {
        NinjaRecord {
            id: 1,
            name: "Naruto".to_string(),
            rank: "Genin".to_string(),
            village: "Konoha".to_string(),
            attack: 0,
            defense: 0,
            chakra: 0,
        }
    }

    fn rescue_cat() -> MissionRecord {
        MissionRecord {
            id: 1,
            name: "Rescue Cat".to_string(),
            rank: "D".to_string(),
            reward: 50.0,
        }
    }

    #[test]
    fn csv_emits_ninjas_then_missions() {
        let out = export(ExportFormat::Csv, &[naruto()], &[rescue_cat()]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec!["NINJA,1,Naruto,Genin,Konoha", "MISION,1,Rescue Cat,D,50.0"]
        );
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn csv_of_empty_store_is_empty() {
        let out = export(ExportFormat::Csv, &[], &[]).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn csv_does_not_escape_commas() {
        let mut ninja = naruto();
        ninja.name = "Uzumaki, Naruto".to_string();
        let out = export(ExportFormat::Csv, &[ninja], &[]).unwrap();
        assert_eq!(out, "NINJA,1,Uzumaki, Naruto,Genin,Konoha");
    }

    #[test]
    fn reward_keeps_fractional_digit() {
        assert_eq!(format_reward(50.0), "50.0");
        assert_eq!(format_reward(12.5), "12.5");
        assert_eq!(format_reward(-3.0), "-3.0");
        assert_eq!(format_reward(0.1), "0.1");
        assert_eq!(format_reward(0.0), "0.0");
    }

    #[test]
    fn reward_switches_to_exponent_at_extremes() {
        assert_eq!(format_reward(1e15), "1000000000000000.0");
        assert_eq!(format_reward(1e16), "1e+16");
        assert_eq!(format_reward(1.5e16), "1.5e+16");
        assert_eq!(format_reward(1e100), "1e+100");
        assert_eq!(format_reward(0.0001), "0.0001");
        assert_eq!(format_reward(1e-5), "1e-05");
        assert_eq!(format_reward(-2.5e-7), "-2.5e-07");
    }

    #[test]
    fn reward_renders_non_finite_values() {
        assert_eq!(format_reward(f64::NAN), "nan");
        assert_eq!(format_reward(f64::INFINITY), "inf");
        assert_eq!(format_reward(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn json_has_named_arrays_with_expected_fields() {
        let out = export(ExportFormat::Json, &[naruto()], &[rescue_cat()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        let ninja = &value["ninjas"][0];
        assert_eq!(ninja["id"], 1);
        assert_eq!(ninja["name"], "Naruto");
        assert_eq!(ninja["rank"], "Genin");
        assert_eq!(ninja["village"], "Konoha");
        assert_eq!(ninja["attack"], 0);
        assert_eq!(ninja["defense"], 0);
        assert_eq!(ninja["chakra"], 0);

        let mission = &value["missions"][0];
        assert_eq!(mission["id"], 1);
        assert_eq!(mission["name"], "Rescue Cat");
        assert_eq!(mission["rank"], "D");
        assert_eq!(mission["reward"], 50.0);
        assert!(mission.get("minimum_rank").is_none());
    }

    #[test]
    fn json_of_empty_store_has_empty_arrays() {
        let out = export(ExportFormat::Json, &[], &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ninjas"], serde_json::json!([]));
        assert_eq!(value["missions"], serde_json::json!([]));
    }

    #[test]
    fn json_preserves_traversal_order() {
        let mut second = naruto();
        second.id = 2;
        second.name = "Sasuke".to_string();
        let out = export(ExportFormat::Json, &[naruto(), second], &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ninjas"][0]["name"], "Naruto");
        assert_eq!(value["ninjas"][1]["name"], "Sasuke");
    }

    #[test]
    fn parses_supported_formats() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    }

    #[test]
    fn rejects_unsupported_formats() {
        assert_matches!(
            "xml".parse::<ExportFormat>(),
            Err(CoreError::UnsupportedFormat(_))
        );
        assert_matches!(
            "CSV".parse::<ExportFormat>(),
            Err(CoreError::UnsupportedFormat(_))
        );
    }

    #[test]
    fn content_types_match_format() {
        assert_eq!(ExportFormat::Csv.content_type(), "text/csv");
        assert_eq!(ExportFormat::Json.content_type(), "application/json");
    }

    /// A visitor that only counts, to show new formats plug in without
    /// touching the record types.
    #[derive(Default)]
    struct CountingVisitor {
        ninjas: usize,
        missions: usize,
    }

    impl ExportVisitor for CountingVisitor {
        fn visit_ninja(&mut self, _: &NinjaRecord) {
            self.ninjas += 1;
        }

        fn visit_mission(&mut self, _: &MissionRecord) {
            self.missions += 1;
        }

        fn finish(self) -> Result<String, CoreError> {
            Ok(format!("{}/{}", self.ninjas, self.missions))
        }
    }

    #[test]
    fn custom_visitor_receives_each_record_kind() {
        let out = render(
            CountingVisitor::default(),
            &[naruto(), naruto()],
            &[rescue_cat()],
        )
        .unwrap();
        assert_eq!(out, "2/1");
    }
}
