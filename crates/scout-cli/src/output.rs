//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use scout_domain::{BatchResult, EnrichStatus, EnrichmentResult, LeadId, LeadRow};
use scout_enricher::BatchSummary;
use scout_store::LeadRecord;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format lead records output.
    pub fn format_records(&self, records: &[LeadRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<Value> = records.iter().map(record_json).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.format_records_table(records)),
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|r| r.lead.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_records_table(&self, records: &[LeadRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No leads found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Business", "City", "State", "Status", "Last Enriched", "Error"]);

        for record in records {
            let last = record
                .last_enriched_at
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string());
            builder.push_record([
                record.lead.id.to_string(),
                record.lead.business_name.clone(),
                record.lead.city.clone(),
                record.lead.state.clone(),
                self.status_label(record.status),
                last,
                record.error.clone().unwrap_or_default(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a single enrichment result.
    pub fn format_result(&self, id: &LeadId, result: &EnrichmentResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&result_json(id, result))?),
            OutputFormat::Quiet => Ok(id.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Lead".to_string(), id.to_string()]);
                builder.push_record(["Website".to_string(), or_dash(&result.official_website)]);
                builder.push_record(["Website Source".to_string(), or_dash(&result.website_source_url)]);
                builder.push_record(["Instagram".to_string(), or_dash(&result.instagram_url)]);
                builder.push_record([
                    "Instagram Source".to_string(),
                    result
                        .instagram_source
                        .map(|s| s.as_str().to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ]);
                for person in &result.decision_makers {
                    builder.push_record([
                        "Decision Maker".to_string(),
                        format!("{} ({}) {}", person.name, person.title, person.source_url),
                    ]);
                }
                builder.push_record(["Confidence".to_string(), result.confidence.to_string()]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format batch outcomes, one line or row per lead.
    pub fn format_batch(&self, rows: &[LeadRow], results: &[BatchResult]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<Value> = results
                    .iter()
                    .map(|r| match &r.outcome {
                        Ok(result) => result_json(&r.id, result),
                        Err(e) => json!({ "id": id_json(&r.id), "error": e }),
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Quiet => Ok(results
                .iter()
                .filter(|r| r.is_ok())
                .map(|r| r.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if results.is_empty() {
                    return Ok(self.colorize("No leads to enrich.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Business", "Outcome", "Website", "Confidence"]);

                for (row, result) in rows.iter().zip(results) {
                    match &result.outcome {
                        Ok(enriched) => builder.push_record([
                            result.id.to_string(),
                            row.business_name.clone(),
                            self.status_label(EnrichStatus::Done),
                            or_dash(&enriched.official_website),
                            enriched.confidence.to_string(),
                        ]),
                        Err(e) => builder.push_record([
                            result.id.to_string(),
                            row.business_name.clone(),
                            self.status_label(EnrichStatus::Error),
                            e.clone(),
                            "-".to_string(),
                        ]),
                    }
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the batch summary line.
    pub fn batch_summary(&self, summary: &BatchSummary) -> String {
        if summary.failed == 0 {
            self.success(&summary.summary())
        } else {
            self.warning(&summary.summary())
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format lead creation result.
    pub fn lead_added(&self, id: &LeadId) -> String {
        match self.format {
            OutputFormat::Quiet => id.to_string(),
            _ => self.success(&format!("Lead added: {}", id)),
        }
    }

    fn status_label(&self, status: EnrichStatus) -> String {
        let color = match status {
            EnrichStatus::Pending => "blue",
            EnrichStatus::Running => "cyan",
            EnrichStatus::Done => "green",
            EnrichStatus::Error => "red",
        };
        self.colorize(status.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// Numeric ids stay numbers in JSON.
fn id_json(id: &LeadId) -> Value {
    match id {
        LeadId::Number(n) => json!(n),
        LeadId::Text(s) => json!(s),
    }
}

fn record_json(record: &LeadRecord) -> Value {
    json!({
        "id": id_json(&record.lead.id),
        "business_name": record.lead.business_name,
        "city": record.lead.city,
        "state": record.lead.state,
        "enrich_status": record.status.as_str(),
        "enrich_error": record.error,
        "last_enriched_at": record.last_enriched_at,
    })
}

fn result_json(id: &LeadId, result: &EnrichmentResult) -> Value {
    let decision_makers: Vec<Value> = result
        .decision_makers
        .iter()
        .map(|d| json!({ "name": d.name, "title": d.title, "source_url": d.source_url }))
        .collect();

    json!({
        "id": id_json(id),
        "official_website": result.official_website,
        "website_source_url": result.website_source_url,
        "instagram_url": result.instagram_url,
        "instagram_source": result.instagram_source.map(|s| s.as_str()),
        "decision_makers": decision_makers,
        "confidence": result.confidence,
        "search_queries": {
            "website": result.search_queries.website,
            "instagram": result.search_queries.instagram,
            "decision_makers": result.search_queries.decision_makers,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::{DecisionMaker, InstagramSource, SearchQueries};

    fn create_test_record() -> LeadRecord {
        LeadRecord {
            lead: LeadRow::new(1, "Blue Bottle Coffee", "Oakland", "CA"),
            status: EnrichStatus::Error,
            error: Some("Enrichment failed after 3 attempts: timeout".to_string()),
            last_enriched_at: Some(1_700_000_000),
        }
    }

    fn create_test_result() -> EnrichmentResult {
        let row = LeadRow::new(1, "Blue Bottle Coffee", "Oakland", "CA");
        EnrichmentResult {
            official_website: Some("https://bluebottle.example".to_string()),
            website_source_url: None,
            instagram_url: Some("https://instagram.com/bluebottle".to_string()),
            instagram_source: Some(InstagramSource::WebsiteHtml),
            decision_makers: vec![DecisionMaker::new(
                "James Freeman",
                "Founder",
                "https://bluebottle.example/about",
            )],
            confidence: 80,
            search_queries: SearchQueries::for_lead(&row),
        }
    }

    #[test]
    fn test_json_records() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_records(&[create_test_record()]).unwrap();

        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], json!(1));
        assert_eq!(parsed[0]["enrich_status"], "error");
        assert_eq!(parsed[0]["last_enriched_at"], json!(1_700_000_000u64));
    }

    #[test]
    fn test_quiet_records() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_records(&[create_test_record()]).unwrap();
        assert_eq!(output, "1");
    }

    #[test]
    fn test_table_records() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&[create_test_record()]).unwrap();
        assert!(output.contains("Business"));
        assert!(output.contains("Blue Bottle Coffee"));
        assert!(output.contains("error"));
    }

    #[test]
    fn test_empty_records() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&[]).unwrap();
        assert!(output.contains("No leads found"));
    }

    #[test]
    fn test_json_result() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_result(&LeadId::from("b-2"), &create_test_result())
            .unwrap();

        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["id"], "b-2");
        assert_eq!(parsed["instagram_source"], "website_html");
        assert_eq!(parsed["confidence"], 80);
        assert_eq!(parsed["decision_makers"][0]["title"], "Founder");
        assert_eq!(
            parsed["search_queries"]["website"],
            "Blue Bottle Coffee Oakland CA official website"
        );
    }

    #[test]
    fn test_batch_outcomes() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let rows = vec![
            LeadRow::new(1, "Blue Bottle Coffee", "Oakland", "CA"),
            LeadRow::new(2, "Closed Shop", "Nowhere", "KS"),
        ];
        let results = vec![
            BatchResult::ok(LeadId::Number(1), create_test_result()),
            BatchResult::failed(LeadId::Number(2), "no results"),
        ];

        let output = formatter.format_batch(&rows, &results).unwrap();
        assert!(output.contains("https://bluebottle.example"));
        assert!(output.contains("no results"));

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(quiet.format_batch(&rows, &results).unwrap(), "1");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
