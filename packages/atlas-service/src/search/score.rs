use atlas_domain::{Capability, IoSpec, Record, Variant};

pub mod weights {
	pub const NAME_EXACT: u32 = 100;
	pub const NAME_PREFIX: u32 = 50;
	pub const NAME_SUBSTRING: u32 = 30;
	pub const SLUG: u32 = 25;
	pub const SUMMARY: u32 = 15;
	pub const USAGE_EXAMPLE: u32 = 10;
	pub const CAPABILITY_NAME: u32 = 8;
	pub const CAPABILITY_TAG: u32 = 6;
	pub const EXAMPLE: u32 = 6;
	pub const VARIANT_LABEL: u32 = 5;
	pub const CATEGORY: u32 = 5;
	pub const FORMAT_NOTES: u32 = 4;
	pub const IO_ITEM: u32 = 3;
}

/// Lower-cased searchable text of one record.
struct SearchableText {
	name: String,
	slug: String,
	summary: String,
	usage_example: Option<String>,
	extended: Vec<(u32, String)>,
}
impl SearchableText {
	fn of(record: &Record) -> Self {
		let mut extended = Vec::new();

		match record {
			Record::AiTask(task) => {
				push_capabilities(&mut extended, &task.capabilities);
				push_variants(&mut extended, &task.variants);
				push_io(&mut extended, &task.io);
			},
			Record::HumanTask(task) => {
				push_variants(&mut extended, &task.variants);
				push_io(&mut extended, &task.io);
			},
			Record::SystemTask(task) => {
				push_capabilities(&mut extended, &task.capabilities);
				push_io(&mut extended, &task.io);
			},
			Record::DataArtifact(artifact) => {
				push_texts(&mut extended, weights::EXAMPLE, &artifact.examples);

				if let Some(notes) = artifact.format_notes.as_deref() {
					extended.push((weights::FORMAT_NOTES, notes.to_lowercase()));
				}
			},
			Record::Constraint(constraint) => {
				if let Some(category) = constraint.category.as_deref() {
					extended.push((weights::CATEGORY, category.to_lowercase()));
				}

				push_texts(&mut extended, weights::EXAMPLE, &constraint.examples);
			},
			Record::Touchpoint(touchpoint) => {
				push_texts(&mut extended, weights::CATEGORY, &touchpoint.channels);
				push_texts(&mut extended, weights::EXAMPLE, &touchpoint.examples);
			},
		}

		Self {
			name: record.name().to_lowercase(),
			slug: record.id().to_lowercase(),
			summary: record.summary().to_lowercase(),
			usage_example: record.usage_example().map(str::to_lowercase),
			extended,
		}
	}

	/// Weight earned by one term. Zero means the term matched no field.
	fn score_term(&self, term: &str) -> u32 {
		let mut score = if self.name == term {
			weights::NAME_EXACT
		} else if self.name.starts_with(term) {
			weights::NAME_PREFIX
		} else if self.name.contains(term) {
			weights::NAME_SUBSTRING
		} else {
			0
		};

		if self.slug.contains(term) {
			score += weights::SLUG;
		}
		if self.summary.contains(term) {
			score += weights::SUMMARY;
		}
		if self.usage_example.as_deref().is_some_and(|example| example.contains(term)) {
			score += weights::USAGE_EXAMPLE;
		}

		for (weight, text) in &self.extended {
			if text.contains(term) {
				score += weight;
			}
		}

		score
	}
}

/// Scores `record` against lower-cased `tokens`. Every token must match some field, otherwise
/// the record scores zero. An empty token list also scores zero.
pub fn score_record(record: &Record, tokens: &[String]) -> u32 {
	if tokens.is_empty() {
		return 0;
	}

	let text = SearchableText::of(record);
	let mut total = 0_u32;

	for token in tokens {
		let term_score = text.score_term(token);

		if term_score == 0 {
			return 0;
		}

		total = total.saturating_add(term_score);
	}

	total
}

fn push_capabilities(out: &mut Vec<(u32, String)>, capabilities: &[Capability]) {
	for capability in capabilities {
		out.push((weights::CAPABILITY_NAME, capability.name.to_lowercase()));

		push_texts(out, weights::CAPABILITY_TAG, &capability.tags);
	}
}

fn push_variants(out: &mut Vec<(u32, String)>, variants: &[Variant]) {
	for variant in variants {
		out.push((weights::VARIANT_LABEL, variant.label.to_lowercase()));
	}
}

fn push_io(out: &mut Vec<(u32, String)>, io: &IoSpec) {
	for item in io.items() {
		out.push((weights::IO_ITEM, format!("{} {}", item.id, item.label).to_lowercase()));
	}
}

fn push_texts(out: &mut Vec<(u32, String)>, weight: u32, texts: &[String]) {
	for text in texts {
		out.push((weight, text.to_lowercase()));
	}
}

#[cfg(test)]
mod tests {
	use atlas_domain::{AiTask, DataArtifact, HumanTask, IoItem, Touchpoint};

	use super::*;

	fn human_task(id: &str, name: &str, description: &str) -> Record {
		Record::HumanTask(HumanTask {
			id: id.to_string(),
			name: name.to_string(),
			short_description: description.to_string(),
			usage_example: None,
			variants: Vec::new(),
			io: IoSpec::default(),
		})
	}

	fn tokens(raw: &[&str]) -> Vec<String> {
		raw.iter().map(|token| token.to_string()).collect()
	}

	#[test]
	fn name_weights_are_exclusive() {
		let exact = human_task("x", "Review", "");
		let prefix = human_task("x", "Review & Approve", "");
		let substring = human_task("x", "Peer Review", "");

		assert_eq!(score_record(&exact, &tokens(&["review"])), weights::NAME_EXACT);
		assert_eq!(score_record(&prefix, &tokens(&["review"])), weights::NAME_PREFIX);
		assert_eq!(score_record(&substring, &tokens(&["review"])), weights::NAME_SUBSTRING);
	}

	#[test]
	fn every_token_must_match() {
		let record = human_task("review-approve", "Review & Approve", "A person checks output.");

		assert!(score_record(&record, &tokens(&["review", "checks"])) > 0);
		assert_eq!(score_record(&record, &tokens(&["review", "banana"])), 0);
	}

	#[test]
	fn empty_tokens_score_zero() {
		let record = human_task("review-approve", "Review & Approve", "");

		assert_eq!(score_record(&record, &[]), 0);
	}

	#[test]
	fn name_match_outranks_description_match() {
		let named = human_task("review-approve", "Review & Approve", "A person checks output.");
		let described = human_task("generate-draft", "Generate Draft", "Text to refine and review.");
		let query = tokens(&["review"]);
		let named_score = score_record(&named, &query);
		let described_score = score_record(&described, &query);

		assert_eq!(named_score, weights::NAME_PREFIX + weights::SLUG);
		assert_eq!(described_score, weights::SUMMARY);
		assert!(named_score > described_score);
	}

	#[test]
	fn extended_fields_use_their_weights() {
		let task = Record::AiTask(AiTask {
			id: "summarize".to_string(),
			name: "Summarize".to_string(),
			short_description: "Condense content.".to_string(),
			usage_example: Some("Brief a contract.".to_string()),
			capabilities: vec![Capability {
				name: "Abstractive summary".to_string(),
				tags: vec!["compression".to_string()],
			}],
			variants: vec![Variant { id: "exec".to_string(), label: "Executive brief".to_string() }],
			io: IoSpec {
				inputs: vec![IoItem { id: "document".to_string(), label: "Source".to_string() }],
				outputs: Vec::new(),
			},
		});

		assert_eq!(score_record(&task, &tokens(&["abstractive"])), weights::CAPABILITY_NAME);
		assert_eq!(score_record(&task, &tokens(&["compression"])), weights::CAPABILITY_TAG);
		assert_eq!(score_record(&task, &tokens(&["document"])), weights::IO_ITEM);
		assert_eq!(
			score_record(&task, &tokens(&["brief"])),
			weights::USAGE_EXAMPLE + weights::VARIANT_LABEL
		);
	}

	#[test]
	fn artifact_and_touchpoint_fields_are_searchable() {
		let artifact = Record::DataArtifact(DataArtifact {
			id: "summary-text".to_string(),
			name: "Summary".to_string(),
			description: "Short prose.".to_string(),
			usage_example: None,
			examples: vec!["Meeting recap".to_string()],
			format_notes: Some("Plain markdown.".to_string()),
		});
		let touchpoint = Record::Touchpoint(Touchpoint {
			id: "chat-panel".to_string(),
			name: "Chat Panel".to_string(),
			description: "Docked surface.".to_string(),
			usage_example: None,
			channels: vec!["web".to_string()],
			examples: Vec::new(),
		});

		assert_eq!(
			score_record(&artifact, &tokens(&["summary"])),
			weights::NAME_EXACT + weights::SLUG
		);
		assert_eq!(score_record(&artifact, &tokens(&["recap"])), weights::EXAMPLE);
		assert_eq!(score_record(&artifact, &tokens(&["markdown"])), weights::FORMAT_NOTES);
		assert_eq!(score_record(&touchpoint, &tokens(&["web"])), weights::CATEGORY);
	}

	#[test]
	fn scoring_is_case_insensitive_and_pure() {
		let record = human_task("review-approve", "Review & Approve", "A person CHECKS output.");
		let query = tokens(&["checks"]);
		let first = score_record(&record, &query);

		assert_eq!(first, weights::SUMMARY);
		assert_eq!(score_record(&record, &query), first);
	}
}
