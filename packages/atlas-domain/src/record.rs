use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
	Task,
	DataArtifact,
	Constraint,
	Touchpoint,
}
impl RecordKind {
	/// Kind order used when merging results across kinds.
	pub const ALL: [Self; 4] = [Self::Task, Self::DataArtifact, Self::Constraint, Self::Touchpoint];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Task => "task",
			Self::DataArtifact => "data_artifact",
			Self::Constraint => "constraint",
			Self::Touchpoint => "touchpoint",
		}
	}
}

impl fmt::Display for RecordKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RecordKind {
	type Err = UnknownKind;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
			"task" | "tasks" => Ok(Self::Task),
			"data_artifact" | "data_artifacts" | "data" => Ok(Self::DataArtifact),
			"constraint" | "constraints" => Ok(Self::Constraint),
			"touchpoint" | "touchpoints" => Ok(Self::Touchpoint),
			_ => Err(UnknownKind(raw.to_string())),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
	Ai,
	Human,
	System,
}
impl TaskKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Ai => "ai",
			Self::Human => "human",
			Self::System => "system",
		}
	}
}

impl fmt::Display for TaskKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TaskKind {
	type Err = UnknownKind;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"ai" => Ok(Self::Ai),
			"human" => Ok(Self::Human),
			"system" => Ok(Self::System),
			_ => Err(UnknownKind(raw.to_string())),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown record kind {0:?}.")]
pub struct UnknownKind(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capability {
	pub name: String,
	#[serde(default)]
	pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
	pub id: String,
	pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoItem {
	pub id: String,
	pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IoSpec {
	#[serde(default)]
	pub inputs: Vec<IoItem>,
	#[serde(default)]
	pub outputs: Vec<IoItem>,
}
impl IoSpec {
	pub fn items(&self) -> impl Iterator<Item = &IoItem> {
		self.inputs.iter().chain(self.outputs.iter())
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiTask {
	pub id: String,
	pub name: String,
	pub short_description: String,
	pub usage_example: Option<String>,
	#[serde(default)]
	pub capabilities: Vec<Capability>,
	#[serde(default)]
	pub variants: Vec<Variant>,
	#[serde(default)]
	pub io: IoSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanTask {
	pub id: String,
	pub name: String,
	pub short_description: String,
	pub usage_example: Option<String>,
	#[serde(default)]
	pub variants: Vec<Variant>,
	#[serde(default)]
	pub io: IoSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemTask {
	pub id: String,
	pub name: String,
	pub short_description: String,
	pub usage_example: Option<String>,
	#[serde(default)]
	pub capabilities: Vec<Capability>,
	#[serde(default)]
	pub io: IoSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataArtifact {
	pub id: String,
	pub name: String,
	pub description: String,
	pub usage_example: Option<String>,
	#[serde(default)]
	pub examples: Vec<String>,
	pub format_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraint {
	pub id: String,
	pub name: String,
	pub description: String,
	pub usage_example: Option<String>,
	pub category: Option<String>,
	#[serde(default)]
	pub examples: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Touchpoint {
	pub id: String,
	pub name: String,
	pub description: String,
	pub usage_example: Option<String>,
	#[serde(default)]
	pub channels: Vec<String>,
	#[serde(default)]
	pub examples: Vec<String>,
}

/// One Atlas entry. Each variant carries only the fields of its kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "record_type", rename_all = "snake_case")]
pub enum Record {
	AiTask(AiTask),
	HumanTask(HumanTask),
	SystemTask(SystemTask),
	DataArtifact(DataArtifact),
	Constraint(Constraint),
	Touchpoint(Touchpoint),
}
impl Record {
	pub fn id(&self) -> &str {
		match self {
			Self::AiTask(task) => &task.id,
			Self::HumanTask(task) => &task.id,
			Self::SystemTask(task) => &task.id,
			Self::DataArtifact(artifact) => &artifact.id,
			Self::Constraint(constraint) => &constraint.id,
			Self::Touchpoint(touchpoint) => &touchpoint.id,
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Self::AiTask(task) => &task.name,
			Self::HumanTask(task) => &task.name,
			Self::SystemTask(task) => &task.name,
			Self::DataArtifact(artifact) => &artifact.name,
			Self::Constraint(constraint) => &constraint.name,
			Self::Touchpoint(touchpoint) => &touchpoint.name,
		}
	}

	/// The short description or pitch line.
	pub fn summary(&self) -> &str {
		match self {
			Self::AiTask(task) => &task.short_description,
			Self::HumanTask(task) => &task.short_description,
			Self::SystemTask(task) => &task.short_description,
			Self::DataArtifact(artifact) => &artifact.description,
			Self::Constraint(constraint) => &constraint.description,
			Self::Touchpoint(touchpoint) => &touchpoint.description,
		}
	}

	pub fn usage_example(&self) -> Option<&str> {
		match self {
			Self::AiTask(task) => task.usage_example.as_deref(),
			Self::HumanTask(task) => task.usage_example.as_deref(),
			Self::SystemTask(task) => task.usage_example.as_deref(),
			Self::DataArtifact(artifact) => artifact.usage_example.as_deref(),
			Self::Constraint(constraint) => constraint.usage_example.as_deref(),
			Self::Touchpoint(touchpoint) => touchpoint.usage_example.as_deref(),
		}
	}

	pub fn kind(&self) -> RecordKind {
		match self {
			Self::AiTask(_) | Self::HumanTask(_) | Self::SystemTask(_) => RecordKind::Task,
			Self::DataArtifact(_) => RecordKind::DataArtifact,
			Self::Constraint(_) => RecordKind::Constraint,
			Self::Touchpoint(_) => RecordKind::Touchpoint,
		}
	}

	pub fn task_kind(&self) -> Option<TaskKind> {
		match self {
			Self::AiTask(_) => Some(TaskKind::Ai),
			Self::HumanTask(_) => Some(TaskKind::Human),
			Self::SystemTask(_) => Some(TaskKind::System),
			_ => None,
		}
	}
}
