//! Per-connection grading session.
//!
//! The player talks to the grader over a WebSocket using `COMMAND:payload`
//! text frames. A session holds the question currently on screen so that
//! answers can be submitted without resending it.

use crate::error::GraderError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use visual_core::geometry::{
    classify_segments, snap_angle, snap_coordinate, LineSegment, Relation, SnapOptions,
};
use visual_core::question::LineRelationQuestion;
use visual_core::{evaluate_visual, VisualAnswer, VisualQuestion};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SnapKind {
    #[default]
    Coordinate,
    Angle,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapCmd {
    value: f64,
    #[serde(default)]
    kind: SnapKind,
    #[serde(flatten)]
    options: SnapOptions,
}

#[derive(Debug, Deserialize)]
struct ClassifyCmd {
    a: LineSegment,
    b: LineSegment,
    tolerance: Option<f64>,
}

pub struct Session {
    question: Option<VisualQuestion>,
    relation_tolerance: f64,
}

impl Session {
    pub fn new(relation_tolerance: f64) -> Self {
        Self { question: None, relation_tolerance }
    }

    pub fn question(&self) -> Option<&VisualQuestion> {
        self.question.as_ref()
    }

    /// Handle one text frame and produce the reply frame.
    pub fn handle(&mut self, text: &str) -> Result<String, GraderError> {
        if let Some(payload) = text.strip_prefix("LOAD:") {
            self.load(payload)
        } else if let Some(payload) = text.strip_prefix("SUBMIT:") {
            self.submit(payload)
        } else if let Some(payload) = text.strip_prefix("SNAP:") {
            let cmd: SnapCmd = serde_json::from_str(payload)?;
            let value = match cmd.kind {
                SnapKind::Coordinate => snap_coordinate(cmd.value, &cmd.options),
                SnapKind::Angle => snap_angle(cmd.value, &cmd.options),
            };
            Ok(format!("SNAPPED:{}", json!({ "value": value })))
        } else if let Some(payload) = text.strip_prefix("CLASSIFY:") {
            let cmd: ClassifyCmd = serde_json::from_str(payload)?;
            let tolerance = cmd.tolerance.unwrap_or(self.relation_tolerance);
            let relation = classify_segments(&cmd.a, &cmd.b, tolerance);
            Ok(format!("RELATION:{}", json!({ "relation": relation })))
        } else if text == "CLEAR" {
            self.question = None;
            info!("Question cleared");
            Ok("CLEARED".to_string())
        } else {
            let command = text.split(':').next().unwrap_or_default();
            Err(GraderError::UnknownCommand(command.to_string()))
        }
    }

    fn load(&mut self, payload: &str) -> Result<String, GraderError> {
        let question = VisualQuestion::from_json_str(payload)?;

        let issues = question.validate();
        let gradable = question.is_gradable();
        if !gradable {
            warn!("Loaded {} question with {} issues, not gradable", question.subtype(), issues.len());
        } else {
            info!("Loaded {} question", question.subtype());
        }

        let mut reply = json!({
            "subtype": question.subtype(),
            "multi": question.is_multi(),
            "gradable": gradable,
            "issues": issues,
        });
        if let VisualQuestion::LineRelation(q) = &question {
            let suggested = self.suggest_relations(q);
            if !suggested.is_empty() {
                debug!("Measured relations for {} unlabelled line pairs", suggested.len());
                reply["suggested"] = json!(suggested);
            }
        }

        self.question = Some(question);
        Ok(format!("LOADED:{}", reply))
    }

    /// Relations measured for pairs the author left unlabelled. The loaded
    /// question itself is graded as authored.
    fn suggest_relations(&self, q: &LineRelationQuestion) -> BTreeMap<String, Relation> {
        let mut draft = q.clone();
        draft.classify_missing(self.relation_tolerance);
        q.pairs
            .iter()
            .zip(&draft.pairs)
            .filter(|(authored, _)| authored.relation.is_none())
            .filter_map(|(_, measured)| measured.relation.map(|r| (measured.id.clone(), r)))
            .collect()
    }

    fn submit(&mut self, payload: &str) -> Result<String, GraderError> {
        let value: Value = serde_json::from_str(payload)?;
        let question = self.question.as_ref().ok_or(GraderError::NoQuestionLoaded)?;

        let correct = match VisualAnswer::try_from(&value) {
            Ok(answer) => evaluate_visual(question, &answer),
            Err(e) => {
                debug!("Malformed answer graded as incorrect: {}", e);
                false
            }
        };
        info!("Graded {} answer: {}", question.subtype(), correct);
        Ok(format!("RESULT:{}", json!({ "correct": correct })))
    }
}
