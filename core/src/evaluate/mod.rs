//! Answer evaluation.
//!
//! [`evaluate_visual`] is a pure function of the question and the answer.
//! It never fails: malformed answers, unanswerable questions and unknown
//! subtypes all grade as incorrect.

#[cfg(test)]
mod tests_selection;
#[cfg(test)]
mod tests_angle;

use crate::question::{
    AngleQuestion, GridScoring, VisualAnswer, VisualQuestion, BASE_OPTION_ID,
};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Two sets are equal when they have the same size and every element of
/// `a` is in `b`.
pub fn sets_equal<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> bool {
    a.len() == b.len() && a.iter().all(|item| b.contains(item))
}

fn ids<'a>(iter: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    iter.map(str::to_string).collect()
}

/// The set of option ids that makes up a fully correct selection.
///
/// `None` for questions that are not graded by selection: count-mode
/// grids, single-mode angles and unknown subtypes.
pub fn correct_selection(question: &VisualQuestion) -> Option<BTreeSet<String>> {
    match question {
        VisualQuestion::Pie(q) => Some(ids(q.segments.iter().filter(|s| s.correct).map(|s| s.id.as_str()))),
        VisualQuestion::Grid(q) => match &q.scoring {
            GridScoring::Pattern(cells) => Some(cells.clone()),
            GridScoring::Count(_) => None,
        },
        VisualQuestion::ShapeSelect(q) => Some(ids(q.shapes.iter().filter(|s| s.correct).map(|s| s.id.as_str()))),
        VisualQuestion::LineRelation(q) => Some(ids(
            q.pairs
                .iter()
                .filter(|p| p.relation == Some(q.target))
                .map(|p| p.id.as_str()),
        )),
        VisualQuestion::Angle(q) if q.multi => {
            let base = q.base_correct.then_some(BASE_OPTION_ID);
            let variants = q.variants.iter().filter(|v| v.correct).map(|v| v.id.as_str());
            Some(ids(base.into_iter().chain(variants)))
        }
        VisualQuestion::Angle(_) => None,
        VisualQuestion::Unknown => None,
    }
}

/// Accept a numeric estimate if it is within tolerance of any target.
///
/// Targets are tried in order (base first) and the first match wins; the
/// estimate is not matched against the nearest target.
fn angle_estimate_matches(q: &AngleQuestion, estimate: f64) -> bool {
    q.candidates()
        .any(|(target, tolerance)| (estimate - target).abs() <= tolerance)
}

/// Grade a submitted answer against a question.
pub fn evaluate_visual(question: &VisualQuestion, answer: &VisualAnswer) -> bool {
    let verdict = match question {
        VisualQuestion::Grid(q) => {
            let selected = answer.selection();
            match &q.scoring {
                GridScoring::Pattern(cells) => sets_equal(&selected, cells),
                GridScoring::Count(required) => selected.len() == *required,
            }
        }
        VisualQuestion::Angle(q) if !q.multi => match answer.numeric() {
            Some(estimate) => angle_estimate_matches(q, estimate),
            None => false,
        },
        VisualQuestion::Pie(_)
        | VisualQuestion::ShapeSelect(_)
        | VisualQuestion::LineRelation(_)
        | VisualQuestion::Angle(_) => match correct_selection(question) {
            Some(expected) => sets_equal(&answer.selection(), &expected),
            None => false,
        },
        VisualQuestion::Unknown => false,
    };
    trace!(subtype = question.subtype(), verdict, "evaluated visual answer");
    verdict
}

/// Grade raw JSON as stored in the question bank and posted by the player.
///
/// Anything that does not parse grades as incorrect.
pub fn evaluate_json(question: &Value, answer: &Value) -> bool {
    let question = match VisualQuestion::from_json(question) {
        Ok(q) => q,
        Err(e) => {
            debug!("rejecting unreadable question: {}", e);
            return false;
        }
    };
    let answer = match VisualAnswer::try_from(answer) {
        Ok(a) => a,
        Err(e) => {
            debug!(subtype = question.subtype(), "rejecting malformed answer: {}", e);
            return false;
        }
    };
    evaluate_visual(&question, &answer)
}
