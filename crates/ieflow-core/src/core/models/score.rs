/// A single row of a score file: one candidate model and its score.
///
/// Lower scores are better. No uniqueness is enforced on `identifier`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub identifier: String,
    pub score: f64,
}

impl ScoreRecord {
    pub fn new(identifier: impl Into<String>, score: f64) -> Self {
        Self {
            identifier: identifier.into(),
            score,
        }
    }
}

/// Returns the record with the lowest score.
///
/// NaN scores never win. On ties the earliest record is kept, so the result only depends
/// on the order of `records`.
pub fn lowest_score<'a, I>(records: I) -> Option<&'a ScoreRecord>
where
    I: IntoIterator<Item = &'a ScoreRecord>,
{
    let mut best: Option<&'a ScoreRecord> = None;
    for candidate in records.into_iter().filter(|r| !r.score.is_nan()) {
        match best {
            Some(current) if current.score <= candidate.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_score_picks_minimum() {
        let records = vec![
            ScoreRecord::new("model_3.pdb", 245.1),
            ScoreRecord::new("model_7.pdb", 198.4),
            ScoreRecord::new("model_1.pdb", 210.0),
        ];
        let best = lowest_score(&records).unwrap();
        assert_eq!(best.identifier, "model_7.pdb");
        assert_eq!(best.score, 198.4);
    }

    #[test]
    fn lowest_score_keeps_first_on_tie() {
        let records = vec![
            ScoreRecord::new("a", 5.0),
            ScoreRecord::new("b", 1.0),
            ScoreRecord::new("c", 1.0),
        ];
        assert_eq!(lowest_score(&records).unwrap().identifier, "b");
    }

    #[test]
    fn lowest_score_skips_nan() {
        let records = vec![
            ScoreRecord::new("nan", f64::NAN),
            ScoreRecord::new("ok", 12.5),
        ];
        assert_eq!(lowest_score(&records).unwrap().identifier, "ok");
    }

    #[test]
    fn lowest_score_handles_negative_values() {
        let records = vec![
            ScoreRecord::new("a", -3.0),
            ScoreRecord::new("b", -17.25),
        ];
        assert_eq!(lowest_score(&records).unwrap().identifier, "b");
    }

    #[test]
    fn lowest_score_is_none_for_empty_or_all_nan() {
        let empty: Vec<ScoreRecord> = Vec::new();
        assert!(lowest_score(&empty).is_none());

        let all_nan = vec![ScoreRecord::new("x", f64::NAN)];
        assert!(lowest_score(&all_nan).is_none());
    }
}
