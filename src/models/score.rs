use serde::{Deserialize, Serialize};

/// A submitted quiz result. The score stays the literal string the client
/// sent (an integer percentage, 0-100).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(rename = "userName")]
    pub user_name: String,
    pub deck: String,
    pub score: String,
}

/// Append-only log of quiz results, in submission order.
#[derive(Clone, Default)]
pub struct ScoreLog {
    records: Vec<ScoreRecord>,
}

impl ScoreLog {
    pub fn append(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order_and_literal_scores() {
        let mut log = ScoreLog::default();
        log.append(ScoreRecord {
            user_name: "ala".to_string(),
            deck: "polish".to_string(),
            score: "66".to_string(),
        });
        log.append(ScoreRecord {
            user_name: "ola".to_string(),
            deck: "polish".to_string(),
            score: "100".to_string(),
        });

        let records = log.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].user_name, "ala");
        assert_eq!(records[0].score, "66");
        assert_eq!(records[1].user_name, "ola");
    }

    #[test]
    fn test_wire_field_names() {
        let record = ScoreRecord {
            user_name: "ala".to_string(),
            deck: "polish".to_string(),
            score: "50".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userName"], "ala");
        assert_eq!(json["deck"], "polish");
        assert_eq!(json["score"], "50");
    }
}
