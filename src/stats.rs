// 📊 Stat Table Loader
// Reads the base-stat CSV into typed entity records, one per data row

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

use crate::error::QuizError;

// ============================================================================
// COLUMN HEADERS
// ============================================================================

pub const COL_ID: &str = "No.";
pub const COL_NAME: &str = "ポケモン";
pub const COL_TYPE1: &str = "タイプ1";
pub const COL_TYPE2: &str = "タイプ2";
pub const COL_TOTAL: &str = "合計";

// ============================================================================
// CORE TYPES
// ============================================================================

/// Stat - One of the six base stats a quiz can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    #[default]
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpAttack,
        Stat::SpDefense,
        Stat::Speed,
    ];

    /// Column header in the base-stat file. Also used as the question label.
    pub fn column(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "攻撃",
            Stat::Defense => "防御",
            Stat::SpAttack => "特攻",
            Stat::SpDefense => "特防",
            Stat::Speed => "素早さ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseStats {
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub sp_attack: i64,
    pub sp_defense: i64,
    pub speed: i64,
}

impl BaseStats {
    pub fn get(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpAttack => self.sp_attack,
            Stat::SpDefense => self.sp_defense,
            Stat::Speed => self.speed,
        }
    }
}

/// EntityRecord - One row of the base-stat table
///
/// `match_name` is the join key against ranking files. Form variants printed
/// on a second line ("オーガポン\nかまどのめん") share the base name as their
/// key, while `display_name` keeps both parts for the question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub id: String,
    pub display_name: String,
    pub match_name: String,
    pub raw_name: String,
    pub type1: String,
    pub type2: String,
    pub stats: BaseStats,
    pub total: i64,
}

impl EntityRecord {
    pub fn new(id: &str, raw_name: &str, stats: BaseStats) -> Self {
        let (display_name, match_name) = split_name(raw_name);
        EntityRecord {
            id: id.to_string(),
            display_name,
            match_name,
            raw_name: raw_name.to_string(),
            type1: String::new(),
            type2: String::new(),
            stats,
            total: 0,
        }
    }

    pub fn stat(&self, stat: Stat) -> i64 {
        self.stats.get(stat)
    }
}

/// Split a source name into `(display_name, match_name)`.
///
/// Only the first line break counts. A CR right before it is dropped so
/// files saved with CRLF line endings key the same way.
pub fn split_name(raw: &str) -> (String, String) {
    match raw.split_once('\n') {
        Some((head, tail)) => {
            let head = head.strip_suffix('\r').unwrap_or(head);
            (format!("{}{}", head, tail), head.to_string())
        }
        None => (raw.to_string(), raw.to_string()),
    }
}

// ============================================================================
// LOADER
// ============================================================================

/// Header positions resolved once per file
struct Columns {
    id: usize,
    name: usize,
    type1: usize,
    type2: usize,
    stats: [usize; 6],
    total: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord, file: &str) -> Result<Self, QuizError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| QuizError::MissingColumn {
                    file: file.to_string(),
                    column: column.to_string(),
                })
        };

        let mut stats = [0usize; 6];
        for (slot, stat) in stats.iter_mut().zip(Stat::ALL) {
            *slot = find(stat.column())?;
        }

        Ok(Columns {
            id: find(COL_ID)?,
            name: find(COL_NAME)?,
            type1: find(COL_TYPE1)?,
            type2: find(COL_TYPE2)?,
            stats,
            total: find(COL_TOTAL)?,
        })
    }

    fn entity(&self, record: &StringRecord, file: &str, line: usize) -> Result<EntityRecord, QuizError> {
        let number = |idx: usize, column: &str| parse_number(record.get(idx).unwrap_or(""), file, line, column);

        let [hp, attack, defense, sp_attack, sp_defense, speed] = self.stats;
        let stats = BaseStats {
            hp: number(hp, Stat::Hp.column())?,
            attack: number(attack, Stat::Attack.column())?,
            defense: number(defense, Stat::Defense.column())?,
            sp_attack: number(sp_attack, Stat::SpAttack.column())?,
            sp_defense: number(sp_defense, Stat::SpDefense.column())?,
            speed: number(speed, Stat::Speed.column())?,
        };

        let mut entity = EntityRecord::new(
            record.get(self.id).unwrap_or(""),
            record.get(self.name).unwrap_or(""),
            stats,
        );
        entity.type1 = record.get(self.type1).unwrap_or("").to_string();
        entity.type2 = record.get(self.type2).unwrap_or("").to_string();
        entity.total = number(self.total, COL_TOTAL)?;

        Ok(entity)
    }
}

fn parse_number(value: &str, file: &str, line: usize, column: &str) -> Result<i64, QuizError> {
    value.trim().parse::<i64>().map_err(|_| QuizError::InvalidNumber {
        file: file.to_string(),
        line,
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Load the base-stat table. Any malformed row aborts the whole load.
pub fn load_base_stats(csv_path: &Path) -> Result<Vec<EntityRecord>> {
    let file = File::open(csv_path)
        .with_context(|| format!("Failed to open base stats file: {}", csv_path.display()))?;

    // Extra trailing cells are ignored; short rows still fail on their numeric columns
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let filename = csv_path.display().to_string();

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header row in {}", filename))?
        .clone();
    let columns = Columns::resolve(&headers, &filename)?;

    let mut records = Vec::new();

    for (row_num, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("Failed to parse CSV row {} in {}", row_num + 1, filename))?;

        // Names may span lines, so take the reader's own line count when it has one
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_num + 2);

        records.push(columns.entity(&record, &filename, line)?);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "No.,ポケモン,タイプ1,タイプ2,HP,攻撃,防御,特攻,特防,素早さ,合計\n";

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_split_name_without_break() {
        let (display, key) = split_name("ピカチュウ");
        assert_eq!(display, "ピカチュウ");
        assert_eq!(key, "ピカチュウ");
    }

    #[test]
    fn test_split_name_with_form_line() {
        let (display, key) = split_name("オーガポン\nかまどのめん");
        assert_eq!(display, "オーガポンかまどのめん");
        assert_eq!(key, "オーガポン");
    }

    #[test]
    fn test_split_name_only_first_break_counts() {
        let (display, key) = split_name("A\nB\nC");
        assert_eq!(display, "AB\nC");
        assert_eq!(key, "A");
    }

    #[test]
    fn test_split_name_crlf() {
        let (display, key) = split_name("A\r\nForm");
        assert_eq!(display, "AForm");
        assert_eq!(key, "A");
    }

    #[test]
    fn test_load_base_stats_rows_in_order() {
        let csv = format!(
            "{}1,\"A\nForm\",くさ,,80,120,84,60,96,50,490\n2,B,ほのお,ひこう,78,84,78,109,85,60,494\n3,C,みず,,79,83,100,85,105,70,522\n",
            HEADER
        );
        let file = write_csv(&csv);

        let records = load_base_stats(file.path()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].match_name, "A");
        assert_eq!(records[0].display_name, "AForm");
        assert_eq!(records[0].raw_name, "A\nForm");
        assert_eq!(records[0].stats.speed, 50);
        assert_eq!(records[0].total, 490);
        assert_eq!(records[0].type2, "");
        assert_eq!(records[1].type2, "ひこう");
        assert_eq!(records[1].stat(Stat::SpAttack), 109);
        assert_eq!(records[2].match_name, "C");
        assert_eq!(records[2].id, "3");
    }

    #[test]
    fn test_load_base_stats_missing_column() {
        let file = write_csv("No.,ポケモン,タイプ1,タイプ2,HP,攻撃,防御,特攻,特防,合計\n1,A,くさ,,1,2,3,4,5,15\n");

        let err = load_base_stats(file.path()).unwrap_err();
        let quiz_err = err.downcast_ref::<QuizError>().unwrap();
        assert_eq!(
            *quiz_err,
            QuizError::MissingColumn {
                file: file.path().display().to_string(),
                column: "素早さ".to_string(),
            }
        );
    }

    #[test]
    fn test_load_base_stats_non_numeric_is_fatal() {
        let csv = format!("{}1,A,くさ,,80,120,84,60,96,50,490\n2,B,ほのお,,78,84,78,109,85,fast,494\n", HEADER);
        let file = write_csv(&csv);

        let err = load_base_stats(file.path()).unwrap_err();
        match err.downcast_ref::<QuizError>() {
            Some(QuizError::InvalidNumber { line, column, value, .. }) => {
                assert_eq!(*line, 3);
                assert_eq!(column, "素早さ");
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_base_stats_missing_file() {
        let result = load_base_stats(Path::new("/nonexistent/base_stats.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_numeric_fields_tolerate_padding() {
        let csv = format!("{}1,A,くさ,, 80 ,120,84,60,96,50,490\n", HEADER);
        let file = write_csv(&csv);

        let records = load_base_stats(file.path()).unwrap();
        assert_eq!(records[0].stats.hp, 80);
    }

    #[test]
    fn test_trailing_extra_cell_is_ignored() {
        let csv = format!("{}1,A,くさ,,80,120,84,60,96,50,490,\n2,B,ほのお,,78,84,78,109,85,60,494\n", HEADER);
        let file = write_csv(&csv);

        let records = load_base_stats(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].total, 490);
        assert_eq!(records[1].stats.speed, 60);
    }

    #[test]
    fn test_short_row_is_fatal() {
        let csv = format!("{}1,A,くさ,,80,120,84,60,96,50\n", HEADER);
        let file = write_csv(&csv);

        let err = load_base_stats(file.path()).unwrap_err();
        match err.downcast_ref::<QuizError>() {
            Some(QuizError::InvalidNumber { column, value, .. }) => {
                assert_eq!(column, COL_TOTAL);
                assert_eq!(value, "");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_negative_integers_load() {
        let csv = format!("{}1,A,くさ,,-1,120,84,60,96,50,409\n", HEADER);
        let file = write_csv(&csv);

        let records = load_base_stats(file.path()).unwrap();

        assert_eq!(records[0].stats.hp, -1);
        assert_eq!(records[0].stat(Stat::Hp), -1);
    }
}
