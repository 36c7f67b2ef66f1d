use include_dir::{include_dir, Dir};
use serde::Deserialize;
use std::collections::HashMap;

static TABLE_DIR: Dir = include_dir!("src/tables");

/// Symbol table for one rendering script: digit glyphs, place-value words and
/// the script's euphonic contractions, if it has any.
#[derive(Deserialize, Clone, Debug)]
pub struct ScriptTable {
    pub name: String,
    /// Canonical reading of a whole number that is zero.
    pub zero: String,
    pub digits: [String; 10],
    pub places: PlaceWords,
    #[serde(default)]
    pub contractions: Option<ContractionTables>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PlaceWords {
    pub ten: String,
    pub hundred: String,
    pub thousand: String,
    pub myriad: String,
    pub hundred_million: String,
}

/// Fused digit+place readings that replace plain concatenation
/// (e.g. 3 + ひゃく reads さんびゃく, not さんひゃく).
#[derive(Deserialize, Clone, Debug)]
pub struct ContractionTables {
    pub hundred: HashMap<u8, String>,
    pub thousand: HashMap<u8, String>,
}

/// The two places that can carry contractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractedPlace {
    Hundred,
    Thousand,
}

impl ScriptTable {
    pub fn load(name: &str) -> Self {
        let file = TABLE_DIR
            .get_file(format!("{name}.json"))
            .expect("script table not found");

        let text = file
            .contents_utf8()
            .expect("unable to interpret script table as a string");

        serde_json::from_str(text).expect("unable to deserialize script table")
    }

    /// Looks up the fused reading for `digit` at `place`, when the script
    /// defines one.
    pub fn contraction(&self, place: ContractedPlace, digit: u8) -> Option<&str> {
        let tables = self.contractions.as_ref()?;
        let map = match place {
            ContractedPlace::Hundred => &tables.hundred,
            ContractedPlace::Thousand => &tables.thousand,
        };
        map.get(&digit).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_hiragana() {
        let table = ScriptTable::load("hiragana");

        assert_eq!(table.name, "hiragana");
        assert_eq!(table.digits[7], "なな");
        assert_eq!(table.places.ten, "じゅう");
        assert_eq!(table.zero, "ゼロ");
    }

    #[test]
    fn load_kanji() {
        let table = ScriptTable::load("kanji");

        assert_eq!(table.name, "kanji");
        assert_eq!(table.digits[1], "一");
        assert_eq!(table.places.hundred_million, "億");
    }

    #[test]
    fn hiragana_contractions_cover_the_irregular_digits() {
        let table = ScriptTable::load("hiragana");

        assert_eq!(table.contraction(ContractedPlace::Hundred, 3), Some("さんびゃく"));
        assert_eq!(table.contraction(ContractedPlace::Hundred, 6), Some("ろっぴゃく"));
        assert_eq!(table.contraction(ContractedPlace::Hundred, 8), Some("はっぴゃく"));
        assert_eq!(table.contraction(ContractedPlace::Thousand, 3), Some("さんぜん"));
        assert_eq!(table.contraction(ContractedPlace::Thousand, 8), Some("はっせん"));
        // 6 contracts at the hundreds place only
        assert_eq!(table.contraction(ContractedPlace::Thousand, 6), None);
        assert_eq!(table.contraction(ContractedPlace::Hundred, 2), None);
    }

    #[test]
    fn kanji_has_no_contractions() {
        let table = ScriptTable::load("kanji");
        assert_eq!(table.contraction(ContractedPlace::Hundred, 3), None);
        assert_eq!(table.contraction(ContractedPlace::Thousand, 8), None);
    }

    #[test]
    fn table_deserialization() {
        let json_data = r#"
        {
            "name": "test",
            "zero": "zero",
            "digits": ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
            "places": {
                "ten": "T",
                "hundred": "H",
                "thousand": "K",
                "myriad": "M",
                "hundred_million": "O"
            }
        }
        "#;

        let table: ScriptTable =
            serde_json::from_str(json_data).expect("failed to deserialize test table");

        assert_eq!(table.name, "test");
        assert!(table.contractions.is_none());
    }

    #[test]
    #[should_panic(expected = "script table not found")]
    fn load_nonexistent_table() {
        ScriptTable::load("nonexistent");
    }
}
