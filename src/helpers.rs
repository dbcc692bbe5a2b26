use std::{fs, path::Path};

use crate::{error::QuizError, models::game::Pack};

pub fn load_pack<P: AsRef<Path>>(path: P) -> Result<Pack, QuizError> {
    let raw = fs::read_to_string(path)?;
    let pack: Pack = serde_json::from_str(&raw)?;
    pack.validate()?;
    Ok(pack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_pack_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_valid_pack_file() {
        let file = write_pack_file(
            r#"{
                "name": "tiny",
                "questions": [
                    {
                        "prompt": "Is yes correct?",
                        "options": ["yes", "no"],
                        "correct_answer": "yes"
                    }
                ]
            }"#,
        );

        let pack = load_pack(file.path()).unwrap();
        assert_eq!(pack.name, "tiny");
        assert_eq!(pack.questions.len(), 1);
        assert_eq!(pack.questions[0].correct_answer, "yes");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_pack_file("{ not json");
        assert!(matches!(load_pack(file.path()), Err(QuizError::Parse(_))));
    }

    #[test]
    fn well_formed_but_invalid_pack_is_rejected() {
        let file = write_pack_file(r#"{ "name": "empty", "questions": [] }"#);
        assert!(matches!(
            load_pack(file.path()),
            Err(QuizError::InvalidPack(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            load_pack("/nonexistent/pack.json"),
            Err(QuizError::Io(_))
        ));
    }
}
