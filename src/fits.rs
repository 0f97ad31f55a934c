use crate::error::{CaptureError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

const BLOCK_SIZE: usize = 2880;
const CARD_SIZE: usize = 80;

// NINA and SharpCap headers fit in a handful of blocks
const MAX_HEADER_BLOCKS: usize = 36;

/// Primary header keywords of a FITS file, values with quotes and padding removed
#[derive(Debug, Clone, Default)]
pub struct FitsHeader {
    pub keywords: HashMap<String, String>,
}

impl FitsHeader {
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.keywords.get(keyword).map(String::as_str)
    }

    /// First keyword from `keywords` that is present, with its value
    pub fn first_of<'a>(&'a self, keywords: &[&'a str]) -> Option<(&'a str, &'a str)> {
        keywords
            .iter()
            .find_map(|k| self.get(k).map(|value| (*k, value)))
    }
}

/// Read the primary header of a FITS file without touching the pixel data
pub fn read_primary_header(path: &Path) -> Result<FitsHeader> {
    let mut file = File::open(path).map_err(|e| CaptureError::io(path, e))?;

    let mut keywords = HashMap::new();
    let mut block = vec![0u8; BLOCK_SIZE];

    for _ in 0..MAX_HEADER_BLOCKS {
        match file.read_exact(&mut block) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(CaptureError::TruncatedHeader {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(CaptureError::io(path, e)),
        }

        if parse_header_block(&block, &mut keywords) {
            return Ok(FitsHeader { keywords });
        }
    }

    Err(CaptureError::OversizedHeader {
        path: path.to_path_buf(),
        blocks: MAX_HEADER_BLOCKS,
    })
}

/// Parse the cards of one header block into `keywords`.
///
/// Returns true once the END card has been seen.
fn parse_header_block(block: &[u8], keywords: &mut HashMap<String, String>) -> bool {
    for chunk in block.chunks(CARD_SIZE) {
        let Ok(card) = std::str::from_utf8(chunk) else {
            continue;
        };

        if card_keyword(card) == "END" {
            return true;
        }

        // A repeated keyword keeps its first value
        if let Some((keyword, value)) = parse_card(card) {
            keywords.entry(keyword).or_insert(value);
        }
    }

    false
}

fn card_keyword(card: &str) -> &str {
    card.get(..8).unwrap_or(card).trim()
}

/// Parse a `KEYWORD = VALUE / COMMENT` card.
///
/// COMMENT, HISTORY and blank cards have no value indicator and yield None.
pub fn parse_card(card: &str) -> Option<(String, String)> {
    let keyword = card_keyword(card);
    if keyword.is_empty() || keyword == "COMMENT" || keyword == "HISTORY" {
        return None;
    }

    let value_part = card.get(8..)?.strip_prefix('=')?;
    let value_part = value_part.trim_start();

    let value = if let Some(quoted) = value_part.strip_prefix('\'') {
        parse_string_value(quoted)
    } else {
        // Find the value (before the comment if any)
        match value_part.find('/') {
            Some(comment_pos) => value_part[..comment_pos].trim().to_string(),
            None => value_part.trim().to_string(),
        }
    };

    Some((keyword.to_string(), value))
}

/// Read a quoted FITS string; `''` is an escaped quote and trailing blanks are insignificant
fn parse_string_value(quoted: &str) -> String {
    let mut value = String::new();
    let mut chars = quoted.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                value.push('\'');
                chars.next();
            } else {
                break;
            }
        } else {
            value.push(c);
        }
    }

    value.trim_end().to_string()
}

/// Parse a FITS integer or real literal, including the `D` exponent form
pub fn parse_real(value: &str) -> Option<f64> {
    value.trim().replace(['D', 'd'], "E").parse::<f64>().ok()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    /// Build an 80 column card
    pub fn card(text: &str) -> String {
        format!("{:<80}", text)
    }

    /// Serialize cards into a header padded to whole blocks, END appended
    pub fn header_bytes(cards: &[String]) -> Vec<u8> {
        let mut out = String::new();
        for c in cards {
            out.push_str(c);
        }
        out.push_str(&card("END"));
        let mut bytes = out.into_bytes();
        let padded = bytes.len().div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
        bytes.resize(padded, b' ');
        bytes
    }

    /// Write a minimal light frame header with the three capture keywords
    pub fn write_light_frame(path: &Path, filter: &str, exposure: &str, date_loc: &str) {
        let cards = vec![
            card("SIMPLE  =                    T / C# FITS"),
            card("BITPIX  =                   16"),
            card("NAXIS   =                    0"),
            card(&format!("EXPOSURE= {:>20} / [s] Exposure duration", exposure)),
            card(&format!("DATE-LOC= '{}' / Time of observation (local)", date_loc)),
            card(&format!("FILTER  = '{:<8}' / Active filter name", filter)),
        ];
        let mut file = File::create(path).unwrap();
        file.write_all(&header_bytes(&cards)).unwrap();
    }

    #[test]
    fn test_parse_card_string_value() {
        let (k, v) = parse_card(&card("FILTER  = 'Ha      '           / Active filter name")).unwrap();
        assert_eq!(k, "FILTER");
        assert_eq!(v, "Ha");
    }

    #[test]
    fn test_parse_card_string_with_slash_and_quote() {
        let (_, v) = parse_card(&card("OBJECT  = 'M31 / Andromeda''s' / target")).unwrap();
        assert_eq!(v, "M31 / Andromeda's");
    }

    #[test]
    fn test_parse_card_numeric_value() {
        let (k, v) = parse_card(&card("EXPOSURE=                120.0 / [s] Exposure duration")).unwrap();
        assert_eq!(k, "EXPOSURE");
        assert_eq!(v, "120.0");
    }

    #[test]
    fn test_parse_card_without_value_indicator() {
        assert!(parse_card(&card("COMMENT   FITS (Flexible Image Transport System)")).is_none());
        assert!(parse_card(&card("HISTORY = not a value")).is_none());
        assert!(parse_card(&card("")).is_none());
    }

    #[test]
    fn test_parse_real_forms() {
        assert_eq!(parse_real("120"), Some(120.0));
        assert_eq!(parse_real(" 0.5 "), Some(0.5));
        assert_eq!(parse_real("3.0D2"), Some(300.0));
        assert_eq!(parse_real("1.5E1"), Some(15.0));
        assert_eq!(parse_real("abc"), None);
    }

    #[test]
    fn test_read_primary_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.fits");
        write_light_frame(&path, "O3", "300.0", "2024-05-01T22:15:03.123");

        let header = read_primary_header(&path).unwrap();
        assert_eq!(header.get("FILTER"), Some("O3"));
        assert_eq!(header.get("EXPOSURE"), Some("300.0"));
        assert_eq!(header.get("DATE-LOC"), Some("2024-05-01T22:15:03.123"));
        assert_eq!(header.get("NAXIS"), Some("0"));
        assert_eq!(
            header.first_of(&["EXPTIME", "EXPOSURE"]),
            Some(("EXPOSURE", "300.0"))
        );
    }

    #[test]
    fn test_read_header_spanning_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.fits");
        let mut cards: Vec<String> = (0..40)
            .map(|i| card(&format!("KEY{:<5}= {:>20}", i, i)))
            .collect();
        cards.push(card("FILTER  = 'L'"));
        File::create(&path)
            .unwrap()
            .write_all(&header_bytes(&cards))
            .unwrap();

        let header = read_primary_header(&path).unwrap();
        assert_eq!(header.get("FILTER"), Some("L"));
        assert_eq!(header.get("KEY39"), Some("39"));
    }

    #[test]
    fn test_truncated_header_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.fits");
        File::create(&path)
            .unwrap()
            .write_all(card("SIMPLE  =                    T").as_bytes())
            .unwrap();

        let err = read_primary_header(&path).unwrap_err();
        assert!(matches!(err, CaptureError::TruncatedHeader { .. }));
        assert!(err.to_string().contains("short.fits"));
    }

    #[test]
    fn test_header_without_end_beyond_block_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.fits");
        let cards: String = (0..(MAX_HEADER_BLOCKS + 1) * (BLOCK_SIZE / CARD_SIZE))
            .map(|i| card(&format!("K{:<7}= {:>20}", i, i)))
            .collect();
        File::create(&path)
            .unwrap()
            .write_all(cards.as_bytes())
            .unwrap();

        let err = read_primary_header(&path).unwrap_err();
        assert!(matches!(
            err,
            CaptureError::OversizedHeader { blocks, .. } if blocks == MAX_HEADER_BLOCKS
        ));
        assert!(err.to_string().contains("exceeds 36 blocks"));
    }

    #[test]
    fn test_repeated_keyword_keeps_first_value() {
        let mut keywords = HashMap::new();
        let cards = header_bytes(&[card("FILTER  = 'L'"), card("FILTER  = 'R'")]);
        assert!(parse_header_block(&cards, &mut keywords));
        assert_eq!(keywords.get("FILTER").map(String::as_str), Some("L"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_primary_header(&dir.path().join("nope.fits")).unwrap_err();
        assert!(matches!(err, CaptureError::Io { .. }));
    }
}
