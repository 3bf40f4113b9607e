//! Canonical Bible metadata: the 66-book canon with chapter and verse
//! counts (KJV versification), canonical ordering, and book-name
//! normalization for common abbreviations.
//!
//! This table is the read-only reference data behind write-boundary
//! validation and canonical sorting. It never changes at runtime.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Which testament a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Testament {
    /// The 39 Old Testament books (Genesis through Malachi).
    Old,
    /// The 27 New Testament books (Matthew through Revelation).
    New,
}

/// One entry in the canonical book table.
#[derive(Debug, Clone, Copy)]
pub struct BookInfo {
    /// Canonical book name.
    pub name: &'static str,
    /// Old or New Testament.
    pub testament: Testament,
    /// Verse count of each chapter; length is the chapter count.
    pub verses: &'static [u32],
}

/// The 66 books in canonical order. Canonical index is position + 1
/// (Genesis = 1 ... Revelation = 66).
pub const BOOKS: &[BookInfo] = &[
    BookInfo { name: "Genesis", testament: Testament::Old, verses: &[31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18, 34, 24, 20, 67, 34, 35, 46, 22, 35, 43, 55, 32, 20, 31, 29, 43, 36, 30, 23, 23, 57, 38, 34, 34, 28, 34, 31, 22, 33, 26] },
    BookInfo { name: "Exodus", testament: Testament::Old, verses: &[22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26, 36, 31, 33, 18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38] },
    BookInfo { name: "Leviticus", testament: Testament::Old, verses: &[17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27, 24, 33, 44, 23, 55, 46, 34] },
    BookInfo { name: "Numbers", testament: Testament::Old, verses: &[54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50, 13, 32, 22, 29, 35, 41, 30, 25, 18, 65, 23, 31, 40, 16, 54, 42, 56, 29, 34, 13] },
    BookInfo { name: "Deuteronomy", testament: Testament::Old, verses: &[46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22, 20, 22, 21, 20, 23, 30, 25, 22, 19, 19, 26, 68, 29, 20, 30, 52, 29, 12] },
    BookInfo { name: "Joshua", testament: Testament::Old, verses: &[18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10, 18, 28, 51, 9, 45, 34, 16, 33] },
    BookInfo { name: "Judges", testament: Testament::Old, verses: &[36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31, 13, 31, 30, 48, 25] },
    BookInfo { name: "Ruth", testament: Testament::Old, verses: &[22, 23, 18, 22] },
    BookInfo { name: "1 Samuel", testament: Testament::Old, verses: &[28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23, 58, 30, 24, 42, 15, 23, 29, 22, 44, 25, 12, 25, 11, 31, 13] },
    BookInfo { name: "2 Samuel", testament: Testament::Old, verses: &[27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 33, 43, 26, 22, 51, 39, 25] },
    BookInfo { name: "1 Kings", testament: Testament::Old, verses: &[53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43, 29, 53] },
    BookInfo { name: "2 Kings", testament: Testament::Old, verses: &[18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20, 41, 37, 37, 21, 26, 20, 37, 20, 30] },
    BookInfo { name: "1 Chronicles", testament: Testament::Old, verses: &[54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43, 27, 17, 19, 8, 30, 19, 32, 31, 31, 32, 34, 21, 30] },
    BookInfo { name: "2 Chronicles", testament: Testament::Old, verses: &[17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14, 19, 34, 11, 37, 20, 12, 21, 27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23] },
    BookInfo { name: "Ezra", testament: Testament::Old, verses: &[11, 70, 13, 24, 17, 22, 28, 36, 15, 44] },
    BookInfo { name: "Nehemiah", testament: Testament::Old, verses: &[11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31] },
    BookInfo { name: "Esther", testament: Testament::Old, verses: &[22, 23, 15, 17, 14, 14, 10, 17, 32, 3] },
    BookInfo { name: "Job", testament: Testament::Old, verses: &[22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22, 16, 21, 29, 29, 34, 30, 17, 25, 6, 14, 23, 28, 25, 31, 40, 22, 33, 37, 16, 33, 24, 41, 30, 24, 34, 17] },
    BookInfo { name: "Psalms", testament: Testament::Old, verses: &[6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31, 6, 10, 22, 12, 14, 9, 11, 12, 24, 11, 22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26, 17, 11, 9, 14, 20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10, 13, 20, 7, 35, 36, 5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19, 16, 8, 18, 12, 13, 17, 7, 18, 52, 17, 16, 15, 5, 23, 11, 13, 12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7, 10, 10, 9, 8, 18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21, 26, 9, 8, 24, 13, 10, 7, 12, 15, 21, 10, 20, 14, 9, 6] },
    BookInfo { name: "Proverbs", testament: Testament::Old, verses: &[33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33, 28, 24, 29, 30, 31, 29, 35, 34, 28, 28, 27, 28, 27, 33, 31] },
    BookInfo { name: "Ecclesiastes", testament: Testament::Old, verses: &[18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14] },
    BookInfo { name: "Song of Solomon", testament: Testament::Old, verses: &[17, 17, 11, 16, 16, 13, 13, 14] },
    BookInfo { name: "Isaiah", testament: Testament::Old, verses: &[31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17, 25, 18, 23, 12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28, 28, 25, 13, 15, 22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12, 25, 24] },
    BookInfo { name: "Jeremiah", testament: Testament::Old, verses: &[19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18, 14, 30, 40, 10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18, 22, 13, 30, 5, 28, 7, 47, 39, 46, 64, 34] },
    BookInfo { name: "Lamentations", testament: Testament::Old, verses: &[22, 22, 66, 22, 22] },
    BookInfo { name: "Ezekiel", testament: Testament::Old, verses: &[28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 49, 32, 31, 49, 27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26, 20, 27, 31, 25, 24, 23, 35] },
    BookInfo { name: "Daniel", testament: Testament::Old, verses: &[21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13] },
    BookInfo { name: "Hosea", testament: Testament::Old, verses: &[11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9] },
    BookInfo { name: "Joel", testament: Testament::Old, verses: &[20, 32, 21] },
    BookInfo { name: "Amos", testament: Testament::Old, verses: &[15, 16, 15, 13, 27, 14, 17, 14, 15] },
    BookInfo { name: "Obadiah", testament: Testament::Old, verses: &[21] },
    BookInfo { name: "Jonah", testament: Testament::Old, verses: &[17, 10, 10, 11] },
    BookInfo { name: "Micah", testament: Testament::Old, verses: &[16, 13, 12, 13, 15, 16, 20] },
    BookInfo { name: "Nahum", testament: Testament::Old, verses: &[15, 13, 19] },
    BookInfo { name: "Habakkuk", testament: Testament::Old, verses: &[17, 20, 19] },
    BookInfo { name: "Zephaniah", testament: Testament::Old, verses: &[18, 15, 20] },
    BookInfo { name: "Haggai", testament: Testament::Old, verses: &[15, 23] },
    BookInfo { name: "Zechariah", testament: Testament::Old, verses: &[21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21] },
    BookInfo { name: "Malachi", testament: Testament::Old, verses: &[14, 17, 18, 6] },
    BookInfo { name: "Matthew", testament: Testament::New, verses: &[25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46, 46, 39, 51, 46, 75, 66, 20] },
    BookInfo { name: "Mark", testament: Testament::New, verses: &[45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20] },
    BookInfo { name: "Luke", testament: Testament::New, verses: &[80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47, 38, 71, 56, 53] },
    BookInfo { name: "John", testament: Testament::New, verses: &[51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25] },
    BookInfo { name: "Acts", testament: Testament::New, verses: &[26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 41, 38, 40, 30, 35, 27, 27, 32, 44, 31] },
    BookInfo { name: "Romans", testament: Testament::New, verses: &[32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27] },
    BookInfo { name: "1 Corinthians", testament: Testament::New, verses: &[31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24] },
    BookInfo { name: "2 Corinthians", testament: Testament::New, verses: &[24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14] },
    BookInfo { name: "Galatians", testament: Testament::New, verses: &[24, 21, 29, 31, 26, 18] },
    BookInfo { name: "Ephesians", testament: Testament::New, verses: &[23, 22, 21, 32, 33, 24] },
    BookInfo { name: "Philippians", testament: Testament::New, verses: &[30, 30, 21, 23] },
    BookInfo { name: "Colossians", testament: Testament::New, verses: &[29, 23, 25, 18] },
    BookInfo { name: "1 Thessalonians", testament: Testament::New, verses: &[10, 20, 13, 18, 28] },
    BookInfo { name: "2 Thessalonians", testament: Testament::New, verses: &[12, 17, 18] },
    BookInfo { name: "1 Timothy", testament: Testament::New, verses: &[20, 15, 16, 16, 25, 21] },
    BookInfo { name: "2 Timothy", testament: Testament::New, verses: &[18, 26, 17, 22] },
    BookInfo { name: "Titus", testament: Testament::New, verses: &[16, 15, 15] },
    BookInfo { name: "Philemon", testament: Testament::New, verses: &[25] },
    BookInfo { name: "Hebrews", testament: Testament::New, verses: &[14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25] },
    BookInfo { name: "James", testament: Testament::New, verses: &[27, 26, 18, 17, 20] },
    BookInfo { name: "1 Peter", testament: Testament::New, verses: &[25, 25, 22, 19, 14] },
    BookInfo { name: "2 Peter", testament: Testament::New, verses: &[21, 22, 18] },
    BookInfo { name: "1 John", testament: Testament::New, verses: &[10, 29, 24, 21, 21] },
    BookInfo { name: "2 John", testament: Testament::New, verses: &[13] },
    BookInfo { name: "3 John", testament: Testament::New, verses: &[14] },
    BookInfo { name: "Jude", testament: Testament::New, verses: &[25] },
    BookInfo { name: "Revelation", testament: Testament::New, verses: &[20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21, 18, 24, 21, 15, 27, 21] },
];

/// Common abbreviations and variations mapped to canonical book names.
const ALIASES: &[(&str, &str)] = &[
    ("gen", "Genesis"),
    ("ex", "Exodus"),
    ("exod", "Exodus"),
    ("lev", "Leviticus"),
    ("num", "Numbers"),
    ("deut", "Deuteronomy"),
    ("josh", "Joshua"),
    ("judg", "Judges"),
    ("1 sam", "1 Samuel"),
    ("2 sam", "2 Samuel"),
    ("1 kgs", "1 Kings"),
    ("2 kgs", "2 Kings"),
    ("1 chr", "1 Chronicles"),
    ("1 chronicles", "1 Chronicles"),
    ("2 chr", "2 Chronicles"),
    ("2 chronicles", "2 Chronicles"),
    ("neh", "Nehemiah"),
    ("esth", "Esther"),
    ("ps", "Psalms"),
    ("psalm", "Psalms"),
    ("prov", "Proverbs"),
    ("eccl", "Ecclesiastes"),
    ("song", "Song of Solomon"),
    ("song of songs", "Song of Solomon"),
    ("isa", "Isaiah"),
    ("jer", "Jeremiah"),
    ("lam", "Lamentations"),
    ("ezek", "Ezekiel"),
    ("dan", "Daniel"),
    ("hos", "Hosea"),
    ("obad", "Obadiah"),
    ("mic", "Micah"),
    ("nah", "Nahum"),
    ("hab", "Habakkuk"),
    ("zeph", "Zephaniah"),
    ("hag", "Haggai"),
    ("zech", "Zechariah"),
    ("mal", "Malachi"),
    ("matt", "Matthew"),
    ("rom", "Romans"),
    ("1 cor", "1 Corinthians"),
    ("2 cor", "2 Corinthians"),
    ("gal", "Galatians"),
    ("eph", "Ephesians"),
    ("phil", "Philippians"),
    ("col", "Colossians"),
    ("1 thess", "1 Thessalonians"),
    ("2 thess", "2 Thessalonians"),
    ("1 tim", "1 Timothy"),
    ("2 tim", "2 Timothy"),
    ("philem", "Philemon"),
    ("heb", "Hebrews"),
    ("jas", "James"),
    ("1 pet", "1 Peter"),
    ("2 pet", "2 Peter"),
    ("rev", "Revelation"),
    ("revelations", "Revelation"),
];

lazy_static! {
    /// Lowercased canonical name -> zero-based position in [`BOOKS`].
    static ref POSITION: HashMap<String, usize> = BOOKS
        .iter()
        .enumerate()
        .map(|(i, b)| (b.name.to_lowercase(), i))
        .collect();

    /// Alias -> canonical name lookup, including lowercased canonical names.
    static ref ALIAS_MAP: HashMap<String, &'static str> = {
        let mut m: HashMap<String, &'static str> = BOOKS
            .iter()
            .map(|b| (b.name.to_lowercase(), b.name))
            .collect();
        for &(alias, canonical) in ALIASES {
            m.insert(alias.to_string(), canonical);
            // Tolerate missing space in numbered abbreviations ("1sam")
            if alias.contains(' ') {
                m.insert(alias.replace(' ', ""), canonical);
            }
        }
        m
    };
}

/// Normalize a book name or common abbreviation to its canonical form.
///
/// Returns `None` for names outside the 66-book canon.
pub fn normalize_book_name(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    let trimmed = lower.trim();

    if let Some(&canonical) = ALIAS_MAP.get(trimmed) {
        return Some(canonical);
    }

    // Try without spaces for numbered books ("1john")
    let no_space = trimmed.replace(' ', "");
    ALIAS_MAP.get(no_space.as_str()).copied()
}

/// Canonical 1-based index of a book (Genesis = 1 ... Revelation = 66),
/// or `None` if the name is not in the canon.
pub fn book_index(name: &str) -> Option<u32> {
    let canonical = normalize_book_name(name)?;
    POSITION
        .get(&canonical.to_lowercase())
        .map(|&i| u32::try_from(i).unwrap_or(u32::MAX) + 1)
}

/// Number of chapters in a book, or `None` for unknown books.
pub fn chapter_count(name: &str) -> Option<u32> {
    let canonical = normalize_book_name(name)?;
    let &pos = POSITION.get(&canonical.to_lowercase())?;
    BOOKS.get(pos).map(|b| u32::try_from(b.verses.len()).unwrap_or(u32::MAX))
}

/// Number of verses in a chapter (1-based), or `None` if the book or
/// chapter does not exist.
pub fn verse_count(name: &str, chapter: u32) -> Option<u32> {
    let canonical = normalize_book_name(name)?;
    let &pos = POSITION.get(&canonical.to_lowercase())?;
    let chapter_idx = usize::try_from(chapter.checked_sub(1)?).ok()?;
    BOOKS.get(pos)?.verses.get(chapter_idx).copied()
}

/// Whether a name (or recognized abbreviation) belongs to the canon.
pub fn is_canonical_book(name: &str) -> bool {
    normalize_book_name(name).is_some()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_canon_has_66_books() {
        assert_eq!(BOOKS.len(), 66);
        let old = BOOKS.iter().filter(|b| b.testament == Testament::Old).count();
        let new = BOOKS.iter().filter(|b| b.testament == Testament::New).count();
        assert_eq!(old, 39);
        assert_eq!(new, 27);
    }

    #[test]
    fn test_book_index_endpoints() {
        assert_eq!(book_index("Genesis"), Some(1));
        assert_eq!(book_index("Revelation"), Some(66));
        assert_eq!(book_index("Narnia"), None);
    }

    #[test]
    fn test_book_index_case_insensitive() {
        assert_eq!(book_index("genesis"), Some(1));
        assert_eq!(book_index("EXODUS"), Some(2));
    }

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(normalize_book_name("ps"), Some("Psalms"));
        assert_eq!(normalize_book_name("1john"), Some("1 John"));
        assert_eq!(normalize_book_name("Song of Songs"), Some("Song of Solomon"));
        assert_eq!(normalize_book_name("nonsense"), None);
    }

    #[test]
    fn test_chapter_counts() {
        assert_eq!(chapter_count("Genesis"), Some(50));
        assert_eq!(chapter_count("Psalms"), Some(150));
        assert_eq!(chapter_count("Obadiah"), Some(1));
        assert_eq!(chapter_count("Revelation"), Some(22));
    }

    #[test]
    fn test_verse_counts() {
        assert_eq!(verse_count("Genesis", 1), Some(31));
        assert_eq!(verse_count("Psalms", 119), Some(176));
        assert_eq!(verse_count("Jude", 1), Some(25));
        // Chapter out of range
        assert_eq!(verse_count("Genesis", 51), None);
        assert_eq!(verse_count("Genesis", 0), None);
    }
}
