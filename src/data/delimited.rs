//! Delimiter handling for the files we read.

use std::str::FromStr;

use crate::multi_eq_ignore_ascii_case;

/// The field delimiter of a file. Either given explicitly (a single ASCII
/// character or one of a few well-known names) or sniffed from content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delimiter(u8);

impl Delimiter {
    pub const SEMICOLON: Delimiter = Delimiter(b';');

    /// The raw byte handed to the csv reader.
    #[inline]
    pub fn as_byte(self) -> u8 {
        self.0
    }

    /// Guesses the delimiter from the first line of a file by picking the
    /// candidate that occurs most often. Ties and a candidate-free line fall
    /// back to the semicolon, which is what the exports we care about use.
    pub fn sniff(contents: &str) -> Delimiter {
        const CANDIDATES: [u8; 4] = [b';', b',', b'\t', b'|'];

        let first_line = contents.lines().next().unwrap_or("");
        let counts = CANDIDATES
            .map(|candidate| bytecount(first_line, candidate));

        let mut best = Delimiter::SEMICOLON;
        let mut best_count = 0;
        for (candidate, count) in CANDIDATES.iter().zip(counts) {
            if count > best_count {
                best = Delimiter(*candidate);
                best_count = count;
            }
        }

        best
    }
}

#[inline]
fn bytecount(haystack: &str, needle: u8) -> usize {
    haystack.bytes().filter(|b| *b == needle).count()
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if multi_eq_ignore_ascii_case!(s, "comma") {
            Ok(Delimiter(b','))
        } else if multi_eq_ignore_ascii_case!(s, "semicolon") {
            Ok(Delimiter(b';'))
        } else if multi_eq_ignore_ascii_case!(s, "tab") {
            Ok(Delimiter(b'\t'))
        } else if multi_eq_ignore_ascii_case!(s, "pipe") {
            Ok(Delimiter(b'|'))
        } else if multi_eq_ignore_ascii_case!(s, "space") {
            Ok(Delimiter(b' '))
        } else {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(Delimiter(c as u8)),
                _ => Err(format!(
                    "'{s}' is not a valid delimiter. Use a single ASCII character or one of \
                    'comma', 'semicolon', 'tab', 'pipe', or 'space'."
                )),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn named_delimiters() {
        assert_eq!("comma".parse(), Ok(Delimiter(b',')));
        assert_eq!("Semicolon".parse(), Ok(Delimiter(b';')));
        assert_eq!("TAB".parse(), Ok(Delimiter(b'\t')));
        assert_eq!("pipe".parse(), Ok(Delimiter(b'|')));
        assert_eq!("space".parse(), Ok(Delimiter(b' ')));
    }

    #[test]
    fn single_character_delimiters() {
        assert_eq!(";".parse(), Ok(Delimiter(b';')));
        assert_eq!("#".parse(), Ok(Delimiter(b'#')));
    }

    #[test]
    fn invalid_delimiters() {
        assert!("ab".parse::<Delimiter>().is_err());
        assert!("".parse::<Delimiter>().is_err());
        assert!("ä".parse::<Delimiter>().is_err());
        assert!("point".parse::<Delimiter>().is_err());
    }

    #[test]
    fn sniffing_picks_the_most_frequent_candidate() {
        assert_eq!(
            Delimiter::sniff("Name;Vorname;Jahrgang\nMeier;Anna;2024"),
            Delimiter(b';')
        );
        assert_eq!(
            Delimiter::sniff("Name,Vorname,Jahrgang,Klasse\na,b,c,d"),
            Delimiter(b',')
        );
        assert_eq!(Delimiter::sniff("a\tb\tc"), Delimiter(b'\t'));
    }

    #[test]
    fn sniffing_defaults_to_semicolon() {
        assert_eq!(Delimiter::sniff("just one header"), Delimiter::SEMICOLON);
        assert_eq!(Delimiter::sniff(""), Delimiter::SEMICOLON);
    }

    #[test]
    fn sniffing_only_looks_at_the_first_line() {
        // The second line is full of commas, but the header decides.
        assert_eq!(
            Delimiter::sniff("a;b\n1,2,3,4,5,6"),
            Delimiter(b';')
        );
    }
}
