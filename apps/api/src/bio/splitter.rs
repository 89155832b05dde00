//! Splits the final generated text into the bios the prompt requested.
//!
//! The split is literal string-offset logic, not a parser: find the first
//! '1', skip it plus the two label-delimiter characters (". "), and cut the
//! remainder at every "2." marker. Malformed model output degrades to fewer,
//! more, or empty segments — never an error.

/// Seam for the display split so the marker heuristic can be replaced with a
/// structured multi-bio response format without touching the rest of the
/// system.
pub trait BioSplitter: Send + Sync {
    /// Splits the frozen Generated Text into displayable segments.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Production splitter: the "1" / "2." marker heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerSplitter;

impl BioSplitter for MarkerSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        // indexOf semantics: a missing '1' leaves the offset at -1 + 3 = 2.
        let offset = match text.find('1') {
            Some(i) => i + 3,
            None => 2,
        };

        // Offsets past the end or off a UTF-8 boundary degrade to an empty
        // remainder rather than panicking.
        let remainder = text.get(offset..).unwrap_or("");

        remainder.split("2.").map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        MarkerSplitter.split(text)
    }

    #[test]
    fn test_well_formed_text_yields_two_segments() {
        let bios = split("1. Bio one text 2. Bio two text");
        assert_eq!(bios, vec!["Bio one text ", " Bio two text"]);
    }

    #[test]
    fn test_preamble_before_first_marker_is_dropped() {
        let bios = split("Here are your bios:\n\n1. First bio.2. Second bio.");
        assert_eq!(bios, vec!["First bio.", " Second bio."]);
    }

    #[test]
    fn test_missing_second_marker_yields_single_segment() {
        let bios = split("1. Only one bio here");
        assert_eq!(bios, vec!["Only one bio here"]);
    }

    #[test]
    fn test_missing_one_marker_degrades_to_fixed_offset() {
        // No '1' anywhere: the offset arithmetic lands on 2, so the first
        // two characters are dropped.
        let bios = split("abcdef");
        assert_eq!(bios, vec!["cdef"]);
    }

    #[test]
    fn test_text_shorter_than_offset_yields_one_empty_segment() {
        assert_eq!(split("1"), vec![""]);
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn test_offset_off_utf8_boundary_degrades_to_empty() {
        // '1' is the last byte; the +3 offset lands past the end.
        assert_eq!(split("☕1"), vec![""]);
    }

    #[test]
    fn test_extra_second_markers_yield_extra_segments() {
        // The split cuts at every "2." occurrence, matching the page's
        // behavior; well-formed model output contains exactly one.
        let bios = split("1. a2. b2. c");
        assert_eq!(bios, vec!["a", " b", " c"]);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let splitter: Box<dyn BioSplitter> = Box::new(MarkerSplitter);
        assert_eq!(splitter.split("1. A2. B"), vec!["A", " B"]);
    }

    #[test]
    fn test_numbered_markdown_survives_inside_segments() {
        let text = "1. I build **EdTech** tools.\n\n2. I ship software with 10x impact.";
        let bios = split(text);
        assert_eq!(bios.len(), 2);
        assert_eq!(bios[0], "I build **EdTech** tools.\n\n");
        assert_eq!(bios[1], " I ship software with 10x impact.");
    }
}
